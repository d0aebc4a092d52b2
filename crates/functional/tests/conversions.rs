//! Conversion table and cross-type behaviour.

use std::rc::Rc;
use std::sync::Arc;

use nebula_functional::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Opt::some(1), true)]
#[case(Opt::none(), false)]
fn opt_to_maybe_preserves_presence(#[case] opt: Opt<i32>, #[case] present: bool) {
    let maybe: Maybe<Arc<i32>> = opt.map(Arc::new).into();
    assert_eq!(maybe.has_value(), present);
    assert_eq!(Opt::from(maybe), opt.map(Arc::new));
}

#[rstest]
#[case(Some("a"))]
#[case(None)]
fn std_option_round_trips(#[case] native: Option<&'static str>) {
    assert_eq!(Option::<&str>::from(Opt::from(native)), native);
    assert_eq!(Maybe::<&str>::from(native).into_native(), native);
}

#[rstest]
#[case(Try::success(4), Either::Right(4))]
#[case(Try::failure(Error::msg("shared")), Either::Left(Error::msg("other")))]
fn try_to_either_keeps_the_side(#[case] t: Try<u8>, #[case] expected: Either<Error, u8>) {
    let either = t.into_either();
    assert_eq!(either.is_left(), expected.is_left());
    assert_eq!(either.right_opt(), expected.right_opt());
}

#[rstest]
#[case::absent(Opt::none(), None)]
#[case::present(Opt::some(5), Some(5))]
fn absent_to_try_uses_the_factory(#[case] opt: Opt<i32>, #[case] expected: Option<i32>) {
    let t = opt.into_try_or_else(|| "no value configured");
    assert_eq!(t.clone().into_opt(), Opt::from(expected));
    if expected.is_none() {
        assert_eq!(t.error().unwrap().to_string(), "no value configured");
    }
}

#[test]
fn either_and_result_share_the_right_side() {
    let result: Result<u8> = Either::<Error, u8>::Right(9).into();
    assert_eq!(result.unwrap(), 9);

    let either: Either<String, u8> = "x".parse::<u8>().map_err(|e| e.to_string()).into();
    assert!(either.is_left());
}

#[test]
fn result_becomes_try_and_back() {
    let t: Try<u16> = "80".parse::<u16>().into();
    assert_eq!(t.clone().into_result().unwrap(), 80);

    let native: std::result::Result<u16, Error> = t.into();
    assert_eq!(native.unwrap(), 80);
}

#[test]
fn lossy_conversion_is_explicit() {
    let failure: Try<Rc<str>> = Try::failure("lost detail");
    assert_eq!(failure.clone().into_opt(), Nothing);
    assert_eq!(failure.into_maybe(), Nothing);
}

#[test]
fn absent_values_equal_nothing_across_payloads() {
    assert_eq!(Opt::<u8>::none(), Nothing);
    assert_eq!(Nothing, Opt::<String>::none());
    assert_eq!(Maybe::<Box<[u8]>>::none(), Nothing);
    let from_nothing: Opt<Vec<u8>> = Nothing.into();
    assert!(from_nothing.is_none());
}

#[test]
fn opt_and_maybe_compare_directly() {
    let b = Box::new(2);
    assert_eq!(Opt::some(b.clone()), Maybe::some(b));
    assert_ne!(Opt::some(Box::new(1)), Maybe::some(Box::new(2)));
}

#[test]
fn raw_pointers_collapse_null() {
    let mut value = 3;
    let present = Maybe::from_ptr(&raw mut value);
    assert!(present.has_value());
    assert_eq!(present.into_ptr(), &raw mut value);

    let absent = Maybe::<std::ptr::NonNull<i32>>::from_ptr(std::ptr::null_mut());
    assert_eq!(absent, Nothing);
    assert!(absent.into_ptr().is_null());
}
