//! Property-based tests for the functor, monad and hash laws.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use nebula_functional::prelude::*;
use nebula_functional::ABSENT_HASH;
use proptest::prelude::*;

fn arb_opt() -> impl Strategy<Value = Opt<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Opt::from)
}

fn arb_try() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Try::success),
        "[a-z]{1,12}".prop_map(|message| Try::failure(message)),
    ]
}

fn arb_maybe() -> impl Strategy<Value = Maybe<Box<i32>>> {
    proptest::option::of(any::<i32>()).prop_map(|o| Maybe::from(o.map(Box::new)))
}

fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn halve(n: i32) -> Opt<i32> {
    if n % 2 == 0 { Opt::some(n / 2) } else { Opt::none() }
}

fn checked_neg(n: i32) -> Try<i32> {
    Opt::from(n.checked_neg()).into_try_or("overflow")
}

fn boxed_halve(b: Box<i32>) -> Maybe<Box<i32>> {
    halve(*b).into_boxed_maybe()
}

// Failures built by separate calls carry distinct captures, so laws whose two
// sides fail independently compare the rendered error instead of identity.
fn rendered(t: Try<i32>) -> Either<String, i32> {
    t.into_either().map_left(|error| error.to_string())
}

// ============================================================================
// FUNCTOR: map(id) == id, map(g).map(f) == map(f . g)
// ============================================================================

proptest! {
    #[test]
    fn opt_map_identity(o in arb_opt()) {
        prop_assert_eq!(o.map(|x| x), o);
    }

    #[test]
    fn opt_map_composition(o in arb_opt()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(o.map(g).map(f), o.map(|x| f(g(x))));
    }

    #[test]
    fn try_map_identity(t in arb_try()) {
        prop_assert_eq!(t.clone().map(|x| x), t);
    }

    #[test]
    fn try_map_composition(t in arb_try()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(t.clone().map(g).map(f), t.map(|x| f(g(x))));
    }

    #[test]
    fn maybe_map_identity(m in arb_maybe()) {
        prop_assert_eq!(m.clone().map(|b| b), m);
    }

    #[test]
    fn maybe_map_composition(m in arb_maybe()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(
            m.clone().map(|b| Box::new(g(*b))).map(|b| Box::new(f(*b))),
            m.map(|b| Box::new(f(g(*b))))
        );
    }

    #[test]
    fn either_map_left_composition(e in arb_either()) {
        let f = |s: String| s.to_uppercase();
        let g = |s: String| s + "!";
        prop_assert_eq!(e.clone().map_left(g).map_left(f), e.map_left(|s| f(g(s))));
    }

    #[test]
    fn either_map_right_composition(e in arb_either()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(e.clone().map_right(g).map_right(f), e.map_right(|x| f(g(x))));
    }
}

// ============================================================================
// MONAD: left identity, right identity, associativity
// ============================================================================

proptest! {
    #[test]
    fn opt_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Opt::some(x).and_then(halve), halve(x));
    }

    #[test]
    fn opt_right_identity(o in arb_opt()) {
        prop_assert_eq!(o.and_then(Opt::some), o);
    }

    #[test]
    fn opt_associativity(o in arb_opt()) {
        let g = |n: i32| Opt::some(n.wrapping_add(4));
        prop_assert_eq!(
            o.and_then(halve).and_then(g),
            o.and_then(|x| halve(x).and_then(g))
        );
    }

    #[test]
    fn try_left_identity(x in any::<i32>()) {
        prop_assert_eq!(rendered(Try::success(x).and_then(checked_neg)), rendered(checked_neg(x)));
    }

    #[test]
    fn try_right_identity(t in arb_try()) {
        prop_assert_eq!(t.clone().and_then(Try::success), t);
    }

    #[test]
    fn try_associativity(t in arb_try()) {
        let g = |n: i32| Try::success(n.wrapping_add(4));
        prop_assert_eq!(
            rendered(t.clone().and_then(checked_neg).and_then(g)),
            rendered(t.and_then(|x| checked_neg(x).and_then(g)))
        );
    }

    #[test]
    fn maybe_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Maybe::some(Box::new(x)).and_then(boxed_halve), boxed_halve(Box::new(x)));
    }

    #[test]
    fn maybe_right_identity(m in arb_maybe()) {
        prop_assert_eq!(m.clone().and_then(Maybe::some), m);
    }

    #[test]
    fn maybe_associativity(m in arb_maybe()) {
        let g = |b: Box<i32>| Maybe::some(Box::new(b.wrapping_add(4)));
        prop_assert_eq!(
            m.clone().and_then(boxed_halve).and_then(g),
            m.and_then(|b| boxed_halve(b).and_then(g))
        );
    }

    #[test]
    fn try_failure_short_circuits(message in "[a-z]{1,12}") {
        let mut invoked = false;
        let result = Try::<i32>::failure(message).and_then(|x| {
            invoked = true;
            Try::success(x)
        });
        prop_assert!(result.is_failure());
        prop_assert!(!invoked);
    }

    #[test]
    fn interface_flat_map_agrees_with_inherent(o in arb_opt()) {
        prop_assert_eq!(Optional::flat_map(o, halve), o.and_then(halve));
    }
}

// ============================================================================
// EQUALITY AND HASHING: equal values hash equally, absence hashes the sentinel
// ============================================================================

proptest! {
    #[test]
    fn equal_opts_hash_equally(a in arb_opt(), b in arb_opt()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn present_values_are_equal_iff_payloads_are(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(Opt::some(a) == Opt::some(b), a == b);
        prop_assert_eq!(Maybe::some(Box::new(a)) == Maybe::some(Box::new(b)), a == b);
    }

    #[test]
    fn failures_hash_to_the_absent_sentinel(message in "[a-z]{1,12}") {
        let failure = Try::<u64>::failure(message);
        prop_assert_eq!(hash_of(&failure), hash_of(&ABSENT_HASH));
        prop_assert_eq!(hash_of(&Opt::<String>::none()), hash_of(&Nothing));
    }

    #[test]
    fn round_trip_through_try_keeps_a_present_value(x in any::<i32>(), message in "[a-z]{1,12}") {
        let back = Opt::some(x).into_try_or_else(|| message).into_opt();
        prop_assert_eq!(back.value().copied(), Ok(x));
    }
}
