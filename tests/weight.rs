use float_eq::assert_float_eq;
use proptest::prelude::*;
use rstest::rstest;
use weight::{weight, Unit, Weight, WeightError, ALIASES};

const EPS: f64 = f64::EPSILON;

fn init_logging() {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
}

fn unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

// Every spelling a unit may be given in: canonical keys, aliases, upper case
// versions of both.
fn any_unit_name() -> impl Strategy<Value = (String, Unit)> {
    let mut names: Vec<(String, Unit)> = Unit::ALL.iter()
        .map(|u| (u.key().to_owned(), *u))
        .chain(ALIASES.iter().map(|&(a, u)| (a.to_owned(), u)))
        .collect();
    let upper: Vec<_> = names.iter().map(|(n, u)| (n.to_uppercase(), *u)).collect();
    names.extend(upper);
    prop::sample::select(names)
}

proptest! {
    #[test]
    fn value_round_trips_through_its_unit((name, unit) in any_unit_name(), v in 1e-6 .. 1e9_f64) {
        let w = Weight::new(None, [(name.as_str(), v)]).unwrap();
        assert_float_eq!(w.magnitude_in(unit), v, r2nd <= 2.0 * EPS);
        prop_assert_eq!(w.default_unit(), Some(unit));
    }

    #[test]
    fn sum_and_difference_act_on_kilograms(
        (ua, a) in (unit(), 0.0 .. 1e6_f64),
        (ub, b) in (unit(), 0.0 .. 1e6_f64),
    ) {
        let (a, b) = (Weight::from_unit(ua, a), Weight::from_unit(ub, b));
        prop_assert_eq!((a + b).kg(), a.kg() + b.kg());
        prop_assert_eq!((a - b).kg(), a.kg() - b.kg());
        prop_assert_eq!((a + b).default_unit(), Some(ua));
        prop_assert_eq!((a - b).default_unit(), Some(ua));
    }

    #[test]
    fn scaling_then_unscaling_is_identity(
        kg in 0.0 .. 1e6_f64,
        n  in prop_oneof![-1e3 .. -1e-3_f64, 1e-3 .. 1e3_f64],
    ) {
        let w = Weight::from_kg(kg);
        assert_float_eq!(((w * n) / n).kg(), w.kg(), r2nd <= 2.0 * EPS);
        assert_float_eq!(((n * w) / n).kg(), w.kg(), r2nd <= 2.0 * EPS);
    }

    #[test]
    fn stone_and_pounds_recombine(kg in -1e6 .. 1e6_f64) {
        let w = Weight::from_kg(kg);
        let (stone, pounds) = w.stone_and_pounds();
        prop_assert!((0.0..14.0).contains(&pounds));
        prop_assert_eq!(stone, stone.floor());
        assert_float_eq!(stone * 14.0 + pounds, w.lbs(), abs <= 1e-9 * w.lbs().abs().max(1.0));
    }

    #[test]
    fn ordering_follows_kilograms(
        (ua, a) in (unit(), 0.0 .. 1e6_f64),
        (ub, b) in (unit(), 0.0 .. 1e6_f64),
    ) {
        let (a, b) = (Weight::from_unit(ua, a), Weight::from_unit(ub, b));
        prop_assert_eq!(a.partial_cmp(&b), a.kg().partial_cmp(&b.kg()));
        prop_assert_eq!(a.compare(b), a.kg().partial_cmp(&b.kg()));
    }
}

#[test]
fn thirteen_stone_less_five_kilograms() {
    init_logging();
    let me = weight!(st = 13).unwrap();
    assert_float_eq!(me.kg(), 82.55381134, r2nd <= EPS);

    let new_me = me - weight!(kg = 5).unwrap();
    assert_float_eq!(new_me.kg(), 77.55381134, r2nd <= EPS);
    let (stone, pounds) = new_me.stone_and_pounds();
    assert_float_eq!(stone , 12.0                , r2nd <= EPS);
    assert_float_eq!(pounds,  2.9768868907561341 , r2nd <= 4.0 * EPS);
}

#[rstest]
#[case(weight!(kg = 0)    , false)]
#[case(weight!(kg = 0.0)  , false)]
#[case(weight!(g = "0")   , false)]
#[case(weight!(kg = 0.001), true )]
#[case(weight!(g = 1)     , true )]
fn truthiness(#[case] w: weight::Result<Weight>, #[case] expected: bool) {
    assert_eq!(w.unwrap().is_nonzero(), expected);
}

#[test]
fn aliases_in_any_case() {
    init_logging();
    let st = weight!(st = 1).unwrap().kg();
    assert_eq!(weight!(stone = 1).unwrap().kg(), st);
    assert_eq!(weight!(STONE = 1).unwrap().kg(), st);
    assert_eq!(weight!(Stone = 1).unwrap().kg(), st);
    assert_eq!(weight!(ST = 1).unwrap().kg(), st);
    assert_eq!(weight!(STONE = 1).unwrap().default_unit(), Some(Unit::St));
}

#[test]
fn unknown_unit() {
    let err = weight!(banana = 1).unwrap_err();
    assert!(matches!(err, WeightError::UnknownUnit { .. }));
    assert_eq!(err.unknown_unit(), Some("banana"));
}

#[test]
fn type_mismatch() {
    let w = weight!(kg = 1).unwrap();
    assert!(matches!(w.try_add(5), Err(WeightError::TypeMismatch { .. })));
    assert!(matches!(w.try_mul(w), Err(WeightError::TypeMismatch { .. })));
}

#[test]
fn mixed_units_with_explicit_default() {
    let w = weight!(st = 1, lbs = 2; default = "kilogram").unwrap();
    assert_float_eq!(w.kg(), 7.25747792, r2nd <= EPS);
    assert_eq!(w.to_string(), "7.25747792 kg");
}

#[test]
fn empty_weight_cannot_be_printed_until_given_a_unit() {
    let mut w = weight!().unwrap();
    assert_eq!(w.try_to_string(), Err(WeightError::UndefinedDefaultUnit));
    w += weight!(lbs = 3).unwrap();
    assert_eq!(w.try_repr(), Err(WeightError::UndefinedDefaultUnit));
    w.set_default_unit(Unit::Lbs);
    assert_eq!(w.try_repr().unwrap(), "Weight(lbs=3.0)");
}
