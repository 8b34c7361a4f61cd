/// Build a `Weight` from `unit = value` pairs, optionally followed by
/// `; default = "unit"`.
///
/// Expands to a call to `Weight::new`, so it evaluates to a `Result`.
///
/// ```
/// use weight::{weight, Unit};
///
/// let w = weight!(st = 1, lbs = 2).unwrap();
/// assert_eq!(w.default_unit(), Some(Unit::Lbs));
///
/// let w = weight!(st = 1, lbs = 2; default = "kg").unwrap();
/// assert_eq!(w.default_unit(), Some(Unit::Kg));
///
/// assert!(weight!(banana = 1).is_err());
/// assert_eq!(weight!().unwrap().kg(), 0.0);
/// ```
#[macro_export]
macro_rules! weight {
    () => {
        $crate::Weight::new(None, ::std::iter::empty::<(&str, $crate::UnitValue)>())
    };
    ($($unit:ident = $value:expr),+ ; default = $default:expr) => {
        $crate::Weight::new(Some($default), [$((stringify!($unit), $crate::UnitValue::from($value))),+])
    };
    ($($unit:ident = $value:expr),+ $(,)?) => {
        $crate::Weight::new(None, [$((stringify!($unit), $crate::UnitValue::from($value))),+])
    };
}
