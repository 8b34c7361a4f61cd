//! The `Weight` value type: construction and conversion between units.

use std::cmp::Ordering;

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use snafu::{OptionExt, ResultExt};
use units::{kg, kg_, Mass, Unit};

use crate::error::{InvalidValueSnafu, Result, UndefinedDefaultUnitSnafu};

/// Store and convert between weights.
///
/// The magnitude is held in kilograms, whatever unit it was built from. The
/// default unit only decides how the weight is printed.
///
/// In-place operators take `&mut self`: sharing one `Weight` between threads
/// which modify it needs external synchronization.
#[derive(Clone, Copy)]
pub struct Weight {
    mass: Mass,
    default_unit: Option<Unit>,
}

/// A value given to `Weight::new` for one unit: either a number or a string
/// which parses as one.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitValue {
    Number(f64),
    Text(String),
}

impl UnitValue {
    fn number_of(&self, unit: Unit) -> Result<f64> {
        match self {
            UnitValue::Number(x) => Ok(*x),
            UnitValue::Text(s) => s.trim().parse().context(InvalidValueSnafu { unit, value: s.clone() }),
        }
    }
}

/// Any number as an `f64`. Values which `f64` cannot hold become NaN.
pub(crate) fn to_number<N: ToPrimitive>(n: N) -> f64 { n.to_f64().unwrap_or(f64::NAN) }

macro_rules! unit_value_from {
    ($($t:ty)*) => {
        $(impl From<$t> for UnitValue {
            fn from(x: $t) -> Self { UnitValue::Number(to_number(x)) }
        })*
    };
}

unit_value_from!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64 Decimal);

impl From<&str> for UnitValue {
    fn from(s: &str) -> Self { UnitValue::Text(s.to_owned()) }
}

impl From<String> for UnitValue {
    fn from(s: String) -> Self { UnitValue::Text(s) }
}

impl Weight {

    /// Sum up `unit_values`, a sequence of `(unit name, value)` pairs, into a
    /// single `Weight`.
    ///
    /// Unit names may be canonical keys, aliases, or either of those in any
    /// case. The unit of the last pair becomes the default unit, unless
    /// `default_unit` names one explicitly. With no pairs at all the weight is
    /// zero and has no default unit.
    pub fn new<I, S, V>(default_unit: Option<&str>, unit_values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<UnitValue>,
    {
        let mut mass = kg(0.0);
        let mut last = None;
        for (name, value) in unit_values {
            let unit = Unit::resolve(name.as_ref())?;
            let x = value.into().number_of(unit)?;
            mass = mass + unit.mass(x);
            last = Some(unit);
        }
        let default_unit = match default_unit.filter(|name| !name.is_empty()) {
            Some(name) => {
                let unit = Unit::resolve(name)?;
                debug!("default unit `{unit}` given explicitly, inferred `{last:?}` ignored");
                Some(unit)
            }
            None => last,
        };
        Ok(Self { mass, default_unit })
    }

    pub fn from_unit(unit: Unit, x: f64) -> Self {
        Self { mass: unit.mass(x), default_unit: Some(unit) }
    }

    pub fn from_g  (x: f64) -> Self { Self::from_unit(Unit::G  , x) }
    pub fn from_kg (x: f64) -> Self { Self::from_unit(Unit::Kg , x) }
    pub fn from_lbs(x: f64) -> Self { Self::from_unit(Unit::Lbs, x) }
    pub fn from_st (x: f64) -> Self { Self::from_unit(Unit::St , x) }

    pub fn from_mass(mass: Mass, default_unit: Unit) -> Self {
        Self { mass, default_unit: Some(default_unit) }
    }

    pub(crate) fn with_mass(self, mass: Mass) -> Self { Self { mass, ..self } }

    pub(crate) fn set_mass(&mut self, mass: Mass) { self.mass = mass; }

    /// The magnitude of this weight expressed in `unit`.
    pub fn get(&self, unit: Unit) -> f64 { unit.of(self.mass) }

    pub fn magnitude_in(&self, unit: Unit) -> f64 { self.get(unit) }

    /// Like `get`, but the unit is named by its canonical key (`"g"`, `"kg"`,
    /// `"lbs"` or `"st"`). Aliases are not accepted here.
    pub fn get_named(&self, name: &str) -> Result<f64> {
        Ok(self.get(Unit::from_key(name)?))
    }

    pub fn g  (&self) -> f64 { self.get(Unit::G) }
    pub fn kg (&self) -> f64 { kg_(self.mass) }
    pub fn lbs(&self) -> f64 { self.get(Unit::Lbs) }
    pub fn st (&self) -> f64 { self.get(Unit::St) }

    pub fn mass(&self) -> Mass { self.mass }

    pub fn default_unit(&self) -> Option<Unit> { self.default_unit }

    pub fn set_default_unit(&mut self, unit: Unit) { self.default_unit = Some(unit); }

    pub fn with_default_unit(self, unit: Unit) -> Self {
        Self { default_unit: Some(unit), ..self }
    }

    /// The magnitude in the default unit, which must have been set.
    pub fn value_in_default(&self) -> Result<f64> {
        let unit = self.default_unit.context(UndefinedDefaultUnitSnafu)?;
        Ok(self.get(unit))
    }

    /// Whole stones and the pounds left over.
    ///
    /// The pounds are always in `[0, 14)`, so a negative weight has a negative
    /// number of stones and a positive remainder.
    pub fn stone_and_pounds(&self) -> (f64, f64) {
        let lbs = self.lbs();
        let (stone, pounds) = (lbs.div_euclid(14.0), lbs.rem_euclid(14.0));
        // `rem_euclid` rounds up to exactly 14 for tiny negative inputs
        if pounds >= 14.0 { (stone + 1.0, 0.0) }
        else              { (stone      , pounds) }
    }

    /// `false` only for a weight of exactly zero.
    pub fn is_nonzero(&self) -> bool { self.kg() != 0.0 }
}

impl Default for Weight {
    fn default() -> Self { Self { mass: kg(0.0), default_unit: None } }
}

// Weights are compared by magnitude alone: the default unit plays no part.
impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool { self.kg() == other.kg() }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.kg().partial_cmp(&other.kg()) }
}
