//! Textual representations of `Weight`.
//!
//! `{:?}` gives `Weight(st=13.0)`, `{}` gives `13.0 st`. Both express the
//! magnitude in the default unit. A precision, as in `{:.2}`, is applied to the
//! number.

use std::fmt;

use snafu::OptionExt;

use crate::error::{Result, UndefinedDefaultUnitSnafu};
use crate::Weight;

// What a weight without a default unit prints as. Use `try_repr` or
// `try_to_string` to get an error instead.
const UNDEFINED: &str = "<undefined default unit>";

/// Write `x` the way a float literal looks: whole numbers keep their `.0`.
fn write_number(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{x:.precision$}"),
        None if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => write!(f, "{x:.1}"),
        None => write!(f, "{x}"),
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.default_unit() {
            Some(unit) => {
                write!(f, "Weight({unit}=")?;
                write_number(f, self.get(unit))?;
                f.write_str(")")
            }
            None => write!(f, "Weight({UNDEFINED})"),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.default_unit() {
            Some(unit) => {
                write_number(f, self.get(unit))?;
                write!(f, " {unit}")
            }
            None => f.write_str(UNDEFINED),
        }
    }
}

impl Weight {
    /// The `Debug` representation, or `UndefinedDefaultUnit`.
    pub fn try_repr(&self) -> Result<String> {
        self.default_unit().context(UndefinedDefaultUnitSnafu)?;
        Ok(format!("{self:?}"))
    }

    /// The `Display` representation, or `UndefinedDefaultUnit`.
    pub fn try_to_string(&self) -> Result<String> {
        self.default_unit().context(UndefinedDefaultUnitSnafu)?;
        Ok(self.to_string())
    }
}
