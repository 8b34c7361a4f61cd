pub use crate::error::{Result, WeightError};
pub use crate::value::{UnitValue, Weight};
pub use crate::ops::Operand;

pub use units::{Mass, Unit, UnknownUnit, ALIASES};
pub use units::{g, kg, lbs, st, g_, kg_, lbs_, st_};
