use snafu::Snafu;
use units::Unit;

pub type Result<T, E = WeightError> = std::result::Result<T, E>;

/// Everything that can go wrong when building, combining or printing a
/// `Weight`.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum WeightError {
    /// A unit name matched no canonical unit or alias.
    #[snafu(display("{source}"), context(false))]
    UnknownUnit { source: units::UnknownUnit },
    /// A textual constructor value is not a number.
    #[snafu(display("cannot interpret {value:?} as a number of `{unit}`: {source}"))]
    InvalidValue {
        unit: Unit,
        value: String,
        source: std::num::ParseFloatError,
    },
    /// An arithmetic operand has the wrong type.
    #[snafu(display("{message}"))]
    TypeMismatch { message: &'static str },
    /// Printing or reading the default unit before one has been set.
    #[snafu(display("default unit has not been set"))]
    UndefinedDefaultUnit,
}

impl WeightError {
    /// The offending unit name, if this is an `UnknownUnit` error.
    pub fn unknown_unit(&self) -> Option<&str> {
        match self {
            WeightError::UnknownUnit { source } => Some(&source.name),
            _ => None,
        }
    }
}
