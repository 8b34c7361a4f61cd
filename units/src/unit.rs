use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use snafu::Snafu;

use crate::{kg, kg_, Mass};

/// The units of mass which a `Weight` understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
  G,
  Kg,
  Lbs,
  St,
}

/// Human-friendly synonyms for the canonical unit keys.
pub const ALIASES: [(&str, Unit); 5] = [
  ("gram"    , Unit::G  ),
  ("grammes" , Unit::G  ),
  ("kilogram", Unit::Kg ),
  ("pounds"  , Unit::Lbs),
  ("stone"   , Unit::St ),
];

/// A unit name that could not be resolved to any `Unit`.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("unknown unit type: {name}"))]
pub struct UnknownUnit {
  pub name: String,
}

impl UnknownUnit {
  fn new(name: &str) -> Self { UnknownUnitSnafu { name }.build() }
}

impl Unit {

  pub const ALL: [Unit; 4] = [Unit::G, Unit::Kg, Unit::Lbs, Unit::St];

  /// The canonical key of this unit: `"g"`, `"kg"`, `"lbs"` or `"st"`.
  pub const fn key(self) -> &'static str {
    match self {
      Unit::G   => "g",
      Unit::Kg  => "kg",
      Unit::Lbs => "lbs",
      Unit::St  => "st",
    }
  }

  /// How many kilograms there are in one of this unit.
  pub const fn factor(self) -> f64 {
    match self {
      Unit::G   => 0.001,
      Unit::Kg  => 1.0,
      Unit::Lbs => 0.45359237,
      Unit::St  => 6.35029318,
    }
  }

  /// Interpret `x` as a number of this unit.
  pub fn mass(self, x: f64) -> Mass { kg(self.factor() * x) }

  /// Express `m` as a number of this unit.
  pub fn of(self, m: Mass) -> f64 { kg_(m) / self.factor() }

  /// Look up a unit by its canonical key only. Aliases and other spellings are
  /// rejected.
  pub fn from_key(name: &str) -> Result<Self, UnknownUnit> {
    Self::exact(name).ok_or_else(|| UnknownUnit::new(name))
  }

  /// Look up a unit by name, trying in turn
  ///
  /// + the canonical keys,
  ///
  /// + the aliases,
  ///
  /// + the canonical keys, ignoring case,
  ///
  /// + the aliases, ignoring case.
  pub fn resolve(name: &str) -> Result<Self, UnknownUnit> {
    if let Some(unit) = Self::exact(name) {
      trace!("unit `{name}` resolved to `{unit}`");
      return Ok(unit);
    }
    if let Some(unit) = Self::alias(name) {
      debug!("unit alias `{name}` resolved to `{unit}`");
      return Ok(unit);
    }
    let lower = name.to_lowercase();
    if let Some(unit) = Self::exact(&lower).or_else(|| Self::alias(&lower)) {
      debug!("unit `{name}` resolved to `{unit}` ignoring case");
      return Ok(unit);
    }
    Err(UnknownUnit::new(name))
  }

  fn exact(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|unit| unit.key() == name)
  }

  fn alias(name: &str) -> Option<Self> {
    ALIASES.iter()
      .find(|(alias, _)| *alias == name)
      .map(|&(_, unit)| unit)
  }
}

impl FromStr for Unit {
  type Err = UnknownUnit;
  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::resolve(s) }
}

impl fmt::Display for Unit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}
