//! Units of mass, and the registry used to look them up by name.

mod unit;

pub use unit::{Unit, UnknownUnit, ALIASES};

pub use uom::si::f64::Mass;
use uom::si::mass::kilogram;

// Making values from float literals seems to be very long-winded, so provide
// some pithily-named convenience constructors.

/// Generate a function called NAME which returns a `Mass` by interpreting its
/// argument as UNIT
///
/// wrap!(NAME UNIT);
macro_rules! wrap {
  ($name:ident $unit:ident) => {
    pub fn $name(x: f64) -> Mass { Unit::$unit.mass(x) }
  };
}

wrap!(g   G  );
wrap!(lbs Lbs);
wrap!(st  St );

// `kg` is the storage unit of `Mass`, so it goes straight through uom.
pub fn kg(x: f64) -> Mass { Mass::new::<kilogram>(x) }

// Reverse direction of the above.
pub fn g_  (x: Mass) -> f64 { Unit::G  .of(x) }
pub fn kg_ (x: Mass) -> f64 { x.get::<kilogram>() }
pub fn lbs_(x: Mass) -> f64 { Unit::Lbs.of(x) }
pub fn st_ (x: Mass) -> f64 { Unit::St .of(x) }
