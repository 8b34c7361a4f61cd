//! Arithmetic on `Weight`s.
//!
//! The `std::ops` impls cover the combinations which make sense: weight plus or
//! minus weight, weight times or divided by a number. The `try_*` methods take
//! an `Operand` of any kind and report a `TypeMismatch` for the rest.
//!
//! Every result keeps the default unit of the left-hand weight.

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;
use snafu::OptionExt;

use crate::error::{Result, TypeMismatchSnafu};
use crate::value::to_number;
use crate::Weight;

const ADD: &str = "Weight must be added with Weight";
const SUB: &str = "Weight must be subtracted with Weight";
const MUL: &str = "Weight must be multiplied with number";
const DIV: &str = "Weight must be divided with number";

/// The right-hand side of a fallible arithmetic operation or comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Weight(Weight),
    Number(f64),
    Text(String),
}

impl Operand {
    pub fn as_weight(&self) -> Option<Weight> {
        match self {
            Operand::Weight(w) => Some(*w),
            _ => None,
        }
    }

    /// Only genuine numbers count: numeric-looking text does not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(x) => Some(*x),
            _ => None,
        }
    }

    fn weight_for(self, message: &'static str) -> Result<Weight> {
        self.as_weight().context(TypeMismatchSnafu { message })
    }

    fn number_for(self, message: &'static str) -> Result<f64> {
        self.as_number().context(TypeMismatchSnafu { message })
    }
}

impl From<Weight> for Operand {
    fn from(w: Weight) -> Self { Operand::Weight(w) }
}

impl From<&Weight> for Operand {
    fn from(w: &Weight) -> Self { Operand::Weight(*w) }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self { Operand::Text(s.to_owned()) }
}

impl From<String> for Operand {
    fn from(s: String) -> Self { Operand::Text(s) }
}

/// For each numeric type: convert it into an `Operand`, and let it multiply a
/// `Weight` from the left.
macro_rules! numeric_operand {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Operand {
                fn from(x: $t) -> Self { Operand::Number(to_number(x)) }
            }

            impl Mul<Weight> for $t {
                type Output = Weight;
                fn mul(self, rhs: Weight) -> Weight { rhs * self }
            }
        )*
    };
}

numeric_operand!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64 Decimal);

// ----- Weight (+|-) Weight ------------------------------------------------------

impl Add for Weight {
    type Output = Weight;
    fn add(self, rhs: Weight) -> Weight { self.with_mass(self.mass() + rhs.mass()) }
}

impl Add for &Weight {
    type Output = Weight;
    fn add(self, rhs: &Weight) -> Weight { *self + *rhs }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) { self.set_mass(self.mass() + rhs.mass()); }
}

impl Sub for Weight {
    type Output = Weight;
    fn sub(self, rhs: Weight) -> Weight { self.with_mass(self.mass() - rhs.mass()) }
}

impl Sub for &Weight {
    type Output = Weight;
    fn sub(self, rhs: &Weight) -> Weight { *self - *rhs }
}

impl SubAssign for Weight {
    fn sub_assign(&mut self, rhs: Weight) { self.set_mass(self.mass() - rhs.mass()); }
}

// ----- Weight (*|/) number ------------------------------------------------------

impl<N: ToPrimitive> Mul<N> for Weight {
    type Output = Weight;
    fn mul(self, rhs: N) -> Weight {
        let n = to_number(rhs);
        self.with_mass(self.mass() * n)
    }
}

impl<N: ToPrimitive> MulAssign<N> for Weight {
    fn mul_assign(&mut self, rhs: N) {
        let n = to_number(rhs);
        self.set_mass(self.mass() * n);
    }
}

impl<N: ToPrimitive> Div<N> for Weight {
    type Output = Weight;
    fn div(self, rhs: N) -> Weight {
        let n = to_number(rhs);
        self.with_mass(self.mass() / n)
    }
}

impl<N: ToPrimitive> DivAssign<N> for Weight {
    fn div_assign(&mut self, rhs: N) {
        let n = to_number(rhs);
        self.set_mass(self.mass() / n);
    }
}

// ----- Aggregation --------------------------------------------------------------

/// The total takes its default unit from the first weight. An empty sum is
/// `Weight::default()`.
impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.reduce(|total, w| total + w).unwrap_or_default()
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Self { iter.copied().sum() }
}

impl Zero for Weight {
    fn zero() -> Self { Self::default() }
    fn is_zero(&self) -> bool { !self.is_nonzero() }
}

// ----- Dynamically-typed operands ----------------------------------------------

impl Weight {

    /// Order against another weight. Anything else is not comparable, so the
    /// answer is `None` rather than an error.
    pub fn compare(&self, other: impl Into<Operand>) -> Option<Ordering> {
        other.into().as_weight().and_then(|w| self.partial_cmp(&w))
    }

    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Weight> {
        Ok(*self + rhs.into().weight_for(ADD)?)
    }

    pub fn try_add_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self += rhs.into().weight_for(ADD)?;
        Ok(())
    }

    /// The difference may well be negative.
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Weight> {
        Ok(*self - rhs.into().weight_for(SUB)?)
    }

    pub fn try_sub_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self -= rhs.into().weight_for(SUB)?;
        Ok(())
    }

    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Weight> {
        Ok(*self * rhs.into().number_for(MUL)?)
    }

    pub fn try_mul_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self *= rhs.into().number_for(MUL)?;
        Ok(())
    }

    /// `lhs * self`, with the number on the left.
    pub fn try_rmul(&self, lhs: impl Into<Operand>) -> Result<Weight> {
        Ok(lhs.into().number_for(MUL)? * *self)
    }

    /// Division by zero is not an error: it gives an infinite or NaN weight.
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Weight> {
        Ok(*self / rhs.into().number_for(DIV)?)
    }

    pub fn try_div_assign(&mut self, rhs: impl Into<Operand>) -> Result<()> {
        *self /= rhs.into().number_for(DIV)?;
        Ok(())
    }
}
