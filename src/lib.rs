//! Store and convert between weights.
//!
//! ```
//! use weight::weight;
//! # fn main() -> weight::Result<()> {
//! let me = weight!(st = 13)?;
//! assert_eq!(format!("{me:?}"), "Weight(st=13.0)");
//! assert_eq!(me.kg(), 82.55381134000001);
//!
//! let new_me = me - weight!(kg = 5)?;
//! assert_eq!(format!("{new_me:?}"), "Weight(st=12.212634777911152)");
//! assert_eq!(new_me.kg(), 77.55381134000001);
//! assert_eq!(new_me.stone_and_pounds(), (12.0, 2.976886890756134));
//! # Ok(())
//! # }
//! ```

mod exports;
pub use exports::*;

mod error;
mod value;
mod ops;
mod format;
mod macros;
