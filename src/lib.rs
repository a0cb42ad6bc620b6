#[cfg(any(test, feature = "arb"))]
mod arb;
mod big;
mod complex;
mod error;
mod fraction;

pub use self::big::*;
pub use self::complex::*;
pub use self::error::*;
pub use self::fraction::*;
