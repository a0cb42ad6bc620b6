mod signed;
mod unsigned;

pub use self::signed::*;
pub use self::unsigned::*;
