use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while building or combining numbers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{literal:?} is an invalid integer")]
    Parse { literal: String },

    #[error("{numerator}/{denominator} is an invalid fraction")]
    InvalidFraction { numerator: String, denominator: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{literal:?} is an invalid complex number")]
    InvalidLiteral { literal: String },

    #[error("radix {0} is not supported, only decimal numbers are")]
    UnsupportedRadix(u32),
}
impl Error {
    pub(crate) fn parse(literal: &str) -> Self {
        Error::Parse { literal: literal.to_owned() }
    }
    pub(crate) fn invalid_fraction(numerator: &str, denominator: &str) -> Self {
        Error::InvalidFraction {
            numerator: numerator.to_owned(),
            denominator: denominator.to_owned()
        }
    }
    pub(crate) fn invalid_literal(literal: &str) -> Self {
        Error::InvalidLiteral { literal: literal.to_owned() }
    }
}
