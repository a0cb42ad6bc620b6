use super::BigUint;
use crate::error::{Error, Result};

use num_traits::*;
use std::{
    cmp::Ordering,
    fmt,
    mem,
    ops::*,
    str::FromStr
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive
}
impl Default for Sign {
    fn default() -> Self {
        Sign::Positive
    }
}
impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative
        }
    }
}
/// A signed integer of any size. Zero is always `Sign::Positive`, there is no
/// negative zero.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    number: BigUint
}
impl BigInt {
    /// Alias of `from`
    pub fn new<T: Into<Self>>(value: T) -> Self {
        value.into()
    }
    /// Combine a sign with an absolute number. A zero number is always
    /// positive, whatever the sign says.
    pub fn from_parts(sign: Sign, number: BigUint) -> Self {
        let sign = if number.is_zero() { Sign::Positive } else { sign };
        Self { sign, number }
    }
    /// Parse a decimal integer with an optional leading `-`.
    ///
    /// Only the canonical spelling of a number is accepted: "-0", "007",
    /// "+1", "-" and "" are all rejected.
    /// ```rust
    /// use exact_numbers::BigInt;
    /// assert_eq!(BigInt::parse("-12").unwrap(), BigInt::new(-12));
    /// assert!(BigInt::parse("-0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (sign, digits) = match input.strip_prefix('-') {
            Some(digits) => (Sign::Negative, digits),
            None => (Sign::Positive, input)
        };
        match BigUint::from_decimal(digits) {
            Some(number) if !(sign == Sign::Negative && number.is_zero()) => Ok(Self { sign, number }),
            _ => {
                debug!(literal = input, "rejected integer literal");
                Err(Error::parse(input))
            }
        }
    }
    /// Return the sign
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Borrow the inner absolute number
    pub fn magnitude(&self) -> &BigUint {
        &self.number
    }
    /// Extract the inner absolute number
    pub fn into_magnitude(self) -> BigUint {
        self.number
    }
    fn product_sign(&self, other: &Self) -> Sign {
        if self.sign == other.sign { Sign::Positive } else { Sign::Negative }
    }
    /// Add a number given as sign and magnitude. Subtraction passes the
    /// flipped sign instead of building a negated copy.
    fn add_parts(self, sign: Sign, number: &BigUint) -> Self {
        if self.sign == sign {
            // Such as (1 + 3 = 4) or (-1 + -3 = -4)
            Self::from_parts(sign, self.number + number)
        } else {
            match self.number.cmp(number) {
                // (4 + -4 = 0) or (-4 + 4 = 0)
                Ordering::Equal => Self::zero(),
                // Such as (4 + -3 = 1) or (-4 + 3 = -1)
                Ordering::Greater => Self::from_parts(self.sign, self.number - number),
                // Such as (3 + -4 = -1) or (-3 + 4 = 1)
                Ordering::Less => Self::from_parts(sign, number.clone() - &self.number)
            }
        }
    }
    /// Divide and round towards zero, like primitive integers do. Fails if
    /// other is zero.
    /// ```rust
    /// use exact_numbers::BigInt;
    /// assert_eq!(BigInt::new(-7).quotient(&BigInt::new(2)).unwrap(), BigInt::new(-3));
    /// ```
    pub fn quotient(&self, other: &Self) -> Result<Self> {
        let (number, _) = self.number.divide(&other.number).ok_or_else(|| {
            debug!(dividend = %self, "refused integer division by zero");
            Error::DivisionByZero
        })?;
        Ok(Self::from_parts(self.product_sign(other), number))
    }
    /// The remainder belonging to `quotient`, defined as
    /// `self - other * self.quotient(other)`. It has the sign of self.
    /// ```rust
    /// use exact_numbers::BigInt;
    /// assert_eq!(BigInt::new(-7).remainder(&BigInt::new(2)).unwrap(), BigInt::new(-1));
    /// ```
    pub fn remainder(&self, other: &Self) -> Result<Self> {
        let quotient = self.quotient(other)?;
        Ok(self.clone() - &(quotient * other))
    }
}
impl Num for BigInt {
    type FromStrRadixErr = Error;

    fn from_str_radix(input: &str, radix: u32) -> Result<Self> {
        if radix != super::RADIX as u32 {
            return Err(Error::UnsupportedRadix(radix));
        }
        Self::parse(input)
    }
}
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}
impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            number: BigUint::zero()
        }
    }
    fn is_zero(&self) -> bool {
        self.number.is_zero()
    }
}
impl One for BigInt {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            number: BigUint::one()
        }
    }
    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.number.is_one()
    }
}
impl Signed for BigInt {
    fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            number: self.number.clone()
        }
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self.clone() - other
        }
    }
    fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.is_positive() {
            Self::one()
        } else /* if self.is_negative() */ {
            -Self::one()
        }
    }
    fn is_positive(&self) -> bool {
        !self.is_zero() && self.sign == Sign::Positive
    }
    fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}
impl<T: Into<i128>> From<T> for BigInt {
    fn from(i: T) -> Self {
        let i = i.into();
        Self::from_parts(
            if i < 0 { Sign::Negative } else { Sign::Positive },
            i.unsigned_abs().into()
        )
    }
}
impl From<BigUint> for BigInt {
    fn from(number: BigUint) -> Self {
        Self {
            sign: Sign::Positive,
            number
        }
    }
}
impl Neg for BigInt {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_parts(-self.sign, self.number)
    }
}
impl CheckedNeg for BigInt {
    fn checked_neg(&self) -> Option<Self> {
        Some(-self.clone())
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.number.cmp(&other.number),
            // The bigger the magnitude, the smaller the negative number
            (Sign::Negative, Sign::Negative) => other.number.cmp(&self.number)
        }
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Add<&Self> for BigInt {
    type Output = Self;
    fn add(self, other: &Self) -> Self::Output {
        self.add_parts(other.sign, &other.number)
    }
}
impl Sub<&Self> for BigInt {
    type Output = Self;
    fn sub(self, other: &Self) -> Self::Output {
        self.add_parts(-other.sign, &other.number)
    }
}
impl Mul<&Self> for BigInt {
    type Output = Self;
    fn mul(self, other: &Self) -> Self::Output {
        let sign = self.product_sign(other);
        Self::from_parts(sign, &self.number * &other.number)
    }
}
impl Div<&Self> for BigInt {
    type Output = Self;
    fn div(self, other: &Self) -> Self::Output {
        self.quotient(other).expect("attempt to divide by zero")
    }
}
impl CheckedDiv for BigInt {
    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.quotient(other).ok()
    }
}
impl Rem<&Self> for BigInt {
    type Output = Self;
    fn rem(self, other: &Self) -> Self::Output {
        self.remainder(other).expect("attempt to calculate the remainder with a divisor of zero")
    }
}
impl CheckedRem for BigInt {
    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.remainder(other).ok()
    }
}
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(self.sign == Sign::Positive, "", &self.number.to_string())
    }
}
impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_op {
    ($($assign_trait:ident $assign_fn:ident$(, $checked_trait:ident $checked_fn:ident)? = $op_trait:ident $op_fn:ident),*) => {
        $(
            $(impl $checked_trait for BigInt {
                fn $checked_fn(&self, other: &Self) -> Option<Self> {
                    Some(self.clone().$op_fn(other))
                }
            })?
            impl<T: Into<Self>> $op_trait<T> for BigInt {
                type Output = Self;
                fn $op_fn(self, other: T) -> Self::Output {
                    let other: Self = other.into();
                    self.$op_fn(&other)
                }
            }
            impl $assign_trait<&Self> for BigInt {
                fn $assign_fn(&mut self, other: &Self) {
                    *self = mem::take(self).$op_fn(other);
                }
            }
            impl<T: Into<Self>> $assign_trait<T> for BigInt {
                fn $assign_fn(&mut self, other: T) {
                    let other: Self = other.into();
                    self.$assign_fn(&other);
                }
            }
        )*
    }
}
impl_op! {
    AddAssign add_assign, CheckedAdd checked_add = Add add,
    SubAssign sub_assign, CheckedSub checked_sub = Sub sub,
    MulAssign mul_assign, CheckedMul checked_mul = Mul mul,
    DivAssign div_assign = Div div,
    RemAssign rem_assign = Rem rem
}
