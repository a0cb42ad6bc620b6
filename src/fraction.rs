use crate::{
    big::{BigInt, BigUint, Sign},
    error::{Error, Result}
};

use num_traits::{One, Signed, Zero};
use std::{
    cmp::Ordering,
    fmt,
    mem,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr
};
use tracing::{debug, trace};

/// Find the greatest common divisor of two numbers. If either number is 0 the
/// other one is returned, so `gcd(0, 0)` is 0.
pub fn gcd(x: &BigUint, y: &BigUint) -> BigUint {
    // Otherwise Euclid would end up dividing by zero
    if x.is_zero() {
        return y.clone();
    }
    if y.is_zero() {
        return x.clone();
    }
    euclid(x.clone(), y.clone())
}
/// Euclid's algorithm: gcd(a, b) = gcd(b mod a, a) until a divides b.
/// Both numbers must be positive.
fn euclid(mut small: BigUint, mut big: BigUint) -> BigUint {
    assert!(!small.is_zero() && !big.is_zero(), "euclid called with a zero argument");
    loop {
        let remainder = &big % &small;
        if remainder.is_zero() {
            return small;
        }
        big = mem::replace(&mut small, remainder);
    }
}
fn signed(negative: bool, number: &BigUint) -> BigInt {
    BigInt::from_parts(if negative { Sign::Negative } else { Sign::Positive }, number.clone())
}

/// A number stored in fraction form instead of actually calculating the
/// result. This ensures (10/3) * 3 is actually 10 and not 9.99998.
///
/// A fraction is always fully reduced with a positive denominator, and the
/// sign is kept separately so numerator and denominator are plain magnitudes.
/// Zero is always 0/1 and never negative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    negative: bool,
    numerator: BigUint,
    denominator: BigUint
}
impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}
impl Fraction {
    /// Construct a new reduced fraction, failing if the denominator is 0.
    /// ```rust
    /// use exact_numbers::{BigInt, Fraction};
    /// let half = Fraction::new(BigInt::new(-2), BigInt::new(-4)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// ```
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            debug!(%numerator, "refused fraction with a zero denominator");
            return Err(Error::invalid_fraction(&numerator.to_string(), "0"));
        }
        Ok(Self::reduce(numerator, denominator))
    }
    /// Construct a new reduced fraction from two decimal integers.
    /// ```rust
    /// use exact_numbers::Fraction;
    /// assert_eq!(Fraction::parse("12", "34").unwrap().to_string(), "6/17");
    /// assert!(Fraction::parse("1", "0").is_err());
    /// ```
    pub fn parse(numerator: &str, denominator: &str) -> Result<Self> {
        let invalid = || {
            debug!(numerator, denominator, "rejected fraction");
            Error::invalid_fraction(numerator, denominator)
        };
        let top = BigInt::parse(numerator).map_err(|_| invalid())?;
        let bottom = BigInt::parse(denominator).map_err(|_| invalid())?;
        if bottom.is_zero() {
            return Err(invalid());
        }
        Ok(Self::reduce(top, bottom))
    }
    /// Divide numerator and denominator by their greatest common divisor and
    /// move both signs into `negative`.
    ///
    /// ## Panics
    /// Panics if the denominator is 0
    fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        assert!(!denominator.is_zero(), "denominator is 0");
        let negative = numerator.is_negative() != denominator.is_negative();
        Self::reduce_unsigned(negative, numerator.into_magnitude(), denominator.into_magnitude())
    }
    fn reduce_unsigned(negative: bool, numerator: BigUint, denominator: BigUint) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }
        let divisor = gcd(&numerator, &denominator);
        if divisor.is_one() {
            return Self { negative, numerator, denominator };
        }
        trace!(%numerator, %denominator, %divisor, "reducing fraction");
        Self {
            negative,
            numerator: numerator / &divisor,
            denominator: denominator / &divisor
        }
    }
    /// Return the numerator, without sign
    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }
    /// Return the numerator carrying the sign of the whole fraction
    pub fn signed_numerator(&self) -> BigInt {
        signed(self.negative, &self.numerator)
    }
    /// Returns true if this fraction is below 0
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    /// Returns false if this fraction is a whole number
    pub fn is_fraction(&self) -> bool {
        !self.denominator.is_one()
    }
    /// Return this value with a positive sign, no matter if it's negative or
    /// already positive.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }
    /// Same thing as in mathematics taking the power of -1, so 1/n. Fails if
    /// this fraction is 0.
    pub fn reciprocal(&self) -> Result<Self> {
        if self.is_zero() {
            debug!("refused reciprocal of zero");
            return Err(Error::DivisionByZero);
        }
        Ok(Self {
            negative: self.negative,
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone()
        })
    }
    /// Add other, or subtract it if `negate_other` is set
    fn combine(&self, other: &Self, negate_other: bool) -> Self {
        let other_negative = other.negative != negate_other;
        if self.denominator == other.denominator {
            let numerator = self.signed_numerator() + signed(other_negative, &other.numerator);
            return Self::reduce(numerator, self.denominator.clone().into());
        }
        // Scale both sides to the least common multiple of the denominators
        // rather than their product, to keep the numbers small
        let divisor = gcd(&self.denominator, &other.denominator);
        let scale = &other.denominator / &divisor;
        let other_scale = &self.denominator / &divisor;
        let denominator = &scale * &self.denominator;
        let numerator = self.signed_numerator() * scale
            + signed(other_negative, &other.numerator) * other_scale;
        Self::reduce(numerator, denominator.into())
    }
    fn product(&self, other: &Self) -> Self {
        Self::reduce_unsigned(
            self.negative != other.negative,
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator
        )
    }
    /// Calculates division, failing if other is 0
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self.product(&other.reciprocal()?))
    }
}
impl Zero for Fraction {
    fn zero() -> Self {
        Self {
            negative: false,
            numerator: BigUint::zero(),
            denominator: BigUint::one()
        }
    }
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}
impl One for Fraction {
    fn one() -> Self {
        Self {
            negative: false,
            numerator: BigUint::one(),
            denominator: BigUint::one()
        }
    }
    fn is_one(&self) -> bool {
        !self.negative && self.numerator.is_one() && self.denominator.is_one()
    }
}
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let difference = self.combine(other, true);
        if difference.negative {
            Ordering::Less
        } else if difference.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body = if self.is_fraction() {
            format!("{}/{}", self.numerator, self.denominator)
        } else {
            self.numerator.to_string()
        };
        f.pad_integral(!self.negative, "", &body)
    }
}
impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl Neg for Fraction {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}
impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
impl From<BigInt> for Fraction {
    fn from(i: BigInt) -> Self {
        Self {
            negative: i.is_negative(),
            numerator: i.into_magnitude(),
            denominator: BigUint::one()
        }
    }
}
macro_rules! impl_from {
    ($($int:ident),*) => {
        $(impl From<$int> for Fraction {
            fn from(i: $int) -> Self {
                BigInt::new(i).into()
            }
        })*
    }
}
impl_from!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Add<Self> for &Fraction {
    type Output = Fraction;
    fn add(self, other: Self) -> Fraction {
        self.combine(other, false)
    }
}
impl Sub<Self> for &Fraction {
    type Output = Fraction;
    fn sub(self, other: Self) -> Fraction {
        self.combine(other, true)
    }
}
impl Mul<Self> for &Fraction {
    type Output = Fraction;
    fn mul(self, other: Self) -> Fraction {
        self.product(other)
    }
}
impl Div<Self> for &Fraction {
    type Output = Fraction;
    fn div(self, other: Self) -> Fraction {
        self.checked_div(other).expect("attempt to divide by zero")
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $trait_assign:ident $fn_assign:ident),*) => {
        $(impl $trait<&Fraction> for Fraction {
            type Output = Self;
            fn $fn(self, other: &Fraction) -> Self {
                (&self).$fn(other)
            }
        }
        impl<T: Into<Fraction>> $trait<T> for Fraction {
            type Output = Self;
            fn $fn(self, other: T) -> Self {
                let other: Fraction = other.into();
                (&self).$fn(&other)
            }
        }
        impl<T: Into<Fraction>> $trait_assign<T> for Fraction {
            fn $fn_assign(&mut self, other: T) {
                let other: Fraction = other.into();
                *self = (&*self).$fn(&other);
            }
        })*
    }
}
impl_op! {
    Add add = AddAssign add_assign,
    Sub sub = SubAssign sub_assign,
    Mul mul = MulAssign mul_assign,
    Div div = DivAssign div_assign
}

impl FromStr for Fraction {
    type Err = Error;
    /// Parse either "numerator" or "numerator/denominator"
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.splitn(2, '/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next().unwrap_or("1");
        Self::parse(numerator, denominator)
    }
}
