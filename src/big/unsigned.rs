use crate::error::{Error, Result};

use num_traits::*;
use smallvec::{smallvec, SmallVec};
use std::{
    cmp::Ordering,
    fmt,
    iter,
    ops::*,
    str::FromStr
};
use tracing::debug;

pub const RADIX: u8 = 10;

type Digits = SmallVec<[u8; 32]>;

/// A non-negative integer of any size, stored as decimal digits with the
/// least significant digit first. There's always at least one digit and never
/// a superfluous leading zero, so zero is exactly `[0]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    digits: Digits
}
impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}
impl BigUint {
    /// Alias to `from`
    pub fn new<T: Into<Self>>(value: T) -> Self {
        value.into()
    }
    /// Parse a string of decimal digits. Anything but digits is rejected, and
    /// so are leading zeros unless the number is exactly "0".
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_decimal(input).ok_or_else(|| {
            debug!(literal = input, "rejected unsigned integer literal");
            Error::parse(input)
        })
    }
    pub(crate) fn from_decimal(input: &str) -> Option<Self> {
        let canonical = !input.is_empty()
            && input.bytes().all(|c| c.is_ascii_digit())
            && (input == "0" || !input.starts_with('0'));
        if !canonical {
            return None;
        }
        Some(Self {
            digits: input.bytes().rev().map(|c| c - b'0').collect()
        })
    }
    /// Return the number of decimal digits, which is 1 for zero
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// Return an iterator over all digits, least significant first
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }
    fn trim_end(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }
    fn common_size(&mut self, other: &Self) {
        if other.digits.len() > self.digits.len() {
            self.digits.extend(iter::repeat(0).take(other.digits.len() - self.digits.len()));
        }
    }
    /// Multiply by ten and add `digit`
    fn push_low_digit(&mut self, digit: u8) {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
    }
    /// Performs subtraction and returns false on underflow, in which case
    /// self is left untouched
    pub fn subtract(&mut self, other: &Self) -> bool {
        if *self < *other {
            return false;
        }

        let mut borrow = 0;

        let mut digits2 = other.digits.iter();
        for digit in &mut self.digits {
            let other = *digits2.next().unwrap_or(&0) + borrow;
            if *digit < other {
                *digit = *digit + RADIX - other;
                borrow = 1;
            } else {
                *digit -= other;
                borrow = 0;
            }
        }

        self.trim_end();
        true
    }
    /// Performs division and remainder in one step, or returns None if other
    /// is zero
    pub fn divide(&self, other: &Self) -> Option<(Self, Self)> {
        // Long division on paper: bring down the next digit of the dividend
        // and count how many times the divisor can be subtracted from what we
        // have so far. The count is always below 10 because the remainder was
        // smaller than the divisor before the digit came down.
        if other.is_zero() {
            return None;
        }
        if *self < *other {
            return Some((Self::zero(), self.clone()));
        }

        let mut remainder = Self::zero();
        let mut quotient = Digits::with_capacity(self.digits.len());

        for &digit in self.digits.iter().rev() {
            remainder.push_low_digit(digit);

            let mut count = 0;
            while remainder.subtract(other) {
                count += 1;
            }
            quotient.push(count);
        }

        quotient.reverse();
        let mut quotient = Self { digits: quotient };
        quotient.trim_end();
        Some((quotient, remainder))
    }
}
impl Num for BigUint {
    type FromStrRadixErr = Error;

    fn from_str_radix(input: &str, radix: u32) -> Result<Self> {
        if radix != RADIX as u32 {
            return Err(Error::UnsupportedRadix(radix));
        }
        Self::parse(input)
    }
}
impl FromStr for BigUint {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}
impl Zero for BigUint {
    fn zero() -> Self {
        Self {
            digits: smallvec![0]
        }
    }
    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
}
impl One for BigUint {
    fn one() -> Self {
        Self {
            digits: smallvec![1]
        }
    }
    fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }
}
impl Unsigned for BigUint {}
impl<N: Into<u128>> From<N> for BigUint {
    fn from(i: N) -> Self {
        let mut i = i.into();
        let mut digits: Digits = smallvec![(i % RADIX as u128) as u8];
        i /= RADIX as u128;
        while i > 0 {
            digits.push((i % RADIX as u128) as u8);
            i /= RADIX as u128;
        }
        Self { digits }
    }
}
impl AddAssign<&Self> for BigUint {
    fn add_assign(&mut self, other: &Self) {
        self.common_size(other);

        let mut carry = 0;

        let mut digits2 = other.digits.iter();
        for digit in &mut self.digits {
            let sum = *digit + *digits2.next().unwrap_or(&0) + carry;
            *digit = sum % RADIX;
            carry = sum / RADIX;
        }

        if carry > 0 {
            self.digits.push(carry);
        }
    }
}
impl SubAssign<&Self> for BigUint {
    fn sub_assign(&mut self, other: &Self) {
        assert!(self.subtract(other), "BigUint underflow: going below 0");
    }
}
impl CheckedSub for BigUint {
    fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut me = self.clone();
        if me.subtract(other) {
            Some(me)
        } else {
            None
        }
    }
}
impl Mul<Self> for &BigUint {
    type Output = BigUint;
    fn mul(self, other: Self) -> Self::Output {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }

        // Grade school multiplication. Each row adds digit * digit2 on top of
        // what the previous rows left in that position, the biggest possible
        // value being 9 * 9 + 9 + 9 = 99 which still fits a u8.
        let mut partial: Digits = smallvec![0; self.digits.len() + other.digits.len()];

        for (i, &digit) in self.digits.iter().enumerate() {
            let mut carry = 0;
            for (j, &digit2) in other.digits.iter().enumerate() {
                let product = digit * digit2 + carry + partial[i + j];
                partial[i + j] = product % RADIX;
                carry = product / RADIX;
            }
            // The previous row never reached this far
            partial[i + other.digits.len()] = carry;
        }

        let mut result = BigUint { digits: partial };
        result.trim_end();
        result
    }
}
impl Div<Self> for &BigUint {
    type Output = BigUint;
    fn div(self, other: Self) -> Self::Output {
        let (res, _) = self.divide(other).expect("attempt to divide by zero");
        res
    }
}
impl CheckedDiv for BigUint {
    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.divide(other).map(|(res, _)| res)
    }
}
impl Rem<Self> for &BigUint {
    type Output = BigUint;
    fn rem(self, other: Self) -> Self::Output {
        let (_, rem) = self.divide(other).expect("attempt to calculate the remainder with a divisor of zero");
        rem
    }
}
impl CheckedRem for BigUint {
    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.divide(other).map(|(_, rem)| rem)
    }
}
impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        let cmp = self.digits.len().cmp(&other.digits.len());
        if cmp != Ordering::Equal {
            return cmp;
        }
        self.digits.iter().rev().cmp(other.digits.iter().rev())
    }
}
impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Into<BigUint> + Copy> PartialEq<T> for BigUint {
    fn eq(&self, other: &T) -> bool {
        *self == (*other).into()
    }
}
impl<T: Into<BigUint> + Copy> PartialOrd<T> for BigUint {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.partial_cmp(&(*other).into())
    }
}
impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits: String = self.digits.iter().rev().map(|&digit| char::from(b'0' + digit)).collect();
        f.pad_integral(true, "", &digits)
    }
}
impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_op {
    (
        $($op_trait:ident $op_fn:ident$(, $checked_trait:ident $checked_fn:ident)? = $assign_trait:ident $assign_fn:ident),*
        ---
        $($op_trait2:ident $op_fn2:ident$(, $checked_trait2:ident $checked_fn2:ident)? = $assign_trait2:ident $assign_fn2:ident),*) => {
        $(
            $(impl $checked_trait for BigUint {
                fn $checked_fn(&self, other: &Self) -> Option<Self> {
                    Some(self.clone().$op_fn(other))
                }
            })?
            impl<T: Into<Self>> $assign_trait<T> for BigUint {
                fn $assign_fn(&mut self, other: T) {
                    let other: Self = other.into();
                    self.$assign_fn(&other)
                }
            }
            impl $op_trait<&Self> for BigUint {
                type Output = Self;
                fn $op_fn(mut self, other: &Self) -> Self::Output {
                    self.$assign_fn(other);
                    self
                }
            }
            impl<T: Into<Self>> $op_trait<T> for BigUint {
                type Output = Self;
                fn $op_fn(mut self, other: T) -> Self::Output {
                    self.$assign_fn(other);
                    self
                }
            }
        )*
        $(
            $(impl $checked_trait2 for BigUint {
                fn $checked_fn2(&self, other: &Self) -> Option<Self> {
                    Some(self.$op_fn2(other))
                }
            })?
            impl $op_trait2<&Self> for BigUint {
                type Output = BigUint;
                fn $op_fn2(self, other: &Self) -> Self::Output {
                    (&self).$op_fn2(other)
                }
            }
            impl<T: Into<Self>> $op_trait2<T> for BigUint {
                type Output = BigUint;
                fn $op_fn2(self, other: T) -> Self::Output {
                    (&self).$op_fn2(&other.into())
                }
            }
            impl<T: Into<Self>> $assign_trait2<T> for BigUint {
                fn $assign_fn2(&mut self, other: T) {
                    *self = (&*self).$op_fn2(&other.into());
                }
            }
            impl $assign_trait2<&Self> for BigUint {
                fn $assign_fn2(&mut self, other: &Self) {
                    *self = (&*self).$op_fn2(other);
                }
            }
        )*
    }
}
impl_op! {
    Add add, CheckedAdd checked_add = AddAssign add_assign,
    Sub sub = SubAssign sub_assign
    ---
    Mul mul, CheckedMul checked_mul = MulAssign mul_assign,
    Div div = DivAssign div_assign,
    Rem rem = RemAssign rem_assign
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(input: &str) -> BigUint {
        input.parse().unwrap()
    }

    #[test]
    fn ordering() {
        assert!(BigUint::new(4u8) < BigUint::new(5u8));
        assert!(BigUint::new(6u8) > BigUint::new(5u8));
        assert!(BigUint::new(5u8) == BigUint::new(5u8));
        assert!(BigUint::new(18446744073709551616u128) > BigUint::new(2u8));
        assert!(num("100") > num("99"));
        assert!(num("123456789") < num("123456790"));
        assert!(BigUint::new(100000000000000000000000000000000u128) > 1u8);
    }
    #[test]
    fn from_native() {
        assert_eq!(BigUint::new(0u8).digits().collect::<Vec<_>>(), vec![0]);
        assert_eq!(BigUint::new(1203u16).digits().collect::<Vec<_>>(), vec![3, 0, 2, 1]);
        assert_eq!(BigUint::new(std::u128::MAX).digit_count(), 39);
    }
    #[test]
    fn format() {
        assert_eq!(format!("{}", BigUint::new(0u8)), "0");
        assert_eq!(format!("{}", BigUint::new(12345u16)), "12345");
        assert_eq!(format!("{}", BigUint::new(18446744073709551616u128)), "18446744073709551616");
        assert_eq!(format!("{}", BigUint::new(99999999999999999999999999999999u128)), "99999999999999999999999999999999");
        assert_eq!(format!("{:04}", BigUint::new(1u8)), "0001");
        assert_eq!(format!("{:04}", BigUint::new(10u8)), "0010");
        assert_eq!(format!("{:04}", BigUint::new(10000u16)), "10000");
        assert_eq!(format!("{:04}", BigUint::new(0u8)), "0000");
        assert_eq!(format!("{:+}", BigUint::new(7u8)), "+7");
    }
    #[test]
    fn parse() {
        assert_eq!(num("1234"), BigUint::new(1234u16));
        assert_eq!(num("0"), BigUint::zero());
        assert_eq!(num("18446744073709551616"), BigUint::new(18446744073709551616u128));
        assert_eq!(BigUint::from_str_radix("99", 10).unwrap(), BigUint::new(99u8));

        for invalid in &["", "00", "007", "-1", "+1", "1a", " 1", "1_000"] {
            assert_eq!(BigUint::parse(invalid), Err(Error::parse(invalid)), "{:?} should be rejected", invalid);
        }
        assert_eq!(BigUint::from_str_radix("101010", 2), Err(Error::UnsupportedRadix(2)));
    }
    #[test]
    fn add() {
        assert_eq!(BigUint::new(1u8) + 2u8, BigUint::new(3u8));
        assert_eq!(BigUint::new(7u8) + 3u8, BigUint::new(10u8));
        assert_eq!(BigUint::new(15u8) + 30u8, BigUint::new(45u8));
        assert_eq!(BigUint::new(0u8) + 0u8, BigUint::zero());
        assert_eq!(num("999999999999999999999999") + 1u8, num("1000000000000000000000000"));
        assert_eq!(BigUint::new(std::u64::MAX) + 1u8, BigUint::new(18446744073709551616u128));
    }
    #[test]
    fn sub() {
        assert_eq!(BigUint::new(15u8) - 2u8, BigUint::new(13u8));
        assert_eq!(BigUint::new(59u8) - 42u8, BigUint::new(17u8));
        assert_eq!(BigUint::new(18446744073709551616u128) - 1u8, BigUint::new(std::u64::MAX));
        assert_eq!(BigUint::new(1u8) - 1u8, BigUint::new(0u8));
        assert_eq!(num("1000000000000000000000000") - 1u8, num("999999999999999999999999"));
        assert_eq!(num("1000") - num("999"), BigUint::one());
        assert_eq!(BigUint::new(3u8).checked_sub(&BigUint::new(4u8)), None);
    }
    #[test]
    fn failed_subtraction_keeps_value() {
        let mut value = BigUint::new(123u8);
        assert!(!value.subtract(&BigUint::new(124u8)));
        assert_eq!(value, BigUint::new(123u8));
    }
    #[test]
    fn mul() {
        assert_eq!(BigUint::new(5u8) * 3u8, BigUint::new(15u8));
        assert_eq!(BigUint::new(12u8) * 34u8, BigUint::new(408u16));
        assert_eq!(BigUint::new(0u8) * 34u8, BigUint::zero());
        assert_eq!(BigUint::new(std::u64::MAX) * 2u8, BigUint::new(std::u64::MAX as u128 * 2));
        assert_eq!(BigUint::new(std::u64::MAX) * std::u64::MAX, BigUint::new(340282366920938463426481119284349108225u128));
        assert_eq!(BigUint::new(99999999999999999999999999999999u128) * 10u8, BigUint::new(999999999999999999999999999999990u128));
        assert_eq!(num("99999") * num("99999"), num("9999800001"));
    }
    #[test]
    fn div() {
        assert_eq!(BigUint::new(8u8) / 2u8, BigUint::new(4u8));
        assert_eq!(BigUint::new(42u8) / 3u8, BigUint::new(14u8));
        assert_eq!(BigUint::new(std::u64::MAX) / 2u8, BigUint::new(std::u64::MAX / 2));
        assert_eq!(BigUint::new(999999u32) / 5u8, BigUint::new(199999u32));
        assert_eq!(BigUint::new(1000u16) / 1000u16, BigUint::one());
        assert_eq!(BigUint::new(3u8) % 2u8, BigUint::new(1u8));
        assert_eq!(BigUint::new(14u8) % 10u8, BigUint::new(4u8));
        assert_eq!(BigUint::new(0u8) % 10u8, BigUint::new(0u8));
        assert_eq!(BigUint::new(5u8) / 7u8, BigUint::zero());
        assert_eq!(
            num("340282366920938463426481119284349108225").divide(&BigUint::new(std::u64::MAX)),
            Some((BigUint::new(std::u64::MAX), BigUint::zero()))
        );
        assert_eq!(BigUint::new(1u8).divide(&BigUint::zero()), None);
    }
    #[test]
    #[should_panic]
    fn underflow() {
        let _ = BigUint::new(1u8) - 2u8;
    }
    #[test]
    #[should_panic]
    fn divide_by_zero() {
        let _ = BigUint::new(1u8) / 0u8;
    }
}
