use crate::{
    error::{Error, Result},
    fraction::Fraction
};

use num_traits::{One, Zero};
use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr
};
use tracing::debug;

/// A complex number with exact rational parts, such as `1/2-(3/4)i`
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    pub real: Fraction,
    pub imaginary: Fraction
}
impl Complex {
    pub fn new(real: Fraction, imaginary: Fraction) -> Self {
        Self { real, imaginary }
    }
    /// Build a complex number out of four decimal integers, the numerator and
    /// denominator of each part. The first invalid fraction is returned as
    /// error.
    /// ```rust
    /// use exact_numbers::Complex;
    /// let number = Complex::parse("12", "34", "1", "2").unwrap();
    /// assert_eq!(number.to_string(), "6/17+(1/2)i");
    /// ```
    pub fn parse(real_numerator: &str, real_denominator: &str, imaginary_numerator: &str, imaginary_denominator: &str) -> Result<Self> {
        Ok(Self {
            real: Fraction::parse(real_numerator, real_denominator)?,
            imaginary: Fraction::parse(imaginary_numerator, imaginary_denominator)?
        })
    }
    /// The imaginary unit
    pub fn i() -> Self {
        Self::new(Fraction::zero(), Fraction::one())
    }
    /// Returns true if there's no imaginary part
    pub fn is_real(&self) -> bool {
        self.imaginary.is_zero()
    }
    /// The complex conjugate, a-bi for a+bi
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -&self.imaginary)
    }
    /// The square of the absolute value, a² + b² for a+bi
    pub fn norm_sqr(&self) -> Fraction {
        &(&self.real * &self.real) + &(&self.imaginary * &self.imaginary)
    }
    /// Calculates division, failing if other is 0
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        // a+bi   (a+bi)(c-di)   (ac+bd) + (bc-ad)i
        // ---- = ------------ = ------------------
        // c+di   (c+di)(c-di)        c² + d²
        if other.is_zero() {
            debug!(dividend = %self, "refused complex division by zero");
            return Err(Error::DivisionByZero);
        }
        let divisor = other.norm_sqr();
        let numerator = self * &other.conjugate();
        Ok(Self {
            real: numerator.real.checked_div(&divisor)?,
            imaginary: numerator.imaginary.checked_div(&divisor)?
        })
    }
}
impl Zero for Complex {
    fn zero() -> Self {
        Self::new(Fraction::zero(), Fraction::zero())
    }
    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }
}
impl One for Complex {
    fn one() -> Self {
        Self::new(Fraction::one(), Fraction::zero())
    }
    fn is_one(&self) -> bool {
        self.real.is_one() && self.imaginary.is_zero()
    }
}
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_real() {
            return fmt::Display::fmt(&self.real, f);
        }
        let mut text = String::new();
        if !self.real.is_zero() {
            text.push_str(&self.real.to_string());
            text.push(if self.imaginary.is_negative() { '-' } else { '+' });
        } else if self.imaginary.is_negative() {
            text.push('-');
        }
        let coefficient = self.imaginary.abs();
        if coefficient.is_fraction() {
            text.push_str(&format!("({})", coefficient));
        } else if !coefficient.is_one() {
            text.push_str(&coefficient.to_string());
        }
        text.push('i');
        if f.sign_plus() && !text.starts_with('-') {
            text.insert(0, '+');
        }
        f.pad(&text)
    }
}
impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}
impl From<Fraction> for Complex {
    fn from(real: Fraction) -> Self {
        Self::new(real, Fraction::zero())
    }
}

impl Add<Self> for &Complex {
    type Output = Complex;
    fn add(self, other: Self) -> Complex {
        Complex::new(&self.real + &other.real, &self.imaginary + &other.imaginary)
    }
}
impl Sub<Self> for &Complex {
    type Output = Complex;
    fn sub(self, other: Self) -> Complex {
        Complex::new(&self.real - &other.real, &self.imaginary - &other.imaginary)
    }
}
impl Mul<Self> for &Complex {
    type Output = Complex;
    fn mul(self, other: Self) -> Complex {
        // (a+bi)(c+di) = (ac-bd) + (ad+bc)i
        let real = &(&self.real * &other.real) - &(&self.imaginary * &other.imaginary);
        let imaginary = &(&self.real * &other.imaginary) + &(&self.imaginary * &other.real);
        Complex::new(real, imaginary)
    }
}
impl Div<Self> for &Complex {
    type Output = Complex;
    fn div(self, other: Self) -> Complex {
        self.checked_div(other).expect("attempt to divide by zero")
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $trait_assign:ident $fn_assign:ident),*) => {
        $(impl $trait<&Complex> for Complex {
            type Output = Self;
            fn $fn(self, other: &Complex) -> Self {
                (&self).$fn(other)
            }
        }
        impl<T: Into<Complex>> $trait<T> for Complex {
            type Output = Self;
            fn $fn(self, other: T) -> Self {
                let other: Complex = other.into();
                (&self).$fn(&other)
            }
        }
        impl<T: Into<Complex>> $trait_assign<T> for Complex {
            fn $fn_assign(&mut self, other: T) {
                let other: Complex = other.into();
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

/// Split a literal into its real and imaginary term. The split happens at the
/// last sign outside of parentheses that isn't the very first character.
fn split_terms(literal: &str) -> (&str, Option<&str>) {
    if !literal.ends_with('i') {
        return (literal, None);
    }
    let mut depth = 0i32;
    let mut split = None;
    for (i, c) in literal.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' | '-' if i > 0 && depth == 0 => split = Some(i),
            _ => ()
        }
    }
    match split {
        Some(i) => (&literal[..i], Some(&literal[i..])),
        None => ("", Some(literal))
    }
}
fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}
/// Whether a sign shows up anywhere past the first character, like in `1/-2`
fn has_inner_sign(term: &str) -> bool {
    term.char_indices().any(|(i, c)| i > 0 && is_sign(c))
}
/// Parse the coefficient of an imaginary term such as `-i`, `+3i`, `(2/3)i`
/// or `-(2/3)i`
fn parse_imaginary(term: &str, literal: &str) -> Result<Fraction> {
    let invalid = || {
        debug!(literal, term, "rejected imaginary term");
        Error::invalid_literal(literal)
    };
    let body = term.strip_suffix('i').ok_or_else(invalid)?;
    let (negative, body) = match body.as_bytes().first() {
        Some(b'-') => (true, &body[1..]),
        Some(b'+') => (false, &body[1..]),
        _ => (false, body)
    };
    let explicit_sign = body.len() < term.len() - 1;
    let coefficient = if body.is_empty() {
        Fraction::one()
    } else if let Some(inner) = body.strip_prefix('(') {
        let inner = inner.strip_suffix(')').ok_or_else(invalid)?;
        if (explicit_sign && inner.starts_with(is_sign)) || has_inner_sign(inner) {
            return Err(invalid());
        }
        inner.parse()?
    } else if body.starts_with(')') || body.contains(is_sign) {
        return Err(invalid());
    } else {
        body.parse()?
    };
    Ok(if negative { -coefficient } else { coefficient })
}
impl FromStr for Complex {
    type Err = Error;

    /// Parse a complex literal, such as `12`, `-1/2`, `-i`, `(2/3)i` or
    /// `-1/2-(3/4)i`
    fn from_str(literal: &str) -> Result<Self> {
        let (real, imaginary) = split_terms(literal);
        let real = if real.is_empty() {
            if imaginary.is_none() {
                return Err(Error::invalid_literal(literal));
            }
            Fraction::zero()
        } else {
            if real.contains(|c| c == 'i' || c == '(' || c == ')') || has_inner_sign(real) {
                debug!(literal, "rejected real term");
                return Err(Error::invalid_literal(literal));
            }
            real.parse()?
        };
        let imaginary = match imaginary {
            Some(term) => parse_imaginary(term, literal)?,
            None => Fraction::zero()
        };
        Ok(Self { real, imaginary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn complex(input: &str) -> Complex {
        input.parse().unwrap()
    }
    fn frac(input: &str) -> Fraction {
        input.parse().unwrap()
    }

    #[test]
    fn create() {
        assert_eq!(Complex::parse("0", "1", "0", "1").unwrap().to_string(), "0");
        assert_eq!(Complex::parse("1", "2", "0", "2").unwrap().to_string(), "1/2");
        assert_eq!(Complex::parse("12", "34", "1", "2").unwrap().to_string(), "6/17+(1/2)i");
        assert_eq!(Complex::parse("-1", "2", "-3", "3").unwrap().to_string(), "-1/2-i");
        assert_eq!(Complex::parse("1", "0", "1", "1"), Err(Error::invalid_fraction("1", "0")));
        assert_eq!(Complex::parse("1", "1", "x", "1"), Err(Error::invalid_fraction("x", "1")));
    }
    #[test]
    fn format() {
        assert_eq!(Complex::zero().to_string(), "0");
        assert_eq!(Complex::i().to_string(), "i");
        assert_eq!((-Complex::i()).to_string(), "-i");
        assert_eq!(Complex::new(frac("0"), frac("-3")).to_string(), "-3i");
        assert_eq!(Complex::new(frac("0"), frac("2/3")).to_string(), "(2/3)i");
        assert_eq!(Complex::new(frac("0"), frac("-2/3")).to_string(), "-(2/3)i");
        assert_eq!(Complex::new(frac("2"), frac("3")).to_string(), "2+3i");
        assert_eq!(Complex::new(frac("2/3"), frac("-4")).to_string(), "2/3-4i");
        assert_eq!(Complex::new(frac("-3"), frac("4/5")).to_string(), "-3+(4/5)i");
        assert_eq!(Complex::new(frac("-1/2"), frac("-3/4")).to_string(), "-1/2-(3/4)i");
        assert_eq!(Complex::new(frac("5"), frac("1")).to_string(), "5+i");
        assert_eq!(format!("{:>8}|", complex("2+3i")), "    2+3i|");
        assert_eq!(format!("{:<4}|", complex("-i")), "-i  |");
        assert_eq!(format!("{:+}", complex("2-(1/2)i")), "+2-(1/2)i");
        assert_eq!(format!("{:+}", complex("-2-i")), "-2-i");
        assert_eq!(format!("{:5}|", complex("1/2")), "  1/2|");
    }
    #[test]
    fn parse_literals() {
        assert_eq!(complex("0"), Complex::zero());
        assert_eq!(complex("12"), Complex::from(frac("12")));
        assert_eq!(complex("-123"), Complex::from(frac("-123")));
        assert_eq!(complex("4/2"), Complex::from(frac("2")));
        assert_eq!(complex("i"), Complex::i());
        assert_eq!(complex("-i"), -Complex::i());
        assert_eq!(complex("+i"), Complex::i());
        assert_eq!(complex("-3i"), Complex::new(frac("0"), frac("-3")));
        assert_eq!(complex("(2/3)i"), Complex::new(frac("0"), frac("2/3")));
        assert_eq!(complex("(-2/3)i"), Complex::new(frac("0"), frac("-2/3")));
        assert_eq!(complex("2/3i"), Complex::new(frac("0"), frac("2/3")));
        assert_eq!(complex("2+3i"), Complex::new(frac("2"), frac("3")));
        assert_eq!(complex("-1/2-(3/4)i"), Complex::new(frac("-1/2"), frac("-3/4")));
        assert_eq!(complex("-3+(4/5)i"), Complex::new(frac("-3"), frac("4/5")));
        assert_eq!(complex("2/3-4i"), Complex::new(frac("2/3"), frac("-4")));
        assert_eq!(complex("1-i"), Complex::new(frac("1"), frac("-1")));
    }
    #[test]
    fn invalid_literals() {
        for invalid in &["", "2+3", "2+3j", "((1)i", "(1/2i", "1+-2i", "i+2", "(1)+2i", "2i3", "2/-3i"] {
            assert!(invalid.parse::<Complex>().is_err(), "{:?} should be rejected", invalid);
        }
        for doubled in &["-(-2/3)i", "+(-2/3)i", "1-(+2)i", "(2/-3)i", "1/-2+i", "-1/+2"] {
            assert_eq!(doubled.parse::<Complex>(), Err(Error::invalid_literal(doubled)));
        }
        assert_eq!("1/0+i".parse::<Complex>(), Err(Error::invalid_fraction("1", "0")));
        assert_eq!("2+3".parse::<Complex>(), Err(Error::invalid_literal("2+3")));
        assert_eq!("2+3x".parse::<Complex>(), Err(Error::invalid_literal("2+3x")));
        assert_eq!("2+3xi".parse::<Complex>(), Err(Error::invalid_fraction("3x", "1")));
    }
    #[test]
    fn predicates() {
        assert!(Complex::zero().is_zero());
        assert!(complex("1").is_one());
        assert!(!complex("1+i").is_one());
        assert!(complex("3/4").is_real());
        assert!(!complex("i").is_real());
    }
    #[test]
    fn arithmetic() {
        assert_eq!(complex("1+2i") + complex("3-i"), complex("4+i"));
        assert_eq!(complex("1+2i") - complex("1+2i"), Complex::zero());
        assert_eq!(complex("1+i") * complex("1-i"), complex("2"));
        assert_eq!(complex("i") * complex("i"), complex("-1"));
        assert_eq!(complex("1/2+(1/3)i") * complex("6"), complex("3+2i"));
        assert_eq!(complex("2") / complex("1+i"), complex("1-i"));
        assert_eq!(complex("1") / complex("i"), complex("-i"));
        assert_eq!(complex("3+4i").norm_sqr(), frac("25"));
        assert_eq!(complex("3+4i").conjugate(), complex("3-4i"));
        assert_eq!(complex("1+i").checked_div(&Complex::zero()), Err(Error::DivisionByZero));
    }

    #[quickcheck]
    fn format_round_trip(z: Complex) -> bool {
        complex(&z.to_string()) == z
    }
    #[quickcheck]
    fn mul_commutes(a: Complex, b: Complex) -> bool {
        &a * &b == &b * &a
    }
    #[quickcheck]
    fn div_undoes_mul(a: Complex, b: Complex) -> TestResult {
        if b.is_zero() {
            return TestResult::discard();
        }
        TestResult::from_bool(&(&a * &b) / &b == a)
    }
}
