use crate::{BigInt, BigUint, Complex, Fraction, Sign};

use num_traits::{One, Zero};
use quickcheck::{empty_shrinker, Arbitrary, Gen};

// Upper bounds on generated digit counts
const MAX_DIGITS: usize = 24;
const MAX_FRACTION_DIGITS: usize = 12;

fn digits(g: &mut Gen, max: usize) -> BigUint {
    let len = usize::arbitrary(g) % max.min(g.size().max(1)) + 1;
    let text: String = (0..len).map(|_| char::from(b'0' + u8::arbitrary(g) % 10)).collect();
    let text = text.trim_start_matches('0');
    if text.is_empty() {
        BigUint::zero()
    } else {
        text.parse().expect("generated digits are canonical")
    }
}
fn shrink_digits(number: &BigUint) -> Box<dyn Iterator<Item = BigUint>> {
    if number.is_zero() {
        return empty_shrinker();
    }
    // Dropping the last digit, then everything
    let shorter = number.clone() / 10u8;
    if shorter.is_zero() {
        Box::new(std::iter::once(BigUint::zero()))
    } else {
        Box::new(vec![BigUint::zero(), shorter].into_iter())
    }
}
fn signed(g: &mut Gen, max: usize) -> BigInt {
    let sign = if bool::arbitrary(g) { Sign::Negative } else { Sign::Positive };
    BigInt::from_parts(sign, digits(g, max))
}

impl Arbitrary for BigUint {
    fn arbitrary(g: &mut Gen) -> Self {
        digits(g, MAX_DIGITS)
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        shrink_digits(self)
    }
}

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        signed(g, MAX_DIGITS)
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let sign = self.sign();
        Box::new(shrink_digits(self.magnitude()).map(move |number| BigInt::from_parts(sign, number)))
    }
}

impl Arbitrary for Fraction {
    fn arbitrary(g: &mut Gen) -> Self {
        let numerator = signed(g, MAX_FRACTION_DIGITS);
        let mut denominator = signed(g, MAX_FRACTION_DIGITS);
        if denominator.is_zero() {
            denominator = BigInt::one();
        }
        Fraction::new(numerator, denominator).expect("denominator is not zero")
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.is_zero() {
            return empty_shrinker();
        }
        let mut simpler = vec![Fraction::zero(), self.signed_numerator().into()];
        if self.is_negative() {
            simpler.push(self.abs());
        }
        simpler.retain(|f| f != self);
        Box::new(simpler.into_iter())
    }
}

impl Arbitrary for Complex {
    fn arbitrary(g: &mut Gen) -> Self {
        Complex::new(Fraction::arbitrary(g), Fraction::arbitrary(g))
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let imaginary = self.imaginary.clone();
        let real = self.real.clone();
        Box::new(
            self.real.shrink().map(move |real| Complex::new(real, imaginary.clone()))
                .chain(self.imaginary.shrink().map(move |imaginary| Complex::new(real.clone(), imaginary)))
        )
    }
}
