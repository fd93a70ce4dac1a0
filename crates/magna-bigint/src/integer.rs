//! Signed arbitrary precision integers.
//!
//! This module pairs a sign with an unsigned limb magnitude and builds
//! the full signed operator surface on top of the magnitude primitives.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{ArithmeticError, ParseBigIntError};
use crate::limb::{Limb, BASE, LIMB_WIDTH};
use crate::magnitude::Magnitude;

/// The sign of a big integer. Zero always carries `Positive`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Sign {
    Negative,
    Positive,
}

impl Sign {
    fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    fn product(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// An arbitrary precision signed integer.
///
/// Every arithmetic operation constructs a new value; operands are
/// never mutated. Operators are implemented for owned and borrowed
/// operand combinations, so chained expressions can avoid clones.
///
/// The `/` and `%` operators truncate toward zero and panic on a zero
/// divisor; use [`BigInt::checked_div`] and [`BigInt::checked_rem`] to
/// handle that case explicitly. The remainder is always non-negative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: Magnitude,
}

impl BigInt {
    /// Creates a big integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Pairs a sign with a magnitude, normalizing the sign of zero.
    fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.sign == Sign::Positive {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Divides, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.magnitude.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (quotient, _) = self.magnitude.div_rem(&rhs.magnitude);
        Ok(Self::from_parts(self.sign.product(rhs.sign), quotient))
    }

    /// Computes the remainder, always in `[0, |rhs|)`.
    ///
    /// Defined as `self - (self / rhs) * rhs`, shifted up by `|rhs|`
    /// once when that difference comes out negative.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let quotient = self.checked_div(rhs)?;
        let mut remainder = self - &(&quotient * rhs);
        if remainder.is_negative() {
            remainder = &remainder + &rhs.abs();
        }
        Ok(remainder)
    }

    /// Computes self^exp by binary exponentiation.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;

        while exp > 0 {
            if exp % 2 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp /= 2;
        }

        result
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            // Both negative: the larger magnitude is the smaller number.
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::Display for BigInt {
    /// Renders the canonical decimal form: a `-` prefix iff negative,
    /// the most significant limb unpadded, and every following limb
    /// zero-padded to the limb width so the digits concatenate exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        let mut limbs = self.magnitude.limbs().iter().rev();
        if let Some(leading) = limbs.next() {
            write!(f, "{leading}")?;
        }
        for limb in limbs {
            write!(f, "{limb:0width$}", width = LIMB_WIDTH)?;
        }
        Ok(())
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses an optional leading `-` followed by at least one decimal
    /// digit. The digit run is split into limb-width chunks from the
    /// least significant end, one chunk per limb.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };

        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((offset, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit {
                found,
                position: offset + (s.len() - digits.len()),
            });
        }

        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / LIMB_WIDTH + 1);
        for chunk in bytes.rchunks(LIMB_WIDTH) {
            let mut limb: Limb = 0;
            for &byte in chunk {
                limb = limb * 10 + Limb::from(byte - b'0');
            }
            limbs.push(limb);
        }

        Ok(Self::from_parts(sign, Magnitude::new(limbs)))
    }
}

// Arithmetic operations. The borrowed-operand impls hold the logic;
// the owned forms delegate.

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        if self.sign == rhs.sign {
            BigInt::from_parts(self.sign, self.magnitude.add(&rhs.magnitude))
        } else if self.magnitude < rhs.magnitude {
            BigInt::from_parts(rhs.sign, rhs.magnitude.sub(&self.magnitude))
        } else {
            BigInt::from_parts(self.sign, self.magnitude.sub(&rhs.magnitude))
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &-rhs
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    /// Schoolbook long multiplication at limb granularity: one shifted
    /// single-limb product per limb of the left operand, accumulated by
    /// magnitude addition.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut accumulator = Magnitude::zero();
        for (position, &limb) in self.magnitude.limbs().iter().enumerate() {
            accumulator = accumulator.add(&rhs.magnitude.mul_limb(limb, position));
        }
        BigInt::from_parts(self.sign.product(rhs.sign), accumulator)
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::from_parts(self.sign.flipped(), self.magnitude.clone())
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;

    fn add(self, rhs: &BigInt) -> Self::Output {
        &self + rhs
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        &self - rhs
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        &self * rhs
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<u64> for BigInt {
    /// Bootstraps the magnitude with native division: peel one limb per
    /// round of `value % BASE` / `value / BASE`.
    fn from(value: u64) -> Self {
        let mut limbs = Vec::new();
        let mut rest = value;
        loop {
            limbs.push(rest % BASE);
            rest /= BASE;
            if rest == 0 {
                break;
            }
        }
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::new(limbs),
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let positive = Self::from(value.unsigned_abs());
        if value < 0 {
            -positive
        } else {
            positive
        }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}
