//! Unsigned limb-sequence arithmetic.
//!
//! A magnitude is the absolute value of a big integer, stored as limbs
//! in ascending order of significance. Sequences are kept canonical:
//! at least one limb, and no most-significant zero limbs except for the
//! single-limb zero. Comparison relies on this canonical form.

use std::cmp::Ordering;

use crate::limb::{add_carrying, sub_borrowing, Limb, BASE};

/// The unsigned limb sequence behind a big integer's absolute value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Magnitude {
    limbs: Vec<Limb>,
}

impl Magnitude {
    /// Creates a magnitude from raw limbs, normalizing to canonical form.
    pub(crate) fn new(mut limbs: Vec<Limb>) -> Self {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        Self { limbs }
    }

    /// The canonical zero magnitude.
    pub(crate) fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    /// The magnitude of one.
    pub(crate) fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// The magnitude of `BASE^exp`: `exp` zero limbs below a single one.
    fn power_of_base(exp: usize) -> Self {
        let mut limbs = vec![0; exp];
        limbs.push(1);
        Self { limbs }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub(crate) fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Limbs in ascending order of significance.
    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Adds two magnitudes limb by limb.
    ///
    /// Each position folds the carry primitive twice: once for the
    /// operand pair and once for the incoming carry. The walk continues
    /// past the shorter operand (missing limbs read as zero) and past
    /// both ends while a carry remains.
    pub(crate) fn add(&self, other: &Self) -> Self {
        let mut limbs = Vec::with_capacity(self.limbs.len().max(other.limbs.len()) + 1);
        let mut carry: Limb = 0;
        let mut i = 0;

        while i < self.limbs.len() || i < other.limbs.len() || carry != 0 {
            let a = self.limbs.get(i).copied().unwrap_or(0);
            let b = other.limbs.get(i).copied().unwrap_or(0);

            let (digit, first_carry) = add_carrying(a, b);
            let (digit, second_carry) = add_carrying(digit, carry);

            limbs.push(digit);
            carry = first_carry + second_carry;
            i += 1;
        }

        Self::new(limbs)
    }

    /// Subtracts `other` from `self`.
    ///
    /// Callers must guarantee `self >= other`; the signed layer orders
    /// its operands before calling here.
    pub(crate) fn sub(&self, other: &Self) -> Self {
        debug_assert!(*self >= *other, "magnitude subtraction would underflow");

        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow: Limb = 0;
        let mut i = 0;

        while i < self.limbs.len() || borrow != 0 {
            let a = self.limbs.get(i).copied().unwrap_or(0);
            let b = other.limbs.get(i).copied().unwrap_or(0);

            let (digit, first_borrow) = sub_borrowing(a, b);
            let (digit, second_borrow) = sub_borrowing(digit, borrow);

            limbs.push(digit);
            borrow = first_borrow + second_borrow;
            i += 1;
        }

        Self::new(limbs)
    }

    /// Multiplies every limb by a scalar and shifts the result left by
    /// `shift` limb positions, i.e. computes `self * factor * BASE^shift`.
    ///
    /// A single-limb product can exceed `BASE`, so the carry may spill
    /// across several output limbs after the main loop. This is the sole
    /// multiplication primitive; the full product is a sum of these.
    pub(crate) fn mul_limb(&self, factor: Limb, shift: usize) -> Self {
        let mut limbs = vec![0; shift];
        limbs.reserve(self.limbs.len() + 2);

        let mut carry: Limb = 0;
        for &limb in &self.limbs {
            let product = limb * factor + carry;
            limbs.push(product % BASE);
            carry = product / BASE;
        }
        while carry != 0 {
            limbs.push(carry % BASE);
            carry /= BASE;
        }

        Self::new(limbs)
    }

    /// Truncating quotient and remainder by repeated scaled subtraction.
    ///
    /// Each round shifts the divisor to the largest power-of-`BASE`
    /// multiple still within the remainder, subtracts it once, and
    /// accumulates the matching power of `BASE` into the quotient. The
    /// scaling search continues while the next multiple still fits
    /// (`<=`), so the boundary case lands on the larger shift.
    ///
    /// Callers must guarantee `divisor` is non-zero.
    pub(crate) fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero(), "magnitude division by zero");

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while remainder >= *divisor {
            let mut shift = 0;
            while divisor.mul_limb(1, shift + 1) <= remainder {
                shift += 1;
            }
            remainder = remainder.sub(&divisor.mul_limb(1, shift));
            quotient = quotient.add(&Self::power_of_base(shift));
        }

        (quotient, remainder)
    }
}

impl Ord for Magnitude {
    /// Compares by limb count first (valid under canonical form), then
    /// lexicographically from the most significant limb down.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
