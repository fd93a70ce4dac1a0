//! Single-limb arithmetic primitives.
//!
//! Every multi-limb operation in this crate reduces to the two fold
//! functions defined here, applied once for the operand pair and once
//! for the incoming carry or borrow at each position.

/// One fixed-radix digit of the internal representation.
pub(crate) type Limb = u64;

/// The radix each limb is taken modulo.
///
/// A power of ten, so a limb maps directly onto a fixed-width chunk of
/// the decimal rendering.
pub(crate) const BASE: Limb = 100;

/// Number of decimal digits covered by one limb.
pub(crate) const LIMB_WIDTH: usize = 2;

/// Adds two limbs, returning the digit and the carry out (0 or 1).
///
/// Both inputs must be below [`BASE`]. The wrap is detected by the
/// reduced sum falling below the larger input.
pub(crate) fn add_carrying(a: Limb, b: Limb) -> (Limb, Limb) {
    let digit = (a + b) % BASE;
    (digit, Limb::from(digit < a.max(b)))
}

/// Subtracts `b` from `a`, returning the digit and the borrow out (0 or 1).
///
/// Both inputs must be below [`BASE`].
pub(crate) fn sub_borrowing(a: Limb, b: Limb) -> (Limb, Limb) {
    if a >= b {
        (a - b, 0)
    } else {
        (BASE - (b - a), 1)
    }
}
