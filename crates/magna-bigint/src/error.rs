//! Error types for big integer parsing and arithmetic.

use thiserror::Error;

/// Errors from parsing a decimal string into a big integer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The input contained no digits.
    #[error("no digits in input")]
    Empty,

    /// A character other than an ASCII digit appeared in the digit run.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of the character within the parsed string.
        position: usize,
    },
}

/// Errors from checked arithmetic operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
