//! Error types for tokenizing and evaluating expressions.

use magna_bigint::{ArithmeticError, ParseBigIntError};
use thiserror::Error;

/// Errors from tokenizing or evaluating an arithmetic expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A character that starts no recognized token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// The input ended where a number or `(` was expected.
    #[error("expression ends unexpectedly, expected a number or '('")]
    UnexpectedEnd,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token, expected a number or '('")]
    UnexpectedToken,

    /// An opening `(` without a matching `)`.
    #[error("expected ')'")]
    UnbalancedParenthesis,

    /// A numeric literal failed to parse.
    #[error("malformed numeric literal: {0}")]
    Number(#[from] ParseBigIntError),

    /// Division or remainder by zero during evaluation.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
