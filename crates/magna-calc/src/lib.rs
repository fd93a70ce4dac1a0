//! # magna-calc
//!
//! An arithmetic expression calculator built on `magna-bigint`.
//!
//! Expressions combine decimal integer literals with `+ - * / %` and
//! parentheses under the usual precedence. Evaluation is exact at any
//! magnitude; the calculator consumes only the public `BigInt` surface.
//!
//! ```
//! use magna_bigint::BigInt;
//! use magna_calc::eval;
//!
//! assert_eq!(eval("(3 + 4) * 5").unwrap(), BigInt::new(35));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod evaluator;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod proptests;

pub use error::EvalError;
pub use evaluator::{eval, Evaluator};
pub use token::{AddOp, Bracket, MulOp, Token};
pub use tokenizer::Tokenizer;
