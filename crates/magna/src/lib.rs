//! # Magna
//!
//! Arbitrary precision signed integer arithmetic with an expression
//! calculator front end.
//!
//! ## Features
//!
//! - **Exact arithmetic**: `+ - * / %` over integers of any magnitude
//! - **Total ordering**: comparisons consistent with signed semantics
//! - **Decimal round-tripping**: parsing and printing are exact inverses
//! - **Expression evaluation**: `+ - * / % ( )` with standard precedence
//!
//! ## Quick Start
//!
//! ```
//! use magna::prelude::*;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b = BigInt::new(42);
//! assert_eq!((&a * &b).to_string(), "5185185143185185138");
//!
//! assert_eq!(eval("(3 + 4) * 5").unwrap(), BigInt::new(35));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use magna_bigint as bigint;
pub use magna_calc as calc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use magna_bigint::{ArithmeticError, BigInt, ParseBigIntError};
    pub use magna_calc::{eval, EvalError, Evaluator, Tokenizer};
}
