//! # magna-bigint
//!
//! Arbitrary precision signed integer arithmetic over decimal limbs.
//!
//! This crate provides:
//! - A signed big integer ([`BigInt`]) with `+ - * / %`, a total order,
//!   and exact round-tripping between values and decimal strings
//! - Explicit, checked division and remainder ([`BigInt::checked_div`],
//!   [`BigInt::checked_rem`]) for callers that must handle a zero divisor
//!
//! ## Representation
//!
//! Values are stored as a sign and a sequence of base-100 limbs, least
//! significant first. Every operation builds a new value; nothing is
//! mutated in place.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
mod limb;
mod magnitude;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseBigIntError};
pub use integer::BigInt;
