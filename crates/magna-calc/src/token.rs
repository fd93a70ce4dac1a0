//! Lexical tokens of an arithmetic expression.

use magna_bigint::BigInt;

/// One token of an expression, grouped by grammatical role so the
/// parser can match a whole operator class at once.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// A decimal integer literal.
    Number(BigInt),
    /// `(` or `)`.
    Bracket(Bracket),
    /// An additive operator.
    AddOp(AddOp),
    /// A multiplicative operator.
    MulOp(MulOp),
}

/// Parenthesis tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bracket {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Additive operators, the lowest precedence level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

/// Multiplicative operators, binding tighter than [`AddOp`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MulOp {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}
