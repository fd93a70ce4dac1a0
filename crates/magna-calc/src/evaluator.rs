//! Recursive-descent evaluation of arithmetic expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := primary (('*' | '/' | '%') primary)*
//! primary := number | '(' sum ')'
//! ```

use magna_bigint::BigInt;

use crate::error::EvalError;
use crate::token::{AddOp, Bracket, MulOp, Token};
use crate::tokenizer::Tokenizer;

/// Evaluates a tokenized expression by recursive descent, consuming
/// one token of lookahead at each step.
pub struct Evaluator<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Evaluator<'a> {
    /// Wraps a tokenizer for evaluation.
    #[must_use]
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self { tokenizer }
    }

    /// Evaluates the whole expression, requiring it to be fully consumed.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] for syntax errors or division by zero.
    pub fn eval(mut self) -> Result<BigInt, EvalError> {
        let value = self.sum()?;
        match self.tokenizer.current() {
            None => Ok(value),
            Some(_) => Err(EvalError::UnexpectedToken),
        }
    }

    fn sum(&mut self) -> Result<BigInt, EvalError> {
        let mut lhs = self.product()?;

        while let Some(&Token::AddOp(op)) = self.tokenizer.current() {
            self.tokenizer.advance()?;
            let rhs = self.product()?;
            lhs = match op {
                AddOp::Plus => lhs + rhs,
                AddOp::Minus => lhs - rhs,
            };
        }

        Ok(lhs)
    }

    fn product(&mut self) -> Result<BigInt, EvalError> {
        let mut lhs = self.primary()?;

        while let Some(&Token::MulOp(op)) = self.tokenizer.current() {
            self.tokenizer.advance()?;
            let rhs = self.primary()?;
            lhs = match op {
                MulOp::Mul => lhs * rhs,
                MulOp::Div => lhs.checked_div(&rhs)?,
                MulOp::Rem => lhs.checked_rem(&rhs)?,
            };
        }

        Ok(lhs)
    }

    fn primary(&mut self) -> Result<BigInt, EvalError> {
        match self.tokenizer.current() {
            None => Err(EvalError::UnexpectedEnd),
            Some(Token::Number(value)) => {
                let value = value.clone();
                self.tokenizer.advance()?;
                Ok(value)
            }
            Some(Token::Bracket(Bracket::Open)) => {
                self.tokenizer.advance()?;
                let value = self.sum()?;
                match self.tokenizer.current() {
                    Some(Token::Bracket(Bracket::Close)) => {
                        self.tokenizer.advance()?;
                        Ok(value)
                    }
                    _ => Err(EvalError::UnbalancedParenthesis),
                }
            }
            Some(_) => Err(EvalError::UnexpectedToken),
        }
    }
}

/// Tokenizes and evaluates `input` in one call.
///
/// # Errors
///
/// Returns an [`EvalError`] for syntax errors or division by zero.
pub fn eval(input: &str) -> Result<BigInt, EvalError> {
    Evaluator::new(Tokenizer::new(input)?).eval()
}
