//! Streaming tokenizer with one token of lookahead.

use std::iter::Peekable;
use std::str::Chars;

use magna_bigint::BigInt;

use crate::error::EvalError;
use crate::token::{AddOp, Bracket, MulOp, Token};

/// Splits an expression into tokens, consuming one character at a time
/// and holding one token of lookahead for the parser.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    current: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input` and reads the first token.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnexpectedCharacter`] if the input starts
    /// with a character that begins no token.
    pub fn new(input: &'a str) -> Result<Self, EvalError> {
        let mut tokenizer = Self {
            chars: input.chars().peekable(),
            current: None,
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    /// The token in the lookahead slot, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Reads the next token into the lookahead slot.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnexpectedCharacter`] for a character that
    /// begins no token, or a parse error for a malformed literal.
    pub fn advance(&mut self) -> Result<(), EvalError> {
        self.skip_whitespace();

        let Some(c) = self.chars.next() else {
            self.current = None;
            return Ok(());
        };

        self.current = Some(match c {
            '(' => Token::Bracket(Bracket::Open),
            ')' => Token::Bracket(Bracket::Close),
            '+' => Token::AddOp(AddOp::Plus),
            '-' => Token::AddOp(AddOp::Minus),
            '*' => Token::MulOp(MulOp::Mul),
            '/' => Token::MulOp(MulOp::Div),
            '%' => Token::MulOp(MulOp::Rem),
            digit if digit.is_ascii_digit() => {
                let mut literal = String::new();
                literal.push(digit);
                while let Some(&next) = self.chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    literal.push(next);
                    self.chars.next();
                }
                Token::Number(literal.parse::<BigInt>()?)
            }
            other => return Err(EvalError::UnexpectedCharacter(other)),
        });

        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}
