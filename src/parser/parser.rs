//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, the token matching
//! primitives every grammar rule is written in terms of, and the program
//! driver. The cursor only ever moves forward: each rule either consumes
//! tokens or fails, and the first failure aborts the whole parse.
//!
//! Nesting depth is bounded by the call stack. Deeply nested input
//! (thousands of parentheses or blocks) can exhaust it; no attempt is made
//! to detect that case.

use tracing::{debug, info};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// Holds an already-filtered token sequence (no whitespace or comments) and
/// the read position into it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Consumes and returns the current token if its kind is one of `kinds`.
    ///
    /// Returns `None` without moving when the kind differs or the stream is
    /// exhausted.
    pub fn match_kinds(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let token = self.tokens.get(self.pos)?;
        if !token.is_one_of_many(kinds) {
            return None;
        }

        self.pos += 1;
        Some(token.clone())
    }

    /// Like [`Parser::match_kinds`], but a mismatch is a syntax error.
    pub fn require(&mut self, kinds: &[TokenKind]) -> Result<Token, Error> {
        match self.match_kinds(kinds) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kinds)),
        }
    }

    /// Builds the error for a failed `require` at the current position.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let error = match self.tokens.get(self.pos) {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.to_vec(),
                    found: token.value.clone(),
                },
                Some(token.line),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected.to_vec(),
                },
                None,
            ),
        };

        debug!(pos = self.pos, %error, "required token missing");
        error
    }

    /// Builds an error of the given kind located at the current token.
    pub fn error_here(&self, error_impl: ErrorImpl) -> Error {
        let error = Error::new(error_impl, self.current_line());
        debug!(pos = self.pos, %error, "syntax error");
        error
    }

    /// Line of the current token, `None` once the stream is exhausted.
    pub fn current_line(&self) -> Option<u32> {
        self.tokens.get(self.pos).map(|token| token.line)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_position(&self) -> usize {
        self.pos
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. Statements are parsed one
/// after another until the stream is exhausted; the first syntax error is
/// returned and no partial program escapes.
///
/// # Arguments
///
/// * `tokens` - Tokens with whitespace and comments already removed
///
/// # Returns
///
/// The top-level statements in source order, or the first syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    info!(tokens = tokens.len(), "parsing program");
    let mut parser = Parser::new(tokens);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    info!(statements = body.len(), "parsed program");
    Ok(body)
}
