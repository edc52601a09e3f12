//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, numbers and operators
//! - Line tracking for error reporting
//! - Dropping whitespace, line and block comments before the parser sees them

pub mod lexer;
pub mod tokens;
