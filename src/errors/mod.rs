//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the tokenizer and the
//! parser. It includes:
//!
//! - An error structure carrying the source line, when one is known
//! - The error variants raised while tokenizing and parsing
//! - Error formatting and optional suggestions for the user

pub mod errors;
