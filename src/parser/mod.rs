//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a program. Expressions are parsed by precedence climbing, one
//! function per precedence level, underneath a recursive descent statement
//! parser. It handles:
//!
//! - Statement parsing (print, if/else, while, for, blocks, expression lists)
//! - Expression parsing (assignment, logical, bitwise, relational, arithmetic, unary)
//! - Fail-fast error reporting: the first violation aborts the parse

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
