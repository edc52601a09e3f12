use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: Option<u32>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: Option<u32>) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// 1-based source line of the offending token, `None` once the stream is exhausted.
    pub fn get_line(&self) -> Option<u32> {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::ExpectedOperand
            | ErrorImpl::NumberParseError { .. } => "SyntaxError",
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        self.get_error_name() == "SyntaxError"
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => {
                if expected.contains(&TokenKind::Semicolon) {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        found
                    ))
                } else {
                    ErrorTip::Suggestion(format!("Unexpected token: `{}`", found))
                }
            }
            ErrorImpl::UnexpectedEndOfInput { .. } => ErrorTip::Suggestion(String::from(
                "The program ended in the middle of a statement",
            )),
            ErrorImpl::ExpectedOperand => ErrorTip::Suggestion(String::from(
                "Operands are numbers, identifiers or parenthesised expressions",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}\n line: {}", self.internal_error, line),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {}, found {:?}", expected_list(.expected), .found)]
    UnexpectedToken { expected: Vec<TokenKind>, found: String },
    #[error("expected {}, found end of input", expected_list(.expected))]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },
    #[error("expected number or identifier")]
    ExpectedOperand,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

fn expected_list(expected: &[TokenKind]) -> String {
    let names = expected
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    format!("[{}]", names)
}
