#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Returns the text of a 1-based line of `source`, without its line break.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}

/// Formats an error for the terminal.
///
/// ```text
/// Error: SyntaxError (Unexpected token: `}`, did you miss a semicolon?)
/// -> program.arith
///    |
/// 20 | x = 1 }
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let snippet = error
        .get_line()
        .and_then(|line| get_source_line(source, line).map(|text| (line, text)));

    match snippet {
        Some((line, text)) => {
            let line_string = line.to_string();
            let padding = line_string.len() + 2;
            out.push_str(&format!("{:>padding$}\n", "|"));
            out.push_str(&format!("{} | {}\n", line_string, text.trim()));
        }
        None => out.push_str("   | <end of input>\n"),
    }

    out.push_str(&format!("{}\n", error.get_message()));
    out
}
