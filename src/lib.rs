#![allow(clippy::module_inception)]

use colored::Colorize;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{ErrorCollector, ErrorImpl};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Literal, Token, TokenKind};

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Formats `error` with the offending source line:
///
/// ```text
/// Error: UnterminatedString (did you forget the closing `"`?)
/// -> script.lox
///   |
/// 3 | print "hello;
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{}: {}\n", "Error".red().bold(), error.get_error_name()));
    } else {
        out.push_str(&format!(
            "{}: {} ({})\n",
            "Error".red().bold(),
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line(source, line) {
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}
