//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a flat sequence of tokens for parsing. It handles:
//!
//! - Single pass, character-by-character recognition with one character of lookahead
//! - Recognition of keywords, identifiers, string and number literals, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
