//! Error types and error collection for the scanner.
//!
//! This module defines the lexical errors the scanner can detect:
//!
//! - Error structures tagged with the source line they were found on
//! - Specific error variants for unexpected characters and unterminated strings
//! - Helpful tips shown alongside the error message
//! - The collector that accumulates every error of a scanning pass

pub mod errors;
