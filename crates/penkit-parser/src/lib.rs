//! # Penkit Parser
//!
//! Turns raw G-code text into ordered `GcodeLine` records and back.
//! Rendering lives on `GcodeLine` itself (`to_text`); this crate owns the
//! textual input boundary: comment stripping, word tokenization, and
//! per-line error reporting.

pub mod parser;

pub use parser::{parse, parse_line};
