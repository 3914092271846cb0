//! # Penkit Postprocessor
//!
//! The pen-lift transform: a single pass over parsed G-code that brackets
//! every genuine travel move with servo lift/lower sequences and elides
//! travel moves too short to matter.

pub mod penlift;
pub mod pipeline;
pub mod servo;

pub use penlift::PenLiftProcessor;
pub use pipeline::{process_lines, process_text};
pub use servo::{servo_down_sequence, servo_up_sequence};
