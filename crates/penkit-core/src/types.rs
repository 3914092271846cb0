//! G-Code command record types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A G-Code command pair: letter plus number, e.g. `G0` or `M280`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Command letter (`G`, `M`, ...)
    pub letter: char,
    /// Command number (`0` for `G0`, `280` for `M280`, ...)
    pub number: u16,
}

impl Word {
    /// Rapid/travel move (pen up)
    pub const TRAVEL: Word = Word::new('G', 0);
    /// Linear/draw move (pen down)
    pub const DRAW: Word = Word::new('G', 1);
    /// Dwell
    pub const DWELL: Word = Word::new('G', 4);
    /// Servo position (RC servo on pin P, angle S)
    pub const SERVO: Word = Word::new('M', 280);

    /// Create a new command word
    pub const fn new(letter: char, number: u16) -> Self {
        Self { letter, number }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

/// One line of G-Code: a command word, its parameters, and an optional
/// trailing comment.
///
/// Parameters keep their source order so rendering is deterministic, but
/// `IndexMap` equality is order-independent, which is what the pen-lift
/// merge decision compares.
///
/// Records are never mutated once built; the post-processor consumes them
/// read-only and synthesizes fresh records for servo control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcodeLine {
    /// Command word, e.g. `G1`
    pub command: Word,
    /// Parameter letters mapped to their numeric values
    pub params: IndexMap<char, f64>,
    /// Trailing comment text, without the `;` marker
    pub comment: Option<String>,
}

impl GcodeLine {
    /// Create a new line with no parameters
    pub fn new(command: Word) -> Self {
        Self {
            command,
            params: IndexMap::new(),
            comment: None,
        }
    }

    /// Add a parameter, keeping insertion order
    pub fn with_param(mut self, letter: char, value: f64) -> Self {
        self.params.insert(letter, value);
        self
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Look up a parameter value by letter
    pub fn param(&self, letter: char) -> Option<f64> {
        self.params.get(&letter).copied()
    }

    /// Planar position, if both `X` and `Y` are present
    pub fn xy(&self) -> Option<(f64, f64)> {
        Some((self.param('X')?, self.param('Y')?))
    }

    /// True for a travel move (`G0`)
    pub fn is_travel(&self) -> bool {
        self.command == Word::TRAVEL
    }

    /// True for a draw move (`G1`)
    pub fn is_draw(&self) -> bool {
        self.command == Word::DRAW
    }

    /// Render this line back to G-Code text.
    ///
    /// Numeric values use minimal formatting (`X10`, not `X10.000`) so
    /// coordinates survive a parse/render round trip unchanged.
    pub fn to_text(&self) -> String {
        let mut out = self.command.to_string();
        for (letter, value) in &self.params {
            let _ = write!(out, " {}{}", letter, value);
        }
        if let Some(comment) = &self.comment {
            let _ = write!(out, " ; {}", comment);
        }
        out
    }
}

impl std::fmt::Display for GcodeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
