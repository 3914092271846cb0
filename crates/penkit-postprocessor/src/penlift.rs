//! Pen-lift transformation state machine
//!
//! Plain plotter G-code encodes pen state only through the command type:
//! `G0` means travel (pen up), `G1` means draw (pen down). This processor
//! walks the command stream once, keeping the previous surviving record,
//! and rewrites it into an actuator-aware stream:
//!
//! - a travel move directly after a draw move is dropped when it ends at
//!   the same point or within `merge_threshold` of it
//! - every surviving travel move is bracketed by a servo lift sequence
//!   before and a lower sequence after
//! - draw moves and everything else pass through untouched

use penkit_core::{GcodeLine, ServoSettings};

use crate::servo::{servo_down_sequence, servo_up_sequence};

/// Single-pass pen-lift processor with one record of lookback.
pub struct PenLiftProcessor {
    settings: ServoSettings,
    previous: Option<GcodeLine>,
}

impl PenLiftProcessor {
    /// Create a processor for one run
    pub fn new(settings: ServoSettings) -> Self {
        Self {
            settings,
            previous: None,
        }
    }

    /// Process one input record, yielding zero to seven output records.
    ///
    /// An elided travel move leaves the lookback state untouched, so a
    /// later travel move is still compared against the last draw move.
    pub fn process(&mut self, line: &GcodeLine) -> Vec<GcodeLine> {
        if line.is_travel() {
            if let Some(prev) = self.previous.as_ref().filter(|p| p.is_draw()) {
                if prev.params == line.params {
                    tracing::debug!(line = %line, "dropping zero-length travel move");
                    return Vec::new();
                }
                if self.within_merge_threshold(prev, line) {
                    tracing::debug!(line = %line, "merging sub-threshold travel move");
                    return Vec::new();
                }
            }
        }

        let mut out = Vec::with_capacity(7);
        if line.is_travel() {
            out.extend(servo_up_sequence(&self.settings));
            out.push(line.clone());
            out.extend(servo_down_sequence(&self.settings));
        } else {
            out.push(line.clone());
        }
        self.previous = Some(line.clone());
        out
    }

    /// Finish the stream: one unconditional lift so the plotter always
    /// ends pen-up.
    pub fn finish(&mut self) -> Vec<GcodeLine> {
        servo_up_sequence(&self.settings)
    }

    /// True when both records carry `X` and `Y` and their planar distance
    /// is within the merge threshold. Missing axes mean "not mergeable".
    fn within_merge_threshold(&self, prev: &GcodeLine, line: &GcodeLine) -> bool {
        match (prev.xy(), line.xy()) {
            (Some((x1, y1)), Some((x2, y2))) => {
                (x2 - x1).hypot(y2 - y1) <= self.settings.merge_threshold
            }
            _ => false,
        }
    }
}
