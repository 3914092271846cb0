//! Servo control sequence builders
//!
//! The lift and lower sequences are fixed three-line templates: a
//! zero-delay dwell acting as a planner synchronization barrier, the
//! `M280` servo position command, and a settle dwell. Only the angle and
//! delay values come from settings.

use penkit_core::{GcodeLine, ServoSettings, Word};

/// `G4` dwell with the given delay
pub fn dwell(delay_ms: u64, comment: &str) -> GcodeLine {
    GcodeLine::new(Word::DWELL)
        .with_param('P', delay_ms as f64)
        .with_comment(comment)
}

/// `M280` positioning the pen servo (pin `P0`) at the given angle
pub fn servo_position(angle: u16, comment: &str) -> GcodeLine {
    GcodeLine::new(Word::SERVO)
        .with_param('P', 0.0)
        .with_param('S', f64::from(angle))
        .with_comment(comment)
}

/// The three-line sequence lifting the pen
pub fn servo_up_sequence(settings: &ServoSettings) -> Vec<GcodeLine> {
    vec![
        dwell(0, "Sync"),
        servo_position(settings.up_angle, "Servo up"),
        dwell(settings.up_delay_ms, "Wait servo up"),
    ]
}

/// The three-line sequence lowering the pen
pub fn servo_down_sequence(settings: &ServoSettings) -> Vec<GcodeLine> {
    vec![
        dwell(0, "Sync"),
        servo_position(settings.down_angle, "Servo down"),
        dwell(settings.down_delay_ms, "Wait servo down"),
    ]
}
