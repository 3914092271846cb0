//! Servo actuation settings
//!
//! Holds the pen-lift parameters supplied once per run: servo angles and
//! settle delays for the up/down positions, and the planar distance below
//! which a travel move between two draw moves is elided.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

/// Pen-lift servo settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServoSettings {
    /// Servo angle when the pen is down (degrees)
    pub down_angle: u16,
    /// Settle delay after lowering the pen (milliseconds)
    pub down_delay_ms: u64,
    /// Servo angle when the pen is up (degrees)
    pub up_angle: u16,
    /// Settle delay after lifting the pen (milliseconds)
    pub up_delay_ms: u64,
    /// Maximum planar distance between a draw move and a following travel
    /// move for which the travel is treated as noise and elided
    pub merge_threshold: f64,
}

impl Default for ServoSettings {
    fn default() -> Self {
        Self {
            down_angle: 160,
            down_delay_ms: 100,
            up_angle: 143,
            up_delay_ms: 100,
            merge_threshold: 0.2,
        }
    }
}

impl ServoSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.down_angle > 180 {
            return Err(SettingsError::InvalidSetting {
                key: "down_angle".to_string(),
                reason: "must be at most 180".to_string(),
            });
        }
        if self.up_angle > 180 {
            return Err(SettingsError::InvalidSetting {
                key: "up_angle".to_string(),
                reason: "must be at most 180".to_string(),
            });
        }
        if !self.merge_threshold.is_finite() || self.merge_threshold < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "merge_threshold".to_string(),
                reason: "must be finite and non-negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServoSettings::default();
        assert_eq!(settings.down_angle, 160);
        assert_eq!(settings.down_delay_ms, 100);
        assert_eq!(settings.up_angle, 143);
        assert_eq!(settings.up_delay_ms, 100);
        assert_eq!(settings.merge_threshold, 0.2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let settings: ServoSettings = serde_json::from_str(r#"{"up_angle": 146}"#).unwrap();
        assert_eq!(settings.up_angle, 146);
        assert_eq!(settings.down_angle, 160);
        assert_eq!(settings.merge_threshold, 0.2);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let settings = ServoSettings {
            up_angle: 200,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ServoSettings {
            merge_threshold: -1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = ServoSettings {
            merge_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
