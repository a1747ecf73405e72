//! Declared numeric ranges for kind-specific fields.
//!
//! The same constants drive the shell's read-until-valid prompts and the
//! dispatcher's range check, so both sides always agree on the bounds.

use std::fmt;

use crate::error::ValidationError;

/// Inclusive range accepted by one numeric device field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: u16,
    pub max: u16,
}

impl FieldRange {
    #[must_use]
    pub const fn new(field: &'static str, min: u16, max: u16) -> Self {
        Self { field, min, max }
    }

    #[must_use]
    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Return `value` unchanged when it lies within the range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] otherwise.
    pub fn check(&self, value: u16) -> Result<u16, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

pub const LIGHTBULB_BRIGHTNESS: FieldRange = FieldRange::new("brightness", 0, 100);
pub const LIGHT_BRIGHTNESS: FieldRange = FieldRange::new("brightness", 1, 100);
pub const TV_VOLUME: FieldRange = FieldRange::new("volume", 1, 100);
pub const AIR_CONDITIONER_TEMPERATURE: FieldRange = FieldRange::new("temperature", 16, 30);
pub const STOVE_OVEN_TEMPERATURE: FieldRange = FieldRange::new("temperature", 100, 500);
pub const EXHAUST_FAN_SPEED: FieldRange = FieldRange::new("speed", 1, 5);
pub const HUMIDIFIER_HUMIDITY: FieldRange = FieldRange::new("humidity", 30, 70);
pub const THERMOSTAT_TEMPERATURE: FieldRange = FieldRange::new("temperature", 16, 30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_both_bounds() {
        assert_eq!(AIR_CONDITIONER_TEMPERATURE.check(16), Ok(16));
        assert_eq!(AIR_CONDITIONER_TEMPERATURE.check(30), Ok(30));
    }

    #[test]
    fn should_reject_value_just_outside_bounds() {
        assert!(AIR_CONDITIONER_TEMPERATURE.check(15).is_err());
        assert_eq!(
            AIR_CONDITIONER_TEMPERATURE.check(31),
            Err(ValidationError::OutOfRange {
                field: "temperature",
                value: 31,
                min: 16,
                max: 30,
            })
        );
    }

    #[test]
    fn should_allow_zero_brightness_for_lightbulb_only() {
        assert!(LIGHTBULB_BRIGHTNESS.contains(0));
        assert!(!LIGHT_BRIGHTNESS.contains(0));
    }

    #[test]
    fn should_display_as_min_dash_max() {
        assert_eq!(STOVE_OVEN_TEMPERATURE.to_string(), "100-500");
        assert_eq!(EXHAUST_FAN_SPEED.to_string(), "1-5");
    }
}
