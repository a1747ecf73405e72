//! Kind-specific attributes carried by a device.
//!
//! Every field starts as `None` and is filled in by the first configuration.
//! Enum-like text fields (fan speed, mode, position) are stored verbatim.

use serde::{Deserialize, Serialize};

use super::kind::DeviceKind;
use crate::error::ValidationError;
use crate::range;

/// Attribute payload of a device; the variant is the device's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attributes {
    Lightbulb {
        brightness: Option<u16>,
        color: Option<String>,
    },
    Light {
        brightness: Option<u16>,
    },
    Tv {
        channel: Option<String>,
        volume: Option<u16>,
    },
    AirConditioner {
        temperature: Option<u16>,
        fan_speed: Option<String>,
    },
    StoveOven {
        temperature: Option<u16>,
        mode: Option<String>,
    },
    ExhaustFan {
        speed: Option<u16>,
    },
    Humidifier {
        humidity: Option<u16>,
    },
    Blinds {
        position: Option<String>,
    },
    Thermostat {
        temperature: Option<u16>,
        mode: Option<String>,
    },
    SecurityCamera {
        resolution: Option<String>,
        recording: Option<bool>,
    },
}

impl Attributes {
    /// Attributes of a never-configured device of `kind`.
    #[must_use]
    pub fn unset(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Lightbulb => Self::Lightbulb {
                brightness: None,
                color: None,
            },
            DeviceKind::Light => Self::Light { brightness: None },
            DeviceKind::Tv => Self::Tv {
                channel: None,
                volume: None,
            },
            DeviceKind::AirConditioner => Self::AirConditioner {
                temperature: None,
                fan_speed: None,
            },
            DeviceKind::StoveOven => Self::StoveOven {
                temperature: None,
                mode: None,
            },
            DeviceKind::ExhaustFan => Self::ExhaustFan { speed: None },
            DeviceKind::Humidifier => Self::Humidifier { humidity: None },
            DeviceKind::Blinds => Self::Blinds { position: None },
            DeviceKind::Thermostat => Self::Thermostat {
                temperature: None,
                mode: None,
            },
            DeviceKind::SecurityCamera => Self::SecurityCamera {
                resolution: None,
                recording: None,
            },
        }
    }

    /// Lightbulb with a brightness chosen at creation and no color yet.
    #[must_use]
    pub fn lightbulb(brightness: u16) -> Self {
        Self::Lightbulb {
            brightness: Some(brightness),
            color: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Lightbulb { .. } => DeviceKind::Lightbulb,
            Self::Light { .. } => DeviceKind::Light,
            Self::Tv { .. } => DeviceKind::Tv,
            Self::AirConditioner { .. } => DeviceKind::AirConditioner,
            Self::StoveOven { .. } => DeviceKind::StoveOven,
            Self::ExhaustFan { .. } => DeviceKind::ExhaustFan,
            Self::Humidifier { .. } => DeviceKind::Humidifier,
            Self::Blinds { .. } => DeviceKind::Blinds,
            Self::Thermostat { .. } => DeviceKind::Thermostat,
            Self::SecurityCamera { .. } => DeviceKind::SecurityCamera,
        }
    }

    /// Check every numeric value that is present against its declared range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (value, field_range) = match self {
            Self::Lightbulb { brightness, .. } => (brightness, range::LIGHTBULB_BRIGHTNESS),
            Self::Light { brightness } => (brightness, range::LIGHT_BRIGHTNESS),
            Self::Tv { volume, .. } => (volume, range::TV_VOLUME),
            Self::AirConditioner { temperature, .. } => {
                (temperature, range::AIR_CONDITIONER_TEMPERATURE)
            }
            Self::StoveOven { temperature, .. } => (temperature, range::STOVE_OVEN_TEMPERATURE),
            Self::ExhaustFan { speed } => (speed, range::EXHAUST_FAN_SPEED),
            Self::Humidifier { humidity } => (humidity, range::HUMIDIFIER_HUMIDITY),
            Self::Thermostat { temperature, .. } => (temperature, range::THERMOSTAT_TEMPERATURE),
            Self::Blinds { .. } | Self::SecurityCamera { .. } => return Ok(()),
        };
        if let Some(value) = value {
            field_range.check(*value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_unset_with_matching_kind() {
        for kind in DeviceKind::ALL {
            assert_eq!(Attributes::unset(kind).kind(), kind);
        }
    }

    #[test]
    fn should_keep_color_unset_for_new_lightbulb() {
        assert_eq!(
            Attributes::lightbulb(50),
            Attributes::Lightbulb {
                brightness: Some(50),
                color: None,
            }
        );
    }

    #[test]
    fn should_accept_unset_attributes() {
        for kind in DeviceKind::ALL {
            assert!(Attributes::unset(kind).validate().is_ok());
        }
    }

    #[test]
    fn should_reject_lightbulb_brightness_above_hundred() {
        let result = Attributes::lightbulb(101).validate();
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { field: "brightness", value: 101, .. })
        ));
    }

    #[test]
    fn should_tag_serialized_payload_with_kind() {
        let json = serde_json::to_value(Attributes::unset(DeviceKind::Blinds)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "blinds", "position": null}));
    }
}
