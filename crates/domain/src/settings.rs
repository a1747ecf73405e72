//! Settings — the complete set of values proposed for one device kind.
//!
//! Unlike [`Attributes`](crate::device::Attributes), every field is present:
//! a configuration always assigns the full attribute set of its kind.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::error::ValidationError;
use crate::range;

/// Values to assign to a device, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Settings {
    Lightbulb { brightness: u16, color: String },
    Light { brightness: u16 },
    Tv { channel: String, volume: u16 },
    AirConditioner { temperature: u16, fan_speed: String },
    StoveOven { temperature: u16, mode: String },
    ExhaustFan { speed: u16 },
    Humidifier { humidity: u16 },
    Blinds { position: String },
    Thermostat { temperature: u16, mode: String },
    SecurityCamera { resolution: String, recording: bool },
}

impl Settings {
    /// The device kind these settings apply to.
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

    /// Check the numeric field (if any) against its declared range.
    ///
    /// Text fields are never inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when the value is outside the
    /// kind's range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (value, field_range) = match self {
            Self::Lightbulb { brightness, .. } => (*brightness, range::LIGHTBULB_BRIGHTNESS),
            Self::Light { brightness } => (*brightness, range::LIGHT_BRIGHTNESS),
            Self::Tv { volume, .. } => (*volume, range::TV_VOLUME),
            Self::AirConditioner { temperature, .. } => {
                (*temperature, range::AIR_CONDITIONER_TEMPERATURE)
            }
            Self::StoveOven { temperature, .. } => (*temperature, range::STOVE_OVEN_TEMPERATURE),
            Self::ExhaustFan { speed } => (*speed, range::EXHAUST_FAN_SPEED),
            Self::Humidifier { humidity } => (*humidity, range::HUMIDIFIER_HUMIDITY),
            Self::Thermostat { temperature, .. } => (*temperature, range::THERMOSTAT_TEMPERATURE),
            Self::Blinds { .. } | Self::SecurityCamera { .. } => return Ok(()),
        };
        field_range.check(value)?;
        Ok(())
    }
}
