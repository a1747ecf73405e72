//! Device kind — the closed category that fixes a device's attribute set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten supported device categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Lightbulb,
    Light,
    Tv,
    AirConditioner,
    StoveOven,
    ExhaustFan,
    Humidifier,
    Blinds,
    Thermostat,
    SecurityCamera,
}

impl DeviceKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Lightbulb,
        Self::Light,
        Self::Tv,
        Self::AirConditioner,
        Self::StoveOven,
        Self::ExhaustFan,
        Self::Humidifier,
        Self::Blinds,
        Self::Thermostat,
        Self::SecurityCamera,
    ];

    /// Human-readable name, as used in rendered device state.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lightbulb => "Lightbulb",
            Self::Light => "Light",
            Self::Tv => "TV",
            Self::AirConditioner => "Air Conditioner",
            Self::StoveOven => "Stove Oven",
            Self::ExhaustFan => "Exhaust Fan",
            Self::Humidifier => "Humidifier",
            Self::Blinds => "Blinds",
            Self::Thermostat => "Thermostat",
            Self::SecurityCamera => "Security Camera",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_each_kind_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in DeviceKind::ALL {
            assert!(seen.insert(kind));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn should_display_spaced_label() {
        assert_eq!(DeviceKind::AirConditioner.to_string(), "Air Conditioner");
        assert_eq!(DeviceKind::Tv.to_string(), "TV");
    }

    #[test]
    fn should_serialize_as_snake_case() {
        let json = serde_json::to_string(&DeviceKind::SecurityCamera).unwrap();
        assert_eq!(json, "\"security_camera\"");
    }
}
