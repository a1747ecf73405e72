//! Configuration dispatcher — applies [`Settings`] to a device and renders
//! the device's kind-specific state.
//!
//! Both operations are exhaustive matches over the device kind. Neither
//! performs any IO: the caller decides what to do with the rendered string.

use std::fmt;

use crate::device::{Attributes, Device, Timestamp};
use crate::error::ValidationError;
use crate::settings::Settings;

/// What a configuration call did to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// Every field of the settings was assigned.
    Applied,
    /// The device has no configuration protocol for these settings; it was
    /// left unchanged.
    NoConfigurableSettings,
}

/// Assign `settings` to `device`'s kind-specific attributes.
///
/// Settings meant for another kind are not an error: the device is left
/// untouched and [`ConfigureOutcome::NoConfigurableSettings`] is returned.
/// Numeric fields are range-checked before anything is assigned; text fields
/// are stored verbatim.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] when a numeric field lies outside
/// its declared range. The device is unchanged in that case.
pub fn configure(
    device: &mut Device,
    settings: Settings,
    at: Timestamp,
) -> Result<ConfigureOutcome, ValidationError> {
    if settings.kind() != device.kind() {
        return Ok(ConfigureOutcome::NoConfigurableSettings);
    }
    settings.validate()?;

    let attributes = device.attributes_mut();
    match settings {
        Settings::Lightbulb {
            brightness: new_brightness,
            color: new_color,
        } => {
            let Attributes::Lightbulb { brightness, color } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *brightness = Some(new_brightness);
            *color = Some(new_color);
        }
        Settings::Light {
            brightness: new_brightness,
        } => {
            let Attributes::Light { brightness } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *brightness = Some(new_brightness);
        }
        Settings::Tv {
            channel: new_channel,
            volume: new_volume,
        } => {
            let Attributes::Tv { channel, volume } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *channel = Some(new_channel);
            *volume = Some(new_volume);
        }
        Settings::AirConditioner {
            temperature: new_temperature,
            fan_speed: new_fan_speed,
        } => {
            let Attributes::AirConditioner {
                temperature,
                fan_speed,
            } = attributes
            else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *temperature = Some(new_temperature);
            *fan_speed = Some(new_fan_speed);
        }
        Settings::StoveOven {
            temperature: new_temperature,
            mode: new_mode,
        } => {
            let Attributes::StoveOven { temperature, mode } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *temperature = Some(new_temperature);
            *mode = Some(new_mode);
        }
        Settings::ExhaustFan { speed: new_speed } => {
            let Attributes::ExhaustFan { speed } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *speed = Some(new_speed);
        }
        Settings::Humidifier {
            humidity: new_humidity,
        } => {
            let Attributes::Humidifier { humidity } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *humidity = Some(new_humidity);
        }
        Settings::Blinds {
            position: new_position,
        } => {
            let Attributes::Blinds { position } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *position = Some(new_position);
        }
        Settings::Thermostat {
            temperature: new_temperature,
            mode: new_mode,
        } => {
            let Attributes::Thermostat { temperature, mode } = attributes else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *temperature = Some(new_temperature);
            *mode = Some(new_mode);
        }
        Settings::SecurityCamera {
            resolution: new_resolution,
            recording: new_recording,
        } => {
            let Attributes::SecurityCamera {
                resolution,
                recording,
            } = attributes
            else {
                return Ok(ConfigureOutcome::NoConfigurableSettings);
            };
            *resolution = Some(new_resolution);
            *recording = Some(new_recording);
        }
    }

    device.touch(at);
    Ok(ConfigureOutcome::Applied)
}

/// Render the kind-specific state of `device`, e.g.
/// `"Thermostat - Temperature: 22, Mode: Heating"`.
///
/// Only the attributes of the device's own kind appear. Attributes that were
/// never configured render as `unset`.
#[must_use]
pub fn render(device: &Device) -> String {
    let label = device.kind().label();
    match device.attributes() {
        Attributes::Lightbulb { brightness, color } => format!(
            "{label} - Brightness: {}, Color: {}",
            Field(brightness),
            Field(color)
        ),
        Attributes::Light { brightness } => {
            format!("{label} - Brightness: {}", Field(brightness))
        }
        Attributes::Tv { channel, volume } => format!(
            "{label} - Channel: {}, Volume: {}",
            Field(channel),
            Field(volume)
        ),
        Attributes::AirConditioner {
            temperature,
            fan_speed,
        } => format!(
            "{label} - Temperature: {}, Fan Speed: {}",
            Field(temperature),
            Field(fan_speed)
        ),
        Attributes::StoveOven { temperature, mode }
        | Attributes::Thermostat { temperature, mode } => format!(
            "{label} - Temperature: {}, Mode: {}",
            Field(temperature),
            Field(mode)
        ),
        Attributes::ExhaustFan { speed } => format!("{label} - Speed Level: {}", Field(speed)),
        Attributes::Humidifier { humidity } => {
            format!("{label} - Humidity Level: {}", Field(humidity))
        }
        Attributes::Blinds { position } => format!("{label} - Position: {}", Field(position)),
        Attributes::SecurityCamera {
            resolution,
            recording,
        } => {
            let recording = recording.map(|on| if on { "Yes" } else { "No" });
            format!(
                "{label} - Resolution: {}, Recording: {}",
                Field(resolution),
                Field(&recording)
            )
        }
    }
}

/// Displays an optional attribute, or `unset` when absent.
struct Field<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::device::DeviceKind;

    fn device(kind: DeviceKind) -> Device {
        Device::builder().name("Test").kind(kind).build().unwrap()
    }

    fn sample_settings(kind: DeviceKind) -> Settings {
        match kind {
            DeviceKind::Lightbulb => Settings::Lightbulb {
                brightness: 80,
                color: "Blue".to_string(),
            },
            DeviceKind::Light => Settings::Light { brightness: 65 },
            DeviceKind::Tv => Settings::Tv {
                channel: "BBC One".to_string(),
                volume: 12,
            },
            DeviceKind::AirConditioner => Settings::AirConditioner {
                temperature: 18,
                fan_speed: "Medium".to_string(),
            },
            DeviceKind::StoveOven => Settings::StoveOven {
                temperature: 220,
                mode: "Bake".to_string(),
            },
            DeviceKind::ExhaustFan => Settings::ExhaustFan { speed: 4 },
            DeviceKind::Humidifier => Settings::Humidifier { humidity: 45 },
            DeviceKind::Blinds => Settings::Blinds {
                position: "Half".to_string(),
            },
            DeviceKind::Thermostat => Settings::Thermostat {
                temperature: 22,
                mode: "Heating".to_string(),
            },
            DeviceKind::SecurityCamera => Settings::SecurityCamera {
                resolution: "4K".to_string(),
                recording: true,
            },
        }
    }

    #[test]
    fn should_apply_settings_for_every_kind() {
        for kind in DeviceKind::ALL {
            let mut dev = device(kind);
            let outcome = configure(&mut dev, sample_settings(kind), Utc::now()).unwrap();
            assert_eq!(outcome, ConfigureOutcome::Applied, "{kind}");
            assert_ne!(dev.attributes(), &Attributes::unset(kind), "{kind}");
            assert!(!render(&dev).contains("unset"), "{kind}");
        }
    }

    #[test]
    fn should_assign_lightbulb_brightness_and_color() {
        let mut dev = Device::builder()
            .name("Lamp1")
            .attributes(Attributes::lightbulb(50))
            .build()
            .unwrap();
        configure(&mut dev, sample_settings(DeviceKind::Lightbulb), Utc::now()).unwrap();
        assert_eq!(
            dev.attributes(),
            &Attributes::Lightbulb {
                brightness: Some(80),
                color: Some("Blue".to_string()),
            }
        );
    }

    #[test]
    fn should_leave_device_unchanged_when_settings_belong_to_other_kind() {
        let mut dev = device(DeviceKind::Tv);
        let outcome = configure(&mut dev, sample_settings(DeviceKind::Blinds), Utc::now()).unwrap();
        assert_eq!(outcome, ConfigureOutcome::NoConfigurableSettings);
        assert_eq!(dev.attributes(), &Attributes::unset(DeviceKind::Tv));
    }

    #[test]
    fn should_apply_only_settings_of_the_device_kind() {
        for device_kind in DeviceKind::ALL {
            for settings_kind in DeviceKind::ALL {
                let mut dev = device(device_kind);
                let outcome =
                    configure(&mut dev, sample_settings(settings_kind), Utc::now()).unwrap();
                if device_kind == settings_kind {
                    assert_eq!(outcome, ConfigureOutcome::Applied);
                } else {
                    assert_eq!(outcome, ConfigureOutcome::NoConfigurableSettings);
                    assert_eq!(dev.attributes(), &Attributes::unset(device_kind));
                }
            }
        }
    }

    #[test]
    fn should_reject_out_of_range_value_without_assigning() {
        let mut dev = device(DeviceKind::AirConditioner);
        let result = configure(
            &mut dev,
            Settings::AirConditioner {
                temperature: 31,
                fan_speed: "High".to_string(),
            },
            Utc::now(),
        );
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
        assert_eq!(dev.attributes(), &Attributes::unset(DeviceKind::AirConditioner));
    }

    #[test]
    fn should_accept_air_conditioner_boundary_temperatures() {
        let mut dev = device(DeviceKind::AirConditioner);
        for temperature in [16, 30] {
            let settings = Settings::AirConditioner {
                temperature,
                fan_speed: "Low".to_string(),
            };
            assert_eq!(
                configure(&mut dev, settings, Utc::now()).unwrap(),
                ConfigureOutcome::Applied
            );
        }
    }

    #[test]
    fn should_store_text_fields_verbatim() {
        let mut dev = device(DeviceKind::AirConditioner);
        let settings = Settings::AirConditioner {
            temperature: 20,
            fan_speed: "  turbo ".to_string(),
        };
        configure(&mut dev, settings, Utc::now()).unwrap();
        assert_eq!(
            render(&dev),
            "Air Conditioner - Temperature: 20, Fan Speed:   turbo "
        );
    }

    #[test]
    fn should_not_change_power_state_when_configuring() {
        let mut dev = device(DeviceKind::Light);
        dev.set_power(true, Utc::now());
        configure(&mut dev, sample_settings(DeviceKind::Light), Utc::now()).unwrap();
        assert!(dev.is_on());
    }

    #[test]
    fn should_refresh_timestamp_when_applied() {
        let mut dev = device(DeviceKind::Humidifier);
        let later = dev.last_updated() + chrono::Duration::minutes(1);
        configure(&mut dev, sample_settings(DeviceKind::Humidifier), later).unwrap();
        assert_eq!(dev.last_updated(), later);
    }

    #[test]
    fn should_render_thermostat_with_its_own_fields_only() {
        let mut dev = device(DeviceKind::Thermostat);
        configure(&mut dev, sample_settings(DeviceKind::Thermostat), Utc::now()).unwrap();
        let rendered = render(&dev);
        assert_eq!(rendered, "Thermostat - Temperature: 22, Mode: Heating");
        for foreign in ["Brightness", "Color", "Fan Speed", "Volume", "Resolution"] {
            assert!(!rendered.contains(foreign));
        }
    }

    #[test]
    fn should_render_unset_attributes_for_new_device() {
        assert_eq!(
            render(&device(DeviceKind::Tv)),
            "TV - Channel: unset, Volume: unset"
        );
        assert_eq!(
            render(&device(DeviceKind::SecurityCamera)),
            "Security Camera - Resolution: unset, Recording: unset"
        );
    }

    #[test]
    fn should_render_each_kind_with_its_label() {
        for kind in DeviceKind::ALL {
            let rendered = render(&device(kind));
            assert!(rendered.starts_with(&format!("{} - ", kind.label())), "{rendered}");
        }
    }

    #[test]
    fn should_render_recording_as_yes_or_no() {
        let mut dev = device(DeviceKind::SecurityCamera);
        configure(
            &mut dev,
            Settings::SecurityCamera {
                resolution: "1080p".to_string(),
                recording: false,
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(
            render(&dev),
            "Security Camera - Resolution: 1080p, Recording: No"
        );
    }
}
