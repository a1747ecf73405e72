//! Per-kind configuration forms: which questions to ask, in which order.

use std::io::{BufRead, Write};

use smarthome_domain::device::DeviceKind;
use smarthome_domain::range::{self, FieldRange};
use smarthome_domain::settings::Settings;

use crate::ShellError;
use crate::prompt::Prompter;

/// Ask every question of `kind`'s form and collect the answers.
///
/// # Errors
///
/// Returns [`ShellError::EndOfInput`] if the input ends mid-form, or
/// [`ShellError::Io`] on a terminal failure.
pub fn read_settings<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    kind: DeviceKind,
) -> Result<Settings, ShellError> {
    let settings = match kind {
        DeviceKind::Lightbulb => Settings::Lightbulb {
            brightness: number(prompter, "Enter brightness", range::LIGHTBULB_BRIGHTNESS)?,
            color: prompter.line("Enter color: ")?,
        },
        DeviceKind::Light => Settings::Light {
            brightness: number(prompter, "Enter brightness", range::LIGHT_BRIGHTNESS)?,
        },
        DeviceKind::Tv => Settings::Tv {
            channel: prompter.line("Enter channel: ")?,
            volume: number(prompter, "Enter volume", range::TV_VOLUME)?,
        },
        DeviceKind::AirConditioner => Settings::AirConditioner {
            temperature: number(
                prompter,
                "Set temperature",
                range::AIR_CONDITIONER_TEMPERATURE,
            )?,
            fan_speed: prompter.line("Enter fan speed (Low/Medium/High): ")?,
        },
        DeviceKind::StoveOven => Settings::StoveOven {
            temperature: number(prompter, "Set temperature", range::STOVE_OVEN_TEMPERATURE)?,
            mode: prompter.line("Enter mode (Bake/Broil): ")?,
        },
        DeviceKind::ExhaustFan => Settings::ExhaustFan {
            speed: number(prompter, "Enter speed level", range::EXHAUST_FAN_SPEED)?,
        },
        DeviceKind::Humidifier => Settings::Humidifier {
            humidity: number(prompter, "Set humidity level", range::HUMIDIFIER_HUMIDITY)?,
        },
        DeviceKind::Blinds => Settings::Blinds {
            position: prompter.line("Enter position (Open/Close/Half): ")?,
        },
        DeviceKind::Thermostat => Settings::Thermostat {
            temperature: number(prompter, "Set temperature", range::THERMOSTAT_TEMPERATURE)?,
            mode: prompter.line("Enter mode (Heating/Cooling): ")?,
        },
        DeviceKind::SecurityCamera => Settings::SecurityCamera {
            resolution: prompter.line("Enter resolution (e.g., 1080p, 4K): ")?,
            recording: prompter.yes_no("Start recording? (yes/no): ")?,
        },
    };
    Ok(settings)
}

/// Prompt as `"<label> (<min>-<max>): "` and read a value inside `range`.
///
/// # Errors
///
/// Same as [`Prompter::number_in`].
pub fn number<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    label: &str,
    range: FieldRange,
) -> Result<u16, ShellError> {
    prompter.number_in(&format!("{label} ({range}): "), range)
}
