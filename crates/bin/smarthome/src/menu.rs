//! Menu text and the mapping from typed numbers to commands and kinds.

use std::str::FromStr;

use smarthome_domain::device::DeviceKind;

pub const MAIN_MENU: &str = "\
Smart Home Control Panel
1. List Devices
2. Add Device
3. Remove Device
4. Turn On Device
5. Turn Off Device
6. Configure Device
7. Update Device
8. Turn On All Devices
9. Turn Off All Devices
0. Exit";

pub const KIND_MENU: &str = "\
Select device type to add:
1. Lightbulb
2. TV
3. Light
4. Air Conditioner
5. Stove/Oven
6. Exhaust Fan
7. Humidifier
8. Blinds
9. Thermostat
10. Security Camera";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Remove,
    TurnOn,
    TurnOff,
    Configure,
    Update,
    TurnOnAll,
    TurnOffAll,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid option {0:?}")]
pub struct InvalidOption(pub String);

impl FromStr for Command {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => Self::List,
            "2" => Self::Add,
            "3" => Self::Remove,
            "4" => Self::TurnOn,
            "5" => Self::TurnOff,
            "6" => Self::Configure,
            "7" => Self::Update,
            "8" => Self::TurnOnAll,
            "9" => Self::TurnOffAll,
            "0" => Self::Exit,
            other => return Err(InvalidOption(other.to_string())),
        })
    }
}

/// Map a device-type menu answer (`1`–`10`) to its kind.
#[must_use]
pub fn parse_kind(choice: &str) -> Option<DeviceKind> {
    let kind = match choice.trim() {
        "1" => DeviceKind::Lightbulb,
        "2" => DeviceKind::Tv,
        "3" => DeviceKind::Light,
        "4" => DeviceKind::AirConditioner,
        "5" => DeviceKind::StoveOven,
        "6" => DeviceKind::ExhaustFan,
        "7" => DeviceKind::Humidifier,
        "8" => DeviceKind::Blinds,
        "9" => DeviceKind::Thermostat,
        "10" => DeviceKind::SecurityCamera,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_menu_number() {
        let expected = [
            ("0", Command::Exit),
            ("1", Command::List),
            ("2", Command::Add),
            ("3", Command::Remove),
            ("4", Command::TurnOn),
            ("5", Command::TurnOff),
            ("6", Command::Configure),
            ("7", Command::Update),
            ("8", Command::TurnOnAll),
            ("9", Command::TurnOffAll),
        ];
        for (input, command) in expected {
            assert_eq!(input.parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn should_ignore_surrounding_whitespace() {
        assert_eq!(" 6 ".parse::<Command>(), Ok(Command::Configure));
    }

    #[test]
    fn should_reject_unknown_option() {
        assert_eq!(
            "10".parse::<Command>(),
            Err(InvalidOption("10".to_string()))
        );
    }

    #[test]
    fn should_map_all_ten_kind_numbers() {
        let kinds: Vec<DeviceKind> = (1..=10)
            .filter_map(|n| parse_kind(&n.to_string()))
            .collect();
        assert_eq!(kinds.len(), 10);
        assert_eq!(parse_kind("2"), Some(DeviceKind::Tv));
        assert_eq!(parse_kind("3"), Some(DeviceKind::Light));
        assert_eq!(parse_kind("10"), Some(DeviceKind::SecurityCamera));
    }

    #[test]
    fn should_reject_kind_outside_menu() {
        assert_eq!(parse_kind("0"), None);
        assert_eq!(parse_kind("11"), None);
        assert_eq!(parse_kind("tv"), None);
    }
}
