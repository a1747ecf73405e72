//! Demo household — one device of every kind, for trying the panel out.

use smarthome_domain::device::{Device, DeviceKind};
use smarthome_domain::error::SmartHomeError;

const DEMO_DEVICES: [(&str, &str, DeviceKind, bool); 10] = [
    ("Desk Lamp", "Bulb on the study desk", DeviceKind::Lightbulb, false),
    ("Hallway Light", "Ceiling light by the front door", DeviceKind::Light, true),
    ("Living Room TV", "Wall-mounted television", DeviceKind::Tv, false),
    ("Bedroom AC", "Split unit above the bed", DeviceKind::AirConditioner, false),
    ("Kitchen Oven", "Built-in electric oven", DeviceKind::StoveOven, false),
    ("Kitchen Fan", "Extractor over the hob", DeviceKind::ExhaustFan, false),
    ("Nursery Humidifier", "Cool-mist humidifier", DeviceKind::Humidifier, false),
    ("Patio Blinds", "Motorised blinds on the patio door", DeviceKind::Blinds, false),
    ("Main Thermostat", "Central heating controller", DeviceKind::Thermostat, false),
    ("Front Door Camera", "Doorbell camera", DeviceKind::SecurityCamera, true),
];

/// Build the demo devices, unconfigured. The hallway light and the door
/// camera start switched on.
///
/// # Errors
///
/// Returns a validation error if a hardcoded entry is invalid.
pub fn devices() -> Result<Vec<Device>, SmartHomeError> {
    DEMO_DEVICES
        .into_iter()
        .map(|(name, description, kind, on)| {
            Device::builder()
                .name(name)
                .description(description)
                .kind(kind)
                .on(on)
                .build()
        })
        .collect()
}
