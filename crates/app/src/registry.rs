//! Device registry — the single owner of every device.
//!
//! Devices are kept in insertion order. Names are not unique: every by-name
//! operation trims the name, compares case-insensitively, and acts on the
//! *first* match. A later device that shares a name with an earlier one is
//! therefore unreachable by name until the earlier one is removed.

use chrono::Utc;

use smarthome_domain::device::Device;
use smarthome_domain::dispatch::{self, ConfigureOutcome};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::settings::Settings;

/// Result of a successful [`DeviceRegistry::configure`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configured {
    pub outcome: ConfigureOutcome,
    /// Kind-specific state of the device after configuration.
    pub rendered: String,
}

/// Ordered, name-addressed collection of devices.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Borrow every device in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Append a device. Name collisions are allowed.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name(), kind = %device.kind()))]
    pub fn add(&mut self, device: Device) {
        if self.position(device.name()).is_some() {
            tracing::warn!("another device already uses this name; lookups resolve to the first");
        }
        self.devices.push(device);
        tracing::info!("device added");
    }

    /// Remove and return the first device named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<Device, SmartHomeError> {
        let index = self.position(name).ok_or_else(|| not_found(name))?;
        let device = self.devices.remove(index);
        tracing::info!(device_id = %device.id, "device removed");
        Ok(device)
    }

    /// Look up the first device named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches.
    pub fn find(&self, name: &str) -> Result<&Device, SmartHomeError> {
        self.position(name)
            .map(|index| &self.devices[index])
            .ok_or_else(|| not_found(name))
    }

    /// Switch the first device named `name` on.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches.
    #[tracing::instrument(skip(self))]
    pub fn turn_on(&mut self, name: &str) -> Result<(), SmartHomeError> {
        self.find_mut(name)?.set_power(true, Utc::now());
        tracing::info!("device turned on");
        Ok(())
    }

    /// Switch the first device named `name` off.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches.
    #[tracing::instrument(skip(self))]
    pub fn turn_off(&mut self, name: &str) -> Result<(), SmartHomeError> {
        self.find_mut(name)?.set_power(false, Utc::now());
        tracing::info!("device turned off");
        Ok(())
    }

    /// Switch every device on, whatever its current state.
    pub fn turn_on_all(&mut self) {
        self.set_power_all(true);
    }

    /// Switch every device off, whatever its current state.
    pub fn turn_off_all(&mut self) {
        self.set_power_all(false);
    }

    /// One-line `"<name> - On|Off"` summary per device, in insertion order.
    ///
    /// The iterator is lazy; call `list` again to start over.
    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        self.devices.iter().map(ToString::to_string)
    }

    /// Names of every device, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|device| device.name())
    }

    /// Refresh the first device named `name` without changing its state.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches.
    #[tracing::instrument(skip(self))]
    pub fn update(&mut self, name: &str) -> Result<(), SmartHomeError> {
        self.find_mut(name)?.touch(Utc::now());
        tracing::debug!("device refreshed");
        Ok(())
    }

    /// Apply `settings` to the first device named `name` and render its state.
    ///
    /// Settings for a different kind leave the device unchanged and report
    /// [`ConfigureOutcome::NoConfigurableSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device matches, or
    /// [`SmartHomeError::Validation`] when a numeric field is out of range.
    #[tracing::instrument(skip(self, settings), fields(kind = %settings.kind()))]
    pub fn configure(
        &mut self,
        name: &str,
        settings: Settings,
    ) -> Result<Configured, SmartHomeError> {
        let device = self.find_mut(name)?;
        let outcome = dispatch::configure(device, settings, Utc::now())?;
        match outcome {
            ConfigureOutcome::Applied => tracing::info!("device configured"),
            ConfigureOutcome::NoConfigurableSettings => {
                tracing::warn!(device_kind = %device.kind(), "no configurable settings for device");
            }
        }
        Ok(Configured {
            outcome,
            rendered: dispatch::render(device),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.devices.iter().position(|device| device.matches_name(name))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Device, SmartHomeError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.devices[index]),
            None => Err(not_found(name)),
        }
    }

    #[tracing::instrument(skip(self), fields(count = self.devices.len()))]
    fn set_power_all(&mut self, on: bool) {
        let at = Utc::now();
        for device in &mut self.devices {
            device.set_power(on, at);
        }
        tracing::info!("all devices switched");
    }
}

fn not_found(name: &str) -> SmartHomeError {
    NotFoundError::device(name.trim()).into()
}
