//! Device — one controllable unit in the home.
//!
//! A device is a common header (identity, name, description, power state)
//! plus an [`Attributes`] payload whose variant is the device's kind. The
//! kind is chosen at creation and never changes afterwards.

mod attributes;
mod kind;

pub use attributes::Attributes;
pub use kind::DeviceKind;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SmartHomeError, ValidationError};
use crate::id::DeviceId;

/// UTC timestamp recorded on every device mutation.
pub type Timestamp = DateTime<Utc>;

/// A controllable device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    name: String,
    pub description: String,
    is_on: bool,
    attributes: Attributes,
    last_updated: Timestamp,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] when `name` is blank or a
    /// present attribute lies outside its declared range.
    pub fn validate(&self) -> Result<(), SmartHomeError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.attributes.validate()?;
        Ok(())
    }

    /// Display name, trimmed of surrounding whitespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.attributes.kind()
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Whether this device answers to `name`, ignoring case.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Switch the device on or off. Kind attributes are left alone.
    pub fn set_power(&mut self, on: bool, at: Timestamp) {
        self.is_on = on;
        self.last_updated = at;
    }

    /// Refresh `last_updated` without changing any state.
    pub fn touch(&mut self, at: Timestamp) {
        self.last_updated = at;
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

/// The generic one-line summary shared by every kind: `"<name> - On|Off"`.
impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let power = if self.is_on { "On" } else { "Off" };
        write!(f, "{} - {power}", self.name)
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    name: Option<String>,
    description: Option<String>,
    is_on: bool,
    attributes: Option<Attributes>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Fix the device kind, with every attribute unset.
    #[must_use]
    pub fn kind(self, kind: DeviceKind) -> Self {
        self.attributes(Attributes::unset(kind))
    }

    /// Fix the device kind together with initial attribute values.
    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// The name is stored trimmed, so it always matches the trimmed lookups
    /// done by the registry.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if the name is missing or
    /// blank, no kind was chosen, or an initial attribute is out of range.
    pub fn build(self) -> Result<Device, SmartHomeError> {
        let attributes = self.attributes.ok_or(ValidationError::MissingKind)?;
        let device = Device {
            id: DeviceId::new(),
            name: self
                .name
                .map(|name| name.trim().to_string())
                .unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            is_on: self.is_on,
            attributes,
            last_updated: Utc::now(),
        };
        device.validate()?;
        Ok(device)
    }
}
