//! Typed device identifier backed by a UUID.
//!
//! Devices are addressed by name, which is not unique. The id is what tells
//! two same-named devices apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(uuid::Uuid);

impl Default for DeviceId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl DeviceId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
