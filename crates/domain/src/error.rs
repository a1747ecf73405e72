//! Common error types used across the workspace.
//!
//! Each failure has its own typed error; [`SmartHomeError`] groups them so
//! callers can propagate with `?` and match on the variant they care about.

/// Top-level error returned by registry and dispatcher operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("device not found")]
    NotFound(#[from] NotFoundError),
}

/// A value rejected by a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("device kind must be chosen")]
    MissingKind,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
}

/// A by-name lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {name:?} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub name: String,
}

impl NotFoundError {
    /// Not-found error for a device looked up by `name`.
    #[must_use]
    pub fn device(name: impl Into<String>) -> Self {
        Self {
            entity: "Device",
            name: name.into(),
        }
    }
}
