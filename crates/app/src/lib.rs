//! # smarthome-app
//!
//! Application layer — the device registry.
//!
//! ## Responsibilities
//! - Own the ordered collection of devices (`DeviceRegistry`)
//! - Resolve devices by name, case-insensitively, first match wins
//! - Switch devices on/off, one at a time or all together
//! - Route configuration through the domain dispatcher and hand back the
//!   rendered state
//! - Record every mutation as a `tracing` event
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only (plus `tracing`).
//! Never touches stdin/stdout: the shell binary depends on *this* crate,
//! not the reverse.

pub mod registry;

pub use registry::{Configured, DeviceRegistry};
