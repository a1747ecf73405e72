//! # smarthome-domain
//!
//! Pure domain model for the smarthome device controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (a common header plus a kind-specific attribute payload)
//! - Define the closed set of **device kinds** and their declared field ranges
//! - Define **Settings** (validated values proposed for one kind)
//! - Provide the **configuration dispatcher**: apply settings, render state
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the shell binary.
//! All terminal interaction lives in the binary crate.

pub mod error;
pub mod id;

pub mod device;
pub mod dispatch;
pub mod range;
pub mod settings;
