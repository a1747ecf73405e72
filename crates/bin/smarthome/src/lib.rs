//! # smarthome — interactive control panel
//!
//! The terminal front end of the device controller.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Present the numbered menu and read one line per prompt
//! - Re-prompt numeric answers until they fall inside the field's range
//! - Translate answers into `DeviceRegistry` calls and print the results
//!
//! ## Dependency rule
//! This is the only crate that performs terminal IO. Domain and registry
//! logic stay in `smarthome-domain` and `smarthome-app`.

pub mod config;
pub mod demo;
pub mod forms;
pub mod menu;
pub mod prompt;
pub mod shell;

mod error;

pub use error::ShellError;
pub use shell::Shell;
