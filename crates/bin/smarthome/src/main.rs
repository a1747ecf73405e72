//! # smarthome — control panel binary
//!
//! Composition root: loads configuration, installs the log subscriber,
//! builds the registry, and hands stdin/stdout to the menu loop.

use std::io;

use anyhow::Context;
use smarthome::Shell;
use smarthome::config::Config;
use smarthome_app::DeviceRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(io::stderr)
        .init();

    let mut registry = DeviceRegistry::new();
    if config.shell.demo_devices {
        for device in smarthome::demo::devices().context("failed to build demo devices")? {
            registry.add(device);
        }
    }

    let mut shell = Shell::new(registry, io::stdin().lock(), io::stdout().lock(), &config.shell);
    shell.run().context("control panel stopped")?;
    Ok(())
}
