//! The menu loop: read a command, call the registry, print the outcome.

use std::io::{BufRead, Write};

use smarthome_app::{Configured, DeviceRegistry};
use smarthome_domain::device::{Attributes, Device, DeviceKind};
use smarthome_domain::dispatch::ConfigureOutcome;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::range;

use crate::ShellError;
use crate::config::ShellConfig;
use crate::forms;
use crate::menu::{self, Command};
use crate::prompt::Prompter;

/// Whether the loop should keep going after a command.
enum Flow {
    Continue,
    Exit,
}

/// Interactive control panel owning the device registry.
pub struct Shell<R, W> {
    registry: DeviceRegistry,
    prompter: Prompter<R, W>,
    prompt: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: DeviceRegistry, input: R, output: W, config: &ShellConfig) -> Self {
        Self {
            registry,
            prompter: Prompter::new(input, output),
            prompt: config.prompt.clone(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user picks `0` or the input ends.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if the terminal cannot be read or written.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(ShellError::EndOfInput) => {
                    tracing::info!(devices = self.registry.len(), "control panel closed");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ShellError> {
        self.prompter.say(menu::MAIN_MENU)?;
        let answer = self.prompter.line(&self.prompt)?;
        match answer.parse::<Command>() {
            Ok(Command::Exit) => return Ok(Flow::Exit),
            Ok(command) => self.execute(command)?,
            Err(err) => {
                tracing::debug!(%err, "unknown menu option");
                self.prompter.say("Invalid option.")?;
            }
        }
        self.prompter.say("")?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::List => self.list(),
            Command::Add => self.add(),
            Command::Remove => {
                let name = self.ask_name("remove")?;
                match self.registry.remove(&name) {
                    Ok(_) => self.prompter.say(format!("Device {name} removed.")),
                    Err(err) => self.report(&err),
                }
            }
            Command::TurnOn => {
                let name = self.ask_name("turn on")?;
                match self.registry.turn_on(&name) {
                    Ok(()) => self.prompter.say(format!("{name} turned on.")),
                    Err(err) => self.report(&err),
                }
            }
            Command::TurnOff => {
                let name = self.ask_name("turn off")?;
                match self.registry.turn_off(&name) {
                    Ok(()) => self.prompter.say(format!("{name} turned off.")),
                    Err(err) => self.report(&err),
                }
            }
            Command::Configure => self.configure(),
            Command::Update => {
                let name = self.ask_name("update")?;
                match self.registry.update(&name) {
                    Ok(()) => self.prompter.say(format!("Device {name} updated.")),
                    Err(err) => self.report(&err),
                }
            }
            Command::TurnOnAll => {
                self.registry.turn_on_all();
                self.prompter.say("All devices turned on.")
            }
            Command::TurnOffAll => {
                self.registry.turn_off_all();
                self.prompter.say("All devices turned off.")
            }
            Command::Exit => Ok(()),
        }
    }

    fn list(&mut self) -> Result<(), ShellError> {
        self.prompter.say("\nDevices:")?;
        for summary in self.registry.list() {
            self.prompter.say(summary)?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<(), ShellError> {
        self.prompter.say(menu::KIND_MENU)?;
        let choice = self.prompter.line("")?;
        let Some(kind) = menu::parse_kind(&choice) else {
            return self.prompter.say("Invalid type.");
        };

        let name = self.prompter.line("Enter device name: ")?.trim().to_string();
        let description = self.prompter.line("Enter device description: ")?;
        let builder = Device::builder().name(name).description(description);
        let builder = if kind == DeviceKind::Lightbulb {
            let brightness = forms::number(
                &mut self.prompter,
                "Enter brightness",
                range::LIGHTBULB_BRIGHTNESS,
            )?;
            builder.attributes(Attributes::lightbulb(brightness))
        } else {
            builder.kind(kind)
        };

        match builder.build() {
            Ok(device) => {
                let message = format!("Device {} added.", device.name());
                self.registry.add(device);
                self.prompter.say(message)
            }
            Err(err) => self.report(&err),
        }
    }

    fn configure(&mut self) -> Result<(), ShellError> {
        let name = self.ask_name("configure")?;
        let (display_name, kind) = match self.registry.find(&name) {
            Ok(device) => (device.name().to_string(), device.kind()),
            Err(err) => {
                self.report(&err)?;
                self.prompter.say("Current devices:")?;
                for known in self.registry.names() {
                    self.prompter.say(known)?;
                }
                return Ok(());
            }
        };

        self.prompter
            .say(format!("\nConfiguring {display_name} ({kind})"))?;
        if kind == DeviceKind::Light {
            let on = self.prompter.yes_no("Turn on? (yes/no): ")?;
            let switched = if on {
                self.registry.turn_on(&name)
            } else {
                self.registry.turn_off(&name)
            };
            if let Err(err) = switched {
                return self.report(&err);
            }
        }

        let settings = forms::read_settings(&mut self.prompter, kind)?;
        match self.registry.configure(&name, settings) {
            Ok(Configured { outcome, rendered }) => {
                let headline = match outcome {
                    ConfigureOutcome::Applied => "Device configured.",
                    ConfigureOutcome::NoConfigurableSettings => {
                        "No configurable settings for this device."
                    }
                };
                self.prompter.say(headline)?;
                self.prompter.say(rendered)
            }
            Err(err) => self.report(&err),
        }
    }

    fn ask_name(&mut self, action: &str) -> Result<String, ShellError> {
        let answer = self
            .prompter
            .line(&format!("Enter device name to {action}: "))?;
        Ok(answer.trim().to_string())
    }

    fn report(&mut self, err: &SmartHomeError) -> Result<(), ShellError> {
        tracing::debug!(error = %err, "operation rejected");
        match err {
            SmartHomeError::NotFound(_) => self.prompter.say("Device not found."),
            SmartHomeError::Validation(reason) => {
                self.prompter.say(format!("Invalid input: {reason}."))
            }
        }
    }
}
