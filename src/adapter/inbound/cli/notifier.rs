//! Console rendering of startup events.

use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};

use super::output;

const CONF: &str = "Conf";
const TLE: &str = "TLE";

/// Prints startup progress banners and diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StartupNotifier for ConsoleNotifier {
    fn notify(&self, event: StartupEvent) {
        match event {
            StartupEvent::Started { version } => {
                output::banner(&format!("BuffettBot v{version}"));
            }
            StartupEvent::SecondaryConfigMissing { path } => {
                output::message(
                    CONF,
                    format!(
                        "Database configuration file not found at {}! Generating one...",
                        path.display()
                    ),
                );
            }
            StartupEvent::SecondaryConfigSaved { path } => {
                output::message(
                    CONF,
                    format!("Database configuration file saved to {}", path.display()),
                );
            }
            StartupEvent::EngineStarting(kind) => {
                output::section(&format!("Starting {}...", kind.display_name()));
            }
            StartupEvent::EngineStarted(kind) => {
                output::success(&format!("{} started successfully!", kind.display_name()));
                output::section_end();
            }
            StartupEvent::MetadataPulled => output::message(TLE, "inbound sync successful"),
            StartupEvent::MetadataRejected { reason } => output::error(TLE, reason),
            StartupEvent::MetadataMissing => output::message(
                TLE,
                "Did not find data in database. Creating metadata records...",
            ),
            StartupEvent::MetadataPushFailed { reason } => {
                output::error(TLE, format!("outbound sync failed: {reason}"));
            }
            StartupEvent::MetadataReport { rendered } => {
                output::section("TLE Stats");
                output::lines(rendered);
                output::section_end();
            }
            StartupEvent::Fatal { component, message } => output::error(&component, message),
            StartupEvent::Finished => output::note("BuffettBot startup complete."),
        }
    }
}
