//! Scripted credential provider.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::database::DatabaseConfig;
use crate::error::{Error, Result};
use crate::port::outbound::prompt::SecondaryConfigProvider;

/// Answers the database prompt with a fixed credential set.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: Option<DatabaseConfig>,
    calls: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn new(host: &str, user: &str, password: &str) -> Self {
        Self {
            answer: Some(DatabaseConfig::new(host, user, password)),
            calls: AtomicUsize::new(0),
        }
    }

    /// A prompt whose input stream is closed.
    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times credentials were requested.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SecondaryConfigProvider for ScriptedPrompt {
    fn supply_database_config(&self) -> Result<DatabaseConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            ))
        })
    }
}
