//! The reporting side-channel. The engine does not print or display anything itself; it hands
//! user-facing messages to an injected [Reporter].

use core::fmt;
use log::Level;

/// Message sent when the open set is exhausted without reaching the end cell.
pub const NO_PATH_MESSAGE: &str = "No valid path found";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn log_level(self) -> Level {
        match self {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

/// Receives user-facing messages from a search. Any `FnMut(&str, Severity)` is a [Reporter].
pub trait Reporter {
    fn display_message(&mut self, message: &str, severity: Severity);
}

impl<F> Reporter for F
where
    F: FnMut(&str, Severity),
{
    fn display_message(&mut self, message: &str, severity: Severity) {
        self(message, severity)
    }
}

/// Forwards messages to the [log] facade at the level matching their [Severity].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn display_message(&mut self, message: &str, severity: Severity) {
        log::log!(severity.log_level(), "{}", message);
    }
}
