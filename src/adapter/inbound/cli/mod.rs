//! Console front end.

pub mod command;
pub mod notifier;
pub mod output;
pub mod prompt;
pub mod run;

pub use command::Cli;
pub use notifier::ConsoleNotifier;
pub use prompt::ConsolePrompt;
