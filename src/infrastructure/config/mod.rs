//! Infrastructure configuration modules.

pub mod logging;
pub mod paths;
pub mod settings;
