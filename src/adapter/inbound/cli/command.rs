//! Command-line interface definition.
//!
//! The bot takes no flags: its behavior is fixed by the two configuration
//! files under the configuration directory.

use clap::Parser;

/// BuffettBot trading bot bootstrap
#[derive(Parser, Debug)]
#[command(name = "buffettbot")]
#[command(version)]
#[command(
    after_help = "Configuration is read from $BUFFETTBOT_CONF_DIR (default /opt/buffettbot/conf)."
)]
pub struct Cli {}
