//! Operational logging
//!
//! Timestamped `tracing` output on stderr, interleaved with the chat on the
//! terminal. The level is fixed; nothing is read from the environment.

use anyhow::{anyhow, Result};
use tracing::Level;

/// Install the global subscriber
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
