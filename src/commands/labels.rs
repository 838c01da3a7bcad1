//! Label listing command.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Displays the configured label collection.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    if config.labels.is_empty() {
        msg_info!(Message::NoLabelsConfigured);
        return Ok(());
    }

    msg_print!(Message::LabelsHeader, true);
    View::labels(&config.labels)
}
