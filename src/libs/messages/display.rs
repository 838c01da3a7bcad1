//! Display implementation for quickadd application messages.
//!
//! All user-facing text lives here, behind the `Display` implementation of
//! the [`Message`] enum. Keeping the wording in one place gives every
//! command a consistent voice and keeps format parameters type-checked at
//! the variant definition.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CAPTURE MESSAGES ===
            Message::DraftPreviewHeader => "Task will be created as:".to_string(),
            Message::TaskRequestReady => "Task request prepared".to_string(),
            Message::EmptyTaskTitle => "Nothing left for a title after parsing. Add some words that are not dates, priorities or labels.".to_string(),
            Message::UnresolvedLabelsDropped(names) => format!("Unknown labels dropped: {}", names.join(", ")),
            Message::InvalidReferenceTime(text) => {
                format!("Could not parse reference time '{}'. Expected 'YYYY-MM-DD HH:MM'.", text)
            }

            // === LABEL MESSAGES ===
            Message::LabelCreated(name) => format!("Label '{}' created", name),
            Message::LabelAlreadyExists(name) => format!("Label '{}' already exists, skipping", name),
            Message::LabelsHeader => "Configured labels".to_string(),
            Message::NoLabelsConfigured => "No labels configured yet. Run 'quickadd init' to add some.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::LabelSetupIntro => "Define the labels that hashtags in your task text will resolve against.".to_string(),
            Message::PromptLabelName => "Enter label name".to_string(),
            Message::PromptLabelColor => "Enter label color (empty for none)".to_string(),
            Message::PromptAddAnotherLabel => "Add another label?".to_string(),
        };
        write!(f, "{}", text)
    }
}
