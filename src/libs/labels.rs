//! Label collection types and name resolution.
//!
//! The extractor returns label *names* (hashtag text); the task-creation
//! collaborator expects label *identifiers*. This module holds the label
//! entity stored in the configuration and the lookup that bridges the two:
//! a case-insensitive name match that preserves the order of the parsed
//! names and silently drops anything the collection does not know about.

use serde::{Deserialize, Serialize};

/// A user-defined label known to the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Stable identifier referenced by task-creation requests.
    pub id: String,
    /// Display name matched against parsed hashtag text.
    pub name: String,
    /// Optional display color.
    pub color: Option<String>,
}

impl Label {
    pub fn new(id: String, name: String, color: Option<String>) -> Self {
        Self { id, name, color }
    }
}

/// Maps parsed label names onto identifiers from the label collection.
///
/// Matching is case-insensitive on the label name. The result preserves the
/// order of `names`; names with no matching label are dropped without
/// complaint, so the returned vector may be shorter than the input.
///
/// # Arguments
///
/// * `names` - Label names as extracted from hashtags, case preserved
/// * `labels` - The known label collection
///
/// # Examples
///
/// ```rust
/// use quickadd::libs::labels::{resolve_label_ids, Label};
///
/// let labels = vec![Label::new("a1".into(), "Health".into(), None)];
/// let ids = resolve_label_ids(&["health".to_string(), "unknown".to_string()], &labels);
/// assert_eq!(ids, vec!["a1".to_string()]);
/// ```
pub fn resolve_label_ids(names: &[String], labels: &[Label]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| {
            let wanted = name.to_lowercase();
            labels
                .iter()
                .find(|label| label.name.to_lowercase() == wanted)
                .map(|label| label.id.clone())
        })
        .collect()
}
