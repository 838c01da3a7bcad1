//! Task-creation request mapping.
//!
//! A [`NewTask`] is the payload handed to the external task-creation
//! collaborator once a draft has been previewed and its label names have
//! been resolved to identifiers. The mapping is intentionally dumb: it
//! copies the draft fields, substitutes the explicit "none" priority when
//! the input mentioned no priority, and attaches the resolved label ids.

use crate::libs::draft::{Priority, TaskDraft};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Payload for creating one task from a parsed draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    pub label_ids: Vec<String>,
}

impl NewTask {
    /// Builds a creation request from a draft and pre-resolved label ids.
    ///
    /// The caller is responsible for resolving label names beforehand (see
    /// [`crate::libs::labels::resolve_label_ids`]); unmatched names have
    /// already been dropped by then. An absent draft priority becomes the
    /// explicit [`Priority::None`] level.
    pub fn from_draft(draft: &TaskDraft, label_ids: Vec<String>) -> Self {
        Self {
            title: draft.title.clone(),
            schedule_date: draft.schedule_date,
            deadline: draft.deadline,
            priority: draft.priority.unwrap_or(Priority::None),
            estimated_minutes: draft.estimated_minutes,
            label_ids,
        }
    }
}
