//! Structured output of the natural-language task extractor.
//!
//! A [`TaskDraft`] is the not-yet-persisted result of parsing free text into
//! task fields. It is produced exclusively by [`crate::libs::parser::parse`]
//! and consumed by the task-creation flow, which maps it onto a
//! [`crate::libs::task::NewTask`] request. Drafts live only for the duration
//! of a single capture: create on parse, discard after mapping.
//!
//! ## Field Semantics
//!
//! - Absent fields mean "not mentioned in the input", never "explicitly
//!   cleared". In particular an absent priority is distinct from the
//!   explicit [`Priority::None`] level used by the task-creation request.
//! - At most one of `schedule_date` / `deadline` is populated per parse;
//!   the extractor fills whichever date-bearing fragment fires first.
//! - `title` is never null. It may be empty when the entire input consisted
//!   of recognized metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task priority levels.
///
/// Mirrors the levels understood by the task-creation collaborator. The
/// extractor only ever produces `High`, `Medium` or `Low`; `None` is the
/// explicit "no priority" level that the request mapping falls back to when
/// the input did not mention a priority at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    None,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::None => "none",
        };
        write!(f, "{}", label)
    }
}

/// Structured result of parsing one free-form task description.
///
/// Every field except `title` is optional; an unmatched extraction stage
/// simply leaves its field absent. Timestamps are naive and expressed in
/// whatever timezone the caller-supplied reference time was expressed in;
/// the extractor never converts between timezones.
///
/// # Examples
///
/// ```rust
/// use quickadd::libs::parser::parse;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let draft = parse("Call dentist tomorrow at 2pm urgent #health", now);
/// assert_eq!(draft.title, "Call dentist");
/// assert!(draft.schedule_date.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Residual text after all recognized fragments were stripped.
    pub title: String,
    /// When the task is planned to be worked on.
    pub schedule_date: Option<NaiveDateTime>,
    /// When the task is due.
    pub deadline: Option<NaiveDateTime>,
    /// Priority level, if the input mentioned one.
    pub priority: Option<Priority>,
    /// Estimated effort normalized to whole minutes.
    pub estimated_minutes: Option<u32>,
    /// Hashtag labels in order of appearance, markers stripped.
    pub labels: Option<Vec<String>>,
}

impl TaskDraft {
    /// Creates an empty draft carrying only a title.
    ///
    /// This is the worst-case parse result: no fragment was recognized and
    /// the whole input becomes the title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            schedule_date: None,
            deadline: None,
            priority: None,
            estimated_minutes: None,
            labels: None,
        }
    }
}
