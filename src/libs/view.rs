//! Terminal table rendering for drafts and labels.

use crate::libs::draft::TaskDraft;
use crate::libs::formatter::format_minutes;
use crate::libs::labels::Label;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    /// Renders a parsed draft as a field/value table.
    ///
    /// Absent fields are rendered as "-" so the preview always shows the
    /// full shape of the task about to be created.
    pub fn draft(draft: &TaskDraft) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "VALUE"]);
        table.add_row(row!["Title", draft.title]);
        table.add_row(row!["Scheduled", Self::format_date(draft.schedule_date)]);
        table.add_row(row!["Deadline", Self::format_date(draft.deadline)]);
        table.add_row(row!["Priority", draft.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())]);
        table.add_row(row![
            "Estimate",
            draft.estimated_minutes.map(format_minutes).unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(row![
            "Labels",
            draft.labels.as_ref().map(|labels| labels.join(", ")).unwrap_or_else(|| "-".to_string())
        ]);
        table.printstd();

        Ok(())
    }

    /// Renders the configured label collection.
    pub fn labels(labels: &[Label]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for label in labels {
            table.add_row(row![label.id, label.name, label.color.as_deref().unwrap_or("-")]);
        }
        table.printstd();

        Ok(())
    }

    fn format_date(date: Option<NaiveDateTime>) -> String {
        date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| "-".to_string())
    }
}
