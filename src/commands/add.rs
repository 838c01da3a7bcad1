//! Natural-language task capture command.
//!
//! Takes one free-form sentence, runs it through the extraction pipeline,
//! resolves hashtag labels against the configured collection and produces
//! the task-creation request. By default the command shows a preview table
//! of the parsed draft; with `--json` it prints the request payload on
//! stdout for piping into whatever creates the task.

use crate::libs::config::Config;
use crate::libs::labels::resolve_label_ids;
use crate::libs::messages::Message;
use crate::libs::parser;
use crate::libs::task::NewTask;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;

const REFERENCE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Command-line arguments for the capture command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Free-form task text, e.g. "Call dentist tomorrow at 2pm urgent #health"
    #[arg(required = true)]
    text: String,

    /// Print the task-creation request as JSON instead of a preview table
    #[arg(short, long)]
    json: bool,

    /// Reference time for resolving relative dates (e.g. "2025-03-03 09:00");
    /// defaults to the current local time
    #[arg(long)]
    now: Option<String>,
}

/// Executes the capture command.
///
/// Parsing itself cannot fail; the command only errors when the parsed
/// title comes out empty (nothing sensible to create a task from) or when
/// the configuration cannot be read.
pub fn cmd(add_args: AddArgs) -> Result<()> {
    let now = match &add_args.now {
        Some(text) => parse_reference_time(text)?,
        None => Local::now().naive_local(),
    };

    let draft = parser::parse(&add_args.text, now);
    if draft.title.is_empty() {
        msg_bail_anyhow!(Message::EmptyTaskTitle);
    }

    let config = Config::read()?;
    let names = draft.labels.clone().unwrap_or_default();
    let label_ids = resolve_label_ids(&names, &config.labels);
    msg_debug!(format!("Resolved {} of {} label name(s)", label_ids.len(), names.len()));
    let request = NewTask::from_draft(&draft, label_ids);

    if add_args.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let dropped: Vec<String> = names
        .iter()
        .filter(|name| !config.labels.iter().any(|label| label.name.to_lowercase() == name.to_lowercase()))
        .cloned()
        .collect();
    if !dropped.is_empty() {
        msg_warning!(Message::UnresolvedLabelsDropped(dropped));
    }

    msg_print!(Message::DraftPreviewHeader, true);
    View::draft(&draft)?;
    msg_success!(Message::TaskRequestReady);
    Ok(())
}

fn parse_reference_time(text: &str) -> Result<NaiveDateTime> {
    for format in REFERENCE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }
    Err(msg_error_anyhow!(Message::InvalidReferenceTime(text.to_string())))
}
