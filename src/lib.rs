//! # Quickadd - Natural-Language Task Capture
//!
//! A command-line utility for turning free-form text into structured
//! tasks: schedule dates, deadlines, priorities, estimated durations and
//! labels extracted from plain English.
//!
//! ## Features
//!
//! - **Natural-Language Extraction**: "Call dentist tomorrow at 2pm urgent
//!   #health" becomes a structured task draft
//! - **Date Understanding**: Relative keywords (tomorrow, next week,
//!   friday), absolute dates (12/25, 2025-03-10, Dec 25) and clock times
//! - **Deadline Detection**: "by friday" is a due date, "on friday" a plan
//! - **Label Resolution**: Hashtags map onto a configured label collection
//! - **Request Mapping**: Drafts become ready-to-send task-creation
//!   payloads
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quickadd::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
