//! Natural-language task extraction pipeline.
//!
//! This module converts free-form text like "Call dentist tomorrow at 2pm
//! urgent #health" into a structured [`TaskDraft`]: title, schedule date or
//! deadline, priority, estimated duration and labels. It is a pure text
//! transformation: no I/O, no stored state, and no error paths. Anything
//! the pipeline does not recognize degrades gracefully into title text.
//!
//! ## Pipeline
//!
//! Extraction runs as a fixed sequence of stages. Each stage receives the
//! current working buffer, removes the text it recognizes, and hands the
//! shrunken buffer to the next stage:
//!
//! 1. Priority keywords ("urgent", "minor", "high priority", ...)
//! 2. Duration estimates ("30min", "2h", "1.5 hours")
//! 3. Explicit clock times ("at 14:30", "at 2pm")
//! 4. Relative date keywords ("tomorrow", "next week", "friday")
//! 5. Absolute date patterns ("12/25", "2025-03-10", "Dec 25, 2024")
//! 6. Hashtag labels ("#health", "#urgent-care")
//! 7. Title cleanup of whatever text remains
//!
//! The order is load-bearing: a stage must never re-interpret text an
//! earlier stage already claimed, and the deadline-versus-schedule check in
//! stages 4 and 5 inspects the text immediately preceding a date fragment,
//! which only works on the buffer as the earlier stages left it. Stage 5
//! runs only when stage 4 matched nothing, so a single parse fills at most
//! one of `schedule_date` / `deadline`.
//!
//! ## Ambiguity Rules
//!
//! - A clock hour without am/pm is taken literally as a 24-hour value:
//!   "at 9" means 09:00. No contextual guessing.
//! - When the input contains several clock times, the first occurrence
//!   wins and all of them are consumed.
//! - Weekday keywords resolve to the next occurrence strictly after the
//!   reference date; naming today's weekday means one week out.
//! - A date fragment preceded by "by", "due", "deadline" or "before"
//!   becomes the deadline; otherwise it becomes the schedule date.
//!
//! All date arithmetic is relative to the caller-supplied reference time
//! and stays in its timezone; nothing here converts to UTC.

use crate::libs::draft::{Priority, TaskDraft};
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Priority keyword tables, scanned in descending priority order.
///
/// Within a group the declaration order decides which keyword is tried
/// first; the first keyword found anywhere in the buffer wins and ends the
/// scan across all groups.
const PRIORITY_KEYWORDS: [(Priority, &[&str]); 3] = [
    (Priority::High, &["urgent", "important", "critical", "asap", "!!!", "high priority"]),
    (Priority::Medium, &["medium", "normal", "!!", "moderate"]),
    (Priority::Low, &["low", "minor", "!", "someday"]),
];

/// Relative date keywords in scan order.
const RELATIVE_KEYWORDS: [&str; 11] = [
    "today",
    "tomorrow",
    "next week",
    "next month",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

static PRIORITY_PATTERNS: LazyLock<Vec<(Priority, Vec<Regex>)>> = LazyLock::new(|| {
    PRIORITY_KEYWORDS
        .iter()
        .map(|(priority, keywords)| (*priority, keywords.iter().map(|kw| word_pattern(kw)).collect()))
        .collect()
});

static RELATIVE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| RELATIVE_KEYWORDS.iter().map(|kw| (*kw, word_pattern(kw))).collect());

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(min|mins|minutes?|h|hrs?|hours?)\b").expect("duration pattern is valid"));

static CLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bat\s+(\d{1,2}):?(\d{2})?\s*(am|pm)?\b").expect("clock pattern is valid"));

/// Connector words stripped alongside a recognized date fragment.
static CONNECTOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(by|due|deadline|before|on|at)\b").expect("connector pattern is valid"));

/// Matches when the text before a date fragment marks it as a deadline.
static DEADLINE_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(by|due|deadline|before)\s*$").expect("deadline marker pattern is valid"));

static DATE_SLASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\b").expect("slash date pattern is valid"));

static DATE_ISO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("iso date pattern is valid"));

static DATE_MONTH_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{1,2})(?:,?\s+(\d{4}))?\b")
        .expect("month name date pattern is valid")
});

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([\w-]+)").expect("label pattern is valid"));

static WHITESPACE_RUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static TRAILING_PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;]\s*$").expect("trailing punctuation pattern is valid"));

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

fn word_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).expect("keyword pattern is valid")
}

/// A clock time captured by stage 3 but not yet attached to a date.
#[derive(Debug, Clone, Copy)]
struct HeldTime {
    hour: u32,
    minute: u32,
}

/// Whether a resolved date is a plan or a due date.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DateKind {
    Schedule,
    Deadline,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedDate {
    date: NaiveDateTime,
    kind: DateKind,
}

/// Parses one free-form task description into a [`TaskDraft`].
///
/// Runs the full extraction pipeline against `input`, resolving relative
/// dates against the caller-supplied reference time `now`. The function is
/// deterministic for a given `(input, now)` pair and never fails: in the
/// worst case the returned draft carries the trimmed input as its title and
/// nothing else. Empty or whitespace-only input yields an empty title.
///
/// # Arguments
///
/// * `input` - The raw text the user typed
/// * `now` - Reference time used to resolve relative dates ("tomorrow",
///   "friday", omitted years); also fixes the timezone all returned
///   timestamps are expressed in
///
/// # Returns
///
/// A [`TaskDraft`] with every recognized fragment extracted into its
/// structured field and the residual text as the title.
///
/// # Examples
///
/// ```rust
/// use quickadd::libs::draft::Priority;
/// use quickadd::libs::parser::parse;
/// use chrono::{NaiveDate, Timelike};
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(8, 30, 0).unwrap();
/// let draft = parse("Call dentist tomorrow at 2pm urgent #health", now);
///
/// assert_eq!(draft.title, "Call dentist");
/// assert_eq!(draft.priority, Some(Priority::High));
/// assert_eq!(draft.labels.as_deref(), Some(&["health".to_string()][..]));
/// let scheduled = draft.schedule_date.unwrap();
/// assert_eq!(scheduled.date(), NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
/// assert_eq!((scheduled.hour(), scheduled.minute()), (14, 0));
/// ```
pub fn parse(input: &str, now: NaiveDateTime) -> TaskDraft {
    let buffer = input.trim().to_string();

    let (priority, buffer) = extract_priority(buffer);
    let (estimated_minutes, buffer) = extract_duration(buffer);
    let (held_time, buffer) = extract_clock_time(buffer);
    let (resolved, buffer) = resolve_relative_date(buffer, now, held_time);
    let (resolved, buffer) = match resolved {
        Some(resolved) => (Some(resolved), buffer),
        None => resolve_absolute_date(buffer, now, held_time),
    };
    let (labels, buffer) = extract_labels(buffer);
    let title = finalize_title(&buffer);

    tracing::debug!(?priority, ?estimated_minutes, ?resolved, "parsed task draft from input");

    let mut draft = TaskDraft::with_title(title);
    draft.priority = priority;
    draft.estimated_minutes = estimated_minutes;
    draft.labels = labels;
    match resolved {
        Some(ResolvedDate { date, kind: DateKind::Deadline }) => draft.deadline = Some(date),
        Some(ResolvedDate { date, kind: DateKind::Schedule }) => draft.schedule_date = Some(date),
        None => {}
    }
    draft
}

/// Stage 1: scans the priority keyword tables.
///
/// The first keyword found wins and stops the scan; every occurrence of
/// that keyword is consumed from the buffer.
fn extract_priority(buffer: String) -> (Option<Priority>, String) {
    for (priority, patterns) in PRIORITY_PATTERNS.iter() {
        for pattern in patterns {
            if pattern.is_match(&buffer) {
                let remaining = pattern.replace_all(&buffer, "").trim().to_string();
                return (Some(*priority), remaining);
            }
        }
    }
    (None, buffer)
}

/// Stage 2: extracts the first duration estimate.
///
/// Hour-family units are converted to minutes; fractional values round
/// half away from zero to whole minutes.
fn extract_duration(buffer: String) -> (Option<u32>, String) {
    let Some(captures) = DURATION_PATTERN.captures(&buffer) else {
        return (None, buffer);
    };
    let value: f64 = match captures[1].parse() {
        Ok(value) => value,
        Err(_) => return (None, buffer),
    };
    let unit = captures[2].to_lowercase();
    let minutes = if unit.starts_with('h') { value * 60.0 } else { value };

    let matched = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
    let remaining = remove_range(&buffer, matched);
    (Some(minutes.round() as u32), remaining)
}

/// Stage 3: captures an explicit clock time without attaching it to a date.
///
/// The first occurrence in the buffer decides the held hour and minute; all
/// occurrences of the pattern are consumed so later stages never see them.
/// "pm" adds twelve hours unless the hour is 12, "12am" maps to midnight,
/// and a bare hour is kept as a literal 24-hour value.
fn extract_clock_time(buffer: String) -> (Option<HeldTime>, String) {
    let Some(captures) = CLOCK_PATTERN.captures(&buffer) else {
        return (None, buffer);
    };

    let mut hour: u32 = captures[1].parse().unwrap_or(0);
    let minute: u32 = captures.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let meridiem = captures.get(3).map(|m| m.as_str().to_lowercase());

    match meridiem.as_deref() {
        Some("pm") if hour != 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    let remaining = CLOCK_PATTERN.replace_all(&buffer, "").trim().to_string();
    (Some(HeldTime { hour, minute }), remaining)
}

/// Stage 4: resolves relative date keywords against the reference time.
///
/// Keywords are tried in declaration order; the first one present in the
/// buffer is resolved and the scan stops. A held clock time replaces the
/// time-of-day of the computed date; otherwise relative dates inherit the
/// time-of-day of `now`.
fn resolve_relative_date(buffer: String, now: NaiveDateTime, held: Option<HeldTime>) -> (Option<ResolvedDate>, String) {
    for (keyword, pattern) in RELATIVE_PATTERNS.iter() {
        let Some(found) = pattern.find(&buffer) else {
            continue;
        };

        let base = match *keyword {
            "today" => now,
            "tomorrow" => now + Duration::days(1),
            "next week" => now + Duration::weeks(1),
            "next month" => now.checked_add_months(Months::new(1)).unwrap_or(now),
            weekday => next_weekday(now, weekday),
        };
        let date = apply_held_time(base, held);
        let kind = date_kind_for(&buffer, found.start());

        let remaining = pattern.replace_all(&buffer, "");
        let remaining = CONNECTOR_PATTERN.replace_all(&remaining, "").trim().to_string();
        return (Some(ResolvedDate { date, kind }), remaining);
    }
    (None, buffer)
}

/// Stage 5: falls back to absolute date patterns.
///
/// Patterns are tried in order (`MM/DD[/YYYY]`, `YYYY-MM-DD`, month name
/// plus day); the first one whose first match parses to a real calendar
/// date wins. A pattern whose match is not a valid date is skipped entirely
/// rather than retried later in the text. Absolute dates start at midnight
/// unless a held clock time overrides them.
fn resolve_absolute_date(buffer: String, now: NaiveDateTime, held: Option<HeldTime>) -> (Option<ResolvedDate>, String) {
    let patterns: [(&Regex, fn(&regex::Captures, i32) -> Option<NaiveDate>); 3] = [
        (&*DATE_SLASH_PATTERN, parse_slash_date),
        (&*DATE_ISO_PATTERN, parse_iso_date),
        (&*DATE_MONTH_NAME_PATTERN, parse_month_name_date),
    ];

    for (pattern, parse_date) in patterns {
        let Some(captures) = pattern.captures(&buffer) else {
            continue;
        };
        let Some(date) = parse_date(&captures, now.year()) else {
            continue;
        };

        let midnight = date.and_hms_opt(0, 0, 0).unwrap_or(now);
        let date = apply_held_time(midnight, held);
        let matched = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
        let kind = date_kind_for(&buffer, matched.start);

        let remaining = remove_range(&buffer, matched);
        let remaining = CONNECTOR_PATTERN.replace_all(&remaining, "").trim().to_string();
        return (Some(ResolvedDate { date, kind }), remaining);
    }
    (None, buffer)
}

/// Stage 6: collects every hashtag label in order of appearance.
fn extract_labels(buffer: String) -> (Option<Vec<String>>, String) {
    let labels: Vec<String> = LABEL_PATTERN.captures_iter(&buffer).map(|captures| captures[1].to_string()).collect();
    if labels.is_empty() {
        return (None, buffer);
    }
    let remaining = LABEL_PATTERN.replace_all(&buffer, "").trim().to_string();
    (Some(labels), remaining)
}

/// Stage 7: normalizes the residual buffer into the final title.
fn finalize_title(buffer: &str) -> String {
    let collapsed = WHITESPACE_RUN_PATTERN.replace_all(buffer, " ");
    let trimmed = TRAILING_PUNCTUATION_PATTERN.replace(&collapsed, "");
    trimmed.trim().to_string()
}

/// Resolves a weekday keyword to its next occurrence strictly after `now`.
///
/// Naming the current weekday wraps a full week forward.
fn next_weekday(now: NaiveDateTime, keyword: &str) -> NaiveDateTime {
    let target: u32 = match keyword {
        "monday" => 0,
        "tuesday" => 1,
        "wednesday" => 2,
        "thursday" => 3,
        "friday" => 4,
        "saturday" => 5,
        _ => 6,
    };
    let current = now.weekday().num_days_from_monday();
    let mut days_ahead = (target as i64 - current as i64).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    now + Duration::days(days_ahead)
}

/// Replaces the time-of-day of `date` with a held clock time, zeroing
/// seconds. An out-of-range held hour leaves the date untouched.
fn apply_held_time(date: NaiveDateTime, held: Option<HeldTime>) -> NaiveDateTime {
    match held {
        Some(held) => date.date().and_hms_opt(held.hour, held.minute, 0).unwrap_or(date),
        None => date,
    }
}

/// Classifies a date fragment as deadline or schedule by inspecting the
/// text immediately preceding it.
fn date_kind_for(buffer: &str, match_start: usize) -> DateKind {
    let prefix = buffer[..match_start].trim_end();
    if DEADLINE_MARKER_PATTERN.is_match(prefix) {
        DateKind::Deadline
    } else {
        DateKind::Schedule
    }
}

/// Removes a matched byte range from the buffer and trims the seams.
fn remove_range(buffer: &str, range: std::ops::Range<usize>) -> String {
    let mut remaining = String::with_capacity(buffer.len());
    remaining.push_str(&buffer[..range.start]);
    remaining.push_str(&buffer[range.end..]);
    remaining.trim().to_string()
}

/// Parses `MM/DD` or `MM/DD/YYYY`; the year defaults to the current one and
/// two-digit years resolve into the 2000s.
fn parse_slash_date(captures: &regex::Captures, current_year: i32) -> Option<NaiveDate> {
    let month: u32 = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let year: i32 = match captures.get(3) {
        Some(year) => year.as_str().parse().ok()?,
        None => current_year,
    };
    let year = if year < 100 { 2000 + year } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses ISO `YYYY-MM-DD` as a plain calendar date.
fn parse_iso_date(captures: &regex::Captures, _current_year: i32) -> Option<NaiveDate> {
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses "Dec 25" or "Dec 25, 2024"; month names match on their first
/// three letters, so "december" works too.
fn parse_month_name_date(captures: &regex::Captures, current_year: i32) -> Option<NaiveDate> {
    let name = captures[1].to_lowercase();
    let month = MONTH_ABBREVIATIONS.iter().position(|abbrev| *abbrev == name)? as u32 + 1;
    let day: u32 = captures[2].parse().ok()?;
    let year: i32 = match captures.get(3) {
        Some(year) => year.as_str().parse().ok()?,
        None => current_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
