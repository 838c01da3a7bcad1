//! Time duration formatting utilities for user-friendly display.
//!
//! Estimated effort is stored as whole minutes; display surfaces show it
//! in the same "HH:MM" format everywhere.
//!
//! ## Format Specifications
//!
//! - Hours and minutes are zero-padded to 2 digits
//! - No seconds are displayed
//! - Negative durations are treated as "00:00"

use chrono::Duration;

/// Formats a `chrono::Duration` into a standardized "HH:MM" string.
///
/// # Examples
///
/// ```rust
/// use quickadd::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Negative durations clamp to zero rather than rendering a minus sign
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats an estimate in whole minutes into the same "HH:MM" shape.
///
/// # Examples
///
/// ```rust
/// use quickadd::libs::formatter::format_minutes;
///
/// assert_eq!(format_minutes(120), "02:00");
/// assert_eq!(format_minutes(90), "01:30");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    format_duration(&Duration::minutes(i64::from(minutes)))
}
