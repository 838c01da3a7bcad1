#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use quickadd::libs::draft::Priority;
    use quickadd::libs::parser::parse;

    /// Monday, March 3rd 2025, mid-morning. A fixed reference time keeps
    /// every relative-date assertion deterministic.
    fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(9, 15, 30).unwrap()
    }

    #[test]
    fn test_plain_text_becomes_title() {
        let draft = parse("Water the plants", reference_now());
        assert_eq!(draft.title, "Water the plants");
        assert_eq!(draft.priority, None);
        assert_eq!(draft.schedule_date, None);
        assert_eq!(draft.deadline, None);
        assert_eq!(draft.estimated_minutes, None);
        assert_eq!(draft.labels, None);
    }

    #[test]
    fn test_empty_input_yields_empty_draft() {
        let draft = parse("", reference_now());
        assert_eq!(draft.title, "");
        assert_eq!(draft.priority, None);
        assert_eq!(draft.schedule_date, None);
        assert_eq!(draft.deadline, None);
        assert_eq!(draft.estimated_minutes, None);
        assert_eq!(draft.labels, None);
    }

    #[test]
    fn test_whitespace_only_input() {
        let draft = parse("   \t  ", reference_now());
        assert_eq!(draft.title, "");
        assert_eq!(draft.labels, None);
    }

    #[test]
    fn test_title_normalization() {
        let draft = parse("  Water   the plants;  ", reference_now());
        assert_eq!(draft.title, "Water the plants");

        let draft = parse("Buy milk,", reference_now());
        assert_eq!(draft.title, "Buy milk");
    }

    #[test]
    fn test_priority_high_keywords() {
        let draft = parse("Buy milk urgent", reference_now());
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.title, "Buy milk");

        let draft = parse("Fix the build asap", reference_now());
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.title, "Fix the build");

        let draft = parse("high priority fix", reference_now());
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.title, "fix");
    }

    #[test]
    fn test_priority_medium_and_low_keywords() {
        let draft = parse("normal meeting prep", reference_now());
        assert_eq!(draft.priority, Some(Priority::Medium));
        assert_eq!(draft.title, "meeting prep");

        let draft = parse("someday read that book", reference_now());
        assert_eq!(draft.priority, Some(Priority::Low));
        assert_eq!(draft.title, "read that book");
    }

    #[test]
    fn test_priority_is_whole_word() {
        // "normally" must not trigger the "normal" keyword
        let draft = parse("Reply normally", reference_now());
        assert_eq!(draft.priority, None);
        assert_eq!(draft.title, "Reply normally");
    }

    #[test]
    fn test_priority_high_group_wins_over_lower_groups() {
        // "urgent" (high) appears after "minor" (low) in the text but the
        // high group is scanned first
        let draft = parse("minor tweak but urgent", reference_now());
        assert_eq!(draft.priority, Some(Priority::High));
    }

    #[test]
    fn test_missing_priority_is_absent() {
        let draft = parse("Buy milk", reference_now());
        assert_eq!(draft.priority, None);
    }

    #[test]
    fn test_duration_hours() {
        let draft = parse("Task 2h", reference_now());
        assert_eq!(draft.estimated_minutes, Some(120));
        assert_eq!(draft.title, "Task");

        let draft = parse("Workout 1 hour", reference_now());
        assert_eq!(draft.estimated_minutes, Some(60));
    }

    #[test]
    fn test_duration_minutes() {
        let draft = parse("Task 90 min", reference_now());
        assert_eq!(draft.estimated_minutes, Some(90));
        assert_eq!(draft.title, "Task");

        let draft = parse("Standup 15mins", reference_now());
        assert_eq!(draft.estimated_minutes, Some(15));
    }

    #[test]
    fn test_duration_fractional_hours() {
        let draft = parse("Task 1.5 hours", reference_now());
        assert_eq!(draft.estimated_minutes, Some(90));

        let draft = parse("Task 1.25 hrs", reference_now());
        assert_eq!(draft.estimated_minutes, Some(75));
    }

    #[test]
    fn test_duration_rounds_half_away_from_zero() {
        let draft = parse("Task 2.5 min", reference_now());
        assert_eq!(draft.estimated_minutes, Some(3));
    }

    #[test]
    fn test_duration_only_first_match_is_honored() {
        let draft = parse("Run 30min then 2h", reference_now());
        assert_eq!(draft.estimated_minutes, Some(30));
        assert_eq!(draft.title, "Run then 2h");
    }

    #[test]
    fn test_labels_preserve_order_and_strip_marker() {
        let draft = parse("Call dentist #health #urgent-care", reference_now());
        assert_eq!(draft.labels, Some(vec!["health".to_string(), "urgent-care".to_string()]));
        assert_eq!(draft.title, "Call dentist");
    }

    #[test]
    fn test_labels_case_preserved() {
        let draft = parse("Review #Work stuff", reference_now());
        assert_eq!(draft.labels, Some(vec!["Work".to_string()]));
        assert_eq!(draft.title, "Review stuff");
    }

    #[test]
    fn test_no_labels_is_absent_not_empty() {
        let draft = parse("Call dentist", reference_now());
        assert_eq!(draft.labels, None);
    }

    #[test]
    fn test_metadata_only_input_yields_empty_title() {
        let draft = parse("urgent 2h #chores", reference_now());
        assert_eq!(draft.title, "");
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.estimated_minutes, Some(120));
        assert_eq!(draft.labels, Some(vec!["chores".to_string()]));
    }

    #[test]
    fn test_full_example_sentence() {
        let draft = parse("Call dentist tomorrow at 2pm urgent #health", reference_now());
        assert_eq!(draft.title, "Call dentist");
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.labels, Some(vec!["health".to_string()]));
        let scheduled = draft.schedule_date.expect("schedule date should be set");
        assert_eq!(scheduled, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(14, 0, 0).unwrap());
        assert_eq!(draft.deadline, None);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse("Submit report by friday 2h #work", reference_now());
        let second = parse("Submit report by friday 2h #work", reference_now());
        assert_eq!(first, second);
    }
}
