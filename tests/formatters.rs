#[cfg(test)]
mod tests {
    use chrono::Duration;
    use quickadd::libs::formatter::{format_duration, format_minutes};

    #[test]
    fn test_format_duration_zero() {
        let duration = Duration::zero();
        assert_eq!(format_duration(&duration), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
    }

    #[test]
    fn test_format_duration_negative_clamps_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(90), "01:30");
        assert_eq!(format_minutes(120), "02:00");
    }
}
