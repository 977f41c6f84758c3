#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use whosin::libs::time::{duration_minutes, format_duration, format_minutes, minutes_between, start_of_day, start_of_week};

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hh, mm, ss).unwrap()
    }

    #[test]
    fn test_start_of_day_truncates_to_midnight() {
        assert_eq!(start_of_day(at(2025, 1, 8, 15, 42, 7)), at(2025, 1, 8, 0, 0, 0));
        assert_eq!(start_of_day(at(2025, 1, 8, 0, 0, 0)), at(2025, 1, 8, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_from_wednesday() {
        // 2025-01-08 is a Wednesday; the preceding Monday is 2025-01-06.
        assert_eq!(start_of_week(at(2025, 1, 8, 15, 42, 7)), at(2025, 1, 6, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_from_sunday() {
        // 2025-01-12 is a Sunday; the week still starts the previous Monday.
        assert_eq!(start_of_week(at(2025, 1, 12, 23, 59, 59)), at(2025, 1, 6, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_on_monday_is_same_day() {
        assert_eq!(start_of_week(at(2025, 1, 6, 10, 0, 0)), at(2025, 1, 6, 0, 0, 0));
    }

    #[test]
    fn test_duration_minutes_rounds_to_nearest() {
        let start = at(2025, 1, 8, 9, 0, 0);
        assert_eq!(duration_minutes(start, at(2025, 1, 8, 11, 30, 0)), 150);
        // 29m30s rounds up.
        assert_eq!(duration_minutes(start, at(2025, 1, 8, 9, 29, 30)), 30);
        // 29m29s rounds down.
        assert_eq!(duration_minutes(start, at(2025, 1, 8, 9, 29, 29)), 29);
    }

    #[test]
    fn test_duration_minutes_never_negative() {
        let start = at(2025, 1, 8, 9, 0, 0);
        assert_eq!(duration_minutes(start, at(2025, 1, 8, 8, 0, 0)), 0);
    }

    #[test]
    fn test_minutes_between_keeps_fractions() {
        let start = at(2025, 1, 8, 9, 0, 0);
        let m = minutes_between(start, at(2025, 1, 8, 9, 0, 30));
        assert!((m - 0.5).abs() < 1e-9);
        assert_eq!(minutes_between(start, at(2025, 1, 8, 8, 0, 0)), 0.0);
    }

    #[test]
    fn test_format_duration_under_one_hour() {
        assert_eq!(format_duration(&Duration::seconds(90)), "1m 30s");
        assert_eq!(format_duration(&Duration::seconds(59)), "0m 59s");
        assert_eq!(format_duration(&Duration::zero()), "0m 0s");
    }

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration(&Duration::seconds(3661)), "1h 1m 1s");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(5) + Duration::seconds(31))), "2h 5m 31s");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::seconds(-42)), "0m 0s");
        assert_eq!(format_duration(&Duration::hours(-3)), "0m 0s");
    }

    #[test]
    fn test_format_minutes_under_one_hour() {
        assert_eq!(format_minutes(45.0), "45m");
        assert_eq!(format_minutes(0.0), "0m");
    }

    #[test]
    fn test_format_minutes_with_hours() {
        assert_eq!(format_minutes(150.0), "2h 30m");
        assert_eq!(format_minutes(60.0), "1h 0m");
    }

    #[test]
    fn test_format_minutes_rounds_and_clamps() {
        // 59.6 rounds up to a full hour.
        assert_eq!(format_minutes(59.6), "1h 0m");
        assert_eq!(format_minutes(44.4), "44m");
        assert_eq!(format_minutes(-5.0), "0m");
    }
}
