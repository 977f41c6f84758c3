#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use whosin::libs::aggregate::TotalsCalculator;
    use whosin::libs::session::{Session, SessionState};

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hh, mm, 0).unwrap()
    }

    fn closed(id: i64, leader_id: &str, check_in: NaiveDateTime, check_out: NaiveDateTime) -> Session {
        Session {
            id,
            leader_id: leader_id.to_string(),
            check_in,
            state: SessionState::Closed {
                check_out,
                duration_minutes: (check_out - check_in).num_minutes(),
                auto_closed: false,
                exclude_from_totals: false,
            },
        }
    }

    fn swept(id: i64, leader_id: &str, check_in: NaiveDateTime, check_out: NaiveDateTime) -> Session {
        Session {
            id,
            leader_id: leader_id.to_string(),
            check_in,
            state: SessionState::Closed {
                check_out,
                duration_minutes: (check_out - check_in).num_minutes(),
                auto_closed: true,
                exclude_from_totals: true,
            },
        }
    }

    fn open(id: i64, leader_id: &str, check_in: NaiveDateTime) -> Session {
        Session {
            id,
            leader_id: leader_id.to_string(),
            check_in,
            state: SessionState::Open,
        }
    }

    #[test]
    fn test_closed_session_counts_today_and_week() {
        let sessions = vec![closed(1, "pres", at(2025, 1, 8, 9, 0), at(2025, 1, 8, 11, 30))];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 12, 0));

        let t = totals.get("pres").unwrap();
        assert!((t.today_minutes - 150.0).abs() < 1e-9);
        assert!((t.week_minutes - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_session_accrues_live() {
        let sessions = vec![open(1, "pres", at(2025, 1, 8, 9, 0))];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 9, 30));

        let t = totals.get("pres").unwrap();
        assert!((t.today_minutes - 30.0).abs() < 1e-9);
        assert!((t.week_minutes - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_swept_session_is_excluded_from_totals() {
        let sessions = vec![
            swept(1, "pres", at(2025, 1, 6, 23, 50), at(2025, 1, 7, 0, 0)),
            closed(2, "pres", at(2025, 1, 8, 9, 0), at(2025, 1, 8, 10, 0)),
        ];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 12, 0));

        // Only the regular session counts; the swept one leaves no trace.
        let t = totals.get("pres").unwrap();
        assert!((t.week_minutes - 60.0).abs() < 1e-9);
        assert!((t.today_minutes - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_earlier_weekday_counts_week_but_not_today() {
        // Tuesday session, viewed on Wednesday.
        let sessions = vec![closed(1, "pres", at(2025, 1, 7, 9, 0), at(2025, 1, 7, 17, 0))];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 12, 0));

        let t = totals.get("pres").unwrap();
        assert_eq!(t.today_minutes, 0.0);
        assert!((t.week_minutes - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_sessions_sum_per_leader() {
        let sessions = vec![
            closed(1, "pres", at(2025, 1, 8, 9, 0), at(2025, 1, 8, 10, 0)),
            closed(2, "pres", at(2025, 1, 8, 13, 0), at(2025, 1, 8, 13, 30)),
            closed(3, "vp", at(2025, 1, 8, 9, 0), at(2025, 1, 8, 9, 45)),
        ];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 14, 0));

        assert!((totals.get("pres").unwrap().today_minutes - 90.0).abs() < 1e-9);
        assert!((totals.get("vp").unwrap().today_minutes - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_minutes_are_preserved() {
        let check_in = at(2025, 1, 8, 9, 0);
        let check_out = check_in + chrono::Duration::seconds(90);
        let sessions = vec![Session {
            id: 1,
            leader_id: "pres".to_string(),
            check_in,
            state: SessionState::Closed {
                check_out,
                duration_minutes: 2,
                auto_closed: false,
                exclude_from_totals: false,
            },
        }];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 12, 0));

        // Totals fold the raw interval, not the rounded frozen duration.
        assert!((totals.get("pres").unwrap().week_minutes - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_leaders_without_sessions_are_absent() {
        let sessions: Vec<Session> = vec![];
        let totals = sessions.totals_by_leader(at(2025, 1, 8, 12, 0));
        assert!(totals.is_empty());
        assert!(totals.get("pres").is_none());
    }
}
