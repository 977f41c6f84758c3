#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use whosin::commands::admin::DEFAULT_ROSTER;
    use whosin::db::attendance::Attendance;
    use whosin::db::leaders::Leaders;
    use whosin::db::sessions::Sessions;

    static DB_LOCK: Mutex<()> = Mutex::new(());

    struct LeaderTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for LeaderTestContext {
        fn setup() -> Self {
            let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            LeaderTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hh, mm, 0).unwrap()
    }

    #[test_context(LeaderTestContext)]
    #[test]
    fn test_seed_orders_by_sort_key(_ctx: &mut LeaderTestContext) {
        let mut leaders = Leaders::new().unwrap();
        let seeded = leaders.seed(&[("vp", "Vice President", 2), ("pres", "President", 1), ("sec", "Secretary", 3)]).unwrap();
        assert_eq!(seeded, 3);

        let board = leaders.fetch_all().unwrap();
        let ids: Vec<&str> = board.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["pres", "vp", "sec"]);
        assert!(board.iter().all(|l| !l.is_active && l.current_session_id.is_none()));
    }

    #[test_context(LeaderTestContext)]
    #[test]
    fn test_default_roster_seeds_full_board(_ctx: &mut LeaderTestContext) {
        let mut leaders = Leaders::new().unwrap();
        assert_eq!(leaders.seed(DEFAULT_ROSTER).unwrap(), 23);

        let board = leaders.fetch_all().unwrap();
        assert_eq!(board.len(), 23);
        assert_eq!(board[0].id, "pres");
        assert_eq!(board[0].role, "President");
    }

    #[test_context(LeaderTestContext)]
    #[test]
    fn test_reseed_resets_status_and_updates_role(_ctx: &mut LeaderTestContext) {
        let mut leaders = Leaders::new().unwrap();
        leaders.seed(&[("pres", "President", 1)]).unwrap();

        let mut attendance = Attendance::new().unwrap();
        attendance.clock_in_at("pres", at(2025, 1, 8, 9, 0)).unwrap();

        leaders.seed(&[("pres", "Chapter President", 1)]).unwrap();

        let leader = leaders.fetch("pres").unwrap().unwrap();
        assert_eq!(leader.role, "Chapter President");
        assert!(!leader.is_active);
        assert_eq!(leader.current_session_id, None);
    }

    #[test_context(LeaderTestContext)]
    #[test]
    fn test_reset_empties_database(_ctx: &mut LeaderTestContext) {
        let mut leaders = Leaders::new().unwrap();
        leaders.seed(&[("pres", "President", 1), ("vp", "Vice President", 2)]).unwrap();

        let mut attendance = Attendance::new().unwrap();
        attendance.clock_in_at("pres", at(2025, 1, 8, 9, 0)).unwrap();
        attendance.clock_out_at("pres", at(2025, 1, 8, 10, 0)).unwrap();
        attendance.clock_in_at("vp", at(2025, 1, 8, 9, 30)).unwrap();

        // Sessions first, then the roster that references them.
        let mut sessions = Sessions::new().unwrap();
        assert_eq!(sessions.delete_all().unwrap(), 2);
        assert_eq!(leaders.delete_all().unwrap(), 2);

        assert!(leaders.fetch_all().unwrap().is_empty());
        assert!(sessions.fetch_since(at(2025, 1, 1, 0, 0)).unwrap().is_empty());
    }

    #[test_context(LeaderTestContext)]
    #[test]
    fn test_status_label_follows_activity(_ctx: &mut LeaderTestContext) {
        let mut leaders = Leaders::new().unwrap();
        leaders.seed(&[("pres", "President", 1)]).unwrap();

        let mut attendance = Attendance::new().unwrap();
        assert_eq!(leaders.fetch("pres").unwrap().unwrap().status_label(), "Out");

        attendance.clock_in_at("pres", at(2025, 1, 8, 9, 0)).unwrap();
        assert_eq!(leaders.fetch("pres").unwrap().unwrap().status_label(), "In office");

        attendance.clock_out_at("pres", at(2025, 1, 8, 10, 0)).unwrap();
        assert_eq!(leaders.fetch("pres").unwrap().unwrap().status_label(), "Out");
    }
}
