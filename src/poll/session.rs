//! Trading session utilities.
//!
//! Classifies wall-clock time against the domestic trading calendar:
//! weekdays, with a morning window 09:30-11:30 and an afternoon window
//! 13:00-15:00 local time. Pure `*_at` forms take an explicit timestamp;
//! `*_now` wrappers read the local clock.

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};

/// Morning window open, as minute of day (09:30).
pub const MORNING_OPEN_MIN: u32 = 570;
/// Morning window close, as minute of day (11:30).
pub const MORNING_CLOSE_MIN: u32 = 690;
/// Afternoon window open, as minute of day (13:00).
pub const AFTERNOON_OPEN_MIN: u32 = 780;
/// Afternoon window close, as minute of day (15:00).
pub const AFTERNOON_CLOSE_MIN: u32 = 900;

/// Check if a weekday is a trading day.
#[must_use]
pub fn is_trading_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Check if a given local datetime falls inside a trading window.
#[must_use]
pub fn is_session_open_at(dt: NaiveDateTime) -> bool {
    if !is_trading_day(dt.weekday()) {
        return false;
    }

    let minute_of_day = dt.hour() * 60 + dt.minute();
    (MORNING_OPEN_MIN..=MORNING_CLOSE_MIN).contains(&minute_of_day)
        || (AFTERNOON_OPEN_MIN..=AFTERNOON_CLOSE_MIN).contains(&minute_of_day)
}

/// Check if the market is open right now, by the local clock.
#[must_use]
pub fn is_session_open_now() -> bool {
    is_session_open_at(Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_morning_window_open() {
        // 2026-02-09 is Monday
        assert!(is_session_open_at(local(2026, 2, 9, 9, 30)));
        assert!(is_session_open_at(local(2026, 2, 9, 10, 15)));
        assert!(is_session_open_at(local(2026, 2, 9, 11, 30)));
    }

    #[test]
    fn test_lunch_break_closed() {
        assert!(!is_session_open_at(local(2026, 2, 9, 11, 31)));
        assert!(!is_session_open_at(local(2026, 2, 9, 12, 0)));
        assert!(!is_session_open_at(local(2026, 2, 9, 12, 59)));
    }

    #[test]
    fn test_afternoon_window_open() {
        assert!(is_session_open_at(local(2026, 2, 9, 13, 0)));
        assert!(is_session_open_at(local(2026, 2, 9, 14, 30)));
        assert!(is_session_open_at(local(2026, 2, 9, 15, 0)));
    }

    #[test]
    fn test_before_and_after_hours_closed() {
        assert!(!is_session_open_at(local(2026, 2, 9, 9, 29)));
        assert!(!is_session_open_at(local(2026, 2, 9, 15, 1)));
        assert!(!is_session_open_at(local(2026, 2, 9, 20, 0)));
        assert!(!is_session_open_at(local(2026, 2, 9, 3, 0)));
    }

    #[test]
    fn test_weekend_closed() {
        // 2026-02-07 is Saturday, 2026-02-08 is Sunday
        assert!(!is_session_open_at(local(2026, 2, 7, 10, 0)));
        assert!(!is_session_open_at(local(2026, 2, 8, 14, 0)));
    }

    #[test]
    fn test_every_weekday_trades() {
        // 2026-02-09 through 2026-02-13 are Monday through Friday
        for day in 9..=13 {
            assert!(
                is_session_open_at(local(2026, 2, day, 10, 0)),
                "2026-02-{:02} should be a trading day",
                day
            );
        }
    }

    #[test]
    fn test_is_trading_day() {
        assert!(is_trading_day(Weekday::Mon));
        assert!(is_trading_day(Weekday::Fri));
        assert!(!is_trading_day(Weekday::Sat));
        assert!(!is_trading_day(Weekday::Sun));
    }
}
