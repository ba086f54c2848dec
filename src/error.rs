use crate::CalendarSystem;
use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};

/// Error type for checked date construction.
///
/// The conversion functions themselves never fail; this only surfaces when a
/// caller builds a [`CalendarDate`](crate::CalendarDate) from untrusted
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the month's length in a known calendar.
    #[error("Invalid day {day} for {calendar} month {year}-{month:02} (max {max_day})")]
    InvalidDay {
        calendar: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// Day outside `1..=31`, checked without a calendar.
    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    DayOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_year_message() {
        let err = DateError::InvalidYear(1_000_000);
        assert_eq!(
            err.to_string(),
            "Invalid year: 1000000 (must be -999999-999999)"
        );
    }

    #[test]
    fn test_invalid_month_message() {
        let err = DateError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn test_invalid_day_message() {
        let err = DateError::InvalidDay {
            calendar: CalendarSystem::Gregorian,
            year: 1900,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "Invalid day 29 for Gregorian month 1900-02 (max 28)"
        );
    }

    #[test]
    fn test_day_out_of_range_message() {
        let err = DateError::DayOutOfRange(0);
        assert_eq!(err.to_string(), "Invalid day: 0 (must be 1-31)");
    }

    #[test]
    fn test_error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<DateError>();
    }
}
