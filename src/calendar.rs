use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::{CalendarDate, DateError, prelude::*};

/// One of the two supported calendar systems.
///
/// Both share month names and the month-length table. They differ only in
/// which years are leap years, and every derived operation here
/// (`days_in_month`, `add_days`) is built on that one predicate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    /// Leap year every fourth year, without exception
    #[display(fmt = "Julian")]
    Julian,
    /// Julian rule minus centurial years not divisible by 400
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl CalendarSystem {
    /// Both calendar systems, Julian first.
    pub const ALL: [Self; 2] = [Self::Julian, Self::Gregorian];

    /// Returns the other calendar system of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::Julian => Self::Gregorian,
            Self::Gregorian => Self::Julian,
        }
    }

    /// Whether `year` (astronomical numbering, 0 = 1 BC) is a leap year.
    pub const fn is_leap_year(self, year: i32) -> bool {
        let every_fourth = year.rem_euclid(LEAP_YEAR_CYCLE) == 0;
        match self {
            Self::Julian => every_fourth,
            Self::Gregorian => {
                (every_fourth && year.rem_euclid(CENTURY_CYCLE) != 0)
                    || year.rem_euclid(GREGORIAN_CYCLE) == 0
            }
        }
    }

    /// Number of days in `month` of `year`.
    ///
    /// `month` must be in `1..=12`.
    pub const fn days_in_month(self, year: i32, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    }

    /// Whether `date` names a day that exists in this calendar within the
    /// supported year range.
    pub fn is_valid(self, date: CalendarDate) -> bool {
        self.date(date.year(), date.month(), date.day()).is_ok()
    }

    /// Creates a date after checking it exists in this calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`, `DateError::InvalidMonth` if `month` is outside
    /// `1..=12`, or `DateError::InvalidDay` if `day` is outside the month's
    /// length.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_gregorian::CalendarSystem;
    ///
    /// assert!(CalendarSystem::Julian.date(1900, 2, 29).is_ok());
    /// assert!(CalendarSystem::Gregorian.date(1900, 2, 29).is_err());
    /// ```
    pub fn date(self, year: i32, month: u8, day: u8) -> Result<CalendarDate, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(JANUARY..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        let max_day = self.days_in_month(year, month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                calendar: self,
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(CalendarDate::new(year, month, day))
    }

    /// Adds a signed number of days to `date` and normalizes the result
    /// against this calendar's month lengths.
    ///
    /// Month and year roll over in either direction as often as needed. The
    /// input is left untouched; a new date is returned.
    pub fn add_days(self, date: CalendarDate, days: i32) -> CalendarDate {
        let mut year = date.year();
        let mut month = date.month();
        let mut day = i64::from(date.day()) + i64::from(days);

        // borrow from preceding months
        while day < i64::from(MIN_DAY) {
            (year, month) = previous_month(year, month);
            day += i64::from(self.days_in_month(year, month));
        }

        // carry into following months
        loop {
            let month_len = i64::from(self.days_in_month(year, month));
            if day <= month_len {
                break;
            }
            day -= month_len;
            (year, month) = next_month(year, month);
        }

        // day is now within 1..=31
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = day as u8;
        CalendarDate::new(year, month, day)
    }
}

// --- month stepping ---
const fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month == DECEMBER {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    }
}

const fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == JANUARY {
        (year - 1, DECEMBER)
    } else {
        (year, month - 1)
    }
}
