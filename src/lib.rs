//! Conversion of dates between the Julian and the proleptic Gregorian
//! calendar.
//!
//! Dates are plain `(year, month, day)` values; which calendar they belong
//! to is up to the caller. Years use astronomical numbering (year 0 is
//! 1 BC), and the reform rule is applied mathematically in both directions
//! rather than following any country's adoption date.
//!
//! Supported years are `MIN_YEAR..=MAX_YEAR`. Checked construction and
//! deserialization enforce that range; the conversion functions expect it
//! of their input.
//!
//! ```
//! use julian_gregorian::{CalendarDate, from_gregorian_to_julian, from_julian_to_gregorian};
//!
//! let julian = from_gregorian_to_julian(CalendarDate::new(1300, 1, 1));
//! assert_eq!(julian.to_ymd(), (1299, 12, 25));
//!
//! let gregorian = from_julian_to_gregorian(CalendarDate::new(1825, 10, 29));
//! assert_eq!(gregorian.to_ymd(), (1825, 11, 10));
//! ```

mod calendar;
mod consts;
mod convert;
mod error;
mod prelude;

pub use calendar::CalendarSystem;
pub use consts::*;
pub use convert::{convert, from_gregorian_to_julian, from_julian_to_gregorian};
pub use error::DateError;

use serde::{Deserialize, Serialize};

/// A calendar date as a year/month/day triple.
///
/// The value carries no calendar system of its own. Fields are ordered so
/// that derived ordering is chronological within one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date without validation.
    ///
    /// The components are expected to name a real day in whichever
    /// calendar the caller means, with `year` in `MIN_YEAR..=MAX_YEAR`;
    /// use [`CalendarSystem::date`] to check.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering)
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Converts to a `(year, month, day)` tuple
    pub const fn to_ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl From<(i32, u8, u8)> for CalendarDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_ymd()
    }
}

/// Wire form of [`CalendarDate`], checked before conversion.
#[derive(Deserialize)]
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = DateError;

    // Can't check month length without a calendar, so only the outer bounds
    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&raw.year) {
            return Err(DateError::InvalidYear(raw.year));
        }
        if !(JANUARY..=MAX_MONTH).contains(&raw.month) {
            return Err(DateError::InvalidMonth(raw.month));
        }
        if !(MIN_DAY..=MAX_DAY).contains(&raw.day) {
            return Err(DateError::DayOutOfRange(raw.day));
        }
        Ok(Self::new(raw.year, raw.month, raw.day))
    }
}
