//! Conversion between Julian and proleptic Gregorian dates.
//!
//! Both directions compute how far the calendars have drifted apart at the
//! given year and month, then shift the date by that many days using the
//! target calendar's month lengths.
//!
//! Input years are expected within `MIN_YEAR..=MAX_YEAR`. The result may land
//! a few decades past either bound, since the offset grows by three days
//! every 400 years, but stays far inside `i32`.

use crate::consts::{CENTURY_CYCLE, DIVERGENCE_EPOCH_OFFSET, DRIFT_PER_GREGORIAN_CYCLE, MARCH};
use crate::{CalendarDate, CalendarSystem};

/// Centuries per 400-year Gregorian cycle
const CENTURIES_PER_CYCLE: i32 = 4;

/// Converts a Julian date to the proleptic Gregorian calendar.
///
/// # Example
///
/// ```
/// use julian_gregorian::{CalendarDate, from_julian_to_gregorian};
///
/// let gregorian = from_julian_to_gregorian(CalendarDate::new(1899, 12, 23));
/// assert_eq!(gregorian.to_ymd(), (1900, 1, 4));
/// ```
pub fn from_julian_to_gregorian(date: CalendarDate) -> CalendarDate {
    let offset = day_difference(date.year(), date.month());
    let result = CalendarSystem::Gregorian.add_days(date, offset);
    log::trace!("julian {date:?} -> gregorian {result:?} (offset {offset:+})");
    result
}

/// Converts a proleptic Gregorian date to the Julian calendar.
///
/// # Example
///
/// ```
/// use julian_gregorian::{CalendarDate, from_gregorian_to_julian};
///
/// let julian = from_gregorian_to_julian(CalendarDate::new(2018, 8, 9));
/// assert_eq!(julian.to_ymd(), (2018, 7, 27));
/// ```
pub fn from_gregorian_to_julian(date: CalendarDate) -> CalendarDate {
    let offset = day_difference(date.year(), date.month());
    let result = CalendarSystem::Julian.add_days(date, -offset);
    log::trace!("gregorian {date:?} -> julian {result:?} (offset {:+})", -offset);
    result
}

/// Converts `date` from one calendar system to another.
///
/// Returns `date` unchanged when `from == to`.
pub fn convert(date: CalendarDate, from: CalendarSystem, to: CalendarSystem) -> CalendarDate {
    match (from, to) {
        (CalendarSystem::Julian, CalendarSystem::Gregorian) => from_julian_to_gregorian(date),
        (CalendarSystem::Gregorian, CalendarSystem::Julian) => from_gregorian_to_julian(date),
        (CalendarSystem::Julian, CalendarSystem::Julian)
        | (CalendarSystem::Gregorian, CalendarSystem::Gregorian) => date,
    }
}

/// Days the Gregorian calendar runs ahead of the Julian one at `year`/`month`.
///
/// January and February count toward the previous year, since the two
/// calendars only diverge on a skipped February 29.
const fn day_difference(year: i32, month: u8) -> i32 {
    let year = if month < MARCH { year - 1 } else { year };
    let centuries = year.div_euclid(CENTURY_CYCLE);
    let cycles = centuries.div_euclid(CENTURIES_PER_CYCLE);
    let remainder = centuries.rem_euclid(CENTURIES_PER_CYCLE);
    DRIFT_PER_GREGORIAN_CYCLE * cycles + remainder - DIVERGENCE_EPOCH_OFFSET
}
