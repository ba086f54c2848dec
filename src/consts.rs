/// Earliest supported year (astronomical numbering)
pub const MIN_YEAR: i32 = -999_999;

/// Latest supported year
pub const MAX_YEAR: i32 = 999_999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Longest month in either calendar
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, where the leap-cycle year begins
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years (the whole Julian rule)
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not Gregorian leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Net days the Gregorian calendar drifts from the Julian one per 400 years
pub(crate) const DRIFT_PER_GREGORIAN_CYCLE: i32 = 3;
/// The two calendars agree from March 200 to February 300, where the
/// divergence formula would otherwise read 2
pub(crate) const DIVERGENCE_EPOCH_OFFSET: i32 = 2;
