//! Calendar arithmetic: leap year rules and conversion between calendar dates
//! and [`DayCount`].
//!
//! Years are astronomical year numbers, i.e. 1 BC is `0`, 2 BC is `-1`, etc.

use std::fmt;

use crate::day_count::DayCount;
use crate::error::DateError;

/// The calendar a date is expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Calendar {
    Julian,
    #[default]
    Gregorian,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Calendar::Julian => "Julian",
            Calendar::Gregorian => "Gregorian",
        })
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in `calendar`.
    pub fn new(year: i32, calendar: Calendar) -> Self {
        match calendar {
            Calendar::Julian => Self::from_julian(year),
            Calendar::Gregorian => Self::from_gregorian(year),
        }
    }
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Julian calendar.
    ///
    /// Every year up to and including 1 BC (`0`) counts as a leap year.
    pub fn from_julian(year: i32) -> Self {
        if year % 4 == 0 || year <= 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Returns `true` if `year` is a leap year in `calendar`.
///
/// # Example
///
/// ```
/// use fasti::{Calendar, is_leap_year};
///
/// assert!(is_leap_year(1900, Calendar::Julian));
/// assert!(!is_leap_year(1900, Calendar::Gregorian));
/// ```
pub fn is_leap_year(year: i32, calendar: Calendar) -> bool {
    YearType::new(year, calendar).is_leap()
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in `1..=12`.
pub fn days_in_month(year: i32, month: i32, calendar: Calendar) -> Option<i32> {
    month_length(month, YearType::new(year, calendar))
}

pub(crate) fn month_length(month: i32, year_type: YearType) -> Option<i32> {
    match month {
        2 => Some(28 + year_type.is_leap() as i32),
        4 | 6 | 9 | 11 => Some(30),
        1..=12 => Some(31),
        _ => None,
    }
}

/// Earliest year a date may have.
pub const MIN_YEAR: i32 = -1_000_000;
/// Latest year a date may have.
pub const MAX_YEAR: i32 = 1_000_000;

/// Checks that `year` is in `MIN_YEAR..=MAX_YEAR`.
pub fn check_year(year: i32) -> Result<(), DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::invalid_date(format!(
            "year {year} not in {MIN_YEAR}..={MAX_YEAR}"
        )));
    }
    Ok(())
}

/// Checks that `year-month-day` exists in `calendar`, and that `year` is in
/// `MIN_YEAR..=MAX_YEAR`.
pub fn validate(year: i32, month: i32, day: i32, calendar: Calendar) -> Result<(), DateError> {
    check_year(year)?;
    let len = days_in_month(year, month, calendar)
        .ok_or_else(|| DateError::invalid_date(format!("month {month} not in 1..=12")))?;
    if day < 1 || day > len {
        return Err(DateError::invalid_date(format!(
            "month {month} of {year} ({calendar}) doesn't have a day {day}"
        )));
    }
    Ok(())
}

/// Converts a calendar date into a [`DayCount`].
///
/// The date is not validated: a day past the end of the month rolls over into
/// the next one.
///
/// # Example
///
/// ```
/// use fasti::{Calendar, calendar::to_day_count};
///
/// assert_eq!(2451545, to_day_count(2000, 1, 1, Calendar::Gregorian).jdn());
/// assert_eq!(2299161, to_day_count(1582, 10, 5, Calendar::Julian).jdn());
/// ```
pub fn to_day_count(year: i32, month: i32, day: i32, calendar: Calendar) -> DayCount {
    DayCount::from_jdn(jdn_from_ymd(year.into(), month.into(), day.into(), calendar))
}

fn jdn_from_ymd(y: i64, m: i64, d: i64, calendar: Calendar) -> i64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if m <= 2 { (y - 1, m + 12) } else { (y, m) };
    match calendar {
        // Meeus, Astronomical Algorithms, ch. 7, with floor division so that
        // negative day counts work too
        Calendar::Julian => {
            (1461 * (y + 4716)).div_euclid(4) + 306001 * (m + 1) / 10000 + d - 1524
        }
        Calendar::Gregorian => {
            (1461 * (y + 4716)).div_euclid(4) + 306001 * (m + 1) / 10000 + d - 1524
                - y.div_euclid(100)
                + y.div_euclid(400)
                + 2
        }
    }
}

/// Day counts further than this from JDN 0 are rejected before any
/// arithmetic, keeping intermediate products inside `i64`.
const MAX_JDN_MAGNITUDE: u64 = 1 << 50;

/// Represents a [`DayCount`] in `calendar`.
///
/// Returns in `(year, month, day)` format. Fails if the year does not fit in
/// an `i32`.
///
/// # Example
///
/// ```
/// use fasti::{Calendar, DayCount, calendar::from_day_count};
///
/// let date = DayCount::from_jdn(2299161);
/// assert_eq!(Ok((1582, 10, 15)), from_day_count(date, Calendar::Gregorian));
/// assert_eq!(Ok((1582, 10, 5)), from_day_count(date, Calendar::Julian));
/// ```
pub fn from_day_count(date: DayCount, calendar: Calendar) -> Result<(i32, i32, i32), DateError> {
    let jdn = date.jdn();
    let out_of_range = || DateError::invalid_date(format!("JDN {jdn} out of range"));
    if jdn.unsigned_abs() > MAX_JDN_MAGNITUDE {
        return Err(out_of_range());
    }
    let (y, m, d) = match calendar {
        Calendar::Julian => julian_from_jdn(jdn),
        Calendar::Gregorian => gregorian_from_jdn(jdn),
    };
    let year = i32::try_from(y).map_err(|_| out_of_range())?;
    // 1..=12 and 1..=31
    Ok((year, m as i32, d as i32))
}

fn julian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let b = jdn + 1524;
    let c = (100 * b - 12210).div_euclid(36525);
    let d = (1461 * c).div_euclid(4);
    let e = (b - d) * 10000 / 306001;
    let day = b - d - 306001 * e / 10000;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year, month, day)
}

/// JDN of January 1, AD 1 (Gregorian).
const GREGORIAN_EPOCH: i64 = 1721426;
const DAYS_PER_400_YEARS: i64 = 146097;
const DAYS_PER_100_YEARS: i64 = 36524;
const DAYS_PER_4_YEARS: i64 = 1461;
const DAYS_PER_YEAR: i64 = 365;

fn gregorian_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let since_epoch = jdn - GREGORIAN_EPOCH;
    let quadricent = since_epoch.div_euclid(DAYS_PER_400_YEARS);
    let dqc = since_epoch.rem_euclid(DAYS_PER_400_YEARS);
    let cent = dqc / DAYS_PER_100_YEARS;
    let dcent = dqc % DAYS_PER_100_YEARS;
    let quad = dcent / DAYS_PER_4_YEARS;
    let dquad = dcent % DAYS_PER_4_YEARS;
    let yindex = dquad / DAYS_PER_YEAR;

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // `cent == 4` or `yindex == 4` only on the last day of a leap cycle,
    // which still belongs to the cycle's final year
    if cent != 4 && yindex != 4 {
        year += 1;
    }

    let year_day = jdn - jdn_from_ymd(year, 1, 1, Calendar::Gregorian);
    let leap = year % 4 == 0 && year % 100 != 0 || year % 400 == 0;
    let leap_adj = if year_day < 58 + leap as i64 {
        0
    } else if leap {
        1
    } else {
        2
    };
    let month = (((year_day + leap_adj) * 12) + 373) / 367;
    let day = jdn - jdn_from_ymd(year, month, 1, Calendar::Gregorian) + 1;
    (year, month, day)
}
