//! Utilities for working with historical dates.
//!
//! This crate converts dates between the Julian and the Gregorian calendar,
//! computes Easter and the movable feasts for either calendar, writes dates
//! in Roman notation (Kalends, Nones and Ides), and reads dates from text
//! written in several languages and numeral systems.
//!
//! # Examples
//!
//! Conversion between calendars with [`HistoricalDate`]:
//!
//! ```
//! use fasti::{Calendar, create_date};
//!
//! let date = create_date(1732, 2, 22, Calendar::Gregorian).unwrap();
//!
//! assert_eq!("1732-2-11 (Julian)", date.to_julian().to_string());
//! assert_eq!(2353712, date.day_count().jdn());
//! ```
//!
//! Easter:
//!
//! ```
//! use fasti::{Calendar, calculate_easter};
//!
//! let easter = calculate_easter(1400, Calendar::Julian).unwrap();
//!
//! assert_eq!("1400-4-18 (Julian)", easter.sunday.to_string());
//! ```
//!
//! Roman notation:
//!
//! ```
//! use fasti::{Calendar, RomanDate, create_date, to_roman_date};
//!
//! let date = create_date(1987, 2, 27, Calendar::Gregorian).unwrap();
//! let roman = to_roman_date(&date).unwrap();
//!
//! assert_eq!("a.d.III. Kal. Mart. MCMLXXXVII", roman.to_string());
//! assert_eq!(
//!     roman,
//!     RomanDate::from_string("ad iii kal. mart. mcmlxxxvii", Calendar::Gregorian).unwrap()
//! );
//! ```
//!
//! Years are astronomical year numbers throughout: 1 BC is `0`.

pub mod calendar;
pub mod date;
pub mod day_count;
pub mod easter;
pub mod error;
pub mod parse;
pub mod roman;

pub use calendar::{Calendar, YearType, is_leap_year};
pub use date::HistoricalDate;
pub use day_count::DayCount;
pub use easter::{Easter, calculate_easter};
pub use error::DateError;
pub use parse::{ParsedDateFields, parse_date_string};
pub use roman::{DayDesignator, Marker, RomanDate, to_roman_date};

/// Creates a date, checking that it exists in `calendar`.
///
/// Same as [`HistoricalDate::new`].
pub fn create_date(
    year: i32,
    month: i32,
    day: i32,
    calendar: Calendar,
) -> Result<HistoricalDate, DateError> {
    HistoricalDate::new(year, month, day, calendar)
}

/// Reads a date from text and checks that it exists in `calendar`.
///
/// Same as [`HistoricalDate::from_text`].
///
/// # Example
///
/// ```
/// use fasti::{Calendar, create_date_from_string};
///
/// let date = create_date_from_string("August 27, 1792", Calendar::Gregorian).unwrap();
/// assert_eq!("1792-8-27", date.to_string());
/// assert!(create_date_from_string("not a date", Calendar::Gregorian).is_err());
/// ```
pub fn create_date_from_string(text: &str, calendar: Calendar) -> Result<HistoricalDate, DateError> {
    HistoricalDate::from_text(text, calendar)
}
