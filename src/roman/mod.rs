//! Roman dates, counted inclusively back from the Kalends, Nones or Ides.
//!
//! ```text
//! 1987-02-27  ->  a.d.III. Kal. Mart. MCMLXXXVII
//! 1600-02-29  ->  pr. Kal. Mart. MDC
//! 1401-12-21  ->  a.d.XII. Kal. Ian. MCDI
//! ```
//!
//! In a leap year the count back from the Kalends of March includes
//! February 29, so the bissextile day shifts every date from February 14
//! onwards by one, and February 14 itself becomes `a.d.XVII. Kal. Mart.`

use std::fmt as std_fmt;

use tracing::debug;

use crate::calendar::{self, Calendar, YearType};
use crate::date::HistoricalDate;
use crate::error::DateError;

pub mod fmt;
pub mod numeral;
mod parse;

/// Which day a Roman date names, relative to its marker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DayDesignator {
    /// The marked day itself.
    Marked,
    /// The day before the marked day (*pridie*).
    Pridie,
    /// The `n`th day before the marked day, counted inclusively
    /// (*ante diem*), `3..=19`.
    AnteDiem(u8),
    /// The day after the marked day (*postridie*). Only produced by parsing.
    Postridie,
}

/// The three marked days of a Roman month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    /// The first day of the month.
    Kalends,
    /// The 5th, or the 7th in March, May, July and October.
    Nones,
    /// The 13th, or the 15th in March, May, July and October.
    Ides,
}

/// Day of the Nones in `month`.
pub fn nones(month: i32) -> i32 {
    match month {
        3 | 5 | 7 | 10 => 7,
        _ => 5,
    }
}

/// Day of the Ides in `month`.
pub fn ides(month: i32) -> i32 {
    nones(month) + 8
}

/// A date in Roman notation.
///
/// # Example
///
/// ```
/// use fasti::{Calendar, HistoricalDate, RomanDate};
///
/// let date = HistoricalDate::gregorian(1987, 2, 27).unwrap();
/// let roman = RomanDate::from_date(&date).unwrap();
/// assert_eq!("a.d.III. Kal. Mart. MCMLXXXVII", roman.to_string());
///
/// let parsed = RomanDate::from_string("a.d.III. Kal. Mart. MCMLXXXVII", Calendar::Gregorian).unwrap();
/// assert_eq!(date, parsed.to_date().unwrap());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RomanDate {
    designator: DayDesignator,
    marker: Marker,
    month: u8,
    year: i32,
    calendar: Calendar,
}

impl RomanDate {
    /// Creates a Roman date.
    ///
    /// Fails if the date cannot be realized, e.g. `a.d.VI. Non.` in a month
    /// with the Nones on the 5th.
    pub fn new(
        designator: DayDesignator,
        marker: Marker,
        month: u8,
        year: i32,
        calendar: Calendar,
    ) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::invalid_date(format!("month {month} not in 1..=12")));
        }
        if !(1..=9999).contains(&year) {
            return Err(DateError::invalid_date(format!(
                "year {year} has no Roman numeral"
            )));
        }
        let date = Self {
            designator,
            marker,
            month,
            year,
            calendar,
        };
        date.to_date()?;
        Ok(date)
    }

    /// Converts a date into Roman notation.
    ///
    /// The date must be complete, and its year in `1..=9999`.
    pub fn from_date(date: &HistoricalDate) -> Result<Self, DateError> {
        let (Some(y), Some(m), Some(d)) = (date.year(), date.month(), date.day()) else {
            return Err(DateError::invalid_date(format!(
                "{date} is incomplete, cannot be converted into Roman notation"
            )));
        };
        if !(1..=9999).contains(&y) {
            return Err(DateError::invalid_date(format!("year {y} has no Roman numeral")));
        }
        let calendar = date.calendar();
        let (nones, ides) = (nones(m), ides(m));

        // inclusive count back to the next marked day
        let (count, marker, month) = if d == 1 {
            (1, Marker::Kalends, m)
        } else if d <= nones {
            (nones - d + 1, Marker::Nones, m)
        } else if d <= ides {
            (ides - d + 1, Marker::Ides, m)
        } else {
            let len = calendar::month_length(m, YearType::new(y, calendar)).unwrap_or(31);
            (len - d + 2, Marker::Kalends, m % 12 + 1)
        };
        let designator = match count {
            1 => DayDesignator::Marked,
            2 => DayDesignator::Pridie,
            n => DayDesignator::AnteDiem(n as u8),
        };
        Ok(Self {
            designator,
            marker,
            month: month as u8,
            year: y,
            calendar,
        })
    }

    /// Reads Roman notation from text.
    ///
    /// Besides the canonical form this accepts common spellings in any case:
    /// `ad.xv.cal. apr MDCXXXIV`, `pridie kalendas nov mdccc xv`,
    /// `a.d. IV. eid. dec md cccxv`, `postr nonis. okt m cccxv`. Where
    /// several spellings of a part match, the longest one is taken. The year
    /// may also be written in Arabic digits.
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::{Calendar, RomanDate};
    ///
    /// let date = RomanDate::from_string("prid Kal. mar MDC", Calendar::Julian).unwrap();
    /// assert_eq!("pr. Kal. Mart. MDC", date.to_string());
    /// assert_eq!("1600-2-29 (Julian)", date.to_date().unwrap().to_string());
    /// ```
    pub fn from_string(text: &str, calendar: Calendar) -> Result<Self, DateError> {
        let (designator, marker, month, year) = parse::read(text)?;
        let year = i32::try_from(year)
            .map_err(|_| DateError::invalid_date(format!("year {year} out of range")))?;
        Self::new(designator, marker, month, year, calendar)
    }

    pub fn designator(&self) -> DayDesignator {
        self.designator
    }
    pub fn marker(&self) -> Marker {
        self.marker
    }
    /// Returns the month (`1..=12`) the marker belongs to.
    pub fn month(&self) -> u8 {
        self.month
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Converts back into a civil date.
    ///
    /// Counting back from the Kalends of January lands in December of the
    /// same year, mirroring [`from_date`](Self::from_date).
    pub fn to_date(&self) -> Result<HistoricalDate, DateError> {
        let month = self.month as i32;
        let marked = match self.marker {
            Marker::Kalends => 1,
            Marker::Nones => nones(month),
            Marker::Ides => ides(month),
        };
        let count = match self.designator {
            DayDesignator::Marked => 1,
            DayDesignator::Pridie => 2,
            DayDesignator::AnteDiem(n @ 3..=19) => n as i32,
            DayDesignator::AnteDiem(n) => {
                return Err(DateError::invalid_date(format!(
                    "a.d. count {n} not in 3..=19"
                )));
            }
            DayDesignator::Postridie => {
                return HistoricalDate::new(self.year, month, marked + 1, self.calendar);
            }
        };

        // each count must stay clear of the previous marked day
        let (month, day, floor) = match self.marker {
            _ if count == 1 => (month, marked, 0),
            Marker::Kalends => {
                let prev = if month == 1 { 12 } else { month - 1 };
                let len = calendar::month_length(prev, YearType::new(self.year, self.calendar))
                    .unwrap_or(31);
                (prev, len + 2 - count, ides(prev))
            }
            Marker::Nones => (month, marked + 1 - count, 1),
            Marker::Ides => (month, marked + 1 - count, nones(month)),
        };
        if day <= floor {
            return Err(DateError::invalid_date(format!("{self} does not exist")));
        }
        let date = HistoricalDate::new(self.year, month, day, self.calendar)?;
        debug!(roman = %self, %date, "converted Roman date");
        Ok(date)
    }
}

/// Converts a date into Roman notation, see [`RomanDate::from_date`].
pub fn to_roman_date(date: &HistoricalDate) -> Result<RomanDate, DateError> {
    RomanDate::from_date(date)
}

impl std_fmt::Display for RomanDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        let designator = fmt::designator(self.designator);
        if !designator.is_empty() {
            write!(f, "{designator} ")?;
        }
        write!(
            f,
            "{} {} {}",
            fmt::marker(self.marker),
            fmt::month(self.month),
            numeral::encode(self.year as u32).unwrap_or_default()
        )
    }
}
