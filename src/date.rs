//! Dates in the Julian or Gregorian calendar, possibly with unknown fields.

use std::fmt;

use crate::calendar::{self, Calendar, YearType};
use crate::day_count::DayCount;
use crate::error::DateError;
use crate::parse::parse_date_string;

/// A date in either the Julian or the Gregorian calendar.
///
/// Any of year, month and day may be unknown (`None`). Unknown fields stay
/// unknown through conversion and arithmetic: the computation substitutes `1`
/// for them and the result forgets the substituted value again.
///
/// `==` compares fields and calendar as they are. Use
/// [`same_day_as`](Self::same_day_as) to compare across calendars.
///
/// # Example
///
/// ```
/// use fasti::HistoricalDate;
///
/// let date = HistoricalDate::gregorian(1582, 10, 15).unwrap();
/// assert_eq!("1582-10-5 (Julian)", date.to_julian().to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HistoricalDate {
    year: Option<i32>,
    month: Option<i32>,
    day: Option<i32>,
    calendar: Calendar,
}

impl HistoricalDate {
    /// Creates a date, checking that it exists in `calendar`.
    pub fn new(year: i32, month: i32, day: i32, calendar: Calendar) -> Result<Self, DateError> {
        Self::partial(Some(year), Some(month), Some(day), calendar)
    }
    /// Creates a Gregorian date.
    pub fn gregorian(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::new(year, month, day, Calendar::Gregorian)
    }
    /// Creates a Julian date.
    pub fn julian(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::new(year, month, day, Calendar::Julian)
    }

    /// Creates a date of which some fields may be unknown.
    ///
    /// Known fields are checked against the most lenient reading of the
    /// unknown ones: a day with unknown month may be up to 31. February of an
    /// unknown year has 28 days, as computation substitutes the common year 1.
    /// A known year must be in [`MIN_YEAR`](calendar::MIN_YEAR)`..=`[`MAX_YEAR`](calendar::MAX_YEAR).
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::{Calendar, HistoricalDate};
    ///
    /// let date = HistoricalDate::partial(Some(1987), None, Some(27), Calendar::Julian).unwrap();
    /// assert_eq!("1987-??-27 (Julian)", date.to_string());
    /// ```
    pub fn partial(
        year: Option<i32>,
        month: Option<i32>,
        day: Option<i32>,
        calendar: Calendar,
    ) -> Result<Self, DateError> {
        if let Some(y) = year {
            calendar::check_year(y)?;
        }
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => calendar::validate(y, m, d, calendar)?,
            _ => {
                if let Some(m) = month
                    && !(1..=12).contains(&m)
                {
                    return Err(DateError::invalid_date(format!("month {m} not in 1..=12")));
                }
                if let Some(d) = day {
                    let year_type = year.map_or(YearType::Common, |y| YearType::new(y, calendar));
                    let max = month.and_then(|m| calendar::month_length(m, year_type));
                    if d < 1 || d > max.unwrap_or(31) {
                        return Err(DateError::invalid_date(format!(
                            "day {d} out of range for {}",
                            Self::raw(year, month, None, calendar)
                        )));
                    }
                }
            }
        }
        Ok(Self::raw(year, month, day, calendar))
    }

    /// Creates a date from a [`DayCount`].
    ///
    /// Fails if the year falls outside
    /// [`MIN_YEAR`](calendar::MIN_YEAR)`..=`[`MAX_YEAR`](calendar::MAX_YEAR).
    pub fn from_day_count(date: DayCount, calendar: Calendar) -> Result<Self, DateError> {
        let (y, m, d) = calendar::from_day_count(date, calendar)?;
        calendar::check_year(y)?;
        Ok(Self::raw(Some(y), Some(m), Some(d), calendar))
    }

    /// Reads a date from free-form text, see [`parse_date_string`].
    ///
    /// Fails with [`DateError::InvalidDate`] if no format matches or the
    /// parsed date does not exist in `calendar`.
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::{Calendar, HistoricalDate};
    ///
    /// let date = HistoricalDate::from_text("XXVI Dec. M DCXCII", Calendar::Julian).unwrap();
    /// assert_eq!("1692-12-26 (Julian)", date.to_string());
    /// ```
    pub fn from_text(text: &str, calendar: Calendar) -> Result<Self, DateError> {
        let fields = parse_date_string(text)?
            .ok_or_else(|| DateError::invalid_date(format!("unrecognized date {text:?}")))?;
        Self::new(fields.year, fields.month, fields.day, calendar)
    }

    fn raw(year: Option<i32>, month: Option<i32>, day: Option<i32>, calendar: Calendar) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Returns the year, if known.
    pub fn year(&self) -> Option<i32> {
        self.year
    }
    /// Returns the month (`1..=12`), if known.
    pub fn month(&self) -> Option<i32> {
        self.month
    }
    /// Returns the day of the month, if known.
    pub fn day(&self) -> Option<i32> {
        self.day
    }
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }
    /// Returns `true` if year, month and day are all known.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }
    /// Returns `true` if the year is a leap year in this date's calendar.
    /// An unknown year is not a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.year.is_some_and(|y| calendar::is_leap_year(y, self.calendar))
    }

    /// Returns the [`DayCount`] of this date, with `1` substituted for
    /// unknown fields.
    pub fn day_count(&self) -> DayCount {
        calendar::to_day_count(
            self.year.unwrap_or(1),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
            self.calendar,
        )
    }

    /// Rebuilds a date from a day count, keeping unknown fields unknown.
    fn with_day_count(&self, date: DayCount, calendar: Calendar) -> Result<Self, DateError> {
        let (y, m, d) = calendar::from_day_count(date, calendar)?;
        Ok(Self::raw(
            self.year.and(Some(y)),
            self.month.and(Some(m)),
            self.day.and(Some(d)),
            calendar,
        ))
    }

    /// Converts the date into `calendar`.
    ///
    /// Near [`MIN_YEAR`](calendar::MIN_YEAR) or [`MAX_YEAR`](calendar::MAX_YEAR)
    /// the converted year may fall a few decades outside that range.
    pub fn to_calendar(&self, calendar: Calendar) -> Self {
        if calendar == self.calendar {
            return *self;
        }
        self.with_day_count(self.day_count(), calendar)
            .expect("calendars drift apart by far less than i32::MAX years")
    }
    /// Converts the date into the Gregorian calendar.
    pub fn to_gregorian(&self) -> Self {
        self.to_calendar(Calendar::Gregorian)
    }
    /// Converts the date into the Julian calendar.
    pub fn to_julian(&self) -> Self {
        self.to_calendar(Calendar::Julian)
    }

    /// Returns the date `days` days later (or earlier, if negative).
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::HistoricalDate;
    ///
    /// let date = HistoricalDate::julian(1600, 2, 28).unwrap();
    /// assert_eq!("1600-2-29 (Julian)", date.add_days(1).unwrap().to_string());
    /// assert_eq!("1600-3-1 (Julian)", date.add_days(2).unwrap().to_string());
    /// ```
    ///
    /// Fails if a known year would leave
    /// [`MIN_YEAR`](calendar::MIN_YEAR)`..=`[`MAX_YEAR`](calendar::MAX_YEAR).
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(*self);
        }
        let jdn = self.day_count().jdn().checked_add(days).ok_or_else(|| {
            DateError::invalid_date(format!("{self} plus {days} days out of range"))
        })?;
        let date = self.with_day_count(DayCount::from_jdn(jdn), self.calendar)?;
        if let Some(y) = date.year {
            calendar::check_year(y)?;
        }
        Ok(date)
    }

    /// Checks whether both dates denote the same day, converting `other` into
    /// this date's calendar first.
    ///
    /// A field unknown on both sides counts as equal.
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::HistoricalDate;
    ///
    /// let julian = HistoricalDate::julian(1917, 10, 25).unwrap();
    /// let gregorian = HistoricalDate::gregorian(1917, 11, 7).unwrap();
    /// assert!(julian.same_day_as(&gregorian));
    /// assert_ne!(julian, gregorian);
    /// ```
    pub fn same_day_as(&self, other: &HistoricalDate) -> bool {
        let other = other.to_calendar(self.calendar);
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }

    /// Converts into a proleptic Gregorian [`jiff::civil::Date`], with `1`
    /// substituted for unknown fields.
    ///
    /// Fails if the year is outside jiff's supported range (`-9999..=9999`).
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::HistoricalDate;
    ///
    /// let date = HistoricalDate::julian(1732, 2, 11).unwrap();
    /// assert_eq!(jiff::civil::date(1732, 2, 22), date.to_civil_date().unwrap());
    /// ```
    pub fn to_civil_date(&self) -> Result<jiff::civil::Date, DateError> {
        let (y, m, d) = calendar::from_day_count(self.day_count(), Calendar::Gregorian)?;
        let year = i16::try_from(y)
            .map_err(|_| DateError::invalid_date(format!("year {y} out of civil range")))?;
        // month and day come from `from_day_count` and always fit
        jiff::civil::Date::new(year, m as i8, d as i8)
            .map_err(|e| DateError::invalid_date(e.to_string()))
    }
}

impl fmt::Display for HistoricalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(f: &mut fmt::Formatter<'_>, v: Option<i32>) -> fmt::Result {
            match v {
                Some(v) => write!(f, "{v}"),
                None => f.write_str("??"),
            }
        }
        field(f, self.year)?;
        f.write_str("-")?;
        field(f, self.month)?;
        f.write_str("-")?;
        field(f, self.day)?;
        if self.calendar == Calendar::Julian {
            f.write_str(" (Julian)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Calendar::*;

    #[test]
    fn new_invalid() {
        for (y, m, d, cal) in [
            (1900, 2, 29, Gregorian),
            (2001, 2, 29, Julian),
            (2001, 6, 31, Julian),
            (2001, 1, 0, Gregorian),
            (2001, 0, 1, Gregorian),
        ] {
            assert!(
                matches!(
                    HistoricalDate::new(y, m, d, cal),
                    Err(DateError::InvalidDate { .. })
                ),
                "{y}-{m}-{d} {cal}"
            );
        }
        assert!(HistoricalDate::julian(1900, 2, 29).is_ok());
    }

    #[test]
    fn partial_dates() {
        for (std, (y, m, d)) in [
            ("1987-2-?? (Julian)", (Some(1987), Some(2), None)),
            ("1987-??-27 (Julian)", (Some(1987), None, Some(27))),
            ("??-??-27 (Julian)", (None, None, Some(27))),
            ("??-2-28 (Julian)", (None, Some(2), Some(28))),
        ] {
            let date = HistoricalDate::partial(y, m, d, Julian).unwrap();
            assert_eq!(std, date.to_string());
            assert!(!date.is_complete());
        }
        assert!(HistoricalDate::partial(None, Some(2), Some(29), Julian).is_err());
        assert!(HistoricalDate::partial(None, Some(2), Some(30), Julian).is_err());
        assert!(HistoricalDate::partial(Some(2000), Some(2), None, Julian).is_ok());
        assert!(HistoricalDate::partial(Some(2_000_000), None, None, Julian).is_err());
        assert!(HistoricalDate::partial(Some(2001), Some(2), Some(29), Julian).is_err());
        assert!(HistoricalDate::partial(None, None, Some(32), Julian).is_err());
        assert!(HistoricalDate::partial(None, Some(13), None, Julian).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            "1987-2-27",
            HistoricalDate::gregorian(1987, 2, 27).unwrap().to_string()
        );
        assert_eq!(
            "1987-2-14 (Julian)",
            HistoricalDate::julian(1987, 2, 14).unwrap().to_string()
        );
    }

    #[test]
    fn conversion_to_own_calendar_is_identity() {
        let gregorian = HistoricalDate::gregorian(1987, 2, 27).unwrap();
        assert_eq!(gregorian, gregorian.to_gregorian());
        let julian = HistoricalDate::julian(1987, 2, 14).unwrap();
        assert_eq!(julian, julian.to_julian());
        assert_eq!(julian.to_gregorian(), julian.to_gregorian().to_gregorian());
    }

    #[test]
    fn unknown_fields_survive_conversion() {
        let date = HistoricalDate::partial(None, Some(3), Some(15), Julian).unwrap();
        let converted = date.to_gregorian();
        assert_eq!(None, converted.year());
        // 0001-03-15 Julian is 0001-03-13 Gregorian
        assert_eq!((Some(3), Some(13)), (converted.month(), converted.day()));

        let date = HistoricalDate::partial(Some(1700), Some(3), None, Gregorian).unwrap();
        let converted = date.to_julian();
        assert_eq!(
            (Some(1700), Some(2), None),
            (converted.year(), converted.month(), converted.day())
        );
    }

    #[test]
    fn unknown_fields_survive_arithmetic() {
        let date = HistoricalDate::partial(None, Some(12), Some(31), Gregorian).unwrap();
        let next = date.add_days(1).unwrap();
        assert_eq!((None, Some(1), Some(1)), (next.year(), next.month(), next.day()));
        assert_eq!("??-1-1", next.to_string());
    }

    #[test]
    fn unknown_year_arithmetic_is_reversible() {
        for cal in [Julian, Gregorian] {
            for (m, d) in [(2, 28), (3, 1), (6, 15)] {
                let date = HistoricalDate::partial(None, Some(m), Some(d), cal).unwrap();
                for days in [1, -1, 10, -10] {
                    let back = date.add_days(days).unwrap().add_days(-days).unwrap();
                    assert_eq!(date, back, "{date} {days}");
                }
            }
        }
    }

    #[test]
    fn add_days_at_year_range_end() {
        let last = HistoricalDate::gregorian(calendar::MAX_YEAR, 12, 31).unwrap();
        assert!(matches!(last.add_days(1), Err(DateError::InvalidDate { .. })));
        assert!(last.add_days(-1).is_ok());
        let first = HistoricalDate::julian(calendar::MIN_YEAR, 1, 1).unwrap();
        assert!(matches!(first.add_days(-1), Err(DateError::InvalidDate { .. })));
        assert_eq!("-1000000-1-2 (Julian)", first.add_days(1).unwrap().to_string());
        for days in [i64::MAX, i64::MIN] {
            assert!(last.add_days(days).is_err());
            assert!(first.add_days(days).is_err());
        }
        assert!(HistoricalDate::gregorian(i32::MAX, 12, 31).is_err());
        assert!(matches!(
            HistoricalDate::from_day_count(DayCount::from_jdn(i64::MAX), Gregorian),
            Err(DateError::InvalidDate { .. })
        ));
    }

    #[test]
    fn conversion_at_year_range_end() {
        let last = HistoricalDate::julian(calendar::MAX_YEAR, 12, 31).unwrap();
        let converted = last.to_gregorian();
        assert_eq!("1000021-12-7", converted.to_string());
        assert_eq!(last, converted.to_julian());
        assert!(converted.add_days(1).is_err());

        let first = HistoricalDate::gregorian(calendar::MIN_YEAR, 1, 1).unwrap();
        let converted = first.to_julian();
        assert!(converted.year().unwrap() < calendar::MIN_YEAR);
        assert_eq!(first, converted.to_gregorian());
    }

    #[test]
    fn add_zero_days() {
        let date = HistoricalDate::partial(Some(1600), None, None, Julian).unwrap();
        assert_eq!(Ok(date), date.add_days(0));
        let date = HistoricalDate::gregorian(1600, 1, 1).unwrap();
        assert_eq!(Ok(date), date.add_days(0));
    }

    #[test]
    fn add_days_across_leap_day() {
        for (std, (y, m, d, cal, days)) in [
            ("1700-2-29 (Julian)", (1700, 2, 28, Julian, 1)),
            ("1700-3-1", (1700, 2, 28, Gregorian, 1)),
            ("1699-12-31", (1700, 1, 1, Gregorian, -1)),
            ("2000-3-1", (2000, 2, 1, Gregorian, 29)),
        ] {
            let date = HistoricalDate::new(y, m, d, cal).unwrap();
            assert_eq!(std, date.add_days(days).unwrap().to_string());
        }
    }

    #[test]
    fn same_day() {
        let date = HistoricalDate::gregorian(1600, 1, 1).unwrap();
        assert!(date.same_day_as(&date.to_julian()));
        assert!(date.to_julian().same_day_as(&date));
        assert!(!date.same_day_as(&date.add_days(1).unwrap().to_julian()));

        let a = HistoricalDate::partial(None, Some(5), Some(1), Gregorian).unwrap();
        let b = HistoricalDate::partial(None, Some(5), Some(1), Gregorian).unwrap();
        let c = HistoricalDate::partial(Some(1), Some(5), Some(1), Gregorian).unwrap();
        assert!(a.same_day_as(&b));
        assert!(!a.same_day_as(&c));
    }

    #[test]
    fn leap_year_flag() {
        assert!(HistoricalDate::julian(1900, 1, 1).unwrap().is_leap_year());
        assert!(!HistoricalDate::gregorian(1900, 1, 1).unwrap().is_leap_year());
        let unknown = HistoricalDate::partial(None, Some(1), Some(1), Julian).unwrap();
        assert!(!unknown.is_leap_year());
    }

    #[test]
    fn julian_leap_day_before_christ_converts_to_march() {
        let date = HistoricalDate::julian(-1, 2, 29).unwrap();
        assert!(date.is_leap_year());
        let back = date.to_gregorian().to_julian();
        assert_eq!("-1-3-1 (Julian)", back.to_string());
        assert!(back.same_day_as(&date));
        let moved = date.add_days(1).unwrap().add_days(-1).unwrap();
        assert_eq!("-1-3-1 (Julian)", moved.to_string());

        let date = HistoricalDate::julian(-4, 2, 29).unwrap();
        assert_eq!(date, date.to_gregorian().to_julian());
    }

    #[test]
    fn civil_date() {
        let date = HistoricalDate::julian(1582, 10, 5).unwrap();
        assert_eq!(jiff::civil::date(1582, 10, 15), date.to_civil_date().unwrap());
        let date = HistoricalDate::partial(Some(2000), None, None, Gregorian).unwrap();
        assert_eq!(jiff::civil::date(2000, 1, 1), date.to_civil_date().unwrap());
        let date = HistoricalDate::gregorian(12000, 1, 1).unwrap();
        assert!(date.to_civil_date().is_err());
    }

    #[test]
    fn from_text() {
        let date = HistoricalDate::from_text("August 27, 1792", Gregorian).unwrap();
        assert_eq!("1792-8-27", date.to_string());
        assert!(matches!(
            HistoricalDate::from_text("not a date", Gregorian),
            Err(DateError::InvalidDate { .. })
        ));
        assert!(matches!(
            HistoricalDate::from_text("February 30, 1792", Gregorian),
            Err(DateError::InvalidDate { .. })
        ));
    }
}
