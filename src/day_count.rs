//! Calendar-independant day count.

use std::ops::{Add, Sub};

/// A calendar-independant date, counted in days.
///
/// The count is the Julian day number (JDN): day 0 is January 1, 4713 BC,
/// proleptic Julian calendar. Every calendar in this crate converts through
/// this value, see [`to_day_count`](crate::calendar::to_day_count) and
/// [`from_day_count`](crate::calendar::from_day_count).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DayCount {
    jdn: i64,
}

impl DayCount {
    /// Creates a `DayCount` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i64) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i64 {
        self.jdn
    }
    /// Returns the astronomical Julian date at midnight starting this day,
    /// i.e. the JDN minus half a day.
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::DayCount;
    ///
    /// assert_eq!(2451544.5, DayCount::from_jdn(2451545).julian_date());
    /// ```
    pub fn julian_date(&self) -> f64 {
        self.jdn as f64 - 0.5
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::DayCount;
    ///
    /// assert_eq!(6, DayCount::from_jdn(2451545).day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn.rem_euclid(7) + 1) as i32
    }
}

impl Add<i64> for DayCount {
    type Output = DayCount;
    fn add(self, rhs: i64) -> Self::Output {
        DayCount::from_jdn(self.jdn + rhs)
    }
}
impl Sub<i64> for DayCount {
    type Output = DayCount;
    fn sub(self, rhs: i64) -> Self::Output {
        DayCount::from_jdn(self.jdn - rhs)
    }
}
impl Sub<DayCount> for DayCount {
    type Output = i64;
    fn sub(self, rhs: DayCount) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = DayCount::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn arithmetic() {
        let date = DayCount::from_jdn(2440588);
        assert_eq!(2440598, (date + 10).jdn());
        assert_eq!(2440578, (date - 10).jdn());
        assert_eq!(2440578, (date + -10).jdn());
        assert_eq!(10, (date + 10) - date);
        assert_eq!(date, date + 0);
    }

    #[test]
    fn to_day_of_week() {
        for (std, jdn) in [(4, 2440588), (3, 2459466), (1, 0), (7, -1)] {
            assert_eq!(std, DayCount::from_jdn(jdn).day_of_week(), "{jdn}");
        }
    }
}
