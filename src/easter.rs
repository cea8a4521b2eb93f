//! Computus: the date of Easter and the feasts depending on it.
//!
//! Uses Gauss's algorithm, for either the Julian or the Gregorian calendar.

use tracing::debug;

use crate::calendar::{self, Calendar};
use crate::date::HistoricalDate;
use crate::day_count::DayCount;
use crate::error::DateError;
use crate::roman::numeral;

const DOMINICAL_LETTERS: [&str; 7] = ["F", "E", "D", "C", "B", "A", "G"];

/// Epact labels, indexed by epact.
const EPACTS: [&str; 31] = [
    "XXIII", "XXII", "XXI", "XX", "XIX", "XVIII", "XVII", "XVI", "XV", "XIV", "XIII", "XII", "XI",
    "X", "IX", "VIII", "VII", "VI", "V", "IV", "III", "II", "I", " * ", "XXIX", "XXVIII", "XXVII",
    "XXVI", "XXV", "XXIV", "25",
];

/// Easter Sunday of a year, with the movable feasts and computus values
/// belonging to it.
///
/// All dates are in the calendar Easter was computed for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Easter {
    pub sunday: HistoricalDate,
    /// Ninth Sunday before Easter.
    pub septuagesima: HistoricalDate,
    pub ash_wednesday: HistoricalDate,
    pub ascension: HistoricalDate,
    /// Also called Whitsunday.
    pub pentecost: HistoricalDate,
    /// First Sunday after Pentecost.
    pub trinity_sunday: HistoricalDate,
    /// Thursday after Trinity Sunday.
    pub corpus_christi: HistoricalDate,
    /// First Sunday of Advent, the fourth Sunday before Christmas.
    pub advent_sunday: HistoricalDate,
    /// Epact label, a Roman numeral except for `" * "` (0) and `"25"`.
    pub epact: &'static str,
    /// Position of the year in the 19-year lunar cycle, `1..=19`.
    pub golden_number: i32,
    /// Weekday of March 24, `1..=7`.
    pub concurrent: i32,
    pub dominical_letter: &'static str,
}

impl Easter {
    /// Computes Easter for a year written in Arabic or Roman numerals.
    ///
    /// # Example
    ///
    /// ```
    /// use fasti::{Calendar, Easter};
    ///
    /// let easter = Easter::from_text("MMXII", Calendar::Gregorian).unwrap();
    /// assert_eq!("2012-4-8", easter.sunday.to_string());
    /// ```
    pub fn from_text(year: &str, calendar: Calendar) -> Result<Self, DateError> {
        let year = numeral::parse_number(year)?;
        let year = i32::try_from(year)
            .map_err(|_| DateError::invalid_date(format!("year {year} out of range")))?;
        calculate_easter(year, calendar)
    }
}

/// Values of Gauss's algorithm for one year.
struct Computus {
    /// Days from March 22 to Easter Sunday.
    march_offset: i64,
    epact: usize,
    golden_number: i32,
    concurrent: i32,
}

fn computus(year: i32, calendar: Calendar) -> Computus {
    let year = year as i64;
    let (m, q) = match calendar {
        Calendar::Julian => (15, 6),
        Calendar::Gregorian => {
            let h1 = year.div_euclid(100);
            let h2 = year.div_euclid(400);
            (
                15 + h1 - h2 - (8 * h1 + 13).div_euclid(25),
                4 + h1 - h2,
            )
        }
    };
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let d = (19 * a + m).rem_euclid(30);
    let e = (2 * b + 4 * c + 6 * d + q).rem_euclid(7);

    let mut g = d + e;
    if g == 35 {
        g = 28;
    }
    if d == 28 && e == 6 && a > 10 {
        g = 27;
    }

    let mut epact = d;
    if epact == 28 && a > 10 {
        epact = 30;
    }
    if calendar == Calendar::Julian {
        epact = (epact + 8) % 30;
    }

    Computus {
        march_offset: g,
        epact: epact as usize,
        golden_number: a as i32 + 1,
        concurrent: (2 - (2 * b + 4 * c + q)).rem_euclid(7) as i32 + 1,
    }
}

/// First Sunday of Advent: the Sunday falling 22 to 28 days before Christmas.
fn advent_sunday(year: i32, calendar: Calendar) -> DayCount {
    let christmas = calendar::to_day_count(year, 12, 25, calendar);
    christmas - (christmas.jdn().rem_euclid(7) + 22)
}

/// Computes Easter Sunday of `year` in `calendar`.
///
/// # Example
///
/// ```
/// use fasti::{Calendar, calculate_easter};
///
/// let easter = calculate_easter(2012, Calendar::Gregorian).unwrap();
/// assert_eq!("2012-4-8", easter.sunday.to_string());
/// assert_eq!("2012-2-5", easter.septuagesima.to_string());
///
/// let easter = calculate_easter(2012, Calendar::Julian).unwrap();
/// assert_eq!("2012-1-30 (Julian)", easter.septuagesima.to_string());
/// ```
///
/// Fails if `year` is outside
/// [`MIN_YEAR`](calendar::MIN_YEAR)`..=`[`MAX_YEAR`](calendar::MAX_YEAR).
pub fn calculate_easter(year: i32, calendar: Calendar) -> Result<Easter, DateError> {
    calendar::check_year(year)?;
    let c = computus(year, calendar);
    debug!(year, %calendar, march_offset = c.march_offset, "computed Easter");

    let sunday = calendar::to_day_count(year, 3, 22, calendar) + c.march_offset;
    let date = |offset: i64| HistoricalDate::from_day_count(sunday + offset, calendar);
    Ok(Easter {
        sunday: date(0)?,
        septuagesima: date(-63)?,
        ash_wednesday: date(-46)?,
        ascension: date(39)?,
        pentecost: date(49)?,
        trinity_sunday: date(56)?,
        corpus_christi: date(60)?,
        advent_sunday: HistoricalDate::from_day_count(advent_sunday(year, calendar), calendar)?,
        epact: EPACTS[c.epact],
        golden_number: c.golden_number,
        concurrent: c.concurrent,
        dominical_letter: DOMINICAL_LETTERS[c.concurrent as usize - 1],
    })
}
