//! Fuzzy parsing of written-out dates.
//!
//! Only a fixed set of formats is understood, each matched against the whole
//! input, e.g.:
//!
//! - `August 27, 1792`, `Aug. 27th 1792`
//! - `XXVI Dec. M DCXCII`, `ad 26 Decembris anno 1692`
//! - `le 27 d'août 1792`
//! - `a 20 de septiembre del año de 1792`
//!
//! Day and year may be written in Arabic or Roman numerals.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::DateError;
use crate::roman::numeral;

const MONTH_PATTERNS: [&str; 12] = [
    r"([ij]an(uar(y|ii?)|)|janvier)",
    r"(feb(ruar[yi]?|r|)|fevrier)",
    r"(march|mars|marti[ia]s?|mart?)",
    r"(a[pv]ril|aprilis|apr)",
    r"(ma[ijy]|maji)",
    r"[ij]ui?n(ias|ii|e|)",
    r"([ij]uillet|[ij]ul[iay]s?)",
    r"(se[cxk]t?|august(us|i|)|ao[uû]s?t|aug)",
    r"sep(ti?emb(er|re|r|)|t|)",
    r"o[ck]t(ob(er|re|r|)|)",
    r"nov(emb(er|re|ris|r|)|)",
    r"de[ck](emb(er|re|ris|r|)|)",
];

/// Arabic digits, or Roman numeral letters possibly separated by single spaces.
const NUMBER_PATTERN: &str = r"([MDCLXVI]( ?[MDCLXVI])*|[0-9]+)";

/// Tried in order; the first one matching decides the result.
const DATE_FORMATS: [&str; 5] = [
    r"^(?P<month>{month}) (?P<day>{number})[.,] (?P<year>{number})\.?$",
    r"^(?P<month>{month}) (?P<day>{number})(st|nd|rd|th)[,.]? (?P<year>{number})\.?$",
    r"^(ad|) ?(?P<day>{number})[.,]? ?(?P<month>{month})[. ](ao\.?|a\.?c\.?|anno|an\.? christi|an\.?|a\.?|) ?(?P<year>{number})\.?$",
    r"^(le|ce|) ?(?P<day>{number})\.? (de |d['’]|)(?P<month>{month})(,? l['’]an|\.?) (?P<year>{number})\.?$",
    r"^[aàá]? ?(?P<day>{number})\.? de (?P<month>{month}) del? a[nñ\x{0304}]*o de (?P<year>{number})\.?$",
];

static MONTHS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MONTH_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&format!(r"(?i)^{pattern}\.?$")).expect("valid month pattern"))
        .collect()
});

static FORMATS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let any_month = format!(r"({})\.?", MONTH_PATTERNS.join("|"));
    DATE_FORMATS
        .iter()
        .map(|format| {
            let pattern = format
                .replace("{month}", &any_month)
                .replace("{number}", NUMBER_PATTERN);
            Regex::new(&format!("(?i){pattern}")).expect("valid date format")
        })
        .collect()
});

/// Day, month and year read from text.
///
/// The fields are not checked against each other: `February 30, 1792` parses
/// fine and only fails once turned into a
/// [`HistoricalDate`](crate::HistoricalDate).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ParsedDateFields {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// Resolves a month name (English, French, Spanish or Latin, possibly
/// abbreviated) to `1..=12`.
///
/// # Example
///
/// ```
/// use fasti::parse::parse_month;
///
/// assert_eq!(Some(8), parse_month("Sext."));
/// assert_eq!(Some(12), parse_month("Dec."));
/// assert_eq!(None, parse_month("Thermidor"));
/// ```
pub fn parse_month(text: &str) -> Option<i32> {
    MONTHS
        .iter()
        .position(|re| re.is_match(text))
        .map(|i| i as i32 + 1)
}

/// Reads a date from `text`.
///
/// Returns `Ok(None)` when `text` is in none of the known formats, and an
/// error when it is but holds a malformed numeral.
///
/// # Example
///
/// ```
/// use fasti::{ParsedDateFields, parse_date_string};
///
/// assert_eq!(
///     Some(ParsedDateFields { day: 26, month: 12, year: 1692 }),
///     parse_date_string("XXVI Dec. M DCXCII").unwrap(),
/// );
/// assert_eq!(None, parse_date_string("not a date").unwrap());
/// ```
pub fn parse_date_string(text: &str) -> Result<Option<ParsedDateFields>, DateError> {
    let Some((index, caps)) = FORMATS
        .iter()
        .enumerate()
        .find_map(|(i, re)| re.captures(text).map(|caps| (i, caps)))
    else {
        return Ok(None);
    };
    trace!(index, text, "date format matched");

    let Some(month) = parse_month(&caps["month"]) else {
        debug!(month = &caps["month"], text, "unrecognized month");
        return Ok(None);
    };
    let day = to_i32(numeral::parse_number(&caps["day"])?)?;
    let year = to_i32(numeral::parse_number(&caps["year"])?)?;
    Ok(Some(ParsedDateFields { day, month, year }))
}

fn to_i32(n: u32) -> Result<i32, DateError> {
    i32::try_from(n).map_err(|_| DateError::invalid_date(format!("{n} out of range")))
}
