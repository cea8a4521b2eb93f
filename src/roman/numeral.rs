//! Roman numerals, `0..=9999`.
//!
//! Numerals use standard subtractive notation; thousands are written as
//! repeated `M`.

use crate::error::DateError;

const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const THOUSANDS: [&str; 10] = [
    "",
    "M",
    "MM",
    "MMM",
    "MMMM",
    "MMMMM",
    "MMMMMM",
    "MMMMMMM",
    "MMMMMMMM",
    "MMMMMMMMM",
];

/// Digit places from the most significant, with their value.
const PLACES: [(&[&str; 10], u32); 4] =
    [(&THOUSANDS, 1000), (&HUNDREDS, 100), (&TENS, 10), (&UNITS, 1)];

/// Writes `n` as a Roman numeral.
///
/// Returns `None` if `n` is greater than 9999. Zero is the empty string.
///
/// # Example
///
/// ```
/// use fasti::roman::numeral;
///
/// assert_eq!(Some("MCMLXXXVII".to_owned()), numeral::encode(1987));
/// ```
pub fn encode(n: u32) -> Option<String> {
    if n > 9999 {
        return None;
    }
    Some(
        PLACES
            .iter()
            .map(|&(table, value)| table[(n / value % 10) as usize])
            .collect(),
    )
}

/// Reads a Roman numeral written in upper case.
///
/// Each digit place is read once, from thousands down to units, taking the
/// longest matching group. Anything left over makes the numeral invalid, so
/// non-standard forms like `IIII` are rejected.
///
/// # Example
///
/// ```
/// use fasti::roman::numeral;
///
/// assert_eq!(Ok(1692), numeral::decode("MDCXCII"));
/// assert!(numeral::decode("IIII").is_err());
/// ```
pub fn decode(numeral: &str) -> Result<u32, DateError> {
    let invalid = || DateError::InvalidRomanNumeral {
        numeral: numeral.to_owned(),
    };
    if numeral.is_empty() {
        return Err(invalid());
    }
    let mut rest = numeral;
    let mut res = 0;
    for (table, value) in PLACES {
        // the longest group wins; "" always matches
        let (digit, group) = table
            .iter()
            .enumerate()
            .filter(|(_, group)| rest.starts_with(*group))
            .max_by_key(|(_, group)| group.len())
            .unwrap_or((0, &""));
        res += digit as u32 * value;
        rest = &rest[group.len()..];
    }
    if !rest.is_empty() {
        return Err(invalid());
    }
    Ok(res)
}

/// Reads a number written either in Arabic digits or as a Roman numeral.
///
/// Roman numerals may be in any case and contain spaces, as in `m dcxcii`.
///
/// # Example
///
/// ```
/// use fasti::roman::numeral;
///
/// assert_eq!(Ok(1692), numeral::parse_number("M DCXCII"));
/// assert_eq!(Ok(1692), numeral::parse_number("1692"));
/// ```
pub fn parse_number(text: &str) -> Result<u32, DateError> {
    let text = text.trim();
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse()
            .map_err(|_| DateError::invalid_date(format!("number {text} is too large")));
    }
    let numeral: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    decode(&numeral)
}
