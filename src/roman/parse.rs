//! Reading Roman dates from loosely written text.
//!
//! Each part of a date (designator, marker, month) is matched against a list
//! of spellings. When several spellings match, the one consuming the most
//! text wins, ties going to the earlier entry.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{DayDesignator, Marker, numeral};
use crate::error::DateError;

#[derive(Debug, Copy, Clone)]
enum Designator {
    AnteDiem,
    Pridie,
    Postridie,
}

static DESIGNATORS: LazyLock<Vec<(Regex, Designator)>> = LazyLock::new(|| {
    use Designator::*;
    table(&[
        (r"a\.?\s*d\.?\s*([mdclxvi]+)\.?", AnteDiem),
        (r"ante\s+diem\s+([mdclxvi]+)\.?", AnteDiem),
        (r"pr\.?", Pridie),
        (r"prid\.?", Pridie),
        (r"pridie", Pridie),
        (r"postr\.?", Postridie),
        (r"postrid\.?", Postridie),
        (r"postridie", Postridie),
    ])
});

static MARKERS: LazyLock<Vec<(Regex, Marker)>> = LazyLock::new(|| {
    use Marker::*;
    table(&[
        (r"kal\.?", Kalends),
        (r"cal\.?", Kalends),
        (r"[kc]alend(?:as|is|ae)\.?", Kalends),
        (r"non\.?", Nones),
        (r"non(?:as|is|ae)\.?", Nones),
        (r"e?id\.?", Ides),
        (r"e?id(?:us|ibus)\.?", Ides),
    ])
});

static MONTHS: LazyLock<Vec<(Regex, u8)>> = LazyLock::new(|| {
    table(&[
        (r"[ij]an\w*\.?", 1),
        (r"feb\w*\.?", 2),
        (r"mar\w*\.?", 3),
        (r"apr\w*\.?", 4),
        (r"ma[ij]\w*\.?", 5),
        (r"[ij]un\w*\.?", 6),
        (r"[ij]ul\w*\.?", 7),
        (r"sext\w*\.?", 8),
        (r"aug\w*\.?", 8),
        (r"sep\w*\.?", 9),
        (r"o[ck]t\w*\.?", 10),
        (r"nov\w*\.?", 11),
        (r"de[ck]\w*\.?", 12),
    ])
});

fn table<T: Copy>(entries: &[(&str, T)]) -> Vec<(Regex, T)> {
    entries
        .iter()
        .map(|&(pattern, value)| {
            let re = Regex::new(&format!("(?i)^(?:{pattern})")).expect("valid spelling pattern");
            (re, value)
        })
        .collect()
}

/// Finds the candidate matching the longest prefix of `text`.
fn longest<'t, T: Copy>(candidates: &[(Regex, T)], text: &'t str) -> Option<(T, Captures<'t>)> {
    let mut best: Option<(T, Captures<'t>)> = None;
    for (pattern, value) in candidates {
        if let Some(caps) = pattern.captures(text)
            && best.as_ref().is_none_or(|(_, b)| caps[0].len() > b[0].len())
        {
            best = Some((*value, caps));
        }
    }
    best
}

/// Splits `text` into designator, marker, month (`1..=12`) and year.
pub(super) fn read(text: &str) -> Result<(DayDesignator, Marker, u8, u32), DateError> {
    let missing = |what: &str| DateError::invalid_date(format!("no {what} in Roman date {text:?}"));
    let mut rest = text.trim_start();

    let designator = match longest(&DESIGNATORS, rest) {
        None => DayDesignator::Marked,
        Some((kind, caps)) => {
            rest = rest[caps[0].len()..].trim_start();
            match kind {
                Designator::Pridie => DayDesignator::Pridie,
                Designator::Postridie => DayDesignator::Postridie,
                Designator::AnteDiem => {
                    let n = numeral::parse_number(&caps[1])?;
                    if !(3..=19).contains(&n) {
                        return Err(DateError::invalid_date(format!(
                            "a.d. count {n} not in 3..=19"
                        )));
                    }
                    DayDesignator::AnteDiem(n as u8)
                }
            }
        }
    };

    let (marker, caps) = longest(&MARKERS, rest).ok_or_else(|| missing("Kalends, Nones or Ides"))?;
    rest = rest[caps[0].len()..].trim_start();

    let (month, caps) = longest(&MONTHS, rest).ok_or_else(|| missing("month"))?;
    rest = &rest[caps[0].len()..];

    let year: String = rest.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if year.is_empty() {
        return Err(missing("year"));
    }
    let year = numeral::parse_number(&year)?;

    Ok((designator, marker, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use DayDesignator::*;
    use Marker::*;

    #[test]
    fn spellings() {
        for (std, text) in [
            ((AnteDiem(15), Kalends, 4, 1634), "a.d.XV. Kal. Apr. MDCXXXIV"),
            ((AnteDiem(15), Kalends, 4, 1634), "ad.xv.cal. apr  MDCXXXIV"),
            ((Pridie, Kalends, 3, 1600), "prid Kal. mar MDC"),
            ((AnteDiem(4), Ides, 12, 1815), "a.d. IV. eid. dec md cccxv "),
            ((Postridie, Nones, 10, 1315), "postr nonis. okt m cccxv "),
            ((Pridie, Kalends, 11, 1815), "pridie kalendas nov mdccc xv "),
            ((Marked, Nones, 6, 2018), "Non. Jun. MMXVIII"),
            ((Marked, Ides, 3, 44), "Idibus Martiis XLIV"),
            ((AnteDiem(3), Kalends, 3, 1987), "ante diem III Kalendas Martias 1987"),
        ] {
            assert_eq!(Ok(std), read(text), "{text:?}");
        }
    }

    #[test]
    fn longest_spelling_wins() {
        let (kind, caps) = longest(&DESIGNATORS, "pridie kal").unwrap();
        assert!(matches!(kind, Designator::Pridie));
        assert_eq!("pridie", &caps[0]);
        let (marker, caps) = longest(&MARKERS, "kalendas nov").unwrap();
        assert_eq!(Kalends, marker);
        assert_eq!("kalendas", &caps[0]);
        let (marker, caps) = longest(&MARKERS, "Kal. nov").unwrap();
        assert_eq!(Kalends, marker);
        assert_eq!("Kal.", &caps[0]);
    }

    #[test]
    fn missing_parts() {
        for text in ["", "a.d.III.", "a.d.III. Kal.", "a.d.III. Kal. Mart.", "Kal. Mart. ..."] {
            assert!(
                matches!(read(text), Err(DateError::InvalidDate { .. })),
                "{text:?}"
            );
        }
        assert!(matches!(
            read("a.d.XX. Kal. Mart. MDC"),
            Err(DateError::InvalidDate { .. })
        ));
        assert!(matches!(
            read("Kal. Mart. MDCIIII"),
            Err(DateError::InvalidRomanNumeral { .. })
        ));
    }
}
