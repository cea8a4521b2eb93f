//! Latin names used in Roman dates.

use super::{DayDesignator, Marker};
use crate::roman::numeral;

/// Canonical month abbreviations, January first. Used in the genitive after
/// the marker, e.g. `Kal. Mart.`.
pub const MONTHS: [&str; 12] = [
    "Ian.", "Feb.", "Mart.", "Apr.", "Mai.", "Jun.", "Jul.", "Sext.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

/// Abbreviation of `month` (`1..=12`).
///
/// # Example
///
/// ```
/// use fasti::roman::fmt;
///
/// assert_eq!("Sext.", fmt::month(8));
/// ```
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn month(month: u8) -> &'static str {
    match month {
        1..=12 => MONTHS[month as usize - 1],
        _ => panic!("month {} not in 1..=12", month),
    }
}

/// Abbreviation of a marker: `Kal.`, `Non.` or `Id.`.
pub fn marker(marker: Marker) -> &'static str {
    match marker {
        Marker::Kalends => "Kal.",
        Marker::Nones => "Non.",
        Marker::Ides => "Id.",
    }
}

/// Abbreviated day designator, empty for the marked day itself.
///
/// # Example
///
/// ```
/// use fasti::roman::{DayDesignator, fmt};
///
/// assert_eq!("a.d.XIV.", fmt::designator(DayDesignator::AnteDiem(14)));
/// assert_eq!("pr.", fmt::designator(DayDesignator::Pridie));
/// assert_eq!("", fmt::designator(DayDesignator::Marked));
/// ```
pub fn designator(designator: DayDesignator) -> String {
    match designator {
        DayDesignator::Marked => String::new(),
        DayDesignator::Pridie => "pr.".to_owned(),
        DayDesignator::Postridie => "postr.".to_owned(),
        DayDesignator::AnteDiem(n) => {
            format!("a.d.{}.", numeral::encode(n.into()).unwrap_or_default())
        }
    }
}
