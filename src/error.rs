//! Error types.

/// Error type for all fallible operations in this crate.
///
/// A fuzzy parse that simply finds nothing is not an error, see
/// [`parse_date_string`](crate::parse_date_string).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The date does not exist in its calendar, or cannot be expressed in the
    /// requested notation.
    #[error("invalid date: {reason}")]
    InvalidDate {
        /// What is wrong with the date.
        reason: String,
    },

    /// A Roman numeral was empty or not fully consumed by the decoder.
    #[error("invalid Roman numeral: {numeral:?}")]
    InvalidRomanNumeral {
        /// The rejected input.
        numeral: String,
    },
}

impl DateError {
    pub(crate) fn invalid_date(reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DateError::invalid_date("month 2 has no day 30");
        assert_eq!(err.to_string(), "invalid date: month 2 has no day 30");
        let err = DateError::InvalidRomanNumeral {
            numeral: "IIII".into(),
        };
        assert_eq!(err.to_string(), "invalid Roman numeral: \"IIII\"");
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
