//! Date normalization
//!
//! Coerces heterogeneous date inputs into [`CanonicalDate`] values. Text
//! inputs must be `YYYY-MM-DD`; already-canonical values pass through via
//! `From<NaiveDate>` on the type itself.

use crate::app::models::CanonicalDate;
use crate::errors::FindResult;

/// Parse a sequence of `YYYY-MM-DD` strings, preserving input order
///
/// # Errors
///
/// Returns [`FindError::DateFormat`](crate::errors::FindError::DateFormat)
/// for the first input that is not a valid calendar date in the accepted
/// format.
pub fn normalize_dates<I, S>(inputs: I) -> FindResult<Vec<CanonicalDate>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs.into_iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FindError;

    #[test]
    fn test_normalize_preserves_order() {
        let dates = normalize_dates(["2015-04-01", "2015-03-31"]).unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].iso(), "2015-04-01");
        assert_eq!(dates[1].iso(), "2015-03-31");
    }

    #[test]
    fn test_normalize_fails_on_first_bad_input() {
        let result = normalize_dates(["2015-03-31", "not-a-date", "2015-04-01"]);
        match result.unwrap_err() {
            FindError::DateFormat { input } => assert_eq!(input, "not-a-date"),
            other => panic!("Expected DateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        let dates = normalize_dates(Vec::<String>::new()).unwrap();
        assert!(dates.is_empty());
    }
}
