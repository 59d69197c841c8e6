//! Label-based contact filtering.
//!
//! Parses the `labels`, `match`, and `emails_only` query parameters of the
//! contact listing into a [`LabelFilter`], and defines the match semantics the
//! store's SQL must agree with:
//!
//! - no names requested: every contact matches
//! - [`MatchMode::Any`]: the contact holds at least one requested name
//! - [`MatchMode::All`]: the contact holds every requested name (extra labels
//!   are allowed)
//!
//! Names are compared exactly (case-sensitive).

use std::collections::HashSet;

use crate::error::CoreError;

/// Separator between names in the `labels` query parameter.
pub const LABEL_SEPARATOR: char = ',';

/// Values of `emails_only` (case-insensitive) that enable email-only output.
const TRUTHY_VALUES: &[&str] = &["1", "true", "yes"];

/// AND/OR logic for combining requested label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// `match=or`: at least one requested name.
    #[default]
    Any,
    /// `match=and`: every requested name.
    All,
}

impl MatchMode {
    /// Parse the `match` query parameter. Absent or blank means [`MatchMode::Any`].
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        match raw.to_ascii_lowercase().as_str() {
            "or" => Ok(Self::Any),
            "and" => Ok(Self::All),
            _ => Err(CoreError::Validation(
                "match must be 'and' or 'or'".to_string(),
            )),
        }
    }
}

/// Split the `labels` query parameter into distinct, trimmed names.
///
/// An absent or empty parameter yields an empty list (no filtering). A
/// non-empty parameter that contains only separators and whitespace is a
/// validation error. Duplicates keep their first position.
pub fn parse_label_names(raw: Option<&str>) -> Result<Vec<String>, CoreError> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Ok(Vec::new()),
    };

    let mut seen = HashSet::new();
    let names: Vec<String> = raw
        .split(LABEL_SEPARATOR)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(*n))
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(CoreError::Validation(
            "valid label names should be separated by ','".to_string(),
        ));
    }
    Ok(names)
}

/// Interpret a boolean-ish query flag such as `emails_only`.
pub fn is_truthy(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| TRUTHY_VALUES.contains(&v.as_str()))
}

/// A validated label filter for the contact listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    /// Distinct requested label names, in request order.
    pub names: Vec<String>,
    pub mode: MatchMode,
}

impl LabelFilter {
    /// Build a filter from the raw `labels` and `match` query parameters.
    pub fn from_params(labels: Option<&str>, mode: Option<&str>) -> Result<Self, CoreError> {
        let mode = MatchMode::parse(mode)?;
        let names = parse_label_names(labels)?;
        Ok(Self { names, mode })
    }

    /// `true` when no label names were requested.
    pub fn is_unfiltered(&self) -> bool {
        self.names.is_empty()
    }

    /// Decide whether a contact holding the given label names qualifies.
    pub fn matches<'a>(&self, held: impl IntoIterator<Item = &'a str>) -> bool {
        if self.is_unfiltered() {
            return true;
        }
        let held: HashSet<&str> = held.into_iter().collect();
        match self.mode {
            MatchMode::Any => self.names.iter().any(|n| held.contains(n.as_str())),
            MatchMode::All => self.names.iter().all(|n| held.contains(n.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn filter(labels: &str, mode: &str) -> LabelFilter {
        LabelFilter::from_params(Some(labels), Some(mode)).unwrap()
    }

    // -- MatchMode::parse ---------------------------------------------------

    #[test]
    fn match_mode_defaults_to_any() {
        assert_eq!(MatchMode::parse(None).unwrap(), MatchMode::Any);
        assert_eq!(MatchMode::parse(Some("")).unwrap(), MatchMode::Any);
    }

    #[test]
    fn match_mode_is_case_insensitive() {
        assert_eq!(MatchMode::parse(Some("AND")).unwrap(), MatchMode::All);
        assert_eq!(MatchMode::parse(Some("Or")).unwrap(), MatchMode::Any);
    }

    #[test]
    fn match_mode_rejects_unknown_value() {
        assert_matches!(
            MatchMode::parse(Some("xor")),
            Err(CoreError::Validation(msg)) if msg == "match must be 'and' or 'or'"
        );
    }

    // -- parse_label_names --------------------------------------------------

    #[test]
    fn label_names_absent_or_empty_means_no_filter() {
        assert!(parse_label_names(None).unwrap().is_empty());
        assert!(parse_label_names(Some("")).unwrap().is_empty());
    }

    #[test]
    fn label_names_are_trimmed_and_empty_tokens_dropped() {
        assert_eq!(
            parse_label_names(Some(" friends , ,work,")).unwrap(),
            vec!["friends", "work"]
        );
    }

    #[test]
    fn label_names_are_deduplicated_in_order() {
        assert_eq!(
            parse_label_names(Some("work,friends,work")).unwrap(),
            vec!["work", "friends"]
        );
    }

    #[test]
    fn label_names_only_separators_is_rejected() {
        assert_matches!(parse_label_names(Some(" , ,")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn label_names_keep_case() {
        assert_eq!(parse_label_names(Some("Work")).unwrap(), vec!["Work"]);
    }

    // -- is_truthy ----------------------------------------------------------

    #[test]
    fn truthy_values() {
        for v in ["1", "true", "TRUE", "yes", "Yes"] {
            assert!(is_truthy(Some(v)), "{v} should be truthy");
        }
    }

    #[test]
    fn falsy_values() {
        for v in ["0", "false", "no", "", "on"] {
            assert!(!is_truthy(Some(v)), "{v} should be falsy");
        }
        assert!(!is_truthy(None));
    }

    // -- LabelFilter::matches -----------------------------------------------

    #[test]
    fn unfiltered_matches_everything() {
        let f = LabelFilter::from_params(None, None).unwrap();
        assert!(f.is_unfiltered());
        assert!(f.matches([]));
        assert!(f.matches(["friends"]));
    }

    #[test]
    fn any_requires_intersection() {
        let f = filter("friends,work", "or");
        assert!(f.matches(["friends"]));
        assert!(f.matches(["work", "bff"]));
        assert!(f.matches(["friends", "work"]));
        assert!(!f.matches(["bff"]));
        assert!(!f.matches([]));
    }

    #[test]
    fn all_requires_subset() {
        let f = filter("bff,work", "and");
        assert!(f.matches(["work", "bff"]));
        assert!(f.matches(["work", "bff", "friends"]));
        assert!(!f.matches(["work"]));
        assert!(!f.matches(["friends", "work"]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let f = filter("Friends", "or");
        assert!(!f.matches(["friends"]));
    }

    #[test]
    fn scenario_from_contact_listing() {
        let c1 = vec!["friends"];
        let c2 = vec!["work", "bff"];
        let c3 = vec!["friends", "work"];
        let c4: Vec<&str> = vec![];
        let contacts = [&c1, &c2, &c3, &c4];

        let hits = |f: &LabelFilter| -> Vec<usize> {
            contacts
                .iter()
                .enumerate()
                .filter(|(_, labels)| f.matches(labels.iter().copied()))
                .map(|(i, _)| i + 1)
                .collect()
        };

        assert_eq!(hits(&filter("friends", "")), vec![1, 3]);
        assert_eq!(hits(&filter("friends,work", "or")), vec![1, 2, 3]);
        assert_eq!(hits(&filter("bff,work", "and")), vec![2]);
        assert!(hits(&filter("bff,friends,work", "and")).is_empty());
    }
}
