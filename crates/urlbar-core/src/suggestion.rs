//! Prefix matching between the committed text and a candidate completion.

use crate::unicode::{char_len, normalize};

/// Outcome of matching a candidate against the committed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionMatch {
    /// The candidate extends the committed text; `suffix` is what gets highlighted.
    Completes { suffix: String },
    /// The candidate does not start with the committed text.
    NotAPrefix,
    /// The candidate is no longer than the committed text.
    TooShort,
}

impl SuggestionMatch {
    pub fn suffix(&self) -> Option<&str> {
        match self {
            Self::Completes { suffix } => Some(suffix),
            _ => None,
        }
    }
}

/// Match `candidate` against `committed`.
///
/// Comparison runs on normalized forms of both strings. The suffix is cut from
/// the *original* candidate, skipping as many chars as the normalized committed
/// text has. When the candidate carries leading whitespace or lower-casing
/// changes its length, the cut lands at that normalized offset regardless.
pub fn match_suggestion(committed: &str, candidate: &str) -> SuggestionMatch {
    let norm_committed = normalize(committed);
    let norm_candidate = normalize(candidate);

    if !norm_candidate.starts_with(&norm_committed) {
        return SuggestionMatch::NotAPrefix;
    }
    let prefix_len = char_len(&norm_committed);
    if char_len(&norm_candidate) <= prefix_len {
        return SuggestionMatch::TooShort;
    }

    let suffix: String = candidate.chars().skip(prefix_len).collect();
    if suffix.is_empty() {
        // Only reachable when normalization grew the candidate past its
        // original length; nothing to show.
        return SuggestionMatch::TooShort;
    }
    SuggestionMatch::Completes { suffix }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_completion() {
        assert_eq!(
            match_suggestion("bra", "brave.com"),
            SuggestionMatch::Completes {
                suffix: "ve.com".to_string()
            }
        );
    }

    #[test]
    fn test_case_insensitive_prefix_keeps_candidate_case() {
        let m = match_suggestion("BRA", "brAVE.com");
        assert_eq!(m.suffix(), Some("VE.com"));
    }

    #[test]
    fn test_empty_committed_matches_everything() {
        let m = match_suggestion("", "brave.com");
        assert_eq!(m.suffix(), Some("brave.com"));
    }

    #[test]
    fn test_not_a_prefix() {
        assert_eq!(
            match_suggestion("bro", "brave.com"),
            SuggestionMatch::NotAPrefix
        );
    }

    #[test]
    fn test_equal_length_rejected() {
        assert_eq!(
            match_suggestion("Brave.com", "brave.com"),
            SuggestionMatch::TooShort
        );
    }

    #[test]
    fn test_shorter_candidate_rejected() {
        assert_eq!(match_suggestion("brave", "br"), SuggestionMatch::NotAPrefix);
    }

    #[test]
    fn test_leading_whitespace_in_committed_is_ignored() {
        let m = match_suggestion("  bra", "brave.com");
        assert_eq!(m.suffix(), Some("ve.com"));
    }

    #[test]
    fn test_leading_whitespace_in_candidate_shifts_cut() {
        // Normalized offset (3) is applied to the untrimmed candidate.
        let m = match_suggestion("bra", "  brave.com");
        assert_eq!(m.suffix(), Some("rave.com"));
    }

    #[test]
    fn test_trailing_whitespace_is_significant() {
        assert_eq!(
            match_suggestion("brave ", "brave.com"),
            SuggestionMatch::NotAPrefix
        );
    }
}
