//! Ordered collections of compiled match patterns.

use crate::error::ScanError;
use crate::pattern::{tokenize, MatchPattern};

/// An ordered set of compiled patterns, matched as a logical OR.
///
/// Order is preserved for [`sources`](Self::sources) reporting only; the
/// match result does not depend on pattern order.
#[derive(Debug, Clone, Default)]
pub struct MatchPatterns {
    patterns: Vec<MatchPattern>,
}

impl MatchPatterns {
    /// Compile a set from raw pattern strings.
    ///
    /// Strings that are empty after trimming are dropped, the same way
    /// [`split_pattern_list`] drops blank tokens: a zero-token pattern would
    /// otherwise match the empty relative path, i.e. the base directory.
    ///
    /// # Arguments
    /// * `sources` - Raw pattern strings, in the order to be reported
    ///
    /// # Errors
    /// Returns the first pattern compile failure; no partial set is built.
    pub fn from<I, S>(sources: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<MatchPattern> = sources
            .into_iter()
            .filter(|s: &S| !s.as_ref().trim().is_empty())
            .map(|s: S| MatchPattern::from_source(s.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    /// Does any pattern in the set match this path?
    pub fn matches(&self, path: &str, case_sensitive: bool) -> bool {
        let path_tokens: Vec<&str> = tokenize(path);
        self.matches_tokens(&path_tokens, case_sensitive)
    }

    /// Does any pattern in the set match these pre-split path segments?
    pub fn matches_tokens(&self, path_tokens: &[&str], case_sensitive: bool) -> bool {
        self.patterns
            .iter()
            .any(|p: &MatchPattern| p.matches_tokens(path_tokens, case_sensitive))
    }

    /// Could any pattern still match something under this path prefix?
    ///
    /// Used for traversal pruning; conservative per pattern.
    pub fn could_match_tokens(&self, path_tokens: &[&str], case_sensitive: bool) -> bool {
        self.patterns
            .iter()
            .any(|p: &MatchPattern| p.could_match_tokens(path_tokens, case_sensitive))
    }

    /// Source pattern strings (post syntax-marker stripping), in declaration order.
    pub fn sources(&self) -> Vec<&str> {
        self.patterns.iter().map(MatchPattern::source).collect()
    }

    /// Whether the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// Split a comma-separated pattern list into individual patterns.
///
/// Whitespace (including newlines and tabs) around commas is trimmed and
/// tokens that are empty after trimming are dropped, so `"a,\n ,b\n,"`
/// parses to exactly `["a", "b"]`.
pub fn split_pattern_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token: &&str| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_or_across_patterns() {
        let set: MatchPatterns = MatchPatterns::from(["ABC**", "CDE**"]).unwrap();
        assert!(set.matches("ABCDE", true));
        assert!(set.matches("CDEF", true));
        assert!(!set.matches("XYZ", true));
    }

    #[test]
    fn test_sources_round_trip() {
        let set: MatchPatterns =
            MatchPatterns::from(["ABC**", "%ant[some/ABC*]", "%regex[[ABC].*]"]).unwrap();
        assert_eq!(set.sources(), vec!["ABC**", "some/ABC*", "[ABC].*"]);
    }

    #[test]
    fn test_compile_failure_builds_no_set() {
        let result: Result<MatchPatterns, ScanError> =
            MatchPatterns::from(["fine/**", "%regex[(unclosed]"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set: MatchPatterns = MatchPatterns::from(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!set.matches("anything", true));
        assert!(!set.could_match_tokens(&["anything"], true));
    }

    #[test]
    fn test_blank_patterns_are_dropped() {
        let set: MatchPatterns = MatchPatterns::from(["", "  \n", "a/**"]).unwrap();
        assert_eq!(set.sources(), vec!["a/**"]);
        // A blank exclude must not match the base directory's empty path.
        let blank_only: MatchPatterns = MatchPatterns::from([""]).unwrap();
        assert!(blank_only.is_empty());
        assert!(!blank_only.matches("", true));
    }

    #[test]
    fn test_could_match_is_or_across_patterns() {
        let set: MatchPatterns = MatchPatterns::from(["a/b/c", "x/**"]).unwrap();
        assert!(set.could_match_tokens(&["a", "b"], true));
        assert!(set.could_match_tokens(&["x"], true));
        assert!(!set.could_match_tokens(&["q"], true));
    }

    #[test]
    fn test_split_pattern_list_trims_and_drops_blanks() {
        assert_eq!(split_pattern_list("a,\n ,b\n,"), vec!["a", "b"]);
        assert_eq!(
            split_pattern_list("scanner1.dat,\n  \n,scanner2.dat  \n\r, scanner3.dat\n, \tscanner4.dat,scanner5.dat\n,"),
            vec![
                "scanner1.dat",
                "scanner2.dat",
                "scanner3.dat",
                "scanner4.dat",
                "scanner5.dat"
            ]
        );
        assert!(split_pattern_list("").is_empty());
        assert!(split_pattern_list(" , \n\t, ").is_empty());
    }
}
