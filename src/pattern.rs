//! Compiled match patterns and pattern syntax handling.
//!
//! Raw pattern strings select one of two handlers:
//! - `%ant[<glob>]` - explicit Ant-style glob (also the default for bare strings)
//! - `%regex[<expr>]` - regular expression matched against the whole path
//!
//! A pattern is compiled once and is read-only afterwards, so it can be
//! shared across threads.

use fancy_regex::Regex;

use crate::error::ScanError;
use crate::wildcard::{could_match_tokens, match_tokens, DEEP_WILDCARD};

/// Marker selecting explicit Ant-glob handling.
pub const ANT_HANDLER_PREFIX: &str = "%ant[";

/// Marker selecting regular-expression handling.
pub const REGEX_HANDLER_PREFIX: &str = "%regex[";

/// Closing delimiter shared by both handler markers.
pub const PATTERN_HANDLER_SUFFIX: &str = "]";

/// Split a path or pattern string into segments.
///
/// `/` and `\` are both treated as separators regardless of host platform;
/// empty segments (leading, trailing or doubled separators) are dropped. The
/// empty string yields zero segments, denoting the base directory itself.
pub fn tokenize(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|segment: &&str| !segment.is_empty())
        .collect()
}

/// A single compiled include or exclude pattern.
///
/// The closed set of handler kinds is modeled as an enum; the kind is
/// selected once at compile time from the syntax marker.
#[derive(Debug, Clone)]
pub enum MatchPattern {
    /// Ant-style glob, matched segment by segment.
    Ant {
        /// Source pattern with any syntax marker stripped.
        source: String,
        /// Normalized pattern segments; `**` segments are deep wildcards.
        tokens: Vec<String>,
    },
    /// Regular expression, matched against the whole `/`-joined path.
    Regex {
        /// Source expression with the syntax marker stripped.
        source: String,
        /// Compiled expression, anchored to cover the entire path.
        regex: Regex,
    },
}

impl MatchPattern {
    /// Compile a raw pattern string.
    ///
    /// A recognized `%ant[...]` or `%regex[...]` marker is stripped; anything
    /// else (including an opening marker without the closing `]`) is treated
    /// as a plain Ant glob. An Ant pattern ending in a separator gets `**`
    /// appended, so `foo/` and `foo\` mean "everything under foo".
    ///
    /// # Arguments
    /// * `raw` - Raw pattern string as supplied by the caller
    ///
    /// # Errors
    /// Returns `ScanError::InvalidPattern` if a `%regex[...]` expression does
    /// not compile.
    pub fn from_source(raw: &str) -> Result<Self, ScanError> {
        if let Some(expr) = strip_marker(raw, REGEX_HANDLER_PREFIX) {
            // Anchor so the expression must cover the whole path.
            let anchored: String = format!(r"\A(?:{expr})\z");
            let regex: Regex = Regex::new(&anchored).map_err(|e: fancy_regex::Error| {
                ScanError::InvalidPattern {
                    pattern: expr.to_string(),
                    message: e.to_string(),
                }
            })?;
            return Ok(Self::Regex {
                source: expr.to_string(),
                regex,
            });
        }

        let source: &str = strip_marker(raw, ANT_HANDLER_PREFIX).unwrap_or(raw);
        let mut tokens: Vec<String> = tokenize(source).iter().map(|s: &&str| s.to_string()).collect();
        if source.ends_with(['/', '\\']) {
            tokens.push(DEEP_WILDCARD.to_string());
        }

        Ok(Self::Ant {
            source: source.to_string(),
            tokens,
        })
    }

    /// The source pattern string, after syntax-marker stripping.
    pub fn source(&self) -> &str {
        match self {
            Self::Ant { source, .. } => source,
            Self::Regex { source, .. } => source,
        }
    }

    /// Match against a path string (tokenized internally).
    pub fn matches(&self, path: &str, case_sensitive: bool) -> bool {
        let path_tokens: Vec<&str> = tokenize(path);
        self.matches_tokens(&path_tokens, case_sensitive)
    }

    /// Match against pre-split path segments.
    ///
    /// Regex-kind patterns are matched against the segments rejoined with
    /// `/`, which normalizes away the host separator. The case-sensitivity
    /// flag only applies to Ant-kind patterns; a regex carries its own case
    /// handling (e.g. `(?i)`).
    pub fn matches_tokens(&self, path_tokens: &[&str], case_sensitive: bool) -> bool {
        match self {
            Self::Ant { tokens, .. } => match_tokens(tokens, path_tokens, case_sensitive),
            // A match-time failure (backtrack limit exhaustion) counts as
            // no match.
            Self::Regex { regex, .. } => {
                regex.is_match(&path_tokens.join("/")).unwrap_or(false)
            }
        }
    }

    /// Could some extension of this path prefix still match?
    ///
    /// Conservative pruning query. Regex-kind patterns never prune: a whole-
    /// path expression carries no per-segment reachability information, so
    /// the answer is always `true` for them.
    pub fn could_match_tokens(&self, path_tokens: &[&str], case_sensitive: bool) -> bool {
        match self {
            Self::Ant { tokens, .. } => could_match_tokens(tokens, path_tokens, case_sensitive),
            Self::Regex { .. } => true,
        }
    }
}

/// Strip `prefix` and the closing `]` from `raw`, if both are present.
fn strip_marker<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    raw.strip_prefix(prefix)
        .and_then(|rest: &str| rest.strip_suffix(PATTERN_HANDLER_SUFFIX))
}
