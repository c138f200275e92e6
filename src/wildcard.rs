//! Wildcard matching primitives for Ant-style glob patterns.
//!
//! All functions here are pure: they operate on borrowed token slices with no
//! shared mutable state, so compiled patterns can be matched concurrently
//! from multiple threads.
//!
//! Semantics:
//! - `*` matches any run of zero or more characters within one segment
//! - `?` matches exactly one character within one segment
//! - `**` (as a whole segment) matches zero or more whole segments

/// The segment token that matches zero or more whole path segments.
pub const DEEP_WILDCARD: &str = "**";

/// Compare two characters, optionally case-insensitively.
fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

/// Compare two strings, optionally case-insensitively.
fn strings_eq(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Match one pattern segment against one path segment.
///
/// Uses greedy `*` expansion with backtracking: on a mismatch after a `*`,
/// the last `*` absorbs one more character and matching retries from there.
///
/// # Arguments
/// * `pattern` - Pattern segment, may contain `*` and `?`
/// * `segment` - Path segment to test (no separators)
/// * `case_sensitive` - Whether character comparisons respect case
///
/// # Returns
/// `true` if the pattern covers the entire segment.
pub fn match_segment(pattern: &str, segment: &str, case_sensitive: bool) -> bool {
    // Literal segments are the common case.
    if !pattern.contains(['*', '?']) {
        return strings_eq(pattern, segment, case_sensitive);
    }

    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = segment.chars().collect();

    let mut p: usize = 0;
    let mut t: usize = 0;
    // Position to resume from when backtracking over the last '*'.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < txt.len() {
        if p < pat.len() && pat[p] == '*' {
            backtrack = Some((p + 1, t));
            p += 1;
        } else if p < pat.len() && (pat[p] == '?' || chars_eq(pat[p], txt[t], case_sensitive)) {
            p += 1;
            t += 1;
        } else if let Some((bp, bt)) = backtrack {
            backtrack = Some((bp, bt + 1));
            p = bp;
            t = bt + 1;
        } else {
            return false;
        }
    }

    // Trailing '*' runs match the empty string.
    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }

    p == pat.len()
}

/// Match a full tokenized pattern against a full tokenized path.
///
/// `**` tokens absorb zero or more whole path segments. The search is
/// existential: any valid alignment counts. Results for each
/// (pattern index, path index) pair are memoized, so patterns with several
/// `**` tokens stay polynomial instead of exponential.
///
/// # Arguments
/// * `pattern` - Pattern segments, where a segment equal to `**` is a deep wildcard
/// * `path` - Path segments
/// * `case_sensitive` - Whether character comparisons respect case
pub fn match_tokens(pattern: &[String], path: &[&str], case_sensitive: bool) -> bool {
    let mut memo: Vec<Option<bool>> = vec![None; (pattern.len() + 1) * (path.len() + 1)];
    match_from(pattern, path, 0, 0, case_sensitive, &mut memo)
}

fn match_from(
    pattern: &[String],
    path: &[&str],
    p: usize,
    t: usize,
    case_sensitive: bool,
    memo: &mut [Option<bool>],
) -> bool {
    let key: usize = p * (path.len() + 1) + t;
    if let Some(cached) = memo[key] {
        return cached;
    }

    let result: bool = if p == pattern.len() {
        t == path.len()
    } else if pattern[p] == DEEP_WILDCARD {
        // '**' absorbs zero segments, or one segment and retries.
        match_from(pattern, path, p + 1, t, case_sensitive, memo)
            || (t < path.len() && match_from(pattern, path, p, t + 1, case_sensitive, memo))
    } else {
        t < path.len()
            && match_segment(&pattern[p], path[t], case_sensitive)
            && match_from(pattern, path, p + 1, t + 1, case_sensitive, memo)
    };

    memo[key] = Some(result);
    result
}

/// Decide whether some extension of `path` by additional segments could
/// still match `pattern`.
///
/// Used for traversal pruning, so the answer must be conservative: it may
/// return `true` for prefixes that never lead to a match, but never `false`
/// for one that does. Pattern and path advance in lockstep until either is
/// exhausted or a `**` is reached; a `**` can absorb any extension, and a
/// path that runs out first has not yet had the chance to diverge.
///
/// # Arguments
/// * `pattern` - Pattern segments
/// * `path` - Path segments known to be a strict prefix of some candidate
/// * `case_sensitive` - Whether character comparisons respect case
pub fn could_match_tokens(pattern: &[String], path: &[&str], case_sensitive: bool) -> bool {
    let mut p: usize = 0;
    let mut t: usize = 0;

    while p < pattern.len() && t < path.len() {
        if pattern[p] == DEEP_WILDCARD {
            return true;
        }
        if !match_segment(&pattern[p], path[t], case_sensitive) {
            return false;
        }
        p += 1;
        t += 1;
    }

    // Path exhausted: the prefix is still on track. Pattern exhausted with
    // path segments left over: no extension can shorten the path.
    t == path.len()
}
