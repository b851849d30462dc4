//! Query parsing and result limits

/// Split a raw query into lowercase terms.
///
/// Terms are separated by commas and/or whitespace. Empty tokens are dropped;
/// repeated terms are kept, each counting toward the score.
pub fn parse_query(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Resolve the number of results to return.
///
/// Absent, non-positive or over-large requests fall back to `default_limit`.
pub fn resolve_limit(requested: Option<i64>, default_limit: usize, max_limit: usize) -> usize {
    requested
        .and_then(|limit| usize::try_from(limit).ok())
        .filter(|limit| (1..=max_limit).contains(limit))
        .unwrap_or(default_limit)
}
