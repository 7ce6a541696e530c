//! Helpers for building catalog lookups.

/// Lookup keys are case-insensitive on our side; the catalog expects
/// lower-case identifiers such as `upper arms` or `pectorals`.
pub fn normalize_identifier(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether a normalized identifier can be sent as a path segment. Empty
/// and dot segments would resolve to a different catalog endpoint.
pub fn is_addressable(normalized: &str) -> bool {
    !matches!(normalized, "" | "." | "..")
}

/// Keep at most `limit` items, preserving the catalog's ranking.
pub fn take_ranked<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
