//! Unique identifiers so tests sharing a store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("room");
/// let b = unique_str("room");
/// assert_ne!(a, b);
/// assert!(a.starts_with("room-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

pub fn unique_room() -> String {
    unique_str("room")
}

/// `count` distinct player ids sharing one unique stem: `{stem}-p0`, `{stem}-p1`, ...
///
/// Ids stay free of `_` so legacy location tags remain easy to read.
pub fn unique_players(count: usize) -> Vec<String> {
    let stem = unique_str("player").to_lowercase();
    (0..count).map(|i| format!("{stem}-p{i}")).collect()
}
