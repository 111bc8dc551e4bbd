//! Test helpers for generating unique test data
//!
//! Uses ULIDs to ensure test isolation and avoid unique-constraint
//! conflicts between test runs sharing a database.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("console");
/// let b = unique_str("console");
/// assert_ne!(a, b);
/// assert!(a.starts_with("console-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique game title with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_title;
///
/// let a = unique_title("game");
/// let b = unique_title("game");
/// assert_ne!(a, b);
/// ```
pub fn unique_title(prefix: &str) -> String {
    format!("{} {}", prefix, Ulid::new())
}
