//! Post groups (communities).

use sqlx::FromRow;

/// A named category posts can be filed under.
#[derive(Debug, Clone, FromRow)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// Input data for creating a group.
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl NewGroup {
    /// Checks that `slug` is URL-safe: ASCII letters, digits, `-` and `_`,
    /// between 1 and 50 characters.
    pub fn is_valid_slug(slug: &str) -> bool {
        static SLUG: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new(r"^[-a-zA-Z0-9_]{1,50}$").expect("slug regex is valid")
        });
        SLUG.is_match(slug)
    }
}
