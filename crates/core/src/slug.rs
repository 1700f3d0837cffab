//! The single slug derivation rule.
//!
//! Slugs key every cross-source lookup (registry entries, override files,
//! route parameters), so the exact same derivation must be used everywhere.
//! A second, slightly different implementation would make IDs silently fail
//! to match.

/// Derive a URL slug from a display name.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single hyphen, and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use lioncash_core::slug::slugify;
///
/// assert_eq!(slugify("Miami"), "miami");
/// assert_eq!(slugify("St. Petersburg"), "st-petersburg");
/// assert_eq!(slugify("Winston-Salem"), "winston-salem");
/// assert_eq!(slugify("  Port St. Lucie  "), "port-st-lucie");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
