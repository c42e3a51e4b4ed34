//! URL slug generation and validation for REST endpoint paths.

use crate::validate::Validity;

/// Separator choices a slug may legitimately use.
const SEPARATORS: [&str; 5] = ["-", ".", "_", "~", ""];

/// Slugify a string: lowercase ASCII alphanumerics with runs of anything
/// else collapsed into a single `separator`. Leading and trailing runs are
/// dropped rather than separated.
pub fn to_url_slug(raw: &str, separator: &str) -> String {
    let mut slug = String::new();
    let mut pending = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending && !slug.is_empty() {
                slug.push_str(separator);
            }
            pending = false;
            slug.extend(c.to_lowercase());
        } else {
            pending = true;
        }
    }
    slug
}

/// Validate a user-supplied URL slug, with or without a leading slash.
///
/// The slug is accepted when it matches its own slugified form under any of
/// the supported separators. Rejections carry a suggested correction built
/// with the first separator choice, slash restored if one was stripped.
pub fn validate_url_slug(value: &str) -> Validity {
    let (had_slash, candidate) = match value.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if SEPARATORS
        .iter()
        .any(|separator| to_url_slug(candidate, separator) == candidate)
    {
        return Validity::Valid;
    }
    let mut suggestion = to_url_slug(candidate, SEPARATORS[0]);
    if had_slash {
        suggestion.insert(0, '/');
    }
    Validity::invalid(format!("Invalid URL slug. Suggested slug: {}", suggestion))
}
