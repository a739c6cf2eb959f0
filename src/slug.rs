//! Filename parsing and slug derivation for content files.
//!
//! Content tables follow one naming pattern: an optional numeric prefix
//! (`NNN-`) followed by the slug. The number orders navigation; the slug
//! becomes the URL segment. Unnumbered files are still built but stay out
//! of the nav.
//!
//! - `010-eugene-or.toml` → nav position 10, city slug `eugene-or`
//! - `020-siding.toml` → nav position 20, service slug `siding`
//! - `wip-gutters.toml` → hidden from nav, slug `wip-gutters`
//!
//! Area slugs work differently: areas live inside their city file under a
//! display name ("South University"), and the slug is derived from that
//! name by [`sanitize_slug`]. Derived slugs feed both URLs and the copy
//! rotation keys, so the sanitizer is deliberately boring and frozen:
//! lowercase ASCII alphanumerics and dashes, nothing else.

/// Result of parsing a content file stem like `010-eugene-or`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Nav-order prefix if present (e.g. `10` from `010-eugene-or`).
    pub number: Option<u32>,
    /// Slug part after `NNN-`. For unnumbered files, the full stem.
    pub slug: String,
    /// Fallback display title: slug with dashes converted to spaces.
    /// Real titles come from the file contents; this covers files that
    /// never set one.
    pub display_title: String,
}

/// Parse a content file stem following the `NNN-slug` convention.
///
/// Handles these patterns:
/// - `"010-eugene-or"` → number=Some(10), slug="eugene-or"
/// - `"020-siding"` → number=Some(20), slug="siding"
/// - `"007"` → number=Some(7), slug=""
/// - `"testimonials"` → number=None, slug="testimonials"
pub fn parse_content_name(stem: &str) -> ParsedName {
    if let Some(dash_pos) = stem.find('-') {
        let prefix = &stem[..dash_pos];
        if let Ok(num) = prefix.parse::<u32>() {
            let slug = &stem[dash_pos + 1..];
            return ParsedName {
                number: Some(num),
                slug: slug.to_string(),
                display_title: slug.replace('-', " "),
            };
        }
    }
    if let Ok(num) = stem.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            slug: String::new(),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        slug: stem.to_string(),
        display_title: stem.replace('-', " "),
    }
}

const MAX_SLUG_LEN: usize = 80;

/// Derive a URL slug from a display name.
///
/// - Lowercases ASCII letters
/// - Replaces anything that is not an ASCII alphanumeric or dash with a dash
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters (breaks at last dash before limit)
///
/// `"South University"` → `"south-university"`. The result feeds URLs and
/// copy rotation keys, so changing any rule here re-shuffles copy on every
/// page that uses a derived slug.
pub fn sanitize_slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive dashes
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_dash = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }

    // Strip leading/trailing dashes
    let trimmed = collapsed.trim_matches('-');

    // Truncate at word boundary (last dash before limit)
    if trimmed.len() <= MAX_SLUG_LEN {
        trimmed.to_string()
    } else {
        let truncated = &trimmed[..MAX_SLUG_LEN];
        match truncated.rfind('-') {
            Some(pos) => truncated[..pos].to_string(),
            None => truncated.to_string(),
        }
    }
}
