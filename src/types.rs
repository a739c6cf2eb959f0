//! Shared types used across the pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate)
//! and must be identical in both modules.

use serde::{Deserialize, Serialize};

/// A service the business offers (siding, painting, concrete, ...).
///
/// Services follow the content numbering convention:
/// - Numbered files (`NNN-slug.toml`) appear in navigation, sorted by number
/// - Unnumbered files get pages but stay hidden from navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    /// Display name, e.g. "Siding Installation"
    pub name: String,
    /// One-sentence summary shown on cards and in meta descriptions
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Raw markdown body from the `.md` sidecar, empty if none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Source file relative to the content root
    pub source: String,
    /// Whether this service appears in navigation (has number prefix)
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering)
    pub sort_key: u32,
}

/// A neighborhood or district within a city.
///
/// Areas live inside their city's file as display names; the slug is
/// derived by sanitization ("South University" → `south-university`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// Derived URL slug, unique within the city
    pub slug: String,
    /// Display name as written in the city file
    pub name: String,
}

/// A city in the service region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// URL slug (filename stem with number prefix stripped), e.g. `eugene-or`
    pub slug: String,
    /// Display name, e.g. "Eugene"
    pub name: String,
    /// Two-letter state code, e.g. "OR"
    pub state: String,
    /// Neighborhoods that get their own landing pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<Area>,
    /// Source file relative to the content root
    pub source: String,
    /// Whether this city appears in navigation (has number prefix)
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering)
    pub sort_key: u32,
}

/// A completed-work case study tied to a city and service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    /// Title from first `# heading` in markdown, or the stem as fallback
    pub title: String,
    /// Slug of the city this project was done in
    pub city: String,
    /// Slug of the service this project showcases
    pub service: String,
    /// Raw markdown content
    pub body: String,
    /// Source file relative to the content root
    pub source: String,
    /// Sort key from number prefix (for ordering)
    pub sort_key: u32,
}

/// A customer testimonial from `testimonials.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quote itself, plain text
    pub quote: String,
    /// Customer name as it should appear
    pub author: String,
    /// Slug of the customer's city, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// One FAQ entry after variant selection and placeholder fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    /// Label for the page section the entry was selected for
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
}

/// Navigation item (only numbered services and cities).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
}
