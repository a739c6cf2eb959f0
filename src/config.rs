//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. User values are
//! overlaid on stock defaults, so a config file only needs the keys it wants
//! to change.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the content root:
//!
//! ```text
//! content/
//! ├── config.toml              # Overrides stock defaults
//! ├── services/
//! ├── cities/
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"      # Path to content directory
//!
//! [site]
//! base_url = "https://example.com"  # Absolute origin, no trailing slash
//! title_suffix = ""             # Empty = " | <business name>"
//! description = "Licensed local contractor for siding, painting, and concrete work."
//!
//! [business]
//! name = "Example Contracting"
//! phone = "(555) 555-0100"
//! email = "office@example.com"
//! street = "100 Main St"
//! locality = "Eugene"
//! region = "OR"
//! postal = "97401"
//! booking_url = ""              # External scheduling link, empty = hidden
//!
//! [copy]
//! faq_count = 5                 # FAQ entries per landing page
//! testimonial_count = 3         # Testimonials on the home page
//!
//! [colors]
//! background = "#ffffff"
//! text = "#1f2933"
//! text_muted = "#616e7c"        # Nav, breadcrumbs, footer
//! border = "#d9e2ec"
//! brand = "#1d4ed8"             # Links, buttons, accents
//! brand_hover = "#1e40af"
//!
//! [processing]
//! max_processes = 4             # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want.
//!
//! ```toml
//! # Only override the phone number
//! [business]
//! phone = "(541) 555-0188"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the content root directory (only meaningful at root level).
    #[serde(default = "default_content_root")]
    pub content_root: String,
    /// Site-wide metadata (base URL, title suffix, fallback description).
    pub site: SiteMeta,
    /// Business identity: name, contact, and address (NAP).
    pub business: BusinessConfig,
    /// Copy rotation settings (FAQ and testimonial counts).
    pub copy: CopyConfig,
    /// Brand color palette.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

fn default_content_root() -> String {
    "content".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            site: SiteMeta::default(),
            business: BusinessConfig::default(),
            copy: CopyConfig::default(),
            colors: ColorConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.business.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "business.name must not be empty".into(),
            ));
        }
        if self.business.phone.trim().is_empty() {
            return Err(ConfigError::Validation(
                "business.phone must not be empty".into(),
            ));
        }
        let url = &self.site.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a slash".into(),
            ));
        }
        if !self.business.booking_url.is_empty()
            && !(self.business.booking_url.starts_with("http://")
                || self.business.booking_url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(
                "business.booking_url must be an absolute URL".into(),
            ));
        }
        if self.copy.faq_count == 0 {
            return Err(ConfigError::Validation(
                "copy.faq_count must be at least 1".into(),
            ));
        }
        if self.colors.background.is_empty()
            || self.colors.text.is_empty()
            || self.colors.brand.is_empty()
        {
            return Err(ConfigError::Validation(
                "colors.background, colors.text and colors.brand must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Suffix appended to every page `<title>`.
    ///
    /// Empty `site.title_suffix` derives one from the business name.
    pub fn title_suffix(&self) -> String {
        if self.site.title_suffix.is_empty() {
            format!(" | {}", self.business.name)
        } else {
            self.site.title_suffix.clone()
        }
    }
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Absolute site origin used for canonical URLs and the sitemap.
    /// Must not end with a slash.
    pub base_url: String,
    /// Suffix for page titles. Empty derives `" | <business name>"`.
    pub title_suffix: String,
    /// Fallback meta description for pages without a specific one.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            title_suffix: String::new(),
            description: "Licensed local contractor for siding, painting, and concrete work."
                .to_string(),
        }
    }
}

/// Business identity rendered into page chrome and structured data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessConfig {
    /// Legal/trade name, e.g. "Cascade Exteriors".
    pub name: String,
    /// Display phone number, rendered as written.
    pub phone: String,
    /// Contact email for the footer.
    pub email: String,
    /// Street address line.
    pub street: String,
    /// City of the main office.
    pub locality: String,
    /// Two-letter state code.
    pub region: String,
    /// Postal code.
    pub postal: String,
    /// External scheduling link ("Book online"). Empty hides the button.
    pub booking_url: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Example Contracting".to_string(),
            phone: "(555) 555-0100".to_string(),
            email: "office@example.com".to_string(),
            street: "100 Main St".to_string(),
            locality: "Eugene".to_string(),
            region: "OR".to_string(),
            postal: "97401".to_string(),
            booking_url: String::new(),
        }
    }
}

/// Copy rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyConfig {
    /// FAQ entries selected per landing page.
    pub faq_count: usize,
    /// Testimonials shown on the home page.
    pub testimonial_count: usize,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            faq_count: 5,
            testimonial_count: 3,
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page rendering workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Brand color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text (nav, breadcrumbs, footer).
    pub text_muted: String,
    /// Border and divider color.
    pub border: String,
    /// Brand accent for links and buttons.
    pub brand: String,
    /// Brand accent on hover.
    pub brand_hover: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1f2933".to_string(),
            text_muted: "#616e7c".to_string(),
            border: "#d9e2ec".to_string(),
            brand: "#1d4ed8".to_string(),
            brand_hover: "#1e40af".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Citygen Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the content root (content/config.toml). Only the keys
# you want to override need to be present. Unknown keys will cause an error.

# Path to content directory
content_root = "content"

# ---------------------------------------------------------------------------
# Site metadata
# ---------------------------------------------------------------------------
[site]
# Absolute site origin for canonical URLs and the sitemap. No trailing slash.
base_url = "https://example.com"

# Suffix appended to every page title. Empty derives " | <business name>".
# title_suffix = " | Example Contracting"

# Fallback meta description for pages without a specific one.
description = "Licensed local contractor for siding, painting, and concrete work."

# ---------------------------------------------------------------------------
# Business identity (rendered into page chrome and structured data)
# ---------------------------------------------------------------------------
[business]
name = "Example Contracting"
phone = "(555) 555-0100"
email = "office@example.com"
street = "100 Main St"
locality = "Eugene"
region = "OR"
postal = "97401"

# External scheduling link ("Book online" button). Empty hides the button.
# booking_url = "https://book.example.com"

# ---------------------------------------------------------------------------
# Copy rotation
# ---------------------------------------------------------------------------
[copy]
# FAQ entries selected per landing page.
faq_count = 5

# Testimonials shown on the home page.
testimonial_count = 3

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#ffffff"
text = "#1f2933"
text_muted = "#616e7c"    # Nav, breadcrumbs, footer
border = "#d9e2ec"
brand = "#1d4ed8"         # Links, buttons, accents
brand_hover = "#1e40af"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --color-brand: {brand};
    --color-brand-hover: {brand_hover};
}}"#,
        bg = colors.background,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
        brand = colors.brand,
        brand_hover = colors.brand_hover,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.background, "#ffffff");
        assert_eq!(config.colors.brand, "#1d4ed8");
    }

    #[test]
    fn default_config_has_content_root() {
        let config = SiteConfig::default();
        assert_eq!(config.content_root, "content");
    }

    #[test]
    fn default_config_business_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.business.name, "Example Contracting");
        assert_eq!(config.business.region, "OR");
        assert_eq!(config.copy.faq_count, 5);
        assert_eq!(config.copy.testimonial_count, 3);
    }

    #[test]
    fn title_suffix_derived_from_business_name() {
        let config = SiteConfig::default();
        assert_eq!(config.title_suffix(), " | Example Contracting");
    }

    #[test]
    fn title_suffix_explicit_wins() {
        let mut config = SiteConfig::default();
        config.site.title_suffix = " - Cascade Exteriors".to_string();
        assert_eq!(config.title_suffix(), " - Cascade Exteriors");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.text, "#1f2933");
        assert_eq!(config.business.name, "Example Contracting");
        assert_eq!(config.copy.faq_count, 5);
    }

    #[test]
    fn parse_copy_settings() {
        let toml = r#"
[copy]
faq_count = 8
testimonial_count = 5
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.copy.faq_count, 8);
        assert_eq!(config.copy.testimonial_count, 5);
        // Unspecified defaults preserved
        assert_eq!(config.colors.background, "#ffffff");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.background = "#f0f0f0".to_string();
        colors.brand = "#004400".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-brand: #004400"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.business.name, "Example Contracting");
        assert_eq!(config.colors.background, "#ffffff");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        fs::write(
            &config_path,
            r##"
[business]
name = "Cascade Exteriors"
phone = "(541) 555-0188"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.business.name, "Cascade Exteriors");
        assert_eq!(config.business.phone, "(541) 555-0188");
        // Unspecified values should be defaults
        assert_eq!(config.business.region, "OR");
    }

    #[test]
    fn load_config_full_config() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        fs::write(
            &config_path,
            r##"
[site]
base_url = "https://cascade.example"
description = "Siding and painting for the southern Willamette Valley."

[business]
name = "Cascade Exteriors"
phone = "(541) 555-0188"
email = "hello@cascade.example"
street = "2210 River Rd"
locality = "Eugene"
region = "OR"
postal = "97404"
booking_url = "https://book.cascade.example"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.site.base_url, "https://cascade.example");
        assert_eq!(config.business.name, "Cascade Exteriors");
        assert_eq!(config.business.street, "2210 River Rd");
        assert_eq!(config.business.booking_url, "https://book.cascade.example");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn generate_css_includes_all_variables() {
        let colors = ColorConfig::default();
        let css = generate_color_css(&colors);

        assert!(css.contains("--color-bg:"));
        assert!(css.contains("--color-text:"));
        assert!(css.contains("--color-text-muted:"));
        assert!(css.contains("--color-border:"));
        assert!(css.contains("--color-brand:"));
        assert!(css.contains("--color-brand-hover:"));
    }

    // =========================================================================
    // Processing config tests
    // =========================================================================

    #[test]
    fn default_processing_config() {
        let config = ProcessingConfig::default();
        assert_eq!(config.max_processes, None);
    }

    #[test]
    fn effective_threads_auto() {
        let config = ProcessingConfig {
            max_processes: None,
        };
        let threads = effective_threads(&config);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let config = ProcessingConfig {
            max_processes: Some(99999),
        };
        let threads = effective_threads(&config);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_processes: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn parse_processing_config() {
        let toml = r#"
[processing]
max_processes = 4
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.processing.max_processes, Some(4));
    }

    #[test]
    fn parse_config_without_processing_uses_default() {
        let toml = r##"
[colors]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.processing.max_processes, None);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"faq_count = 5"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"faq_count = 8"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("faq_count").unwrap().as_integer(), Some(8));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[copy]
faq_count = 5
testimonial_count = 3
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[copy]
faq_count = 8
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let copy = merged.get("copy").unwrap();
        assert_eq!(copy.get("faq_count").unwrap().as_integer(), Some(8));
        // testimonial_count preserved from base
        assert_eq!(
            copy.get("testimonial_count").unwrap().as_integer(),
            Some(3)
        );
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
a = 1
b = 2
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(r#"a = 10"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let colors = merged.get("colors").unwrap();
        assert_eq!(colors.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(colors.get("text").unwrap().as_str(), Some("#000"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[business]
phon = "(555) 555-0100"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[busines]
name = "Typo Co"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml_str = r##"
[colors]
bg = "#fff"
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[copy]
faq_cont = 5
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_business_name() {
        let mut config = SiteConfig::default();
        config.business.name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("business.name"));
    }

    #[test]
    fn validate_empty_phone() {
        let mut config = SiteConfig::default();
        config.business.phone = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_base_url_scheme() {
        let mut config = SiteConfig::default();
        config.site.base_url = "example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn validate_base_url_trailing_slash() {
        let mut config = SiteConfig::default();
        config.site.base_url = "https://example.com/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_relative_booking_url() {
        let mut config = SiteConfig::default();
        config.business.booking_url = "/book".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_booking_url_ok() {
        let mut config = SiteConfig::default();
        config.business.booking_url = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_faq_count_zero() {
        let mut config = SiteConfig::default();
        config.copy.faq_count = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("faq_count"));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[copy]
faq_count = 0
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_raw_config(tmp.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_raw_config_returns_value_when_file_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[copy]
faq_count = 8
"#,
        )
        .unwrap();

        let result = load_raw_config(tmp.path()).unwrap();
        assert!(result.is_some());
        let val = result.unwrap();
        assert_eq!(
            val.get("copy")
                .unwrap()
                .get("faq_count")
                .unwrap()
                .as_integer(),
            Some(8)
        );
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let base = stock_defaults_value();
        let config = resolve_config(base, None).unwrap();
        assert_eq!(config.copy.faq_count, 5);
        assert_eq!(config.colors.background, "#ffffff");
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[copy]
faq_count = 8
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.copy.faq_count, 8);
        // Other fields preserved from defaults
        assert_eq!(config.copy.testimonial_count, 3);
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
base_url = "not-a-url"
"#,
        )
        .unwrap();
        let result = resolve_config(base, Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let content = stock_config_toml();
        let config: SiteConfig = toml::from_str(content).unwrap();
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.business.name, "Example Contracting");
        assert_eq!(config.copy.faq_count, 5);
        assert_eq!(config.colors.background, "#ffffff");
        assert_eq!(config.colors.brand, "#1d4ed8");
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[business]"));
        assert!(content.contains("[copy]"));
        assert!(content.contains("[colors]"));
        assert!(content.contains("[processing]"));
    }

    // =========================================================================
    // stock_defaults_value tests
    // =========================================================================

    #[test]
    fn stock_defaults_value_is_table() {
        let val = stock_defaults_value();
        assert!(val.is_table());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("site").is_some());
        assert!(val.get("business").is_some());
        assert!(val.get("copy").is_some());
        assert!(val.get("colors").is_some());
        assert!(val.get("processing").is_some());
    }
}
