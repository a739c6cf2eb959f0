//! Content loading and manifest generation.
//!
//! Stage 1 of the citygen build pipeline. Reads the content tables from disk,
//! validates them, and produces a structured manifest that the generate stage
//! consumes.
//!
//! ## Directory Structure
//!
//! citygen expects a specific content layout:
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Copied verbatim to the site root
//! ├── services/
//! │   ├── 010-siding.toml          # Service (numbered = appears in nav)
//! │   ├── 010-siding.md            # Optional long-form body (same stem)
//! │   └── 020-painting.toml
//! ├── cities/
//! │   ├── 010-eugene-or.toml       # City with its areas
//! │   └── 020-albany-or.toml
//! ├── projects/
//! │   ├── 010-fairmount-siding.md  # Case study body
//! │   └── 010-fairmount-siding.toml # Sidecar: city/service association
//! └── testimonials.toml
//! ```
//!
//! ## File Formats
//!
//! Service file (`services/NNN-slug.toml`):
//!
//! ```toml
//! name = "Siding Installation"
//! summary = "Fiber cement and LP SmartSide siding, installed and warrantied."
//! ```
//!
//! City file (`cities/NNN-slug.toml`):
//!
//! ```toml
//! name = "Eugene"
//! state = "OR"
//!
//! [[areas]]
//! name = "South University"
//!
//! [[areas]]
//! name = "Whiteaker"
//! ```
//!
//! Project sidecar (`projects/NNN-slug.toml`):
//!
//! ```toml
//! city = "eugene-or"
//! service = "siding"
//! ```
//!
//! Testimonials (`testimonials.toml`):
//!
//! ```toml
//! [[testimonials]]
//! quote = "Crew was on time every day and the siding looks fantastic."
//! author = "R. Alvarez"
//! city = "eugene-or"   # optional
//! ```
//!
//! ## Naming Conventions
//!
//! - **Numbered files** (`NNN-slug.*`): appear in navigation, sorted by number
//! - **Unnumbered files**: built but hidden from navigation
//! - Area slugs are derived from area display names by sanitization
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - No duplicate city, service, or project slugs
//! - No duplicate area slugs within a city
//! - Projects and testimonials may only reference known cities/services
//! - Every project `.md` needs its city/service sidecar
//! - Names must not be empty, and slugs must not collapse to nothing

use crate::config::{self, SiteConfig};
use crate::slug;
use crate::types::{Area, City, Project, Service, Testimonial};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("TOML parse error in {0}: {1}")]
    Toml(PathBuf, toml::de::Error),
    #[error("Duplicate {0} slug '{1}'")]
    DuplicateSlug(&'static str, String),
    #[error("Duplicate area '{1}' in city '{0}'")]
    DuplicateArea(String, String),
    #[error("Unknown city '{0}' referenced by {1}")]
    UnknownCity(String, PathBuf),
    #[error("Unknown service '{0}' referenced by {1}")]
    UnknownService(String, PathBuf),
    #[error("Missing city/service sidecar for project: {0}")]
    MissingSidecar(PathBuf),
    #[error("File stem has no slug part: {0}")]
    EmptySlug(PathBuf),
    #[error("Empty name in {0}")]
    EmptyName(PathBuf),
    #[error("Area '{1}' in city '{0}' produces an empty slug")]
    EmptyAreaSlug(String, String),
    #[error("Empty quote or author in {0}")]
    EmptyTestimonial(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub services: Vec<Service>,
    pub cities: Vec<City>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Look up a city by slug.
    pub fn city(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == slug)
    }

    /// Look up a service by slug.
    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

// Raw file shapes. These stay private to the scanner; the manifest types in
// `types` are the shared contract.

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceFile {
    name: String,
    #[serde(default)]
    summary: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CityFile {
    name: String,
    state: String,
    #[serde(default)]
    areas: Vec<AreaEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AreaEntry {
    name: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    city: String,
    service: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TestimonialsFile {
    #[serde(default)]
    testimonials: Vec<TestimonialEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TestimonialEntry {
    quote: String,
    author: String,
    city: Option<String>,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let services = parse_services(&root.join("services"))?;
    let cities = parse_cities(&root.join("cities"))?;
    let projects = parse_projects(&root.join("projects"), &cities, &services)?;
    let testimonials = parse_testimonials(root, &cities)?;

    Ok(Manifest {
        services,
        cities,
        projects,
        testimonials,
        config,
    })
}

/// Collect non-hidden files with the given extension, sorted by path.
fn collect_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && !p
                    .file_name()
                    .map(|n| n.to_string_lossy().starts_with('.'))
                    .unwrap_or(true)
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Source reference recorded in the manifest, e.g. `services/010-siding.toml`.
fn content_source(dir: &str, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{dir}/{name}")
}

fn parse_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ScanError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ScanError::Toml(path.to_path_buf(), e))
}

/// Read a sidecar file with the same stem as `path` and the given extension.
///
/// Returns `None` if the file doesn't exist or is only whitespace.
fn read_sidecar(path: &Path, extension: &str) -> Option<String> {
    let sidecar = path.with_extension(extension);
    fs::read_to_string(sidecar)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_services(dir: &Path) -> Result<Vec<Service>, ScanError> {
    let mut services = Vec::new();
    let mut seen = HashSet::new();

    for path in collect_files(dir, "toml")? {
        let parsed = slug::parse_content_name(&file_stem(&path));
        if parsed.slug.is_empty() {
            return Err(ScanError::EmptySlug(path));
        }
        let (in_nav, sort_key) = match parsed.number {
            Some(n) => (true, n),
            None => (false, u32::MAX),
        };

        let file: ServiceFile = parse_toml(&path)?;
        if file.name.trim().is_empty() {
            return Err(ScanError::EmptyName(path));
        }
        if !seen.insert(parsed.slug.clone()) {
            return Err(ScanError::DuplicateSlug("service", parsed.slug));
        }

        let body = read_sidecar(&path, "md").unwrap_or_default();

        services.push(Service {
            slug: parsed.slug,
            name: file.name.trim().to_string(),
            summary: file.summary.trim().to_string(),
            body,
            source: content_source("services", &path),
            in_nav,
            sort_key,
        });
    }

    services.sort_by_key(|s| (s.sort_key, s.slug.clone()));
    Ok(services)
}

fn parse_cities(dir: &Path) -> Result<Vec<City>, ScanError> {
    let mut cities = Vec::new();
    let mut seen = HashSet::new();

    for path in collect_files(dir, "toml")? {
        let parsed = slug::parse_content_name(&file_stem(&path));
        if parsed.slug.is_empty() {
            return Err(ScanError::EmptySlug(path));
        }
        let (in_nav, sort_key) = match parsed.number {
            Some(n) => (true, n),
            None => (false, u32::MAX),
        };

        let file: CityFile = parse_toml(&path)?;
        if file.name.trim().is_empty() {
            return Err(ScanError::EmptyName(path));
        }
        if !seen.insert(parsed.slug.clone()) {
            return Err(ScanError::DuplicateSlug("city", parsed.slug));
        }

        let mut areas = Vec::new();
        let mut area_slugs = HashSet::new();
        for entry in &file.areas {
            let area_slug = slug::sanitize_slug(&entry.name);
            if area_slug.is_empty() {
                return Err(ScanError::EmptyAreaSlug(
                    parsed.slug.clone(),
                    entry.name.clone(),
                ));
            }
            if !area_slugs.insert(area_slug.clone()) {
                return Err(ScanError::DuplicateArea(parsed.slug.clone(), area_slug));
            }
            areas.push(Area {
                slug: area_slug,
                name: entry.name.trim().to_string(),
            });
        }

        cities.push(City {
            slug: parsed.slug,
            name: file.name.trim().to_string(),
            state: file.state.trim().to_string(),
            areas,
            source: content_source("cities", &path),
            in_nav,
            sort_key,
        });
    }

    cities.sort_by_key(|c| (c.sort_key, c.slug.clone()));
    Ok(cities)
}

fn parse_projects(
    dir: &Path,
    cities: &[City],
    services: &[Service],
) -> Result<Vec<Project>, ScanError> {
    let mut projects = Vec::new();
    let mut seen = HashSet::new();

    for path in collect_files(dir, "md")? {
        let parsed = slug::parse_content_name(&file_stem(&path));
        if parsed.slug.is_empty() {
            return Err(ScanError::EmptySlug(path));
        }
        let sort_key = parsed.number.unwrap_or(u32::MAX);

        let body = fs::read_to_string(&path)?;
        let title = body
            .lines()
            .find(|line| line.starts_with("# "))
            .map(|line| line.trim_start_matches("# ").trim().to_string())
            .unwrap_or_else(|| parsed.display_title.clone());

        let sidecar_path = path.with_extension("toml");
        if !sidecar_path.exists() {
            return Err(ScanError::MissingSidecar(path));
        }
        let file: ProjectFile = parse_toml(&sidecar_path)?;

        if !cities.iter().any(|c| c.slug == file.city) {
            return Err(ScanError::UnknownCity(file.city, sidecar_path));
        }
        if !services.iter().any(|s| s.slug == file.service) {
            return Err(ScanError::UnknownService(file.service, sidecar_path));
        }
        if !seen.insert(parsed.slug.clone()) {
            return Err(ScanError::DuplicateSlug("project", parsed.slug));
        }

        projects.push(Project {
            slug: parsed.slug,
            title,
            city: file.city,
            service: file.service,
            body,
            source: content_source("projects", &path),
            sort_key,
        });
    }

    projects.sort_by_key(|p| (p.sort_key, p.slug.clone()));
    Ok(projects)
}

fn parse_testimonials(root: &Path, cities: &[City]) -> Result<Vec<Testimonial>, ScanError> {
    let path = root.join("testimonials.toml");
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file: TestimonialsFile = parse_toml(&path)?;
    let mut testimonials = Vec::new();
    for entry in file.testimonials {
        if entry.quote.trim().is_empty() || entry.author.trim().is_empty() {
            return Err(ScanError::EmptyTestimonial(path));
        }
        if let Some(ref city) = entry.city
            && !cities.iter().any(|c| &c.slug == city)
        {
            return Err(ScanError::UnknownCity(city.clone(), path));
        }
        testimonials.push(Testimonial {
            quote: entry.quote.trim().to_string(),
            author: entry.author.trim().to_string(),
            city: entry.city,
        });
    }
    Ok(testimonials)
}
