//! CLI output formatting for the scan and routes stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (service, city, project) is its semantic identity — name
//! and positional index — with filesystem paths shown as secondary context
//! via indented `Source:` lines. This makes the output readable as a content
//! inventory while still letting users trace data back to specific files.
//!
//! # Entity Display Contract
//!
//! Every entity follows a consistent two-level pattern across all stages:
//!
//! 1. **Header line**: positional index + name (+ optional detail like area count)
//! 2. **Context lines**: indented `Source:`, `Body:`, etc.
//!
//! A shared helper ([`entity_header`]) enforces this pattern so scan and
//! routes output look consistent for the same entities.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Services
//! 001 Siding Installation
//!     Source: services/010-siding.toml
//!     Body: 010-siding.md
//!
//! Cities
//! 001 Eugene, OR (2 areas)
//!     Source: cities/010-eugene-or.toml
//!     001 South University
//!     002 Whiteaker
//!
//! Projects
//!     001 Fairmount Full Re-Side (eugene-or / siding)
//!         Source: projects/010-fairmount-siding.md
//!
//! Testimonials
//!     001 R. Alvarez (eugene-or)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Routes
//!
//! ```text
//! Home → index.html
//!
//! Services
//! 001 Siding Installation → services/siding/index.html
//!
//! Cities
//! 001 Eugene, OR → eugene-or/index.html
//!     001 South University, Eugene, OR → eugene-or/south-university/index.html
//!
//! 13 pages (3 services, 3 cities, 4 areas, 2 projects)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. All rendering
//! decisions live in the format functions; the wrappers only print.

use crate::routes::{PageKind, PageRoute};
use crate::scan::Manifest;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + name, with optional detail.
///
/// Used for cities (with area count), projects (with city/service), and
/// everything else (without).
///
/// ```text
/// 001 Eugene, OR (2 areas)
/// 001 Siding Installation
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Body sidecar filename for a content source, e.g.
/// `services/010-siding.toml` → `010-siding.md`.
fn sidecar_name(source: &str) -> String {
    Path::new(source)
        .with_extension("md")
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered content inventory.
///
/// Information-first: each entity leads with its positional index and name.
/// Source paths and body sidecars are shown as indented context lines.
/// Entities without a number prefix are listed after the numbered ones,
/// indented and unindexed, mirroring their absence from navigation.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    // Services section
    lines.push("Services".to_string());
    let mut pos = 0;
    for service in manifest.services.iter().filter(|s| s.in_nav) {
        pos += 1;
        lines.push(entity_header(pos, &service.name, None));
        lines.push(format!("    Source: {}", service.source));
        if !service.body.is_empty() {
            lines.push(format!("    Body: {}", sidecar_name(&service.source)));
        }
    }
    for service in manifest.services.iter().filter(|s| !s.in_nav) {
        lines.push(format!("    {}", service.name));
    }

    // Cities section
    lines.push(String::new());
    lines.push("Cities".to_string());
    let mut pos = 0;
    for city in manifest.cities.iter().filter(|c| c.in_nav) {
        pos += 1;
        let title = format!("{}, {}", city.name, city.state);
        let detail = match city.areas.len() {
            0 => None,
            n => Some(format!("{} areas", n)),
        };
        lines.push(entity_header(pos, &title, detail.as_deref()));
        lines.push(format!("    Source: {}", city.source));
        for (i, area) in city.areas.iter().enumerate() {
            lines.push(format!("    {}", entity_header(i + 1, &area.name, None)));
        }
    }
    for city in manifest.cities.iter().filter(|c| !c.in_nav) {
        let title = format!("{}, {}", city.name, city.state);
        match city.areas.len() {
            0 => lines.push(format!("    {}", title)),
            n => lines.push(format!("    {} ({} areas)", title, n)),
        }
    }

    // Projects section
    if !manifest.projects.is_empty() {
        lines.push(String::new());
        lines.push("Projects".to_string());
        for (i, project) in manifest.projects.iter().enumerate() {
            let detail = format!("{} / {}", project.city, project.service);
            lines.push(format!(
                "    {}",
                entity_header(i + 1, &project.title, Some(&detail))
            ));
            lines.push(format!("        Source: {}", project.source));
        }
    }

    // Testimonials section
    if !manifest.testimonials.is_empty() {
        lines.push(String::new());
        lines.push("Testimonials".to_string());
        for (i, t) in manifest.testimonials.iter().enumerate() {
            lines.push(format!(
                "    {}",
                entity_header(i + 1, &t.author, t.city.as_deref())
            ));
        }
    }

    // Config section
    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join("assets").is_dir() {
        lines.push("    assets/".to_string());
    }
    if source_root.join("testimonials.toml").exists() {
        lines.push("    testimonials.toml".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Routes output
// ============================================================================

/// Format the route listing: one `title → output file` line per page,
/// grouped by page kind, with area pages nested under their city.
///
/// Ends with a totals line so the count of pages about to be generated is
/// visible at a glance.
pub fn format_routes_output(routes: &[PageRoute]) -> Vec<String> {
    let mut lines = Vec::new();

    let mut service_pos = 0;
    let mut city_pos = 0;
    let mut area_pos = 0;
    let mut area_total = 0;
    let mut project_pos = 0;

    for route in routes {
        match &route.kind {
            PageKind::Home => {
                lines.push(format!("Home \u{2192} {}", route.output_path.display()));
            }
            PageKind::Service { .. } => {
                if service_pos == 0 {
                    lines.push(String::new());
                    lines.push("Services".to_string());
                }
                service_pos += 1;
                lines.push(format!(
                    "{} \u{2192} {}",
                    entity_header(service_pos, &route.title, None),
                    route.output_path.display()
                ));
            }
            PageKind::City { .. } => {
                if city_pos == 0 {
                    lines.push(String::new());
                    lines.push("Cities".to_string());
                }
                city_pos += 1;
                area_pos = 0;
                lines.push(format!(
                    "{} \u{2192} {}",
                    entity_header(city_pos, &route.title, None),
                    route.output_path.display()
                ));
            }
            PageKind::Area { .. } => {
                // Area routes directly follow their city route
                area_pos += 1;
                area_total += 1;
                lines.push(format!(
                    "{}{} \u{2192} {}",
                    indent(1),
                    entity_header(area_pos, &route.title, None),
                    route.output_path.display()
                ));
            }
            PageKind::Project { .. } => {
                if project_pos == 0 {
                    lines.push(String::new());
                    lines.push("Projects".to_string());
                }
                project_pos += 1;
                lines.push(format!(
                    "{} \u{2192} {}",
                    entity_header(project_pos, &route.title, None),
                    route.output_path.display()
                ));
            }
        }
    }

    lines.push(format!(
        "{} pages ({} services, {} cities, {} areas, {} projects)",
        routes.len(),
        service_pos,
        city_pos,
        area_total,
        project_pos
    ));

    lines
}

/// Print the route listing to stdout.
pub fn print_routes_output(routes: &[PageRoute]) {
    for line in format_routes_output(routes) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
