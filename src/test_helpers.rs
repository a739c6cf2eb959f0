//! Shared test utilities for the citygen test suite.
//!
//! Provides the canonical fixture site plus lookup helpers that work with
//! scan-phase data structures (`Manifest`, `City`, `Service`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = write_fixture_site();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let city = find_city(&manifest, "eugene-or");
//! assert_eq!(city.name, "Eugene");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{City, Service};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write the canonical fixture site into a temp directory and return it.
///
/// A three-city, three-service contractor site with two projects and three
/// testimonials. Tests across the crate pin against its exact contents, so
/// extend it rather than editing existing entries.
pub fn write_fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        &root.join("config.toml"),
        r#"
[site]
base_url = "https://cascade-exteriors.example"

[business]
name = "Cascade Exteriors"
phone = "(541) 555-0142"
email = "office@cascade-exteriors.example"
street = "2180 W 11th Ave"
locality = "Eugene"
region = "OR"
postal = "97402"
"#,
    );

    write(
        &root.join("assets/favicon.svg"),
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect width="16" height="16" fill="#1d4ed8"/></svg>"##,
    );

    write(
        &root.join("services/010-siding.toml"),
        r#"
name = "Siding Installation"
summary = "Fiber cement and LP SmartSide siding, installed and warrantied."
"#,
    );
    write(
        &root.join("services/010-siding.md"),
        "## Materials\n\nWe install fiber cement and engineered wood siding.\n",
    );
    write(
        &root.join("services/020-painting.toml"),
        r#"
name = "Interior & Exterior Painting"
summary = "Full prep, premium paint, and a clean job site."
"#,
    );
    write(
        &root.join("services/030-concrete.toml"),
        r#"
name = "Concrete Flatwork"
summary = "Driveways, patios, and walkways poured to last."
"#,
    );

    write(
        &root.join("cities/010-eugene-or.toml"),
        r#"
name = "Eugene"
state = "OR"

[[areas]]
name = "South University"

[[areas]]
name = "Whiteaker"
"#,
    );
    write(
        &root.join("cities/020-springfield-or.toml"),
        r#"
name = "Springfield"
state = "OR"

[[areas]]
name = "Gateway"
"#,
    );
    write(
        &root.join("cities/030-albany-or.toml"),
        r#"
name = "Albany"
state = "OR"

[[areas]]
name = "Downtown"
"#,
    );

    write(
        &root.join("projects/010-fairmount-siding.md"),
        "# Fairmount Full Re-Side\n\nTore off the old cedar, wrapped the house, \
         and hung fiber cement lap siding.\n",
    );
    write(
        &root.join("projects/010-fairmount-siding.toml"),
        r#"
city = "eugene-or"
service = "siding"
"#,
    );
    write(
        &root.join("projects/020-maple-driveway.md"),
        "# Maple Street Driveway\n\nDemo and re-pour of a cracked sixty-year-old driveway.\n",
    );
    write(
        &root.join("projects/020-maple-driveway.toml"),
        r#"
city = "albany-or"
service = "concrete"
"#,
    );

    write(
        &root.join("testimonials.toml"),
        r#"
[[testimonials]]
quote = "Crew was on time every day and the siding looks fantastic."
author = "R. Alvarez"
city = "eugene-or"

[[testimonials]]
quote = "Our driveway went from cracked mess to showpiece in a week."
author = "D. Whitfield"
city = "albany-or"

[[testimonials]]
quote = "Straightforward quote, no surprises on the invoice."
author = "M. Okafor"
"#,
    );

    tmp
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a city by slug. Panics if not found.
pub fn find_city<'a>(manifest: &'a Manifest, slug: &str) -> &'a City {
    manifest.city(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = manifest.cities.iter().map(|c| c.slug.as_str()).collect();
        panic!("city '{slug}' not found. Available: {slugs:?}")
    })
}

/// Find a service by slug. Panics if not found.
pub fn find_service<'a>(manifest: &'a Manifest, slug: &str) -> &'a Service {
    manifest.service(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = manifest.services.iter().map(|s| s.slug.as_str()).collect();
        panic!("service '{slug}' not found. Available: {slugs:?}")
    })
}
