//! # Citygen
//!
//! A static site generator for local-service contractor sites. Your
//! filesystem is the data source: TOML files become services and cities,
//! markdown files become project case studies, and every city and
//! neighborhood gets its own landing page.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Citygen processes content through two independent stages, joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Validation up front**: broken cross-references (a project naming an
//!   unknown city, a duplicate slug) fail in scan, before a single page is
//!   written.
//! - **Testability**: generation is a pure function of the manifest, so page
//!   tests can exercise rendering logic against a fixed manifest without
//!   re-scanning.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, validates cross-references, produces the manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`routes`] | Maps the manifest to the full page set: URLs, output paths, titles |
//! | [`variants`] | Deterministic copy selection: stable hash, variant picking, FAQ assignment |
//! | [`copy`] | Copy pools (intros, pitches, CTAs, FAQs) and `{token}` template filling |
//! | [`schema`] | Schema.org JSON-LD builders for local-business SEO |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS custom-property generation |
//! | [`types`] | Shared types serialized between stages (`Service`, `City`, `Project`) |
//! | [`slug`] | `NNN-name` filename convention parser and slug sanitizer |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Deterministic Copy Variation
//!
//! Every city and area landing page needs copy that reads differently from
//! its siblings, or the site collapses into obvious boilerplate. Citygen
//! selects copy from fixed pools using a stable string hash of a page-scoped
//! key (`"eugene-or-south-university-intro"`), which means:
//!
//! - the same content always produces the same page, byte for byte,
//! - sister pages draw different variants from the same pool,
//! - no RNG state, build history, or lockfile is needed.
//!
//! The hash and selection rules live in [`variants`]; the pools in [`copy`].
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## NNN-Prefix Ordering
//!
//! Content files use a numeric prefix (`010-`, `020-`, etc.) for explicit
//! navigation ordering, parsed by [`slug::parse_content_name`]. Files without
//! a prefix are built but hidden from navigation — useful for a service you
//! offer quietly or a city you are still expanding into. The filesystem is
//! the source of truth; no database, no front-matter, no separate ordering
//! file.
//!
//! ## Inline JSON-LD
//!
//! Every page embeds Schema.org structured data as inline JSON-LD:
//! `HomeAndConstructionBusiness` on the home page, `Service` on service and
//! project pages, `FAQPage` where FAQs render, and `BreadcrumbList`
//! everywhere below the home page. Local-pack ranking leans heavily on
//! structured data, and inlining it keeps each page self-contained.
//!
//! # Plain-HTML Output
//!
//! The generated site is plain HTML plus one fingerprinted stylesheet. No
//! JavaScript is emitted or required. The output can be dropped on any file
//! server — no Node, no PHP, no database. If a browser can render HTML, it
//! can render the site.

pub mod config;
pub mod copy;
pub mod generate;
pub mod output;
pub mod routes;
pub mod scan;
pub mod schema;
pub mod slug;
pub mod types;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_helpers;
