//! HTML site generation.
//!
//! Stage 2 of the citygen build pipeline. Takes the scan manifest and
//! generates the final static site.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): Hero, service cards, city list, testimonials
//! - **Service pages** (`/services/{service}/index.html`): Pitch, body, related projects
//! - **City pages** (`/{city}/index.html`): Intro, per-service pitches, area grid, FAQ
//! - **Area pages** (`/{city}/{area}/index.html`): Neighborhood landing page with FAQ and CTA
//! - **Project pages** (`/projects/{project}/index.html`): Case study bodies
//! - **`sitemap.xml` / `robots.txt`**: Crawler surface for the whole route set
//!
//! ## Copy variation
//!
//! Landing pages share templates, so intros, pitches, CTAs, and FAQ subsets
//! are drawn from the pools in [`crate::copy`] keyed by route slugs. Identical
//! content always produces identical output, which keeps rebuilds
//! byte-for-byte reproducible while no two city or area pages read the same.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── style.css                  # fingerprinted via ?v= query on every link
//! ├── sitemap.xml
//! ├── robots.txt
//! ├── services/
//! │   └── siding/index.html
//! ├── eugene-or/
//! │   ├── index.html             # City hub page
//! │   └── whiteaker/index.html   # Area landing page
//! └── projects/
//!     └── fairmount/index.html
//! ```
//!
//! Files under `content/assets/` are copied verbatim to the output root.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. Every page
//! embeds its schema.org JSON-LD (see [`crate::schema`]) in the head.
//! Rendering is parallelized across routes with rayon.

use crate::config::{self, SiteConfig};
use crate::copy;
use crate::routes::{self, PageKind, PageRoute};
use crate::scan::Manifest;
use crate::schema;
use crate::types::{Area, City, Faq, NavItem, Project, Service, Testimonial};
use crate::variants;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Manifest not found at {0}. Run 'scan' first")]
    ManifestNotFound(PathBuf),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    if !manifest_path.exists() {
        return Err(GenerateError::ManifestNotFound(manifest_path.to_path_buf()));
    }
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(output_dir)?;

    // Generate CSS with colors from config
    let color_css = config::generate_color_css(&manifest.config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let css_href = format!("/style.css?v={}", css_fingerprint(&css));

    let nav = routes::nav_items(&manifest);
    let all_routes = routes::routes(&manifest);

    all_routes
        .par_iter()
        .map(|route| -> Result<(), GenerateError> {
            let page = render_route(&manifest, &nav, &css_href, route);
            let path = output_dir.join(&route.output_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, page.into_string())?;
            Ok(())
        })
        .collect::<Result<(), GenerateError>>()?;
    println!("Generated {} pages", all_routes.len());

    fs::write(output_dir.join("style.css"), &css)?;
    fs::write(
        output_dir.join("sitemap.xml"),
        sitemap_xml(&manifest.config.site.base_url, &all_routes),
    )?;
    fs::write(
        output_dir.join("robots.txt"),
        robots_txt(&manifest.config.site.base_url),
    )?;
    println!("Generated sitemap.xml ({} URLs)", all_routes.len());

    copy_assets(&source_dir.join("assets"), output_dir)?;

    println!("Site generated at {}", output_dir.display());
    Ok(())
}

/// First 8 hex chars of the SHA-256 of the stylesheet, used as a cache-busting
/// query so far-future caching survives deploys.
fn css_fingerprint(css: &str) -> String {
    let digest = Sha256::digest(css.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..8].to_string()
}

fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(());
    }
    for entry in WalkDir::new(assets_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        // The walk is rooted at assets_dir, so strip_prefix cannot fail
        let rel = entry.path().strip_prefix(assets_dir).unwrap();
        let dest = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

fn sitemap_xml(base_url: &str, routes: &[PageRoute]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in routes {
        xml.push_str("  <url><loc>");
        xml.push_str(&route.absolute_url(base_url));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {base_url}/sitemap.xml\n")
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    description: &str,
    canonical: &str,
    css_href: &str,
    schemas: &[Value],
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                link rel="canonical" href=(canonical);
                link rel="stylesheet" href=(css_href);
                @for schema in schemas {
                    script type="application/ld+json" { (PreEscaped(schema.to_string())) }
                }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header with business brand and navigation
fn site_header(config: &SiteConfig, nav: &[NavItem], current_path: &str) -> Markup {
    let business = &config.business;
    html! {
        header.site-header {
            div.site-brand {
                a.site-name href="/" { (business.name) }
                a.site-phone href=(tel_href(&business.phone)) { (business.phone) }
            }
            nav.site-nav {
                ul {
                    @for item in nav {
                        @let is_current = item.path == current_path
                            || (item.path != "/" && current_path.starts_with(item.path.as_str()));
                        li class=[is_current.then_some("current")] {
                            a href=(item.path) { (item.title) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the site footer with NAP (name, address, phone) and booking link
fn site_footer(config: &SiteConfig) -> Markup {
    let business = &config.business;
    html! {
        footer.site-footer {
            div.footer-nap {
                strong { (business.name) }
                p {
                    (business.street) ", " (business.locality) ", "
                    (business.region) " " (business.postal)
                }
                p { a href=(tel_href(&business.phone)) { (business.phone) } }
                @if !business.email.is_empty() {
                    p { a href={ "mailto:" (business.email) } { (business.email) } }
                }
            }
            @if !business.booking_url.is_empty() {
                a.footer-booking href=(business.booking_url) { "Book a free estimate" }
            }
        }
    }
}

fn breadcrumb_trail(trail: &[(String, String)]) -> Markup {
    html! {
        nav.breadcrumb {
            @for (idx, (name, href)) in trail.iter().enumerate() {
                @if idx > 0 { " › " }
                @if idx + 1 < trail.len() {
                    a href=(href) { (name) }
                } @else {
                    span { (name) }
                }
            }
        }
    }
}

/// BreadcrumbList JSON-LD for a trail of site-relative links.
fn breadcrumb_schema(base_url: &str, trail: &[(String, String)]) -> Value {
    let absolute: Vec<(String, String)> = trail
        .iter()
        .map(|(name, path)| (name.clone(), format!("{base_url}{path}")))
        .collect();
    let refs: Vec<(&str, &str)> = absolute
        .iter()
        .map(|(name, url)| (name.as_str(), url.as_str()))
        .collect();
    schema::breadcrumbs(&refs)
}

fn faq_section(faqs: &[Faq]) -> Markup {
    html! {
        @if !faqs.is_empty() {
            section.faq {
                h2 { "Frequently asked questions" }
                @for faq in faqs {
                    details.faq-item {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
        }
    }
}

fn testimonial_section(testimonials: &[&Testimonial]) -> Markup {
    html! {
        @if !testimonials.is_empty() {
            section.testimonials {
                h2 { "What homeowners say" }
                @for testimonial in testimonials {
                    blockquote.testimonial {
                        p { (testimonial.quote) }
                        footer { (testimonial.author) }
                    }
                }
            }
        }
    }
}

fn cta_section(cta: &str, closing: Option<&str>, config: &SiteConfig) -> Markup {
    let business = &config.business;
    html! {
        section.cta {
            p.cta-line { (cta) }
            @if !business.booking_url.is_empty() {
                a.cta-button href=(business.booking_url) { "Book a free estimate" }
            } @else {
                a.cta-button href=(tel_href(&business.phone)) { "Call " (business.phone) }
            }
            @if let Some(line) = closing {
                p.cta-closing { (line) }
            }
        }
    }
}

fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

// ============================================================================
// Copy plumbing
// ============================================================================

/// Token values for region-wide pages (home, service). The business home
/// base stands in for the city/area tokens.
fn home_vars(config: &SiteConfig) -> Vec<(&'static str, &str)> {
    let business = &config.business;
    vec![
        ("businessName", business.name.as_str()),
        ("cityName", business.locality.as_str()),
        ("areaName", business.locality.as_str()),
        ("state", business.region.as_str()),
        ("phone", business.phone.as_str()),
    ]
}

/// Token values for a city or area page. On city pages the city name doubles
/// as the area name so pool fragments mentioning `{areaName}` stay readable.
fn city_vars<'a>(
    config: &'a SiteConfig,
    city: &'a City,
    area_name: &'a str,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("businessName", config.business.name.as_str()),
        ("cityName", city.name.as_str()),
        ("areaName", area_name),
        ("state", city.state.as_str()),
        ("phone", config.business.phone.as_str()),
    ]
}

/// Select FAQ entries for a page and fill their placeholders.
fn filled_faqs(key: &str, count: usize, category: &str, vars: &[(&str, &str)]) -> Vec<Faq> {
    copy::faq_questions(key, count, category)
        .into_iter()
        .map(|faq| Faq {
            question: copy::fill(&faq.question, vars),
            answer: copy::fill(&faq.answer, vars),
            category: faq.category,
        })
        .collect()
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_route(manifest: &Manifest, nav: &[NavItem], css_href: &str, route: &PageRoute) -> Markup {
    // Route slugs were derived from this manifest, so lookups cannot fail
    match &route.kind {
        PageKind::Home => render_home(manifest, nav, css_href, route),
        PageKind::Service { service } => {
            let service = manifest.service(service).unwrap();
            render_service_page(manifest, nav, css_href, route, service)
        }
        PageKind::City { city } => {
            let city = manifest.city(city).unwrap();
            render_city_page(manifest, nav, css_href, route, city)
        }
        PageKind::Area { city, area } => {
            let city = manifest.city(city).unwrap();
            let area = city.areas.iter().find(|a| &a.slug == area).unwrap();
            render_area_page(manifest, nav, css_href, route, city, area)
        }
        PageKind::Project { project } => {
            let project = manifest
                .projects
                .iter()
                .find(|p| &p.slug == project)
                .unwrap();
            render_project_page(manifest, nav, css_href, route, project)
        }
    }
}

/// Renders the home page with service cards, city list, and testimonials
fn render_home(manifest: &Manifest, nav: &[NavItem], css_href: &str, route: &PageRoute) -> Markup {
    let config = &manifest.config;
    let business = &config.business;
    let vars = home_vars(config);
    let intro = copy::fill(variants::pick_variant("home-intro", copy::CITY_INTROS), &vars);
    let cta = copy::fill(variants::pick_variant("home-cta", copy::CTA_LINES), &vars);
    let featured: Vec<&Testimonial> = manifest
        .testimonials
        .iter()
        .take(config.copy.testimonial_count)
        .collect();

    let schemas = vec![schema::local_business(config, &manifest.cities)];

    let content = html! {
        (site_header(config, nav, "/"))
        main.home-page {
            section.hero {
                h1 { (business.name) }
                p.intro { (intro) }
            }
            @if !manifest.services.is_empty() {
                section.home-services {
                    h2 { "Our services" }
                    div.card-grid {
                        @for service in &manifest.services {
                            a.card href={ "/services/" (service.slug) "/" } {
                                h3 { (service.name) }
                                @if !service.summary.is_empty() {
                                    p { (service.summary) }
                                }
                            }
                        }
                    }
                }
            }
            @if !manifest.cities.is_empty() {
                section.home-cities {
                    h2 { "Where we work" }
                    ul.city-list {
                        @for city in &manifest.cities {
                            li {
                                a href={ "/" (city.slug) "/" } {
                                    (city.name) ", " (city.state)
                                }
                            }
                        }
                    }
                }
            }
            (testimonial_section(&featured))
            (cta_section(&cta, None, config))
        }
        (site_footer(config))
    };

    let description = if config.site.description.is_empty() {
        intro.clone()
    } else {
        config.site.description.clone()
    };

    base_document(
        &business.name,
        &description,
        &route.absolute_url(&config.site.base_url),
        css_href,
        &schemas,
        Some("home"),
        content,
    )
}

/// Renders a service page with pitch, markdown body, and related projects
fn render_service_page(
    manifest: &Manifest,
    nav: &[NavItem],
    css_href: &str,
    route: &PageRoute,
    service: &Service,
) -> Markup {
    let config = &manifest.config;
    let mut vars = home_vars(config);
    vars.push(("serviceName", service.name.as_str()));
    let pitch_key = format!("{}-pitch", service.slug);
    let pitch = copy::fill(
        variants::pick_variant(&pitch_key, copy::SERVICE_PITCHES),
        &vars,
    );

    let related: Vec<&Project> = manifest
        .projects
        .iter()
        .filter(|p| p.service == service.slug)
        .collect();

    let trail = vec![
        ("Home".to_string(), "/".to_string()),
        (service.name.clone(), route.url_path.clone()),
    ];
    let schemas = vec![
        schema::service(config, service, None),
        breadcrumb_schema(&config.site.base_url, &trail),
    ];

    let content = html! {
        (site_header(config, nav, &route.url_path))
        main.service-page {
            (breadcrumb_trail(&trail))
            header.page-header {
                h1 { (service.name) }
                p.pitch { (pitch) }
            }
            @if !service.body.is_empty() {
                article.service-body {
                    (markdown_to_html(&service.body))
                }
            }
            @if !manifest.cities.is_empty() {
                section.service-cities {
                    h2 { "Where we offer it" }
                    ul.city-list {
                        @for city in &manifest.cities {
                            li {
                                a href={ "/" (city.slug) "/" } {
                                    (service.name) " in " (city.name) ", " (city.state)
                                }
                            }
                        }
                    }
                }
            }
            @if !related.is_empty() {
                section.related-projects {
                    h2 { "Recent projects" }
                    ul.project-list {
                        @for project in &related {
                            li {
                                a href={ "/projects/" (project.slug) "/" } { (project.title) }
                            }
                        }
                    }
                }
            }
        }
        (site_footer(config))
    };

    let description = if service.summary.is_empty() {
        pitch.clone()
    } else {
        service.summary.clone()
    };

    base_document(
        &format!("{}{}", route.title, config.title_suffix()),
        &description,
        &route.absolute_url(&config.site.base_url),
        css_href,
        &schemas,
        Some("service"),
        content,
    )
}

/// Renders a city hub page with intro, per-service pitches, area grid, and FAQ
fn render_city_page(
    manifest: &Manifest,
    nav: &[NavItem],
    css_href: &str,
    route: &PageRoute,
    city: &City,
) -> Markup {
    let config = &manifest.config;
    let vars = city_vars(config, city, &city.name);
    let intro_key = format!("{}-intro", city.slug);
    let intro = copy::fill(variants::pick_variant(&intro_key, copy::CITY_INTROS), &vars);

    let pitches: Vec<(&Service, String)> = manifest
        .services
        .iter()
        .map(|service| {
            let mut service_vars = vars.clone();
            service_vars.push(("serviceName", service.name.as_str()));
            let key = format!("{}-{}-pitch", city.slug, service.slug);
            let pitch = copy::fill(
                variants::pick_variant(&key, copy::SERVICE_PITCHES),
                &service_vars,
            );
            (service, pitch)
        })
        .collect();

    let faqs = filled_faqs(&city.slug, config.copy.faq_count, &city.name, &vars);
    let cta_key = format!("{}-cta", city.slug);
    let cta = copy::fill(variants::pick_variant(&cta_key, copy::CTA_LINES), &vars);
    let closing_key = format!("{}-closing", city.slug);
    let closing = copy::fill(
        variants::pick_variant(&closing_key, copy::CLOSING_LINES),
        &vars,
    );

    let local: Vec<&Testimonial> = manifest
        .testimonials
        .iter()
        .filter(|t| t.city.as_deref() == Some(city.slug.as_str()))
        .take(config.copy.testimonial_count)
        .collect();

    let trail = vec![
        ("Home".to_string(), "/".to_string()),
        (route.title.clone(), route.url_path.clone()),
    ];
    let schemas = vec![
        schema::faq_page(&faqs),
        breadcrumb_schema(&config.site.base_url, &trail),
    ];

    let content = html! {
        (site_header(config, nav, &route.url_path))
        main.city-page {
            (breadcrumb_trail(&trail))
            header.page-header {
                h1 { (route.title) }
                p.intro { (intro) }
            }
            @if !pitches.is_empty() {
                section.city-services {
                    h2 { "Services in " (city.name) }
                    @for (service, pitch) in &pitches {
                        div.service-pitch {
                            h3 {
                                a href={ "/services/" (service.slug) "/" } { (service.name) }
                            }
                            p { (pitch) }
                        }
                    }
                }
            }
            @if !city.areas.is_empty() {
                section.city-areas {
                    h2 { "Neighborhoods we serve" }
                    ul.area-grid {
                        @for area in &city.areas {
                            li {
                                a href={ "/" (city.slug) "/" (area.slug) "/" } { (area.name) }
                            }
                        }
                    }
                }
            }
            (faq_section(&faqs))
            (testimonial_section(&local))
            (cta_section(&cta, Some(&closing), config))
        }
        (site_footer(config))
    };

    base_document(
        &format!("{}{}", route.title, config.title_suffix()),
        &intro,
        &route.absolute_url(&config.site.base_url),
        css_href,
        &schemas,
        Some("city"),
        content,
    )
}

/// Renders a neighborhood landing page
fn render_area_page(
    manifest: &Manifest,
    nav: &[NavItem],
    css_href: &str,
    route: &PageRoute,
    city: &City,
    area: &Area,
) -> Markup {
    let config = &manifest.config;
    let vars = city_vars(config, city, &area.name);
    let intro_key = format!("{}-{}-intro", city.slug, area.slug);
    let intro = copy::fill(variants::pick_variant(&intro_key, copy::AREA_INTROS), &vars);
    let faq_key = format!("{}-{}", city.slug, area.slug);
    let faqs = filled_faqs(&faq_key, config.copy.faq_count, &area.name, &vars);
    let cta_key = format!("{}-{}-cta", city.slug, area.slug);
    let cta = copy::fill(variants::pick_variant(&cta_key, copy::CTA_LINES), &vars);
    let closing_key = format!("{}-{}-closing", city.slug, area.slug);
    let closing = copy::fill(
        variants::pick_variant(&closing_key, copy::CLOSING_LINES),
        &vars,
    );

    let trail = vec![
        ("Home".to_string(), "/".to_string()),
        (
            format!("{}, {}", city.name, city.state),
            format!("/{}/", city.slug),
        ),
        (area.name.clone(), route.url_path.clone()),
    ];
    let schemas = vec![
        schema::faq_page(&faqs),
        breadcrumb_schema(&config.site.base_url, &trail),
    ];

    let content = html! {
        (site_header(config, nav, &route.url_path))
        main.area-page {
            (breadcrumb_trail(&trail))
            header.page-header {
                h1 { (area.name) }
                p.area-context {
                    "Serving " (area.name) " and the rest of " (city.name) ", " (city.state) "."
                }
                p.intro { (intro) }
            }
            @if !manifest.services.is_empty() {
                section.area-services {
                    h2 { "What we do in " (area.name) }
                    ul.service-list {
                        @for service in &manifest.services {
                            li {
                                a href={ "/services/" (service.slug) "/" } { (service.name) }
                            }
                        }
                    }
                }
            }
            (faq_section(&faqs))
            (cta_section(&cta, Some(&closing), config))
        }
        (site_footer(config))
    };

    base_document(
        &format!("{}{}", route.title, config.title_suffix()),
        &intro,
        &route.absolute_url(&config.site.base_url),
        css_href,
        &schemas,
        Some("area"),
        content,
    )
}

/// Renders a case-study page from markdown content
fn render_project_page(
    manifest: &Manifest,
    nav: &[NavItem],
    css_href: &str,
    route: &PageRoute,
    project: &Project,
) -> Markup {
    let config = &manifest.config;
    // Scan validated these references
    let city = manifest.city(&project.city).unwrap();
    let service = manifest.service(&project.service).unwrap();

    let trail = vec![
        ("Home".to_string(), "/".to_string()),
        (
            format!("{}, {}", city.name, city.state),
            format!("/{}/", city.slug),
        ),
        (project.title.clone(), route.url_path.clone()),
    ];
    let schemas = vec![
        schema::service(config, service, Some(city)),
        breadcrumb_schema(&config.site.base_url, &trail),
    ];

    let content = html! {
        (site_header(config, nav, &route.url_path))
        main.project-page {
            (breadcrumb_trail(&trail))
            p.project-meta {
                a href={ "/services/" (service.slug) "/" } { (service.name) }
                " in "
                a href={ "/" (city.slug) "/" } { (city.name) ", " (city.state) }
            }
            article.project-body {
                (markdown_to_html(&project.body))
            }
        }
        (site_footer(config))
    };

    let description = format!(
        "{} project in {}, {} by {}",
        service.name, city.name, city.state, config.business.name
    );

    base_document(
        &format!("{}{}", route.title, config.title_suffix()),
        &description,
        &route.absolute_url(&config.site.base_url),
        css_href,
        &schemas,
        Some("project"),
        content,
    )
}

/// Converts markdown to HTML markup
fn markdown_to_html(markdown: &str) -> Markup {
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}
