//! Structured data (JSON-LD) builders.
//!
//! Pure functions assembling schema.org objects for the generated pages.
//! Each returns a `serde_json::Value`; the generate stage serializes it into
//! a `<script type="application/ld+json">` block.
//!
//! These builders know nothing about variant selection. FAQ entries arrive
//! here with their copy already selected and filled in.

use crate::config::SiteConfig;
use crate::types::{City, Faq, Service};
use serde_json::{Value, json};

/// Business-level record for the home page.
///
/// `HomeAndConstructionBusiness` is the schema.org type for contractors;
/// `areaServed` lists every city the site covers.
pub fn local_business(config: &SiteConfig, cities: &[City]) -> Value {
    let business = &config.business;
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "HomeAndConstructionBusiness",
        "name": business.name,
        "telephone": business.phone,
        "url": config.site.base_url,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": business.street,
            "addressLocality": business.locality,
            "addressRegion": business.region,
            "postalCode": business.postal,
        },
        "areaServed": cities
            .iter()
            .map(|c| json!({ "@type": "City", "name": c.name }))
            .collect::<Vec<_>>(),
    });
    if !business.email.is_empty() {
        value["email"] = json!(business.email);
    }
    value
}

/// Service record, optionally scoped to one city.
pub fn service(config: &SiteConfig, service: &Service, city: Option<&City>) -> Value {
    let name = match city {
        Some(city) => format!("{} in {}", service.name, city.name),
        None => service.name.clone(),
    };
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": name,
        "serviceType": service.name,
        "provider": {
            "@type": "HomeAndConstructionBusiness",
            "name": config.business.name,
            "telephone": config.business.phone,
        },
    });
    if !service.summary.is_empty() {
        value["description"] = json!(service.summary);
    }
    if let Some(city) = city {
        value["areaServed"] = json!({ "@type": "City", "name": city.name });
    }
    value
}

/// FAQ record for city and area pages.
pub fn faq_page(faqs: &[Faq]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": faq.answer,
                    },
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Breadcrumb trail. `links` are `(name, absolute_url)` pairs in order;
/// positions are 1-based per the schema.org contract.
pub fn breadcrumbs(links: &[(&str, &str)]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": links
            .iter()
            .enumerate()
            .map(|(i, (name, url))| {
                json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "name": name,
                    "item": url,
                })
            })
            .collect::<Vec<_>>(),
    })
}
