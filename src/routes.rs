//! Route planning.
//!
//! Pure derivation of the full page set from a scan manifest. Both the
//! generate stage and the `routes` CLI command consume this, so the page
//! inventory is computed in exactly one place.
//!
//! Route order is deterministic: home, then services, cities, areas (in
//! city file order), projects. Within each group the manifest's nav order
//! applies (number prefix, then slug).

use crate::scan::Manifest;
use crate::types::NavItem;
use std::path::PathBuf;

/// What a route renders. Slugs index back into the manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum PageKind {
    Home,
    Service { service: String },
    City { city: String },
    Area { city: String, area: String },
    Project { project: String },
}

/// One page of the generated site.
#[derive(Debug, Clone)]
pub struct PageRoute {
    pub kind: PageKind,
    /// Site-absolute URL path with trailing slash (`/`, `/services/siding/`).
    pub url_path: String,
    /// Output file relative to the output root.
    pub output_path: PathBuf,
    pub title: String,
}

impl PageRoute {
    /// Absolute URL for sitemaps and canonical links.
    pub fn absolute_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.url_path)
    }
}

/// Derive every page of the site from the manifest.
pub fn routes(manifest: &Manifest) -> Vec<PageRoute> {
    let mut routes = Vec::new();

    routes.push(PageRoute {
        kind: PageKind::Home,
        url_path: "/".to_string(),
        output_path: PathBuf::from("index.html"),
        title: manifest.config.business.name.clone(),
    });

    for service in &manifest.services {
        routes.push(PageRoute {
            kind: PageKind::Service {
                service: service.slug.clone(),
            },
            url_path: format!("/services/{}/", service.slug),
            output_path: PathBuf::from("services")
                .join(&service.slug)
                .join("index.html"),
            title: service.name.clone(),
        });
    }

    for city in &manifest.cities {
        routes.push(PageRoute {
            kind: PageKind::City {
                city: city.slug.clone(),
            },
            url_path: format!("/{}/", city.slug),
            output_path: PathBuf::from(&city.slug).join("index.html"),
            title: format!("{}, {}", city.name, city.state),
        });

        for area in &city.areas {
            routes.push(PageRoute {
                kind: PageKind::Area {
                    city: city.slug.clone(),
                    area: area.slug.clone(),
                },
                url_path: format!("/{}/{}/", city.slug, area.slug),
                output_path: PathBuf::from(&city.slug)
                    .join(&area.slug)
                    .join("index.html"),
                title: format!("{}, {}, {}", area.name, city.name, city.state),
            });
        }
    }

    for project in &manifest.projects {
        routes.push(PageRoute {
            kind: PageKind::Project {
                project: project.slug.clone(),
            },
            url_path: format!("/projects/{}/", project.slug),
            output_path: PathBuf::from("projects")
                .join(&project.slug)
                .join("index.html"),
            title: project.title.clone(),
        });
    }

    routes
}

/// Header navigation: home, nav-visible services, nav-visible cities.
pub fn nav_items(manifest: &Manifest) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        title: "Home".to_string(),
        path: "/".to_string(),
    }];

    for service in manifest.services.iter().filter(|s| s.in_nav) {
        items.push(NavItem {
            title: service.name.clone(),
            path: format!("/services/{}/", service.slug),
        });
    }

    for city in manifest.cities.iter().filter(|c| c.in_nav) {
        items.push(NavItem {
            title: format!("{}, {}", city.name, city.state),
            path: format!("/{}/", city.slug),
        });
    }

    items
}
