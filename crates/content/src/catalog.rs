//! The content catalog: every data source loaded once, validated, and
//! injected wherever page data is resolved.
//!
//! This replaces the in-process module caches of the original site with one
//! explicit object built at startup. Loaders run eagerly; required sources
//! (registry, taxonomy, business profile) fail the whole load, while
//! optional sources (overrides, compliance) default to empty stores.

use std::fmt;
use std::path::{Path, PathBuf};

use lioncash_core::error::CoreError;
use lioncash_core::phone::is_toll_free;
use lioncash_core::slug::slugify;

use crate::compliance::ComplianceStore;
use crate::model::BusinessProfile;
use crate::overrides::OverrideStore;
use crate::registry::LocationRegistry;
use crate::resolver::resolve_city_page;
use crate::routes::enumerate_city_routes;
use crate::services::ServiceTaxonomy;
use crate::source::read_json;

/// Locations of the content sources inside a data directory.
#[derive(Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl ContentPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn locations(&self) -> PathBuf {
        self.data_dir.join("locations.json")
    }

    pub fn city_pages(&self) -> PathBuf {
        self.data_dir.join("city-pages")
    }

    pub fn services(&self) -> PathBuf {
        self.data_dir.join("services.json")
    }

    pub fn state_compliance(&self) -> PathBuf {
        self.data_dir.join("state-compliance")
    }

    pub fn business_profile(&self) -> PathBuf {
        self.data_dir.join("business-profile.json")
    }
}

/// All loaded content, read-only and safe to share across workers.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    pub registry: LocationRegistry,
    pub overrides: OverrideStore,
    pub services: ServiceTaxonomy,
    pub compliance: ComplianceStore,
    pub profile: BusinessProfile,
}

impl ContentCatalog {
    /// Load every source under the data directory.
    pub fn load(paths: &ContentPaths) -> Result<Self, CoreError> {
        let registry = LocationRegistry::load(&paths.locations())?;
        let overrides = OverrideStore::load(&paths.city_pages())?;
        let services = ServiceTaxonomy::load(&paths.services())?;
        let compliance = ComplianceStore::load(&paths.state_compliance())?;
        let profile: BusinessProfile =
            read_json(&paths.business_profile(), "business profile")?;

        tracing::info!(
            states = registry.list_states().len(),
            overrides = overrides.len(),
            services = services.list_services().len(),
            "Content catalog loaded"
        );

        Ok(Self {
            registry,
            overrides,
            services,
            compliance,
            profile,
        })
    }

    /// Assemble a catalog from already-built parts (test seams).
    pub fn from_parts(
        registry: LocationRegistry,
        overrides: OverrideStore,
        services: ServiceTaxonomy,
        compliance: ComplianceStore,
        profile: BusinessProfile,
    ) -> Self {
        Self {
            registry,
            overrides,
            services,
            compliance,
            profile,
        }
    }

    /// Run the configuration checks that must fail loudly rather than ship
    /// a defective page:
    ///
    /// - a city page whose resolved NAP phone is toll-free (the local-proof
    ///   policy requires a local number; the synthesized fallback to the
    ///   national line is exactly the case override authors must fix);
    /// - two distinct city names in one state collapsing to the same slug.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for route in enumerate_city_routes(self) {
            let Ok(view) = resolve_city_page(self, &route.state_slug, &route.city_slug) else {
                // Routes from overrides in unknown states resolve to 404;
                // that is the router's concern, not a content defect here.
                continue;
            };
            let phone = &view.nap.get().phone;
            if is_toll_free(phone) {
                issues.push(ValidationIssue::TollFreeCityPhone {
                    state_slug: route.state_slug.clone(),
                    city_slug: route.city_slug.clone(),
                    phone: phone.clone(),
                });
            }
        }

        for state in self.registry.list_states() {
            let mut seen: std::collections::BTreeMap<String, &str> = Default::default();
            for city in &state.cities {
                let slug = slugify(&city.city);
                if let Some(existing) = seen.get(&slug) {
                    if *existing != city.city {
                        issues.push(ValidationIssue::SlugCollision {
                            state: state.state.clone(),
                            slug: slug.clone(),
                            first: existing.to_string(),
                            second: city.city.clone(),
                        });
                    }
                } else {
                    seen.insert(slug, &city.city);
                }
            }
        }

        issues
    }
}

/// A content configuration defect found by [`ContentCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A city page would render a toll-free NAP phone.
    TollFreeCityPhone {
        state_slug: String,
        city_slug: String,
        phone: String,
    },
    /// Two city names in one state derive the same slug.
    SlugCollision {
        state: String,
        slug: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TollFreeCityPhone {
                state_slug,
                city_slug,
                phone,
            } => write!(
                f,
                "city page /locations/{state_slug}/{city_slug} would render toll-free \
                 phone {phone}; supply a local number in its override"
            ),
            Self::SlugCollision {
                state,
                slug,
                first,
                second,
            } => write!(
                f,
                "cities '{first}' and '{second}' in {state} both derive slug '{slug}'"
            ),
        }
    }
}

/// Convenience for loading straight from a directory path.
pub fn load_catalog(data_dir: &Path) -> Result<ContentCatalog, CoreError> {
    ContentCatalog::load(&ContentPaths::new(data_dir))
}
