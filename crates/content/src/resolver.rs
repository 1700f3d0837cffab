//! Page-data resolution: merges registry, overrides, compliance, and the
//! service taxonomy into one denormalized view per route.
//!
//! Precedence is declarative, not sequential mutation: each page section is
//! resolved by a pure function into a [`Sourced`] value, so "override wins,
//! else synthesize" is visible in the type rather than buried in optional
//! chaining. Views are built fresh per request and never mutated after
//! return. A missing required join key (unknown state, unknown city) is a
//! single `NotFound`; no partial pages are ever emitted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lioncash_core::error::CoreError;
use lioncash_core::phone::format_display;
use lioncash_core::slug::slugify;

use crate::catalog::ContentCatalog;
use crate::model::{
    CityPageOverride, FaqEntry, Hero, LocalProof, LocationRecord, NapBlock, NearbyCity, Review,
    Seo, ServiceRecord, StateComplianceRecord, StateRecord,
};

/// Consumer-protection key points are capped in state-level summaries; city
/// pages show the full authored list.
pub const MAX_STATE_KEY_POINTS: usize = 8;

// ---------------------------------------------------------------------------
// Section provenance
// ---------------------------------------------------------------------------

/// Where a resolved page section came from.
///
/// `Authored` sections are copied verbatim from a [`CityPageOverride`];
/// `Synthesized` sections are derived from registry/profile defaults. Both
/// carry the same payload shape, so serialization is transparent.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Sourced<T> {
    Authored(T),
    Synthesized(T),
}

impl<T> Sourced<T> {
    pub fn get(&self) -> &T {
        match self {
            Self::Authored(v) | Self::Synthesized(v) => v,
        }
    }

    pub fn is_authored(&self) -> bool {
        matches!(self, Self::Authored(_))
    }

    /// Lift an optional override section, falling back to a synthesized
    /// default. The single place the precedence rule is spelled out.
    fn resolve(authored: Option<T>, synthesize: impl FnOnce() -> T) -> Self {
        match authored {
            Some(v) => Self::Authored(v),
            None => Self::Synthesized(synthesize()),
        }
    }
}

// ---------------------------------------------------------------------------
// View types (derived, never persisted)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
}

/// Compliance record transformed into display copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDisplay {
    pub headline: String,
    pub legal_status: String,
    /// Regulatory body, phone, and URL joined into one contact line.
    pub regulatory_contact: String,
    pub rate_cap: String,
    pub loan_limit: String,
    pub key_points: Vec<String>,
    /// Copied verbatim from the source record.
    pub disclaimer: String,
    pub last_verified: DateTime<Utc>,
}

/// The fully merged city page view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCityPage {
    pub city: String,
    pub city_slug: String,
    pub state: String,
    pub state_code: String,
    pub state_slug: String,
    pub canonical_path: String,
    pub seo: Sourced<Seo>,
    pub hero: Sourced<Hero>,
    pub local_proof: Sourced<LocalProof>,
    pub nap: Sourced<NapBlock>,
    pub reviews: Vec<Review>,
    pub faq: Vec<FaqEntry>,
    pub nearby_cities: Vec<NearbyCity>,
    pub compliance: Option<ComplianceDisplay>,
    /// Cross-sell block: the full taxonomy, or the override's curated subset.
    pub services: Vec<ServiceRecord>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Summary row for one city on a state page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityLink {
    pub name: String,
    pub slug: String,
    pub population: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStatePage {
    pub state: String,
    pub state_code: String,
    pub state_slug: String,
    pub canonical_path: String,
    pub hero: Hero,
    pub cities: Vec<CityLink>,
    pub compliance: Option<ComplianceDisplay>,
    pub services: Vec<ServiceRecord>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedServicePage {
    pub service: ServiceRecord,
    pub canonical_path: String,
    pub hero: Hero,
    /// Sibling services for the comparison block, taxonomy order.
    pub siblings: Vec<ServiceRecord>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

// ---------------------------------------------------------------------------
// City pages
// ---------------------------------------------------------------------------

/// Resolve the full page view for `/locations/{state_slug}/{city_slug}`.
///
/// The city must be known to the registry or have an override file; the
/// state must exist in the registry either way.
pub fn resolve_city_page(
    catalog: &ContentCatalog,
    state_slug: &str,
    city_slug: &str,
) -> Result<ResolvedCityPage, CoreError> {
    let state = catalog
        .registry
        .find_state(state_slug)
        .ok_or_else(|| CoreError::not_found("state", state_slug))?;

    let location = catalog.registry.find_city(state_slug, city_slug);
    let overlay = catalog.overrides.find_override(&state.state_code, city_slug);

    if location.is_none() && overlay.is_none() {
        return Err(CoreError::not_found(
            "city",
            format!("{state_slug}/{city_slug}"),
        ));
    }

    let city_name = overlay
        .map(|o| o.city.clone())
        .or_else(|| location.map(|l| l.city.clone()))
        .unwrap_or_default();
    let canonical_path = format!("/locations/{state_slug}/{city_slug}");

    let hero = Sourced::resolve(overlay.and_then(|o| o.hero.clone()), || {
        synthesize_hero(&city_name, &state.state_code)
    });
    let seo = Sourced::resolve(overlay.and_then(|o| o.seo.clone()), || {
        synthesize_seo(&city_name, state)
    });
    let local_proof = Sourced::resolve(overlay.and_then(|o| o.local_proof.clone()), || {
        synthesize_local_proof(&city_name, location)
    });
    let nap = Sourced::resolve(overlay.and_then(|o| o.nap.clone()), || {
        synthesize_nap(catalog, &city_name, state)
    });

    let compliance = catalog
        .compliance
        .find_compliance(&state.state_code)
        .map(|record| compliance_display(record, usize::MAX));

    Ok(ResolvedCityPage {
        city: city_name.clone(),
        city_slug: city_slug.to_string(),
        state: state.state.clone(),
        state_code: state.state_code.clone(),
        state_slug: state_slug.to_string(),
        canonical_path: canonical_path.clone(),
        seo,
        hero,
        local_proof,
        nap,
        reviews: overlay.map(|o| o.reviews.clone()).unwrap_or_default(),
        faq: overlay.map(|o| o.faq.clone()).unwrap_or_default(),
        nearby_cities: overlay.map(|o| o.nearby_cities.clone()).unwrap_or_default(),
        compliance,
        services: cross_sell(catalog, overlay),
        breadcrumbs: vec![
            Breadcrumb {
                label: "Home".to_string(),
                url: "/".to_string(),
            },
            Breadcrumb {
                label: "Locations".to_string(),
                url: "/locations".to_string(),
            },
            Breadcrumb {
                label: state.state.clone(),
                url: format!("/locations/{state_slug}"),
            },
            Breadcrumb {
                label: city_name,
                url: canonical_path,
            },
        ],
    })
}

fn synthesize_hero(city: &str, state_code: &str) -> Hero {
    Hero {
        h1: format!("Cash Advance Loans in {city}, {state_code}"),
        subheadline: format!("Fast, easy cash advance solutions for {city} residents"),
        cta_text: "Apply Now".to_string(),
        cta_url: "/apply".to_string(),
    }
}

fn synthesize_seo(city: &str, state: &StateRecord) -> Seo {
    Seo {
        title: format!(
            "Cash Advance {city}, {} | Lion Cash Advance",
            state.state_code
        ),
        meta_description: format!(
            "Get a cash advance in {city}, {}. Quick approval, transparent terms, \
             and friendly local service. Apply online or call today.",
            state.state
        ),
        keywords: vec![
            format!("cash advance {}", city.to_lowercase()),
            format!("payday loans {}", city.to_lowercase()),
        ],
    }
}

fn synthesize_local_proof(city: &str, location: Option<&LocationRecord>) -> LocalProof {
    let landmarks = location.map(|l| l.landmarks.clone()).unwrap_or_default();
    let highway = location.and_then(|l| l.highways.first().cloned());
    let directions = match (&highway, location.map(|l| l.neighboring_towns.as_slice())) {
        (Some(hwy), Some(towns)) if !towns.is_empty() => format!(
            "Serving {city} and nearby {}, just off {hwy}.",
            towns.join(", ")
        ),
        (Some(hwy), _) => format!("Conveniently located off {hwy} in {city}."),
        _ => format!("Proudly serving the {city} community."),
    };
    LocalProof {
        headline: format!("Your {city} Neighbors Trust Lion Cash Advance"),
        directions,
        landmarks,
        highway,
        neighborhood_name: None,
    }
}

/// Synthesized NAP: business identity with the toll-free main line.
///
/// The toll-free fallback is the site's documented behavior, but a city page
/// rendering it violates the local-proof policy; the catalog validation pass
/// reports every route that would (see `ContentCatalog::validate`).
fn synthesize_nap(catalog: &ContentCatalog, city: &str, state: &StateRecord) -> NapBlock {
    let profile = &catalog.profile;
    NapBlock {
        name: format!("{} — {city}", profile.business_name),
        street: profile.headquarters.street.clone(),
        city: city.to_string(),
        state: state.state_code.clone(),
        zip: profile.headquarters.zip.clone(),
        phone: format_display(&profile.phone),
    }
}

/// The cross-sell block: the override's curated subset when present (in its
/// authored order), otherwise the full taxonomy in source order.
fn cross_sell(catalog: &ContentCatalog, overlay: Option<&CityPageOverride>) -> Vec<ServiceRecord> {
    match overlay.and_then(|o| o.service_slugs.as_ref()) {
        Some(slugs) => slugs
            .iter()
            .filter_map(|slug| {
                let hit = catalog.services.find_service(slug);
                if hit.is_none() {
                    tracing::warn!(slug = %slug, "Curated service slug not in taxonomy; skipping");
                }
                hit.cloned()
            })
            .collect(),
        None => catalog.services.list_services().to_vec(),
    }
}

// ---------------------------------------------------------------------------
// State pages
// ---------------------------------------------------------------------------

/// Resolve the page view for `/locations/{state_slug}`.
pub fn resolve_state_page(
    catalog: &ContentCatalog,
    state_slug: &str,
) -> Result<ResolvedStatePage, CoreError> {
    let state = catalog
        .registry
        .find_state(state_slug)
        .ok_or_else(|| CoreError::not_found("state", state_slug))?;

    let cities = state
        .cities
        .iter()
        .map(|c| CityLink {
            name: c.city.clone(),
            slug: slugify(&c.city),
            population: Some(c.population),
        })
        .collect();

    let compliance = catalog
        .compliance
        .find_compliance(&state.state_code)
        .map(|record| compliance_display(record, MAX_STATE_KEY_POINTS));

    Ok(ResolvedStatePage {
        state: state.state.clone(),
        state_code: state.state_code.clone(),
        state_slug: state_slug.to_string(),
        canonical_path: format!("/locations/{state_slug}"),
        hero: Hero {
            h1: format!("Cash Advance Loans in {}", state.state),
            subheadline: format!(
                "Fast, easy cash advance solutions for {} residents",
                state.state
            ),
            cta_text: "Apply Now".to_string(),
            cta_url: "/apply".to_string(),
        },
        cities,
        compliance,
        services: catalog.services.list_services().to_vec(),
        breadcrumbs: vec![
            Breadcrumb {
                label: "Home".to_string(),
                url: "/".to_string(),
            },
            Breadcrumb {
                label: "Locations".to_string(),
                url: "/locations".to_string(),
            },
            Breadcrumb {
                label: state.state.clone(),
                url: format!("/locations/{state_slug}"),
            },
        ],
    })
}

// ---------------------------------------------------------------------------
// Service pages
// ---------------------------------------------------------------------------

/// Resolve the page view for `/services/{slug}`. No location dimension, so
/// no override store involvement.
pub fn resolve_service_page(
    catalog: &ContentCatalog,
    slug: &str,
) -> Result<ResolvedServicePage, CoreError> {
    let service = catalog
        .services
        .find_service(slug)
        .ok_or_else(|| CoreError::not_found("service", slug))?
        .clone();

    let siblings = catalog
        .services
        .list_services()
        .iter()
        .filter(|s| s.slug != slug)
        .cloned()
        .collect();

    Ok(ResolvedServicePage {
        canonical_path: format!("/services/{slug}"),
        hero: Hero {
            h1: service.name.clone(),
            subheadline: service.short_description.clone(),
            cta_text: "Apply Now".to_string(),
            cta_url: "/apply".to_string(),
        },
        breadcrumbs: vec![
            Breadcrumb {
                label: "Home".to_string(),
                url: "/".to_string(),
            },
            Breadcrumb {
                label: "Services".to_string(),
                url: "/services".to_string(),
            },
            Breadcrumb {
                label: service.name.clone(),
                url: format!("/services/{slug}"),
            },
        ],
        siblings,
        service,
    })
}

// ---------------------------------------------------------------------------
// Compliance display copy
// ---------------------------------------------------------------------------

fn compliance_display(record: &StateComplianceRecord, max_key_points: usize) -> ComplianceDisplay {
    ComplianceDisplay {
        headline: format!("Cash Advance Regulations in {}", record.state),
        legal_status: record.legal_status.clone(),
        regulatory_contact: format!(
            "{} · {} · {}",
            record.regulatory_body,
            format_display(&record.regulatory_phone),
            record.regulatory_url
        ),
        rate_cap: record.rate_cap.clone(),
        loan_limit: record.loan_limit.clone(),
        key_points: record
            .consumer_protections
            .iter()
            .take(max_key_points)
            .cloned()
            .collect(),
        disclaimer: record.disclaimer.clone(),
        last_verified: record.last_verified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::enumerate_city_routes;
    use crate::testdata;
    use assert_matches::assert_matches;

    #[test]
    fn override_hero_beats_the_synthesized_default() {
        let catalog = testdata::catalog();
        let view = resolve_city_page(&catalog, "florida", "miami").unwrap();

        assert!(view.hero.is_authored());
        assert_eq!(view.hero.get().h1, "Miami's Trusted Cash Advance Partner");
        assert_ne!(view.hero.get().h1, "Cash Advance Loans in Miami, FL");
    }

    #[test]
    fn registry_only_city_gets_synthesized_sections() {
        let catalog = testdata::catalog();
        let view = resolve_city_page(&catalog, "florida", "tampa").unwrap();

        assert!(!view.hero.is_authored());
        assert_eq!(view.hero.get().h1, "Cash Advance Loans in Tampa, FL");
        assert!(view.reviews.is_empty());
        assert!(view.faq.is_empty());
        // Synthesized NAP falls back to the national toll-free line.
        assert_eq!(view.nap.get().phone, "(855) 546-6227");
        // Local proof pulls registry landmarks and highway.
        let proof = view.local_proof.get();
        assert_eq!(proof.landmarks, ["City Hall"]);
        assert_eq!(proof.highway.as_deref(), Some("I-95"));
    }

    #[test]
    fn every_registry_city_resolves_with_four_breadcrumbs_ending_in_the_city() {
        let catalog = testdata::catalog();
        for state in catalog.registry.list_states() {
            let state_slug = lioncash_core::slug::slugify(&state.state);
            for city in &state.cities {
                let city_slug = lioncash_core::slug::slugify(&city.city);
                let view = resolve_city_page(&catalog, &state_slug, &city_slug).unwrap();
                assert_eq!(view.breadcrumbs.len(), 4);
                assert_eq!(view.breadcrumbs.last().unwrap().label, city.city);
                assert_eq!(view.breadcrumbs[0].label, "Home");
            }
        }
    }

    #[test]
    fn override_only_city_is_resolvable() {
        let catalog = testdata::catalog();
        let view = resolve_city_page(&catalog, "florida", "key-largo").unwrap();
        assert_eq!(view.city, "Key Largo");
        assert!(view.hero.is_authored());
    }

    #[test]
    fn unknown_state_and_city_are_not_found() {
        let catalog = testdata::catalog();
        assert_matches!(
            resolve_city_page(&catalog, "georgia", "atlanta"),
            Err(CoreError::NotFound { entity: "state", .. })
        );
        assert_matches!(
            resolve_city_page(&catalog, "florida", "nonexistent-city"),
            Err(CoreError::NotFound { entity: "city", .. })
        );
    }

    #[test]
    fn compliance_is_attached_in_full_on_city_pages() {
        let catalog = testdata::catalog();
        let view = resolve_city_page(&catalog, "florida", "miami").unwrap();
        let compliance = view.compliance.unwrap();
        assert_eq!(compliance.key_points.len(), 10);
        assert!(compliance.regulatory_contact.contains("Florida Office of Financial Regulation"));
        assert!(compliance.regulatory_contact.contains("(850) 487-9687"));
        assert_eq!(
            compliance.disclaimer,
            "Loans should be used for short-term financial needs only."
        );
    }

    #[test]
    fn state_page_truncates_key_points_to_eight() {
        let catalog = testdata::catalog();
        let view = resolve_state_page(&catalog, "florida").unwrap();
        let compliance = view.compliance.unwrap();
        assert_eq!(compliance.key_points.len(), MAX_STATE_KEY_POINTS);
        assert_eq!(compliance.key_points[0], "Protection clause 1");
    }

    #[test]
    fn state_page_lists_cities_and_three_breadcrumbs() {
        let catalog = testdata::catalog();
        let view = resolve_state_page(&catalog, "florida").unwrap();
        let slugs: Vec<_> = view.cities.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["miami", "tampa"]);
        assert_eq!(view.breadcrumbs.len(), 3);
        assert_eq!(view.hero.h1, "Cash Advance Loans in Florida");
    }

    #[test]
    fn missing_compliance_record_is_a_normal_empty_state() {
        let mut catalog = testdata::catalog();
        catalog.compliance = crate::compliance::ComplianceStore::default();
        let view = resolve_city_page(&catalog, "florida", "miami").unwrap();
        assert!(view.compliance.is_none());
    }

    #[test]
    fn cross_sell_defaults_to_full_taxonomy_in_source_order() {
        let catalog = testdata::catalog();
        let view = resolve_city_page(&catalog, "florida", "tampa").unwrap();
        let slugs: Vec<_> = view.services.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["payday-loans", "installment-loans"]);
    }

    #[test]
    fn cross_sell_honors_a_curated_subset() {
        let mut overlay = testdata::miami_override();
        overlay.service_slugs = Some(vec![
            "installment-loans".to_string(),
            "not-a-real-service".to_string(),
        ]);
        let mut catalog = testdata::catalog();
        catalog.overrides =
            crate::overrides::OverrideStore::from_records([("miami-fl".to_string(), overlay)]);

        let view = resolve_city_page(&catalog, "florida", "miami").unwrap();
        let slugs: Vec<_> = view.services.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["installment-loans"]);
    }

    #[test]
    fn service_page_has_siblings_and_breadcrumbs() {
        let catalog = testdata::catalog();
        let view = resolve_service_page(&catalog, "payday-loans").unwrap();
        assert_eq!(view.service.name, "Payday Loans");
        assert_eq!(view.siblings.len(), 1);
        assert_eq!(view.siblings[0].slug, "installment-loans");
        assert_eq!(view.breadcrumbs.len(), 3);
        assert_matches!(
            resolve_service_page(&catalog, "title-loans"),
            Err(CoreError::NotFound { entity: "service", .. })
        );
    }

    #[test]
    fn all_enumerated_registry_routes_resolve() {
        let catalog = testdata::catalog();
        for route in enumerate_city_routes(&catalog) {
            resolve_city_page(&catalog, &route.state_slug, &route.city_slug)
                .unwrap_or_else(|e| panic!("{route:?} should resolve: {e}"));
        }
    }
}
