//! Static path enumeration for pre-rendering.
//!
//! City routes are the *union* of registry cities and override files -- an
//! override may introduce a city the base registry does not know, and it is
//! still routable. Output order is sorted (state, then city) so repeated
//! builds produce identical route lists.

use std::collections::BTreeSet;

use lioncash_core::slug::slugify;
use serde::Serialize;

use crate::catalog::ContentCatalog;

/// One `/locations/{state}/{city}` route parameter pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRoute {
    pub state_slug: String,
    pub city_slug: String,
}

/// Every city route, deduplicated by (state, city) and sorted.
pub fn enumerate_city_routes(catalog: &ContentCatalog) -> Vec<CityRoute> {
    let mut routes = BTreeSet::new();

    for state in catalog.registry.list_states() {
        let state_slug = slugify(&state.state);
        for city in &state.cities {
            routes.insert(CityRoute {
                state_slug: state_slug.clone(),
                city_slug: slugify(&city.city),
            });
        }
    }

    for overlay in catalog.overrides.list_all() {
        routes.insert(CityRoute {
            state_slug: overlay.state_slug.clone(),
            city_slug: overlay.slug.clone(),
        });
    }

    routes.into_iter().collect()
}

/// Every `/locations/{state}` route, sorted.
pub fn enumerate_state_routes(catalog: &ContentCatalog) -> Vec<String> {
    let mut slugs: Vec<String> = catalog
        .registry
        .list_states()
        .iter()
        .map(|s| slugify(&s.state))
        .collect();
    slugs.sort();
    slugs.dedup();
    slugs
}

/// Every `/services/{slug}` route, in taxonomy order (already unique).
pub fn enumerate_service_routes(catalog: &ContentCatalog) -> Vec<String> {
    catalog
        .services
        .list_services()
        .iter()
        .map(|s| s.slug.clone())
        .collect()
}
