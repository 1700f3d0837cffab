//! Page handlers: the server-rendered marketing surface.
//!
//! Every location and service page is resolved on demand from the shared
//! [`ContentCatalog`](lioncash_content::ContentCatalog) and rendered to
//! plain HTML. Unknown slugs surface as 404s through `CoreError::NotFound`.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};

use lioncash_content::resolver::{resolve_city_page, resolve_service_page, resolve_state_page};
use lioncash_content::routes::{
    enumerate_city_routes, enumerate_service_routes, enumerate_state_routes,
};

use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home(
        &state.catalog.profile,
        state.catalog.services.list_services(),
    ))
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(render::about(&state.catalog.profile))
}

pub async fn contact(State(state): State<AppState>) -> Html<String> {
    Html(render::contact(&state.catalog.profile))
}

pub async fn apply(State(state): State<AppState>) -> Html<String> {
    Html(render::apply(&state.catalog.profile))
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

pub async fn locations_index(State(state): State<AppState>) -> Html<String> {
    Html(render::locations_index(state.catalog.registry.list_states()))
}

pub async fn state_page(
    State(state): State<AppState>,
    Path(state_slug): Path<String>,
) -> AppResult<Html<String>> {
    let page = resolve_state_page(&state.catalog, &state_slug)?;
    Ok(Html(render::state_page(&page)))
}

pub async fn city_page(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
) -> AppResult<Html<String>> {
    let page = resolve_city_page(&state.catalog, &state_slug, &city_slug)?;
    Ok(Html(render::city_page(&page)))
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

pub async fn services_index(State(state): State<AppState>) -> Html<String> {
    Html(render::services_index(state.catalog.services.list_services()))
}

pub async fn service_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    let page = resolve_service_page(&state.catalog, &slug)?;
    Ok(Html(render::service_page(&page)))
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

/// Every crawlable path on the site, in stable order: static pages first,
/// then services, then states, then cities.
pub fn all_paths(state: &AppState) -> Vec<String> {
    let catalog = &state.catalog;
    let mut paths = vec![
        "/".to_string(),
        "/about".to_string(),
        "/apply".to_string(),
        "/contact".to_string(),
        "/locations".to_string(),
        "/services".to_string(),
    ];
    for slug in enumerate_service_routes(catalog) {
        paths.push(format!("/services/{slug}"));
    }
    for slug in enumerate_state_routes(catalog) {
        paths.push(format!("/locations/{slug}"));
    }
    for route in enumerate_city_routes(catalog) {
        paths.push(format!("/locations/{}/{}", route.state_slug, route.city_slug));
    }
    paths
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = render::sitemap(&state.config.site_base_url, &all_paths(&state));
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
