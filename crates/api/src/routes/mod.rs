//! Route table assembly.
//!
//! Form endpoints live under `/api`; the rendered page surface and the
//! sitemap sit at the root. [`crate::router::build_app_router`] combines
//! both with the middleware stack.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{forms, pages};
use crate::state::AppState;

/// Form submission endpoints, nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(forms::submit_contact))
        .route("/quote", post(forms::submit_quote))
        .route("/callback", post(forms::submit_callback))
        .route("/subscribe", post(forms::subscribe))
}

/// The rendered page surface.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/apply", get(pages::apply))
        .route("/contact", get(pages::contact))
        .route("/locations", get(pages::locations_index))
        .route("/locations/{state_slug}", get(pages::state_page))
        .route("/locations/{state_slug}/{city_slug}", get(pages::city_page))
        .route("/services", get(pages::services_index))
        .route("/services/{slug}", get(pages::service_page))
        .route("/sitemap.xml", get(pages::sitemap))
}
