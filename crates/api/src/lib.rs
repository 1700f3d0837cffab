//! HTTP surface of the Lion Cash Advance platform: the rendered page
//! routes, the form-submission API, the sitemap, and the health check.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
