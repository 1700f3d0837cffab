//! The location/content resolution pipeline.
//!
//! Loads the canonical location registry, per-city override files, the loan
//! service taxonomy, and per-state compliance records from a data directory,
//! and merges them into denormalized page views for the rendering layer.
//!
//! All loaders are read-only and all-or-nothing: a missing or malformed
//! registry is fatal at load time, never a partial result. Absence of
//! *optional* data (an override file, a compliance record) is a normal
//! empty state. Everything loaded lives in a [`catalog::ContentCatalog`]
//! built once at startup and injected into callers; there is no module
//! global state.

pub mod catalog;
pub mod compliance;
pub mod model;
pub mod overrides;
pub mod registry;
pub mod resolver;
pub mod routes;
pub mod services;
mod source;
#[cfg(test)]
pub(crate) mod testdata;

pub use catalog::{ContentCatalog, ContentPaths};
