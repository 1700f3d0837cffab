//! Service taxonomy loader.
//!
//! Pure read over `services.json`. List order is source order, not
//! alphabetical: page components put featured services first by relying on
//! the authored array order.

use std::path::Path;

use lioncash_core::error::CoreError;

use crate::model::{ServiceRecord, ServicesDocument};
use crate::source::read_json;

#[derive(Debug, Clone)]
pub struct ServiceTaxonomy {
    services: Vec<ServiceRecord>,
}

impl ServiceTaxonomy {
    /// Load the taxonomy from `services.json`. All-or-nothing.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let doc: ServicesDocument = read_json(path, "service taxonomy")?;
        Ok(Self {
            services: doc.services,
        })
    }

    pub fn from_services(services: Vec<ServiceRecord>) -> Self {
        Self { services }
    }

    /// All services in authored (featured-first) order.
    pub fn list_services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn find_service(&self, slug: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.slug == slug)
    }
}
