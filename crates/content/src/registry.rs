//! Location registry loader.
//!
//! Parses the canonical state -> city list from `locations.json`. The load is
//! all-or-nothing: a missing or malformed file is `DataUnavailable`, never a
//! partial registry.

use std::path::Path;

use lioncash_core::error::CoreError;
use lioncash_core::slug::slugify;

use crate::model::{LocationRecord, LocationsDocument, StateRecord};
use crate::source::read_json;

/// The parsed, immutable location registry.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    states: Vec<StateRecord>,
}

impl LocationRegistry {
    /// Load the registry from `locations.json`.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let doc: LocationsDocument = read_json(path, "location registry")?;
        Ok(Self { states: doc.states })
    }

    /// Build a registry directly from state records (test seams).
    pub fn from_states(states: Vec<StateRecord>) -> Self {
        Self { states }
    }

    /// All served states, in source order.
    pub fn list_states(&self) -> &[StateRecord] {
        &self.states
    }

    /// Look up a state by its display-name slug ("florida").
    pub fn find_state(&self, state_slug: &str) -> Option<&StateRecord> {
        self.states.iter().find(|s| slugify(&s.state) == state_slug)
    }

    /// Look up a state by its 2-letter code, case-insensitively.
    pub fn find_state_by_code(&self, state_code: &str) -> Option<&StateRecord> {
        self.states
            .iter()
            .find(|s| s.state_code.eq_ignore_ascii_case(state_code))
    }

    /// Cities of one state, in source order. Empty for an unknown state.
    pub fn list_cities(&self, state_slug: &str) -> &[LocationRecord] {
        self.find_state(state_slug)
            .map(|s| s.cities.as_slice())
            .unwrap_or(&[])
    }

    /// Look up one city within a state by slug.
    pub fn find_city(&self, state_slug: &str, city_slug: &str) -> Option<&LocationRecord> {
        self.list_cities(state_slug)
            .iter()
            .find(|c| slugify(&c.city) == city_slug)
    }
}
