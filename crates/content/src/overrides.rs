//! City page override store.
//!
//! Override files live in `city-pages/` and are keyed by file stem. Two
//! naming conventions coexist in the authored corpus: `{slug}-{st}.json`
//! (state-qualified, unambiguous) and `{slug}.json` (city alone, ambiguous
//! across states). Lookup prefers the state-qualified stem; when both files
//! exist for the same city a warning names them, since the unqualified one
//! is then dead weight that should be merged or deleted.

use std::collections::BTreeMap;
use std::path::Path;

use lioncash_core::error::CoreError;

use crate::model::CityPageOverride;
use crate::source::read_json;

/// All override files for the site, loaded once and keyed by file stem.
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    by_stem: BTreeMap<String, CityPageOverride>,
}

impl OverrideStore {
    /// Load every `*.json` file under `city-pages/`.
    ///
    /// A missing directory is a normal empty state (a site with zero
    /// hand-authored pages); a file that fails to parse is
    /// `DataUnavailable` -- bad authored content must not be skipped
    /// silently.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let mut by_stem = BTreeMap::new();
        if !dir.is_dir() {
            return Ok(Self { by_stem });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CoreError::DataUnavailable {
            source_name: "city page overrides",
            reason: format!("{}: {e}", dir.display()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CoreError::DataUnavailable {
                source_name: "city page overrides",
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let record: CityPageOverride = read_json(&path, "city page overrides")?;
            by_stem.insert(stem.to_string(), record);
        }

        Ok(Self { by_stem })
    }

    /// Build a store directly from stem-keyed records (test seams).
    pub fn from_records(records: impl IntoIterator<Item = (String, CityPageOverride)>) -> Self {
        Self {
            by_stem: records.into_iter().collect(),
        }
    }

    /// Find the override for a (state, city) pair.
    ///
    /// Tries `{city_slug}-{state_code.lowercase()}` first, then the bare
    /// `{city_slug}`. The state-qualified key is canonical: if both exist
    /// the qualified one wins and the ambiguity is logged.
    pub fn find_override(&self, state_code: &str, city_slug: &str) -> Option<&CityPageOverride> {
        let qualified = format!("{city_slug}-{}", state_code.to_lowercase());

        match (self.by_stem.get(&qualified), self.by_stem.get(city_slug)) {
            (Some(record), Some(_)) => {
                tracing::warn!(
                    preferred = %qualified,
                    shadowed = %city_slug,
                    "Both state-qualified and bare override files exist; using the qualified one"
                );
                Some(record)
            }
            (Some(record), None) => Some(record),
            (None, bare) => bare,
        }
    }

    /// Every override present, in stable (stem) order -- independent of the
    /// registry, because an override may introduce a city the registry does
    /// not know.
    pub fn list_all(&self) -> impl Iterator<Item = &CityPageOverride> {
        self.by_stem.values()
    }

    pub fn len(&self) -> usize {
        self.by_stem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_stem.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(city: &str, state_code: &str) -> CityPageOverride {
        serde_json::from_value(serde_json::json!({
            "city": city,
            "slug": lioncash_core::slug::slugify(city),
            "state": "Florida",
            "stateCode": state_code,
            "stateSlug": "florida",
            "hero": {
                "h1": format!("Trusted Cash Advance in {city}"),
                "subheadline": "Same-day funding",
                "ctaText": "Apply Now",
                "ctaUrl": "/apply"
            }
        }))
        .unwrap()
    }

    #[test]
    fn prefers_the_state_qualified_stem() {
        let store = OverrideStore::from_records([
            ("miami".to_string(), minimal("Miami (bare)", "FL")),
            ("miami-fl".to_string(), minimal("Miami", "FL")),
        ]);
        let hit = store.find_override("FL", "miami").unwrap();
        assert_eq!(hit.city, "Miami");
    }

    #[test]
    fn falls_back_to_the_bare_stem() {
        let store = OverrideStore::from_records([("hialeah".to_string(), minimal("Hialeah", "FL"))]);
        assert!(store.find_override("FL", "hialeah").is_some());
        assert!(store.find_override("FL", "doral").is_none());
    }

    #[test]
    fn missing_directory_is_an_empty_store() {
        let store = OverrideStore::load(Path::new("/nonexistent/city-pages")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn loads_and_enumerates_files() {
        let dir = tempfile::tempdir().unwrap();
        for (stem, city) in [("miami-fl", "Miami"), ("tampa-fl", "Tampa")] {
            let record = minimal(city, "FL");
            std::fs::write(
                dir.path().join(format!("{stem}.json")),
                serde_json::to_vec(&record).unwrap(),
            )
            .unwrap();
        }
        // Non-JSON files are ignored.
        std::fs::write(dir.path().join("README.md"), b"notes").unwrap();

        let store = OverrideStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        let cities: Vec<_> = store.list_all().map(|o| o.city.as_str()).collect();
        assert_eq!(cities, ["Miami", "Tampa"]);
    }

    #[test]
    fn malformed_override_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("miami-fl.json"), b"{not json").unwrap();
        assert!(OverrideStore::load(dir.path()).is_err());
    }
}
