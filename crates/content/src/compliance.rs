//! State compliance loader.
//!
//! One record per state under `state-compliance/{CODE}.json`. Absence of a
//! record is a normal outcome (the compliance section is conditionally
//! rendered) but a present-and-malformed file fails the load.

use std::collections::BTreeMap;
use std::path::Path;

use lioncash_core::error::CoreError;

use crate::model::StateComplianceRecord;
use crate::source::read_json;

#[derive(Debug, Clone, Default)]
pub struct ComplianceStore {
    by_code: BTreeMap<String, StateComplianceRecord>,
}

impl ComplianceStore {
    /// Load every compliance record under `state-compliance/`.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let mut by_code = BTreeMap::new();
        if !dir.is_dir() {
            return Ok(Self { by_code });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CoreError::DataUnavailable {
            source_name: "state compliance",
            reason: format!("{}: {e}", dir.display()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| CoreError::DataUnavailable {
                source_name: "state compliance",
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let record: StateComplianceRecord = read_json(&path, "state compliance")?;
            by_code.insert(record.state_code.to_uppercase(), record);
        }

        Ok(Self { by_code })
    }

    pub fn from_records(records: impl IntoIterator<Item = StateComplianceRecord>) -> Self {
        Self {
            by_code: records
                .into_iter()
                .map(|r| (r.state_code.to_uppercase(), r))
                .collect(),
        }
    }

    /// Find the record for a state code, case-insensitively. `None` is a
    /// normal empty state, not an error.
    pub fn find_compliance(&self, state_code: &str) -> Option<&StateComplianceRecord> {
        self.by_code.get(&state_code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_absence_is_none() {
        let record: StateComplianceRecord = serde_json::from_str(
            r#"{
                "state": "Florida", "stateCode": "FL",
                "legalStatus": "Deferred presentment transactions are legal and licensed.",
                "regulatoryBody": "Florida Office of Financial Regulation",
                "regulatoryUrl": "https://flofr.gov",
                "regulatoryPhone": "(850) 487-9687",
                "rateCap": "10% of the amount advanced plus a $5 verification fee",
                "loanLimit": "$500 per advance",
                "consumerProtections": ["One outstanding advance at a time"],
                "disclaimer": "Loans should be used for short-term needs only.",
                "lastVerified": "2025-09-15T00:00:00Z"
            }"#,
        )
        .unwrap();
        let store = ComplianceStore::from_records([record]);

        assert!(store.find_compliance("fl").is_some());
        assert!(store.find_compliance("FL").is_some());
        assert!(store.find_compliance("GA").is_none());
    }

    #[test]
    fn missing_directory_is_an_empty_store() {
        let store = ComplianceStore::load(Path::new("/nonexistent/state-compliance")).unwrap();
        assert!(store.find_compliance("FL").is_none());
    }
}
