//! Small helpers for reading JSON content sources.

use std::path::Path;

use lioncash_core::error::CoreError;
use serde::de::DeserializeOwned;

/// Read and parse one JSON file, all-or-nothing.
///
/// Both a missing file and a parse failure surface as `DataUnavailable`;
/// callers for which absence is a normal state must check existence first.
pub(crate) fn read_json<T: DeserializeOwned>(
    path: &Path,
    source_name: &'static str,
) -> Result<T, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CoreError::DataUnavailable {
        source_name,
        reason: format!("{}: {e}", path.display()),
    })?;
    serde_json::from_str(&raw).map_err(|e| CoreError::DataUnavailable {
        source_name,
        reason: format!("{}: {e}", path.display()),
    })
}
