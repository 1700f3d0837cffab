//! Shared response envelope types for API handlers.

use serde::Serialize;
use uuid::Uuid;

/// Body returned by every successful form submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    /// ID of the created (or upserted) primary record.
    pub id: Uuid,
}

impl SubmissionResponse {
    pub fn created(id: Uuid) -> Self {
        Self { success: true, id }
    }
}
