//! CRM lead rows.
//!
//! Leads are append-then-update records: created by the public form
//! endpoints (or manually by operators), moved through the status lifecycle
//! by the CRM, and never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lioncash_core::lead::{LeadSource, LeadStatus};

/// A lead in the CRM pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub source: LeadSource,
    /// The form-submission record this lead was created from, if any.
    pub source_id: Option<Uuid>,
    pub loan_amount: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub status: LeadStatus,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub source: LeadSource,
    pub source_id: Option<Uuid>,
    pub loan_amount: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
}
