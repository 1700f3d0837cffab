//! The storage collaborator contract and the in-memory implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use lioncash_core::lead::LeadStatus;

use crate::models::{
    CallbackRequest, ContactForm, CreateCallbackRequest, CreateContactForm, CreateLead,
    CreateQuoteRequest, CreateSubscriber, EmailSubscriber, Lead, QuoteRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record not found: {0}")]
    NotFound(Uuid),

    /// A status move the lead lifecycle does not allow.
    #[error("Invalid lead status transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    /// A stored value that no longer parses (e.g. an unknown status string).
    #[error("Corrupt stored value: {0}")]
    Corrupt(String),
}

/// Write-side contract of the lead-capture boundary, plus the CRM reads.
///
/// Every form endpoint performs exactly one insert (two counting the lead
/// record); there is no cross-request ordering, so any backend with
/// filtered reads and inserts qualifies.
#[async_trait]
pub trait FormStore: Send + Sync {
    async fn create_contact(&self, data: CreateContactForm) -> Result<ContactForm, StoreError>;
    async fn create_quote(&self, data: CreateQuoteRequest) -> Result<QuoteRequest, StoreError>;
    async fn create_callback(
        &self,
        data: CreateCallbackRequest,
    ) -> Result<CallbackRequest, StoreError>;

    /// Idempotent: a second subscribe for the same email flips the existing
    /// row back to `subscribed = true` instead of inserting a duplicate.
    /// Emails are stored lowercased so the idempotency key is
    /// case-insensitive in every backend.
    async fn upsert_subscriber(
        &self,
        data: CreateSubscriber,
    ) -> Result<EmailSubscriber, StoreError>;

    async fn create_lead(&self, data: CreateLead) -> Result<Lead, StoreError>;

    /// Move a lead through the lifecycle, rejecting disallowed transitions.
    /// Also stamps `last_contacted_at` and replaces notes when provided.
    async fn update_lead_status(
        &self,
        id: Uuid,
        status: LeadStatus,
        notes: Option<String>,
    ) -> Result<Lead, StoreError>;

    async fn leads_by_status(&self, status: LeadStatus) -> Result<Vec<Lead>, StoreError>;

    /// Most recent leads first.
    async fn recent_leads(&self, limit: usize) -> Result<Vec<Lead>, StoreError>;

    /// Backend connectivity probe for the health endpoint.
    async fn healthy(&self) -> bool;
}

/// In-memory [`FormStore`] for tests and database-less development runs.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    inner: RwLock<MemoryTables>,
}

#[derive(Debug, Default)]
struct MemoryTables {
    contacts: Vec<ContactForm>,
    quotes: Vec<QuoteRequest>,
    callbacks: Vec<CallbackRequest>,
    subscribers: Vec<EmailSubscriber>,
    leads: Vec<Lead>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored records across all tables. Test helper for the
    /// "validation failure creates zero records" property.
    pub async fn record_count(&self) -> usize {
        let tables = self.inner.read().await;
        tables.contacts.len()
            + tables.quotes.len()
            + tables.callbacks.len()
            + tables.subscribers.len()
            + tables.leads.len()
    }

    pub async fn subscriber_count(&self) -> usize {
        self.inner.read().await.subscribers.len()
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create_contact(&self, data: CreateContactForm) -> Result<ContactForm, StoreError> {
        let record = ContactForm {
            id: Uuid::now_v7(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            source_url: data.source_url,
            ip_address: data.ip_address,
            user_agent: data.user_agent,
            created_at: Utc::now(),
        };
        self.inner.write().await.contacts.push(record.clone());
        Ok(record)
    }

    async fn create_quote(&self, data: CreateQuoteRequest) -> Result<QuoteRequest, StoreError> {
        let record = QuoteRequest {
            id: Uuid::now_v7(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            loan_amount: data.loan_amount,
            loan_purpose: data.loan_purpose,
            employment_status: data.employment_status,
            income: data.income,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            source_url: data.source_url,
            ip_address: data.ip_address,
            user_agent: data.user_agent,
            created_at: Utc::now(),
        };
        self.inner.write().await.quotes.push(record.clone());
        Ok(record)
    }

    async fn create_callback(
        &self,
        data: CreateCallbackRequest,
    ) -> Result<CallbackRequest, StoreError> {
        let record = CallbackRequest {
            id: Uuid::now_v7(),
            name: data.name,
            phone: data.phone,
            preferred_time: data.preferred_time,
            loan_amount: data.loan_amount,
            urgency: data.urgency,
            created_at: Utc::now(),
        };
        self.inner.write().await.callbacks.push(record.clone());
        Ok(record)
    }

    async fn upsert_subscriber(
        &self,
        data: CreateSubscriber,
    ) -> Result<EmailSubscriber, StoreError> {
        let email = data.email.to_lowercase();
        let mut tables = self.inner.write().await;
        if let Some(existing) = tables.subscribers.iter_mut().find(|s| s.email == email) {
            existing.subscribed = true;
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }

        let now = Utc::now();
        let record = EmailSubscriber {
            id: Uuid::now_v7(),
            email,
            name: data.name,
            city: data.city,
            state: data.state,
            subscribed: true,
            created_at: now,
            updated_at: now,
        };
        tables.subscribers.push(record.clone());
        Ok(record)
    }

    async fn create_lead(&self, data: CreateLead) -> Result<Lead, StoreError> {
        let record = Lead {
            id: Uuid::now_v7(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            source: data.source,
            source_id: data.source_id,
            loan_amount: data.loan_amount,
            city: data.city,
            state: data.state,
            status: LeadStatus::New,
            notes: None,
            assigned_to: None,
            follow_up_date: None,
            last_contacted_at: None,
            created_at: Utc::now(),
        };
        self.inner.write().await.leads.push(record.clone());
        Ok(record)
    }

    async fn update_lead_status(
        &self,
        id: Uuid,
        status: LeadStatus,
        notes: Option<String>,
    ) -> Result<Lead, StoreError> {
        let mut tables = self.inner.write().await;
        let lead = tables
            .leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if !lead.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: lead.status.as_str(),
                to: status.as_str(),
            });
        }

        lead.status = status;
        if notes.is_some() {
            lead.notes = notes;
        }
        lead.last_contacted_at = Some(Utc::now());
        Ok(lead.clone())
    }

    async fn leads_by_status(&self, status: LeadStatus) -> Result<Vec<Lead>, StoreError> {
        let tables = self.inner.read().await;
        let mut leads: Vec<Lead> = tables
            .leads
            .iter()
            .filter(|l| l.status == status)
            .cloned()
            .collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    async fn recent_leads(&self, limit: usize) -> Result<Vec<Lead>, StoreError> {
        let tables = self.inner.read().await;
        let mut leads: Vec<Lead> = tables.leads.to_vec();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads.truncate(limit);
        Ok(leads)
    }

    async fn healthy(&self) -> bool {
        true
    }
}
