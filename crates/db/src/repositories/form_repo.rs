//! Postgres-backed [`FormStore`].
//!
//! All queries are runtime-checked (`query_as` + `bind`); lead source and
//! status live as text columns and are parsed back through the core enums,
//! so an unknown stored value surfaces as `StoreError::Corrupt` instead of
//! leaking into the domain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use lioncash_core::lead::{LeadSource, LeadStatus};

use crate::models::{
    CallbackRequest, ContactForm, CreateCallbackRequest, CreateContactForm, CreateLead,
    CreateQuoteRequest, CreateSubscriber, EmailSubscriber, Lead, QuoteRequest,
};
use crate::store::{FormStore, StoreError};

/// Column list for `leads` queries.
const LEAD_COLUMNS: &str = "id, name, email, phone, source, source_id, loan_amount, city, state, \
                            status, notes, assigned_to, follow_up_date, last_contacted_at, created_at";

/// A raw `leads` row before enum parsing.
#[derive(Debug, FromRow)]
struct LeadRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    phone: String,
    source: String,
    source_id: Option<Uuid>,
    loan_amount: Option<i64>,
    city: Option<String>,
    state: Option<String>,
    status: String,
    notes: Option<String>,
    assigned_to: Option<String>,
    follow_up_date: Option<DateTime<Utc>>,
    last_contacted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = StoreError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        let source =
            LeadSource::parse(&row.source).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let status =
            LeadStatus::parse(&row.status).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Lead {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            source,
            source_id: row.source_id,
            loan_amount: row.loan_amount,
            city: row.city,
            state: row.state,
            status,
            notes: row.notes,
            assigned_to: row.assigned_to,
            follow_up_date: row.follow_up_date,
            last_contacted_at: row.last_contacted_at,
            created_at: row.created_at,
        })
    }
}

/// Postgres implementation of the storage collaborator contract.
#[derive(Debug, Clone)]
pub struct PgFormStore {
    pool: PgPool,
}

impl PgFormStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_lead(&self, id: Uuid) -> Result<Lead, StoreError> {
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;
        row.try_into()
    }
}

#[async_trait]
impl FormStore for PgFormStore {
    async fn create_contact(&self, data: CreateContactForm) -> Result<ContactForm, StoreError> {
        let record = sqlx::query_as::<_, ContactForm>(
            "INSERT INTO contact_forms \
                 (id, name, email, phone, message, source_url, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id, name, email, phone, message, source_url, ip_address, user_agent, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.message)
        .bind(&data.source_url)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn create_quote(&self, data: CreateQuoteRequest) -> Result<QuoteRequest, StoreError> {
        let record = sqlx::query_as::<_, QuoteRequest>(
            "INSERT INTO quote_requests \
                 (id, name, email, phone, loan_amount, loan_purpose, employment_status, income, \
                  city, state, zip_code, source_url, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id, name, email, phone, loan_amount, loan_purpose, employment_status, \
                       income, city, state, zip_code, source_url, ip_address, user_agent, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.loan_amount)
        .bind(&data.loan_purpose)
        .bind(&data.employment_status)
        .bind(data.income)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.zip_code)
        .bind(&data.source_url)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn create_callback(
        &self,
        data: CreateCallbackRequest,
    ) -> Result<CallbackRequest, StoreError> {
        let record = sqlx::query_as::<_, CallbackRequest>(
            "INSERT INTO callback_requests \
                 (id, name, phone, preferred_time, loan_amount, urgency) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, phone, preferred_time, loan_amount, urgency, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.preferred_time)
        .bind(data.loan_amount)
        .bind(&data.urgency)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn upsert_subscriber(
        &self,
        data: CreateSubscriber,
    ) -> Result<EmailSubscriber, StoreError> {
        // Lowercased before insert so ON CONFLICT (email) matches regardless
        // of how the subscriber typed their address.
        let record = sqlx::query_as::<_, EmailSubscriber>(
            "INSERT INTO email_subscribers (id, email, name, city, state, subscribed) \
             VALUES ($1, $2, $3, $4, $5, true) \
             ON CONFLICT (email) \
             DO UPDATE SET subscribed = true, updated_at = NOW() \
             RETURNING id, email, name, city, state, subscribed, created_at, updated_at",
        )
        .bind(Uuid::now_v7())
        .bind(data.email.to_lowercase())
        .bind(&data.name)
        .bind(&data.city)
        .bind(&data.state)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn create_lead(&self, data: CreateLead) -> Result<Lead, StoreError> {
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "INSERT INTO leads \
                 (id, name, email, phone, source, source_id, loan_amount, city, state, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {LEAD_COLUMNS}"
        ))
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.source.as_str())
        .bind(data.source_id)
        .bind(data.loan_amount)
        .bind(&data.city)
        .bind(&data.state)
        .bind(LeadStatus::New.as_str())
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    async fn update_lead_status(
        &self,
        id: Uuid,
        status: LeadStatus,
        notes: Option<String>,
    ) -> Result<Lead, StoreError> {
        let current = self.fetch_lead(id).await?;
        if !current.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                from: current.status.as_str(),
                to: status.as_str(),
            });
        }

        // The status guard makes the check-then-update race-safe: if a
        // concurrent transition moved the row off the fetched status, this
        // matches zero rows and reads as a conflict.
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "UPDATE leads \
             SET status = $2, notes = COALESCE($3, notes), last_contacted_at = NOW() \
             WHERE id = $1 AND status = $4 \
             RETURNING {LEAD_COLUMNS}"
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(&notes)
        .bind(current.status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::InvalidTransition {
            from: current.status.as_str(),
            to: status.as_str(),
        })?;
        row.try_into()
    }

    async fn leads_by_status(&self, status: LeadStatus) -> Result<Vec<Lead>, StoreError> {
        let rows = sqlx::query_as::<_, LeadRow>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads WHERE status = $1 ORDER BY created_at DESC"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Lead::try_from).collect()
    }

    async fn recent_leads(&self, limit: usize) -> Result<Vec<Lead>, StoreError> {
        let rows = sqlx::query_as::<_, LeadRow>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Lead::try_from).collect()
    }

    async fn healthy(&self) -> bool {
        crate::health_check(&self.pool).await.is_ok()
    }
}
