//! Form submission rows and their create DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `contact_forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactForm {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub source_url: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub source_url: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A row from the `quote_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: Option<i64>,
    pub loan_purpose: Option<String>,
    pub employment_status: Option<String>,
    pub income: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub source_url: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: Option<i64>,
    pub loan_purpose: Option<String>,
    pub employment_status: Option<String>,
    pub income: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub source_url: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A row from the `callback_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CallbackRequest {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    pub loan_amount: Option<i64>,
    pub urgency: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCallbackRequest {
    pub name: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    pub loan_amount: Option<i64>,
    pub urgency: Option<String>,
}

/// A row from the `email_subscribers` table. One row per address; the
/// subscribe endpoint upserts, so re-subscribing never duplicates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmailSubscriber {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriber {
    pub email: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}
