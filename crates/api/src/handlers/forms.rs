//! Form-submission handlers: contact, quote, callback, newsletter.
//!
//! Each endpoint validates its few required fields, performs one insert
//! (plus a CRM lead record for the three lead-generating forms), and
//! returns `{ "success": true, "id": ... }`. Unhandled failures surface as
//! a generic 500; internal detail stays in the logs.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Deserializer};

use lioncash_core::lead::LeadSource;
use lioncash_core::validation::{require_field, validate_email};
use lioncash_db::models::{
    CreateCallbackRequest, CreateContactForm, CreateLead, CreateQuoteRequest, CreateSubscriber,
};

use crate::error::{AppError, AppResult};
use crate::response::SubmissionResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request metadata
// ---------------------------------------------------------------------------

/// Client metadata captured alongside a submission.
struct RequestMeta {
    ip_address: Option<String>,
    user_agent: Option<String>,
    source_url: Option<String>,
}

fn request_meta(headers: &HeaderMap) -> RequestMeta {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };
    RequestMeta {
        ip_address: header("x-forwarded-for").or_else(|| header("x-real-ip")),
        user_agent: header("user-agent"),
        source_url: header("referer"),
    }
}

/// Extract a required field, mapping a missing or blank value to the
/// endpoint's combined 400 message.
fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
    message: &str,
) -> Result<&'a str, AppError> {
    require_field(field, value.as_deref())
        .map_err(|_| AppError::BadRequest(message.to_string()))?;
    Ok(value.as_deref().unwrap_or_default())
}

/// Accept a loan amount as either a JSON number or a numeric string;
/// anything unparsable becomes `None`. Browser forms post amounts as text.
fn lenient_amount<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(de)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactPayload>,
) -> AppResult<Json<SubmissionResponse>> {
    let missing = "Name, email, and message are required";
    let name = required(&payload.name, "name", missing)?;
    let email = required(&payload.email, "email", missing)?;
    let message = required(&payload.message, "message", missing)?;

    let meta = request_meta(&headers);
    let record = state
        .store
        .create_contact(CreateContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: payload.phone.clone(),
            message: message.to_string(),
            source_url: meta.source_url,
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
        })
        .await?;

    state
        .store
        .create_lead(CreateLead {
            name: name.to_string(),
            email: Some(email.to_string()),
            phone: payload.phone.clone().unwrap_or_default(),
            source: LeadSource::ContactForm,
            source_id: Some(record.id),
            loan_amount: None,
            city: None,
            state: None,
        })
        .await?;

    Ok(Json(SubmissionResponse::created(record.id)))
}

// ---------------------------------------------------------------------------
// POST /api/quote
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub loan_amount: Option<i64>,
    pub loan_purpose: Option<String>,
    pub employment_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub income: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

pub async fn submit_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<QuotePayload>,
) -> AppResult<Json<SubmissionResponse>> {
    let missing = "Name, email, and phone are required";
    let name = required(&payload.name, "name", missing)?;
    let email = required(&payload.email, "email", missing)?;
    let phone = required(&payload.phone, "phone", missing)?;

    let meta = request_meta(&headers);
    let record = state
        .store
        .create_quote(CreateQuoteRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            loan_amount: payload.loan_amount,
            loan_purpose: payload.loan_purpose.clone(),
            employment_status: payload.employment_status.clone(),
            income: payload.income,
            city: payload.city.clone(),
            state: payload.state.clone(),
            zip_code: payload.zip_code.clone(),
            source_url: meta.source_url,
            ip_address: meta.ip_address,
            user_agent: meta.user_agent,
        })
        .await?;

    state
        .store
        .create_lead(CreateLead {
            name: name.to_string(),
            email: Some(email.to_string()),
            phone: phone.to_string(),
            source: LeadSource::QuoteRequest,
            source_id: Some(record.id),
            loan_amount: payload.loan_amount,
            city: payload.city.clone(),
            state: payload.state.clone(),
        })
        .await?;

    Ok(Json(SubmissionResponse::created(record.id)))
}

// ---------------------------------------------------------------------------
// POST /api/callback
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub preferred_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub loan_amount: Option<i64>,
    pub urgency: Option<String>,
}

pub async fn submit_callback(
    State(state): State<AppState>,
    Json(payload): Json<CallbackPayload>,
) -> AppResult<Json<SubmissionResponse>> {
    let missing = "Name and phone are required";
    let name = required(&payload.name, "name", missing)?;
    let phone = required(&payload.phone, "phone", missing)?;

    let record = state
        .store
        .create_callback(CreateCallbackRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            preferred_time: payload.preferred_time.clone(),
            loan_amount: payload.loan_amount,
            urgency: payload.urgency.clone(),
        })
        .await?;

    state
        .store
        .create_lead(CreateLead {
            name: name.to_string(),
            email: None,
            phone: phone.to_string(),
            source: LeadSource::CallbackRequest,
            source_id: Some(record.id),
            loan_amount: payload.loan_amount,
            city: None,
            state: None,
        })
        .await?;

    Ok(Json(SubmissionResponse::created(record.id)))
}

// ---------------------------------------------------------------------------
// POST /api/subscribe
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SubscribePayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<Json<SubmissionResponse>> {
    let email = required(&payload.email, "email", "Email is required")?;
    validate_email(email)?;

    let record = state
        .store
        .upsert_subscriber(CreateSubscriber {
            email: email.to_string(),
            name: payload.name.clone(),
            city: payload.city.clone(),
            state: payload.state.clone(),
        })
        .await?;

    Ok(Json(SubmissionResponse::created(record.id)))
}
