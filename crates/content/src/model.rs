//! Content record types as they appear in the JSON data sources.
//!
//! All source files use camelCase keys; every struct here mirrors that with
//! `#[serde(rename_all = "camelCase")]`. Records are immutable after load.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location registry
// ---------------------------------------------------------------------------

/// One city in the canonical registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub city: String,
    pub county: String,
    pub population: u64,
    /// 3-digit local dialing prefix, used for local-proof copy.
    pub area_code: String,
    #[serde(default)]
    pub landmarks: Vec<String>,
    #[serde(default)]
    pub highways: Vec<String>,
    #[serde(default)]
    pub neighboring_towns: Vec<String>,
    pub lat: f64,
    pub lng: f64,
}

/// One served state with its ordered city list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    /// Full display name ("Florida").
    pub state: String,
    /// 2-letter USPS code ("FL").
    pub state_code: String,
    pub cities: Vec<LocationRecord>,
}

/// Root document of `locations.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsDocument {
    pub states: Vec<StateRecord>,
    pub total_cities: u64,
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// City page overrides
// ---------------------------------------------------------------------------

/// SEO metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Hero section copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub h1: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_url: String,
}

/// Hand-authored "local proof" copy: the content that distinguishes a city
/// page from its hundreds of siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalProof {
    pub headline: String,
    pub directions: String,
    #[serde(default)]
    pub landmarks: Vec<String>,
    #[serde(default)]
    pub highway: Option<String>,
    #[serde(default)]
    pub neighborhood_name: Option<String>,
}

/// Name / Address / Phone identity block for local-SEO markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NapBlock {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// A curated customer review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A nearby city link with driving distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyCity {
    pub name: String,
    pub slug: String,
    pub distance_miles: f64,
}

/// An optional, richer hand-authored record for one city page.
///
/// Every section is individually optional; the resolver synthesizes
/// defaults for whatever is absent. Keyed on disk by
/// `{slug}-{stateCode}.json` (preferred) or `{slug}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPageOverride {
    pub city: String,
    pub slug: String,
    pub state: String,
    pub state_code: String,
    pub state_slug: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub local_proof: Option<LocalProof>,
    #[serde(default)]
    pub nap: Option<NapBlock>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub nearby_cities: Vec<NearbyCity>,
    /// Optional curated subset of service slugs for the cross-sell block.
    /// When absent, the full taxonomy is attached in source order.
    #[serde(default)]
    pub service_slugs: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Service taxonomy
// ---------------------------------------------------------------------------

/// Broad product category for a loan service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    ShortTerm,
    Installment,
    Secured,
    LineOfCredit,
}

/// Comparison row linking a service to a sibling service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceComparison {
    pub name: String,
    pub slug: String,
    pub amount_range: String,
    pub term_range: String,
    pub best_for: String,
}

/// One loan-service type ("payday loan", "installment loan", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,
    pub slug: String,
    pub category: ServiceCategory,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub amount_range: String,
    pub term_range: String,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub comparison: Vec<ServiceComparison>,
}

/// Root document of `services.json`. Array order is display order
/// (featured services first) and must be preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesDocument {
    pub services: Vec<ServiceRecord>,
}

// ---------------------------------------------------------------------------
// State compliance
// ---------------------------------------------------------------------------

/// Per-state regulatory record, from `state-compliance/{CODE}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateComplianceRecord {
    pub state: String,
    pub state_code: String,
    pub legal_status: String,
    pub regulatory_body: String,
    pub regulatory_url: String,
    pub regulatory_phone: String,
    pub rate_cap: String,
    pub loan_limit: String,
    /// Ordered consumer-protection clauses, strongest first.
    #[serde(default)]
    pub consumer_protections: Vec<String>,
    pub disclaimer: String,
    pub last_verified: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Business profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub headline: String,
    pub description: String,
    pub mission: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Company-wide identity record (`business-profile.json`): the toll-free
/// main line, headquarters address, and the copy behind `/about`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub business_name: String,
    pub tagline: String,
    /// National toll-free line. Never acceptable as a city-page NAP phone;
    /// see the catalog validation pass.
    pub phone: String,
    pub email: String,
    pub founded_year: i32,
    pub about: AboutSection,
    pub headquarters: Address,
    #[serde(default)]
    pub hours: BTreeMap<String, String>,
}
