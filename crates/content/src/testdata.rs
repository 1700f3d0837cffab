//! Shared in-memory fixture catalog for unit tests.

use std::collections::BTreeMap;

use crate::catalog::ContentCatalog;
use crate::compliance::ComplianceStore;
use crate::model::*;
use crate::overrides::OverrideStore;
use crate::registry::LocationRegistry;
use crate::services::ServiceTaxonomy;

pub(crate) fn city(name: &str, area_code: &str, population: u64) -> LocationRecord {
    LocationRecord {
        city: name.to_string(),
        county: "Test County".to_string(),
        population,
        area_code: area_code.to_string(),
        landmarks: vec!["City Hall".to_string()],
        highways: vec!["I-95".to_string()],
        neighboring_towns: vec!["Springfield".to_string()],
        lat: 25.0,
        lng: -80.0,
    }
}

pub(crate) fn florida() -> StateRecord {
    StateRecord {
        state: "Florida".to_string(),
        state_code: "FL".to_string(),
        cities: vec![city("Miami", "305", 442_241), city("Tampa", "813", 384_959)],
    }
}

pub(crate) fn miami_override() -> CityPageOverride {
    CityPageOverride {
        city: "Miami".to_string(),
        slug: "miami".to_string(),
        state: "Florida".to_string(),
        state_code: "FL".to_string(),
        state_slug: "florida".to_string(),
        county: Some("Miami-Dade".to_string()),
        population: Some(442_241),
        seo: Some(Seo {
            title: "Cash Advance Miami FL | Lion Cash Advance".to_string(),
            meta_description: "Same-day cash advances in Miami.".to_string(),
            keywords: vec!["cash advance miami".to_string()],
        }),
        hero: Some(Hero {
            h1: "Miami's Trusted Cash Advance Partner".to_string(),
            subheadline: "Serving Little Havana to Brickell since 2009".to_string(),
            cta_text: "Get Cash Today".to_string(),
            cta_url: "/apply".to_string(),
        }),
        local_proof: None,
        nap: Some(NapBlock {
            name: "Lion Cash Advance — Miami".to_string(),
            street: "1200 Brickell Ave".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip: "33131".to_string(),
            phone: "(305) 555-0123".to_string(),
        }),
        reviews: vec![Review {
            name: "Carlos R.".to_string(),
            rating: 5,
            text: "In and out in twenty minutes.".to_string(),
            date: "2025-06-14".to_string(),
        }],
        faq: vec![FaqEntry {
            question: "How fast can I get funds in Miami?".to_string(),
            answer: "Usually the same business day.".to_string(),
        }],
        nearby_cities: vec![NearbyCity {
            name: "Hialeah".to_string(),
            slug: "hialeah".to_string(),
            distance_miles: 11.0,
        }],
        service_slugs: None,
    }
}

/// An override for a city absent from the base registry.
pub(crate) fn key_largo_override() -> CityPageOverride {
    CityPageOverride {
        city: "Key Largo".to_string(),
        slug: "key-largo".to_string(),
        state: "Florida".to_string(),
        state_code: "FL".to_string(),
        state_slug: "florida".to_string(),
        county: Some("Monroe".to_string()),
        population: None,
        seo: None,
        hero: Some(Hero {
            h1: "Cash Advances in Key Largo".to_string(),
            subheadline: "Island-friendly lending".to_string(),
            cta_text: "Apply Now".to_string(),
            cta_url: "/apply".to_string(),
        }),
        local_proof: None,
        nap: Some(NapBlock {
            name: "Lion Cash Advance — Key Largo".to_string(),
            street: "99000 Overseas Hwy".to_string(),
            city: "Key Largo".to_string(),
            state: "FL".to_string(),
            zip: "33037".to_string(),
            phone: "(305) 555-0187".to_string(),
        }),
        reviews: Vec::new(),
        faq: Vec::new(),
        nearby_cities: Vec::new(),
        service_slugs: None,
    }
}

pub(crate) fn payday_service() -> ServiceRecord {
    ServiceRecord {
        name: "Payday Loans".to_string(),
        slug: "payday-loans".to_string(),
        category: ServiceCategory::ShortTerm,
        short_description: "Small advances until your next check.".to_string(),
        long_description: "Bridge loans against your next paycheck.".to_string(),
        benefits: vec!["Same-day funding".to_string()],
        amount_range: "$100 - $500".to_string(),
        term_range: "7 - 31 days".to_string(),
        faq: Vec::new(),
        comparison: Vec::new(),
    }
}

pub(crate) fn installment_service() -> ServiceRecord {
    ServiceRecord {
        name: "Installment Loans".to_string(),
        slug: "installment-loans".to_string(),
        category: ServiceCategory::Installment,
        short_description: "Larger amounts, fixed payments.".to_string(),
        long_description: "Repay over months in equal installments.".to_string(),
        benefits: Vec::new(),
        amount_range: "$500 - $5,000".to_string(),
        term_range: "3 - 24 months".to_string(),
        faq: Vec::new(),
        comparison: Vec::new(),
    }
}

pub(crate) fn fl_compliance() -> StateComplianceRecord {
    StateComplianceRecord {
        state: "Florida".to_string(),
        state_code: "FL".to_string(),
        legal_status: "Deferred presentment transactions are legal and licensed.".to_string(),
        regulatory_body: "Florida Office of Financial Regulation".to_string(),
        regulatory_url: "https://flofr.gov".to_string(),
        regulatory_phone: "(850) 487-9687".to_string(),
        rate_cap: "10% of the amount advanced plus a $5 verification fee".to_string(),
        loan_limit: "$500 per advance".to_string(),
        consumer_protections: (1..=10)
            .map(|i| format!("Protection clause {i}"))
            .collect(),
        disclaimer: "Loans should be used for short-term financial needs only.".to_string(),
        last_verified: "2025-09-15T00:00:00Z".parse().unwrap(),
    }
}

pub(crate) fn profile() -> BusinessProfile {
    BusinessProfile {
        business_name: "Lion Cash Advance".to_string(),
        tagline: "Fast cash. Fair terms.".to_string(),
        phone: "1-855-546-6227".to_string(),
        email: "hello@lioncashadvance.example".to_string(),
        founded_year: 2009,
        about: AboutSection {
            headline: "Lending with a local face".to_string(),
            description: "Storefront lending across the Southeast.".to_string(),
            mission: "Credit access without the runaround.".to_string(),
            values: vec!["Transparency".to_string()],
        },
        headquarters: Address {
            street: "500 Lion Way".to_string(),
            city: "Orlando".to_string(),
            state: "FL".to_string(),
            zip: "32801".to_string(),
        },
        hours: BTreeMap::from([("mon-fri".to_string(), "9am - 6pm".to_string())]),
    }
}

/// Florida with Miami (override + registry), Tampa (registry only), and
/// Key Largo (override only); two services; FL compliance.
pub(crate) fn catalog() -> ContentCatalog {
    ContentCatalog::from_parts(
        LocationRegistry::from_states(vec![florida()]),
        OverrideStore::from_records([
            ("miami-fl".to_string(), miami_override()),
            ("key-largo-fl".to_string(), key_largo_override()),
        ]),
        ServiceTaxonomy::from_services(vec![payday_service(), installment_service()]),
        ComplianceStore::from_records([fl_compliance()]),
        profile(),
    )
}
