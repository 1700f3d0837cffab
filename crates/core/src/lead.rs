//! CRM lead vocabulary: where a lead came from and where it is in the
//! pipeline.
//!
//! Leads are never deleted; a dead lead is tracked through its status
//! (`Lost` or `DoNotContact`) so the record survives for compliance audits.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The channel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    ContactForm,
    QuoteRequest,
    CallbackRequest,
    Application,
    Manual,
    PhoneCall,
    WalkIn,
    Referral,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactForm => "contact-form",
            Self::QuoteRequest => "quote-request",
            Self::CallbackRequest => "callback-request",
            Self::Application => "application",
            Self::Manual => "manual",
            Self::PhoneCall => "phone-call",
            Self::WalkIn => "walk-in",
            Self::Referral => "referral",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "contact-form" => Ok(Self::ContactForm),
            "quote-request" => Ok(Self::QuoteRequest),
            "callback-request" => Ok(Self::CallbackRequest),
            "application" => Ok(Self::Application),
            "manual" => Ok(Self::Manual),
            "phone-call" => Ok(Self::PhoneCall),
            "walk-in" => Ok(Self::WalkIn),
            "referral" => Ok(Self::Referral),
            other => Err(CoreError::Validation(format!(
                "Unknown lead source '{other}'"
            ))),
        }
    }
}

/// Lifecycle status of a lead.
///
/// The forward path is New -> Contacted -> Qualified -> Quoted -> Converted.
/// `Lost` and `DoNotContact` are terminal and reachable from any
/// non-terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Quoted,
    Converted,
    Lost,
    DoNotContact,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Quoted => "quoted",
            Self::Converted => "converted",
            Self::Lost => "lost",
            Self::DoNotContact => "do-not-contact",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "quoted" => Ok(Self::Quoted),
            "converted" => Ok(Self::Converted),
            "lost" => Ok(Self::Lost),
            "do-not-contact" => Ok(Self::DoNotContact),
            other => Err(CoreError::Validation(format!(
                "Unknown lead status '{other}'"
            ))),
        }
    }

    /// Whether no further transitions are allowed out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converted | Self::Lost | Self::DoNotContact)
    }

    /// Whether a CRM operator may move a lead from `self` to `next`.
    pub fn can_transition_to(&self, next: LeadStatus) -> bool {
        if *self == next {
            return false;
        }
        if self.is_terminal() {
            return false;
        }
        // Terminal exits are allowed from any live status.
        if matches!(next, Self::Lost | Self::DoNotContact) {
            return true;
        }
        matches!(
            (self, next),
            (Self::New, Self::Contacted)
                | (Self::Contacted, Self::Qualified)
                | (Self::Qualified, Self::Quoted)
                | (Self::Quoted, Self::Converted)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn source_round_trips_through_strings() {
        for source in [
            LeadSource::ContactForm,
            LeadSource::QuoteRequest,
            LeadSource::CallbackRequest,
            LeadSource::Application,
            LeadSource::Manual,
            LeadSource::PhoneCall,
            LeadSource::WalkIn,
            LeadSource::Referral,
        ] {
            assert_eq!(LeadSource::parse(source.as_str()).unwrap(), source);
        }
        assert_matches!(
            LeadSource::parse("carrier-pigeon"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn forward_path_transitions_allowed() {
        assert!(LeadStatus::New.can_transition_to(LeadStatus::Contacted));
        assert!(LeadStatus::Contacted.can_transition_to(LeadStatus::Qualified));
        assert!(LeadStatus::Qualified.can_transition_to(LeadStatus::Quoted));
        assert!(LeadStatus::Quoted.can_transition_to(LeadStatus::Converted));
    }

    #[test]
    fn cannot_skip_ahead_or_leave_terminal() {
        assert!(!LeadStatus::New.can_transition_to(LeadStatus::Converted));
        assert!(!LeadStatus::Converted.can_transition_to(LeadStatus::New));
        assert!(!LeadStatus::Lost.can_transition_to(LeadStatus::Contacted));
    }

    #[test]
    fn any_live_status_can_be_lost_or_blocked() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Quoted,
        ] {
            assert!(status.can_transition_to(LeadStatus::Lost));
            assert!(status.can_transition_to(LeadStatus::DoNotContact));
        }
    }
}
