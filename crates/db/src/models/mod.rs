pub mod lead;
pub mod submission;

pub use lead::{CreateLead, Lead};
pub use submission::{
    CallbackRequest, ContactForm, CreateCallbackRequest, CreateContactForm, CreateQuoteRequest,
    CreateSubscriber, EmailSubscriber, QuoteRequest,
};
