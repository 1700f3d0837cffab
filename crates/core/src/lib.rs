//! Domain types and rules shared by every Lion Cash Advance crate.
//!
//! Nothing in here touches the filesystem, the network, or a database:
//! this crate is the pure vocabulary of the platform (slugs, phone number
//! classification, lead lifecycle, error taxonomy).

pub mod error;
pub mod lead;
pub mod phone;
pub mod slug;
pub mod validation;
