pub mod form_repo;

pub use form_repo::PgFormStore;
