pub mod add_document;
pub mod analyze;
pub mod search;
pub mod seed;
