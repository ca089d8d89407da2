pub mod dynamodb;
pub mod nationality;
pub mod nationalize;
pub mod record_store;
