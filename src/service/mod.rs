//! Data access: read queries for the API surface, writes for seed/admin tooling.

pub mod admin;
pub mod catalog;

pub use admin::AdminStore;
pub use catalog::Catalog;
