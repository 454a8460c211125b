// Library for tests to access modules

pub mod config;
pub mod error;
pub mod ingest;
pub mod liveness;
pub mod models;
pub mod query;
pub mod registry;
pub mod routes;
pub mod store;
pub mod version;
