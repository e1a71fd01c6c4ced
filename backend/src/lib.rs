//! Venue booking backend library.
//!
//! Hexagonal layout: `domain` holds entities, ports, and services;
//! `inbound::http` adapts them to Actix handlers; `outbound::persistence`
//! implements the repository ports on PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
