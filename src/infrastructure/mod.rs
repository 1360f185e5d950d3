//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer:
//!
//! - [`media`] - Image storage (local filesystem)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod media;
pub mod persistence;
