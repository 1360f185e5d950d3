//! Request middleware.
//!
//! - [`auth`] - optional bearer authentication and the [`auth::CurrentUser`] extractor
//! - [`rate_limit`] - per-IP quotas for resource and token routes
//! - [`tracing`] - request spans

pub mod auth;
pub mod rate_limit;
pub mod tracing;
