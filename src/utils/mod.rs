//! Helpers shared across layers.
//!
//! - [`db_error`] - Constraint-specific database error checks
//! - [`image_upload`] - Image payload decoding (files and data URIs)
//! - [`jwt`] - Access/refresh token signing and decoding
//! - [`password`] - Argon2 password hashing

pub mod db_error;
pub mod image_upload;
pub mod jwt;
pub mod password;
