//! Infrastructure layer for external integrations.
//!
//! This layer implements the upstream traits defined by the domain layer,
//! providing reqwest-backed clients for the weather and geocoding HTTP APIs.
//!
//! # Modules
//!
//! - [`http`] - Upstream HTTP client implementations

pub mod http;
