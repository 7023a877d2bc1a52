//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into pipeline operations and maps
//! pipeline failures to response statuses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request logging middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
