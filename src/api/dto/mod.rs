//! Data Transfer Objects for API requests and responses.
//!
//! Success responses serialize the domain temperature types directly; only
//! the request shapes live here.

pub mod health;
pub mod weather;
