//! HTTP transport for the landing zone function.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
