//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, request deadlines and observability middleware.

pub mod auth;
pub mod deadline;
pub mod tracing;
