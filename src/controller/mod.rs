//! HTTP request handlers (controller layer).
//!
//! Each handler adapts one inbound request to exactly one service invocation:
//! it extracts the permitted parameters (typed DTOs plus path/query extractors),
//! resolves the acting user through the `AuthGuard`, calls a single service
//! operation and serializes the result. Errors propagate unchanged as `AppError`
//! and are mapped to responses by the error layer.

pub mod auth;
pub mod event;
pub mod invitation;
pub mod param;
pub mod user;
