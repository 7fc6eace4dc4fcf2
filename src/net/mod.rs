//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire schema shared
//! with the backend.

pub mod api;
pub mod types;
