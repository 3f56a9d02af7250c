//! Networking modules for the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints used by the auth forms and the visitor
//! tracker, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
