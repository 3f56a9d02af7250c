//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for who is signed in, `session` for the
//! expiry prompt) so components depend on small focused models provided as
//! `RwSignal`s through context.

pub mod auth;
pub mod session;
