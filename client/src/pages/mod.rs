//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, API calls) and
//! delegates rendering details to `components`. Form checks live in
//! `validate` so they run on the host in tests.

pub mod about;
pub mod become_host;
pub mod case_studies;
pub mod forgot_password;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub(crate) mod validate;
