//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage)
//! from page and component logic so the rest stays testable on the host.

pub mod browser;
pub mod dates;
pub mod storage;
