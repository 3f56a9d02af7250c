//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome (nav, footer, floating widgets) and
//! the form controls pages compose. Shared state comes from the context
//! providers installed by `App`.

pub mod back_to_top;
pub mod date_picker;
pub mod preloader;
pub mod session_expired_modal;
pub mod site_footer;
pub mod site_nav;
pub mod whatsapp_bubble;
