//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notices`, `register_form`) so the page
//! and its components can depend on small focused models.

pub mod auth;
pub mod notices;
pub mod register_form;
