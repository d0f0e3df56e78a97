//! Networking modules for the registration call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP request against the host, and `types` defines the
//! wire schema shared with the host relay.

pub mod api;
pub mod types;
