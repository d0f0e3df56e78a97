//! Reusable UI components shared by pages.
//!
//! DESIGN
//! ======
//! Components are presentation-first and receive data via props/signals so
//! page-level modules own orchestration.

pub mod field_input;
pub mod register_illustration;
pub mod toast_stack;
