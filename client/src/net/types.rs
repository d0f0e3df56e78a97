//! Wire DTOs shared between the page, the host relay, and the auth service.
//!
//! DESIGN
//! ======
//! Field names follow the external registration API, which expects
//! `confirmpassword` in lowercase. The form keeps its own naming and projects
//! into this type only once validation has passed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`, relayed verbatim to the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub password: String,
    pub confirmpassword: String,
    pub name: String,
}
