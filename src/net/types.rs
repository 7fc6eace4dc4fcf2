//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. The backend speaks Spanish on the wire; Rust field names stay
//! idiomatic and `#[serde(rename)]` pins the wire spelling.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response body of `GET /api/hello`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    /// Greeting text shown under the page title.
    pub message: String,
}

/// One user row from `GET /api/usuarios`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier, used as the list key.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Contact email.
    pub email: String,
}
