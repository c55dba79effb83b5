//! # Scribe Shared
//!
//! Wire types shared between the API server and its clients.
//! Request bodies, response payloads, and the JSON envelopes every endpoint returns.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
