//! Request validators.
//!
//! Each validator is a pure judgment over a request DTO: it never mutates
//! its input and reports only the first rule that fails.

pub mod author;
pub mod post;
pub mod rules;

pub use rules::{is_valid_email, is_valid_url, is_valid_username};
