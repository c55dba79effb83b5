//! # Scribe Core
//!
//! The domain layer of the Scribe blog backend.
//! Request validation, update composition, and the services built on them.
//! This crate has zero infrastructure dependencies; persistence, hashing and
//! token signing are reached through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod update;
pub mod validation;

pub use error::{DomainError, EmptyUpdate, RepoError, ValidationError, ValidationResult};
