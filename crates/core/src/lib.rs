//! `gazetteer-core` — domain record types and errors.
//!
//! This crate contains **pure domain** values (no infrastructure concerns):
//! the resource records exchanged over the wire and the error model their
//! validation produces.

pub mod color;
pub mod country;
pub mod error;

pub use color::Rgba;
pub use country::Country;
pub use error::{DomainError, DomainResult};
