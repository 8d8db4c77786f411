//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//! - [`dns`] - System hostname resolver

pub mod dns;
pub mod persistence;
