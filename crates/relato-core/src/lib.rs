//! relato-core
//!
//! Pure domain types, the ethical policy configuration, and the shared
//! term matcher. No AWS dependency — this is the shared vocabulary of
//! the Relato system.

pub mod error;
pub mod matcher;
pub mod models;
pub mod policy;
