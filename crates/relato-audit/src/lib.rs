//! relato-audit
//!
//! Compliance auditing of finalized narrative text, plus structured
//! audit events. Strictly advisory: nothing in this crate can fail or
//! block report assembly.

pub mod compliance;
pub mod events;
