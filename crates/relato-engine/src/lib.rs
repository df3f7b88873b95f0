//! relato-engine
//!
//! The compliance-and-assembly pipeline: structural validation of
//! extracted data, terminology enforcement, text finalization, and the
//! report orchestrator that sequences them around the external
//! narrative generator.

pub mod error;
pub mod finalizer;
pub mod generator;
pub mod orchestrator;
pub mod terminology;
pub mod validator;
