//! relato-bedrock
//!
//! Bedrock-backed adapters for the external generative collaborators:
//! three-register narrative generation and structured score extraction
//! from text or image sources, both via the Converse API.

pub mod error;
pub mod extract;
pub mod generate;
pub mod prompts;
