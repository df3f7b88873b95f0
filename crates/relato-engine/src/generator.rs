//! The external narrative-generation boundary.
//!
//! The pipeline consumes the generator as a black box: given a context
//! and validated extraction data it must produce three raw register
//! versions. The trait is the seam where the Bedrock adapter (or a
//! scripted test double) plugs in.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

use relato_core::models::context::ReportContext;
use relato_core::models::extraction::ExtractedResult;

/// The three raw text versions returned by the generation
/// collaborator, before finalization.
///
/// Every field defaults to the empty string: a well-formed response
/// missing a field still finalizes (the finalizer appends the
/// mandatory closing to an empty version). A response that is not JSON
/// at all is a [`GenerationError`], decided at the adapter boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVersions {
    #[serde(default)]
    pub simple: String,
    #[serde(default)]
    pub professional: String,
    #[serde(default)]
    pub technical: String,
}

/// Failure of the generation collaborator. Carries the underlying
/// cause message; the orchestrator surfaces it verbatim to the caller.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct GenerationError(pub String);

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An external collaborator that renders validated extraction data
/// into three narrative registers.
///
/// `has_visual_source` switches whether the narrative may mention a
/// graphical source; it is passed through opaquely. The returned
/// future must be `Send` so reports can be generated from multi-thread
/// runtimes.
pub trait NarrativeGenerator {
    fn generate(
        &self,
        context: &ReportContext,
        extracted: &[ExtractedResult],
        has_visual_source: bool,
    ) -> impl Future<Output = Result<RawVersions, GenerationError>> + Send;
}
