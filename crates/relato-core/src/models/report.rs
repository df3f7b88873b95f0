use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::context::ReportContext;
use super::extraction::ExtractedResult;

/// Three narrative renderings of the same underlying data, differing
/// in register, not in factual content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportVersions {
    pub simple: String,
    pub professional: String,
    pub technical: String,
}

/// The terminal artifact of one successful pipeline run. Constructed
/// exactly once and never mutated; the caller owns it (the core has no
/// persistence responsibility).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CanonicalReport {
    pub id: Uuid,
    pub context: ReportContext,
    pub extracted: Vec<ExtractedResult>,
    pub versions: ReportVersions,
    pub created_at: jiff::Timestamp,
    pub engine_version: String,
}
