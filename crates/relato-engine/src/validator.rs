//! Structural validation of extracted assessment data.
//!
//! The sole gate before the expensive external generation step. Pure,
//! synchronous, and idempotent; rejection is communicated by the
//! boolean result, never by an error.

use relato_core::models::extraction::ExtractedResult;

/// True iff the extraction is structurally usable: at least one
/// record, every record names its instrument, and every record carries
/// at least one labeled score.
pub fn validate_extraction(records: &[ExtractedResult]) -> bool {
    if records.is_empty() {
        return false;
    }

    records.iter().all(|record| {
        !record.instrument.trim().is_empty()
            && !record.scores.is_empty()
            && record.scores.iter().all(|s| !s.label.trim().is_empty())
    })
}
