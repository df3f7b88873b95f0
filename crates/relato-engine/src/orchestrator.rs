//! Report orchestration.
//!
//! Sequences validation → generation → finalization → audit → assembly
//! for one report. The only pipeline component with side effects
//! (tracing, the collaborator call) and the only one that can fail
//! terminally. One invocation builds one report end-to-end; concurrent
//! invocations share no state. Dropping the returned future before the
//! collaborator resolves assembles nothing — there is no partial
//! report.

use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use relato_audit::compliance::audit_text;
use relato_audit::events::AuditEvent;
use relato_core::models::context::ReportContext;
use relato_core::models::extraction::ExtractedResult;
use relato_core::models::report::{CanonicalReport, ReportVersions};
use relato_core::policy::EthicalPolicy;

use crate::error::EngineError;
use crate::finalizer::Finalizer;
use crate::generator::NarrativeGenerator;
use crate::validator::validate_extraction;

/// Pipeline stage, recorded on tracing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingConfirmation,
    Validating,
    Generating,
    Finalizing,
    Auditing,
    Assembled,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::AwaitingConfirmation => "awaiting_confirmation",
            Stage::Validating => "validating",
            Stage::Generating => "generating",
            Stage::Finalizing => "finalizing",
            Stage::Auditing => "auditing",
            Stage::Assembled => "assembled",
            Stage::Failed => "failed",
        }
    }
}

/// Run the full pipeline for one report.
///
/// Fails with [`EngineError::ConfirmationRequired`] before anything
/// else if the human-confirmation flag is false, and with
/// [`EngineError::IncompleteData`] if the extraction is structurally
/// unusable — in both cases the collaborator is never invoked.
pub async fn generate_report<G: NarrativeGenerator>(
    policy: &EthicalPolicy,
    generator: &G,
    context: &ReportContext,
    extracted: &[ExtractedResult],
    confirmed: bool,
    has_visual_source: bool,
) -> Result<CanonicalReport, EngineError> {
    let report_id = Uuid::new_v4();
    info!(
        report_id = %report_id,
        stage = Stage::AwaitingConfirmation.as_str(),
        profession = context.profession.display_name(),
        objective = context.objective.display_name(),
        "starting report generation"
    );

    if !confirmed {
        warn!(report_id = %report_id, stage = Stage::Failed.as_str(), "human confirmation missing");
        return Err(EngineError::ConfirmationRequired);
    }

    info!(report_id = %report_id, stage = Stage::Validating.as_str(), records = extracted.len(), "validating extraction");
    if !validate_extraction(extracted) {
        warn!(report_id = %report_id, stage = Stage::Failed.as_str(), "extraction rejected");
        return Err(EngineError::IncompleteData);
    }

    let finalizer = Finalizer::new(policy)?;

    info!(report_id = %report_id, stage = Stage::Generating.as_str(), has_visual_source, "invoking narrative generator");
    let raw = generator
        .generate(context, extracted, has_visual_source)
        .await
        .map_err(|e| {
            warn!(report_id = %report_id, stage = Stage::Failed.as_str(), cause = %e, "generation failed");
            EngineError::Generation(e.to_string())
        })?;

    info!(report_id = %report_id, stage = Stage::Finalizing.as_str(), "finalizing versions");
    let profession = context.profession;
    let versions = ReportVersions {
        simple: finalizer.finalize(&raw.simple, profession),
        professional: finalizer.finalize(&raw.professional, profession),
        technical: finalizer.finalize(&raw.technical, profession),
    };

    // Advisory only. The professional register is audited because it is
    // the version a clinician files as the formal document; the scan is
    // callable on any version if that policy ever widens.
    info!(report_id = %report_id, stage = Stage::Auditing.as_str(), "auditing professional version");
    let outcome = audit_text(policy, &versions.professional);
    if !outcome.is_valid {
        warn!(
            report_id = %report_id,
            issues = ?outcome.issues,
            "possible ethical violation in professional version"
        );
    }

    AuditEvent::new("report.assembled", "canonical_report", report_id.to_string())
        .with_details(serde_json::json!({
            "engine_version": policy.engine_version,
            "ethical_standard": policy.ethical_standard,
            "compliance_ok": outcome.is_valid,
            "compliance_issues": outcome.issues,
        }))
        .emit();

    info!(report_id = %report_id, stage = Stage::Assembled.as_str(), "canonical report assembled");

    Ok(CanonicalReport {
        id: report_id,
        context: *context,
        extracted: extracted.to_vec(),
        versions,
        created_at: Timestamp::now(),
        engine_version: policy.engine_version.clone(),
    })
}
