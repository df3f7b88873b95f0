//! Compliance scan for prohibited diagnostic language.
//!
//! Deterministic enforcement (markup stripping, closing insertion,
//! terminology substitution) happens in the finalizer; this scan only
//! surfaces residual risk for human review. It never errors and its
//! outcome never gates assembly.

use serde::Serialize;

use relato_core::matcher::contains_ci;
use relato_core::policy::EthicalPolicy;

/// Sentence shapes that frame a diagnostic conclusion even without a
/// blacklisted noun. Checked independently of the forbidden-term list.
/// "diagnóstico" appears in both spellings so OCR'd or unaccented text
/// is still caught.
const DIAGNOSTIC_PATTERNS: [&str; 6] = [
    "conclui-se que",
    "o paciente tem",
    "portador de",
    "sofre de",
    "diagnóstico",
    "diagnostico",
];

#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Scan `text` against the policy's forbidden vocabulary and the fixed
/// diagnostic sentence patterns. Callable on any report version; which
/// versions actually get audited is the orchestrator's decision.
pub fn audit_text(policy: &EthicalPolicy, text: &str) -> AuditOutcome {
    let mut issues = Vec::new();

    for term in &policy.forbidden_terms {
        if contains_ci(text, term) {
            issues.push(format!("Uso indevido do termo: {term}"));
        }
    }

    for pattern in DIAGNOSTIC_PATTERNS {
        if contains_ci(text, pattern) {
            issues.push(format!("Linguagem diagnóstica detectada: {pattern}"));
        }
    }

    AuditOutcome {
        is_valid: issues.is_empty(),
        issues,
    }
}
