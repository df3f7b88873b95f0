//! Deterministic cleanup and policy enforcement of generated text.
//!
//! The generator is instructed not to emit markup and to include the
//! mandatory closing, but neither is trusted: finalization strips
//! leftover markup, guarantees the closing appears exactly once, and
//! reapplies the terminology rule. Applied independently to each of
//! the three report versions.

use relato_core::error::CoreError;
use relato_core::models::context::Profession;
use relato_core::policy::EthicalPolicy;

use crate::terminology::Terminology;

/// Markup characters a generation run sometimes still emits despite
/// instructions not to.
const FORBIDDEN_MARKUP: [char; 4] = ['*', '#', '_', '~'];

pub struct Finalizer<'a> {
    policy: &'a EthicalPolicy,
    terminology: Terminology,
}

impl<'a> Finalizer<'a> {
    pub fn new(policy: &'a EthicalPolicy) -> Result<Self, CoreError> {
        Ok(Self {
            policy,
            terminology: Terminology::new(policy)?,
        })
    }

    /// Finalize one report version. Idempotent: a second pass over the
    /// output changes nothing.
    ///
    /// Order matters — terminology enforcement runs last so the
    /// substitution also covers the closing section header and clause.
    pub fn finalize(&self, text: &str, profession: Profession) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| !FORBIDDEN_MARKUP.contains(c))
            .collect();

        let mut out = cleaned.trim().to_string();

        if !out.contains(&self.policy.mandatory_closing) {
            // No leading separator on empty input, or a second pass
            // would trim it away and break idempotence.
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&self.policy.closing_header);
            out.push_str("\n\n");
            out.push_str(&self.policy.mandatory_closing);
        }

        self.terminology.enforce(&out, profession)
    }
}
