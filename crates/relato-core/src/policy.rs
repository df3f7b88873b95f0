//! Ethical policy configuration.
//!
//! Process-wide, read-only data: loaded once at startup and injected
//! into the finalizer, terminology policy, and auditor. Changing the
//! term lists or the closing clause is a policy redeploy, never a
//! runtime mutation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::context::Profession;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EthicalPolicy {
    /// Version tag stamped onto every assembled report.
    pub engine_version: String,
    /// The ethical standard this policy set implements.
    pub ethical_standard: String,

    /// Vocabulary the narrative is encouraged to use.
    pub allowed_terms: Vec<String>,
    /// Terms whose presence in finalized text is a compliance issue.
    /// Matched case-insensitively by substring.
    pub forbidden_terms: Vec<String>,

    /// Exact closing clause every finalized version must contain.
    /// Compared by substring containment.
    pub mandatory_closing: String,
    /// Section header prepended when the closing has to be appended.
    pub closing_header: String,

    /// Document noun legally reserved to `restricted_term_roles`.
    pub restricted_term: String,
    /// Substitute noun for every other role.
    pub generic_term: String,
    /// The professions permitted to use `restricted_term`.
    pub restricted_term_roles: Vec<Profession>,
}

impl EthicalPolicy {
    /// The canonical process-wide policy.
    pub fn canonical() -> Self {
        Self {
            engine_version: "PSICO-CORE-3.5".to_string(),
            ethical_standard: "CANONICAL-V3.5-ELEGANCE".to_string(),
            allowed_terms: vec![
                "Indicadores compatíveis com".to_string(),
                "Perfil sugestivo de".to_string(),
                "Sinais que merecem acompanhamento".to_string(),
                "Desempenho observado".to_string(),
                "Recursos preservados".to_string(),
            ],
            forbidden_terms: vec![
                "diagnóstico".to_string(),
                "doença".to_string(),
                "patologia".to_string(),
                "CID".to_string(),
                "DSM".to_string(),
                "confirmado".to_string(),
                "fechado".to_string(),
                "conclusão clínica".to_string(),
                "diagnosticar".to_string(),
                "transtorno de".to_string(),
                "sofre de".to_string(),
                "portador de".to_string(),
                "paciente tem".to_string(),
                "cura".to_string(),
                "curar".to_string(),
            ],
            mandatory_closing: "Este documento é baseado exclusivamente nos dados \
                fornecidos pelo instrumento e não substitui avaliação clínica ou \
                diagnóstica realizada por profissional habilitado."
                .to_string(),
            closing_header: "CONSIDERAÇÕES FINAIS".to_string(),
            restricted_term: "LAUDO".to_string(),
            generic_term: "RELATÓRIO".to_string(),
            restricted_term_roles: vec![Profession::Psicologo, Profession::Neuropsicologo],
        }
    }

    /// Whether `profession` may use the restricted document noun.
    pub fn permits_restricted_term(&self, profession: Profession) -> bool {
        self.restricted_term_roles.contains(&profession)
    }
}
