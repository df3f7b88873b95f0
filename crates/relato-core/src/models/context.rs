use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Professional role of the report author. The Portuguese display
/// strings are the wire contract with the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Profession {
    #[serde(rename = "Psicólogo")]
    Psicologo,
    #[serde(rename = "Psicopedagogo")]
    Psicopedagogo,
    #[serde(rename = "Fonoaudiólogo")]
    Fonoaudiologo,
    #[serde(rename = "Terapeuta Ocupacional")]
    TerapeutaOcupacional,
    #[serde(rename = "Pedagogo")]
    Pedagogo,
    #[serde(rename = "Neuropsicólogo")]
    Neuropsicologo,
    #[serde(rename = "Outro")]
    Outro,
}

impl Profession {
    pub fn display_name(&self) -> &'static str {
        match self {
            Profession::Psicologo => "Psicólogo",
            Profession::Psicopedagogo => "Psicopedagogo",
            Profession::Fonoaudiologo => "Fonoaudiólogo",
            Profession::TerapeutaOcupacional => "Terapeuta Ocupacional",
            Profession::Pedagogo => "Pedagogo",
            Profession::Neuropsicologo => "Neuropsicólogo",
            Profession::Outro => "Outro",
        }
    }
}

/// Intended audience of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReportObjective {
    #[serde(rename = "Pais / Família")]
    PaisFamilia,
    #[serde(rename = "Escola")]
    Escola,
    #[serde(rename = "Equipe Multiprofissional")]
    EquipeMultiprofissional,
    #[serde(rename = "Uso Clínico Interno")]
    UsoClinicoInterno,
    #[serde(rename = "Jurídico")]
    Juridico,
}

impl ReportObjective {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportObjective::PaisFamilia => "Pais / Família",
            ReportObjective::Escola => "Escola",
            ReportObjective::EquipeMultiprofissional => "Equipe Multiprofissional",
            ReportObjective::UsoClinicoInterno => "Uso Clínico Interno",
            ReportObjective::Juridico => "Jurídico",
        }
    }
}

/// Who is writing and for whom. Supplied by the user before generation
/// and immutable for the lifetime of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportContext {
    pub profession: Profession,
    pub objective: ReportObjective,
}
