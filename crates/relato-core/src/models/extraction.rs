use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single labeled score extracted from an assessment record.
///
/// The extraction collaborator sometimes returns numeric values as
/// strings ("105") and sometimes as numbers; both are part of the wire
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractedScore {
    pub label: String,
    pub value: ScoreValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

/// Closed category set for extracted instruments. The Portuguese wire
/// strings are shared with the extraction collaborator and the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Cognitivo,
    #[serde(rename = "TDAH")]
    Tdah,
    #[serde(rename = "TEA")]
    Tea,
    Aprendizagem,
    Linguagem,
    Emocional,
    Outro,
}

/// One assessment record produced by the extraction collaborator.
/// Consumed read-only by the pipeline; never recalculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractedResult {
    pub instrument: String,
    pub category: Category,
    pub scores: Vec<ExtractedScore>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}
