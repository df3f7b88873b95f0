use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw clinical source material, before extraction. Image content is a
/// base64 payload (optionally a full data URL); text content is the
/// pasted spreadsheet or result table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawInput {
    pub source: SourceKind,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SourceKind {
    Image,
    Text,
}
