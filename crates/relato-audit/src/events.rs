use serde::Serialize;
use tracing::info;

/// A structured audit event for the report pipeline.
///
/// Events are logged via `tracing`, so whatever subscriber the host
/// process installs (console, file, log shipper) receives them. They
/// are the application-level audit trail; issue lists from the
/// compliance scan travel in `details`, never to end users.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing. The details payload rides
    /// along so compliance issues reach the log through the event
    /// itself, not only through pipeline warnings.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.details = ?self.details,
            "audit event"
        );
    }
}
