use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// Toast / notification sink. Fire-and-forget.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
