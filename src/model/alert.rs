use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: String,
}

impl Alert {
    pub fn warning(
        message: impl Into<String>,
        details: impl Into<String>,
        timestamp: String,
    ) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.into(),
            details: Some(details.into()),
            timestamp,
        }
    }

    pub fn success(
        message: impl Into<String>,
        details: impl Into<String>,
        timestamp: String,
    ) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            details: Some(details.into()),
            timestamp,
        }
    }
}
