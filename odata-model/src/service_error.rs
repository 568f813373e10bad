//! Protocol-level error payload.
//!
//! A `ServiceError` is what a service reports about a failed request. It is
//! a successfully decoded resource, not a local decode failure.

use serde::Serialize;

/// Normalized error payload shared by the XML and JSON error documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
    /// Target of the error, e.g. the offending property name
    pub target: Option<String>,
    /// Language of `message`, when the service tagged it
    pub language: Option<String>,
    pub details: Vec<ErrorDetail>,
}

/// Additional error reported alongside the main one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
}

impl ServiceError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(target) = &self.target {
            write!(f, " (target: {})", target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut error = ServiceError::new("400", "bad request");
        assert_eq!(error.to_string(), "[400] bad request");

        error.target = Some("Price".to_string());
        assert_eq!(error.to_string(), "[400] bad request (target: Price)");
    }
}
