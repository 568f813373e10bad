//! Links that may or may not be resolvable to an absolute location.

use std::fmt;

use serde::Serialize;
use url::Url;

/// A link as declared by a response.
///
/// Services are free to write relative references. When the response gives
/// no absolute location to resolve them against, the reference is kept as
/// written instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Link {
    Absolute(Url),
    Relative(String),
}

impl Link {
    pub fn as_str(&self) -> &str {
        match self {
            Link::Absolute(url) => url.as_str(),
            Link::Relative(reference) => reference,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Link::Absolute(url) => Some(url),
            Link::Relative(_) => None,
        }
    }

    pub fn into_url(self) -> Option<Url> {
        match self {
            Link::Absolute(url) => Some(url),
            Link::Relative(_) => None,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Link::Absolute(_))
    }
}

impl From<Url> for Link {
    fn from(url: Url) -> Self {
        Link::Absolute(url)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_link_keeps_reference() {
        let link = Link::Relative("Entities?$skip=1".to_string());
        assert_eq!(link.as_str(), "Entities?$skip=1");
        assert!(!link.is_absolute());
        assert!(link.as_url().is_none());
        assert_eq!(link.to_string(), "Entities?$skip=1");
    }

    #[test]
    fn test_absolute_link() {
        let url = Url::parse("http://svc/Entities?$skip=1").unwrap();
        let link = Link::from(url.clone());
        assert!(link.is_absolute());
        assert_eq!(link.as_url(), Some(&url));
        assert_eq!(link.into_url(), Some(url));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let link = Link::Relative("Entities?$skip=1".to_string());
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!("Entities?$skip=1")
        );

        let link = Link::from(Url::parse("http://svc/").unwrap());
        assert_eq!(serde_json::to_value(&link).unwrap(), serde_json::json!("http://svc/"));
    }
}
