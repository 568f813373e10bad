//! Result container pairing a decoded payload with response-level metadata.

use serde::Serialize;
use url::Url;

use crate::Link;

/// A decoded resource together with the contextual metadata found at the
/// framing boundary of the response.
///
/// Only the XML path reads metadata off the document's first element; JSON
/// decodes always produce a container with every metadata field absent.
/// Containers are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container<T> {
    context_url: Option<Url>,
    metadata_etag: Option<String>,
    next_link: Option<Link>,
    payload: T,
}

impl<T> Container<T> {
    /// Create a container carrying response metadata
    pub fn new(
        context_url: Option<Url>,
        metadata_etag: Option<String>,
        next_link: Option<Link>,
        payload: T,
    ) -> Self {
        Self {
            context_url,
            metadata_etag,
            next_link,
            payload,
        }
    }

    /// Create a container with no response metadata
    pub fn bare(payload: T) -> Self {
        Self::new(None, None, None, payload)
    }

    /// Base or context location of the response
    pub fn context_url(&self) -> Option<&Url> {
        self.context_url.as_ref()
    }

    /// ETag of the service metadata document the response was produced against
    pub fn metadata_etag(&self) -> Option<&str> {
        self.metadata_etag.as_deref()
    }

    /// Continuation link declared directly under the document element
    pub fn next_link(&self) -> Option<&Link> {
        self.next_link.as_ref()
    }

    /// Whether any response metadata was captured
    pub fn has_metadata(&self) -> bool {
        self.context_url.is_some() || self.metadata_etag.is_some() || self.next_link.is_some()
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Discard the metadata and take the payload
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Transform the payload while keeping the metadata
    pub fn map<U, F>(self, f: F) -> Container<U>
    where
        F: FnOnce(T) -> U,
    {
        Container {
            context_url: self.context_url,
            metadata_etag: self.metadata_etag,
            next_link: self.next_link,
            payload: f(self.payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_container_has_no_metadata() {
        let container = Container::bare(42u32);
        assert!(!container.has_metadata());
        assert!(container.context_url().is_none());
        assert!(container.metadata_etag().is_none());
        assert!(container.next_link().is_none());
        assert_eq!(*container.payload(), 42);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let base = Url::parse("http://svc/Entities").unwrap();
        let container = Container::new(Some(base.clone()), Some("W/\"1\"".to_string()), None, 2u32);

        let mapped = container.map(|n| n * 10);
        assert_eq!(mapped.context_url(), Some(&base));
        assert_eq!(mapped.metadata_etag(), Some("W/\"1\""));
        assert_eq!(mapped.into_payload(), 20);
    }
}
