//! Format dispatch for the four resource kinds.

use std::io::Read;

use odata_model::{Container, Entry, Feed, Property, ServiceError};
use tracing::debug;

use crate::config::DeserializerConfig;
use crate::error::{DecodeCause, DecodeError, Result};
use crate::format::{Format, PubFormat};
use crate::json;
use crate::shape::{ResourceKind, TargetShape, WireFamily};
use crate::xml;

/// Decodes OData response bodies into typed resources.
///
/// Each call consumes one input stream to completion and keeps no state
/// between calls, so a single deserializer can be shared freely.
///
/// # Example
///
/// ```rust
/// use odata_deserializer::{Format, ODataDeserializer};
///
/// let deserializer = ODataDeserializer::default();
/// let body = r#"{"error":{"code":"400","message":"bad request"}}"#;
///
/// let error = deserializer.decode_error(body.as_bytes(), Format::Json)?;
/// assert_eq!(error.code, "400");
/// assert_eq!(error.message, "bad request");
/// # Ok::<(), odata_deserializer::DecodeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ODataDeserializer {
    config: DeserializerConfig,
}

impl ODataDeserializer {
    pub fn new(config: DeserializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeserializerConfig {
        &self.config
    }

    /// Decode a collection of entries
    pub fn decode_feed<R: Read>(&self, input: R, format: PubFormat) -> Result<Container<Feed>> {
        match format.family() {
            WireFamily::Xml => self.xml(input, ResourceKind::Feed, xml::map_feed),
            WireFamily::Json => self.json(input, ResourceKind::Feed, json::read_feed),
        }
    }

    /// Decode a single entry
    pub fn decode_entry<R: Read>(&self, input: R, format: PubFormat) -> Result<Container<Entry>> {
        match format.family() {
            WireFamily::Xml => self.xml(input, ResourceKind::Entry, |root, _| xml::map_entry(root)),
            WireFamily::Json => self.json(input, ResourceKind::Entry, json::read_entry),
        }
    }

    /// Decode a single property value
    pub fn decode_property<R: Read>(
        &self,
        input: R,
        format: Format,
    ) -> Result<Container<Property>> {
        match format.family() {
            WireFamily::Xml => self.xml(input, ResourceKind::Property, |root, _| {
                xml::map_property(root)
            }),
            WireFamily::Json => self.json(input, ResourceKind::Property, json::read_property),
        }
    }

    /// Decode an error document returned by the service.
    ///
    /// Errors are leaf responses, so any framing metadata is dropped and the
    /// error itself is returned.
    pub fn decode_error<R: Read>(&self, input: R, format: Format) -> Result<ServiceError> {
        let container = match format.family() {
            WireFamily::Xml => self.xml(input, ResourceKind::Error, |root, _| xml::map_error(root))?,
            WireFamily::Json => self.json(input, ResourceKind::Error, json::read_error)?,
        };
        Ok(container.into_payload())
    }

    fn xml<R: Read, T>(
        &self,
        input: R,
        kind: ResourceKind,
        map: xml::Mapper<T>,
    ) -> Result<Container<T>> {
        let shape = TargetShape::new(kind, WireFamily::Xml);
        debug!(%shape, version = ?self.config.version, "decoding response");

        xml::read(input, kind, &self.config, map).map_err(|cause| normalize(shape, cause))
    }

    fn json<R: Read, T>(
        &self,
        input: R,
        kind: ResourceKind,
        read: fn(R) -> std::result::Result<T, DecodeCause>,
    ) -> Result<Container<T>> {
        let shape = TargetShape::new(kind, WireFamily::Json);
        debug!(%shape, "decoding response");

        read(input)
            .map(Container::bare)
            .map_err(|cause| normalize(shape, cause))
    }
}

fn normalize(shape: TargetShape, cause: DecodeCause) -> DecodeError {
    debug!(%shape, error = %cause, "decode failed");
    DecodeError::new(shape, cause)
}
