//! # odata-deserializer
//!
//! Turns raw OData response bodies (Atom/XML or JSON) into the typed
//! resources of [`odata_model`]: feeds, entries, properties and service
//! errors.
//!
//! A caller that already holds the response bytes and knows which resource
//! it expects picks one of the four entry points on [`ODataDeserializer`]
//! and passes the wire format reported by the transport:
//!
//! ```rust
//! use odata_deserializer::{ODataDeserializer, PubFormat};
//!
//! let body = r#"<?xml version="1.0"?>
//! <!-- generated -->
//! <feed xml:base="http://svc/Entities">
//!   <entry><id>http://svc/Entities(1)</id></entry>
//!   <link rel="next" href="http://svc/Entities?skip=1"/>
//! </feed>"#;
//!
//! let deserializer = ODataDeserializer::default();
//! let container = deserializer.decode_feed(body.as_bytes(), PubFormat::Atom)?;
//!
//! let feed = container.payload();
//! assert_eq!(feed.entries().len(), 1);
//! assert_eq!(feed.next().map(|u| u.as_str()), Some("http://svc/Entities?skip=1"));
//! # Ok::<(), odata_deserializer::DecodeError>(())
//! ```
//!
//! Every failure, whatever the format or resource kind, surfaces as a single
//! [`DecodeError`] naming the target shape and carrying the underlying cause.

pub mod config;
pub mod deserializer;
pub mod error;
pub mod format;
pub mod logging;
pub mod shape;

mod json;
mod uri;
mod xml;

pub use config::{DeserializerConfig, ServiceVersion};
pub use deserializer::ODataDeserializer;
pub use error::{DecodeCause, DecodeError, Result};
pub use format::{Format, PubFormat, UnknownFormat};
pub use shape::{ResourceKind, TargetShape, WireFamily};

// Re-export the resource model for convenient top-level access
pub use odata_model::{
    Container, Entry, ErrorDetail, Feed, Link, Property, PropertyValue, ServiceError,
};
