//! # odata-model
//!
//! Passive resource shapes shared by the OData response decoders.
//!
//! Every decode call produces exactly one [`Container`] wrapping one of
//! [`Feed`], [`Entry`] or [`Property`]; protocol-level error documents
//! normalize to [`ServiceError`].
//!
//! ## Usage
//!
//! ```rust
//! use odata_model::{Container, Feed, Entry};
//!
//! let mut feed = Feed::new(None);
//! feed.push_entry(Entry::default());
//!
//! let container = Container::bare(feed);
//! assert!(container.context_url().is_none());
//! assert_eq!(container.payload().entries().len(), 1);
//! ```

pub mod container;
pub mod entry;
pub mod feed;
pub mod link;
pub mod property;
pub mod service_error;

pub use container::Container;
pub use entry::Entry;
pub use feed::Feed;
pub use link::Link;
pub use property::{Property, PropertyValue};
pub use service_error::{ErrorDetail, ServiceError};

// Re-exported so callers can name link types without depending on `url` directly
pub use url::Url;
