//! Error types for decoding operations
//!
//! Callers only ever see [`DecodeError`]. The underlying [`DecodeCause`]
//! stays reachable through [`DecodeError::cause`] and
//! [`std::error::Error::source`].

use thiserror::Error;

use crate::shape::{ResourceKind, TargetShape};

/// Decoding failed for a given target shape
#[derive(Debug, Error)]
#[error("failed to decode {shape}")]
pub struct DecodeError {
    shape: TargetShape,
    #[source]
    cause: DecodeCause,
}

/// Errors raised while reading or mapping a response body
#[derive(Debug, Error)]
pub enum DecodeCause {
    /// XML token stream could not be read or rewritten
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Reframed XML document could not be built into a tree
    #[error("XML structure error: {0}")]
    XmlTree(#[from] xmltree::ParseError),

    /// JSON document could not be parsed or did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML stream ended before any element started
    #[error("no start element found before end of document")]
    MissingStartElement,

    /// The XML document element is not the one the resource kind requires
    #[error("unexpected document element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// A required element or member is absent
    #[error("missing required element: {0}")]
    MissingElement(String),

    /// Inline count is not a non-negative integer
    #[error("invalid inline count: {0}")]
    InvalidCount(String),

    /// A link could not be parsed or resolved
    #[error("invalid URI '{value}': {source}")]
    InvalidUri {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl DecodeError {
    pub fn new(shape: TargetShape, cause: DecodeCause) -> Self {
        Self { shape, cause }
    }

    /// Shape that was being decoded when the failure happened
    pub fn shape(&self) -> TargetShape {
        self.shape
    }

    pub fn kind(&self) -> ResourceKind {
        self.shape.kind
    }

    pub fn cause(&self) -> &DecodeCause {
        &self.cause
    }

    pub fn into_cause(self) -> DecodeCause {
        self.cause
    }
}

/// Result alias for the public decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;
