//! Wire format selectors passed in by the transport layer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::shape::WireFamily;

/// Format of feed and entry payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PubFormat {
    /// Atom syndication format
    Atom,
    /// JSON with minimal metadata
    #[default]
    Json,
    /// JSON without metadata annotations
    JsonNoMetadata,
    /// JSON with every metadata annotation
    JsonFullMetadata,
}

/// Format of property and error payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    Xml,
    #[default]
    Json,
    JsonNoMetadata,
    JsonFullMetadata,
}

/// A format name that matches no known format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format: {0}")]
pub struct UnknownFormat(pub String);

impl PubFormat {
    pub fn is_xml(self) -> bool {
        matches!(self, PubFormat::Atom)
    }

    pub fn family(self) -> WireFamily {
        if self.is_xml() {
            WireFamily::Xml
        } else {
            WireFamily::Json
        }
    }

    /// MIME type a service responds with for this format
    pub fn content_type(self) -> &'static str {
        match self {
            PubFormat::Atom => "application/atom+xml",
            PubFormat::Json => "application/json;odata.metadata=minimal",
            PubFormat::JsonNoMetadata => "application/json;odata.metadata=none",
            PubFormat::JsonFullMetadata => "application/json;odata.metadata=full",
        }
    }
}

impl Format {
    pub fn is_xml(self) -> bool {
        matches!(self, Format::Xml)
    }

    pub fn family(self) -> WireFamily {
        if self.is_xml() {
            WireFamily::Xml
        } else {
            WireFamily::Json
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Xml => "application/xml",
            Format::Json => "application/json;odata.metadata=minimal",
            Format::JsonNoMetadata => "application/json;odata.metadata=none",
            Format::JsonFullMetadata => "application/json;odata.metadata=full",
        }
    }
}

impl From<bool> for Format {
    /// `true` selects XML, `false` JSON
    fn from(is_xml: bool) -> Self {
        if is_xml {
            Format::Xml
        } else {
            Format::Json
        }
    }
}

impl FromStr for PubFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atom" => Ok(PubFormat::Atom),
            "json" | "json_minimal" => Ok(PubFormat::Json),
            "json_no_metadata" => Ok(PubFormat::JsonNoMetadata),
            "json_full_metadata" => Ok(PubFormat::JsonFullMetadata),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "json" | "json_minimal" => Ok(Format::Json),
            "json_no_metadata" => Ok(Format::JsonNoMetadata),
            "json_full_metadata" => Ok(Format::JsonFullMetadata),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PubFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}
