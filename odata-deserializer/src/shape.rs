//! Resource kinds and target shapes named in decode errors.

use std::fmt;

/// The four resource kinds a response body can decode into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Feed,
    Entry,
    Property,
    Error,
}

/// Wire family a payload is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFamily {
    Xml,
    Json,
}

/// A resource kind bound to the wire family it is decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetShape {
    pub kind: ResourceKind,
    pub family: WireFamily,
}

impl ResourceKind {
    /// Local name the XML document element must carry, if any.
    ///
    /// Properties are rooted at their own name (or `value`), so they have none.
    pub fn xml_root(self) -> Option<&'static str> {
        match self {
            ResourceKind::Feed => Some("feed"),
            ResourceKind::Entry => Some("entry"),
            ResourceKind::Property => None,
            ResourceKind::Error => Some("error"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Feed => "feed",
            ResourceKind::Entry => "entry",
            ResourceKind::Property => "property",
            ResourceKind::Error => "error",
        }
    }
}

impl TargetShape {
    pub fn new(kind: ResourceKind, family: WireFamily) -> Self {
        Self { kind, family }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WireFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFamily::Xml => f.write_str("XML"),
            WireFamily::Json => f.write_str("JSON"),
        }
    }
}

impl fmt::Display for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.kind)
    }
}
