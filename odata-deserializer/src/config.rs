//! Deserializer configuration

/// Protocol version of the service producing the responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceVersion {
    V30,
    #[default]
    V40,
}

impl ServiceVersion {
    /// Start element attributes holding the context location, by priority.
    ///
    /// 4.0 Atom documents carry `metadata:context`; both versions may carry
    /// `xml:base`.
    pub(crate) fn context_attributes(self) -> &'static [&'static [u8]] {
        match self {
            ServiceVersion::V30 => &[b"base"],
            ServiceVersion::V40 => &[b"context", b"base"],
        }
    }
}

/// Configuration for [`ODataDeserializer`](crate::ODataDeserializer)
#[derive(Debug, Clone)]
pub struct DeserializerConfig {
    /// Protocol version of the responses
    pub version: ServiceVersion,
    /// Reject XML documents whose first element does not match the
    /// requested resource kind
    pub validate_root: bool,
}

impl Default for DeserializerConfig {
    fn default() -> Self {
        Self {
            version: ServiceVersion::default(),
            validate_root: true,
        }
    }
}

impl DeserializerConfig {
    #[must_use]
    pub fn with_version(mut self, version: ServiceVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_root_validation(mut self, validate_root: bool) -> Self {
        self.validate_root = validate_root;
        self
    }
}
