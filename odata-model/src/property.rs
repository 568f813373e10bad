//! Field value resource.

use indexmap::IndexMap;
use serde::Serialize;

/// A single field value, decodable on its own or as part of an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property name; absent for a bare `value` document
    pub name: Option<String>,
    /// Declared EDM type, e.g. `Edm.Int32`
    pub type_name: Option<String>,
    pub value: PropertyValue,
}

/// Decoded shape of a property value.
///
/// Primitive values keep their lexical form, so `5` decoded from JSON and
/// `<m:value>5</m:value>` decoded from XML compare equal. Complex members
/// keep document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    Null,
    Primitive(String),
    Complex(IndexMap<String, PropertyValue>),
    Collection(Vec<PropertyValue>),
}

impl Property {
    /// Create an unnamed, untyped property
    pub fn new(value: PropertyValue) -> Self {
        Self {
            name: None,
            type_name: None,
            value,
        }
    }

    /// Create a named, untyped property
    pub fn named(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: Some(name.into()),
            type_name: None,
            value,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

impl PropertyValue {
    pub fn primitive(text: impl Into<String>) -> Self {
        Self::Primitive(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Lexical form of a primitive value
    pub fn as_primitive(&self) -> Option<&str> {
        match self {
            Self::Primitive(text) => Some(text),
            _ => None,
        }
    }

    /// Member of a complex value
    pub fn member(&self, name: &str) -> Option<&PropertyValue> {
        match self {
            Self::Complex(members) => members.get(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_member_lookup() {
        let mut members = IndexMap::new();
        members.insert("City".to_string(), PropertyValue::primitive("Redmond"));
        members.insert("Zip".to_string(), PropertyValue::Null);
        let address = PropertyValue::Complex(members);

        assert_eq!(
            address.member("City").and_then(PropertyValue::as_primitive),
            Some("Redmond")
        );
        assert!(address.member("Zip").is_some_and(PropertyValue::is_null));
        assert!(address.member("Street").is_none());
        assert!(PropertyValue::primitive("x").member("City").is_none());
    }

    #[test]
    fn test_complex_members_keep_insertion_order() {
        let members: IndexMap<String, PropertyValue> = ["Zip", "City", "Street"]
            .into_iter()
            .map(|name| (name.to_string(), PropertyValue::Null))
            .collect();
        let address = PropertyValue::Complex(members);

        let PropertyValue::Complex(members) = &address else {
            panic!("expected a complex value");
        };
        let names: Vec<_> = members.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zip", "City", "Street"]);
    }

    #[test]
    fn test_serialize_tagged_value() {
        let property = Property::named("Rating", PropertyValue::primitive("4")).with_type("Edm.Int32");
        let json = serde_json::to_value(&property).unwrap();

        assert_eq!(json["name"], "Rating");
        assert_eq!(json["type_name"], "Edm.Int32");
        assert_eq!(json["value"]["kind"], "primitive");
        assert_eq!(json["value"]["value"], "4");
    }
}
