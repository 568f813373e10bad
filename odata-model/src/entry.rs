//! Single record resource.

use serde::Serialize;

use crate::Property;

/// A single record, the unit inside a feed's entry sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entry {
    /// Entity identifier (Atom `<id>`, JSON `@odata.id`)
    pub id: Option<String>,
    /// Qualified entity type name
    pub type_name: Option<String>,
    /// Entity tag used for concurrency checks
    pub etag: Option<String>,
    /// Edit link as written by the service, possibly relative
    pub edit_link: Option<String>,
    /// Structural properties in the order they were decoded
    pub properties: Vec<Property>,
}

impl Entry {
    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyValue;

    #[test]
    fn test_property_lookup() {
        let entry = Entry {
            properties: vec![
                Property::named("ID", PropertyValue::primitive("1")),
                Property::named("Name", PropertyValue::primitive("Bread")),
            ],
            ..Default::default()
        };

        assert_eq!(
            entry.property("Name").map(|p| &p.value),
            Some(&PropertyValue::primitive("Bread"))
        );
        assert!(entry.property("Price").is_none());
    }
}
