//! Atom/XML structural mapping.
//!
//! Works on local names only, so `m:count`, `d:Name` and `metadata:value`
//! are matched as `count`, `Name` and `value`.

use indexmap::IndexMap;
use odata_model::{Entry, ErrorDetail, Feed, Property, PropertyValue, ServiceError};
use url::Url;
use xmltree::{Element, XMLNode};

use crate::error::DecodeCause;
use crate::uri;

/// Relative links resolve against `base`, then against `context`.
pub(crate) fn map_feed(root: &Element, context: Option<&Url>) -> Result<Feed, DecodeCause> {
    let base = match attr(root, "base") {
        Some(value) => uri::absolute(context, value)?,
        None => None,
    };
    let mut feed = Feed::new(base.clone());

    for child in child_elements(root) {
        match child.name.as_str() {
            "count" => feed.set_count(parse_count(&text(child))?),
            "entry" => feed.push_entry(map_entry(child)?),
            // the first continuation link wins
            "link" if feed.is_last_page() && attr(child, "rel") == Some("next") => {
                if let Some(href) = attr(child, "href") {
                    feed.set_next(uri::resolve(base.as_ref().or(context), href)?);
                }
            }
            _ => {}
        }
    }

    Ok(feed)
}

pub(crate) fn map_entry(element: &Element) -> Result<Entry, DecodeCause> {
    let mut entry = Entry {
        etag: attr(element, "etag").map(str::to_string),
        ..Default::default()
    };

    for child in child_elements(element) {
        match child.name.as_str() {
            "id" => entry.id = Some(text(child).trim().to_string()),
            "category" if entry.type_name.is_none() => {
                entry.type_name = attr(child, "term").map(type_name);
            }
            "link" if attr(child, "rel") == Some("edit") => {
                entry.edit_link = attr(child, "href").map(str::to_string);
            }
            "content" => {
                if let Some(properties) = child.get_child("properties") {
                    push_properties(&mut entry, properties)?;
                }
            }
            // media link entries carry their properties outside <content>
            "properties" => push_properties(&mut entry, child)?,
            _ => {}
        }
    }

    Ok(entry)
}

pub(crate) fn map_property(element: &Element) -> Result<Property, DecodeCause> {
    let type_name = attr(element, "type").map(type_name);
    let value = map_value(element, type_name.as_deref());
    Ok(Property {
        // 4.0 single-property documents are rooted at <m:value>
        name: (element.name != "value").then(|| element.name.clone()),
        type_name,
        value,
    })
}

pub(crate) fn map_error(root: &Element) -> Result<ServiceError, DecodeCause> {
    let code = required_child(root, "code")?;
    let message = required_child(root, "message")?;

    let details = match root.get_child("details") {
        Some(details) => child_elements(details)
            .filter(|child| child.name == "detail")
            .map(map_error_detail)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(ServiceError {
        code: text(code),
        message: text(message),
        target: root.get_child("target").map(text),
        language: attr(message, "lang").map(str::to_string),
        details,
    })
}

fn map_error_detail(detail: &Element) -> Result<ErrorDetail, DecodeCause> {
    Ok(ErrorDetail {
        code: text(required_child(detail, "code")?),
        message: text(required_child(detail, "message")?),
        target: detail.get_child("target").map(text),
    })
}

fn push_properties(entry: &mut Entry, properties: &Element) -> Result<(), DecodeCause> {
    for child in child_elements(properties) {
        entry.properties.push(map_property(child)?);
    }
    Ok(())
}

fn map_value(element: &Element, type_name: Option<&str>) -> PropertyValue {
    if attr(element, "null") == Some("true") {
        return PropertyValue::Null;
    }

    let children: Vec<&Element> = child_elements(element).collect();
    let is_collection = type_name.is_some_and(|t| t.starts_with("Collection("))
        || (!children.is_empty() && children.iter().all(|child| child.name == "element"));

    if is_collection {
        PropertyValue::Collection(
            children
                .iter()
                .map(|child| map_value(child, declared_type(child)))
                .collect(),
        )
    } else if !children.is_empty() {
        let members: IndexMap<String, PropertyValue> = children
            .iter()
            .map(|child| (child.name.clone(), map_value(child, declared_type(child))))
            .collect();
        PropertyValue::Complex(members)
    } else {
        PropertyValue::Primitive(text(element))
    }
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

/// Attribute value by local name, whether or not the tree kept the prefix
fn attr<'a>(element: &'a Element, local_name: &str) -> Option<&'a str> {
    if let Some(value) = element.attributes.get(local_name) {
        return Some(value.as_str());
    }
    element
        .attributes
        .iter()
        .find(|(key, _)| {
            key.split_once(':')
                .is_some_and(|(prefix, local)| prefix != "xmlns" && local == local_name)
        })
        .map(|(_, value)| value.as_str())
}

fn text(element: &Element) -> String {
    element
        .get_text()
        .map(|text| text.into_owned())
        .unwrap_or_default()
}

fn required_child<'a>(element: &'a Element, name: &str) -> Result<&'a Element, DecodeCause> {
    element
        .get_child(name)
        .ok_or_else(|| DecodeCause::MissingElement(name.to_string()))
}

fn parse_count(value: &str) -> Result<u64, DecodeCause> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| DecodeCause::InvalidCount(value.to_string()))
}

fn declared_type(element: &Element) -> Option<&str> {
    attr(element, "type").map(|value| value.trim_start_matches('#'))
}

/// 4.0 Atom writes type names as `#Namespace.Type`
fn type_name(value: &str) -> String {
    value.trim_start_matches('#').to_string()
}
