//! JSON path: serde wire shapes and their mapping onto the model.
//!
//! Both 3.0 (`odata.count`) and 4.0 (`@odata.count`) annotation spellings
//! are accepted.

use std::io::{BufReader, Read};

use indexmap::IndexMap;
use odata_model::{Entry, ErrorDetail, Feed, Property, PropertyValue, ServiceError};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DecodeCause;
use crate::uri;

type JsonObject = Map<String, Value>;

/// Wire shape of a JSON feed
#[derive(Debug, Deserialize)]
struct JsonFeed {
    #[serde(rename = "@odata.context", alias = "odata.metadata", default)]
    context: Option<String>,
    #[serde(rename = "@odata.count", alias = "odata.count", default)]
    count: Option<Value>,
    #[serde(default)]
    value: Vec<JsonObject>,
    #[serde(rename = "@odata.nextLink", alias = "odata.nextLink", default)]
    next_link: Option<String>,
}

/// Wire shape of a JSON error envelope
#[derive(Debug, Deserialize)]
struct JsonErrorBundle {
    #[serde(rename = "error", alias = "odata.error")]
    error: JsonError,
}

#[derive(Debug, Deserialize)]
struct JsonError {
    code: Option<Value>,
    message: Option<JsonMessage>,
    target: Option<String>,
    #[serde(default)]
    details: Vec<JsonErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct JsonErrorDetail {
    code: Option<Value>,
    message: Option<String>,
    target: Option<String>,
}

/// 3.0 wraps the message as `{"lang": "en-US", "value": "..."}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonMessage {
    Text(String),
    Localized {
        #[serde(default)]
        lang: Option<String>,
        value: String,
    },
}

pub(crate) fn read_feed<R: Read>(input: R) -> Result<Feed, DecodeCause> {
    let wire: JsonFeed = serde_json::from_reader(BufReader::new(input))?;

    let base = match wire.context.as_deref() {
        Some(context) => uri::service_root(context)?,
        None => None,
    };
    let mut feed = Feed::new(base.clone());

    if let Some(count) = wire.count.as_ref().map(parse_count).transpose()?.flatten() {
        feed.set_count(count);
    }
    for object in wire.value {
        feed.push_entry(entry_from_object(&object));
    }
    if let Some(next) = wire.next_link {
        feed.set_next(uri::resolve(base.as_ref(), &next)?);
    }

    Ok(feed)
}

pub(crate) fn read_entry<R: Read>(input: R) -> Result<Entry, DecodeCause> {
    let object: JsonObject = serde_json::from_reader(BufReader::new(input))?;
    Ok(entry_from_object(&object))
}

pub(crate) fn read_property<R: Read>(input: R) -> Result<Property, DecodeCause> {
    let value: Value = serde_json::from_reader(BufReader::new(input))?;
    Ok(match value {
        Value::Object(object) => property_from_object(&object),
        other => Property::new(map_value(&other)),
    })
}

pub(crate) fn read_error<R: Read>(input: R) -> Result<ServiceError, DecodeCause> {
    let bundle: JsonErrorBundle = serde_json::from_reader(BufReader::new(input))?;
    let error = bundle.error;

    let code = error
        .code
        .ok_or_else(|| DecodeCause::MissingElement("code".to_string()))?;
    let (message, language) = match error
        .message
        .ok_or_else(|| DecodeCause::MissingElement("message".to_string()))?
    {
        JsonMessage::Text(text) => (text, None),
        JsonMessage::Localized { lang, value } => (value, lang),
    };

    let details = error
        .details
        .into_iter()
        .map(|detail| ErrorDetail {
            code: detail.code.map(code_text).unwrap_or_default(),
            message: detail.message.unwrap_or_default(),
            target: detail.target,
        })
        .collect();

    Ok(ServiceError {
        code: code_text(code),
        message,
        target: error.target,
        language,
        details,
    })
}

/// Some services send error codes as numbers
fn code_text(code: Value) -> String {
    match code {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn entry_from_object(object: &JsonObject) -> Entry {
    let properties = object
        .iter()
        .filter(|(key, _)| !is_annotation(key))
        .map(|(key, value)| Property {
            name: Some(key.clone()),
            type_name: property_type(object, key),
            value: map_value(value),
        })
        .collect();

    Entry {
        id: annotation(object, "id").map(str::to_string),
        type_name: annotation(object, "type").map(type_name),
        etag: annotation(object, "etag").map(str::to_string),
        edit_link: annotation(object, "editLink").map(str::to_string),
        properties,
    }
}

fn property_from_object(object: &JsonObject) -> Property {
    if annotation_value(object, "null") == Some(&Value::Bool(true)) {
        return Property::new(PropertyValue::Null);
    }

    match object.get("value") {
        Some(value) => Property {
            name: None,
            type_name: annotation(object, "type")
                .map(type_name)
                .or_else(|| property_type(object, "value")),
            value: map_value(value),
        },
        // complex values are written inline, without a "value" wrapper
        None => Property {
            name: None,
            type_name: annotation(object, "type").map(type_name),
            value: PropertyValue::Complex(members(object)),
        },
    }
}

fn map_value(value: &Value) -> PropertyValue {
    match value {
        Value::Null => PropertyValue::Null,
        Value::Bool(flag) => PropertyValue::Primitive(flag.to_string()),
        Value::Number(number) => PropertyValue::Primitive(number.to_string()),
        Value::String(text) => PropertyValue::Primitive(text.clone()),
        Value::Array(items) => PropertyValue::Collection(items.iter().map(map_value).collect()),
        Value::Object(object) => PropertyValue::Complex(members(object)),
    }
}

fn members(object: &JsonObject) -> IndexMap<String, PropertyValue> {
    object
        .iter()
        .filter(|(key, _)| !is_annotation(key))
        .map(|(key, value)| (key.clone(), map_value(value)))
        .collect()
}

/// Control information and instance annotations, as opposed to data members
fn is_annotation(key: &str) -> bool {
    key.starts_with("odata.") || key.contains('@')
}

fn annotation_value<'a>(object: &'a JsonObject, term: &str) -> Option<&'a Value> {
    object
        .get(&format!("@odata.{}", term))
        .or_else(|| object.get(&format!("odata.{}", term)))
}

fn annotation<'a>(object: &'a JsonObject, term: &str) -> Option<&'a str> {
    annotation_value(object, term).and_then(Value::as_str)
}

/// Type declared for a member through `Name@odata.type`
fn property_type(object: &JsonObject, name: &str) -> Option<String> {
    object
        .get(&format!("{}@odata.type", name))
        .and_then(Value::as_str)
        .map(type_name)
}

/// Counts arrive as numbers (4.0) or strings (3.0)
fn parse_count(value: &Value) -> Result<Option<u64>, DecodeCause> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| DecodeCause::InvalidCount(number.to_string())),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DecodeCause::InvalidCount(text.clone())),
        other => Err(DecodeCause::InvalidCount(other.to_string())),
    }
}

fn type_name(value: &str) -> String {
    value.trim_start_matches('#').to_string()
}
