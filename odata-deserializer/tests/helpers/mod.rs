//! Test helpers for fixture-based decoding tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// A response body captured from a service
#[derive(Debug, Clone)]
pub struct ResponseFixture {
    pub name: String,
    pub body: Vec<u8>,
}

impl ResponseFixture {
    /// Load a fixture from the fixtures directory
    pub fn load(filename: &str) -> Self {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures");
        path.push(filename);

        let body = fs::read(&path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));

        Self {
            name: filename.to_string(),
            body,
        }
    }

    /// Body as a readable stream, the way a transport hands it over
    pub fn reader(&self) -> &[u8] {
        &self.body
    }

    /// The first `len` bytes of the body, simulating a cut-off response
    pub fn truncated(&self, len: usize) -> &[u8] {
        &self.body[..len.min(self.body.len())]
    }
}

/// Build an Atom feed with one entry per id, in the given order
pub fn atom_feed(ids: &[u32], next: Option<&str>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\"?>\n<!-- generated -->\n<feed base=\"http://svc/Entities\">\n",
    );
    for id in ids {
        xml.push_str(&format!(
            "  <entry><id>http://svc/Entities({})</id></entry>\n",
            id
        ));
    }
    if let Some(href) = next {
        xml.push_str(&format!("  <link rel=\"next\" href=\"{}\"/>\n", href));
    }
    xml.push_str("</feed>\n");
    xml
}

/// Build a JSON feed with one entry per id, in the given order
pub fn json_feed(ids: &[u32]) -> String {
    let entries: Vec<String> = ids
        .iter()
        .map(|id| format!("{{\"@odata.id\":\"http://svc/Entities({})\",\"ID\":{}}}", id, id))
        .collect();
    format!(
        "{{\"@odata.context\":\"http://svc/$metadata#Entities\",\"value\":[{}]}}",
        entries.join(",")
    )
}
