//! Reframing of XML responses.
//!
//! A response may carry a declaration, comments, processing instructions or
//! whitespace before its document element. [`Frame::read`] drops that noise,
//! copies the document element and every token after it into a fresh buffer,
//! and reads the contextual metadata off the document element on the way.

use std::io::{BufRead, BufReader, Read};

use odata_model::{Container, Link};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use tracing::trace;
use url::Url;

use crate::config::DeserializerConfig;
use crate::error::DecodeCause;
use crate::uri;

/// A self-contained XML document starting at the first element of a response
#[derive(Debug)]
pub(crate) struct Frame {
    document: Vec<u8>,
    root: String,
    context_url: Option<Url>,
    metadata_etag: Option<String>,
    next_link: Option<Link>,
}

impl Frame {
    /// Consume `input` to the end and reframe it.
    pub(crate) fn read<R: Read>(input: R, config: &DeserializerConfig) -> Result<Self, DecodeCause> {
        let mut reader = Reader::from_reader(BufReader::new(input));
        let mut buf = Vec::new();

        let (start, is_empty) = skip_to_first_start(&mut reader, &mut buf)?;

        let root = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let context_url = context_url(&start, config)?;
        let base = match attribute(&start, b"base")? {
            Some(value) => uri::absolute(context_url.as_ref(), &value)?,
            None => None,
        };
        let metadata_etag = attribute(&start, b"metadata-etag")?;

        let mut writer = Writer::new(Vec::new());
        if is_empty {
            writer.write_event(Event::Empty(start.borrow()))?;
        } else {
            writer.write_event(Event::Start(start.borrow()))?;
        }

        let next_href = copy_remaining(&mut reader, &mut buf, &mut writer, is_empty)?;
        let next_link = next_href
            .map(|href| uri::resolve(base.as_ref().or(context_url.as_ref()), &href))
            .transpose()?;

        let document = writer.into_inner();
        trace!(
            root = %root,
            bytes = document.len(),
            next = ?next_link.as_ref().map(Link::as_str),
            "reframed XML document"
        );

        Ok(Self {
            document,
            root,
            context_url,
            metadata_etag,
            next_link,
        })
    }

    /// The reframed document, starting at the document element
    pub(crate) fn document(&self) -> &[u8] {
        &self.document
    }

    /// Local name of the document element
    pub(crate) fn root(&self) -> &str {
        &self.root
    }

    /// Absolute context location the document's relative links resolve against
    pub(crate) fn context_url(&self) -> Option<&Url> {
        self.context_url.as_ref()
    }

    /// Wrap a payload mapped from this frame with the frame's metadata
    pub(crate) fn into_container<T>(self, payload: T) -> Container<T> {
        Container::new(self.context_url, self.metadata_etag, self.next_link, payload)
    }
}

/// Drop every token before the first start element and return that element
/// together with whether it was self-closing.
fn skip_to_first_start<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
) -> Result<(BytesStart<'static>, bool), DecodeCause> {
    let mut skipped = 0usize;
    loop {
        let found = match reader.read_event_into(buf)? {
            Event::Start(start) => Some((start.into_owned(), false)),
            Event::Empty(start) => Some((start.into_owned(), true)),
            Event::Eof => return Err(DecodeCause::MissingStartElement),
            _ => None,
        };
        buf.clear();

        if let Some(found) = found {
            trace!(skipped, "found document element");
            return Ok(found);
        }
        skipped += 1;
    }
}

/// Copy every remaining token into `writer`, returning the `href` of the
/// first `<link rel="next">` found directly under the document element.
fn copy_remaining<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    writer: &mut Writer<Vec<u8>>,
    root_is_empty: bool,
) -> Result<Option<String>, DecodeCause> {
    let mut depth: usize = if root_is_empty { 0 } else { 1 };
    let mut next_href = None;

    loop {
        match reader.read_event_into(buf)? {
            Event::Eof => break,
            event => {
                match &event {
                    Event::Start(element) => {
                        if depth == 1 && next_href.is_none() {
                            next_href = continuation_href(element)?;
                        }
                        depth += 1;
                    }
                    Event::Empty(element) => {
                        if depth == 1 && next_href.is_none() {
                            next_href = continuation_href(element)?;
                        }
                    }
                    Event::End(_) => depth = depth.saturating_sub(1),
                    _ => {}
                }
                writer.write_event(event)?;
            }
        }
        buf.clear();
    }

    Ok(next_href)
}

/// First context attribute, in the order the service version prefers,
/// that names an absolute location. A relative context is resolved against
/// an absolute `base` when there is one.
fn context_url(start: &BytesStart, config: &DeserializerConfig) -> Result<Option<Url>, DecodeCause> {
    let base = match attribute(start, b"base")? {
        Some(value) => uri::absolute(None, &value)?,
        None => None,
    };
    for name in config.version.context_attributes() {
        if let Some(value) = attribute(start, name)? {
            if let Some(url) = uri::absolute(base.as_ref(), &value)? {
                return Ok(Some(url));
            }
        }
    }
    Ok(None)
}

fn continuation_href(element: &BytesStart) -> Result<Option<String>, DecodeCause> {
    if element.local_name().as_ref() != b"link" {
        return Ok(None);
    }
    match attribute(element, b"rel")? {
        Some(rel) if rel == "next" => attribute(element, b"href"),
        _ => Ok(None),
    }
}

/// Unescaped value of the attribute with the given local name.
fn attribute(element: &BytesStart, local_name: &[u8]) -> Result<Option<String>, DecodeCause> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if is_namespace_declaration(&attr.key) {
            continue;
        }
        if attr.key.local_name().as_ref() == local_name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn is_namespace_declaration(key: &QName) -> bool {
    key.as_ref() == b"xmlns" || key.prefix().is_some_and(|prefix| prefix.as_ref() == b"xmlns")
}
