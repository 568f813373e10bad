//! XML path: reframe the response, build a tree, map it onto the model.

mod framing;
mod mapper;

use std::io::Read;

use odata_model::Container;
use url::Url;
use xmltree::Element;

use crate::config::DeserializerConfig;
use crate::error::DecodeCause;
use crate::shape::ResourceKind;

pub(crate) use mapper::{map_entry, map_error, map_feed, map_property};

/// Maps a document element onto one resource type, given the absolute
/// context location read off that element
pub(crate) type Mapper<T> = fn(&Element, Option<&Url>) -> Result<T, DecodeCause>;

/// Decode one XML response into a container carrying the framing metadata.
pub(crate) fn read<R: Read, T>(
    input: R,
    kind: ResourceKind,
    config: &DeserializerConfig,
    map: Mapper<T>,
) -> Result<Container<T>, DecodeCause> {
    let frame = framing::Frame::read(input, config)?;

    if config.validate_root {
        if let Some(expected) = kind.xml_root() {
            if frame.root() != expected {
                return Err(DecodeCause::UnexpectedRoot {
                    expected,
                    found: frame.root().to_string(),
                });
            }
        }
    }

    let root = Element::parse(frame.document())?;
    let payload = map(&root, frame.context_url())?;
    Ok(frame.into_container(payload))
}
