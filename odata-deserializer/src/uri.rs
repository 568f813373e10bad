//! Link parsing helpers shared by both mappers.

use odata_model::Link;
use url::{ParseError, Url};

use crate::error::DecodeCause;

/// Parse `href`, resolving it against `base` when one is known.
///
/// A relative reference with nothing to resolve against is kept as written.
/// Only references that cannot be parsed at all are rejected.
pub(crate) fn resolve(base: Option<&Url>, href: &str) -> Result<Link, DecodeCause> {
    let href = href.trim();
    let parsed = match Url::parse(href) {
        Err(ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(href),
            None => return Ok(Link::Relative(href.to_string())),
        },
        parsed => parsed,
    };
    parsed.map(Link::Absolute).map_err(|source| DecodeCause::InvalidUri {
        value: href.to_string(),
        source,
    })
}

/// Like [`resolve`], for locations that are only useful when absolute.
pub(crate) fn absolute(base: Option<&Url>, href: &str) -> Result<Option<Url>, DecodeCause> {
    resolve(base, href).map(Link::into_url)
}

/// Service root of a JSON context URL: everything before `$metadata`.
///
/// `http://svc/$metadata#Entities` becomes `http://svc/`.
pub(crate) fn service_root(context: &str) -> Result<Option<Url>, DecodeCause> {
    let root = match context.find("$metadata") {
        Some(pos) => &context[..pos],
        None => context,
    };
    absolute(None, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_without_base() {
        let link = resolve(None, "http://svc/Entities?skip=2").unwrap();
        assert_eq!(link.as_url().map(Url::as_str), Some("http://svc/Entities?skip=2"));
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let base = Url::parse("http://svc/").unwrap();
        let link = resolve(Some(&base), "Entities?$skip=2").unwrap();
        assert_eq!(link.as_url().map(Url::as_str), Some("http://svc/Entities?$skip=2"));
    }

    #[test]
    fn test_relative_without_base_is_kept() {
        let link = resolve(None, " Entities?$skip=2 ").unwrap();
        assert_eq!(link, Link::Relative("Entities?$skip=2".to_string()));
        assert_eq!(absolute(None, "/svc/").unwrap(), None);
    }

    #[test]
    fn test_malformed_absolute_is_rejected() {
        let err = resolve(None, "http://[::1").unwrap_err();
        assert!(matches!(
            err,
            DecodeCause::InvalidUri { source: ParseError::InvalidIpv6Address, .. }
        ));
    }

    #[test]
    fn test_service_root() {
        assert_eq!(
            service_root("http://svc/$metadata#Entities").unwrap().map(String::from),
            Some("http://svc/".to_string())
        );
        assert_eq!(
            service_root("http://svc/Entities").unwrap().map(String::from),
            Some("http://svc/Entities".to_string())
        );
        assert_eq!(service_root("$metadata#Entities").unwrap(), None);
    }
}
