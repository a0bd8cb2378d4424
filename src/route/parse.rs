//! URI to [`Destination`] parsing.
//!
//! Any recognized link whose path is unknown, or lacks a required id,
//! resolves to [`Destination::Home`]. Only URIs that cannot be split or
//! that use a foreign scheme or host are errors.

use std::borrow::Cow;

use super::{RouteError, RouterConfig, destination::Destination};

struct UriParts<'a> {
    scheme: &'a str,
    authority: &'a str,
    path: &'a str,
    query: &'a str,
}

pub fn parse_uri(config: &RouterConfig, uri: &str) -> Result<Destination, RouteError> {
    let parts = split_uri(uri).ok_or_else(|| RouteError::Malformed(uri.to_string()))?;
    let malformed = || RouteError::Malformed(uri.to_string());

    if parts.scheme.eq_ignore_ascii_case(&config.custom_scheme) {
        let mut segments = Vec::new();
        if !parts.authority.is_empty() {
            segments.push(decode(parts.authority).ok_or_else(malformed)?.into_owned());
        }
        segments.extend(path_segments(parts.path).ok_or_else(malformed)?);
        let query = query_pairs(parts.query).ok_or_else(malformed)?;
        return Ok(route_custom(&segments, &query));
    }

    if parts.scheme.eq_ignore_ascii_case("https") || parts.scheme.eq_ignore_ascii_case("http") {
        let host = parts.authority.rsplit('@').next().unwrap_or_default();
        let host = host.split(':').next().unwrap_or_default();
        if !host.eq_ignore_ascii_case(&config.universal_host) {
            return Err(RouteError::UnsupportedHost(host.to_string()));
        }
        let segments = path_segments(parts.path).ok_or_else(malformed)?;
        let base = path_segments(&config.universal_base_path).ok_or_else(malformed)?;
        let rest = segments.strip_prefix(base.as_slice()).unwrap_or(&segments[..]);
        let query = query_pairs(parts.query).ok_or_else(malformed)?;
        return Ok(route_universal(rest, &query));
    }

    Err(RouteError::UnsupportedScheme(parts.scheme.to_string()))
}

fn route_custom(segments: &[String], query: &[(String, String)]) -> Destination {
    let head = segments.first().map(String::as_str);
    let arg = segments.get(1).cloned();
    match (head, arg) {
        (Some("explore"), _) => Destination::Explore,
        (Some("collection"), _) => Destination::Collection,
        (Some("wishlist"), _) => Destination::Wishlist,
        (Some("share"), _) => Destination::Share,
        (Some("toy"), Some(id)) => Destination::Release(id),
        (Some("series"), Some(name)) => Destination::Series(name.replace('-', " ")),
        (Some("photos"), Some(id)) => Destination::PhotoGallery(id),
        (Some("event"), Some(id)) => Destination::Event(id),
        (Some("event"), None) => query_id(query).map(Destination::Event).unwrap_or(Destination::Home),
        _ => Destination::Home,
    }
}

fn route_universal(segments: &[String], query: &[(String, String)]) -> Destination {
    match segments {
        [head, id, ..] if head == "events" => Destination::Event(id.clone()),
        [head] if head == "event" => query_id(query).map(Destination::Event).unwrap_or(Destination::Home),
        _ => Destination::Home,
    }
}

fn query_id(query: &[(String, String)]) -> Option<String> {
    query
        .iter()
        .find(|(k, v)| k == "id" && !v.is_empty())
        .map(|(_, v)| v.clone())
}

fn split_uri(uri: &str) -> Option<UriParts<'_>> {
    let uri = uri.trim();
    let (scheme, rest) = uri.split_once(':')?;
    let valid_scheme = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return None;
    }

    let rest = rest.split('#').next().unwrap_or_default();
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(idx) => (&after[..idx], &after[idx..]),
            None => (after, ""),
        },
        None => ("", rest),
    };

    Some(UriParts {
        scheme,
        authority,
        path,
        query,
    })
}

fn path_segments(path: &str) -> Option<Vec<String>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| decode(s).map(Cow::into_owned))
        .collect()
}

fn query_pairs(query: &str) -> Option<Vec<(String, String)>> {
    query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode(k)?.into_owned(), decode(v)?.into_owned()))
        })
        .collect()
}

fn decode(s: &str) -> Option<Cow<'_, str>> {
    urlencoding::decode(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(uri: &str) -> Result<Destination, RouteError> {
        parse_uri(&RouterConfig::default(), uri)
    }

    #[test]
    fn host_form_and_path_form_agree() {
        assert_eq!(parse("lafufu://toy/lemon"), Ok(Destination::Release("lemon".into())));
        assert_eq!(parse("lafufu:///toy/lemon"), Ok(Destination::Release("lemon".into())));
    }

    #[test]
    fn event_query_form() {
        assert_eq!(parse("lafufu://event?id=summer-25"), Ok(Destination::Event("summer-25".into())));
    }

    #[test]
    fn unknown_or_incomplete_paths_go_home() {
        assert_eq!(parse("lafufu://nowhere"), Ok(Destination::Home));
        assert_eq!(parse("lafufu://toy"), Ok(Destination::Home));
        assert_eq!(parse("lafufu://"), Ok(Destination::Home));
        assert_eq!(parse("https://sforsethi.github.io/Lafufu/about"), Ok(Destination::Home));
    }

    #[test]
    fn universal_links() {
        assert_eq!(
            parse("https://sforsethi.github.io/Lafufu/events/launch"),
            Ok(Destination::Event("launch".into()))
        );
        assert_eq!(parse("https://sforsethi.github.io/events/launch"), Ok(Destination::Event("launch".into())));
        assert_eq!(parse("https://sforsethi.github.io/event?id=42"), Ok(Destination::Event("42".into())));
    }

    #[test]
    fn foreign_links_are_errors() {
        assert!(matches!(parse("mailto:someone"), Err(RouteError::UnsupportedScheme(_))));
        assert!(matches!(parse("https://example.com/events/1"), Err(RouteError::UnsupportedHost(_))));
        assert!(matches!(parse("no scheme here"), Err(RouteError::Malformed(_))));
        assert!(matches!(parse("lafufu://toy/%FF"), Err(RouteError::Malformed(_))));
    }

    #[test]
    fn percent_encoded_segments_decode() {
        assert_eq!(parse("lafufu://toy/over%20there"), Ok(Destination::Release("over there".into())));
    }
}
