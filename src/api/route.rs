//! Route templates and their resolution into concrete request URLs.
//!
//! Templates use `{name}` placeholders. Resolution is a plain substitution:
//! values are inserted as-is (the transport percent-encodes when building
//! the request), parameters without a matching placeholder are ignored and
//! placeholders without a parameter stay in the output.

use std::{fmt, ops::Range};

use crate::region::Region;

/// Placeholder substituted by the region code in the configured base URL.
pub const REGION_PLACEHOLDER: &str = "{region}";

/// Substitute the region code into a base URL template.
///
/// A template without [`REGION_PLACEHOLDER`] is returned unchanged.
pub fn resolve_host(base_url_template: &str, region: Region) -> String {
    base_url_template.replace(REGION_PLACEHOLDER, region.as_str())
}

/// A path with `{name}` placeholders, one per logical API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteTemplate(&'static str);

impl RouteTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholder_spans(self.0).map(|(_, name)| name).collect()
    }

    /// Fill the placeholders with the given parameters, matched by name.
    ///
    /// The template is scanned once, so a value that itself looks like a
    /// placeholder is never substituted again. When a name is given twice the
    /// first value wins.
    pub fn resolve(&self, params: &[PathParam]) -> String {
        let template = self.0;
        let mut resolved = String::with_capacity(template.len());
        let mut cursor = 0;

        for (span, name) in placeholder_spans(template) {
            let Some(param) = params.iter().find(|p| p.name == name) else {
                continue;
            };
            resolved.push_str(&template[cursor..span.start]);
            resolved.push_str(&param.value);
            cursor = span.end;
        }
        resolved.push_str(&template[cursor..]);

        resolved
    }

    /// Names of placeholders still present in an already resolved path.
    pub fn unresolved(path: &str) -> Vec<&str> {
        placeholder_spans(path).map(|(_, name)| name).collect()
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A `(name, value)` pair substituted into a [`RouteTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParam {
    pub name: String,
    pub value: String,
}

impl PathParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Yields the byte range (braces included) and name of every `{name}` in `s`.
fn placeholder_spans(s: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    let mut cursor = 0;

    std::iter::from_fn(move || {
        loop {
            let open = cursor + s[cursor..].find('{')?;
            let close = open + 1 + s[open + 1..].find('}')?;
            let name = &s[open + 1..close];

            if name.contains('{') {
                // `{a{b}`: restart from the innermost brace.
                cursor = open + 1;
                continue;
            }

            cursor = close + 1;
            if !name.is_empty() {
                return Some((open..close + 1, name));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PARAMS: RouteTemplate = RouteTemplate::new("/mastery/{a}/by-champion/{b}");

    #[test]
    fn resolve_fills_every_placeholder() {
        let path = TWO_PARAMS.resolve(&[PathParam::new("a", "X"), PathParam::new("b", "Y")]);

        assert_eq!(path, "/mastery/X/by-champion/Y");
        assert!(!path.contains('{') && !path.contains('}'));
    }

    #[test]
    fn resolve_ignores_parameter_order() {
        let forward = TWO_PARAMS.resolve(&[PathParam::new("a", "X"), PathParam::new("b", "Y")]);
        let backward = TWO_PARAMS.resolve(&[PathParam::new("b", "Y"), PathParam::new("a", "X")]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn resolve_keeps_missing_placeholders_and_drops_extra_params() {
        let path = TWO_PARAMS.resolve(&[PathParam::new("a", "X"), PathParam::new("zzz", "ignored")]);

        assert_eq!(path, "/mastery/X/by-champion/{b}");
        assert_eq!(RouteTemplate::unresolved(&path), vec!["b"]);
    }

    #[test]
    fn resolve_replaces_repeated_placeholders() {
        let template = RouteTemplate::new("/{id}/twin/{id}");

        assert_eq!(template.resolve(&[PathParam::new("id", "7")]), "/7/twin/7");
    }

    #[test]
    fn resolve_inserts_values_verbatim() {
        let template = RouteTemplate::new("/summoner/{summonerName}");
        let params = [
            PathParam::new("summonerName", "{other} Ste nene"),
            PathParam::new("other", "nope"),
        ];

        assert_eq!(template.resolve(&params), "/summoner/{other} Ste nene");
    }

    #[test]
    fn resolve_without_params_returns_template() {
        let template = RouteTemplate::new("/lol/platform/v3/champion-rotations");

        assert_eq!(template.resolve(&[]), template.as_str());
    }

    #[test]
    fn placeholders_are_listed_in_order() {
        assert_eq!(TWO_PARAMS.placeholders(), vec!["a", "b"]);
        assert_eq!(RouteTemplate::new("/a{b{c}d}/{}").placeholders(), vec!["c"]);
    }

    #[test]
    fn resolve_host_substitutes_region() {
        assert_eq!(
            resolve_host("{region}.service.example", Region::Lan),
            "LAN.service.example"
        );
    }

    #[test]
    fn resolve_host_without_placeholder_is_unchanged() {
        assert_eq!(
            resolve_host("https://api.example.com", Region::Euw),
            "https://api.example.com"
        );
    }
}
