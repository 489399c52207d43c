//! Per-route rendering and header policy.
//!
//! A [`RouteTable`] maps path patterns to [`RouteRule`]s. Patterns are made of
//! `/`-separated segments:
//!
//! - a literal segment matches itself
//! - `*` matches exactly one segment
//! - `**` matches zero or more segments (last segment only)
//!
//! When several patterns match a path, rules are merged from the least to the
//! most specific one. Specificity compares segment by segment with
//! literal > `*` > `**`; equal patterns fall back to declaration order, the
//! later declaration winning.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use hangar_config::RouteRuleConfig;
use serde::Serialize;
use serde::ser::Serializer;

/// Header names and values that make the page cross-origin isolated.
pub const CROSS_ORIGIN_OPENER_POLICY: (&str, &str) = ("Cross-Origin-Opener-Policy", "same-origin");
pub const CROSS_ORIGIN_EMBEDDER_POLICY: (&str, &str) =
    ("Cross-Origin-Embedder-Policy", "require-corp");

/// Headers added when a rule enables CORS.
const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "*"),
    ("Access-Control-Allow-Headers", "*"),
    ("Access-Control-Max-Age", "0"),
];

/// Route table error.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Malformed path pattern.
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Pattern as written.
        pattern: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Header name or value that cannot be sent over HTTP.
    #[error("Invalid header {name:?} in route {pattern:?}")]
    InvalidHeader {
        /// Pattern of the offending rule.
        pattern: String,
        /// Header name.
        name: String,
    },
}

/// Ordered header list with case-insensitive keys.
///
/// Inserting an existing key replaces its value in place, so the position of
/// the first declaration is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderList(Vec<(String, String)>);

impl HeaderList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderList {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.insert(name, value);
        }
        list
    }
}

impl Serialize for HeaderList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Rendering and header policy for a route.
///
/// `None` flags mean "not set here"; see [`RouteRule::renders_on_server`] and
/// [`RouteRule::cors_enabled`] for the effective values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RouteRule {
    /// Server-side rendering flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssr: Option<bool>,
    /// Permissive CORS flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,
    /// Explicit response headers.
    #[serde(skip_serializing_if = "HeaderList::is_empty")]
    pub headers: HeaderList,
}

impl RouteRule {
    /// Rule that only disables server-side rendering.
    #[must_use]
    pub fn client_only() -> Self {
        Self {
            ssr: Some(false),
            ..Self::default()
        }
    }

    /// Whether pages under this rule are rendered on the server (default: yes).
    #[must_use]
    pub fn renders_on_server(&self) -> bool {
        self.ssr.unwrap_or(true)
    }

    /// Whether CORS headers are added (default: no).
    #[must_use]
    pub fn cors_enabled(&self) -> bool {
        self.cors.unwrap_or(false)
    }

    /// Headers to put on the response: CORS defaults (when enabled) overlaid
    /// by the explicit headers.
    #[must_use]
    pub fn response_headers(&self) -> HeaderList {
        let mut headers = HeaderList::new();
        if self.cors_enabled() {
            for (name, value) in CORS_HEADERS {
                headers.insert(name, value);
            }
        }
        for (name, value) in self.headers.iter() {
            headers.insert(name, value);
        }
        headers
    }

    /// Overlay a more specific rule on top of this one.
    ///
    /// Explicit flags replace inherited ones; headers replace same-named
    /// inherited values and never remove inherited keys.
    fn overlay(&mut self, specific: &Self) {
        if specific.ssr.is_some() {
            self.ssr = specific.ssr;
        }
        if specific.cors.is_some() {
            self.cors = specific.cors;
        }
        for (name, value) in specific.headers.iter() {
            self.headers.insert(name, value);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*`
    One,
    /// `**`
    Rest,
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Self::Literal(_) => 2,
            Self::One => 1,
            Self::Rest => 0,
        }
    }
}

/// Parsed route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches `path`.
    ///
    /// Empty segments are ignored, so `/new/` matches `/new`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = split_path(path).collect();
        let mut index = 0;
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::One => {
                    if index >= parts.len() {
                        return false;
                    }
                }
                Segment::Literal(literal) => {
                    if parts.get(index) != Some(&literal.as_str()) {
                        return false;
                    }
                }
            }
            index += 1;
        }
        index == parts.len()
    }

    /// Compare specificity; `Greater` means `self` is more specific.
    #[must_use]
    pub fn cmp_specificity(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            match (self.segments.get(i), other.segments.get(i)) {
                (Some(a), Some(b)) => match a.rank().cmp(&b.rank()) {
                    Ordering::Equal => {}
                    unequal => return unequal,
                },
                // `/games` is more specific than `/games/**`, less than `/games/x`
                (None, Some(b)) => {
                    return if *b == Segment::Rest {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                }
                (Some(a), None) => {
                    return if *a == Segment::Rest {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                (None, None) => break,
            }
        }
        Ordering::Equal
    }
}

impl FromStr for RoutePattern {
    type Err = RouteError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with /"));
        }

        let mut segments = Vec::new();
        for part in split_path(pattern) {
            if segments.last() == Some(&Segment::Rest) {
                return Err(invalid("** must be the last segment"));
            }
            let segment = match part {
                "**" => Segment::Rest,
                "*" => Segment::One,
                literal if literal.contains('*') => {
                    return Err(invalid("* must be a whole segment"));
                }
                literal => Segment::Literal(literal.to_owned()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_owned(),
            segments,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Built-in rules: cross-origin isolation everywhere, client rendering for
/// the game editor and game player pages.
#[must_use]
pub fn builtin_rules() -> Vec<(&'static str, RouteRule)> {
    vec![
        (
            "/**",
            RouteRule {
                headers: [CROSS_ORIGIN_OPENER_POLICY, CROSS_ORIGIN_EMBEDDER_POLICY]
                    .into_iter()
                    .collect(),
                ..RouteRule::default()
            },
        ),
        ("/new", RouteRule::client_only()),
        ("/games/*", RouteRule::client_only()),
    ]
}

/// Ordered set of route rules.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    rules: Vec<(RoutePattern, RouteRule)>,
}

impl RouteTable {
    /// Build a table from `(pattern, rule)` pairs in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed pattern or header.
    pub fn new<P: AsRef<str>>(
        rules: impl IntoIterator<Item = (P, RouteRule)>,
    ) -> Result<Self, RouteError> {
        let mut table = Self::default();
        for (pattern, rule) in rules {
            table.push(pattern.as_ref(), rule)?;
        }
        Ok(table)
    }

    /// Built-in rules followed by configured `[[routes]]` entries.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed pattern or header.
    pub fn with_builtin(extra: &[RouteRuleConfig]) -> Result<Self, RouteError> {
        let mut table = Self::new(builtin_rules())?;
        for entry in extra {
            let rule = RouteRule {
                ssr: entry.ssr,
                cors: entry.cors,
                headers: entry
                    .headers
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect(),
            };
            table.push(&entry.pattern, rule)?;
        }
        Ok(table)
    }

    fn push(&mut self, pattern: &str, rule: RouteRule) -> Result<(), RouteError> {
        let pattern: RoutePattern = pattern.parse()?;
        for (name, value) in rule.headers.iter() {
            if !is_valid_header_name(name) || !is_valid_header_value(value) {
                return Err(RouteError::InvalidHeader {
                    pattern: pattern.to_string(),
                    name: name.to_owned(),
                });
            }
        }
        self.rules.push((pattern, rule));
        Ok(())
    }

    /// Resolve the effective rule for a request path.
    ///
    /// Never fails: a path no pattern matches gets the default rule
    /// (server-rendered, no CORS, no headers).
    #[must_use]
    pub fn resolve(&self, path: &str) -> RouteRule {
        let mut matching: Vec<&(RoutePattern, RouteRule)> = self
            .rules
            .iter()
            .filter(|(pattern, _)| pattern.matches(path))
            .collect();
        // Stable sort keeps declaration order among equally specific patterns.
        matching.sort_by(|(a, _), (b, _)| a.cmp_specificity(b));

        let mut resolved = RouteRule::default();
        for (_, rule) in matching {
            resolved.overlay(rule);
        }
        tracing::debug!(path, ssr = resolved.renders_on_server(), "Resolved route rule");
        resolved
    }

    /// Iterate patterns and rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&RoutePattern, &RouteRule)> {
        self.rules.iter().map(|(p, r)| (p, r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// HTTP token characters (RFC 9110 `tchar`).
fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

fn is_valid_header_value(value: &str) -> bool {
    value.chars().all(|c| c == '\t' || !c.is_control())
}
