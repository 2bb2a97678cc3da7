//! Node identifiers.
//!
//! An identifier is a namespace index plus at most one populated form of
//! each kind: numeric, GUID, opaque and string. When more than one form is
//! present the canonical form is picked by precedence
//! numeric > GUID > opaque > string.
//!
//! Textual form, as written in node-set documents:
//! ```text
//! ns=<u16>;i=<u32>
//! ns=<u16>;g=<hex>-<hex>-...
//! ns=<u16>;o=<opaque>
//! ns=<u16>;s=<string>
//! ```
//! The canonical string always carries the namespace and prints the opaque
//! form with a `b=` prefix. Equality and hashing go through the canonical
//! string, so two identifiers are equal exactly when they print the same.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::guid::{format_groups, parse_hex_groups};
use crate::model::Guid;

/// The form an identifier resolves to under precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind<'a> {
    Numeric(u32),
    Guid(&'a [u64]),
    Opaque(&'a str),
    String(&'a str),
}

/// A namespace-qualified node identifier.
#[derive(Debug, Clone)]
pub struct Identifier {
    namespace: u16,
    numeric: Option<u32>,
    guid: Option<Vec<u64>>,
    opaque: Option<String>,
    string: Option<String>,
}

impl Identifier {
    fn empty(namespace: u16) -> Self {
        Self {
            namespace,
            numeric: None,
            guid: None,
            opaque: None,
            string: None,
        }
    }

    pub fn numeric(namespace: u16, id: u32) -> Self {
        Self::empty(namespace).with_numeric(id)
    }

    pub fn string(namespace: u16, s: impl Into<String>) -> Self {
        Self::empty(namespace).with_string(s)
    }

    pub fn opaque(namespace: u16, s: impl Into<String>) -> Self {
        Self::empty(namespace).with_opaque(s)
    }

    /// GUID identifier from raw hex groups. The group count is not checked.
    pub fn guid(namespace: u16, groups: impl Into<Vec<u64>>) -> Self {
        Self::empty(namespace).with_guid(groups)
    }

    pub fn with_namespace(mut self, namespace: u16) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_numeric(mut self, id: u32) -> Self {
        self.numeric = Some(id);
        self
    }

    pub fn with_guid(mut self, groups: impl Into<Vec<u64>>) -> Self {
        self.guid = Some(groups.into());
        self
    }

    pub fn with_opaque(mut self, s: impl Into<String>) -> Self {
        self.opaque = Some(s.into());
        self
    }

    pub fn with_string(mut self, s: impl Into<String>) -> Self {
        self.string = Some(s.into());
        self
    }

    /// Parses identifier text.
    ///
    /// Absent, empty or whitespace-only input yields the default `ns=0;i=0`.
    /// Otherwise the trimmed text is split on `;` and each segment must start
    /// with one of `ns=`, `i=`, `o=`, `g=` or `s=`. A later segment of the same
    /// kind overwrites an earlier one. At least one non-namespace segment is
    /// required.
    pub fn parse(text: Option<&str>) -> Result<Self, ParseError> {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(Self::default());
        };

        let mut id = Self::empty(0);
        for segment in text.split(';') {
            if let Some(rest) = segment.strip_prefix("ns=") {
                id.namespace = rest
                    .parse()
                    .map_err(|e| ParseError::identifier(text, format!("namespace {rest:?}: {e}")))?;
            } else if let Some(rest) = segment.strip_prefix("i=") {
                id.numeric = Some(
                    rest.parse()
                        .map_err(|e| ParseError::identifier(text, format!("numeric id {rest:?}: {e}")))?,
                );
            } else if let Some(rest) = segment.strip_prefix("o=") {
                id.opaque = Some(rest.to_string());
            } else if let Some(rest) = segment.strip_prefix("g=") {
                id.guid = Some(
                    parse_hex_groups(rest).map_err(|e| ParseError::identifier(text, e.message))?,
                );
            } else if let Some(rest) = segment.strip_prefix("s=") {
                id.string = Some(rest.to_string());
            } else {
                return Err(ParseError::identifier(
                    text,
                    format!("unknown segment {segment:?}"),
                ));
            }
        }

        if !id.has_form() {
            return Err(ParseError::identifier(text, "no identifier segment"));
        }
        Ok(id)
    }

    fn has_form(&self) -> bool {
        self.numeric.is_some() || self.guid.is_some() || self.opaque.is_some() || self.string.is_some()
    }

    pub fn namespace(&self) -> u16 {
        self.namespace
    }

    /// The form used for the canonical string.
    pub fn kind(&self) -> IdentifierKind<'_> {
        if let Some(n) = self.numeric {
            IdentifierKind::Numeric(n)
        } else if let Some(g) = &self.guid {
            IdentifierKind::Guid(g)
        } else if let Some(o) = &self.opaque {
            IdentifierKind::Opaque(o)
        } else if let Some(s) = &self.string {
            IdentifierKind::String(s)
        } else {
            // Every constructor sets at least one form.
            IdentifierKind::Numeric(0)
        }
    }

    pub fn as_numeric(&self) -> Option<u32> {
        self.numeric
    }

    pub fn as_guid(&self) -> Option<&[u64]> {
        self.guid.as_deref()
    }

    pub fn as_opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    pub fn as_string(&self) -> Option<&str> {
        self.string.as_deref()
    }

    /// Returns the GUID form as a [`Guid`] when it has exactly five groups.
    pub fn to_guid(&self) -> Option<Guid> {
        let groups = self.guid.as_deref()?;
        Some(Guid(groups.try_into().ok()?))
    }

    /// `ns=<n>;` followed by `i=`, `g=`, `b=` or `s=` per precedence.
    pub fn canonical_string(&self) -> String {
        let ns = self.namespace;
        match self.kind() {
            IdentifierKind::Numeric(n) => format!("ns={ns};i={n}"),
            IdentifierKind::Guid(g) => format!("ns={ns};g={}", format_groups(g)),
            IdentifierKind::Opaque(o) => format!("ns={ns};b={o}"),
            IdentifierKind::String(s) => format!("ns={ns};s={s}"),
        }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::numeric(0, 0)
    }
}

impl From<Guid> for Identifier {
    fn from(guid: Guid) -> Self {
        Self::guid(0, guid.0)
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_string() == other.canonical_string()
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_string().hash(state);
    }
}
