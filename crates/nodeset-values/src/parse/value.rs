//! Per-kind payload parsers.
//!
//! Each parser reads from an optional [`Surface`]. A missing surface, or an
//! element without text, produces the kind's default payload.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ParseError;
use crate::model::{
    BuiltinTypeTag, Guid, Identifier, LocalizedText, Payload, QualifiedName,
};
use crate::options::ParseOptions;
use crate::parse::Surface;
use crate::util::datetime::parse_timestamp;
use crate::util::xml::{descendant_text, find_descendant, first_child_element};

/// Parses the payload for `tag` from `source`.
pub(crate) fn parse_payload(
    tag: BuiltinTypeTag,
    source: Option<Surface<'_, '_>>,
    options: &ParseOptions,
    diags: &mut Diagnostics,
) -> Result<Payload, ParseError> {
    let text = immediate_text(source);
    let payload = match tag {
        BuiltinTypeTag::Boolean => Payload::Boolean(parse_boolean(text)),
        BuiltinTypeTag::SByte => Payload::SByte(parse_number(tag, text)?),
        BuiltinTypeTag::Byte => Payload::Byte(parse_number(tag, text)?),
        BuiltinTypeTag::Int16 => Payload::Int16(parse_number(tag, text)?),
        BuiltinTypeTag::UInt16 => Payload::UInt16(parse_number(tag, text)?),
        BuiltinTypeTag::Int32 => Payload::Int32(parse_number(tag, text)?),
        BuiltinTypeTag::UInt32 => Payload::UInt32(parse_number(tag, text)?),
        // Status codes are stored as their unsigned 32-bit value. Only the
        // immediate text is read; the structured `<Code>` child form gives 0.
        BuiltinTypeTag::StatusCode => {
            if let (None, Some(Surface::Element(node))) = (text, source) {
                if first_child_element(node).is_some() {
                    trace!(tag = %tag, "status code has child elements but no text; using 0");
                }
            }
            Payload::UInt32(parse_number(tag, text)?)
        }
        BuiltinTypeTag::Int64 => Payload::Int64(parse_number(tag, text)?),
        BuiltinTypeTag::UInt64 => Payload::UInt64(parse_number(tag, text)?),
        BuiltinTypeTag::Float => Payload::Float(parse_float(tag, text)?),
        BuiltinTypeTag::Double => Payload::Double(parse_float(tag, text)?),
        BuiltinTypeTag::String | BuiltinTypeTag::XmlElement | BuiltinTypeTag::ByteString => {
            Payload::Text(text.unwrap_or_default().to_string())
        }
        BuiltinTypeTag::LocalizedText => {
            Payload::LocalizedText(parse_localized_text(source, options))
        }
        BuiltinTypeTag::QualifiedName => Payload::QualifiedName(parse_qualified_name(source)?),
        BuiltinTypeTag::DateTime => match text {
            Some(t) => match parse_timestamp(t) {
                Ok(dt) => Payload::DateTime(dt),
                Err(e) => {
                    diags.report(DiagnosticKind::MalformedTimestamp, e.message);
                    Payload::DateTime(options.clock.now())
                }
            },
            None => Payload::DateTime(options.clock.now()),
        },
        BuiltinTypeTag::Guid => Payload::Guid(parse_guid(text, diags)),
        BuiltinTypeTag::NodeId => Payload::NodeId(parse_node_id(source)?),
        BuiltinTypeTag::ExpandedNodeId
        | BuiltinTypeTag::ExtensionObject
        | BuiltinTypeTag::DataValue
        | BuiltinTypeTag::Variant
        | BuiltinTypeTag::DiagnosticInfo => {
            if source.is_some() {
                diags.report(
                    DiagnosticKind::UnimplementedValueKind,
                    format!("no parser for {tag} values; payload left unset"),
                );
            }
            Payload::Unset
        }
    };
    trace!(tag = %tag, payload = %payload, "parsed payload");
    Ok(payload)
}

/// Immediate text content of the surface.
fn immediate_text<'a>(source: Option<Surface<'a, '_>>) -> Option<&'a str> {
    match source? {
        Surface::Element(node) => node.text(),
        Surface::Inline(text) => Some(text),
    }
}

/// Anything that does not contain `false`, in any case, is true.
fn parse_boolean(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.to_lowercase().contains("false"))
}

/// Parses trimmed decimal text at the width of `T`.
///
/// Whitespace-only text counts as absent.
fn parse_number<T>(tag: BuiltinTypeTag, text: Option<&str>) -> Result<T, ParseError>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(T::default()),
        Some(t) => t.parse().map_err(|e| ParseError::numeric(tag, t, e)),
    }
}

/// Like [`parse_number`], but a finite literal that overflows to infinity at
/// the width of `T` is out of range. Spelled-out `inf`/`infinity` is kept.
fn parse_float<T>(tag: BuiltinTypeTag, text: Option<&str>) -> Result<T, ParseError>
where
    T: FromStr + Default + Copy + Into<f64>,
    T::Err: fmt::Display,
{
    let value: T = parse_number(tag, text)?;
    if value.into().is_infinite() {
        let literal = text.map(str::trim).unwrap_or_default();
        if !spells_infinity(literal) {
            return Err(ParseError::numeric(tag, literal, "out of range"));
        }
    }
    Ok(value)
}

fn spells_infinity(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']).to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

fn parse_localized_text(source: Option<Surface<'_, '_>>, options: &ParseOptions) -> LocalizedText {
    let mut lt = LocalizedText {
        locale: options.default_locale.clone(),
        text: String::new(),
    };
    match source {
        Some(Surface::Element(node)) => {
            if let Some(locale) = descendant_text(node, "Locale") {
                lt.locale = locale.to_string();
            }
            if let Some(text) = descendant_text(node, "Text") {
                lt.text = text.to_string();
            }
        }
        Some(Surface::Inline(text)) => lt.text = text.to_string(),
        None => {}
    }
    lt
}

fn parse_qualified_name(source: Option<Surface<'_, '_>>) -> Result<QualifiedName, ParseError> {
    let tag = BuiltinTypeTag::QualifiedName;
    let mut qn = QualifiedName::default();
    match source {
        Some(Surface::Element(node)) => {
            if find_descendant(node, "NamespaceIndex").is_some() {
                qn.namespace_index = parse_number(tag, descendant_text(node, "NamespaceIndex"))?;
            }
            if let Some(name) = descendant_text(node, "Name") {
                qn.name = name.to_string();
            }
        }
        Some(Surface::Inline(text)) => match text.split_once(':') {
            Some((ns, name)) => {
                qn.namespace_index = ns.trim().parse().map_err(|e| ParseError::numeric(tag, ns, e))?;
                qn.name = name.to_string();
            }
            None => qn.name = text.to_string(),
        },
        None => {}
    }
    Ok(qn)
}

/// Malformed GUID text falls back to the all-zero GUID.
fn parse_guid(text: Option<&str>, diags: &mut Diagnostics) -> Guid {
    let Some(text) = text else {
        return Guid::NIL;
    };
    match Guid::parse(text) {
        Ok(guid) => guid,
        Err(e) => {
            diags.report(DiagnosticKind::MalformedGuid, e.message);
            Guid::NIL
        }
    }
}

/// Uses the text of an `Identifier` child when present, else the surface text.
fn parse_node_id(source: Option<Surface<'_, '_>>) -> Result<Identifier, ParseError> {
    let text = match source {
        Some(Surface::Element(node)) => match find_descendant(node, "Identifier") {
            Some(child) => child.text(),
            None => node.text(),
        },
        Some(Surface::Inline(text)) => Some(text),
        None => None,
    };
    Identifier::parse(text)
}
