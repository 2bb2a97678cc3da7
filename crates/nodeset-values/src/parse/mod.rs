//! Parsing values out of node-set XML.
//!
//! A value is parsed either from an XML element or from a string that an
//! attribute or a caller already extracted. Both arrive as a [`Surface`]:
//!
//! ```rust
//! use nodeset_values::{parse_value, BuiltinTypeTag, Diagnostics, Payload, Surface};
//! use nodeset_values::util::load_document;
//!
//! let doc = load_document("<Int32>42</Int32>").unwrap();
//! let mut diags = Diagnostics::new();
//!
//! let from_xml = parse_value(
//!     BuiltinTypeTag::Int32,
//!     Some(Surface::Element(doc.root_element())),
//!     &mut diags,
//! )
//! .unwrap();
//! let inline = parse_value(BuiltinTypeTag::Int32, Some(Surface::Inline("42")), &mut diags).unwrap();
//!
//! assert_eq!(from_xml.payload(), &Payload::Int32(42));
//! assert_eq!(from_xml, inline);
//! ```

pub mod dispatch;
mod value;

use roxmltree::Node;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ParseError;
use crate::model::{BuiltinTypeTag, Value};
use crate::options::ParseOptions;
use crate::util::xml::local_name;

pub use dispatch::{
    parse_typed, parse_typed_with_options, parse_value_element, parse_value_element_with_options,
    LIST_PREFIX,
};

/// Where a value's text comes from.
#[derive(Debug, Clone, Copy)]
pub enum Surface<'a, 'input> {
    /// An XML element; its text or named children hold the value.
    Element(Node<'a, 'input>),
    /// A plain string, for example an attribute value.
    Inline(&'a str),
}

/// Parses a value of kind `tag` with default options.
pub fn parse_value(
    tag: BuiltinTypeTag,
    source: Option<Surface<'_, '_>>,
    diags: &mut Diagnostics,
) -> Result<Value, ParseError> {
    parse_value_with_options(tag, source, &ParseOptions::default(), diags)
}

/// Parses a value of kind `tag`.
///
/// With no source the kind's default is returned. An element whose local
/// name differs from the tag name keeps that name as the value's alias.
pub fn parse_value_with_options(
    tag: BuiltinTypeTag,
    source: Option<Surface<'_, '_>>,
    options: &ParseOptions,
    diags: &mut Diagnostics,
) -> Result<Value, ParseError> {
    let mut alias = None;
    let source = match source {
        Some(Surface::Element(node)) if !node.is_element() => {
            diags.report(
                DiagnosticKind::UnexpectedNode,
                format!("expected an element for {tag}, got {:?}", node.node_type()),
            );
            None
        }
        Some(Surface::Element(node)) => {
            let name = local_name(node);
            if name != tag.name() {
                alias = Some(name.to_string());
            }
            source
        }
        other => other,
    };

    let payload = value::parse_payload(tag, source, options, diags)?;
    let value = Value::new(tag, payload);
    Ok(match alias {
        Some(alias) => value.with_alias(alias),
        None => value,
    })
}
