//! Selecting a value kind by type name.
//!
//! Node-set documents name the kind of a value in two places: the `DataType`
//! attribute of a variable, and the element name of the child inside a
//! `<Value>` wrapper. Both resolve through one registry.

use lazy_static::lazy_static;
use roxmltree::Node;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ParseError;
use crate::model::{BuiltinTypeTag, Value};
use crate::options::ParseOptions;
use crate::parse::{parse_value_with_options, Surface};
use crate::util::xml::{child_elements, first_child_element, local_name};

/// Element name prefix of array values, as in `ListOfInt32`.
pub const LIST_PREFIX: &str = "ListOf";

lazy_static! {
    static ref TYPE_NAMES: FxHashMap<&'static str, BuiltinTypeTag> =
        BuiltinTypeTag::ALL.iter().map(|t| (t.name(), *t)).collect();
}

impl BuiltinTypeTag {
    /// Looks up a builtin kind by its exact type name.
    pub fn from_type_name(name: &str) -> Option<BuiltinTypeTag> {
        TYPE_NAMES.get(name).copied()
    }
}

/// Parses a value whose kind is given by name.
///
/// Unknown names record [`DiagnosticKind::UnknownTypeName`] and return
/// `Ok(None)`.
pub fn parse_typed(
    type_name: &str,
    source: Option<Surface<'_, '_>>,
    diags: &mut Diagnostics,
) -> Result<Option<Value>, ParseError> {
    parse_typed_with_options(type_name, source, &ParseOptions::default(), diags)
}

pub fn parse_typed_with_options(
    type_name: &str,
    source: Option<Surface<'_, '_>>,
    options: &ParseOptions,
    diags: &mut Diagnostics,
) -> Result<Option<Value>, ParseError> {
    let Some(tag) = BuiltinTypeTag::from_type_name(type_name) else {
        diags.report(
            DiagnosticKind::UnknownTypeName,
            format!("{type_name:?} is not a builtin type"),
        );
        return Ok(None);
    };
    parse_value_with_options(tag, source, options, diags).map(Some)
}

/// Parses the content of a `<Value>` wrapper element.
///
/// ```text
/// <Value><Int32>7</Int32></Value>
/// <Value><ListOfString><String>a</String><String>b</String></ListOfString></Value>
/// ```
pub fn parse_value_element(
    node: Node<'_, '_>,
    diags: &mut Diagnostics,
) -> Result<Option<Value>, ParseError> {
    parse_value_element_with_options(node, &ParseOptions::default(), diags)
}

pub fn parse_value_element_with_options(
    node: Node<'_, '_>,
    options: &ParseOptions,
    diags: &mut Diagnostics,
) -> Result<Option<Value>, ParseError> {
    if !node.is_element() || !local_name(node).to_lowercase().contains("value") {
        diags.report(
            DiagnosticKind::UnexpectedNode,
            format!("expected a value wrapper element, got {:?}", node.tag_name().name()),
        );
        return Ok(None);
    }
    let Some(content) = first_child_element(node) else {
        diags.report(
            DiagnosticKind::UnexpectedNode,
            format!("value wrapper {:?} has no element child", local_name(node)),
        );
        return Ok(None);
    };

    let name = local_name(content);
    if let Some(item_type) = name.strip_prefix(LIST_PREFIX) {
        let Some(tag) = BuiltinTypeTag::from_type_name(item_type) else {
            diags.report(
                DiagnosticKind::UnknownTypeName,
                format!("{name:?} is not a list of a builtin type"),
            );
            return Ok(None);
        };
        let items = child_elements(content)
            .map(|item| parse_value_with_options(tag, Some(Surface::Element(item)), options, diags))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(tag = %tag, count = items.len(), "parsed list value");
        return Ok(Some(Value::list(tag, items)));
    }

    parse_typed_with_options(name, Some(Surface::Element(content)), options, diags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Payload;
    use crate::util::xml::load_document;

    #[test]
    fn test_registry_covers_all_tags() {
        for tag in BuiltinTypeTag::ALL {
            assert_eq!(BuiltinTypeTag::from_type_name(tag.name()), Some(tag));
        }
        assert_eq!(BuiltinTypeTag::from_type_name("int32"), None);
        assert_eq!(BuiltinTypeTag::from_type_name("Structure"), None);
    }

    #[test]
    fn test_parse_typed() {
        let mut diags = Diagnostics::new();
        let v = parse_typed("UInt64", Some(Surface::Inline("18446744073709551615")), &mut diags)
            .unwrap()
            .unwrap();
        assert_eq!(v.payload(), &Payload::UInt64(u64::MAX));

        assert!(parse_typed("Structure", Some(Surface::Inline("1")), &mut diags).unwrap().is_none());
        assert!(diags.contains(DiagnosticKind::UnknownTypeName));
    }

    #[test]
    fn test_scalar_value_element() {
        let doc = load_document("<Value><Int32>7</Int32></Value>").unwrap();
        let mut diags = Diagnostics::new();
        let v = parse_value_element(doc.root_element(), &mut diags).unwrap().unwrap();
        assert_eq!(v.tag(), BuiltinTypeTag::Int32);
        assert_eq!(v.payload(), &Payload::Int32(7));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_list_value_element() {
        let doc = load_document(
            "<Value>\n  <ListOfString>\n    <String>a</String>\n    <String>b</String>\n  </ListOfString>\n</Value>",
        )
        .unwrap();
        let mut diags = Diagnostics::new();
        let v = parse_value_element(doc.root_element(), &mut diags).unwrap().unwrap();
        assert!(v.is_list());
        assert_eq!(v.tag(), BuiltinTypeTag::String);
        match v.payload() {
            Payload::List(items) => {
                let texts: Vec<_> = items.iter().filter_map(|i| i.payload().as_str()).collect();
                assert_eq!(texts, ["a", "b"]);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_list_item_error_is_fatal() {
        let doc = load_document("<Value><ListOfByte><Byte>1</Byte><Byte>300</Byte></ListOfByte></Value>")
            .unwrap();
        let mut diags = Diagnostics::new();
        assert!(parse_value_element(doc.root_element(), &mut diags).is_err());
    }

    #[test]
    fn test_unknown_and_unexpected() {
        let mut diags = Diagnostics::new();

        let doc = load_document("<Value><Matrix>1</Matrix></Value>").unwrap();
        assert!(parse_value_element(doc.root_element(), &mut diags).unwrap().is_none());
        assert!(diags.contains(DiagnosticKind::UnknownTypeName));

        let doc = load_document("<Value><ListOfMatrix/></Value>").unwrap();
        assert!(parse_value_element(doc.root_element(), &mut diags).unwrap().is_none());

        let mut diags = Diagnostics::new();
        let doc = load_document("<Description>x</Description>").unwrap();
        assert!(parse_value_element(doc.root_element(), &mut diags).unwrap().is_none());
        assert!(diags.contains(DiagnosticKind::UnexpectedNode));

        let mut diags = Diagnostics::new();
        let doc = load_document("<Value>7</Value>").unwrap();
        assert!(parse_value_element(doc.root_element(), &mut diags).unwrap().is_none());
        assert!(diags.contains(DiagnosticKind::UnexpectedNode));
    }
}
