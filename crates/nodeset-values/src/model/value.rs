//! Builtin value types for node-set attribute values.
//!
//! A [`Value`] is a tag from the fixed set of builtin kinds plus a normalized
//! [`Payload`]. Values are built once by the parser and not mutated after.

use std::fmt;

use chrono::NaiveDateTime;

use crate::model::{Guid, Identifier};
use crate::util::datetime::format_timestamp;

/// Builtin data kinds of the information model, with their standard ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BuiltinTypeTag {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    ExtensionObject = 22,
    DataValue = 23,
    Variant = 24,
    DiagnosticInfo = 25,
}

impl BuiltinTypeTag {
    /// Every tag, in id order.
    pub const ALL: [BuiltinTypeTag; 25] = [
        BuiltinTypeTag::Boolean,
        BuiltinTypeTag::SByte,
        BuiltinTypeTag::Byte,
        BuiltinTypeTag::Int16,
        BuiltinTypeTag::UInt16,
        BuiltinTypeTag::Int32,
        BuiltinTypeTag::UInt32,
        BuiltinTypeTag::Int64,
        BuiltinTypeTag::UInt64,
        BuiltinTypeTag::Float,
        BuiltinTypeTag::Double,
        BuiltinTypeTag::String,
        BuiltinTypeTag::DateTime,
        BuiltinTypeTag::Guid,
        BuiltinTypeTag::ByteString,
        BuiltinTypeTag::XmlElement,
        BuiltinTypeTag::NodeId,
        BuiltinTypeTag::ExpandedNodeId,
        BuiltinTypeTag::StatusCode,
        BuiltinTypeTag::QualifiedName,
        BuiltinTypeTag::LocalizedText,
        BuiltinTypeTag::ExtensionObject,
        BuiltinTypeTag::DataValue,
        BuiltinTypeTag::Variant,
        BuiltinTypeTag::DiagnosticInfo,
    ];

    /// Returns the numeric builtin type id.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Creates a tag from its numeric builtin type id.
    pub fn from_u8(v: u8) -> Option<BuiltinTypeTag> {
        match v {
            1..=25 => Some(Self::ALL[v as usize - 1]),
            _ => None,
        }
    }

    /// Element and type name used for this kind in node-set documents.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinTypeTag::Boolean => "Boolean",
            BuiltinTypeTag::SByte => "SByte",
            BuiltinTypeTag::Byte => "Byte",
            BuiltinTypeTag::Int16 => "Int16",
            BuiltinTypeTag::UInt16 => "UInt16",
            BuiltinTypeTag::Int32 => "Int32",
            BuiltinTypeTag::UInt32 => "UInt32",
            BuiltinTypeTag::Int64 => "Int64",
            BuiltinTypeTag::UInt64 => "UInt64",
            BuiltinTypeTag::Float => "Float",
            BuiltinTypeTag::Double => "Double",
            BuiltinTypeTag::String => "String",
            BuiltinTypeTag::DateTime => "DateTime",
            BuiltinTypeTag::Guid => "Guid",
            BuiltinTypeTag::ByteString => "ByteString",
            BuiltinTypeTag::XmlElement => "XmlElement",
            BuiltinTypeTag::NodeId => "NodeId",
            BuiltinTypeTag::ExpandedNodeId => "ExpandedNodeId",
            BuiltinTypeTag::StatusCode => "StatusCode",
            BuiltinTypeTag::QualifiedName => "QualifiedName",
            BuiltinTypeTag::LocalizedText => "LocalizedText",
            BuiltinTypeTag::ExtensionObject => "ExtensionObject",
            BuiltinTypeTag::DataValue => "DataValue",
            BuiltinTypeTag::Variant => "Variant",
            BuiltinTypeTag::DiagnosticInfo => "DiagnosticInfo",
        }
    }

    /// Returns true for the integer and floating-point kinds.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            BuiltinTypeTag::SByte
                | BuiltinTypeTag::Byte
                | BuiltinTypeTag::Int16
                | BuiltinTypeTag::UInt16
                | BuiltinTypeTag::Int32
                | BuiltinTypeTag::UInt32
                | BuiltinTypeTag::Int64
                | BuiltinTypeTag::UInt64
                | BuiltinTypeTag::Float
                | BuiltinTypeTag::Double
        )
    }

    /// Identifier of the builtin data type node in namespace 0.
    pub fn data_type_id(self) -> Identifier {
        Identifier::numeric(0, self.id() as u32)
    }
}

impl fmt::Display for BuiltinTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text with a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub locale: String,
    pub text: String,
}

/// A name qualified by a namespace index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

/// Normalized in-memory form of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No payload; used by kinds that are recognized but not parsed.
    Unset,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    /// Also the payload of status codes.
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// Strings, XML elements and byte strings as text content.
    Text(String),
    LocalizedText(LocalizedText),
    QualifiedName(QualifiedName),
    /// Calendar value with second precision.
    DateTime(NaiveDateTime),
    Guid(Guid),
    NodeId(Identifier),
    /// Elements of a `ListOf<Type>` value, in document order.
    List(Vec<Value>),
}

impl Payload {
    /// Returns true if the payload has not been populated.
    pub fn is_unset(&self) -> bool {
        matches!(self, Payload::Unset)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Payload::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns any integer payload widened to i128.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Payload::SByte(v) => Some(v.into()),
            Payload::Byte(v) => Some(v.into()),
            Payload::Int16(v) => Some(v.into()),
            Payload::UInt16(v) => Some(v.into()),
            Payload::Int32(v) => Some(v.into()),
            Payload::UInt32(v) => Some(v.into()),
            Payload::Int64(v) => Some(v.into()),
            Payload::UInt64(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Payload::Float(v) => Some(v.into()),
            Payload::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Unset => f.write_str("unset"),
            Payload::Boolean(v) => write!(f, "{v}"),
            Payload::SByte(v) => write!(f, "{v}"),
            Payload::Byte(v) => write!(f, "{v}"),
            Payload::Int16(v) => write!(f, "{v}"),
            Payload::UInt16(v) => write!(f, "{v}"),
            Payload::Int32(v) => write!(f, "{v}"),
            Payload::UInt32(v) => write!(f, "{v}"),
            Payload::Int64(v) => write!(f, "{v}"),
            Payload::UInt64(v) => write!(f, "{v}"),
            Payload::Float(v) => write!(f, "{v}"),
            Payload::Double(v) => write!(f, "{v}"),
            Payload::Text(s) => write!(f, "{s:?}"),
            Payload::LocalizedText(lt) => write!(f, "{}:{:?}", lt.locale, lt.text),
            Payload::QualifiedName(qn) => write!(f, "{}:{}", qn.namespace_index, qn.name),
            Payload::DateTime(dt) => f.write_str(&format_timestamp(dt)),
            Payload::Guid(g) => write!(f, "{g}"),
            Payload::NodeId(id) => write!(f, "{id}"),
            Payload::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One child field of a structured value, as computed by the encoding-rule
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingField {
    pub name: String,
    pub data_type: Identifier,
    pub is_array: bool,
}

/// A parsed builtin value.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    tag: BuiltinTypeTag,
    payload: Payload,
    alias: Option<String>,
    encoding_rule: Vec<EncodingField>,
}

impl Value {
    pub fn new(tag: BuiltinTypeTag, payload: Payload) -> Self {
        Self {
            tag,
            payload,
            alias: None,
            encoding_rule: Vec::new(),
        }
    }

    /// Creates a list value whose elements all carry `tag`.
    pub fn list(tag: BuiltinTypeTag, items: Vec<Value>) -> Self {
        Self::new(tag, Payload::List(items))
    }

    /// Sets the alias field name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Attaches the child-field descriptors of a structured value.
    pub fn with_encoding_rule(mut self, rule: Vec<EncodingField>) -> Self {
        self.encoding_rule = rule;
        self
    }

    pub fn tag(&self) -> BuiltinTypeTag {
        self.tag
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn encoding_rule(&self) -> &[EncodingField] {
        &self.encoding_rule
    }

    pub fn is_list(&self) -> bool {
        matches!(self.payload, Payload::List(_))
    }

    /// Returns the payload of the child value whose alias is `name`.
    ///
    /// Only list payloads have children; anything else returns `None`.
    pub fn field_by_alias(&self, name: &str) -> Option<&Payload> {
        match &self.payload {
            Payload::List(items) => items
                .iter()
                .find(|v| v.alias() == Some(name))
                .map(Value::payload),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "'{alias}':")?;
        }
        write!(f, "{}({})", self.tag, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ids_roundtrip() {
        for (i, tag) in BuiltinTypeTag::ALL.iter().enumerate() {
            assert_eq!(tag.id() as usize, i + 1);
            assert_eq!(BuiltinTypeTag::from_u8(tag.id()), Some(*tag));
        }
        assert_eq!(BuiltinTypeTag::from_u8(0), None);
        assert_eq!(BuiltinTypeTag::from_u8(26), None);
    }

    #[test]
    fn test_tag_names_are_unique() {
        let mut names: Vec<_> = BuiltinTypeTag::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn test_numeric_kinds() {
        let numeric = BuiltinTypeTag::ALL.iter().filter(|t| t.is_numeric()).count();
        assert_eq!(numeric, 10);
        assert!(!BuiltinTypeTag::StatusCode.is_numeric());
        assert!(!BuiltinTypeTag::Boolean.is_numeric());
    }

    #[test]
    fn test_data_type_id() {
        assert_eq!(BuiltinTypeTag::Int32.data_type_id().canonical_string(), "ns=0;i=6");
        assert_eq!(BuiltinTypeTag::DiagnosticInfo.data_type_id().canonical_string(), "ns=0;i=25");
    }

    #[test]
    fn test_field_by_alias() {
        let value = Value::list(
            BuiltinTypeTag::Double,
            vec![
                Value::new(BuiltinTypeTag::Double, Payload::Double(1.5)).with_alias("rpm"),
                Value::new(BuiltinTypeTag::Double, Payload::Double(80.0)).with_alias("temp"),
            ],
        );
        assert!(value.is_list());
        assert_eq!(value.field_by_alias("temp"), Some(&Payload::Double(80.0)));
        assert_eq!(value.field_by_alias("pressure"), None);

        let scalar = Value::new(BuiltinTypeTag::Int32, Payload::Int32(3));
        assert_eq!(scalar.field_by_alias("rpm"), None);
    }

    #[test]
    fn test_display() {
        let v = Value::new(BuiltinTypeTag::Int32, Payload::Int32(-7));
        assert_eq!(v.to_string(), "Int32(-7)");

        let v = Value::new(
            BuiltinTypeTag::QualifiedName,
            Payload::QualifiedName(QualifiedName { namespace_index: 3, name: "Temp".into() }),
        )
        .with_alias("BrowseName");
        assert_eq!(v.to_string(), "'BrowseName':QualifiedName(3:Temp)");

        let v = Value::new(BuiltinTypeTag::ExtensionObject, Payload::Unset);
        assert_eq!(v.to_string(), "ExtensionObject(unset)");
    }

    #[test]
    fn test_encoding_rule_slot() {
        let v = Value::new(BuiltinTypeTag::ExtensionObject, Payload::Unset);
        assert!(v.encoding_rule().is_empty());

        let v = v.with_encoding_rule(vec![EncodingField {
            name: "Low".into(),
            data_type: BuiltinTypeTag::Double.data_type_id(),
            is_array: false,
        }]);
        assert_eq!(v.encoding_rule().len(), 1);
        assert_eq!(v.encoding_rule()[0].data_type, Identifier::numeric(0, 11));
    }

    #[test]
    fn test_payload_accessors() {
        assert_eq!(Payload::UInt64(u64::MAX).as_integer(), Some(u64::MAX as i128));
        assert_eq!(Payload::SByte(-1).as_integer(), Some(-1));
        assert_eq!(Payload::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Payload::Text("x".into()).as_str(), Some("x"));
        assert_eq!(Payload::Boolean(true).as_bool(), Some(true));
        assert!(Payload::Unset.is_unset());
        assert_eq!(Payload::Int32(1).as_bool(), None);
    }
}
