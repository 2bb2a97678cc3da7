//! Data model for node-set values.
//!
//! - Builtin type tags and typed values
//! - GUIDs
//! - Node identifiers

pub mod guid;
pub mod id;
pub mod value;

pub use guid::{Guid, GuidParseError, GUID_GROUPS};
pub use id::{Identifier, IdentifierKind};
pub use value::{BuiltinTypeTag, EncodingField, LocalizedText, Payload, QualifiedName, Value};
