//! Typed builtin values and node identifiers for OPC UA node-set XML.
//!
//! This crate turns the value-bearing parts of a node-set document into
//! typed, immutable Rust values that a code generator can consume.
//!
//! # Overview
//!
//! - **Values**: every builtin kind has a tag ([`BuiltinTypeTag`]) and a
//!   normalized [`Payload`]. Missing input yields the kind's default.
//! - **Identifiers**: [`Identifier`] parses `ns=..;i=..` style literals and
//!   compares by its canonical string.
//! - **Diagnostics**: recoverable problems (a malformed GUID, an unreadable
//!   timestamp) are recorded in a [`Diagnostics`] sink and mirrored to
//!   `tracing`. Only ambiguous input such as a bad numeric literal is an
//!   error.
//!
//! # Quick Start
//!
//! ```rust
//! use nodeset_values::{parse_value_element, Diagnostics, Identifier, Payload};
//! use nodeset_values::util::load_document;
//!
//! let xml = r#"<UAVariable NodeId="ns=1;i=6001" DataType="Double">
//!   <Value><Double>21.5</Double></Value>
//! </UAVariable>"#;
//! let doc = load_document(xml).unwrap();
//! let var = doc.root_element();
//!
//! let id: Identifier = var.attribute("NodeId").unwrap().parse().unwrap();
//! assert_eq!(id.canonical_string(), "ns=1;i=6001");
//!
//! let mut diags = Diagnostics::new();
//! let wrapper = var.children().find(|n| n.has_tag_name("Value")).unwrap();
//! let value = parse_value_element(wrapper, &mut diags).unwrap().unwrap();
//! assert_eq!(value.payload(), &Payload::Double(21.5));
//! assert!(diags.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`model`]: tags, values, GUIDs and identifiers
//! - [`parse`]: per-kind parsers and name-based dispatch
//! - [`diagnostics`]: the recoverable-problem sink
//! - [`options`]: parse configuration
//! - [`error`]: fatal error types
//! - [`util`]: timestamp and XML helpers

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod options;
pub mod parse;
pub mod util;

// Re-export commonly used types at crate root
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Level};
pub use error::{ErrorCode, ParseError};
pub use model::{
    BuiltinTypeTag, EncodingField, Guid, Identifier, IdentifierKind, LocalizedText, Payload,
    QualifiedName, Value,
};
pub use options::{Clock, ParseOptions};
pub use parse::{
    parse_typed, parse_typed_with_options, parse_value, parse_value_element,
    parse_value_element_with_options, parse_value_with_options, Surface,
};
