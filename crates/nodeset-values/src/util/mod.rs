//! Utility modules for node-set value parsing.

pub mod datetime;
pub mod xml;

pub use datetime::{
    format_timestamp, normalize_timestamp, now_seconds, parse_timestamp, DateTimeParseError,
    TIMESTAMP_FORMAT,
};
pub use xml::{child_elements, descendant_text, find_descendant, first_child_element, load_document, local_name};
