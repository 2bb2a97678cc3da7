//! Helpers over the roxmltree DOM.

use roxmltree::{Document, Node};

use crate::error::ParseError;

/// Parses a node-set document.
pub fn load_document(text: &str) -> Result<Document<'_>, ParseError> {
    Document::parse(text).map_err(|e| ParseError::Xml(e.to_string()))
}

/// Local (namespace-stripped) element name.
pub fn local_name<'a, 'input>(node: Node<'a, 'input>) -> &'a str {
    node.tag_name().name()
}

/// Element children of `node`, skipping text, comments and processing
/// instructions.
pub fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

pub fn first_child_element<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    child_elements(node).next()
}

/// First element strictly below `node` with the given local name.
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Text of the first descendant named `name`, if that descendant has text.
pub fn descendant_text<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    find_descendant(node, name).and_then(|n| n.text())
}
