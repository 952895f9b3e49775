//! XML utility functions for navigating DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ecfr_harvester::xml::get_tag_name;
///
/// let xml = r#"<root><TR>text</TR></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let row = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(row), "TR");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node has a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ecfr_harvester::xml::find_children;
///
/// let xml = r#"<TR><TD>1</TD><TD>2</TD><other/></TR>"#;
/// let doc = Document::parse(xml).unwrap();
/// let cells: Vec<_> = find_children(doc.root_element(), "TD").collect();
/// assert_eq!(cells.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the direct text content of a node, trimmed.
///
/// Only the first text child is considered, so markup inside the node does
/// not contribute. Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
