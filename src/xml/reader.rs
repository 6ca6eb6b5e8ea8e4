use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::{AuszugError, Document, Mapper, MappingPolicy, TreeNode};

/// Parse CAMT.053 XML text into a [`Document`] with the default lenient
/// policy.
pub fn from_camt_xml(xml: &str) -> Result<Document, AuszugError> {
    from_camt_xml_with(xml, MappingPolicy::default())
}

/// Parse CAMT.053 XML text with an explicit mapping policy.
pub fn from_camt_xml_with(xml: &str, policy: MappingPolicy) -> Result<Document, AuszugError> {
    let tree = parse_tree(xml)?;
    Mapper::new(policy).map_document(&tree)
}

/// One open element being assembled.
struct Frame {
    name: String,
    text: String,
    children: BTreeMap<String, TreeNode>,
}

impl Frame {
    fn new(name: String) -> Self {
        Frame {
            name,
            text: String::new(),
            children: BTreeMap::new(),
        }
    }
}

/// Parse XML text into the generic element tree.
///
/// The returned root is a [`TreeNode::Map`] keyed by the document's
/// top-level element(s); for a CAMT message that is the `Document` key.
/// Malformed input (mismatched or unclosed tags, bad entities) fails
/// with [`AuszugError::Xml`].
pub fn parse_tree(xml: &str) -> Result<TreeNode, AuszugError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Frame::new(String::new())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(open_frame(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let frame = open_frame(e)?;
                if let Some(parent) = stack.last_mut() {
                    let Frame { name, text, children } = frame;
                    insert_child(&mut parent.children, name, into_node(text, children));
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(xml_err)?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let bytes = e.into_inner();
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Ok(Event::End(_)) => match (stack.pop(), stack.last_mut()) {
                (Some(frame), Some(parent)) => {
                    let Frame { name, text, children } = frame;
                    insert_child(&mut parent.children, name, into_node(text, children));
                }
                _ => return Err(AuszugError::Xml("unbalanced closing tag".into())),
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(AuszugError::Xml("unclosed element at end of input".into()));
    }
    let root = stack.pop().map(|frame| frame.children).unwrap_or_default();
    Ok(TreeNode::Map(root))
}

/// Start a frame for `element`, merging its attributes as child keys.
/// Namespace declarations are dropped; everything else keeps its local
/// name.
fn open_frame(element: &BytesStart) -> Result<Frame, AuszugError> {
    let mut frame = Frame::new(
        String::from_utf8_lossy(element.local_name().as_ref()).into_owned(),
    );
    for attr in element.attributes().flatten() {
        if attr.key.as_ref().starts_with(b"xmlns") {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        insert_child(&mut frame.children, key, TreeNode::Text(value));
    }
    Ok(frame)
}

/// Close a frame into a node: text-only elements collapse to
/// [`TreeNode::Text`]; anything with children or merged attributes
/// becomes a [`TreeNode::Map`], with mixed text under the reserved key.
fn into_node(text: String, mut children: BTreeMap<String, TreeNode>) -> TreeNode {
    if children.is_empty() {
        TreeNode::Text(text)
    } else {
        if !text.is_empty() {
            children.insert(TreeNode::TEXT_KEY.to_string(), TreeNode::Text(text));
        }
        TreeNode::Map(children)
    }
}

/// Insert a child under `name`, collapsing repeated siblings into a
/// [`TreeNode::List`] in source order.
fn insert_child(children: &mut BTreeMap<String, TreeNode>, name: String, node: TreeNode) {
    match children.get_mut(&name) {
        None => {
            children.insert(name, node);
        }
        Some(TreeNode::List(items)) => items.push(node),
        Some(existing) => {
            let first = std::mem::replace(existing, TreeNode::List(Vec::new()));
            if let TreeNode::List(items) = existing {
                items.push(first);
                items.push(node);
            }
        }
    }
}

fn xml_err<E: std::fmt::Display>(e: E) -> AuszugError {
    AuszugError::Xml(e.to_string())
}
