//! Generic parsed-XML element tree.
//!
//! The tree adapter (feature `xml`) produces this structure with the
//! conventions the mapper relies on: attributes merged as sibling keys
//! on their element, repeated sibling tags collapsed into a
//! [`TreeNode::List`], and the text of an element that also carries
//! attributes or children exposed under [`TreeNode::TEXT_KEY`].

use std::collections::BTreeMap;

/// One node of the generic element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Text-only element content or an attribute value.
    Text(String),
    /// An element with child elements and/or merged attributes.
    Map(BTreeMap<String, TreeNode>),
    /// Repeated sibling elements, in source order.
    List(Vec<TreeNode>),
}

impl TreeNode {
    /// Reserved key for the text content of an element that also carries
    /// attributes or child elements.
    pub const TEXT_KEY: &'static str = "$text";

    /// Child lookup on a [`TreeNode::Map`]; `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Map(children) => children.get(key),
            _ => None,
        }
    }

    /// Descend a chain of child keys, stopping at the first absent one.
    pub fn at(&self, path: &[&str]) -> Option<&TreeNode> {
        let mut node = self;
        for key in path {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// The node's text value: the content of a [`TreeNode::Text`], or
    /// the [`TreeNode::TEXT_KEY`] entry of a [`TreeNode::Map`].
    pub fn text(&self) -> Option<&str> {
        match self {
            TreeNode::Text(value) => Some(value),
            TreeNode::Map(children) => match children.get(Self::TEXT_KEY) {
                Some(TreeNode::Text(value)) => Some(value),
                _ => None,
            },
            TreeNode::List(_) => None,
        }
    }
}

/// Normalize an optional node into a sequence: absent → empty, a list →
/// its items in source order, anything else → a one-element sequence.
///
/// This is the single singleton-or-sequence rule shared by every
/// repeating element (statements, balances, entries, detail containers,
/// address lines, remittance lines). It is total and order-preserving.
pub fn as_sequence(node: Option<&TreeNode>) -> Vec<&TreeNode> {
    match node {
        None => Vec::new(),
        Some(TreeNode::List(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf(value: &str) -> TreeNode {
        TreeNode::Text(value.to_string())
    }

    fn node(entries: &[(&str, TreeNode)]) -> TreeNode {
        TreeNode::Map(
            entries
                .iter()
                .map(|(key, child)| (key.to_string(), child.clone()))
                .collect(),
        )
    }

    #[test]
    fn get_and_at_descend_maps() {
        let tree = node(&[("FrToDt", node(&[("FrDtTm", leaf("2025-01-02T00:00:00"))]))]);

        assert_eq!(
            tree.at(&["FrToDt", "FrDtTm"]).and_then(TreeNode::text),
            Some("2025-01-02T00:00:00")
        );
        assert_eq!(tree.at(&["FrToDt", "ToDtTm"]), None);
        assert_eq!(tree.get("Missing"), None);
        assert_eq!(leaf("x").get("Missing"), None);
    }

    #[test]
    fn text_reads_plain_and_merged_content() {
        assert_eq!(leaf("1191.59").text(), Some("1191.59"));

        let merged = node(&[("Ccy", leaf("EUR")), (TreeNode::TEXT_KEY, leaf("1191.59"))]);
        assert_eq!(merged.text(), Some("1191.59"));

        let no_text = node(&[("Ccy", leaf("EUR"))]);
        assert_eq!(no_text.text(), None);

        let list = TreeNode::List(vec![leaf("a")]);
        assert_eq!(list.text(), None);
    }

    #[test]
    fn as_sequence_normalizes_all_three_shapes() {
        assert!(as_sequence(None).is_empty());

        let single = leaf("only");
        let seq = as_sequence(Some(&single));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].text(), Some("only"));

        let list = TreeNode::List(vec![leaf("first"), leaf("second")]);
        let seq = as_sequence(Some(&list));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].text(), Some("first"));
        assert_eq!(seq[1].text(), Some("second"));
    }

    proptest! {
        #[test]
        fn as_sequence_preserves_order_and_length(values in proptest::collection::vec(".*", 0..8)) {
            let list = TreeNode::List(values.iter().map(|v| TreeNode::Text(v.clone())).collect());
            let seq = as_sequence(Some(&list));
            prop_assert_eq!(seq.len(), values.len());
            for (item, expected) in seq.iter().zip(&values) {
                prop_assert_eq!(item.text(), Some(expected.as_str()));
            }
        }

        #[test]
        fn as_sequence_wraps_any_scalar(value in ".*") {
            let single = TreeNode::Text(value.clone());
            let seq = as_sequence(Some(&single));
            prop_assert_eq!(seq.len(), 1);
            prop_assert_eq!(seq[0].text(), Some(value.as_str()));
        }
    }
}
