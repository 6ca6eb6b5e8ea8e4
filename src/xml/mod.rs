//! XML tree adapter (feature `xml`).
//!
//! Turns raw CAMT.053 text into the generic element tree the structural
//! mapper consumes: attributes merged as sibling keys on their element,
//! repeated sibling tags collapsed into sequences, and mixed text
//! content exposed under [`TreeNode::TEXT_KEY`](crate::core::TreeNode::TEXT_KEY).
//! Element and attribute names are matched by local name, so prefixed
//! and unprefixed documents parse alike.
//!
//! # Example
//!
//! ```no_run
//! use kontoauszug::xml;
//!
//! let text = std::fs::read_to_string("statement.xml").unwrap();
//! let document = xml::from_camt_xml(&text).unwrap();
//! for statement in &document.statements {
//!     println!("{}: {} entries", statement.statement_id, statement.transactions.len());
//! }
//! ```

mod reader;

pub use reader::{from_camt_xml, from_camt_xml_with, parse_tree};
