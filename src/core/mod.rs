//! Core statement model, element tree, and structural mapper.
//!
//! This module is dependency-light by design: it maps a generic parsed
//! element tree into the typed CAMT.053 document model and knows nothing
//! about XML tokenization (see the `xml` feature for that).

pub mod codes;
mod error;
mod mapper;
mod tree;
mod types;

pub use codes::{balance_type_name, is_known_balance_type};
pub use error::*;
pub use mapper::*;
pub use tree::*;
pub use types::*;
