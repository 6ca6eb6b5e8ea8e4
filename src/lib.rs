//! # kontoauszug
//!
//! ISO 20022 CAMT.053 ("Bank-to-Customer Statement") parsing for
//! reporting, reconciliation, and accounting tools.
//!
//! Statement XML is mapped into a typed document tree — header, account
//! and owner identity, balances, transaction summary, and individual
//! entries with their details. Monetary values are carried as
//! decimal-preserving strings (with an exact [`rust_decimal::Decimal`]
//! accessor on [`Amount`]) and dates keep their source representation,
//! since bank feeds mix date-only and date-time forms for the same
//! logical field.
//!
//! ## Quick Start
//!
//! ```rust
//! use kontoauszug::xml::from_camt_xml;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.053.001.08">
//!   <BkToCstmrStmt>
//!     <GrpHdr>
//!       <MsgId>MSG-2025-001</MsgId>
//!       <CreDtTm>2025-01-03T00:18:37</CreDtTm>
//!     </GrpHdr>
//!     <Stmt>
//!       <Id>STMT-001</Id>
//!       <Acct>
//!         <Id><IBAN>HR1725000091101537865</IBAN></Id>
//!         <Ccy>EUR</Ccy>
//!       </Acct>
//!       <Bal>
//!         <Tp><CdOrPrtry><Cd>OPBD</Cd></CdOrPrtry></Tp>
//!         <Amt Ccy="EUR">1191.59</Amt>
//!         <CdtDbtInd>CRDT</CdtDbtInd>
//!         <Dt><Dt>2025-01-02</Dt></Dt>
//!       </Bal>
//!     </Stmt>
//!   </BkToCstmrStmt>
//! </Document>"#;
//!
//! let doc = from_camt_xml(xml).unwrap();
//! assert_eq!(doc.header.message_id, "MSG-2025-001");
//!
//! let stmt = &doc.statements[0];
//! assert_eq!(stmt.account.iban, "HR1725000091101537865");
//! assert_eq!(stmt.balances[0].balance_type, "OPBD");
//! assert_eq!(stmt.balances[0].amount.value, "1191.59");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Domain model, element tree, structural mapper |
//! | `xml` (default) | quick-xml tree adapter, [`xml::from_camt_xml`] |
//!
//! The mapper itself only needs `core`: it consumes an already-parsed
//! [`TreeNode`] and can be fed by any adapter that follows the same
//! merge conventions.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
