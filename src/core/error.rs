use thiserror::Error;

/// Errors raised by the structural mapper and the XML tree adapter.
///
/// The mapper is lenient by default — descriptive fields coerce to safe
/// defaults instead of failing — so this enum covers only the small set
/// of conditions that abort mapping. Errors propagate uncaught to the
/// caller of the entry point; the core never logs or partially recovers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuszugError {
    /// A statement carries no account element (`Acct`).
    #[error("statement has no account information (Acct)")]
    MissingAccount,

    /// The entry mapper was invoked on an absent node.
    #[error("invalid transaction entry: {0}")]
    InvalidTransaction(String),

    /// Strict mode: a hard-required element was absent.
    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    /// The input does not contain a `Document/BkToCstmrStmt` message.
    #[error("not a bank-to-customer statement document: {0}")]
    NotCamt053(String),

    /// XML tokenization or well-formedness error.
    #[error("XML error: {0}")]
    Xml(String),
}
