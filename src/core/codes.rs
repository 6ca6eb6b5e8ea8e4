//! ISO 20022 balance type and credit/debit indicator codes.
//!
//! Advisory lookups only — [`Balance::balance_type`] stays an open
//! string because banks emit proprietary codes alongside the standard
//! `BalanceType12Code` set.
//!
//! [`Balance::balance_type`]: crate::core::Balance::balance_type

/// Credit indicator literal (`CdtDbtInd`).
pub const CREDIT: &str = "CRDT";

/// Debit indicator literal (`CdtDbtInd`).
pub const DEBIT: &str = "DBIT";

/// Check whether `code` is a standard `BalanceType12Code` value.
pub fn is_known_balance_type(code: &str) -> bool {
    BALANCE_TYPE_CODES
        .binary_search_by_key(&code, |&(known, _)| known)
        .is_ok()
}

/// Human-readable name of a standard balance type code.
pub fn balance_type_name(code: &str) -> Option<&'static str> {
    BALANCE_TYPE_CODES
        .binary_search_by_key(&code, |&(known, _)| known)
        .ok()
        .map(|index| BALANCE_TYPE_CODES[index].1)
}

/// `BalanceType12Code` values. Sorted for binary search.
static BALANCE_TYPE_CODES: &[(&str, &str)] = &[
    ("CLAV", "Closing available"),
    ("CLBD", "Closing booked"),
    ("FWAV", "Forward available"),
    ("INFO", "Information"),
    ("ITAV", "Interim available"),
    ("ITBD", "Interim booked"),
    ("OPAV", "Opening available"),
    ("OPBD", "Opening booked"),
    ("PRCD", "Previously closed booked"),
    ("XPCD", "Expected"),
];
