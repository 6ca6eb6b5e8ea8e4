use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::codes;

/// A parsed CAMT.053 message: header plus the statements it reports.
///
/// Built in one pass by the structural mapper and immutable afterwards.
/// Every field is a plain string, boolean, or nested record/sequence
/// with no cyclic references, so the document serializes to JSON (or
/// any other interchange format) without further transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Group header (`GrpHdr`).
    pub header: DocumentHeader,
    /// Statements (`Stmt`), in source order. A statement-less document
    /// is valid — a reporting period with no activity.
    pub statements: Vec<Statement>,
}

/// Advisory message metadata (`GrpHdr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// Message identifier (`MsgId`).
    pub message_id: String,
    /// Message creation timestamp (`CreDtTm`).
    pub creation_date_time: String,
}

/// A single bank statement (`Stmt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement identifier (`Id`).
    pub statement_id: String,
    /// Legal sequence number (`LglSeqNb`).
    pub sequence_number: String,
    /// Statement creation timestamp (`CreDtTm`).
    pub creation_date_time: String,
    /// Reporting period start (`FrToDt/FrDtTm`).
    pub from_date_time: String,
    /// Reporting period end (`FrToDt/ToDtTm`).
    pub to_date_time: String,
    /// Proprietary reporting source (`RptgSrc/Prtry`).
    pub reporting_source: String,
    /// The reported account (`Acct`). The one hard-required element of
    /// a statement.
    pub account: Account,
    /// Balances (`Bal`) — opening, closing, and whatever else the bank
    /// reports, in source order.
    pub balances: Vec<Balance>,
    /// Credit/debit totals (`TxsSummry`), when reported.
    pub transaction_summary: Option<TransactionSummary>,
    /// Entries (`Ntry`), in source order.
    pub transactions: Vec<Transaction>,
    /// Free-text additional statement information (`AddtlStmtInf`).
    pub additional_info: String,
}

/// Account identity (`Acct`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// IBAN (`Id/IBAN`).
    pub iban: String,
    /// Account currency (`Ccy`, ISO 4217).
    pub currency: String,
    /// Display name (`Nm`).
    pub name: String,
    /// Owner details (`Ownr`); all-empty when the feed omits them, as
    /// is common for omnibus and clearing accounts.
    pub owner: Owner,
}

/// Account owner (`Ownr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Owner name (`Nm`).
    pub name: String,
    /// Address lines (`PstlAdr/AdrLine`), in source order.
    pub address: Vec<String>,
    /// Organisation identifier (`Id/OrgId/Othr/Id`).
    pub id: String,
}

/// Balance record (`Bal`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Balance type code (`Tp/CdOrPrtry/Cd`), e.g. `OPBD` or `CLBD`.
    /// Kept an open string — banks emit proprietary codes alongside the
    /// standard set (see [`codes::is_known_balance_type`]).
    pub balance_type: String,
    /// Balance amount (`Amt`).
    pub amount: Amount,
    /// `CRDT` or `DBIT` (`CdtDbtInd`).
    pub credit_debit_indicator: String,
    /// Balance date (`Dt/DtTm` preferred over `Dt/Dt`).
    pub date: String,
}

impl Balance {
    /// True when the credit/debit indicator reads `CRDT`.
    pub fn is_credit(&self) -> bool {
        self.credit_debit_indicator == codes::CREDIT
    }
}

/// A currency/value pair.
///
/// The value is the source's decimal literal, untouched — `"1191.59"`
/// stays `"1191.59"`, never a float. An absent source amount maps to
/// the empty sentinel rather than a missing field, so downstream code
/// checks the contents, never the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code (`Ccy` attribute).
    pub currency: String,
    /// Decimal value as written in the source.
    pub value: String,
}

impl Amount {
    /// The empty sentinel for absent source amounts.
    pub fn empty() -> Self {
        Amount {
            currency: String::new(),
            value: String::new(),
        }
    }

    /// True for the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.currency.is_empty() && self.value.is_empty()
    }

    /// Exact decimal view of [`value`](Amount::value); `None` when the
    /// value is empty or not a decimal literal.
    pub fn decimal(&self) -> Option<Decimal> {
        Decimal::from_str_exact(self.value.trim()).ok()
    }
}

/// Credit/debit totals (`TxsSummry`).
///
/// Each block is independently optional and stays omitted when the
/// source omits it: "no credits reported" is distinct from "zero
/// credits".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Credit totals (`TtlCdtNtries`).
    pub total_credit_entries: Option<SummaryDetail>,
    /// Debit totals (`TtlDbtNtries`).
    pub total_debit_entries: Option<SummaryDetail>,
}

/// One side of the transaction summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDetail {
    /// Entry count (`NbOfNtries`).
    pub number_of_entries: String,
    /// Sum of the entries (`Sum`), a decimal string.
    pub sum: String,
}

/// A statement entry (`Ntry`) — one transaction line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Entry reference (`NtryRef`).
    pub reference: Option<String>,
    /// Entry amount (`Amt`).
    pub amount: Amount,
    /// `CRDT` or `DBIT` (`CdtDbtInd`).
    pub credit_debit_indicator: String,
    /// Reversal flag (`RvslInd`); only the literal `"true"` counts.
    pub reversal_indicator: bool,
    /// Entry status code (`Sts/Cd`), e.g. `BOOK`.
    pub status: String,
    /// Booking date (`BookgDt`, date-time preferred).
    pub booking_date: String,
    /// Value date (`ValDt`, date-time preferred).
    pub value_date: String,
    /// Account servicer reference (`AcctSvcrRef`).
    pub account_servicer_reference: String,
    /// Proprietary bank transaction code (`BkTxCd/Prtry/Cd`).
    pub bank_transaction_code: String,
    /// Transaction details, flattened across all `NtryDtls` containers
    /// into one ordered sequence.
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// True when the credit/debit indicator reads `CRDT`.
    pub fn is_credit(&self) -> bool {
        self.credit_debit_indicator == codes::CREDIT
    }

    /// True when the credit/debit indicator reads `DBIT`.
    pub fn is_debit(&self) -> bool {
        self.credit_debit_indicator == codes::DEBIT
    }
}

/// Detailed information for one transaction (`TxDtls`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetail {
    /// Reference block (`Refs`).
    pub references: References,
    /// Amount block (`AmtDtls`).
    pub amount_details: AmountDetails,
    /// Debtor/creditor parties (`RltdPties`), when present.
    pub related_parties: Option<RelatedParties>,
    /// Structured remittance information (`RmtInf/Strd`), when present.
    /// Unstructured remittance text is not represented.
    pub remittance_information: Option<RemittanceInformation>,
}

/// Transaction references (`Refs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    /// Account servicer reference (`AcctSvcrRef`).
    pub account_servicer_reference: String,
    /// End-to-end identifier (`EndToEndId`).
    pub end_to_end_id: String,
}

/// Transaction amount block (`AmtDtls`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDetails {
    /// Transaction amount (`TxAmt/Amt`).
    pub transaction_amount: Amount,
}

/// Debtor and creditor information (`RltdPties`).
///
/// Each side is independently optional — a detail may name a creditor
/// but no debtor, or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedParties {
    /// Debtor party (`Dbtr`).
    pub debtor: Option<Party>,
    /// Debtor account (`DbtrAcct`).
    pub debtor_account: Option<AccountIdentification>,
    /// Creditor party (`Cdtr`).
    pub creditor: Option<Party>,
    /// Creditor account (`CdtrAcct`).
    pub creditor_account: Option<AccountIdentification>,
}

/// A named party with a postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party name (`Nm`).
    pub name: String,
    /// Postal address (`PstlAdr`).
    pub postal_address: PostalAddress,
}

/// Postal address of a related party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Country code (`Ctry`, ISO 3166-1 alpha-2).
    pub country: Option<String>,
    /// Address lines (`AdrLine`), in source order.
    pub address_lines: Vec<String>,
}

/// Account identification of a related party (`Id/IBAN`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentification {
    /// IBAN.
    pub iban: String,
}

/// Structured remittance information (`RmtInf/Strd`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemittanceInformation {
    /// Creditor reference block (`CdtrRefInf`).
    pub creditor_reference: CreditorReference,
    /// Additional free-text remittance lines (`AddtlRmtInf`), in source
    /// order.
    pub additional_remittance_info: Vec<String>,
}

/// Creditor reference (`CdtrRefInf`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorReference {
    /// Reference type code (`Tp/CdOrPrtry/Cd`).
    pub reference_type: String,
    /// Reference value (`Ref`).
    pub reference: String,
}
