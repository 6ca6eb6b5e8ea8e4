//! Structural mapping from the generic element tree to the domain model.
//!
//! One mapping method per entity, composed top-down: Document →
//! Statement → {Account, Balance, TransactionSummary, Entry} →
//! TransactionDetail → {References, AmountDetails, RelatedParties,
//! RemittanceInformation}. Every method is pure — one synchronous
//! traversal, no I/O, no shared state — so any number of documents may
//! be mapped concurrently without coordination.
//!
//! Optionality follows a two-tier policy. Descriptive fields coerce to
//! safe defaults (empty string, empty sequence, `false`, the empty
//! [`Amount`] sentinel) because real-world feeds omit and mis-type
//! low-stakes fields constantly. The strict tier is limited to a
//! statement's account under [`MappingPolicy::Lenient`]; under
//! [`MappingPolicy::Strict`] it extends to amounts and transaction
//! details.

use crate::core::error::AuszugError;
use crate::core::tree::{TreeNode, as_sequence};
use crate::core::types::*;

/// How to treat elements whose absence the lenient tier would otherwise
/// paper over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MappingPolicy {
    /// Coerce absent or malformed optional data to safe defaults.
    #[default]
    Lenient,
    /// Additionally require amounts and transaction details, failing
    /// with [`AuszugError::MissingElement`] when they are absent.
    Strict,
}

/// The structural mapper.
///
/// Stateless and `Copy`; one instance may serve any number of
/// documents. The statement account stays hard-required under either
/// policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper {
    policy: MappingPolicy,
}

/// Map a parsed element tree into a [`Document`] with the default
/// lenient policy.
pub fn map_document(tree: &TreeNode) -> Result<Document, AuszugError> {
    Mapper::default().map_document(tree)
}

impl Mapper {
    pub fn new(policy: MappingPolicy) -> Self {
        Self { policy }
    }

    pub fn lenient() -> Self {
        Self::new(MappingPolicy::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(MappingPolicy::Strict)
    }

    /// Map the root of a parsed message into a [`Document`].
    ///
    /// Accepts either the full tree (with the `Document` wrapper) or
    /// the `Document` element itself. A message without any `Stmt`
    /// yields an empty statement list, never an error.
    pub fn map_document(&self, tree: &TreeNode) -> Result<Document, AuszugError> {
        let message = tree
            .at(&["Document", "BkToCstmrStmt"])
            .or_else(|| tree.get("BkToCstmrStmt"))
            .ok_or_else(|| AuszugError::NotCamt053("no Document/BkToCstmrStmt element".into()))?;

        let statements = as_sequence(message.get("Stmt"))
            .into_iter()
            .map(|stmt| self.map_statement(stmt))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Document {
            header: map_header(message.get("GrpHdr")),
            statements,
        })
    }

    /// Map one `Stmt` element.
    ///
    /// The account is the strict tier: a statement without an `Acct`
    /// element fails with [`AuszugError::MissingAccount`] and no partial
    /// statement is returned. Everything else defaults.
    pub fn map_statement(&self, stmt: &TreeNode) -> Result<Statement, AuszugError> {
        let account = match stmt.get("Acct") {
            Some(acct) => self.map_account(acct),
            None => return Err(AuszugError::MissingAccount),
        };

        let balances = as_sequence(stmt.get("Bal"))
            .into_iter()
            .map(|bal| self.map_balance(bal))
            .collect::<Result<Vec<_>, _>>()?;

        let transactions = as_sequence(stmt.get("Ntry"))
            .into_iter()
            .map(|ntry| self.map_entry(Some(ntry)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Statement {
            statement_id: text_of(stmt.get("Id")),
            sequence_number: text_of(stmt.get("LglSeqNb")),
            creation_date_time: text_of(stmt.get("CreDtTm")),
            from_date_time: text_of(stmt.at(&["FrToDt", "FrDtTm"])),
            to_date_time: text_of(stmt.at(&["FrToDt", "ToDtTm"])),
            reporting_source: text_of(stmt.at(&["RptgSrc", "Prtry"])),
            account,
            balances,
            transaction_summary: stmt
                .get("TxsSummry")
                .map(|summary| self.map_transaction_summary(summary)),
            transactions,
            additional_info: text_of(stmt.get("AddtlStmtInf")),
        })
    }

    /// Map the `Acct` element. All fields are descriptive and default
    /// to empty strings — an account without a declared currency is
    /// still useful for identity matching.
    pub fn map_account(&self, acct: &TreeNode) -> Account {
        Account {
            iban: text_of(acct.at(&["Id", "IBAN"])),
            currency: text_of(acct.get("Ccy")),
            name: text_of(acct.get("Nm")),
            owner: self.map_owner(acct.get("Ownr")),
        }
    }

    /// Map the `Ownr` element. An absent owner yields the all-empty
    /// [`Owner`], never an error — ownership metadata is frequently
    /// blank for omnibus and clearing accounts.
    pub fn map_owner(&self, ownr: Option<&TreeNode>) -> Owner {
        let Some(ownr) = ownr else {
            return Owner {
                name: String::new(),
                address: Vec::new(),
                id: String::new(),
            };
        };
        Owner {
            name: text_of(ownr.get("Nm")),
            address: text_lines(ownr.at(&["PstlAdr", "AdrLine"])),
            id: text_of(ownr.at(&["Id", "OrgId", "Othr", "Id"])),
        }
    }

    /// Map one `Bal` element. Any missing level of the two-level type
    /// path (`Tp/CdOrPrtry/Cd`) collapses to an empty string —
    /// classification must not block ingestion of the amount data.
    pub fn map_balance(&self, bal: &TreeNode) -> Result<Balance, AuszugError> {
        Ok(Balance {
            balance_type: text_of(bal.at(&["Tp", "CdOrPrtry", "Cd"])),
            amount: self.map_amount(bal.get("Amt"))?,
            credit_debit_indicator: text_of(bal.get("CdtDbtInd")),
            date: date_of(bal.get("Dt")),
        })
    }

    /// Map the `TxsSummry` element. The credit and debit blocks are
    /// independently optional and stay omitted when absent, keeping "no
    /// credits reported" distinct from "zero credits".
    pub fn map_transaction_summary(&self, summary: &TreeNode) -> TransactionSummary {
        TransactionSummary {
            total_credit_entries: summary.get("TtlCdtNtries").map(map_summary_detail),
            total_debit_entries: summary.get("TtlDbtNtries").map(map_summary_detail),
        }
    }

    /// Map one `Ntry` element.
    ///
    /// Unlike every other mapper input, the entry itself is required:
    /// invoking this on an absent node is a caller error and fails with
    /// [`AuszugError::InvalidTransaction`].
    pub fn map_entry(&self, ntry: Option<&TreeNode>) -> Result<Transaction, AuszugError> {
        let ntry = ntry
            .ok_or_else(|| AuszugError::InvalidTransaction("entry element is absent".into()))?;

        Ok(Transaction {
            reference: optional_text(ntry.get("NtryRef")),
            amount: self.map_amount(ntry.get("Amt"))?,
            credit_debit_indicator: text_of(ntry.get("CdtDbtInd")),
            // Feeds encode booleans as the literal "true"; anything
            // else, including absence, reads as false.
            reversal_indicator: ntry.get("RvslInd").and_then(TreeNode::text) == Some("true"),
            status: text_of(ntry.at(&["Sts", "Cd"])),
            booking_date: date_of(ntry.get("BookgDt")),
            value_date: date_of(ntry.get("ValDt")),
            account_servicer_reference: text_of(ntry.get("AcctSvcrRef")),
            bank_transaction_code: text_of(ntry.at(&["BkTxCd", "Prtry", "Cd"])),
            details: self.map_entry_details(ntry.get("NtryDtls"))?,
        })
    }

    /// Flatten the two-level `NtryDtls`/`TxDtls` nesting into one
    /// ordered sequence — consumers reason per transaction detail, not
    /// per container. Both levels tolerate singleton-or-sequence
    /// shapes.
    fn map_entry_details(
        &self,
        dtls: Option<&TreeNode>,
    ) -> Result<Vec<TransactionDetail>, AuszugError> {
        let mut details = Vec::new();
        for container in as_sequence(dtls) {
            let tx_dtls = as_sequence(container.get("TxDtls"));
            if tx_dtls.is_empty() && self.policy == MappingPolicy::Strict {
                return Err(AuszugError::MissingElement("TxDtls"));
            }
            for tx in tx_dtls {
                details.push(self.map_transaction_detail(tx)?);
            }
        }
        Ok(details)
    }

    /// Map one `TxDtls` record. Related parties and remittance
    /// information are present only when their source elements exist;
    /// everything else defaults.
    pub fn map_transaction_detail(
        &self,
        dtls: &TreeNode,
    ) -> Result<TransactionDetail, AuszugError> {
        Ok(TransactionDetail {
            references: References {
                account_servicer_reference: text_of(dtls.at(&["Refs", "AcctSvcrRef"])),
                end_to_end_id: text_of(dtls.at(&["Refs", "EndToEndId"])),
            },
            amount_details: AmountDetails {
                transaction_amount: self.map_amount(dtls.at(&["AmtDtls", "TxAmt", "Amt"]))?,
            },
            related_parties: dtls.get("RltdPties").map(map_related_parties),
            // Only structured remittance is represented; when a feed
            // repeats Strd, the first block wins.
            remittance_information: as_sequence(dtls.at(&["RmtInf", "Strd"]))
                .first()
                .copied()
                .map(map_remittance),
        })
    }

    /// Map an `Amt` element. An absent amount becomes the empty
    /// [`Amount`] sentinel in lenient mode and a
    /// [`AuszugError::MissingElement`] in strict mode.
    pub fn map_amount(&self, amt: Option<&TreeNode>) -> Result<Amount, AuszugError> {
        match amt {
            Some(amt) => Ok(Amount {
                currency: text_of(amt.get("Ccy")),
                value: amt.text().unwrap_or_default().to_string(),
            }),
            None if self.policy == MappingPolicy::Strict => {
                Err(AuszugError::MissingElement("Amt"))
            }
            None => Ok(Amount::empty()),
        }
    }
}

fn map_header(hdr: Option<&TreeNode>) -> DocumentHeader {
    DocumentHeader {
        message_id: text_of(hdr.and_then(|h| h.get("MsgId"))),
        creation_date_time: text_of(hdr.and_then(|h| h.get("CreDtTm"))),
    }
}

fn map_summary_detail(detail: &TreeNode) -> SummaryDetail {
    SummaryDetail {
        number_of_entries: text_of(detail.get("NbOfNtries")),
        sum: text_of(detail.get("Sum")),
    }
}

fn map_related_parties(parties: &TreeNode) -> RelatedParties {
    RelatedParties {
        debtor: parties.get("Dbtr").map(map_party),
        debtor_account: parties.get("DbtrAcct").map(map_account_identification),
        creditor: parties.get("Cdtr").map(map_party),
        creditor_account: parties.get("CdtrAcct").map(map_account_identification),
    }
}

// camt.053.001.08 wraps party data in <Pty>; older schema versions
// inline it on the role element.
fn map_party(role: &TreeNode) -> Party {
    let party = role.get("Pty").unwrap_or(role);
    Party {
        name: text_of(party.get("Nm")),
        postal_address: PostalAddress {
            country: optional_text(party.at(&["PstlAdr", "Ctry"])),
            address_lines: text_lines(party.at(&["PstlAdr", "AdrLine"])),
        },
    }
}

fn map_account_identification(account: &TreeNode) -> AccountIdentification {
    AccountIdentification {
        iban: text_of(account.at(&["Id", "IBAN"])),
    }
}

fn map_remittance(strd: &TreeNode) -> RemittanceInformation {
    RemittanceInformation {
        creditor_reference: CreditorReference {
            reference_type: text_of(strd.at(&["CdtrRefInf", "Tp", "CdOrPrtry", "Cd"])),
            reference: text_of(strd.at(&["CdtrRefInf", "Ref"])),
        },
        additional_remittance_info: text_lines(strd.get("AddtlRmtInf")),
    }
}

/// Text of an optional node, empty string when absent.
fn text_of(node: Option<&TreeNode>) -> String {
    node.and_then(TreeNode::text)
        .map(str::to_string)
        .unwrap_or_default()
}

fn optional_text(node: Option<&TreeNode>) -> Option<String> {
    node.and_then(TreeNode::text).map(str::to_string)
}

/// Ordered text lines of a repeating element; non-text nodes keep their
/// position as empty strings.
fn text_lines(node: Option<&TreeNode>) -> Vec<String> {
    as_sequence(node)
        .into_iter()
        .map(|line| line.text().unwrap_or_default().to_string())
        .collect()
}

/// A date container holds either `<Dt>` or `<DtTm>`; the time-bearing
/// form wins when both are present.
fn date_of(node: Option<&TreeNode>) -> String {
    let Some(container) = node else {
        return String::new();
    };
    container
        .get("DtTm")
        .and_then(TreeNode::text)
        .filter(|value| !value.is_empty())
        .or_else(|| container.get("Dt").and_then(TreeNode::text))
        .map(str::to_string)
        .unwrap_or_default()
}
