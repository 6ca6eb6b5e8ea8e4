#![cfg(feature = "xml")]

use kontoauszug::MappingPolicy;
use kontoauszug::core::{AuszugError, Document};
use kontoauszug::xml::{from_camt_xml, from_camt_xml_with};

const HEADER_ONLY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.053.001.08">
  <BkToCstmrStmt>
    <GrpHdr>
      <MsgId>BCS_1101537865_20250102_001_978</MsgId>
      <CreDtTm>2025-01-03T00:18:37.874</CreDtTm>
    </GrpHdr>
  </BkToCstmrStmt>
</Document>"#;

const FULL_STATEMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.053.001.08">
  <BkToCstmrStmt>
    <GrpHdr>
      <MsgId>BCS_1101537865_20250102_001_978</MsgId>
      <CreDtTm>2025-01-03T00:18:37.874</CreDtTm>
    </GrpHdr>
    <Stmt>
      <Id>BCS_1101537865_20250102_001_978</Id>
      <LglSeqNb>1</LglSeqNb>
      <CreDtTm>2025-01-03T00:18:37.874</CreDtTm>
      <FrToDt>
        <FrDtTm>2025-01-02T00:00:00.000</FrDtTm>
        <ToDtTm>2025-01-02T23:59:59.999</ToDtTm>
      </FrToDt>
      <RptgSrc>
        <Prtry>HAABHR22XXX14036333877</Prtry>
      </RptgSrc>
      <Acct>
        <Id>
          <IBAN>HR1725000091101537865</IBAN>
        </Id>
        <Ccy>EUR</Ccy>
        <Nm>Transakcijski racun poslovnog subjekta</Nm>
        <Ownr>
          <Nm>EBIZ D.O.O.</Nm>
          <PstlAdr>
            <AdrLine>PRISAVLJE 10</AdrLine>
            <AdrLine>ZAGREB</AdrLine>
          </PstlAdr>
          <Id>
            <OrgId>
              <Othr>
                <Id>23732108701</Id>
              </Othr>
            </OrgId>
          </Id>
        </Ownr>
      </Acct>
      <Bal>
        <Tp>
          <CdOrPrtry>
            <Cd>OPBD</Cd>
          </CdOrPrtry>
        </Tp>
        <Amt Ccy="EUR">1191.59</Amt>
        <CdtDbtInd>CRDT</CdtDbtInd>
        <Dt>
          <Dt>2025-01-02</Dt>
        </Dt>
      </Bal>
      <TxsSummry>
        <TtlDbtNtries>
          <NbOfNtries>1</NbOfNtries>
          <Sum>1158.38</Sum>
        </TtlDbtNtries>
      </TxsSummry>
      <Ntry>
        <NtryRef>7019236935</NtryRef>
        <Amt Ccy="EUR">1158.38</Amt>
        <CdtDbtInd>DBIT</CdtDbtInd>
        <RvslInd>false</RvslInd>
        <Sts>
          <Cd>BOOK</Cd>
        </Sts>
        <BookgDt>
          <Dt>2025-01-02</Dt>
        </BookgDt>
        <ValDt>
          <Dt>2025-01-02</Dt>
        </ValDt>
        <AcctSvcrRef>9012530459730985</AcctSvcrRef>
        <BkTxCd>
          <Prtry>
            <Cd>NOTPROVIDED</Cd>
          </Prtry>
        </BkTxCd>
        <NtryDtls>
          <TxDtls>
            <Refs>
              <AcctSvcrRef>9012530459730985</AcctSvcrRef>
              <EndToEndId>HR99</EndToEndId>
            </Refs>
            <AmtDtls>
              <TxAmt>
                <Amt Ccy="EUR">1158.38</Amt>
              </TxAmt>
            </AmtDtls>
          </TxDtls>
        </NtryDtls>
      </Ntry>
    </Stmt>
  </BkToCstmrStmt>
</Document>"#;

#[test]
fn header_only_document_parses_without_statements() {
    let doc = from_camt_xml(HEADER_ONLY).unwrap();

    assert_eq!(doc.header.message_id, "BCS_1101537865_20250102_001_978");
    assert_eq!(doc.header.creation_date_time, "2025-01-03T00:18:37.874");
    assert!(doc.statements.is_empty());
}

#[test]
fn full_statement_end_to_end() {
    let doc = from_camt_xml(FULL_STATEMENT).unwrap();
    assert_eq!(doc.statements.len(), 1);
    let stmt = &doc.statements[0];

    assert_eq!(stmt.statement_id, "BCS_1101537865_20250102_001_978");
    assert_eq!(stmt.sequence_number, "1");
    assert_eq!(stmt.from_date_time, "2025-01-02T00:00:00.000");
    assert_eq!(stmt.to_date_time, "2025-01-02T23:59:59.999");
    assert_eq!(stmt.reporting_source, "HAABHR22XXX14036333877");

    assert_eq!(stmt.account.iban, "HR1725000091101537865");
    assert_eq!(stmt.account.currency, "EUR");
    assert_eq!(stmt.account.owner.name, "EBIZ D.O.O.");
    assert_eq!(stmt.account.owner.address, ["PRISAVLJE 10", "ZAGREB"]);
    assert_eq!(stmt.account.owner.id, "23732108701");

    assert_eq!(stmt.balances.len(), 1);
    let balance = &stmt.balances[0];
    assert_eq!(balance.balance_type, "OPBD");
    assert_eq!(balance.amount.currency, "EUR");
    assert_eq!(balance.amount.value, "1191.59");
    assert_eq!(balance.credit_debit_indicator, "CRDT");
    assert_eq!(balance.date, "2025-01-02");

    let summary = stmt.transaction_summary.as_ref().unwrap();
    assert!(summary.total_credit_entries.is_none());
    let debits = summary.total_debit_entries.as_ref().unwrap();
    assert_eq!(debits.number_of_entries, "1");
    assert_eq!(debits.sum, "1158.38");

    assert_eq!(stmt.transactions.len(), 1);
    let tx = &stmt.transactions[0];
    assert_eq!(tx.reference.as_deref(), Some("7019236935"));
    assert_eq!(tx.amount.value, "1158.38");
    assert!(tx.is_debit());
    assert!(!tx.reversal_indicator);
    assert_eq!(tx.status, "BOOK");
    assert_eq!(tx.booking_date, "2025-01-02");
    assert_eq!(tx.value_date, "2025-01-02");
    assert_eq!(tx.account_servicer_reference, "9012530459730985");
    assert_eq!(tx.bank_transaction_code, "NOTPROVIDED");

    assert_eq!(tx.details.len(), 1);
    let detail = &tx.details[0];
    assert_eq!(detail.references.end_to_end_id, "HR99");
    assert_eq!(detail.references.account_servicer_reference, "9012530459730985");
    assert_eq!(detail.amount_details.transaction_amount.value, "1158.38");
    assert!(detail.related_parties.is_none());
    assert!(detail.remittance_information.is_none());
}

#[test]
fn repeated_statements_arrive_in_source_order() {
    let xml = r#"<Document><BkToCstmrStmt>
        <GrpHdr><MsgId>M</MsgId><CreDtTm>2025-01-01</CreDtTm></GrpHdr>
        <Stmt><Id>S1</Id><Acct><Id><IBAN>DE1</IBAN></Id></Acct></Stmt>
        <Stmt><Id>S2</Id><Acct><Id><IBAN>DE2</IBAN></Id></Acct></Stmt>
    </BkToCstmrStmt></Document>"#;

    let doc = from_camt_xml(xml).unwrap();
    let ids: Vec<&str> = doc
        .statements
        .iter()
        .map(|s| s.statement_id.as_str())
        .collect();
    assert_eq!(ids, ["S1", "S2"]);
    assert_eq!(doc.statements[1].account.iban, "DE2");
}

#[test]
fn statement_without_account_fails() {
    let xml = r#"<Document><BkToCstmrStmt>
        <GrpHdr><MsgId>M</MsgId><CreDtTm>2025-01-01</CreDtTm></GrpHdr>
        <Stmt><Id>S1</Id></Stmt>
    </BkToCstmrStmt></Document>"#;

    let err = from_camt_xml(xml).unwrap_err();
    assert!(matches!(err, AuszugError::MissingAccount));
}

#[test]
fn strict_policy_rejects_entries_without_amounts() {
    let xml = r#"<Document><BkToCstmrStmt>
        <GrpHdr><MsgId>M</MsgId><CreDtTm>2025-01-01</CreDtTm></GrpHdr>
        <Stmt>
            <Id>S1</Id>
            <Acct><Id><IBAN>DE1</IBAN></Id></Acct>
            <Ntry><CdtDbtInd>DBIT</CdtDbtInd></Ntry>
        </Stmt>
    </BkToCstmrStmt></Document>"#;

    let doc = from_camt_xml(xml).unwrap();
    assert!(doc.statements[0].transactions[0].amount.is_empty());

    let err = from_camt_xml_with(xml, MappingPolicy::Strict).unwrap_err();
    assert!(matches!(err, AuszugError::MissingElement("Amt")));
}

#[test]
fn document_serializes_to_json_and_back() {
    let doc = from_camt_xml(FULL_STATEMENT).unwrap();

    let json = serde_json::to_string_pretty(&doc).unwrap();
    assert!(json.contains("\"1191.59\""));
    assert!(json.contains("HR99"));

    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
}
