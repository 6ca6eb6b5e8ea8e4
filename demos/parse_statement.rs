use std::fs;

use kontoauszug::xml::from_camt_xml;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.053.001.08">
  <BkToCstmrStmt>
    <GrpHdr>
      <MsgId>BCS_1101537865_20250102_001_978</MsgId>
      <CreDtTm>2025-01-03T00:18:37.874</CreDtTm>
    </GrpHdr>
    <Stmt>
      <Id>BCS_1101537865_20250102_001_978</Id>
      <LglSeqNb>1</LglSeqNb>
      <FrToDt>
        <FrDtTm>2025-01-02T00:00:00.000</FrDtTm>
        <ToDtTm>2025-01-02T23:59:59.999</ToDtTm>
      </FrToDt>
      <Acct>
        <Id><IBAN>HR1725000091101537865</IBAN></Id>
        <Ccy>EUR</Ccy>
        <Nm>Transakcijski racun poslovnog subjekta</Nm>
        <Ownr>
          <Nm>EBIZ D.O.O.</Nm>
          <PstlAdr>
            <AdrLine>PRISAVLJE 10</AdrLine>
            <AdrLine>ZAGREB</AdrLine>
          </PstlAdr>
        </Ownr>
      </Acct>
      <Bal>
        <Tp><CdOrPrtry><Cd>OPBD</Cd></CdOrPrtry></Tp>
        <Amt Ccy="EUR">1191.59</Amt>
        <CdtDbtInd>CRDT</CdtDbtInd>
        <Dt><Dt>2025-01-02</Dt></Dt>
      </Bal>
      <Ntry>
        <NtryRef>7019236935</NtryRef>
        <Amt Ccy="EUR">1158.38</Amt>
        <CdtDbtInd>DBIT</CdtDbtInd>
        <Sts><Cd>BOOK</Cd></Sts>
        <BookgDt><Dt>2025-01-02</Dt></BookgDt>
        <ValDt><Dt>2025-01-02</Dt></ValDt>
        <NtryDtls>
          <TxDtls>
            <Refs>
              <AcctSvcrRef>9012530459730985</AcctSvcrRef>
              <EndToEndId>HR99</EndToEndId>
            </Refs>
            <AmtDtls><TxAmt><Amt Ccy="EUR">1158.38</Amt></TxAmt></AmtDtls>
            <RltdPties>
              <Cdtr>
                <Pty>
                  <Nm>DOBAVLJAC D.O.O.</Nm>
                  <PstlAdr><Ctry>HR</Ctry><AdrLine>ILICA 1</AdrLine></PstlAdr>
                </Pty>
              </Cdtr>
              <CdtrAcct><Id><IBAN>HR6623600001101234565</IBAN></Id></CdtrAcct>
            </RltdPties>
            <RmtInf>
              <Strd>
                <CdtrRefInf>
                  <Tp><CdOrPrtry><Cd>SCOR</Cd></CdOrPrtry></Tp>
                  <Ref>RF18539007547034</Ref>
                </CdtrRefInf>
              </Strd>
            </RmtInf>
          </TxDtls>
        </NtryDtls>
      </Ntry>
    </Stmt>
  </BkToCstmrStmt>
</Document>"#;

fn main() {
    // Pass a file path to parse a real statement; the embedded sample is
    // used otherwise.
    let xml = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path).expect("cannot read input file"),
        None => SAMPLE.to_string(),
    };

    let doc = match from_camt_xml(&xml) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Parse failed: {e}");
            std::process::exit(1);
        }
    };

    println!("=== Document ===");
    println!("Message ID: {}", doc.header.message_id);
    println!("Created:    {}", doc.header.creation_date_time);

    for (i, stmt) in doc.statements.iter().enumerate() {
        println!("\n=== Statement #{} ===", i + 1);
        println!("Statement ID: {}", stmt.statement_id);
        println!("Period:       {} to {}", stmt.from_date_time, stmt.to_date_time);

        println!("\n--- Account ---");
        println!("IBAN:     {}", stmt.account.iban);
        println!("Currency: {}", stmt.account.currency);
        println!("Owner:    {}", stmt.account.owner.name);
        if !stmt.account.owner.address.is_empty() {
            println!("Address:  {}", stmt.account.owner.address.join(", "));
        }

        println!("\n--- Balances ---");
        for balance in &stmt.balances {
            println!(
                "{} {} {} ({}) on {}",
                balance.balance_type,
                balance.amount.value,
                balance.amount.currency,
                balance.credit_debit_indicator,
                balance.date
            );
        }

        println!("\n--- Transactions ({}) ---", stmt.transactions.len());
        for tx in &stmt.transactions {
            println!(
                "{} {} ({}) booked {} status {}",
                tx.amount.value,
                tx.amount.currency,
                tx.credit_debit_indicator,
                tx.booking_date,
                tx.status
            );
            for detail in &tx.details {
                println!("  end-to-end id: {}", detail.references.end_to_end_id);
                if let Some(parties) = &detail.related_parties {
                    if let Some(creditor) = &parties.creditor {
                        println!("  creditor:      {}", creditor.name);
                    }
                    if let Some(account) = &parties.creditor_account {
                        println!("  creditor IBAN: {}", account.iban);
                    }
                }
                if let Some(remittance) = &detail.remittance_information {
                    println!("  reference:     {}", remittance.creditor_reference.reference);
                }
            }
        }
    }
}
