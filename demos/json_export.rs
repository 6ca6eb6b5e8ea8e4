//! Parse a CAMT.053 statement and write it out as pretty-printed JSON.
//! Every field of the document is a plain string, boolean, or nested
//! record, so the serde output needs no further transformation.

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
      <Acct>
        <Id><IBAN>HR1725000091101537865</IBAN></Id>
        <Ccy>EUR</Ccy>
      </Acct>
      <Bal>
        <Tp><CdOrPrtry><Cd>CLBD</Cd></CdOrPrtry></Tp>
        <Amt Ccy="EUR">33.21</Amt>
        <CdtDbtInd>CRDT</CdtDbtInd>
        <Dt><Dt>2025-01-02</Dt></Dt>
      </Bal>
    </Stmt>
  </BkToCstmrStmt>
</Document>"#;

fn main() {
    let xml = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path).expect("cannot read input file"),
        None => SAMPLE.to_string(),
    };

    match from_camt_xml(&xml) {
        Ok(doc) => println!("{}", serde_json::to_string_pretty(&doc).unwrap()),
        Err(e) => {
            eprintln!("Parse failed: {e}");
            std::process::exit(1);
        }
    }
}
