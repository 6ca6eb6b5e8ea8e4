use kontoauszug::MappingPolicy;
use kontoauszug::xml::{from_camt_xml, from_camt_xml_with};

fn main() {
    // ── 1. Missing account: the one hard-required element ─────────────
    println!("=== Missing Account ===");
    let no_account = r#"<Document><BkToCstmrStmt>
        <GrpHdr><MsgId>M1</MsgId><CreDtTm>2025-01-01</CreDtTm></GrpHdr>
        <Stmt><Id>S1</Id></Stmt>
    </BkToCstmrStmt></Document>"#;
    match from_camt_xml(no_account) {
        Ok(_) => println!("  Parsed successfully (unexpected)"),
        Err(e) => println!("  Rejected: {e}"),
    }

    // ── 2. Lenient vs strict on an entry without an amount ────────────
    println!("\n=== Lenient vs Strict ===");
    let no_amount = r#"<Document><BkToCstmrStmt>
        <GrpHdr><MsgId>M2</MsgId><CreDtTm>2025-01-01</CreDtTm></GrpHdr>
        <Stmt>
            <Id>S1</Id>
            <Acct><Id><IBAN>DE02120300000000202051</IBAN></Id></Acct>
            <Ntry><CdtDbtInd>DBIT</CdtDbtInd></Ntry>
        </Stmt>
    </BkToCstmrStmt></Document>"#;

    match from_camt_xml(no_amount) {
        Ok(doc) => {
            let tx = &doc.statements[0].transactions[0];
            println!(
                "  Lenient: entry kept, amount is the empty sentinel: {}",
                tx.amount.is_empty()
            );
        }
        Err(e) => println!("  Lenient failed (unexpected): {e}"),
    }
    match from_camt_xml_with(no_amount, MappingPolicy::Strict) {
        Ok(_) => println!("  Strict parsed successfully (unexpected)"),
        Err(e) => println!("  Strict rejected: {e}"),
    }

    // ── 3. XML parse failure ──────────────────────────────────────────
    println!("\n=== XML Parse Errors ===");
    match from_camt_xml("<Document><BkToCstmrStmt></Document>") {
        Ok(_) => println!("  Parsed successfully (unexpected)"),
        Err(e) => println!("  Parse error: {e}"),
    }
    match from_camt_xml("<not-a-statement>hello</not-a-statement>") {
        Ok(_) => println!("  Parsed successfully (unexpected)"),
        Err(e) => println!("  Wrong message type: {e}"),
    }
}
