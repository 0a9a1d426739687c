use c12_core::error::C12Error;
use c12_core::parsing::ParsedDocument;

pub fn print(parsed: &ParsedDocument) -> Result<(), C12Error> {
    let json = serde_json::to_string_pretty(parsed)?;
    println!("{json}");
    Ok(())
}
