//! Simple dumper to inspect the values of a node-set file.
//!
//! Set `RUST_LOG=nodeset_values=debug` to see diagnostics as they are recorded.

use std::fs;

use nodeset_values::util::load_document;
use nodeset_values::{parse_value_element, Diagnostics, Identifier, Level};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Opc.Ua.NodeSet2.xml".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", text.len());

    let doc = load_document(&text).expect("Failed to parse XML");
    let mut diags = Diagnostics::new();

    let mut variable_count = 0;
    let mut value_count = 0;

    println!("\n=== Variables ===");
    for var in doc.descendants().filter(|n| n.has_tag_name("UAVariable")) {
        variable_count += 1;

        let id = match Identifier::parse(var.attribute("NodeId")) {
            Ok(id) => id,
            Err(e) => {
                println!("  skipping variable: {}", e);
                continue;
            }
        };
        let browse_name = var.attribute("BrowseName").unwrap_or("");
        let data_type = var.attribute("DataType").unwrap_or("BaseDataType");

        let Some(wrapper) = var.children().find(|n| n.has_tag_name("Value")) else {
            continue;
        };
        match parse_value_element(wrapper, &mut diags) {
            Ok(Some(value)) => {
                value_count += 1;
                let rendered = value.to_string();
                let preview: String = rendered.chars().take(80).collect();
                if rendered.chars().count() > 80 {
                    println!("{} {} [{}] = {}...", id, browse_name, data_type, preview);
                } else {
                    println!("{} {} [{}] = {}", id, browse_name, data_type, preview);
                }
            }
            Ok(None) => {}
            Err(e) => println!("{} {} [{}] ERROR {}", id, browse_name, data_type, e),
        }
    }

    println!("\n=== Summary ===");
    println!("Variables:   {}", variable_count);
    println!("With values: {}", value_count);
    println!("Diagnostics: {}", diags.len());

    let serious: Vec<_> = diags.at_least(Level::Warn).collect();
    if !serious.is_empty() {
        println!("\n=== Diagnostics ({}) ===", serious.len());
        for d in serious {
            println!("  {}", d);
        }
    }
}
