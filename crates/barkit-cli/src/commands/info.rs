//! Info command implementation
//!
//! Lists the symbologies and output formats this build knows about.

use anyhow::Result;
use barkit::{prelude::Exporter, Symbology};
use barkit_export_ps::PsExporter;

pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

fn report() -> String {
    let mut out = format!("Barkit v{}\n\nSymbologies:\n", env!("CARGO_PKG_VERSION"));
    for sym in Symbology::ALL {
        out.push_str(&format!("  {:>3}  {}\n", sym.id(), sym.name()));
    }

    let ps = PsExporter::new();
    out.push_str("\nOutput formats:\n");
    out.push_str(&format!("  {:<5} {}\n", ps.extension(), ps.mime_type()));
    out
}
