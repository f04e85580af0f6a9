//! Render command implementation
//!
//! Reads a symbol description in JSON, applies command-line overrides and
//! plots it as EPS.

use crate::cli::RenderArgs;
use anyhow::{Context, Result};
use barkit::{output, Symbol};
use barkit_export_ps::PsExporter;
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn run(args: &RenderArgs) -> Result<()> {
    let json = read_input(args.input.as_deref())?;
    let mut symbol = parse_symbol(&json)?;
    args.apply(&mut symbol);

    output::plot(&PsExporter::new(), &mut symbol)?;

    if !symbol.options.stdout {
        info!("Wrote {} to {}", symbol.symbology, symbol.outfile.display());
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("Failed to read symbol file {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read symbol from stdin")?;
            Ok(buf)
        },
    }
}

fn parse_symbol(json: &str) -> Result<Symbol> {
    serde_json::from_str(json).context("Invalid symbol description")
}
