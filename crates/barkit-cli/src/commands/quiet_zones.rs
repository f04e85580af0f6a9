//! Quiet zones command implementation

use crate::cli::QuietZoneArgs;
use anyhow::Result;
use barkit::{layout, quiet_zone, Symbol};

pub fn run(args: &QuietZoneArgs) -> Result<()> {
    print!("{}", report(args));
    Ok(())
}

fn symbol_for(args: &QuietZoneArgs) -> Symbol {
    let mut symbol = Symbol::new(args.symbology);
    symbol.text = args.text.clone();
    symbol.version = args.version;
    args.flags.apply(&mut symbol);
    symbol
}

fn report(args: &QuietZoneArgs) -> String {
    let symbol = symbol_for(args);
    let lookup = quiet_zone::quiet_zones(&symbol, args.hide_text);
    let offsets = layout::whitespace_offsets(&symbol, args.hide_text, args.scale);
    let qz = lookup.margins;

    let mut out = format!(
        "{} ({})\n",
        symbol.symbology.name(),
        if lookup.recognized { "recognized" } else { "no quiet zones" }
    );
    out.push_str(&format!(
        "  Quiet zones: left {:.3} right {:.3} top {:.3} bottom {:.3}\n",
        qz.left, qz.right, qz.top, qz.bottom
    ));
    out.push_str(&format!(
        "  Offsets:     left {:.3} right {:.3} top {:.3} bottom {:.3}\n",
        offsets.left, offsets.right, offsets.top, offsets.bottom
    ));
    if let Some(px) = offsets.pixels {
        out.push_str(&format!(
            "  Pixels:      left {} right {} top {} bottom {}\n",
            px.left, px.right, px.top, px.bottom
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn args(argv: &[&str]) -> QuietZoneArgs {
        let mut full = vec!["barkit", "quiet-zones"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::QuietZones(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_always_on_margins() {
        let out = report(&args(&["ITF14"]));
        assert_eq!(
            out,
            "ITF14 (recognized)\n  \
             Quiet zones: left 10.000 right 10.000 top 0.000 bottom 0.000\n  \
             Offsets:     left 10.000 right 10.000 top 0.000 bottom 0.000\n"
        );
    }

    #[test]
    fn test_opt_in_needs_flag() {
        assert!(report(&args(&["QRCODE"])).starts_with("QRCODE (no quiet zones)\n"));
        let out = report(&args(&["QRCODE", "--quiet-zones"]));
        assert!(out.contains("Quiet zones: left 4.000 right 4.000 top 4.000 bottom 4.000"));
    }

    #[test]
    fn test_box_and_scale() {
        let out = report(&args(&[
            "CODE128",
            "--no-quiet-zones",
            "--box",
            "--border",
            "1",
            "--whitespace-width",
            "2",
            "--scale",
            "2.5",
        ]));
        assert!(out.contains("Offsets:     left 3.000 right 3.000 top 1.000 bottom 1.000\n"));
        assert!(out.contains("Pixels:      left 7 right 7 top 2 bottom 2\n"));
    }
}
