//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use barkit::{Symbol, Symbology};

/// Barkit - render encoded barcode symbols to vector output
#[derive(Parser, Debug)]
#[command(name = "barkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported symbologies
    #[command(alias = "i")]
    Info,

    /// Render a symbol described in JSON to EPS
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Show quiet zones and whitespace offsets for a symbology
    #[command(name = "quiet-zones", alias = "qz")]
    QuietZones(QuietZoneArgs),

    /// Validate a color option and show it in both color models
    Color(ColorArgs),
}

/// Output option switches shared by several commands
#[derive(Args, Debug, Default, Clone)]
pub struct OptionFlags {
    /// Suppress standard quiet zones, even the always-on ones
    #[arg(long = "no-quiet-zones")]
    pub no_quiet_zones: bool,

    /// Add the standard quiet zones of the symbology
    #[arg(long = "quiet-zones", conflicts_with = "no_quiet_zones")]
    pub quiet_zones: bool,

    /// Draw a border box
    #[arg(long = "box")]
    pub box_border: bool,

    /// Draw boundary bars above and below
    #[arg(long)]
    pub bind: bool,

    /// Draw a boundary bar above only
    #[arg(long = "bind-top")]
    pub bind_top: bool,

    /// Border width in module widths
    #[arg(long = "border")]
    pub border_width: Option<u32>,

    /// Horizontal whitespace in module widths
    #[arg(long = "whitespace-width", alias = "whitesp")]
    pub whitespace_width: Option<u32>,

    /// Vertical whitespace in module widths
    #[arg(long = "whitespace-height", alias = "vwhitesp")]
    pub whitespace_height: Option<u32>,
}

impl OptionFlags {
    /// Switch on every flag that was given; values given replace the symbol's
    pub fn apply(&self, symbol: &mut Symbol) {
        let opts = &mut symbol.options;
        opts.no_quiet_zones |= self.no_quiet_zones;
        opts.quiet_zones |= self.quiet_zones;
        opts.box_border |= self.box_border;
        opts.bind |= self.bind;
        opts.bind_top |= self.bind_top;
        if let Some(border) = self.border_width {
            symbol.border_width = border;
        }
        if let Some(ws) = self.whitespace_width {
            symbol.whitespace_width = ws;
        }
        if let Some(ws) = self.whitespace_height {
            symbol.whitespace_height = ws;
        }
    }
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON symbol description (reads stdin if omitted or "-")
    pub input: Option<PathBuf>,

    /// Output file path (defaults to the symbol's own)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Write the document to standard output
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Override the symbology (name or number)
    #[arg(short = 'b', long = "barcode")]
    pub symbology: Option<Symbology>,

    /// Foreground color: RRGGBB[AA] or C,M,Y,K
    #[arg(long = "fg")]
    pub fg: Option<String>,

    /// Background color: RRGGBB[AA] or C,M,Y,K
    #[arg(long = "bg")]
    pub bg: Option<String>,

    /// Symbol scale factor
    #[arg(long)]
    pub scale: Option<f32>,

    /// Emit CMYK color statements
    #[arg(long)]
    pub cmyk: bool,

    /// Bold human-readable text
    #[arg(long)]
    pub bold: bool,

    #[command(flatten)]
    pub flags: OptionFlags,
}

impl RenderArgs {
    pub fn apply(&self, symbol: &mut Symbol) {
        self.flags.apply(symbol);
        if let Some(symbology) = self.symbology {
            symbol.symbology = symbology;
        }
        if let Some(fg) = &self.fg {
            symbol.fg_color = fg.clone();
        }
        if let Some(bg) = &self.bg {
            symbol.bg_color = bg.clone();
        }
        if let Some(scale) = self.scale {
            symbol.scale = scale;
        }
        if let Some(output) = &self.output {
            symbol.outfile = output.clone();
        }
        symbol.options.stdout |= self.stdout;
        symbol.options.cmyk |= self.cmyk;
        symbol.options.bold_text |= self.bold;
    }
}

/// Arguments for the quiet-zones command
#[derive(Parser, Debug)]
pub struct QuietZoneArgs {
    /// Symbology name or number, e.g. EANX or 13
    pub symbology: Symbology,

    /// Human-readable text (EAN/UPC margins depend on its length)
    #[arg(short = 't', long, default_value = "")]
    pub text: String,

    /// Treat human-readable text as hidden
    #[arg(long = "hide-text")]
    pub hide_text: bool,

    /// Symbology version (Code One S and T are 9 and 10)
    #[arg(long = "symbol-version")]
    pub version: Option<u32>,

    /// Pixels per module; also prints pixel offsets
    #[arg(long)]
    pub scale: Option<f32>,

    #[command(flatten)]
    pub flags: OptionFlags,
}

/// Arguments for the color command
#[derive(Parser, Debug)]
pub struct ColorArgs {
    /// Color option: RRGGBB, RRGGBBAA or C,M,Y,K
    pub color: String,

    /// Report errors against the background option
    #[arg(long)]
    pub background: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "barkit",
            "render",
            "symbol.json",
            "-o",
            "out/code.eps",
            "--fg",
            "0,0,0,100",
            "--cmyk",
            "--box",
            "--border",
            "2",
            "-b",
            "qrcode",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input, Some(PathBuf::from("symbol.json")));
        assert_eq!(args.symbology, Some(Symbology::QrCode));

        let mut symbol = Symbol::default();
        args.apply(&mut symbol);
        assert_eq!(symbol.symbology, Symbology::QrCode);
        assert_eq!(symbol.outfile, PathBuf::from("out/code.eps"));
        assert_eq!(symbol.fg_color, "0,0,0,100");
        assert_eq!(symbol.bg_color, "ffffff");
        assert!(symbol.options.cmyk);
        assert!(symbol.options.box_border);
        assert_eq!(symbol.border_width, 2);
        assert!(!symbol.options.stdout);
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from(["barkit", "render", "--stdout", "-o", "x.eps"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_zone_args() {
        let cli = Cli::try_parse_from([
            "barkit",
            "qz",
            "13",
            "--text",
            "9780201379624",
            "--no-quiet-zones",
            "--scale",
            "2",
        ])
        .unwrap();
        let Commands::QuietZones(args) = cli.command else {
            panic!("expected quiet-zones");
        };
        assert_eq!(args.symbology, Symbology::Eanx);
        assert!(args.flags.no_quiet_zones);
        assert_eq!(args.scale, Some(2.0));
    }

    #[test]
    fn test_unknown_symbology_rejected() {
        assert!(Cli::try_parse_from(["barkit", "quiet-zones", "NOPE"]).is_err());
    }

    #[test]
    fn test_quiet_zone_flags_conflict() {
        let result =
            Cli::try_parse_from(["barkit", "quiet-zones", "QRCODE", "--quiet-zones", "--no-quiet-zones"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_args() {
        let cli = Cli::try_parse_from(["barkit", "-v", "color", "FF000080", "--background"]).unwrap();
        assert!(cli.verbose);
        let Commands::Color(args) = cli.command else {
            panic!("expected color");
        };
        assert_eq!(args.color, "FF000080");
        assert!(args.background);
    }
}
