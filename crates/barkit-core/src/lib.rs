//! Barkit Core: everything between an encoded symbol and its output file
//!
//! Symbology encoders produce a [`Symbol`]: module matrix, row heights,
//! human-readable text and, for vector output, a [`scene::VectorScene`].
//! This crate holds the services every output back end shares:
//!
//! 1. **Colors** - [`color`] validates and converts RGB(A)/CMYK specifications
//! 2. **Quiet zones** - [`quiet_zone`] knows the margins each standard mandates
//! 3. **Layout** - [`layout`] turns margins, whitespace and row heights into geometry
//! 4. **Output** - [`output`] opens the destination and drives an [`Exporter`]
//!
//! ## Rendering a symbol
//!
//! ```rust,no_run
//! use barkit_core::{output, Symbol, Symbology};
//! use barkit_core::scene::{Rect, VectorScene};
//! # use barkit_core::traits::Exporter;
//! # struct MyExporter;
//! # impl Exporter for MyExporter {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn extension(&self) -> &'static str { "eps" }
//! #     fn mime_type(&self) -> &'static str { "application/postscript" }
//! #     fn write_symbol(&self, _: &Symbol, _: &mut dyn std::io::Write)
//! #         -> barkit_core::Result<()> { Ok(()) }
//! # }
//!
//! let mut symbol = Symbol::new(Symbology::Code128);
//! let mut scene = VectorScene::new(30.0, 20.0);
//! scene.rectangles.push(Rect::new(0.0, 0.0, 2.0, 20.0));
//! symbol.vector = Some(scene);
//! symbol.outfile = "out/code128.eps".into();
//!
//! output::plot(&MyExporter, &mut symbol)?;
//! # Ok::<(), barkit_core::BarkitError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod color;
pub mod error;
pub mod layout;
pub mod output;
pub mod quiet_zone;
pub mod scene;
pub mod symbology;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{BarkitError, Result};
pub use symbology::Symbology;
pub use traits::Exporter;

/// Output option switches
///
/// Each switch is independent; policy code checks only the ones it needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Suppress standard quiet zones, even the always-on ones
    pub no_quiet_zones: bool,
    /// Opt in to standard quiet zones for symbologies that default to none
    pub quiet_zones: bool,
    /// Draw a border box on all sides
    pub box_border: bool,
    /// Draw boundary bars top and bottom
    pub bind: bool,
    /// Draw a boundary bar on top only
    pub bind_top: bool,
    /// Bold human-readable text (ignored by EAN/UPC)
    pub bold_text: bool,
    /// Emit colors in the CMYK color space
    pub cmyk: bool,
    /// Write to standard output instead of `outfile`
    pub stdout: bool,
}

/// A fully encoded symbol, as handed over by an encoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbol {
    pub symbology: Symbology,
    /// Human-readable text; for EAN/UPC an add-on follows a `+`
    pub text: String,
    /// Whether human-readable text is shown
    pub show_hrt: bool,
    pub rows: usize,
    /// Width in modules
    pub width: usize,
    /// Module matrix, one entry per row
    pub modules: Vec<Vec<bool>>,
    /// Per-row heights; zero marks a row sharing the remaining height
    pub row_heights: Vec<f32>,
    /// Requested total height in module widths
    pub height: f32,
    pub scale: f32,
    pub whitespace_width: u32,
    pub whitespace_height: u32,
    pub border_width: u32,
    /// Gap between an EAN/UPC main symbol and its add-on, in modules
    pub addon_gap: Option<u32>,
    /// Symbology version (Code One uses 9 and 10 for versions S and T)
    pub version: Option<u32>,
    pub options: OutputOptions,
    pub fg_color: String,
    pub bg_color: String,
    pub outfile: PathBuf,
    pub vector: Option<scene::VectorScene>,
    /// Message of the last failed output call
    #[serde(skip)]
    pub error_text: Option<String>,
}

impl Symbol {
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            ..Self::default()
        }
    }

    /// Whether the module at `row`, `col` is dark; out of range is light
    pub fn module_is_set(&self, row: usize, col: usize) -> bool {
        self.modules
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Byte length of the human-readable text
    pub fn text_len(&self) -> usize {
        self.text.len()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self {
            symbology: Symbology::Code128,
            text: String::new(),
            show_hrt: true,
            rows: 0,
            width: 0,
            modules: Vec::new(),
            row_heights: Vec::new(),
            height: 0.0,
            scale: 1.0,
            whitespace_width: 0,
            whitespace_height: 0,
            border_width: 0,
            addon_gap: None,
            version: None,
            options: OutputOptions::default(),
            fg_color: "000000".to_string(),
            bg_color: "ffffff".to_string(),
            outfile: PathBuf::from("out.eps"),
            vector: None,
            error_text: None,
        }
    }
}
