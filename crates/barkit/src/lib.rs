//! Barkit - the output back end of a barcode generator
//!
//! Encoders hand over a finished [`Symbol`]; Barkit takes it from there:
//! 1. Color option validation and RGB/CMYK conversion
//! 2. Standard quiet zones per symbology
//! 3. Whitespace offsets, auto row heights and EAN/UPC layout
//! 4. Vector output
//!
//! # Example
//!
//! ```ignore
//! use barkit::prelude::*;
//!
//! let mut symbol: Symbol = serde_json::from_str(&json)?;
//! symbol.outfile = "out/symbol.eps".into();
//! output::plot(&PsExporter::new(), &mut symbol)?;
//! ```
//!
//! # Feature Flags
//!
//! - `export-ps`: Encapsulated PostScript output (default)

pub use barkit_core::{
    color, error, layout, output, quiet_zone, scene, symbology, traits, OutputOptions, Symbol,
    Symbology,
};

#[cfg(feature = "export-ps")]
pub use barkit_export_ps as export_ps;

/// Common imports for typical usage
pub mod prelude {
    pub use barkit_core::{
        error::{BarkitError, Result},
        output,
        scene::{Circle, HAlign, HexRotation, Hexagon, Rect, RectColor, TextRun, VectorScene},
        traits::Exporter,
        OutputOptions, Symbol, Symbology,
    };

    #[cfg(feature = "export-ps")]
    pub use barkit_export_ps::PsExporter;
}
