//! The contract every output back end signs
//!
//! An [`Exporter`] turns a finished [`Symbol`] into a document. Opening
//! the destination and reporting failures is left to [`crate::output`].

use std::io::Write;

use crate::{error::Result, Symbol};

/// The final step: a symbol becomes a file
pub trait Exporter: Send + Sync {
    /// Short identifier, e.g. "eps"
    fn name(&self) -> &'static str;

    /// Write the whole document for `symbol` to `out`
    fn write_symbol(&self, symbol: &Symbol, out: &mut dyn Write) -> Result<()>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;

    /// The document as bytes
    fn export(&self, symbol: &Symbol) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_symbol(symbol, &mut buf)?;
        Ok(buf)
    }
}
