//! Output destinations and the render driver
//!
//! [`plot`] is the single entry point back ends are driven through: it
//! checks the symbol, opens standard output or the output file, hands a
//! buffered writer to the [`Exporter`] and turns every failure into a
//! numbered error that is also left in `symbol.error_text`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use log::{debug, warn};

use crate::color::check_color_options;
use crate::error::{BarkitError, OutputError, Result, SceneError};
use crate::traits::Exporter;
use crate::Symbol;

/// Create `path` for writing, creating missing parent directories
///
/// The file is tried first; directories are only made when that fails.
pub fn create_output_file(path: &Path) -> io::Result<File> {
    match File::create(path) {
        Ok(file) => Ok(file),
        Err(err) => match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                debug!("Creating output directory {}", dir.display());
                fs::create_dir_all(dir)?;
                File::create(path)
            },
            _ => Err(err),
        },
    }
}

/// An open destination; standard output is flushed but never closed
enum Sink {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
}

impl Sink {
    fn open(symbol: &Symbol) -> Result<Self> {
        if symbol.options.stdout {
            return Ok(Sink::Stdout(BufWriter::new(io::stdout())));
        }
        let file = create_output_file(&symbol.outfile).map_err(OutputError::Open)?;
        Ok(Sink::File(BufWriter::new(file)))
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Stdout(w) => w as &mut dyn Write,
            Sink::File(w) => w as &mut dyn Write,
        }
    }

    /// Flush, and close the file if there is one
    fn finish(self) -> Result<()> {
        match self {
            Sink::Stdout(mut w) => w.flush().map_err(OutputError::Flush)?,
            Sink::File(w) => {
                // Dropping the file closes it
                w.into_inner().map_err(|e| OutputError::Close(e.into_error()))?;
            },
        }
        Ok(())
    }
}

/// Render `symbol` with `exporter` to its destination
///
/// On failure the error message is also stored in `symbol.error_text`.
pub fn plot(exporter: &dyn Exporter, symbol: &mut Symbol) -> Result<()> {
    let result = render(exporter, symbol);
    match &result {
        Ok(()) => symbol.error_text = None,
        Err(err) => {
            warn!("{} output failed: {}", exporter.name(), err);
            symbol.error_text = Some(err.to_string());
        },
    }
    result
}

fn render(exporter: &dyn Exporter, symbol: &Symbol) -> Result<()> {
    if symbol.vector.is_none() {
        return Err(SceneError::MissingVector.into());
    }
    check_color_options(symbol)?;

    let mut sink = Sink::open(symbol)?;
    debug!(
        "Rendering {} with {} to {}",
        symbol.symbology,
        exporter.name(),
        if symbol.options.stdout {
            "stdout".to_string()
        } else {
            symbol.outfile.display().to_string()
        }
    );

    let written = exporter
        .write_symbol(symbol, sink.writer())
        .map_err(|err| match err {
            BarkitError::Io(e) => OutputError::Write(e).into(),
            other => other,
        });
    // Flush on every path; the write error wins over a flush error
    let finished = sink.finish();
    written.and(finished)
}
