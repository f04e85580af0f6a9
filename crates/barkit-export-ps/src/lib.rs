//! Encapsulated PostScript output for Barkit
//!
//! Walks a symbol's [`VectorScene`] and writes a single-page EPS document.
//!
//! ## Features
//!
//! - RGB or CMYK color statements, per the symbol's `cmyk` option
//! - Drawing procedures defined only when the scene uses them
//! - Per-rectangle palette colors for Ultracode
//! - ISO 8859-1 text, re-encoding Helvetica when any run needs it
//!
//! ```rust,no_run
//! use barkit_core::{output, Symbol, Symbology};
//! use barkit_core::scene::{Rect, VectorScene};
//! use barkit_export_ps::PsExporter;
//!
//! let mut symbol = Symbol::new(Symbology::Code128);
//! let mut scene = VectorScene::new(20.0, 10.0);
//! scene.rectangles.push(Rect::new(0.0, 0.0, 1.0, 10.0));
//! symbol.vector = Some(scene);
//! symbol.outfile = "code128.eps".into();
//!
//! output::plot(&PsExporter::new(), &mut symbol)?;
//! # Ok::<(), barkit_core::BarkitError>(())
//! ```

use std::io::Write;

use barkit_core::{
    color::{to_cmyk, to_rgb, ColorSpec},
    error::{ColorChannel, Result, SceneError},
    scene::{HAlign, RectColor, VectorScene},
    traits::Exporter,
    Symbol, Symbology,
};
use log::{debug, warn};

mod string;

pub use string::ps_string;

/// `sqrt(3) / 4`: half the flat-to-flat width of a hexagon per unit diameter
const HALF_SQRT3_RADIUS: f64 = 0.43301270189221932338;

/// EPS exporter for vector scenes
#[derive(Debug, Default, Clone, Copy)]
pub struct PsExporter;

impl PsExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PsExporter {
    fn name(&self) -> &'static str {
        "eps"
    }

    fn write_symbol(&self, symbol: &Symbol, out: &mut dyn Write) -> Result<()> {
        let scene = symbol.vector.as_ref().ok_or(SceneError::MissingVector)?;
        let inks = Inks::resolve(symbol)?;
        if scene.is_empty() {
            debug!("EPS: empty scene, background only");
        } else {
            debug!(
                "EPS: {} rectangles, {} hexagons, {} circles, {} strings",
                scene.rectangles.len(),
                scene.hexagons.len(),
                scene.circles.len(),
                scene.strings.len()
            );
        }

        let mut doc = Document {
            out,
            scene,
            inks: &inks,
        };
        doc.header()?;
        doc.definitions()?;
        doc.rectangles(symbol.symbology)?;
        doc.hexagons()?;
        doc.circles()?;
        doc.strings(symbol)?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "eps"
    }

    fn mime_type(&self) -> &'static str {
        "application/postscript"
    }
}

/// Foreground and background as ready-made color statements
struct Inks {
    cmyk: bool,
    ink: String,
    paper: String,
    draw_background: bool,
}

impl Inks {
    fn resolve(symbol: &Symbol) -> Result<Self> {
        let fg = ColorSpec::parse(&symbol.fg_color, ColorChannel::Foreground)?;
        let bg = ColorSpec::parse(&symbol.bg_color, ColorChannel::Background)?;
        let cmyk = symbol.options.cmyk;

        let (ink, paper, bg_alpha) = if cmyk {
            let (fg, bg) = (to_cmyk(&fg), to_cmyk(&bg));
            if fg.source.is_converted() || bg.source.is_converted() {
                debug!(
                    "EPS: CMYK output from RGB colors (fg {:?}, bg {:?})",
                    fg.source, bg.source
                );
            }
            (
                cmyk_statement(fg.c, fg.m, fg.y, fg.k),
                cmyk_statement(bg.c, bg.m, bg.y, bg.k),
                bg.alpha,
            )
        } else {
            let (fg, bg) = (to_rgb(&fg), to_rgb(&bg));
            (
                rgb_statement(fg.r, fg.g, fg.b),
                rgb_statement(bg.r, bg.g, bg.b),
                bg.alpha,
            )
        };

        Ok(Self {
            cmyk,
            ink,
            paper,
            draw_background: bg_alpha != 0,
        })
    }

    /// Fixed Ultracode palette; unknown indexes are black
    fn palette(&self, index: u8) -> &'static str {
        if self.cmyk {
            match index {
                1 => "1.00 0.00 0.00 0.00 setcmykcolor",
                2 => "1.00 1.00 0.00 0.00 setcmykcolor",
                3 => "0.00 1.00 0.00 0.00 setcmykcolor",
                4 => "0.00 1.00 1.00 0.00 setcmykcolor",
                5 => "0.00 0.00 1.00 0.00 setcmykcolor",
                6 => "1.00 0.00 1.00 0.00 setcmykcolor",
                8 => "0.00 0.00 0.00 0.00 setcmykcolor",
                _ => "0.00 0.00 0.00 1.00 setcmykcolor",
            }
        } else {
            match index {
                1 => "0.00 1.00 1.00 setrgbcolor",
                2 => "0.00 0.00 1.00 setrgbcolor",
                3 => "1.00 0.00 1.00 setrgbcolor",
                4 => "1.00 0.00 0.00 setrgbcolor",
                5 => "1.00 1.00 0.00 setrgbcolor",
                6 => "0.00 1.00 0.00 setrgbcolor",
                8 => "1.00 1.00 1.00 setrgbcolor",
                _ => "0.00 0.00 0.00 setrgbcolor",
            }
        }
    }
}

fn rgb_statement(r: u8, g: u8, b: u8) -> String {
    format!(
        "{:.2} {:.2} {:.2} setrgbcolor",
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0
    )
}

fn cmyk_statement(c: u8, m: u8, y: u8, k: u8) -> String {
    format!(
        "{:.2} {:.2} {:.2} {:.2} setcmykcolor",
        f32::from(c) / 100.0,
        f32::from(m) / 100.0,
        f32::from(y) / 100.0,
        f32::from(k) / 100.0
    )
}

struct Document<'a> {
    out: &'a mut dyn Write,
    scene: &'a VectorScene,
    inks: &'a Inks,
}

impl Document<'_> {
    fn header(&mut self) -> Result<()> {
        let out = &mut *self.out;
        writeln!(out, "%!PS-Adobe-3.0 EPSF-3.0")?;
        writeln!(out, "%%Creator: Barkit {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "%%Title: Barkit Generated Symbol")?;
        writeln!(out, "%%Pages: 0")?;
        writeln!(
            out,
            "%%BoundingBox: 0 0 {} {}",
            self.scene.width.ceil() as i32,
            self.scene.height.ceil() as i32
        )?;
        writeln!(out, "%%EndComments")?;
        Ok(())
    }

    fn definitions(&mut self) -> Result<()> {
        let scene = self.scene;
        let out = &mut *self.out;
        if scene.circles.iter().any(|c| c.width == 0.0) {
            // x y radius TD
            writeln!(out, "/TD {{ newpath 0 360 arc fill }} bind def")?;
        }
        if scene.circles.iter().any(|c| c.width != 0.0) {
            // x y radius width TC
            writeln!(
                out,
                "/TC {{ newpath 4 1 roll 3 copy 0 360 arc closepath 4 -1 roll add 360 0 arcn closepath fill }} bind def"
            )?;
        }
        if !scene.hexagons.is_empty() {
            writeln!(
                out,
                "/TH {{ 0 setlinewidth moveto lineto lineto lineto lineto lineto closepath fill }} bind def"
            )?;
        }
        if self.inks.draw_background || !scene.rectangles.is_empty() {
            writeln!(out, "/TB {{ 2 copy }} bind def")?;
            writeln!(
                out,
                "/TR {{ newpath 4 1 roll exch moveto 1 index 0 rlineto 0 exch rlineto neg 0 rlineto closepath fill }} bind def"
            )?;
            writeln!(out, "/TE {{ pop pop }} bind def")?;
        }
        writeln!(out, "newpath")?;

        if self.inks.draw_background {
            writeln!(out, "{}", self.inks.paper)?;
            writeln!(
                out,
                "{:.2} 0.00 TB 0.00 {:.2} TR",
                scene.height, scene.width
            )?;
            writeln!(out, "TE")?;
        }
        Ok(())
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        writeln!(
            self.out,
            "{:.2} {:.2} TB {:.2} {:.2} TR",
            height,
            (self.scene.height - y) - height,
            x,
            width
        )?;
        writeln!(self.out, "TE")?;
        Ok(())
    }

    fn rectangles(&mut self, symbology: Symbology) -> Result<()> {
        let scene = self.scene;
        if symbology != Symbology::Ultra {
            writeln!(self.out, "{}", self.inks.ink)?;
            for r in &scene.rectangles {
                self.rect(r.x, r.y, r.width, r.height)?;
            }
            return Ok(());
        }

        // Foreground first, then each palette color in one group
        let groups = std::iter::once(RectColor::Foreground).chain((1..=8).map(RectColor::Palette));
        for group in groups {
            let mut color_set = false;
            for r in scene.rectangles.iter().filter(|r| r.color == group) {
                if !color_set {
                    let statement = match group {
                        RectColor::Foreground => self.inks.ink.as_str(),
                        RectColor::Palette(index) => self.inks.palette(index),
                    };
                    writeln!(self.out, "{}", statement)?;
                    color_set = true;
                }
                self.rect(r.x, r.y, r.width, r.height)?;
            }
        }
        Ok(())
    }

    fn hexagons(&mut self) -> Result<()> {
        let height = self.scene.height;
        let mut previous_diameter = None;
        let (mut radius, mut half_radius, mut half_sqrt3_radius) = (0.0f32, 0.0f32, 0.0f32);

        for hex in &self.scene.hexagons {
            if previous_diameter != Some(hex.diameter) {
                previous_diameter = Some(hex.diameter);
                radius = 0.5 * hex.diameter;
                half_radius = 0.25 * hex.diameter;
                half_sqrt3_radius = (HALF_SQRT3_RADIUS * f64::from(hex.diameter)) as f32;
            }
            let cy = height - hex.y;
            let points = if hex.rotation.is_upright() {
                [
                    (hex.x, cy + radius),
                    (hex.x + half_sqrt3_radius, cy + half_radius),
                    (hex.x + half_sqrt3_radius, cy - half_radius),
                    (hex.x, cy - radius),
                    (hex.x - half_sqrt3_radius, cy - half_radius),
                    (hex.x - half_sqrt3_radius, cy + half_radius),
                ]
            } else {
                [
                    (hex.x - radius, cy),
                    (hex.x - half_radius, cy + half_sqrt3_radius),
                    (hex.x + half_radius, cy + half_sqrt3_radius),
                    (hex.x + radius, cy),
                    (hex.x + half_radius, cy - half_sqrt3_radius),
                    (hex.x - half_radius, cy - half_sqrt3_radius),
                ]
            };
            for (x, y) in points {
                write!(self.out, "{:.2} {:.2} ", x, y)?;
            }
            writeln!(self.out, "TH")?;
        }
        Ok(())
    }

    fn circles(&mut self) -> Result<()> {
        let height = self.scene.height;
        let circles = &self.scene.circles;
        let mut previous_diameter = None;
        let mut radius = 0.0f32;

        for (i, circle) in circles.iter().enumerate() {
            let diameter = circle.diameter - circle.width;
            if previous_diameter != Some(diameter) {
                previous_diameter = Some(diameter);
                radius = 0.5 * diameter;
            }
            if circle.inverse {
                warn!("Drawing inverse circle at {}, {} in background color", circle.x, circle.y);
                writeln!(self.out, "{}", self.inks.paper)?;
            }
            if circle.width != 0.0 {
                writeln!(
                    self.out,
                    "{:.2} {:.2} {:.3} {:.3} TC",
                    circle.x,
                    height - circle.y,
                    radius,
                    circle.width
                )?;
            } else {
                writeln!(self.out, "{:.2} {:.2} {:.2} TD", circle.x, height - circle.y, radius)?;
            }
            if circle.inverse && i + 1 < circles.len() {
                writeln!(self.out, "{}", self.inks.ink)?;
            }
        }
        Ok(())
    }

    fn strings(&mut self, symbol: &Symbol) -> Result<()> {
        let scene = self.scene;
        if scene.strings.is_empty() {
            return Ok(());
        }

        let mut font = if symbol.options.bold_text && !symbol.symbology.is_extendable() {
            "Helvetica-Bold"
        } else {
            "Helvetica"
        };
        if scene.has_non_ascii_text() {
            writeln!(self.out, "/{} findfont", font)?;
            self.out.write_all(
                b"dup length dict begin\n\
                  {1 index /FID ne {def} {pop pop} ifelse} forall\n\
                  /Encoding ISOLatin1Encoding def\n\
                  currentdict\n\
                  end\n\
                  /Helvetica-ISOLatin1 exch definefont pop\n",
            )?;
            font = "Helvetica-ISOLatin1";
        }

        for run in &scene.strings {
            let text = ps_string(&run.text);
            let out = &mut *self.out;
            writeln!(out, "matrix currentmatrix")?;
            writeln!(out, "/{} findfont", font)?;
            writeln!(out, "{:.2} scalefont setfont", run.font_size)?;
            writeln!(
                out,
                " 0 0 moveto {:.2} {:.2} translate 0.00 rotate 0 0 moveto",
                run.x,
                scene.height - run.y
            )?;
            let measured = run.halign != HAlign::Start;
            if measured {
                show_literal(out, &text, "stringwidth")?;
            }
            if run.rotation != 0 {
                writeln!(out, "gsave")?;
                writeln!(out, "{} rotate", 360 - i32::from(run.rotation))?;
            }
            if measured {
                writeln!(out, "pop")?;
                let offset = if run.halign == HAlign::End { "neg" } else { "-2 div" };
                writeln!(out, "{} 0 rmoveto", offset)?;
            }
            show_literal(out, &text, "show")?;
            if run.rotation != 0 {
                writeln!(out, "grestore")?;
            }
            writeln!(out, "setmatrix")?;
        }
        Ok(())
    }
}

/// ` (text) operator`, with the literal written as raw Latin-1 bytes
fn show_literal(out: &mut dyn Write, text: &[u8], operator: &str) -> Result<()> {
    out.write_all(b" (")?;
    out.write_all(text)?;
    writeln!(out, ") {}", operator)?;
    Ok(())
}
