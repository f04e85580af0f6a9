//! Color specifications: validation and RGB/CMYK conversion
//!
//! A color option is either 6 or 8 hex digits (`RRGGBB[AA]`) or four
//! comma-separated percentages (`C,M,Y,K`). Anything containing a comma is
//! treated as CMYK. Conversions between the two models are lossy, so the
//! CMYK result says where its values came from.

use log::debug;

use crate::error::{ColorChannel, ColorError, CmykField};
use crate::Symbol;

/// Whether every byte is a hexadecimal digit (either case)
pub fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a CMYK field: 1 to 3 ASCII digits with a value of 0-100
///
/// An empty field is rejected rather than read as 0.
pub fn parse_percentage(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = field
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    u8::try_from(value).ok().filter(|v| *v <= 100)
}

/// Check one color option, naming `channel` in the error
pub fn validate_color(text: &str, channel: ColorChannel) -> Result<(), ColorError> {
    ColorSpec::parse(text, channel).map(|_| ())
}

/// Check the foreground then the background color of `symbol`
pub fn check_color_options(symbol: &Symbol) -> Result<(), ColorError> {
    validate_color(&symbol.fg_color, ColorChannel::Foreground)?;
    validate_color(&symbol.bg_color, ColorChannel::Background)
}

/// Hex color, with the alpha byte only when 8 digits were given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<u8>,
}

impl Rgba {
    /// Upper-case hex form, 6 or 8 digits depending on alpha
    pub fn to_hex(&self) -> String {
        match self.alpha {
            Some(a) => format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a),
            None => format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

/// Native CMYK percentages, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// A validated color option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Rgb(Rgba),
    Cmyk(Cmyk),
}

impl ColorSpec {
    /// Validate `text` and resolve it into its color model
    pub fn parse(text: &str, channel: ColorChannel) -> Result<Self, ColorError> {
        if text.contains(',') {
            parse_cmyk(text, channel).map(ColorSpec::Cmyk)
        } else {
            parse_rgb(text, channel).map(ColorSpec::Rgb)
        }
    }

    /// The hex form, if this is one
    pub fn to_rgba(&self) -> Option<Rgba> {
        match self {
            ColorSpec::Rgb(rgba) => Some(*rgba),
            ColorSpec::Cmyk(_) => None,
        }
    }
}

fn parse_rgb(text: &str, channel: ColorChannel) -> Result<Rgba, ColorError> {
    let bytes = text.as_bytes();
    if bytes.len() != 6 && bytes.len() != 8 {
        return Err(ColorError::RgbLength(channel));
    }
    if !is_hex(text) {
        return Err(ColorError::RgbNotHex {
            channel,
            value: text.to_string(),
        });
    }

    let pair = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
    Ok(Rgba {
        r: pair(0),
        g: pair(2),
        b: pair(4),
        alpha: (bytes.len() == 8).then(|| pair(6)),
    })
}

fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

fn parse_cmyk(text: &str, channel: ColorChannel) -> Result<Cmyk, ColorError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 4 {
        return Err(ColorError::CmykFieldCount(channel));
    }
    if fields.iter().any(|f| f.len() > 3) {
        return Err(ColorError::CmykDigitCount(channel));
    }

    let field = |i: usize, which: CmykField| {
        parse_percentage(fields[i]).ok_or(ColorError::CmykRange {
            channel,
            field: which,
        })
    };
    Ok(Cmyk {
        c: field(0, CmykField::C)?,
        m: field(1, CmykField::M)?,
        y: field(2, CmykField::Y)?,
        k: field(3, CmykField::K)?,
    })
}

/// A color resolved to RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbResult {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 255 unless an alpha byte was given
    pub alpha: u8,
    /// Whether the specification carried an alpha byte
    pub has_alpha: bool,
}

/// Where CMYK values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmykSource {
    Native,
    FromRgb,
    FromRgba,
}

impl CmykSource {
    pub fn is_converted(self) -> bool {
        !matches!(self, Self::Native)
    }
}

/// A color resolved to CMYK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmykResult {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
    /// RGB alpha, 255 when there was none
    pub alpha: u8,
    pub source: CmykSource,
}

/// Resolve a color to RGB; CMYK uses a multiplicative black key
pub fn to_rgb(spec: &ColorSpec) -> RgbResult {
    match *spec {
        ColorSpec::Rgb(rgba) => RgbResult {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            alpha: rgba.alpha.unwrap_or(0xFF),
            has_alpha: rgba.alpha.is_some(),
        },
        ColorSpec::Cmyk(cmyk) => {
            let black = 100 - u32::from(cmyk.k);
            let channel = |v: u8| {
                let val = 100 - u32::from(v);
                ((0xFF * val * black) as f32 / 10000.0).round() as u8
            };
            RgbResult {
                r: channel(cmyk.c),
                g: channel(cmyk.m),
                b: channel(cmyk.y),
                alpha: 0xFF,
                has_alpha: false,
            }
        }
    }
}

/// Resolve a color to CMYK; RGB input is converted subtractively
pub fn to_cmyk(spec: &ColorSpec) -> CmykResult {
    let rgba = match *spec {
        ColorSpec::Cmyk(cmyk) => {
            return CmykResult {
                c: cmyk.c,
                m: cmyk.m,
                y: cmyk.y,
                k: cmyk.k,
                alpha: 0xFF,
                source: CmykSource::Native,
            }
        }
        ColorSpec::Rgb(rgba) => rgba,
    };

    let k = rgba.r.max(rgba.g).max(rgba.b);
    let (c, m, y, black) = if k == 0 {
        (0, 0, 0, 100)
    } else {
        let kf = f32::from(k);
        let pct = |v: u8| ((f32::from(k - v) * 100.0) / kf).round() as u8;
        (
            pct(rgba.r),
            pct(rgba.g),
            pct(rgba.b),
            ((f32::from(0xFF - k) * 100.0) / 255.0).round() as u8,
        )
    };

    let source = if rgba.alpha.is_some() {
        CmykSource::FromRgba
    } else {
        CmykSource::FromRgb
    };
    debug!(
        "Converted {} to CMYK {},{},{},{} ({:?})",
        rgba.to_hex(),
        c,
        m,
        y,
        black,
        source
    );

    CmykResult {
        c,
        m,
        y,
        k: black,
        alpha: rgba.alpha.unwrap_or(0xFF),
        source,
    }
}
