//! The vector scene an encoder hands to vector back ends
//!
//! Coordinates use a top-left origin in output units (module widths times
//! scale). Back ends that need a bottom-left origin flip them.

use serde::{Deserialize, Serialize};

/// Fill of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectColor {
    /// The symbol's foreground color
    #[default]
    Foreground,
    /// Index into the fixed 8-entry palette (1 cyan, 2 blue, 3 magenta,
    /// 4 red, 5 yellow, 6 green, 7 black, 8 white)
    Palette(u8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: RectColor,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: RectColor::Foreground,
        }
    }

    pub fn with_color(mut self, color: RectColor) -> Self {
        self.color = color;
        self
    }
}

/// Hexagon orientation, clockwise degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum HexRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl HexRotation {
    /// Pointy-top layout (0 and 180 degrees); the others are flat-top
    pub fn is_upright(self) -> bool {
        matches!(self, Self::Deg0 | Self::Deg180)
    }
}

impl TryFrom<u16> for HexRotation {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(format!("hexagon rotation must be 0, 90, 180 or 270, got {}", value)),
        }
    }
}

impl From<HexRotation> for u16 {
    fn from(value: HexRotation) -> Self {
        match value {
            HexRotation::Deg0 => 0,
            HexRotation::Deg90 => 90,
            HexRotation::Deg180 => 180,
            HexRotation::Deg270 => 270,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    /// Center
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    #[serde(default)]
    pub rotation: HexRotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    /// Ring width; zero draws a filled disc
    #[serde(default)]
    pub width: f32,
    /// Legacy flag: draw in the background color
    #[serde(default)]
    pub inverse: bool,
}

/// Horizontal anchoring of a text run relative to its x position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Baseline anchor
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// Clockwise degrees: 0, 90, 180 or 270
    #[serde(default)]
    pub rotation: u16,
    #[serde(default)]
    pub halign: HAlign,
    /// UTF-8 text; only Latin-1 characters survive in output
    pub text: String,
}

/// Everything to draw for one symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorScene {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub rectangles: Vec<Rect>,
    #[serde(default)]
    pub hexagons: Vec<Hexagon>,
    #[serde(default)]
    pub circles: Vec<Circle>,
    #[serde(default)]
    pub strings: Vec<TextRun>,
}

impl VectorScene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
            && self.hexagons.is_empty()
            && self.circles.is_empty()
            && self.strings.is_empty()
    }

    /// Any run needing more than 7-bit output
    pub fn has_non_ascii_text(&self) -> bool {
        self.strings.iter().any(|s| !s.text.is_ascii())
    }
}
