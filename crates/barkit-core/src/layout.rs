//! Geometry shared by raster and vector back ends
//!
//! Offsets around the symbol, resolution of auto-height rows and the
//! EAN/UPC specifics (add-on, composite offset, text groups).

use log::debug;

use crate::error::{Result, SceneError};
use crate::quiet_zone::quiet_zones;
use crate::Symbol;

/// Offsets in whole pixels, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelOffsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Space between the canvas edge and the symbol, in module widths
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WhitespaceOffsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Present when a non-zero pixel scale was given
    pub pixels: Option<PixelOffsets>,
}

/// Quiet zones plus user whitespace, plus border where one is drawn
///
/// A box widens all four sides; bind and bind-top widen top and bottom only.
pub fn whitespace_offsets(
    symbol: &Symbol,
    hide_text: bool,
    scaler: Option<f32>,
) -> WhitespaceOffsets {
    let qz = quiet_zones(symbol, hide_text).margins;
    let opts = &symbol.options;
    let border = symbol.border_width as f32;

    let mut left = symbol.whitespace_width as f32 + qz.left;
    let mut right = symbol.whitespace_width as f32 + qz.right;
    if opts.box_border {
        left += border;
        right += border;
    }

    let mut top = symbol.whitespace_height as f32 + qz.top;
    let mut bottom = symbol.whitespace_height as f32 + qz.bottom;
    if opts.box_border || opts.bind || opts.bind_top {
        top += border;
        bottom += border;
    }

    let pixels = scaler.filter(|s| *s != 0.0).map(|s| PixelOffsets {
        left: (left * s) as i32,
        top: (top * s) as i32,
        right: (right * s) as i32,
        bottom: (bottom * s) as i32,
    });

    WhitespaceOffsets {
        left,
        top,
        right,
        bottom,
        pixels,
    }
}

/// Smallest auto row height an encoder may leave behind
pub const MIN_AUTO_ROW_HEIGHT: f32 = 0.5;

/// Resolved row heights
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarHeights {
    /// Height of each auto row; zero when every row is fixed
    pub large_bar_height: f32,
    /// Every row, auto rows resolved, in module widths
    pub row_heights: Vec<f32>,
    /// Every row in pixels, when a scale was given
    pub row_heights_px: Option<Vec<i32>>,
    /// Sum of `row_heights_px`
    pub height_px: Option<i32>,
}

fn is_integral(value: f32) -> bool {
    value % 1.0 == 0.0
}

/// Round away float noise past 7 significant digits
fn strip(value: f32) -> f32 {
    format!("{:.6e}", value).parse().unwrap_or(value)
}

/// Resolve auto (zero height) rows from the symbol's requested height
///
/// Auto rows share what is left after fixed rows equally. With a pixel
/// scale, the auto height is snapped so each auto row is a whole number of
/// pixels, or (with no auto rows) non-integral fixed rows are snapped
/// individually. `symbol.height` is updated to match.
pub fn large_bar_height(symbol: &mut Symbol, scaler: Option<f32>) -> Result<BarHeights> {
    if symbol.row_heights.len() != symbol.rows {
        return Err(SceneError::InvalidRowHeights(format!(
            "{} heights for {} rows",
            symbol.row_heights.len(),
            symbol.rows
        ))
        .into());
    }
    let si = scaler.filter(|s| *s != 0.0);

    let mut fixed_height = 0.0f32;
    let mut zero_count = 0usize;
    let mut round_rows = false;
    for &row in &symbol.row_heights {
        if row != 0.0 {
            fixed_height += row;
            if let Some(si) = si {
                round_rows |= !is_integral(row * si);
            }
        } else {
            zero_count += 1;
        }
    }

    let mut large_bar_height = 0.0f32;
    if zero_count > 0 {
        large_bar_height = strip((symbol.height - fixed_height) / zero_count as f32);
        if large_bar_height < MIN_AUTO_ROW_HEIGHT {
            return Err(SceneError::InvalidRowHeights(format!(
                "auto row height {} below {}",
                large_bar_height, MIN_AUTO_ROW_HEIGHT
            ))
            .into());
        }
        if let Some(si) = si {
            if !is_integral(large_bar_height * si) {
                large_bar_height = strip((large_bar_height * si).round() / si);
            }
        }
        symbol.height = strip(large_bar_height * zero_count as f32 + fixed_height);
    } else if let (Some(si), true) = (si, round_rows) {
        for row in symbol.row_heights.iter_mut() {
            if !is_integral(*row * si) {
                *row = (*row * si).round() / si;
            }
        }
        symbol.height = strip(symbol.row_heights.iter().sum());
    }

    let row_heights: Vec<f32> = symbol
        .row_heights
        .iter()
        .map(|&row| if row != 0.0 { row } else { large_bar_height })
        .collect();

    let (row_heights_px, height_px) = match si {
        Some(si) => {
            let px: Vec<i32> = row_heights.iter().map(|row| (row * si).round() as i32).collect();
            let total = px.iter().sum();
            (Some(px), Some(total))
        }
        None => (None, None),
    };

    debug!(
        "Resolved {} rows ({} auto) to height {}, large bar height {}",
        symbol.rows, zero_count, symbol.height, large_bar_height
    );

    Ok(BarHeights {
        large_bar_height,
        row_heights,
        row_heights_px,
        height_px,
    })
}

/// EAN/UPC variant, by number of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpceanKind {
    Ean2,
    Ean5,
    UpcE,
    Ean8,
    UpcA,
    Ean13,
}

impl UpceanKind {
    pub fn digits(self) -> usize {
        match self {
            Self::Ean2 => 2,
            Self::Ean5 => 5,
            Self::UpcE => 6,
            Self::Ean8 => 8,
            Self::UpcA => 12,
            Self::Ean13 => 13,
        }
    }

    /// Width of the main symbol in modules; add-ons have none of their own
    pub fn main_modules(self) -> Option<usize> {
        match self {
            Self::Ean13 | Self::UpcA => Some(95),
            Self::Ean8 => Some(68),
            Self::UpcE => Some(51),
            Self::Ean2 | Self::Ean5 => None,
        }
    }
}

/// Where the parts of an EAN/UPC symbol go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpceanLayout {
    /// `None` outside the EAN/UPC family
    pub kind: Option<UpceanKind>,
    /// Width of the main symbol excluding any add-on
    pub main_width: usize,
    /// Left offset of the linear part of a composite
    pub comp_xoffset: usize,
    /// Add-on digits, or spaces when text is hidden
    pub addon: String,
    /// Gap before the add-on; `None` without one
    pub addon_gap: Option<u32>,
}

const MAX_ADDON_LEN: usize = 5;

/// Lay out the main symbol, composite offset and add-on of `symbol`
pub fn upcean_layout(symbol: &Symbol) -> UpceanLayout {
    let text = symbol.text.as_bytes();

    let mut addon = String::new();
    let mut addon_len = 0;
    let mut latch = false;
    for &byte in text.iter().skip(6) {
        if addon_len >= MAX_ADDON_LEN {
            break;
        }
        if latch {
            addon.push(if symbol.show_hrt { char::from(byte) } else { ' ' });
            addon_len += 1;
        } else if byte == b'+' {
            latch = true;
        }
    }

    let addon_gap = latch.then(|| {
        let range = if symbol.symbology.is_upca() { 9..=12 } else { 7..=12 };
        let default = *range.start();
        symbol.addon_gap.filter(|gap| range.contains(gap)).unwrap_or(default)
    });

    let comp_xoffset = if symbol.symbology.is_composite() {
        composite_offset(symbol)
    } else {
        0
    };

    let kind = if symbol.symbology.is_ean() {
        Some(match text.len() {
            13 | 16 | 19 => UpceanKind::Ean13,
            2 => UpceanKind::Ean2,
            5 => UpceanKind::Ean5,
            _ => UpceanKind::Ean8,
        })
    } else if symbol.symbology.is_upca() {
        Some(UpceanKind::UpcA)
    } else if symbol.symbology.is_upce() {
        Some(UpceanKind::UpcE)
    } else {
        None
    };

    let main_width = match kind.and_then(UpceanKind::main_modules) {
        Some(modules) => modules + comp_xoffset,
        None => symbol.width,
    };

    UpceanLayout {
        kind,
        main_width,
        comp_xoffset,
        addon,
        addon_gap,
    }
}

/// Unset modules at the start of the bottom (linear) row
fn composite_offset(symbol: &Symbol) -> usize {
    let Some(row) = symbol.rows.checked_sub(1) else {
        return 0;
    };
    (0..symbol.width)
        .position(|col| symbol.module_is_set(row, col))
        .unwrap_or(symbol.width)
}

/// Human-readable digit groups of an EAN/UPC symbol; unused groups are empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpceanTextParts<'a> {
    pub parts: [&'a str; 4],
}

/// Split `text` into the groups printed under an EAN/UPC symbol
///
/// UPC-E is 1+6+1, EAN-8 4+4, UPC-A 1+5+5+1 and EAN-13 1+6+6. Groups the
/// text is too short for come back empty.
pub fn split_upcean_text(kind: UpceanKind, text: &str) -> UpceanTextParts<'_> {
    let part = |start: usize, end: usize| text.get(start..end).unwrap_or("");
    let parts = match kind {
        UpceanKind::UpcE => [part(0, 1), part(1, 7), part(7, 8), ""],
        UpceanKind::Ean8 => [part(0, 4), part(4, 8), "", ""],
        UpceanKind::UpcA => [part(0, 1), part(1, 6), part(6, 11), part(11, 12)],
        UpceanKind::Ean13 => [part(0, 1), part(1, 7), part(7, 13), ""],
        UpceanKind::Ean2 | UpceanKind::Ean5 => ["", "", "", ""],
    };
    UpceanTextParts { parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputOptions, Symbology};

    fn linear(row_heights: Vec<f32>, height: f32) -> Symbol {
        let mut symbol = Symbol::new(Symbology::Code128);
        symbol.rows = row_heights.len();
        symbol.row_heights = row_heights;
        symbol.height = height;
        symbol
    }

    #[test]
    fn test_whitespace_offsets_box_and_bind() {
        let mut symbol = Symbol::new(Symbology::Code128);
        symbol.whitespace_width = 2;
        symbol.whitespace_height = 1;
        symbol.border_width = 3;
        symbol.options.bind = true;

        let offsets = whitespace_offsets(&symbol, false, None);
        assert_eq!((offsets.left, offsets.right), (2.0, 2.0));
        assert_eq!((offsets.top, offsets.bottom), (4.0, 4.0));
        assert!(offsets.pixels.is_none());

        symbol.options = OutputOptions {
            box_border: true,
            quiet_zones: true,
            ..OutputOptions::default()
        };
        let offsets = whitespace_offsets(&symbol, false, Some(0.5));
        assert_eq!((offsets.left, offsets.right), (15.0, 15.0));
        assert_eq!((offsets.top, offsets.bottom), (4.0, 4.0));
        assert_eq!(
            offsets.pixels,
            Some(PixelOffsets {
                left: 7,
                top: 2,
                right: 7,
                bottom: 2
            })
        );
    }

    #[test]
    fn test_whitespace_offsets_include_ean_quiet_zones() {
        let mut symbol = Symbol::new(Symbology::Eanx);
        symbol.text = "9780201379624".into();
        let offsets = whitespace_offsets(&symbol, false, Some(2.0));
        assert_eq!((offsets.left, offsets.right), (11.0, 7.0));
        assert_eq!(offsets.pixels.map(|p| p.left), Some(22));
    }

    #[test]
    fn test_large_bar_height_shares_remainder() {
        let mut symbol = linear(vec![10.0, 0.0, 0.0], 30.0);
        let heights = large_bar_height(&mut symbol, None).unwrap();
        assert_eq!(heights.large_bar_height, 10.0);
        assert_eq!(symbol.height, 30.0);
        assert_eq!(heights.row_heights, vec![10.0, 10.0, 10.0]);
        assert!(heights.row_heights_px.is_none());
    }

    #[test]
    fn test_large_bar_height_snaps_to_pixels() {
        let mut symbol = linear(vec![0.0], 50.3);
        let heights = large_bar_height(&mut symbol, Some(2.0)).unwrap();
        assert_eq!(heights.large_bar_height, 50.5);
        assert_eq!(symbol.height, 50.5);
        assert_eq!(heights.row_heights_px, Some(vec![101]));
        assert_eq!(heights.height_px, Some(101));
    }

    #[test]
    fn test_fixed_rows_rounded_when_not_pixel_exact() {
        let mut symbol = linear(vec![1.25, 2.0], 3.25);
        let heights = large_bar_height(&mut symbol, Some(2.0)).unwrap();
        assert_eq!(heights.large_bar_height, 0.0);
        assert_eq!(symbol.row_heights, vec![1.5, 2.0]);
        assert_eq!(symbol.height, 3.5);
        assert_eq!(heights.row_heights_px, Some(vec![3, 4]));
        assert_eq!(heights.height_px, Some(7));
    }

    #[test]
    fn test_large_bar_height_rejects_bad_input() {
        let mut symbol = linear(vec![10.0, 0.0], 10.2);
        let err = large_bar_height(&mut symbol, None).unwrap_err();
        assert_eq!(err.tag(), Some(650));

        let mut symbol = linear(vec![10.0], 10.0);
        symbol.rows = 2;
        assert!(large_bar_height(&mut symbol, None).is_err());
    }

    #[test]
    fn test_large_bar_height_strips_float_noise() {
        // 0.9 - 0.4 comes out just under 0.5 in f32
        let mut symbol = linear(vec![0.4, 0.0], 0.9);
        let heights = large_bar_height(&mut symbol, None).unwrap();
        assert_eq!(heights.large_bar_height, 0.5);
        assert_eq!(symbol.height, 0.9);

        assert_eq!(strip(30.000002), 30.0);
        assert_eq!(strip(0.49999997), 0.5);
        assert_eq!(strip(4.65), 4.65);
    }

    #[test]
    fn test_upcean_layout_ean13_with_addon() {
        let mut symbol = Symbol::new(Symbology::Eanx);
        symbol.text = "9780201379624+12345".into();
        symbol.width = 149;

        let layout = upcean_layout(&symbol);
        assert_eq!(layout.kind, Some(UpceanKind::Ean13));
        assert_eq!(layout.main_width, 95);
        assert_eq!(layout.addon, "12345");
        assert_eq!(layout.addon_gap, Some(7));

        symbol.show_hrt = false;
        symbol.addon_gap = Some(10);
        let layout = upcean_layout(&symbol);
        assert_eq!(layout.addon, "     ");
        assert_eq!(layout.addon_gap, Some(10));
    }

    #[test]
    fn test_upcean_addon_gap_ranges() {
        let mut symbol = Symbol::new(Symbology::Upca);
        symbol.text = "012345678905+12".into();
        symbol.addon_gap = Some(8);
        let layout = upcean_layout(&symbol);
        assert_eq!(layout.kind, Some(UpceanKind::UpcA));
        assert_eq!(layout.addon_gap, Some(9));

        symbol.text = "012345678905".into();
        let layout = upcean_layout(&symbol);
        assert_eq!(layout.addon_gap, None);
        assert!(layout.addon.is_empty());
    }

    #[test]
    fn test_upcean_composite_offset() {
        let mut symbol = Symbol::new(Symbology::UpceCc);
        symbol.text = "01234565".into();
        symbol.rows = 2;
        symbol.width = 10;
        let mut bottom = vec![false; 10];
        bottom[3] = true;
        symbol.modules = vec![vec![true; 10], bottom];

        let layout = upcean_layout(&symbol);
        assert_eq!(layout.kind, Some(UpceanKind::UpcE));
        assert_eq!(layout.comp_xoffset, 3);
        assert_eq!(layout.main_width, 54);
    }

    #[test]
    fn test_upcean_layout_non_upcean() {
        let mut symbol = Symbol::new(Symbology::Code128);
        symbol.width = 57;
        let layout = upcean_layout(&symbol);
        assert_eq!(layout.kind, None);
        assert_eq!(layout.main_width, 57);

        let mut addon_only = Symbol::new(Symbology::Eanx);
        addon_only.text = "12".into();
        addon_only.width = 20;
        let layout = upcean_layout(&addon_only);
        assert_eq!(layout.kind, Some(UpceanKind::Ean2));
        assert_eq!(layout.main_width, 20);
    }

    #[test]
    fn test_split_upcean_text() {
        let ean13 = split_upcean_text(UpceanKind::Ean13, "9780201379624");
        assert_eq!(ean13.parts, ["9", "780201", "379624", ""]);

        let upca = split_upcean_text(UpceanKind::UpcA, "012345678905");
        assert_eq!(upca.parts, ["0", "12345", "67890", "5"]);

        let upce = split_upcean_text(UpceanKind::UpcE, "01234565");
        assert_eq!(upce.parts, ["0", "123456", "5", ""]);

        let ean8 = split_upcean_text(UpceanKind::Ean8, "12345670");
        assert_eq!(ean8.parts, ["1234", "5670", "", ""]);

        let short = split_upcean_text(UpceanKind::Ean13, "978");
        assert_eq!(short.parts, ["9", "", "", ""]);
    }
}
