//! End-to-end layout checks: quiet zones, whitespace and EAN/UPC geometry
//! worked out together for one symbol, the way a raster or vector back end
//! would ask for them.

use barkit_core::{
    error::ERROR_INVALID_DATA,
    layout::{self, UpceanKind},
    quiet_zone::{self, QuietZones},
    OutputOptions, Symbol, Symbology,
};

fn upcean(symbology: Symbology, text: &str) -> Symbol {
    let mut symbol = Symbol::new(symbology);
    symbol.text = text.to_string();
    symbol
}

#[test]
fn test_ean13_with_five_digit_addon() {
    let symbol = upcean(Symbology::Eanx, "9780201379624+12345");

    let lookup = quiet_zone::quiet_zones(&symbol, false);
    assert!(lookup.recognized);
    assert_eq!(lookup.margins, QuietZones::horizontal(11.0, 5.0));

    let layout = layout::upcean_layout(&symbol);
    assert_eq!(layout.kind, Some(UpceanKind::Ean13));
    assert_eq!(layout.main_width, 95);
    assert_eq!(layout.addon, "12345");
    assert_eq!(layout.addon_gap, Some(7));

    let parts = layout::split_upcean_text(UpceanKind::Ean13, &symbol.text);
    assert_eq!(parts.parts, ["9", "780201", "379624", ""]);
}

#[test]
fn test_upca_addon_gap_and_hidden_text() {
    let mut symbol = upcean(Symbology::Upca, "725272730706+12");
    symbol.addon_gap = Some(10);
    let layout = layout::upcean_layout(&symbol);
    assert_eq!(layout.kind, Some(UpceanKind::UpcA));
    assert_eq!(layout.addon_gap, Some(10));
    assert_eq!(layout.addon, "12");

    // Out of range gaps fall back to the default
    symbol.addon_gap = Some(13);
    symbol.show_hrt = false;
    let layout = layout::upcean_layout(&symbol);
    assert_eq!(layout.addon_gap, Some(9));
    assert_eq!(layout.addon, "  ");

    let lookup = quiet_zone::quiet_zones(&symbol, false);
    assert_eq!(lookup.margins, QuietZones::horizontal(9.0, 5.0));
}

#[test]
fn test_suppressed_zones_keep_room_for_text() {
    let mut symbol = upcean(Symbology::Eanx, "9780201379624");
    symbol.options = OutputOptions {
        no_quiet_zones: true,
        ..OutputOptions::default()
    };
    symbol.whitespace_width = 1;

    let shown = layout::whitespace_offsets(&symbol, false, Some(2.0));
    assert_eq!((shown.left, shown.right), (12.0, 1.0));
    let px = shown.pixels.unwrap_or_default();
    assert_eq!((px.left, px.right), (24, 2));

    let hidden = layout::whitespace_offsets(&symbol, true, None);
    assert_eq!((hidden.left, hidden.right), (1.0, 1.0));
    assert!(hidden.pixels.is_none());
}

#[test]
fn test_stacked_auto_rows_snap_to_pixels() {
    let mut symbol = Symbol::new(Symbology::Code16k);
    symbol.rows = 3;
    symbol.row_heights = vec![0.0, 2.0, 0.0];
    symbol.height = 11.3;

    let heights = layout::large_bar_height(&mut symbol, Some(2.0)).unwrap();
    // (11.3 - 2) / 2 = 4.65, snapped to whole pixels at scale 2
    assert!((heights.large_bar_height - 4.5).abs() < 1e-5);
    assert!((symbol.height - 11.0).abs() < 1e-5);
    assert_eq!(heights.row_heights_px, Some(vec![9, 4, 9]));
    assert_eq!(heights.height_px, Some(22));
}

#[test]
fn test_row_height_mismatch_is_invalid_data() {
    let mut symbol = Symbol::new(Symbology::Code16k);
    symbol.rows = 2;
    symbol.row_heights = vec![0.0];
    let err = layout::large_bar_height(&mut symbol, None).unwrap_err();
    assert_eq!(err.code(), ERROR_INVALID_DATA);
    assert_eq!(err.tag(), Some(650));
}
