use super::color::*;
use super::error::ColorChannel;
use super::layout::{large_bar_height, split_upcean_text, UpceanKind};
use super::*;
use proptest::prelude::*;

fn spec(text: &str) -> ColorSpec {
    ColorSpec::parse(text, ColorChannel::Foreground).unwrap()
}

// Property: 6-digit hex colors survive to_rgb and back
proptest! {
    #[test]
    fn prop_rgb_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("{:02X}{:02X}{:02X}", r, g, b);
        let rgb = to_rgb(&spec(&hex));
        prop_assert!(!rgb.has_alpha);
        prop_assert_eq!(rgb.alpha, 255);
        let back = Rgba { r: rgb.r, g: rgb.g, b: rgb.b, alpha: None }.to_hex();
        prop_assert_eq!(back, hex);
    }
}

// Property: the alpha byte of an 8-digit color survives exactly
proptest! {
    #[test]
    fn prop_rgba_alpha_round_trip(hex in "[0-9a-fA-F]{6}", a in any::<u8>()) {
        let text = format!("{}{:02x}", hex, a);
        let rgb = to_rgb(&spec(&text));
        prop_assert!(rgb.has_alpha);
        prop_assert_eq!(rgb.alpha, a);
        let back = Rgba { r: rgb.r, g: rgb.g, b: rgb.b, alpha: Some(rgb.alpha) }.to_hex();
        prop_assert_eq!(back, text.to_ascii_uppercase());
    }
}

// Property: full black key is black whatever the other channels say
proptest! {
    #[test]
    fn prop_full_black_key(c in 0u8..=100, m in 0u8..=100, y in 0u8..=100) {
        let rgb = to_rgb(&spec(&format!("{},{},{},100", c, m, y)));
        prop_assert_eq!((rgb.r, rgb.g, rgb.b, rgb.alpha), (0, 0, 0, 255));
    }
}

// Property: RGB to CMYK stays within 0-100 and keeps its provenance
proptest! {
    #[test]
    fn prop_cmyk_from_rgb_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let cmyk = to_cmyk(&spec(&format!("{:02x}{:02x}{:02x}", r, g, b)));
        prop_assert!(cmyk.c <= 100 && cmyk.m <= 100 && cmyk.y <= 100 && cmyk.k <= 100);
        prop_assert_eq!(cmyk.source, CmykSource::FromRgb);
        // The brightest channel never needs ink of its own
        prop_assert!(cmyk.c == 0 || cmyk.m == 0 || cmyk.y == 0);
    }
}

// Property: anything without a comma that is not 6 or 8 bytes is rejected
proptest! {
    #[test]
    fn prop_bad_rgb_length_rejected(s in "[0-9a-f]{0,12}") {
        prop_assume!(s.len() != 6 && s.len() != 8);
        let err = validate_color(&s, ColorChannel::Background).unwrap_err();
        prop_assert_eq!(err.tag(), 880);
    }
}

// Property: auto rows always add back up to the requested height
proptest! {
    #[test]
    fn prop_large_bar_height_consistent(fixed in 1u32..20, autos in 1usize..5, extra in 1u32..40) {
        let mut symbol = Symbol::new(Symbology::Code128);
        let mut rows = vec![fixed as f32];
        rows.extend(std::iter::repeat(0.0).take(autos));
        symbol.rows = rows.len();
        symbol.row_heights = rows;
        symbol.height = (fixed + extra * autos as u32) as f32;

        let heights = large_bar_height(&mut symbol, None).unwrap();
        prop_assert_eq!(heights.large_bar_height, extra as f32);
        prop_assert_eq!(symbol.height, (fixed + extra * autos as u32) as f32);
    }
}

// Property: splitting never panics and never invents characters
proptest! {
    #[test]
    fn prop_split_upcean_text_is_prefix(text in "[0-9]{0,15}") {
        for kind in [UpceanKind::UpcE, UpceanKind::Ean8, UpceanKind::UpcA, UpceanKind::Ean13] {
            let joined: String = split_upcean_text(kind, &text).parts.concat();
            prop_assert!(text.starts_with(&joined));
        }
    }
}
