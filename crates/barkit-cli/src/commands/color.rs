//! Color command implementation
//!
//! Validates a color option the way the renderer does and shows what it
//! resolves to in both color models.

use crate::cli::ColorArgs;
use anyhow::Result;
use barkit::{
    color::{self, CmykSource, ColorSpec},
    error::{BarkitError, ColorChannel, ColorError},
};

pub fn run(args: &ColorArgs) -> Result<()> {
    let channel = if args.background {
        ColorChannel::Background
    } else {
        ColorChannel::Foreground
    };
    let report = report(&args.color, channel).map_err(BarkitError::from)?;
    print!("{}", report);
    Ok(())
}

fn report(text: &str, channel: ColorChannel) -> std::result::Result<String, ColorError> {
    let spec = ColorSpec::parse(text, channel)?;
    let rgb = color::to_rgb(&spec);
    let cmyk = color::to_cmyk(&spec);

    let model = match spec {
        ColorSpec::Rgb(_) => "RGB",
        ColorSpec::Cmyk(_) => "CMYK",
    };
    let source = match cmyk.source {
        CmykSource::Native => "as given",
        CmykSource::FromRgb => "converted from RGB",
        CmykSource::FromRgba => "converted from RGBA",
    };

    let mut out = format!("{} color '{}'\n", model, text);
    out.push_str(&format!(
        "  RGB:  {} {} {} (#{:02X}{:02X}{:02X})\n",
        rgb.r, rgb.g, rgb.b, rgb.r, rgb.g, rgb.b
    ));
    if rgb.has_alpha {
        out.push_str(&format!("  Alpha: {}\n", rgb.alpha));
    }
    out.push_str(&format!(
        "  CMYK: {},{},{},{} ({})\n",
        cmyk.c, cmyk.m, cmyk.y, cmyk.k, source
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_report() {
        let out = report("FF0000", ColorChannel::Foreground).unwrap();
        assert_eq!(
            out,
            "RGB color 'FF0000'\n  RGB:  255 0 0 (#FF0000)\n  CMYK: 0,100,100,0 (converted from RGB)\n"
        );
    }

    #[test]
    fn test_rgba_report_shows_alpha() {
        let out = report("FFFFFF80", ColorChannel::Background).unwrap();
        assert!(out.contains("  Alpha: 128\n"));
        assert!(out.contains("(converted from RGBA)"));
    }

    #[test]
    fn test_cmyk_report() {
        let out = report("0,0,0,100", ColorChannel::Foreground).unwrap();
        assert!(out.starts_with("CMYK color '0,0,0,100'\n"));
        assert!(out.contains("  RGB:  0 0 0 (#000000)\n"));
        assert!(out.contains("  CMYK: 0,0,0,100 (as given)\n"));
    }

    #[test]
    fn test_invalid_color_names_channel() {
        let err = report("12345", ColorChannel::Background).unwrap_err();
        assert_eq!(err.tag(), 880);
        assert_eq!(err.channel(), ColorChannel::Background);
    }
}
