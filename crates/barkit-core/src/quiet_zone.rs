//! Standard quiet zones per symbology, in module widths
//!
//! Two tiers exist. A handful of linear symbologies (Code 16K, Code 49,
//! Codablock-F, ITF-14 and the EAN/UPC family) always carry their quiet
//! zones unless `no_quiet_zones` is set. Everything else only gets the
//! standard's margins when `quiet_zones` is requested.

use crate::{Symbol, Symbology};

/// Margins around a symbol, in module widths
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuietZones {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl QuietZones {
    pub const NONE: QuietZones = QuietZones::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Left and right only
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self::new(left, right, 0.0, 0.0)
    }

    /// Same margin on all four sides
    pub const fn all(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

/// Result of a quiet zone lookup
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuietZoneLookup {
    pub margins: QuietZones,
    /// False when the symbology has no entry in the table, or the opt-in
    /// tier was not requested; margins are then zero
    pub recognized: bool,
}

enum Policy {
    /// Already adjusted for `no_quiet_zones`
    Always(QuietZones),
    OptIn(QuietZones),
    Unknown,
}

// Physical margins divided by the standard's largest X-dimension
const FIM_RIGHT: f32 = (0.125 / 0.03925) as f32;
const FIM_LEFT: f32 = (0.20775 / 0.03925) as f32;
const AUSPOST_VERTICAL: f32 = (2.0 / 0.6) as f32;
const ROYAL_MAIL: f32 = ((2.0 * 39.0) / 25.4) as f32;
const JAPANPOST: f32 = (2.0 / 0.6) as f32;
const USPS_IMAIL_HORIZONTAL: f32 = 0.125f32 * 39.0f32;
const USPS_IMAIL_VERTICAL: f32 = 0.026f32 * 39.0f32;

/// Minimum quiet zones for `symbol`
///
/// `hide_text` matters only for EAN/UPC: with quiet zones suppressed, the
/// outermost human-readable digits still need room.
pub fn quiet_zones(symbol: &Symbol, hide_text: bool) -> QuietZoneLookup {
    let opts = &symbol.options;
    match policy(symbol, hide_text) {
        Policy::Always(margins) => QuietZoneLookup {
            margins,
            recognized: true,
        },
        Policy::OptIn(margins) if opts.quiet_zones && !opts.no_quiet_zones => QuietZoneLookup {
            margins,
            recognized: true,
        },
        Policy::OptIn(_) | Policy::Unknown => QuietZoneLookup::default(),
    }
}

fn policy(symbol: &Symbol, hide_text: bool) -> Policy {
    use Symbology::*;

    let suppressed = symbol.options.no_quiet_zones;
    let always = |margins: QuietZones| {
        Policy::Always(if suppressed { QuietZones::NONE } else { margins })
    };
    let text_len = symbol.text_len();

    match symbol.symbology {
        Code16k | Code49 => always(QuietZones::horizontal(10.0, 1.0)),
        CodablockF | HibcBlockF | Itf14 => always(QuietZones::horizontal(10.0, 10.0)),
        Eanx | EanxChk | EanxCc | Isbnx => Policy::Always(ean(text_len, suppressed, hide_text)),
        Upca | UpcaChk | UpcaCc => Policy::Always(upc(text_len, 12, 9.0, suppressed, hide_text)),
        Upce | UpceChk | UpceCc => Policy::Always(upc(text_len, 8, 7.0, suppressed, hide_text)),

        Code11 | C25Inter | C25Standard | C25Iata | C25Logic | C25Ind => {
            Policy::OptIn(QuietZones::horizontal(10.0, 10.0))
        }
        Code39 | ExCode39 | Logmars | Pzn | Vin | Hibc39 | Code32 => {
            Policy::OptIn(QuietZones::horizontal(10.0, 10.0))
        }
        Gs1_128 | Gs1_128Cc | Ean14 | Codabar => Policy::OptIn(QuietZones::horizontal(10.0, 10.0)),
        Code128 | Code128Ab | Hibc128 | Nve18 | DpLeit | DpIdent | Code93 => {
            Policy::OptIn(QuietZones::horizontal(10.0, 10.0))
        }
        Telepen | TelepenNum | KoreaPost | Bc412 | UpuS10 => {
            Policy::OptIn(QuietZones::horizontal(10.0, 10.0))
        }
        Flat => Policy::Unknown,
        DbarOmn | DbarLtd | DbarExp | DbarStk | DbarOmnStk | DbarExpStk => {
            Policy::OptIn(QuietZones::NONE)
        }
        DbarOmnCc | DbarLtdCc | DbarExpCc | DbarStkCc | DbarOmnStkCc | DbarExpStkCc => {
            Policy::OptIn(QuietZones::horizontal(1.0, 1.0))
        }
        Postnet | Planet => Policy::OptIn(QuietZones::new(5.0, 5.0, 1.6, 1.6)),
        Cepnet => Policy::OptIn(QuietZones::new(10.0, 10.0, 1.6, 1.6)),
        MsiPlessey | Plessey => Policy::OptIn(QuietZones::horizontal(12.0, 12.0)),
        Fim => Policy::OptIn(QuietZones::horizontal(FIM_LEFT, FIM_RIGHT)),
        Pharma | PharmaTwo => Policy::OptIn(QuietZones::horizontal(6.0, 6.0)),
        Pdf417 | Pdf417Comp | HibcPdf => Policy::OptIn(QuietZones::all(2.0)),
        MicroPdf417 | HibcMicPdf | Maxicode => Policy::OptIn(QuietZones::all(1.0)),
        QrCode | UpnQr | HibcQr => Policy::OptIn(QuietZones::all(4.0)),
        Dpd => Policy::OptIn(QuietZones::horizontal(12.5, 12.5)),
        MicroQr | Rmqr => Policy::OptIn(QuietZones::all(2.0)),
        AusPost | AusReply | AusRoute | AusRedirect => Policy::OptIn(QuietZones::new(
            10.0,
            10.0,
            AUSPOST_VERTICAL,
            AUSPOST_VERTICAL,
        )),
        Rm4scc | Kix | Mailmark4s => Policy::OptIn(QuietZones::all(ROYAL_MAIL)),
        DataMatrix | HibcDm => Policy::OptIn(QuietZones::all(1.0)),
        JapanPost => Policy::OptIn(QuietZones::all(JAPANPOST)),
        UspsImail => Policy::OptIn(QuietZones::new(
            USPS_IMAIL_HORIZONTAL,
            USPS_IMAIL_HORIZONTAL,
            USPS_IMAIL_VERTICAL,
            USPS_IMAIL_VERTICAL,
        )),
        Aztec | HibcAztec | AzRune | Daft => Policy::OptIn(QuietZones::NONE),
        DotCode | HanXin => Policy::OptIn(QuietZones::all(3.0)),
        Mailmark2d => Policy::OptIn(QuietZones::all(4.0)),
        Channel => Policy::OptIn(QuietZones::horizontal(1.0, 2.0)),
        // Versions S and T only
        CodeOne => Policy::OptIn(match symbol.version {
            Some(9) | Some(10) => QuietZones::horizontal(1.0, 1.0),
            _ => QuietZones::NONE,
        }),
        GridMatrix => Policy::OptIn(QuietZones::all(6.0)),
        Ultra => Policy::OptIn(QuietZones::all(1.0)),
    }
}

fn ean(text_len: usize, suppressed: bool, hide_text: bool) -> QuietZones {
    match text_len {
        // EAN-13, alone or with a 2/5 digit add-on
        13 | 16 | 19 => {
            let right = if text_len == 13 { 7.0 } else { 5.0 };
            if !suppressed {
                QuietZones::horizontal(11.0, right)
            } else if !hide_text {
                QuietZones::horizontal(11.0, 0.0)
            } else {
                QuietZones::NONE
            }
        }
        // Add-on on its own
        2 | 5 if !suppressed => QuietZones::horizontal(7.0, 5.0),
        // EAN-8, with or without add-on
        _ if !suppressed => QuietZones::horizontal(7.0, 7.0),
        _ => QuietZones::NONE,
    }
}

/// UPC-A and UPC-E share a layout; text longer than `main_len` has an add-on
fn upc(text_len: usize, main_len: usize, right: f32, suppressed: bool, hide_text: bool) -> QuietZones {
    let has_addon = text_len > main_len;
    if !suppressed {
        QuietZones::horizontal(9.0, if has_addon { 5.0 } else { right })
    } else if !hide_text {
        QuietZones::horizontal(9.0, if has_addon { 0.0 } else { right })
    } else {
        QuietZones::NONE
    }
}
