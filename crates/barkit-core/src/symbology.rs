//! The closed set of symbologies the back end knows about
//!
//! Each symbology keeps the numeric identifier and upper-case name used by
//! encoders, so symbols can be described either way on the command line or
//! in JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BarkitError;

macro_rules! symbologies {
    ($($(#[$doc:meta])* $variant:ident = $id:literal, $name:literal;)+) => {
        /// Barcode symbology tag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        #[allow(non_camel_case_types)]
        pub enum Symbology {
            $($(#[$doc])* $variant,)+
        }

        impl Symbology {
            /// Every symbology, in identifier order
            pub const ALL: &'static [Symbology] = &[$(Symbology::$variant,)+];

            /// Stable numeric identifier
            pub const fn id(self) -> u16 {
                match self {
                    $(Symbology::$variant => $id,)+
                }
            }

            /// Canonical upper-case name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Symbology::$variant => $name,)+
                }
            }

            pub fn from_id(id: u16) -> Option<Self> {
                match id {
                    $($id => Some(Symbology::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

symbologies! {
    Code11 = 1, "CODE11";
    C25Standard = 2, "C25STANDARD";
    C25Inter = 3, "C25INTER";
    C25Iata = 4, "C25IATA";
    C25Logic = 6, "C25LOGIC";
    C25Ind = 7, "C25IND";
    Code39 = 8, "CODE39";
    ExCode39 = 9, "EXCODE39";
    /// EAN-8/EAN-13 and the EAN-2/EAN-5 add-ons
    Eanx = 13, "EANX";
    EanxChk = 14, "EANX_CHK";
    Gs1_128 = 16, "GS1_128";
    Codabar = 18, "CODABAR";
    Code128 = 20, "CODE128";
    DpLeit = 21, "DPLEIT";
    DpIdent = 22, "DPIDENT";
    Code16k = 23, "CODE16K";
    Code49 = 24, "CODE49";
    Code93 = 25, "CODE93";
    Flat = 28, "FLAT";
    DbarOmn = 29, "DBAR_OMN";
    DbarLtd = 30, "DBAR_LTD";
    DbarExp = 31, "DBAR_EXP";
    Telepen = 32, "TELEPEN";
    Upca = 34, "UPCA";
    UpcaChk = 35, "UPCA_CHK";
    Upce = 37, "UPCE";
    UpceChk = 38, "UPCE_CHK";
    Postnet = 40, "POSTNET";
    MsiPlessey = 47, "MSI_PLESSEY";
    Fim = 49, "FIM";
    Logmars = 50, "LOGMARS";
    Pharma = 51, "PHARMA";
    Pzn = 52, "PZN";
    PharmaTwo = 53, "PHARMA_TWO";
    Cepnet = 54, "CEPNET";
    Pdf417 = 55, "PDF417";
    Pdf417Comp = 56, "PDF417COMP";
    Maxicode = 57, "MAXICODE";
    QrCode = 58, "QRCODE";
    Code128Ab = 60, "CODE128AB";
    AusPost = 63, "AUSPOST";
    AusReply = 66, "AUSREPLY";
    AusRoute = 67, "AUSROUTE";
    AusRedirect = 68, "AUSREDIRECT";
    Isbnx = 69, "ISBNX";
    Rm4scc = 70, "RM4SCC";
    DataMatrix = 71, "DATAMATRIX";
    Ean14 = 72, "EAN14";
    Vin = 73, "VIN";
    CodablockF = 74, "CODABLOCKF";
    Nve18 = 75, "NVE18";
    JapanPost = 76, "JAPANPOST";
    KoreaPost = 77, "KOREAPOST";
    DbarStk = 79, "DBAR_STK";
    DbarOmnStk = 80, "DBAR_OMNSTK";
    DbarExpStk = 81, "DBAR_EXPSTK";
    Planet = 82, "PLANET";
    MicroPdf417 = 84, "MICROPDF417";
    UspsImail = 85, "USPS_IMAIL";
    Plessey = 86, "PLESSEY";
    TelepenNum = 87, "TELEPEN_NUM";
    Itf14 = 89, "ITF14";
    Kix = 90, "KIX";
    Aztec = 92, "AZTEC";
    Daft = 93, "DAFT";
    Dpd = 96, "DPD";
    MicroQr = 97, "MICROQR";
    Hibc128 = 98, "HIBC_128";
    Hibc39 = 99, "HIBC_39";
    HibcDm = 102, "HIBC_DM";
    HibcQr = 104, "HIBC_QR";
    HibcPdf = 106, "HIBC_PDF";
    HibcMicPdf = 108, "HIBC_MICPDF";
    HibcBlockF = 110, "HIBC_BLOCKF";
    HibcAztec = 112, "HIBC_AZTEC";
    DotCode = 115, "DOTCODE";
    HanXin = 116, "HANXIN";
    Mailmark2d = 119, "MAILMARK_2D";
    Mailmark4s = 121, "MAILMARK_4S";
    AzRune = 128, "AZRUNE";
    Code32 = 129, "CODE32";
    EanxCc = 130, "EANX_CC";
    Gs1_128Cc = 131, "GS1_128_CC";
    DbarOmnCc = 132, "DBAR_OMN_CC";
    DbarLtdCc = 133, "DBAR_LTD_CC";
    DbarExpCc = 134, "DBAR_EXP_CC";
    UpcaCc = 135, "UPCA_CC";
    UpceCc = 136, "UPCE_CC";
    DbarStkCc = 137, "DBAR_STK_CC";
    DbarOmnStkCc = 138, "DBAR_OMNSTK_CC";
    DbarExpStkCc = 139, "DBAR_EXPSTK_CC";
    Channel = 140, "CHANNEL";
    CodeOne = 141, "CODEONE";
    GridMatrix = 142, "GRIDMATRIX";
    UpnQr = 143, "UPNQR";
    /// The only symbology with per-rectangle colors
    Ultra = 144, "ULTRA";
    Rmqr = 145, "RMQR";
    Bc412 = 146, "BC412";
    UpuS10 = 154, "UPU_S10";
}

impl Symbology {
    /// 2D component stacked on a linear one
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Self::EanxCc
                | Self::Gs1_128Cc
                | Self::DbarOmnCc
                | Self::DbarLtdCc
                | Self::DbarExpCc
                | Self::UpcaCc
                | Self::UpceCc
                | Self::DbarStkCc
                | Self::DbarOmnStkCc
                | Self::DbarExpStkCc
        )
    }

    /// EAN/UPC family, which may carry a 2 or 5 digit add-on
    pub const fn is_extendable(self) -> bool {
        matches!(
            self,
            Self::Eanx
                | Self::EanxChk
                | Self::Upca
                | Self::UpcaChk
                | Self::Upce
                | Self::UpceChk
                | Self::Isbnx
                | Self::EanxCc
                | Self::UpcaCc
                | Self::UpceCc
        )
    }

    pub const fn is_ean(self) -> bool {
        matches!(self, Self::Eanx | Self::EanxChk | Self::EanxCc | Self::Isbnx)
    }

    pub const fn is_upca(self) -> bool {
        matches!(self, Self::Upca | Self::UpcaChk | Self::UpcaCc)
    }

    pub const fn is_upce(self) -> bool {
        matches!(self, Self::Upce | Self::UpceChk | Self::UpceCc)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = BarkitError;

    /// Accepts the numeric identifier or the name, with or without a
    /// `BARCODE_` prefix, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u16>() {
            return Self::from_id(id)
                .ok_or_else(|| BarkitError::Config(format!("Unknown symbology id: {}", id)));
        }

        let upper = s.to_ascii_uppercase().replace('-', "_");
        let name = upper.strip_prefix("BARCODE_").unwrap_or(&upper);
        Self::ALL
            .iter()
            .copied()
            .find(|sym| sym.name() == name)
            .ok_or_else(|| BarkitError::Config(format!("Unknown symbology: {}", s)))
    }
}

impl TryFrom<String> for Symbology {
    type Error = BarkitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbology> for String {
    fn from(value: Symbology) -> Self {
        value.name().to_string()
    }
}
