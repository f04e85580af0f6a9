//! Error types for Barkit
//!
//! Every error carries a stable numeric tag (shown as the message prefix)
//! and maps onto one of the library's result codes.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BarkitError>;

/// Result code for missing or inconsistent symbol/scene data
pub const ERROR_INVALID_DATA: i32 = 6;
/// Result code for malformed caller options (colors)
pub const ERROR_INVALID_OPTION: i32 = 8;
/// Result code for an output destination that cannot be opened
pub const ERROR_FILE_ACCESS: i32 = 10;
/// Result code for a failed write, flush or close
pub const ERROR_FILE_WRITE: i32 = 12;

/// Main error type for Barkit
#[derive(Debug, Error)]
pub enum BarkitError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BarkitError {
    /// Result code reported to the caller (0 is success and never an error)
    pub fn code(&self) -> i32 {
        match self {
            Self::Color(_) | Self::Config(_) => ERROR_INVALID_OPTION,
            Self::Scene(_) => ERROR_INVALID_DATA,
            Self::Output(OutputError::Open(_)) => ERROR_FILE_ACCESS,
            Self::Output(_) | Self::Io(_) => ERROR_FILE_WRITE,
        }
    }

    /// Stable numeric tag of the message, if it has one
    pub fn tag(&self) -> Option<u16> {
        match self {
            Self::Color(e) => Some(e.tag()),
            Self::Scene(e) => Some(e.tag()),
            Self::Output(e) => Some(e.tag()),
            Self::Io(_) | Self::Config(_) => None,
        }
    }
}

/// Which of the two color options is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Foreground,
    Background,
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        })
    }
}

/// One of the four CMYK fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmykField {
    C,
    M,
    Y,
    K,
}

impl fmt::Display for CmykField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::C => "C",
            Self::M => "M",
            Self::Y => "Y",
            Self::K => "K",
        })
    }
}

/// Malformed color specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("880: Malformed {0} RGB colour (6 or 8 characters only)")]
    RgbLength(ColorChannel),

    #[error("881: Malformed {channel} RGB colour '{value}' (hexadecimal only)")]
    RgbNotHex { channel: ColorChannel, value: String },

    #[error("882: Malformed {0} CMYK colour (4 decimal numbers, comma-separated)")]
    CmykFieldCount(ColorChannel),

    #[error("883: Malformed {0} CMYK colour (3 digit maximum per number)")]
    CmykDigitCount(ColorChannel),

    #[error("{}: Malformed {channel} CMYK colour {field} (decimal 0-100 only)", field_tag(.field))]
    CmykRange { channel: ColorChannel, field: CmykField },
}

fn field_tag(field: &CmykField) -> u16 {
    match field {
        CmykField::C => 884,
        CmykField::M => 885,
        CmykField::Y => 886,
        CmykField::K => 887,
    }
}

impl ColorError {
    pub fn tag(&self) -> u16 {
        match self {
            Self::RgbLength(_) => 880,
            Self::RgbNotHex { .. } => 881,
            Self::CmykFieldCount(_) => 882,
            Self::CmykDigitCount(_) => 883,
            Self::CmykRange { field, .. } => field_tag(field),
        }
    }

    pub fn channel(&self) -> ColorChannel {
        match self {
            Self::RgbLength(channel)
            | Self::CmykFieldCount(channel)
            | Self::CmykDigitCount(channel) => *channel,
            Self::RgbNotHex { channel, .. } | Self::CmykRange { channel, .. } => *channel,
        }
    }
}

/// Contract violations by the encoding stage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("646: Vector header NULL")]
    MissingVector,

    #[error("650: Row height data invalid ({0})")]
    InvalidRowHeights(String),
}

impl SceneError {
    pub fn tag(&self) -> u16 {
        match self {
            Self::MissingVector => 646,
            Self::InvalidRowHeights(_) => 650,
        }
    }
}

/// Output destination failures
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("645: Could not open output file ({0})")]
    Open(std::io::Error),

    #[error("647: Incomplete write to output ({0})")]
    Write(std::io::Error),

    #[error("648: Incomplete flush to output ({0})")]
    Flush(std::io::Error),

    #[error("649: Failure on closing output file ({0})")]
    Close(std::io::Error),
}

impl OutputError {
    pub fn tag(&self) -> u16 {
        match self {
            Self::Open(_) => 645,
            Self::Write(_) => 647,
            Self::Flush(_) => 648,
            Self::Close(_) => 649,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_messages() {
        let err = ColorError::RgbNotHex {
            channel: ColorChannel::Background,
            value: "GG0000".into(),
        };
        assert_eq!(
            err.to_string(),
            "881: Malformed background RGB colour 'GG0000' (hexadecimal only)"
        );

        let err = ColorError::CmykRange {
            channel: ColorChannel::Foreground,
            field: CmykField::Y,
        };
        assert_eq!(err.tag(), 886);
        assert_eq!(
            err.to_string(),
            "886: Malformed foreground CMYK colour Y (decimal 0-100 only)"
        );
    }

    #[test]
    fn test_result_codes() {
        let color: BarkitError = ColorError::RgbLength(ColorChannel::Foreground).into();
        assert_eq!(color.code(), ERROR_INVALID_OPTION);
        assert_eq!(color.tag(), Some(880));

        let scene: BarkitError = SceneError::MissingVector.into();
        assert_eq!(scene.code(), ERROR_INVALID_DATA);

        let open: BarkitError =
            OutputError::Open(std::io::Error::from(std::io::ErrorKind::NotFound)).into();
        assert_eq!(open.code(), ERROR_FILE_ACCESS);
        assert_eq!(open.tag(), Some(645));

        let close: BarkitError =
            OutputError::Close(std::io::Error::from(std::io::ErrorKind::Other)).into();
        assert_eq!(close.code(), ERROR_FILE_WRITE);
    }
}
