//! Symbology formats and per-format fallback content.
//!
//! `CodeFormat` carries the format tags exactly as they appear in persisted
//! report definitions. Tags this build does not recognize are kept verbatim
//! in `Other` so they round-trip through serialization; rendering them
//! degrades to the empty placeholder.

use serde::{Deserialize, Serialize};

/// Default content used on the QR path when the user has not entered any.
pub const DEFAULT_QR_CONTENT: &str = "https://example.com";

/// A barcode symbology selectable in the property panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CodeFormat {
    #[default]
    Code128,
    Code39,
    Ean13,
    Ean8,
    Ean5,
    Ean2,
    Itf14,
    Msi,
    Msi10,
    Msi11,
    Msi1010,
    Msi1110,
    Pharmacode,
    QrCode,
    /// Unrecognized format tag, preserved for round-tripping.
    Other(String),
}

impl CodeFormat {
    /// Parse a persisted format tag. Unknown tags become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "CODE128" => CodeFormat::Code128,
            "CODE39" => CodeFormat::Code39,
            "EAN13" => CodeFormat::Ean13,
            "EAN8" => CodeFormat::Ean8,
            "EAN5" => CodeFormat::Ean5,
            "EAN2" => CodeFormat::Ean2,
            "ITF14" => CodeFormat::Itf14,
            "MSI" => CodeFormat::Msi,
            "MSI10" => CodeFormat::Msi10,
            "MSI11" => CodeFormat::Msi11,
            "MSI1010" => CodeFormat::Msi1010,
            "MSI1110" => CodeFormat::Msi1110,
            "pharmacode" => CodeFormat::Pharmacode,
            "QRCode" => CodeFormat::QrCode,
            other => CodeFormat::Other(other.to_string()),
        }
    }

    /// The persisted format tag.
    pub fn name(&self) -> &str {
        match self {
            CodeFormat::Code128 => "CODE128",
            CodeFormat::Code39 => "CODE39",
            CodeFormat::Ean13 => "EAN13",
            CodeFormat::Ean8 => "EAN8",
            CodeFormat::Ean5 => "EAN5",
            CodeFormat::Ean2 => "EAN2",
            CodeFormat::Itf14 => "ITF14",
            CodeFormat::Msi => "MSI",
            CodeFormat::Msi10 => "MSI10",
            CodeFormat::Msi11 => "MSI11",
            CodeFormat::Msi1010 => "MSI1010",
            CodeFormat::Msi1110 => "MSI1110",
            CodeFormat::Pharmacode => "pharmacode",
            CodeFormat::QrCode => "QRCode",
            CodeFormat::Other(name) => name,
        }
    }

    /// Whether this format takes the 2D matrix-code path.
    pub fn is_matrix(&self) -> bool {
        matches!(self, CodeFormat::QrCode)
    }

    /// Placeholder content substituted when the user's input would be
    /// rejected by the renderer. Hard-coded per symbology so the fallback
    /// render itself always succeeds; unrecognized formats get the empty
    /// string (an accepted degraded state, not an error).
    pub fn fallback_content(&self) -> &'static str {
        match self {
            CodeFormat::Code39 | CodeFormat::Code128 => "12345678",
            CodeFormat::Ean13 => "5901234123457",
            CodeFormat::Ean8 => "96385074",
            CodeFormat::Ean5 => "12345",
            CodeFormat::Ean2 => "12",
            CodeFormat::Itf14 => "12345678901231",
            CodeFormat::Msi
            | CodeFormat::Msi10
            | CodeFormat::Msi11
            | CodeFormat::Msi1010
            | CodeFormat::Msi1110
            | CodeFormat::Pharmacode => "1234",
            CodeFormat::QrCode | CodeFormat::Other(_) => "",
        }
    }

    /// All formats with a 1D encoder, for exhaustive fallback testing.
    pub fn one_dim_formats() -> &'static [CodeFormat] {
        &[
            CodeFormat::Code128,
            CodeFormat::Code39,
            CodeFormat::Ean13,
            CodeFormat::Ean8,
            CodeFormat::Ean5,
            CodeFormat::Ean2,
            CodeFormat::Itf14,
            CodeFormat::Msi,
            CodeFormat::Msi10,
            CodeFormat::Msi11,
            CodeFormat::Msi1010,
            CodeFormat::Msi1110,
            CodeFormat::Pharmacode,
        ]
    }
}

impl From<String> for CodeFormat {
    fn from(name: String) -> Self {
        CodeFormat::from_name(&name)
    }
}

impl From<CodeFormat> for String {
    fn from(format: CodeFormat) -> Self {
        format.name().to_string()
    }
}

impl std::fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// QR error correction level.
///
/// Higher levels allow more damage recovery but reduce data capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% error recovery.
    L,
    /// ~15% error recovery (default).
    #[default]
    M,
    /// ~25% error recovery.
    Q,
    /// ~30% error recovery.
    H,
}

impl ErrorCorrection {
    /// Parse a property-panel level name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "L" => Some(ErrorCorrection::L),
            "M" => Some(ErrorCorrection::M),
            "Q" => Some(ErrorCorrection::Q),
            "H" => Some(ErrorCorrection::H),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name_roundtrip() {
        for name in [
            "CODE128", "CODE39", "EAN13", "EAN8", "EAN5", "EAN2", "ITF14", "MSI", "MSI10",
            "MSI11", "MSI1010", "MSI1110", "pharmacode", "QRCode",
        ] {
            let format = CodeFormat::from_name(name);
            assert!(!matches!(format, CodeFormat::Other(_)), "{name}");
            assert_eq!(format.name(), name);
        }
    }

    #[test]
    fn test_unknown_format_preserved() {
        let format = CodeFormat::from_name("CODE93");
        assert_eq!(format, CodeFormat::Other("CODE93".to_string()));
        assert_eq!(format.name(), "CODE93");
        assert_eq!(format.fallback_content(), "");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&CodeFormat::Pharmacode).unwrap();
        assert_eq!(json, "\"pharmacode\"");
        let format: CodeFormat = serde_json::from_str("\"QRCode\"").unwrap();
        assert_eq!(format, CodeFormat::QrCode);
    }

    #[test]
    fn test_unknown_format_roundtrips_through_serde() {
        let format: CodeFormat = serde_json::from_str("\"datamatrix\"").unwrap();
        assert_eq!(format, CodeFormat::Other("datamatrix".to_string()));
        assert_eq!(serde_json::to_string(&format).unwrap(), "\"datamatrix\"");
    }

    #[test]
    fn test_fallback_table() {
        assert_eq!(CodeFormat::Code39.fallback_content(), "12345678");
        assert_eq!(CodeFormat::Code128.fallback_content(), "12345678");
        assert_eq!(CodeFormat::Ean13.fallback_content(), "5901234123457");
        assert_eq!(CodeFormat::Ean8.fallback_content(), "96385074");
        assert_eq!(CodeFormat::Ean5.fallback_content(), "12345");
        assert_eq!(CodeFormat::Ean2.fallback_content(), "12");
        assert_eq!(CodeFormat::Itf14.fallback_content(), "12345678901231");
        for format in [
            CodeFormat::Msi,
            CodeFormat::Msi10,
            CodeFormat::Msi11,
            CodeFormat::Msi1010,
            CodeFormat::Msi1110,
            CodeFormat::Pharmacode,
        ] {
            assert_eq!(format.fallback_content(), "1234");
        }
    }

    #[test]
    fn test_matrix_dispatch() {
        assert!(CodeFormat::QrCode.is_matrix());
        for format in CodeFormat::one_dim_formats() {
            assert!(!format.is_matrix(), "{format}");
        }
    }
}
