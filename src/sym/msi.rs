//! MSI (Modified Plessey) encoding with optional mod-10/mod-11 check digits.
//!
//! MSI content is digits only. The five variants differ solely in which
//! check digits are appended before encoding: none, one mod-10, one mod-11,
//! two mod-10, or mod-11 followed by mod-10.

use crate::error::RenderError;
use crate::format::CodeFormat;

/// Check-digit scheme appended to the raw digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsiChecksum {
    None,
    Mod10,
    Mod11,
    Mod1010,
    Mod1110,
}

impl MsiChecksum {
    pub fn for_format(format: &CodeFormat) -> Option<MsiChecksum> {
        match format {
            CodeFormat::Msi => Some(MsiChecksum::None),
            CodeFormat::Msi10 => Some(MsiChecksum::Mod10),
            CodeFormat::Msi11 => Some(MsiChecksum::Mod11),
            CodeFormat::Msi1010 => Some(MsiChecksum::Mod1010),
            CodeFormat::Msi1110 => Some(MsiChecksum::Mod1110),
            _ => None,
        }
    }
}

/// Encode digits as MSI modules, appending check digits per the variant.
pub fn encode(format: &CodeFormat, data: &str, checksum: MsiChecksum) -> Result<Vec<u8>, RenderError> {
    if data.is_empty() || !data.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::invalid(format, "MSI requires one or more digits"));
    }

    let digits = match checksum {
        MsiChecksum::None => data.to_string(),
        MsiChecksum::Mod10 => append_mod10(data),
        MsiChecksum::Mod11 => append_mod11(data),
        MsiChecksum::Mod1010 => append_mod10(&append_mod10(data)),
        MsiChecksum::Mod1110 => append_mod10(&append_mod11(data)),
    };

    // Start guard, 4 bits per digit (1 -> 110, 0 -> 100), stop guard.
    let mut modules: Vec<u8> = vec![1, 1, 0];
    for b in digits.bytes() {
        let value = b - b'0';
        for bit in (0..4).rev() {
            if value >> bit & 1 == 1 {
                modules.extend_from_slice(&[1, 1, 0]);
            } else {
                modules.extend_from_slice(&[1, 0, 0]);
            }
        }
    }
    modules.extend_from_slice(&[1, 0, 0, 1]);
    Ok(modules)
}

/// Luhn-style mod-10 check digit.
pub fn mod10_digit(digits: &str) -> u8 {
    let len = digits.len();
    let mut sum = 0u32;
    for (i, b) in digits.bytes().enumerate() {
        let n = (b - b'0') as u32;
        if (i + len) % 2 == 0 {
            sum += n;
        } else {
            let doubled = n * 2;
            sum += doubled % 10 + doubled / 10;
        }
    }
    ((10 - sum % 10) % 10) as u8
}

/// IBM mod-11 check digit with weights cycling 2..=7 from the right.
pub fn mod11_digit(digits: &str) -> u8 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for b in digits.bytes().rev() {
        sum += (b - b'0') as u32 * weight;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }
    ((11 - sum % 11) % 11) as u8
}

fn append_mod10(digits: &str) -> String {
    format!("{digits}{}", mod10_digit(digits))
}

fn append_mod11(digits: &str) -> String {
    format!("{digits}{}", mod11_digit(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod10_digit() {
        assert_eq!(mod10_digit("1234"), 4);
        assert_eq!(mod10_digit("12344"), 8);
    }

    #[test]
    fn test_mod11_digit() {
        assert_eq!(mod11_digit("1234"), 3);
    }

    #[test]
    fn test_checksum_chains() {
        assert_eq!(append_mod10(&append_mod10("1234")), "123448");
        assert_eq!(append_mod10(&append_mod11("1234")), "123430");
    }

    #[test]
    fn test_encode_structure() {
        let modules = encode(&CodeFormat::Msi, "1234", MsiChecksum::None).unwrap();
        // start(3) + 4 digits * 4 bits * 3 modules + stop(4)
        assert_eq!(modules.len(), 3 + 4 * 4 * 3 + 4);
        assert_eq!(&modules[..3], &[1, 1, 0]);
        assert_eq!(&modules[modules.len() - 4..], &[1, 0, 0, 1]);
        assert!(modules.iter().all(|&m| m <= 1));
    }

    #[test]
    fn test_check_digits_lengthen_encoding() {
        let plain = encode(&CodeFormat::Msi, "1234", MsiChecksum::None).unwrap();
        let mod10 = encode(&CodeFormat::Msi10, "1234", MsiChecksum::Mod10).unwrap();
        let mod1010 = encode(&CodeFormat::Msi1010, "1234", MsiChecksum::Mod1010).unwrap();
        assert_eq!(mod10.len(), plain.len() + 12);
        assert_eq!(mod1010.len(), plain.len() + 24);
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(encode(&CodeFormat::Msi, "12a4", MsiChecksum::None).is_err());
        assert!(encode(&CodeFormat::Msi, "", MsiChecksum::None).is_err());
        assert!(encode(&CodeFormat::Msi, "12 34", MsiChecksum::None).is_err());
    }
}
