//! The default 1D renderer.
//!
//! Dispatches per format to the barcoders crate (Code 39, Code 128, the EAN
//! family, ITF-14) or to the local encoders in [`crate::sym`] (MSI variants,
//! pharmacode), then rasterizes the 0/1 modules onto the surface. With
//! `display_value` set, the content is drawn as a text line in the strip
//! below the bars using the Spleen 6x12 bitmap font.

use barcoders::sym::code39::Code39;
use barcoders::sym::code128::Code128;
use barcoders::sym::ean8::EAN8;
use barcoders::sym::ean13::EAN13;
use barcoders::sym::ean_supp::EANSUPP;
use barcoders::sym::tf::TF;
use spleen_font::{FONT_6X12, PSF2Font};

use crate::error::RenderError;
use crate::format::CodeFormat;
use crate::plan::{LABEL_STRIP_HEIGHT, OneDimOptions};
use crate::render::{OneDimRenderer, Surface};
use crate::sym::{msi, pharmacode};

const LABEL_CHAR_WIDTH: usize = 6;
const LABEL_CHAR_HEIGHT: usize = 12;

/// Renders 1D symbologies onto a [`Surface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BarRenderer;

impl OneDimRenderer for BarRenderer {
    fn render(
        &self,
        surface: &mut Surface,
        content: &str,
        options: &OneDimOptions,
    ) -> Result<(), RenderError> {
        let modules = encode_modules(&options.format, content)?;

        let module_width = (options.module_width.max(1.0)).round() as usize;
        let bar_height = options.height.max(1.0).round() as usize;
        let margin = options.margin.max(0.0).round() as usize;
        let label_height = if options.display_value {
            LABEL_STRIP_HEIGHT as usize
        } else {
            0
        };

        let width = modules.len() * module_width + 2 * margin;
        surface.reset(width, bar_height + label_height);
        for (i, &module) in modules.iter().enumerate() {
            if module == 1 {
                surface.fill_rect(margin + i * module_width, 0, module_width, bar_height, true);
            }
        }
        if options.display_value {
            draw_label(surface, content, bar_height);
        }
        Ok(())
    }
}

/// Encode content as 0/1 modules for a 1D format. This is where content
/// validation happens: charset, length, and check-digit rules all surface
/// as `RenderError::InvalidContent`.
pub fn encode_modules(format: &CodeFormat, content: &str) -> Result<Vec<u8>, RenderError> {
    match format {
        CodeFormat::Code39 => Code39::new(content)
            .map(|code| code.encode())
            .map_err(|e| RenderError::invalid(format, e.to_string())),
        CodeFormat::Code128 => {
            // barcoders wants an explicit character-set prefix; Set B covers
            // the full printable-ASCII range the property panel accepts.
            let prefixed = format!("\u{0181}{content}");
            Code128::new(&prefixed)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Ean13 => {
            let payload = checked_payload(format, content, 12)?;
            EAN13::new(&payload)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Ean8 => {
            let payload = checked_payload(format, content, 7)?;
            EAN8::new(&payload)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Ean5 => {
            exact_digits(format, content, 5)?;
            EANSUPP::new(content)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Ean2 => {
            exact_digits(format, content, 2)?;
            EANSUPP::new(content)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Itf14 => {
            exact_digits(format, content, 14)?;
            let check = gs1_check_digit(&content[..13]);
            if content.as_bytes()[13] - b'0' != check {
                return Err(RenderError::invalid(
                    format,
                    format!("check digit mismatch, expected {check}"),
                ));
            }
            TF::interleaved(content)
                .map(|code| code.encode())
                .map_err(|e| RenderError::invalid(format, e.to_string()))
        }
        CodeFormat::Msi
        | CodeFormat::Msi10
        | CodeFormat::Msi11
        | CodeFormat::Msi1010
        | CodeFormat::Msi1110 => {
            let checksum = msi::MsiChecksum::for_format(format)
                .ok_or_else(|| RenderError::Unsupported(format.name().to_string()))?;
            msi::encode(format, content, checksum)
        }
        CodeFormat::Pharmacode => pharmacode::encode(content),
        CodeFormat::QrCode | CodeFormat::Other(_) => {
            Err(RenderError::Unsupported(format.name().to_string()))
        }
    }
}

fn exact_digits(format: &CodeFormat, content: &str, len: usize) -> Result<(), RenderError> {
    if content.len() != len || !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::invalid(
            format,
            format!("expected exactly {len} digits"),
        ));
    }
    Ok(())
}

/// Accept either the bare payload or payload plus a valid check digit, and
/// return the bare payload (the encoder recomputes the check digit itself).
fn checked_payload(
    format: &CodeFormat,
    content: &str,
    payload_len: usize,
) -> Result<String, RenderError> {
    if !content.bytes().all(|b| b.is_ascii_digit()) || content.is_empty() {
        return Err(RenderError::invalid(format, "expected digits only"));
    }
    if content.len() == payload_len {
        return Ok(content.to_string());
    }
    if content.len() == payload_len + 1 {
        let payload = &content[..payload_len];
        let check = gs1_check_digit(payload);
        if content.as_bytes()[payload_len] - b'0' != check {
            return Err(RenderError::invalid(
                format,
                format!("check digit mismatch, expected {check}"),
            ));
        }
        return Ok(payload.to_string());
    }
    Err(RenderError::invalid(
        format,
        format!("expected {payload_len} or {} digits", payload_len + 1),
    ))
}

/// GS1 mod-10 check digit (EAN-13, EAN-8, ITF-14): weights 3 and 1
/// alternating from the rightmost payload digit.
fn gs1_check_digit(payload: &str) -> u8 {
    let mut sum = 0u32;
    for (i, b) in payload.bytes().rev().enumerate() {
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum += (b - b'0') as u32 * weight;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Draw the human-readable line centered in the strip below the bars.
fn draw_label(surface: &mut Surface, text: &str, bar_height: usize) {
    let mut font = PSF2Font::new(FONT_6X12).unwrap();
    let text_width = text.chars().count() * LABEL_CHAR_WIDTH;
    let x0 = surface.intrinsic_width().saturating_sub(text_width) / 2;
    let y0 = bar_height + (LABEL_STRIP_HEIGHT as usize - LABEL_CHAR_HEIGHT) / 2;

    for (i, ch) in text.chars().enumerate() {
        let utf8 = ch.to_string();
        let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) else {
            continue;
        };
        for (gy, row) in glyph.enumerate() {
            for (gx, on) in row.enumerate() {
                if on {
                    surface.set_pixel(x0 + i * LABEL_CHAR_WIDTH + gx, y0 + gy, true);
                }
            }
        }
    }
}
