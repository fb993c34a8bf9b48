//! The default 2D matrix renderer, backed by the qrcode crate.

use qrcode::{EcLevel, QrCode};

use crate::error::RenderError;
use crate::format::ErrorCorrection;
use crate::render::{MatrixRenderer, Surface};

/// Renders QR codes onto a [`Surface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QrMatrixRenderer;

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

impl MatrixRenderer for QrMatrixRenderer {
    fn render(
        &self,
        surface: &mut Surface,
        content: &str,
        pixel_size: f64,
        margin: f64,
        error_correction: ErrorCorrection,
    ) -> Result<(), RenderError> {
        let code = QrCode::with_error_correction_level(content.as_bytes(), ec_level(error_correction))
            .map_err(|e| RenderError::InvalidContent {
                format: "QRCode".to_string(),
                reason: e.to_string(),
            })?;

        let grid = code.width();
        let target = pixel_size.max(1.0).round() as usize;
        // Integer cell size so modules stay crisp; at least 1 pixel even
        // when the box is smaller than the module grid.
        let cell = (target / grid).max(1);
        let margin = margin.max(0.0).round() as usize;
        let side = grid * cell + 2 * margin;

        surface.reset(side, side);
        for y in 0..grid {
            for x in 0..grid {
                if code[(x, y)] == qrcode::Color::Dark {
                    surface.fill_rect(margin + x * cell, margin + y * cell, cell, cell, true);
                }
            }
        }
        Ok(())
    }
}
