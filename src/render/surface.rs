//! The element-owned drawing surface.
//!
//! A monochrome raster buffer (1 = dark) that renderer adapters draw onto.
//! Besides its intrinsic pixel dimensions the surface records an optional
//! *sizing style*, a display-size override set by the QR path to force the
//! square preview box. `client_width` is what the element reads back after
//! a render: the style override when present, the intrinsic width otherwise.
//! The 1D path clears the style before drawing so a residual square size
//! from a previous QR render never leaks into barcode dimensions.

use crate::error::RenderError;
use image::{GrayImage, Luma};

#[derive(Debug, Clone, Default)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    style_size: Option<(u32, u32)>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard previous contents and reallocate at the given size (cleared
    /// to white). A zero dimension leaves the surface blank.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0u8; width * height];
    }

    /// Set a pixel (true = dark). Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = if dark { 1 } else { 0 };
    }

    /// Whether the pixel at (x, y) is dark. Out of bounds reads as white.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] != 0
    }

    /// Fill a rectangle with dark or white pixels.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, dark: bool) {
        for py in y..y + h {
            for px in x..x + w {
                self.set_pixel(px, py, dark);
            }
        }
    }

    /// Intrinsic pixel width of the buffer.
    pub fn intrinsic_width(&self) -> usize {
        self.width
    }

    /// Intrinsic pixel height of the buffer.
    pub fn intrinsic_height(&self) -> usize {
        self.height
    }

    /// Force a display size, overriding the intrinsic dimensions (the QR
    /// path's square box).
    pub fn set_style_size(&mut self, width: u32, height: u32) {
        self.style_size = Some((width, height));
    }

    /// Remove any display-size override.
    pub fn clear_style_size(&mut self) {
        self.style_size = None;
    }

    pub fn style_size(&self) -> Option<(u32, u32)> {
        self.style_size
    }

    /// The natural width the element persists after a render: the sizing
    /// style when set, the intrinsic pixel width otherwise.
    pub fn client_width(&self) -> f64 {
        match self.style_size {
            Some((w, _)) => w as f64,
            None => self.width as f64,
        }
    }

    /// Whether nothing has been drawn.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }

    /// Export the surface as a grayscale image (dark = black on white).
    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width.max(1) as u32, self.height.max(1) as u32);
        for p in img.pixels_mut() {
            *p = Luma([255u8]);
        }
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.pixel(x, y) { 0u8 } else { 255u8 };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
        img
    }

    /// Export the surface as PNG bytes for the host preview.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        use image::ImageEncoder;

        let img = self.to_image();
        let (w, h) = img.dimensions();
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(img.as_raw(), w, h, image::ExtendedColorType::L8)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        Ok(png_bytes)
    }
}
