//! Renderer adapters and plan application.
//!
//! [`apply`] executes a [`RenderPlan`](crate::plan::RenderPlan) against a
//! [`Surface`] through the two renderer traits. All error recovery happens
//! here: a rejected 1D attempt is retried with the format's placeholder, a
//! failed placeholder degrades to a blank surface, and a matrix failure
//! degrades to a blank square. Nothing propagates to the caller.

use crate::format::ErrorCorrection;
use crate::plan::{OneDimOptions, RenderPlan};

pub mod matrix;
pub mod oned;
pub mod surface;

pub use matrix::QrMatrixRenderer;
pub use oned::BarRenderer;
pub use surface::Surface;

use crate::error::RenderError;

/// A 1D (bar/space) symbology renderer.
pub trait OneDimRenderer {
    /// Draw `content` onto the surface, replacing its contents. Returns
    /// `Err` when the content is not encodable in `options.format`; the
    /// surface state is unspecified in that case.
    fn render(
        &self,
        surface: &mut Surface,
        content: &str,
        options: &OneDimOptions,
    ) -> Result<(), RenderError>;
}

/// A 2D matrix symbology renderer.
pub trait MatrixRenderer {
    /// Draw `content` as a matrix code sized toward `pixel_size`, replacing
    /// the surface contents.
    fn render(
        &self,
        surface: &mut Surface,
        content: &str,
        pixel_size: f64,
        margin: f64,
        error_correction: ErrorCorrection,
    ) -> Result<(), RenderError>;
}

/// What a render pass produced, for the element to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// The width the element writes back into its own geometry.
    pub width: f64,
    /// The content actually drawn (placeholder when the attempt failed).
    pub effective_content: String,
    /// Whether placeholder content was substituted for the user's input.
    pub used_fallback: bool,
}

/// Execute a render plan against the surface. Infallible by design: every
/// renderer error is absorbed into a degraded-but-valid surface state.
pub fn apply(
    plan: &RenderPlan,
    surface: &mut Surface,
    oned: &dyn OneDimRenderer,
    matrix: &dyn MatrixRenderer,
) -> RenderOutcome {
    match plan {
        RenderPlan::Matrix {
            content,
            pixel_size,
            margin,
            error_correction,
        } => {
            if let Err(err) = matrix.render(surface, content, *pixel_size, *margin, *error_correction)
            {
                log::warn!("matrix render failed, leaving surface blank: {err}");
                surface.reset(0, 0);
            }
            // The matrix path always presents a square box of the planned
            // size, whatever the drawn module grid came out to.
            let px = pixel_size.max(0.0).round() as u32;
            surface.set_style_size(px, px);
            RenderOutcome {
                width: *pixel_size,
                effective_content: content.clone(),
                used_fallback: false,
            }
        }
        RenderPlan::OneDim {
            attempt,
            fallback,
            options,
        } => {
            // A sizing style left over from an earlier matrix render must
            // not distort the bar dimensions.
            surface.clear_style_size();
            let drawn = match attempt {
                Some(content) => match oned.render(surface, content, options) {
                    Ok(()) => Some(content.clone()),
                    Err(err) => {
                        log::warn!(
                            "content rejected for {}, substituting placeholder: {err}",
                            options.format
                        );
                        None
                    }
                },
                None => None,
            };
            match drawn {
                Some(content) => RenderOutcome {
                    width: surface.client_width(),
                    effective_content: content,
                    used_fallback: false,
                },
                None => {
                    if let Err(err) = oned.render(surface, fallback, options) {
                        log::debug!("placeholder render failed for {}: {err}", options.format);
                        surface.reset(0, 0);
                    }
                    RenderOutcome {
                        width: surface.client_width(),
                        effective_content: fallback.clone(),
                        used_fallback: true,
                    }
                }
            }
        }
    }
}
