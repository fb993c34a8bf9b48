//! The render decision procedure.
//!
//! `decide_render` is a pure function from the element's rendering-relevant
//! configuration to a [`RenderPlan`]. It performs the format dispatch, the
//! template-reference validity gate, fallback-content selection, and option
//! defaulting, everything except touching a surface. The side-effecting
//! half lives in [`crate::render::apply`].

use crate::format::{CodeFormat, DEFAULT_QR_CONTENT, ErrorCorrection};

/// Vertical space reserved beneath the bars for the human-readable line.
pub const LABEL_STRIP_HEIGHT: f64 = 22.0;

/// Module width used when `bar_width` is empty or unparseable.
pub const DEFAULT_MODULE_WIDTH: f64 = 2.0;

/// The rendering-relevant slice of a code element's configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig<'a> {
    pub content: &'a str,
    pub format: &'a CodeFormat,
    pub display_value: bool,
    pub bar_width: &'a str,
    pub height: f64,
    pub error_correction: ErrorCorrection,
}

/// Options handed to the 1D renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OneDimOptions {
    pub format: CodeFormat,
    /// Bar height in pixels (label strip already subtracted).
    pub height: f64,
    pub margin: f64,
    pub display_value: bool,
    pub module_width: f64,
}

/// What a render pass will do, decided purely from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// 2D matrix path: always drawn at square `pixel_size` dimensions.
    Matrix {
        content: String,
        pixel_size: f64,
        margin: f64,
        error_correction: ErrorCorrection,
    },
    /// 1D path: `attempt` is the real content if it passed the validity
    /// gate; `fallback` is the format's placeholder used when the attempt
    /// is absent or rejected by the renderer.
    OneDim {
        attempt: Option<String>,
        fallback: String,
        options: OneDimOptions,
    },
}

/// Whether content carries an unresolved `${...}` template reference.
/// Template values aren't resolved at design time, so such content is never
/// handed to the 1D renderer.
pub fn contains_template_ref(content: &str) -> bool {
    content.contains("${")
}

fn parse_module_width(bar_width: &str) -> f64 {
    match bar_width.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => value,
        _ => DEFAULT_MODULE_WIDTH,
    }
}

/// Map the element configuration to a render plan.
pub fn decide_render(config: &RenderConfig) -> RenderPlan {
    if config.format.is_matrix() {
        let content = if config.content.is_empty() {
            DEFAULT_QR_CONTENT.to_string()
        } else {
            config.content.to_string()
        };
        return RenderPlan::Matrix {
            content,
            pixel_size: config.height,
            margin: 0.0,
            error_correction: config.error_correction,
        };
    }

    let height = if config.display_value {
        config.height - LABEL_STRIP_HEIGHT
    } else {
        config.height
    };
    let attempt = (!config.content.is_empty() && !contains_template_ref(config.content))
        .then(|| config.content.to_string());

    RenderPlan::OneDim {
        attempt,
        fallback: config.format.fallback_content().to_string(),
        options: OneDimOptions {
            format: config.format.clone(),
            height,
            margin: 0.0,
            display_value: config.display_value,
            module_width: parse_module_width(config.bar_width),
        },
    }
}
