//! The barcode/QR element.
//!
//! A `CodeElement` owns its drawing [`Surface`] and re-renders it whenever
//! a rendering-relevant property changes. The render itself is split into
//! the pure decision in [`crate::plan::decide_render`] and the application
//! in [`crate::render::apply`]; this module wires the two to the element's
//! state and persists the resulting width back into the geometry.

use serde::{Deserialize, Serialize};

use crate::element::{
    ElementBase, ElementMeta, FieldRewrite, Placement, PropertyValue, Sizer, expect_bool,
    expect_str, rewrite_parameter_ref,
};
use crate::error::ElementError;
use crate::format::{CodeFormat, ErrorCorrection};
use crate::plan::{RenderConfig, decide_render};
use crate::render::{
    BarRenderer, MatrixRenderer, OneDimRenderer, QrMatrixRenderer, RenderOutcome, Surface, apply,
};

/// Properties whose change invalidates the rendered code.
const RENDER_PROPERTIES: [&str; 6] = [
    "content",
    "format",
    "displayValue",
    "barWidth",
    "height",
    "errorCorrectionLevel",
];

/// Spreadsheet-export settings, shared verbatim with the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadsheetOptions {
    #[serde(rename = "spreadsheet_hide", default)]
    pub hide: bool,
    #[serde(rename = "spreadsheet_column", default)]
    pub column: String,
    #[serde(rename = "spreadsheet_colspan", default)]
    pub colspan: String,
    #[serde(rename = "spreadsheet_addEmptyRow", default)]
    pub add_empty_row: bool,
}

fn default_bar_width() -> String {
    "2".to_string()
}

/// A barcode or QR code placed on the report canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeElement {
    #[serde(flatten)]
    pub base: ElementBase,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub format: CodeFormat,
    #[serde(rename = "displayValue", default)]
    pub display_value: bool,
    /// Module width as entered in the panel; kept as the raw numeric string
    /// so invalid input survives round-trips instead of being coerced.
    #[serde(rename = "barWidth", default = "default_bar_width")]
    pub bar_width: String,
    #[serde(rename = "errorCorrectionLevel", default)]
    pub error_correction_level: ErrorCorrection,
    #[serde(flatten)]
    pub spreadsheet: SpreadsheetOptions,
    #[serde(skip)]
    surface: Surface,
}

impl CodeElement {
    pub fn new(id: u32) -> Self {
        let mut base = ElementBase::new(id, "Barcode");
        base.width = 80.0;
        base.height = 80.0;
        CodeElement {
            base,
            content: String::new(),
            format: CodeFormat::default(),
            display_value: false,
            bar_width: default_bar_width(),
            error_correction_level: ErrorCorrection::default(),
            spreadsheet: SpreadsheetOptions::default(),
            surface: Surface::new(),
        }
    }

    /// Persisted element-type tag.
    pub fn element_type() -> &'static str {
        "barCode"
    }

    /// Panel fields, in panel order.
    pub fn properties() -> &'static [&'static str] {
        &[
            "x",
            "y",
            "height",
            "content",
            "format",
            "displayValue",
            "barWidth",
            "errorCorrectionLevel",
            "printIf",
            "removeEmptyElement",
            "spreadsheet_hide",
            "spreadsheet_column",
            "spreadsheet_colspan",
            "spreadsheet_addEmptyRow",
        ]
    }

    /// Codes resize vertically only; width always derives from content.
    pub fn sizers() -> &'static [Sizer] {
        &[Sizer::North, Sizer::South]
    }

    pub fn placement(&self) -> Placement {
        self.base.placement()
    }

    /// The rendered surface (blank until the first render).
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Post-deserialization hook: render once so a freshly loaded element
    /// shows its code. Skipped for empty content, where the blank canvas is
    /// the correct designer presentation.
    pub fn setup(&mut self) -> Option<RenderOutcome> {
        if self.content.is_empty() {
            return None;
        }
        Some(self.update_code())
    }

    /// Apply a property-panel change. Rendering-relevant fields trigger a
    /// re-render whose outcome is returned.
    pub fn set_property(
        &mut self,
        field: &str,
        value: PropertyValue,
    ) -> Result<Option<RenderOutcome>, ElementError> {
        let owned = match field {
            "content" => {
                self.content = expect_str(field, &value)?;
                true
            }
            "format" => {
                self.format = CodeFormat::from_name(&expect_str(field, &value)?);
                true
            }
            "displayValue" => {
                self.display_value = expect_bool(field, &value)?;
                true
            }
            "barWidth" => {
                // The panel may deliver the numeric field as either type.
                self.bar_width = match &value {
                    PropertyValue::Num(n) => n.to_string(),
                    _ => expect_str(field, &value)?,
                };
                true
            }
            "errorCorrectionLevel" => {
                let name = expect_str(field, &value)?;
                self.error_correction_level = ErrorCorrection::from_name(&name)
                    .ok_or_else(|| ElementError::invalid_value(field, "one of L, M, Q, H"))?;
                true
            }
            "spreadsheet_hide" => {
                self.spreadsheet.hide = expect_bool(field, &value)?;
                true
            }
            "spreadsheet_column" => {
                self.spreadsheet.column = expect_str(field, &value)?;
                true
            }
            "spreadsheet_colspan" => {
                self.spreadsheet.colspan = expect_str(field, &value)?;
                true
            }
            "spreadsheet_addEmptyRow" => {
                self.spreadsheet.add_empty_row = expect_bool(field, &value)?;
                true
            }
            _ => self.base.set_property(field, &value)?,
        };
        if !owned {
            return Err(ElementError::UnknownProperty(field.to_string()));
        }
        if RENDER_PROPERTIES.contains(&field) {
            return Ok(Some(self.update_code()));
        }
        Ok(None)
    }

    /// Re-render with the default renderers.
    pub fn update_code(&mut self) -> RenderOutcome {
        self.update_code_with(&BarRenderer, &QrMatrixRenderer)
    }

    /// Re-render with explicit renderers and write the resulting width back
    /// into the element geometry. On the matrix path the outcome width is
    /// the (square) box size, so width ends up equal to height.
    pub fn update_code_with(
        &mut self,
        oned: &dyn OneDimRenderer,
        matrix: &dyn MatrixRenderer,
    ) -> RenderOutcome {
        let plan = decide_render(&RenderConfig {
            content: &self.content,
            format: &self.format,
            display_value: self.display_value,
            bar_width: &self.bar_width,
            height: self.base.height,
            error_correction: self.error_correction_level,
        });
        let outcome = apply(&plan, &mut self.surface, oned, matrix);
        self.base.width = outcome.width;
        outcome
    }

    /// Field updates needed when a report parameter is renamed. The code
    /// content and the conditional-print expression can both reference
    /// parameters.
    pub fn rename_parameter(&self, old_name: &str, new_name: &str) -> Vec<FieldRewrite> {
        let mut rewrites = Vec::new();
        if let Some(rewrite) = rewrite_parameter_ref("content", &self.content, old_name, new_name)
        {
            rewrites.push(rewrite);
        }
        if let Some(rewrite) =
            rewrite_parameter_ref("printIf", &self.base.print_if, old_name, new_name)
        {
            rewrites.push(rewrite);
        }
        rewrites
    }
}

impl ElementMeta for CodeElement {
    fn label() -> &'static str {
        "Barcode"
    }

    fn editor_default() -> Self {
        let mut element = Self::new(0);
        // Example content that scans as-is, so a freshly dropped element
        // shows a real barcode instead of an empty box.
        element.content = "12345678".to_string();
        element
    }
}
