//! Report elements and the property-panel plumbing shared between them.
//!
//! Field names in `set_property`, `properties()`, and serde attributes are
//! the persisted report-definition names (camelCase where the original
//! definitions use it), not Rust identifiers.

use serde::{Deserialize, Serialize};

use crate::error::ElementError;

pub mod code;

pub use code::CodeElement;

/// A value arriving from the property panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Num(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            PropertyValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Resize handle exposed on the design canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizer {
    North,
    East,
    South,
    West,
}

/// Geometry of an element on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A pending field update produced by a parameter rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRewrite {
    pub field: &'static str,
    pub value: String,
}

/// If `text` references the parameter `old_name`, produce the rewrite that
/// points it at `new_name` instead.
pub(crate) fn rewrite_parameter_ref(
    field: &'static str,
    text: &str,
    old_name: &str,
    new_name: &str,
) -> Option<FieldRewrite> {
    let old_ref = format!("${{{old_name}}}");
    if !text.contains(&old_ref) {
        return None;
    }
    let new_ref = format!("${{{new_name}}}");
    Some(FieldRewrite {
        field,
        value: text.replace(&old_ref, &new_ref),
    })
}

/// Element metadata for the designer palette.
pub trait ElementMeta {
    /// Human-readable element name shown in the palette.
    fn label() -> &'static str;

    /// A ready-to-use instance for drag-and-drop insertion.
    fn editor_default() -> Self;
}

/// State shared by every element type: identity, geometry, and the
/// conditional-print fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementBase {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(rename = "printIf", default)]
    pub print_if: String,
    #[serde(rename = "removeEmptyElement", default)]
    pub remove_empty_element: bool,
}

impl ElementBase {
    pub fn new(id: u32, name: &str) -> Self {
        ElementBase {
            id,
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            print_if: String::new(),
            remove_empty_element: false,
        }
    }

    pub fn placement(&self) -> Placement {
        Placement {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Assign a panel value to one of the shared fields. Returns `Ok(false)`
    /// when the field is not a shared one, leaving dispatch to the element.
    pub fn set_property(&mut self, field: &str, value: &PropertyValue) -> Result<bool, ElementError> {
        match field {
            "x" => self.x = expect_num(field, value)?,
            "y" => self.y = expect_num(field, value)?,
            "width" => self.width = expect_num(field, value)?,
            "height" => self.height = expect_num(field, value)?,
            "printIf" => self.print_if = expect_str(field, value)?,
            "removeEmptyElement" => self.remove_empty_element = expect_bool(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

pub(crate) fn expect_num(field: &str, value: &PropertyValue) -> Result<f64, ElementError> {
    value
        .as_num()
        .ok_or_else(|| ElementError::invalid_value(field, "number"))
}

pub(crate) fn expect_str(field: &str, value: &PropertyValue) -> Result<String, ElementError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ElementError::invalid_value(field, "string"))
}

pub(crate) fn expect_bool(field: &str, value: &PropertyValue) -> Result<bool, ElementError> {
    value
        .as_bool()
        .ok_or_else(|| ElementError::invalid_value(field, "boolean"))
}
