//! # Cartela - Report Barcode/QR Element
//!
//! Cartela is a Rust library implementing the barcode element of a report
//! designer: the element state, its property-panel plumbing, and the
//! renderer that keeps an owned preview surface in sync with that state.
//! It provides:
//!
//! - **Element model**: barcode/QR element with persisted-format field names
//! - **Render decisions**: pure configuration-to-plan mapping with
//!   per-format fallback content
//! - **Renderers**: 1D symbologies (barcoders plus local MSI/pharmacode
//!   encoders) and QR codes (qrcode crate)
//! - **Preview surface**: monochrome raster with PNG export
//!
//! ## Quick Start
//!
//! ```
//! use cartela::{CodeElement, PropertyValue};
//!
//! // Drop a new barcode element on the canvas.
//! let mut element = CodeElement::new(1);
//!
//! // Property changes re-render the element's surface; the rendered
//! // width is written back into the element geometry.
//! let outcome = element
//!     .set_property("content", PropertyValue::from("ABC-123"))?
//!     .expect("content is a rendering property");
//! assert!(!outcome.used_fallback);
//! assert_eq!(element.placement().width, outcome.width);
//!
//! // Invalid content degrades to placeholder content, never an error.
//! element.set_property("format", PropertyValue::from("EAN13"))?;
//! let outcome = element
//!     .set_property("content", PropertyValue::from("123"))?
//!     .expect("content is a rendering property");
//! assert!(outcome.used_fallback);
//!
//! let png = element.surface().to_png().map_err(|e| e.to_string())?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`element`] | Element model and property-panel plumbing |
//! | [`format`] | Symbology formats and fallback content |
//! | [`plan`] | Pure render decision procedure |
//! | [`render`] | Renderer traits, adapters, and the surface |
//! | [`sym`] | Local module encoders (MSI, pharmacode) |
//! | [`error`] | Error types |

pub mod element;
pub mod error;
pub mod format;
pub mod plan;
pub mod render;
pub mod sym;

// Re-exports for convenience
pub use element::{CodeElement, ElementMeta, FieldRewrite, PropertyValue, Sizer};
pub use error::{ElementError, RenderError};
pub use format::{CodeFormat, ErrorCorrection};
pub use plan::{RenderPlan, decide_render};
pub use render::{RenderOutcome, Surface};
