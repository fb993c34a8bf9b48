//! End-to-end element behavior: property changes through to rendered
//! surfaces, using the real renderers.

use pretty_assertions::assert_eq;

use cartela::format::DEFAULT_QR_CONTENT;
use cartela::{CodeElement, CodeFormat, ErrorCorrection, PropertyValue};

fn element_with(format: &str, content: &str) -> CodeElement {
    let mut element = CodeElement::new(1);
    element
        .set_property("format", PropertyValue::from(format))
        .unwrap();
    element
        .set_property("content", PropertyValue::from(content))
        .unwrap();
    element
}

#[test]
fn invalid_ean13_renders_placeholder() {
    let mut element = CodeElement::new(1);
    element
        .set_property("format", PropertyValue::from("EAN13"))
        .unwrap();
    let outcome = element
        .set_property("content", PropertyValue::from("123"))
        .unwrap()
        .expect("content change re-renders");

    assert!(outcome.used_fallback);
    assert_eq!(outcome.effective_content, "5901234123457");
    assert!(!element.surface().is_blank());
    assert_eq!(element.placement().width, outcome.width);
}

#[test]
fn code128_renders_literal_content() {
    let element = element_with("CODE128", "ABC123");
    assert!(!element.surface().is_blank());
    assert_eq!(
        element.placement().width,
        element.surface().intrinsic_width() as f64
    );
}

#[test]
fn qr_with_empty_content_renders_default_url() {
    let mut element = CodeElement::new(1);
    let outcome = element
        .set_property("format", PropertyValue::from("QRCode"))
        .unwrap()
        .expect("format change re-renders");

    assert_eq!(outcome.effective_content, DEFAULT_QR_CONTENT);
    assert!(!element.surface().is_blank());
    assert_eq!(element.placement().width, element.placement().height);
}

#[test]
fn qr_geometry_follows_height() {
    let mut element = CodeElement::new(1);
    element
        .set_property("format", PropertyValue::from("QRCode"))
        .unwrap();
    element
        .set_property("height", PropertyValue::Num(120.0))
        .unwrap();
    assert_eq!(element.placement().width, 120.0);
    assert_eq!(element.surface().style_size(), Some((120, 120)));
}

#[test]
fn template_reference_renders_placeholder_without_error() {
    let element = element_with("CODE39", "ref: ${order_id}");
    // Placeholder bars on the surface, user content untouched.
    assert!(!element.surface().is_blank());
    assert_eq!(element.content, "ref: ${order_id}");
}

#[test]
fn unknown_format_degrades_to_blank_surface() {
    let element = element_with("CODE93", "whatever");
    assert!(element.surface().is_blank());
    assert_eq!(element.placement().width, 0.0);
}

#[test]
fn every_one_dim_format_renders_its_placeholder() {
    for format in CodeFormat::one_dim_formats() {
        let mut element = CodeElement::new(1);
        element
            .set_property("format", PropertyValue::from(format.name()))
            .unwrap();
        // Content that no 1D symbology accepts forces the fallback path.
        let outcome = element
            .set_property("content", PropertyValue::from("\u{0}"))
            .unwrap()
            .expect("content change re-renders");
        assert!(outcome.used_fallback, "{format}");
        assert!(!element.surface().is_blank(), "{format}");
        assert!(element.placement().width > 0.0, "{format}");
    }
}

#[test]
fn display_value_keeps_total_height() {
    let mut element = element_with("CODE128", "HELLO");
    assert_eq!(element.surface().intrinsic_height(), 80);
    element
        .set_property("displayValue", PropertyValue::Bool(true))
        .unwrap();
    // The bars shrink to make room for the text line below them.
    assert_eq!(element.surface().intrinsic_height(), 80);
    let label_has_ink =
        (58..80).any(|y| (0..element.surface().intrinsic_width()).any(|x| element.surface().pixel(x, y)));
    assert!(label_has_ink);
}

#[test]
fn bar_width_scales_surface() {
    let narrow = element_with("CODE128", "12345678");
    let mut wide = element_with("CODE128", "12345678");
    wide.set_property("barWidth", PropertyValue::from("4"))
        .unwrap();
    assert_eq!(
        wide.surface().intrinsic_width(),
        narrow.surface().intrinsic_width() * 2
    );
}

#[test]
fn error_correction_level_changes_qr_density() {
    let make = |level: &str| {
        let mut element = CodeElement::new(1);
        element
            .set_property("errorCorrectionLevel", PropertyValue::from(level))
            .unwrap();
        element
            .set_property("format", PropertyValue::from("QRCode"))
            .unwrap();
        element
            .set_property("content", PropertyValue::from("0123456789"))
            .unwrap();
        element.surface().intrinsic_width()
    };
    // Higher correction levels need more modules for the same content.
    assert!(make("H") >= make("L"));
}

#[test]
fn serde_round_trip_preserves_element() {
    let mut element = CodeElement::new(42);
    element
        .set_property("format", PropertyValue::from("MSI1110"))
        .unwrap();
    element
        .set_property("content", PropertyValue::from("4711"))
        .unwrap();
    element
        .set_property("printIf", PropertyValue::from("${show_code}"))
        .unwrap();

    let json = serde_json::to_string(&element).unwrap();
    let mut back: CodeElement = serde_json::from_str(&json).unwrap();
    assert_eq!(back.base, element.base);
    assert_eq!(back.content, element.content);
    assert_eq!(back.format, CodeFormat::Msi1110);

    // The surface is not persisted; setup re-renders it.
    assert!(back.surface().is_blank());
    let outcome = back.setup().expect("non-empty content renders on setup");
    assert!(!outcome.used_fallback);
    assert!(!back.surface().is_blank());
}

#[test]
fn unknown_format_tag_survives_round_trip() {
    let json = r#"{
        "id": 9,
        "name": "Barcode",
        "x": 10.0,
        "y": 20.0,
        "width": 80.0,
        "height": 80.0,
        "content": "abc",
        "format": "datamatrix",
        "displayValue": false,
        "barWidth": "2",
        "errorCorrectionLevel": "Q"
    }"#;
    let element: CodeElement = serde_json::from_str(json).unwrap();
    assert_eq!(element.format, CodeFormat::Other("datamatrix".to_string()));
    assert_eq!(element.error_correction_level, ErrorCorrection::Q);

    let out = serde_json::to_value(&element).unwrap();
    assert_eq!(out["format"], "datamatrix");
}

#[test]
fn png_export_of_rendered_element() {
    let element = element_with("EAN8", "96385074");
    let png = element.surface().to_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");
}
