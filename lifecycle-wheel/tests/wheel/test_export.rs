//! Static export

use lifecycle_wheel::export::{export, ExportFormat};
use lifecycle_wheel::markup::CommonMarkRenderer;
use lifecycle_wheel::WheelError;

#[test]
fn test_html_page_with_selection() {
    let html = export(ExportFormat::Html, Some(3), &CommonMarkRenderer::new()).unwrap();
    assert!(html.contains("<h1>Research Life Cycle</h1>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<h2>Collection, Storage and Documentation</h2>"));
    assert!(html.contains(
        "<p><strong>Description:</strong> Gather data from experiments, surveys, or external sources.</p>"
    ));
    assert!(html.contains("<p>Lorem ipsum dolor sit amet...</p>"));
}

#[test]
fn test_html_page_without_selection_has_no_panel() {
    let html = export(ExportFormat::Html, None, &CommonMarkRenderer::new()).unwrap();
    assert!(!html.contains("detail-panel"));
}

#[test]
fn test_json_geometry() {
    let json = export(ExportFormat::Json, None, &CommonMarkRenderer::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let wedges = value["scene"]["wedges"].as_array().unwrap();
    assert_eq!(wedges.len(), 8);
    assert_eq!(wedges[0]["color"], "#4e79a7");
    assert_eq!(wedges[0]["emphasis"], "none");
    assert_eq!(value["phases"][2]["id"], 3);
}

#[test]
fn test_unknown_phase_is_reported() {
    let err = export(ExportFormat::Svg, Some(0), &CommonMarkRenderer::new()).unwrap_err();
    assert!(matches!(err, WheelError::UnknownPhase(0)));
    assert_eq!(err.to_string(), "Unknown phase id: 0");
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wheel.svg");
    let svg = export(ExportFormat::Svg, None, &CommonMarkRenderer::new()).unwrap();
    std::fs::write(&path, &svg).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.trim_end().ends_with("</svg>"));
}
