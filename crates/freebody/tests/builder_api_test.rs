//! Integration tests for the FreebodyBuilder API and the end-to-end render.

use float_cmp::assert_approx_eq;

use freebody::{
    FreebodyBuilder, FreebodyError, InclineLayout, RenderOutcome, UNSUPPORTED_SCENE_MESSAGE,
    config::{AppConfig, LayoutConfig},
    draw::{Primitive, PrimitiveKind},
    geometry::{Size, normalize_degrees},
    surface::PanelContent,
};

const INCLINE_SCENE: &str = r#"{
    "environment": {"type": "inclined_plane", "angle": 30, "friction": true},
    "objects": [{"id": "block1", "mass": 2, "unit": "kg"}],
    "formulas": ["F=ma"]
}"#;

#[test]
fn test_end_to_end_inclined_plane() {
    let builder = FreebodyBuilder::default();
    let scene = builder.parse(INCLINE_SCENE).expect("Failed to parse scene");

    let size = Size::new(800.0, 600.0);
    let layout = InclineLayout::compute(size, 30.0, &LayoutConfig::default()).unwrap();
    assert_approx_eq!(f32, layout.anchor().x(), 400.0, epsilon = 1e-3);
    assert_approx_eq!(f32, layout.anchor().y(), 420.0, epsilon = 1e-3);
    assert_approx_eq!(f32, layout.width(), 259.8, epsilon = 0.01);

    let mut stage = builder.stage(size).expect("Failed to build stage");
    let outcome = stage.show(scene).expect("Failed to render");
    assert_eq!(outcome, RenderOutcome::Drawn);

    let arrows: Vec<_> = stage
        .canvas()
        .primitives()
        .iter()
        .filter_map(Primitive::as_arrow)
        .collect();
    assert_eq!(arrows.len(), 3);

    let expected_directions = [90.0f32, -60.0, 210.0];
    for (arrow, expected) in arrows.iter().zip(expected_directions) {
        assert_approx_eq!(f32, arrow.start().x(), layout.block_center().x(), epsilon = 1e-3);
        assert_approx_eq!(f32, arrow.start().y(), layout.block_center().y(), epsilon = 1e-3);
        assert_approx_eq!(
            f32,
            normalize_degrees(arrow.direction()),
            normalize_degrees(expected),
            epsilon = 1e-2
        );
    }

    let labels: Vec<&str> = stage
        .canvas()
        .primitives_of(PrimitiveKind::Text)
        .filter_map(Primitive::as_text)
        .map(|text| text.content())
        .collect();
    assert_eq!(labels, ["mg", "N", "F_tr"]);

    assert_eq!(
        *stage.panel().content(),
        PanelContent::Markup("F=ma".to_string())
    );
}

#[test]
fn test_render_svg_output() {
    let builder = FreebodyBuilder::new(AppConfig::default());
    let scene = builder.parse(INCLINE_SCENE).unwrap();

    let diagram = builder.render(&scene, Size::new(800.0, 600.0)).unwrap();
    let svg = diagram.svg();

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("<rect"));
    assert_eq!(svg.matches("<marker").count(), 3);
    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<text").count(), 3);
    assert!(svg.contains("mg"));
    assert!(svg.contains("F_tr"));
    assert_eq!(diagram.output().as_str(), "F=ma");
}

#[test]
fn test_unknown_scene_type() {
    let builder = FreebodyBuilder::default();
    let scene = builder
        .parse(r#"{"environment": {"type": "unknown"}, "formulas": ["x"]}"#)
        .unwrap();

    let diagram = builder.render(&scene, Size::new(800.0, 600.0)).unwrap();

    assert_eq!(diagram.outcome(), RenderOutcome::Unsupported);
    assert_eq!(
        *diagram.output(),
        PanelContent::Text(UNSUPPORTED_SCENE_MESSAGE.to_string())
    );
    assert!(!diagram.svg().contains("data-layer"));
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = FreebodyBuilder::default();
    let result = builder.parse("{\"environment\": ");
    assert!(matches!(result, Err(FreebodyError::Scene { .. })));
}

#[test]
fn test_degenerate_angle_is_render_error() {
    let builder = FreebodyBuilder::default();
    let scene = builder
        .parse(r#"{"environment": {"type": "inclined_plane", "angle": 90}}"#)
        .unwrap();

    let result = builder.render(&scene, Size::new(800.0, 600.0));
    assert!(matches!(result, Err(FreebodyError::Render(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = FreebodyBuilder::default();

    let first = builder.parse(INCLINE_SCENE).unwrap();
    let second = builder
        .parse(r#"{"environment": {"type": "inclined_plane", "angle": 45}, "formulas": ["A", "B"]}"#)
        .unwrap();

    let svg1 = builder.render(&first, Size::new(800.0, 600.0)).unwrap();
    let svg2 = builder.render(&second, Size::new(800.0, 600.0)).unwrap();

    assert!(svg1.svg().contains("<svg"));
    assert_eq!(svg2.output().as_str(), "A<br>B");
    assert_ne!(svg1.svg(), svg2.svg());
}
