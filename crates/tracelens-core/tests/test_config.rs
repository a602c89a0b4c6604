use std::time::Duration;

use tracelens_core::config::ViewerConfig;
use tracelens_core::error::TraceLensError;
use tracelens_core::view::CanvasView;

#[test]
fn test_defaults() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.render.first_debounce(), Duration::from_millis(250));
    assert_eq!(cfg.render.debounce(), Duration::from_millis(600));
    assert_eq!(cfg.resize.settle_delay(), Duration::from_millis(400));
    assert_eq!(cfg.resize.min_area_delta, 2000);
    assert_eq!(cfg.resize.min_dimension_delta, 6);
    assert_eq!(cfg.zoom.min_zoom, 0.1);
    assert_eq!(cfg.zoom.max_zoom, 10.0);
    assert_eq!(cfg.notifications.lifetime(), Duration::from_secs(6));
}

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = ViewerConfig::from_toml_str("").expect("parse");
    assert_eq!(cfg, ViewerConfig::default());
}

#[test]
fn test_partial_file_overrides_only_named_keys() {
    let cfg = ViewerConfig::from_toml_str(
        r#"
[render]
debounce_ms = 300

[zoom]
max_zoom = 4.0
"#,
    )
    .expect("parse");

    assert_eq!(cfg.render.debounce(), Duration::from_millis(300));
    assert_eq!(cfg.render.first_debounce(), Duration::from_millis(250));
    assert_eq!(cfg.zoom.max_zoom, 4.0);
    assert_eq!(cfg.zoom.min_zoom, 0.1);
    assert_eq!(cfg.resize, Default::default());
}

#[test]
fn test_invalid_file_is_rejected() {
    let err = ViewerConfig::from_toml_str("[render]\ndebounce_ms = \"soon\"\n").unwrap_err();
    assert!(matches!(err, TraceLensError::Config(_)));
    assert!(err.to_string().starts_with("Invalid viewer config"));
}

#[test]
fn test_inverted_zoom_bounds_are_rejected() {
    let err = ViewerConfig::from_toml_str("[zoom]\nmin_zoom = 5.0\nmax_zoom = 2.0\n").unwrap_err();
    assert!(matches!(err, TraceLensError::ConfigValue(_)));
    assert!(err.to_string().contains("min_zoom"), "got: {err}");
}

#[test]
fn test_non_finite_zoom_values_are_rejected() {
    for text in [
        "[zoom]\nmax_zoom = nan\n",
        "[zoom]\nmin_zoom = -inf\n",
        "[zoom]\nzoom_in_factor = nan\n",
        "[zoom]\nzoom_out_factor = 0.0\n",
    ] {
        let err = ViewerConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, TraceLensError::ConfigValue(_)), "{text}: {err}");
    }
}

#[test]
fn test_validated_zoom_config_keeps_wheel_in_bounds() {
    let cfg = ViewerConfig::from_toml_str("[zoom]\nmin_zoom = 0.5\nmax_zoom = 2.0\n").expect("parse");
    let mut canvas = CanvasView::new(cfg.zoom);
    for _ in 0..50 {
        canvas.on_wheel(1.0);
    }
    assert_eq!(canvas.view().zoom, 2.0);
    for _ in 0..50 {
        canvas.on_wheel(-1.0);
    }
    assert_eq!(canvas.view().zoom, 0.5);
}
