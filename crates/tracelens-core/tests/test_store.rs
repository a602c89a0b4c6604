mod common;

use tracelens_core::render::{AmplitudeScaling, ColormapType, RenderMode, WigglePatch};
use tracelens_core::store::{DataSource, StoreEvent, ViewportStore};
use tracelens_core::viewport::{Size, Viewport, ViewportPatch};

use common::measured_store;

#[test]
fn test_negative_start_trace_is_clamped() {
    let mut store = ViewportStore::default();
    store.update_viewport(ViewportPatch::default().with_start_trace(-5));
    assert_eq!(store.viewport().start_trace(), 0);
}

#[test]
fn test_partial_update_keeps_other_fields() {
    let mut store = measured_store();
    store.update_viewport(ViewportPatch::trace_window(1200, 250));

    let vp = store.viewport();
    assert_eq!(vp.start_trace(), 1200);
    assert_eq!(vp.trace_count(), 250);
    assert_eq!(vp.size(), Size::new(800, 600));
}

#[test]
fn test_zero_trace_count_and_tiny_size_are_clamped() {
    let mut store = measured_store();
    store.update_viewport(ViewportPatch {
        trace_count: Some(0),
        width: Some(40),
        height: Some(99),
        ..ViewportPatch::default()
    });

    let vp = store.viewport();
    assert_eq!(vp.trace_count(), 1);
    assert_eq!(vp.width(), 100);
    assert_eq!(vp.height(), 100);
}

#[test]
fn test_trace_window_is_bounded_by_dataset() {
    let mut store = measured_store();
    store.update_viewport(ViewportPatch::trace_window(9_900, 500));
    assert_eq!(store.viewport().start_trace(), 9_900);
    assert_eq!(store.viewport().trace_count(), 100);
}

#[test]
fn test_new_source_reclamps_window() {
    let mut store = measured_store();
    store.update_viewport(ViewportPatch::trace_window(5_000, 500));
    store.set_source(Some(DataSource {
        file_path: "/data/short.sgy".into(),
        total_traces: Some(300),
    }));
    assert_eq!(store.viewport().start_trace(), 299);
    assert_eq!(store.viewport().trace_count(), 1);
}

#[test]
fn test_subscribers_see_each_effective_change() {
    let mut store = measured_store();
    let sub = store.subscribe();

    store.set_render_mode(RenderMode::Wiggle);
    store.set_colormap(ColormapType::Viridis);
    store.update_viewport(ViewportPatch::default().with_start_trace(10));

    let events = sub.drain();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], StoreEvent::RenderModeChanged(RenderMode::Wiggle));
    assert_eq!(events[1], StoreEvent::ColormapChanged(ColormapType::Viridis));
    assert!(matches!(events[2], StoreEvent::ViewportChanged(vp) if vp.start_trace() == 10));
}

#[test]
fn test_setting_equal_value_is_silent() {
    let mut store = measured_store();
    let sub = store.subscribe();
    let revision = store.revision();

    store.set_render_mode(store.render_mode());
    store.set_colormap(store.colormap());
    store.update_viewport(ViewportPatch::size(Size::new(800, 600)));
    store.set_is_rendering(false);
    store.set_current_image(None);

    assert!(sub.drain().is_empty());
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_dropped_subscription_is_pruned() {
    let mut store = measured_store();
    let sub = store.subscribe();
    drop(sub);
    // Sending to a closed channel must not panic or stall.
    store.set_render_mode(RenderMode::Wiggle);
    assert_eq!(store.render_mode(), RenderMode::Wiggle);
}

#[test]
fn test_scaling_is_replaced_and_normalized() {
    let mut store = ViewportStore::default();
    store.set_amplitude_scaling(AmplitudeScaling::Percentile { percentile: 1.7 });
    assert_eq!(
        *store.amplitude_scaling(),
        AmplitudeScaling::Percentile { percentile: 1.0 }
    );

    store.set_amplitude_scaling(AmplitudeScaling::PerTrace {
        window_size: Some(0),
    });
    assert_eq!(
        *store.amplitude_scaling(),
        AmplitudeScaling::PerTrace { window_size: None }
    );
}

#[test]
fn test_wiggle_patch_merges_and_clamps_width() {
    let mut store = ViewportStore::default();
    store.set_wiggle_config(&WigglePatch {
        line_width: Some(-2.0),
        line_color: Some([200, 10, 10]),
        ..WigglePatch::default()
    });

    let wiggle = store.wiggle_config();
    assert_eq!(wiggle.line_width, 0.0);
    assert_eq!(wiggle.line_color, [200, 10, 10]);
    assert!(wiggle.fill_positive);
}

#[test]
fn test_default_viewport_is_placeholder() {
    let store = ViewportStore::new(Viewport::default());
    assert!(store.viewport().is_placeholder_size());
    assert!(!store.is_rendering());
    assert!(store.current_image().is_none());
}
