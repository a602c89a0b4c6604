mod common;

use tracelens_core::config::ResizeConfig;
use tracelens_core::resize::{is_significant, ResizeCoordinator, ResizeOutcome};
use tracelens_core::scheduler::RenderScheduler;
use tracelens_core::store::{DataSource, ViewportStore};
use tracelens_core::viewport::Size;

use common::{measured_store, ms, t0, RecordingTransport};

// ---------------------------------------------------------------------------
// Significance thresholds
// ---------------------------------------------------------------------------

#[test]
fn test_tiny_resize_is_not_significant() {
    let cfg = ResizeConfig::default();
    assert!(!is_significant(&cfg, Size::new(800, 600), Size::new(802, 601)));
}

#[test]
fn test_large_resize_is_significant() {
    let cfg = ResizeConfig::default();
    assert!(is_significant(&cfg, Size::new(800, 600), Size::new(900, 700)));
}

#[test]
fn test_single_axis_change_at_dimension_threshold() {
    let cfg = ResizeConfig::default();
    // A thin strip: the area change stays under the 2000 px^2 floor, so only
    // the 6 px per-axis floor can make the change significant.
    let committed = Size::new(2000, 100);
    assert!(!is_significant(&cfg, committed, Size::new(2005, 100)));
    assert!(is_significant(&cfg, committed, Size::new(2006, 100)));
}

#[test]
fn test_area_threshold_scales_with_large_canvas() {
    let cfg = ResizeConfig::default();
    // 2000 * 2000 * 0.005 = 20_000 px^2 area threshold, 16 px per axis.
    let committed = Size::new(2000, 2000);
    assert!(!is_significant(&cfg, committed, Size::new(2004, 2004)));
    assert!(is_significant(&cfg, committed, Size::new(2016, 2000)));
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

fn coordinator() -> ResizeCoordinator {
    ResizeCoordinator::new(ResizeConfig::default())
}

#[test]
fn test_placeholder_measurement_defers_initial_commit() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();

    let outcome = resize.observe(now, Size::PLACEHOLDER, &mut store);
    assert_eq!(outcome, ResizeOutcome::AwaitingMeasurement);
    assert!(store.viewport().is_placeholder_size());

    let outcome = resize.observe(now, Size::new(1024, 700), &mut store);
    assert_eq!(outcome, ResizeOutcome::Committed(Size::new(1024, 700)));
    assert_eq!(store.viewport().size(), Size::new(1024, 700));
}

#[test]
fn test_repeated_measurement_is_a_no_op() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    assert_eq!(
        resize.observe(now + ms(16), Size::new(800, 600), &mut store),
        ResizeOutcome::Unchanged
    );
}

#[test]
fn test_cosmetic_resize_updates_display_only() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    let outcome = resize.observe(now + ms(16), Size::new(802, 601), &mut store);
    assert_eq!(outcome, ResizeOutcome::Cosmetic);
    assert_eq!(resize.display_size(), Some(Size::new(802, 601)));
    assert_eq!(store.viewport().size(), Size::new(800, 600));
    assert!(!resize.has_pending_commit());

    assert_eq!(resize.tick(now + ms(1000), &mut store), None);
    assert_eq!(store.viewport().size(), Size::new(800, 600));
}

#[test]
fn test_significant_resize_commits_after_settle() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    let outcome = resize.observe(now, Size::new(900, 700), &mut store);
    assert_eq!(outcome, ResizeOutcome::Scheduled);
    assert_eq!(resize.display_size(), Some(Size::new(900, 700)));

    assert_eq!(resize.tick(now + ms(399), &mut store), None);
    assert_eq!(store.viewport().size(), Size::new(800, 600));

    assert_eq!(
        resize.tick(now + ms(400), &mut store),
        Some(Size::new(900, 700))
    );
    assert_eq!(store.viewport().size(), Size::new(900, 700));
}

#[test]
fn test_drag_resize_commits_latest_measurement_once() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    let mut t = now;
    for step in 1..=20u32 {
        t += ms(16);
        resize.observe(t, Size::new(800 + step * 10, 600 + step * 5), &mut store);
        assert_eq!(resize.tick(t, &mut store), None);
    }

    let committed = resize.tick(t + ms(400), &mut store);
    assert_eq!(committed, Some(Size::new(1000, 700)));
    assert_eq!(resize.tick(t + ms(2000), &mut store), None);
}

#[test]
fn test_oscillating_back_cancels_pending_commit() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    assert_eq!(
        resize.observe(now + ms(10), Size::new(900, 700), &mut store),
        ResizeOutcome::Scheduled
    );
    assert_eq!(
        resize.observe(now + ms(20), Size::new(801, 600), &mut store),
        ResizeOutcome::Cosmetic
    );
    assert!(!resize.has_pending_commit());
    assert_eq!(resize.tick(now + ms(800), &mut store), None);
    assert_eq!(store.viewport().size(), Size::new(800, 600));
}

#[test]
fn test_committed_size_is_clamped_to_minimum() {
    let now = t0();
    let mut store = ViewportStore::default();
    let mut resize = coordinator();
    resize.observe(now, Size::new(800, 600), &mut store);

    resize.observe(now, Size::new(40, 30), &mut store);
    resize.tick(now + ms(400), &mut store);
    assert_eq!(store.viewport().size(), Size::new(100, 100));
    assert_eq!(resize.display_size(), Some(Size::new(40, 30)));
}

// ---------------------------------------------------------------------------
// Resize feeding the scheduler
// ---------------------------------------------------------------------------

#[test]
fn test_cosmetic_resize_never_schedules_render() {
    let now = t0();
    let mut store = measured_store();
    let transport = RecordingTransport::default();
    let mut scheduler = RenderScheduler::new(common::config().render, &mut store);
    let mut resize = coordinator();

    resize.observe(now, Size::new(800, 600), &mut store);
    scheduler.tick(now, &mut store, &transport);
    scheduler.tick(now + ms(250), &mut store, &transport);
    assert_eq!(transport.count(), 1);

    let later = now + ms(1000);
    resize.observe(later, Size::new(802, 601), &mut store);
    resize.tick(later + ms(400), &mut store);
    scheduler.tick(later + ms(400), &mut store, &transport);
    assert!(!scheduler.is_pending());
    scheduler.tick(later + ms(5000), &mut store, &transport);
    assert_eq!(transport.count(), 1);
}

#[test]
fn test_significant_resize_schedules_render() {
    let now = t0();
    let mut store = measured_store();
    let transport = RecordingTransport::default();
    let mut scheduler = RenderScheduler::new(common::config().render, &mut store);
    let mut resize = coordinator();

    resize.observe(now, Size::new(800, 600), &mut store);
    scheduler.tick(now, &mut store, &transport);
    scheduler.tick(now + ms(250), &mut store, &transport);

    let later = now + ms(1000);
    resize.observe(later, Size::new(900, 700), &mut store);
    resize.tick(later + ms(400), &mut store);
    scheduler.tick(later + ms(400), &mut store, &transport);
    assert!(scheduler.is_pending());

    scheduler.tick(later + ms(1000), &mut store, &transport);
    assert_eq!(transport.count(), 2);
    assert_eq!(transport.last().viewport.size(), Size::new(900, 700));
}

#[test]
fn test_first_real_measurement_starts_first_render() {
    let now = t0();
    let mut store = ViewportStore::default();
    store.set_source(Some(DataSource {
        file_path: "/data/line_042.sgy".into(),
        total_traces: None,
    }));
    let transport = RecordingTransport::default();
    let mut scheduler = RenderScheduler::new(common::config().render, &mut store);
    let mut resize = coordinator();

    resize.observe(now, Size::PLACEHOLDER, &mut store);
    scheduler.tick(now + ms(5000), &mut store, &transport);
    assert_eq!(transport.count(), 0);

    let measured_at = now + ms(6000);
    resize.observe(measured_at, Size::new(1280, 720), &mut store);
    scheduler.tick(measured_at, &mut store, &transport);
    scheduler.tick(measured_at + ms(250), &mut store, &transport);
    assert_eq!(transport.count(), 1);
    assert_eq!(transport.last().viewport.size(), Size::new(1280, 720));
}
