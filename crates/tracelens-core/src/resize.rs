//! Turns high-frequency container measurements into at most one committed
//! viewport size per settle period.
//!
//! Every measurement updates the display-only size immediately so the canvas
//! keeps tracking the container. Only changes that clear the significance
//! thresholds arm the settle timer; when it fires, the latest measurement is
//! checked again against the committed size before it reaches the store.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::ResizeConfig;
use crate::store::ViewportStore;
use crate::timer::SettleTimer;
use crate::viewport::{Size, ViewportPatch};

/// Whether moving from `committed` to `candidate` warrants a re-render.
pub fn is_significant(config: &ResizeConfig, committed: Size, candidate: Size) -> bool {
    let committed_area = committed.area();
    let area_delta = candidate.area().abs_diff(committed_area);
    let area_threshold = (config.area_fraction * committed_area as f64)
        .round()
        .max(config.min_area_delta as f64) as u64;

    let min_side = committed.width.min(committed.height);
    let dim_threshold = (config.dimension_fraction * min_side as f64)
        .round()
        .max(config.min_dimension_delta as f64) as u32;

    area_delta >= area_threshold
        || candidate.width.abs_diff(committed.width) >= dim_threshold
        || candidate.height.abs_diff(committed.height) >= dim_threshold
}

/// What a single measurement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Same as the previous measurement.
    Unchanged,
    /// The container still reports the placeholder size; nothing committed.
    AwaitingMeasurement,
    /// First real measurement, committed without delay.
    Committed(Size),
    /// Below threshold: display size only, pending commit cancelled.
    Cosmetic,
    /// Significant: commit scheduled once the size settles.
    Scheduled,
}

pub struct ResizeCoordinator {
    config: ResizeConfig,
    display_size: Option<Size>,
    settle: SettleTimer,
    measured: bool,
}

impl ResizeCoordinator {
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            config,
            display_size: None,
            settle: SettleTimer::new(),
            measured: false,
        }
    }

    /// Size the canvas buffer should use right now, committed or not.
    pub fn display_size(&self) -> Option<Size> {
        self.display_size
    }

    pub fn has_pending_commit(&self) -> bool {
        self.settle.is_armed()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    /// Feed one container measurement. Safe to call every frame.
    pub fn observe(
        &mut self,
        now: Instant,
        measured: Size,
        store: &mut ViewportStore,
    ) -> ResizeOutcome {
        if self.display_size == Some(measured) {
            return ResizeOutcome::Unchanged;
        }
        self.display_size = Some(measured);

        if !self.measured {
            if measured == Size::PLACEHOLDER {
                return ResizeOutcome::AwaitingMeasurement;
            }
            self.measured = true;
            let size = measured.clamped();
            info!(width = size.width, height = size.height, "Initial canvas size");
            store.update_viewport(ViewportPatch::size(size));
            return ResizeOutcome::Committed(size);
        }

        let committed = store.viewport().size();
        if is_significant(&self.config, committed, measured.clamped()) {
            self.settle.arm(now, self.config.settle_delay());
            ResizeOutcome::Scheduled
        } else {
            self.settle.cancel();
            ResizeOutcome::Cosmetic
        }
    }

    /// Commit the settled size if the timer has expired and the size still
    /// differs significantly from what is committed.
    pub fn tick(&mut self, now: Instant, store: &mut ViewportStore) -> Option<Size> {
        if !self.settle.fire(now) {
            return None;
        }
        let candidate = self.display_size?.clamped();
        let committed = store.viewport().size();
        if !is_significant(&self.config, committed, candidate) {
            debug!(
                width = candidate.width,
                height = candidate.height,
                "Settled size within threshold, nothing to commit"
            );
            return None;
        }
        info!(
            width = candidate.width,
            height = candidate.height,
            "Committing resized canvas"
        );
        store.update_viewport(ViewportPatch::size(candidate));
        Some(candidate)
    }
}
