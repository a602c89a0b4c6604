//! Decides when the renderer is called and which responses reach the screen.
//!
//! Changes to the render key restart a trailing-edge debounce. When it
//! expires the scheduler snapshots the store, tags the request with the next
//! sequence number and hands it to the transport. In-flight calls are never
//! cancelled: a response is applied only if its sequence number is still the
//! latest one issued, everything older is dropped on arrival.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::RenderTiming;
use crate::error::TraceLensError;
use crate::render::{decode_rendered, RenderKey, RenderRequest};
use crate::store::{StoreEvent, StoreSubscription, ViewportStore};
use crate::timer::SettleTimer;
use crate::worker::{RenderResponse, RenderTransport};

/// What happened to one render response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Newest response; its image is now current.
    Accepted { seq: u64 },
    /// Superseded by a newer request. Not an error.
    Stale { seq: u64, latest: u64 },
    /// The newest request failed or returned an undecodable payload.
    Failed { seq: u64, message: String },
}

pub struct RenderScheduler {
    timing: RenderTiming,
    events: StoreSubscription,
    debounce: SettleTimer,
    /// Key the debounce timer was last armed for.
    observed: Option<RenderKey>,
    /// Key of the newest request issued, cleared again if it fails.
    last_issued: Option<RenderKey>,
    latest_seq: u64,
    check_needed: bool,
}

impl RenderScheduler {
    pub fn new(timing: RenderTiming, store: &mut ViewportStore) -> Self {
        Self {
            timing,
            events: store.subscribe(),
            debounce: SettleTimer::new(),
            observed: None,
            last_issued: None,
            latest_seq: 0,
            check_needed: true,
        }
    }

    /// Highest sequence number issued so far (0 before the first render).
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Pick up store changes and issue a render if the debounce expired.
    /// Returns the sequence number of the request issued on this tick.
    pub fn tick(
        &mut self,
        now: Instant,
        store: &mut ViewportStore,
        transport: &dyn RenderTransport,
    ) -> Option<u64> {
        self.watch(now, store);
        if self.debounce.fire(now) {
            self.issue(store, transport)
        } else {
            None
        }
    }

    fn watch(&mut self, now: Instant, store: &ViewportStore) {
        if self
            .events
            .drain()
            .iter()
            .any(StoreEvent::is_render_relevant)
        {
            self.check_needed = true;
        }
        if !std::mem::take(&mut self.check_needed) {
            return;
        }

        let Some(key) = RenderKey::capture(store) else {
            if self.debounce.is_armed() {
                debug!("Nothing renderable, pending render dropped");
            }
            self.debounce.cancel();
            self.observed = None;
            return;
        };
        if self.observed.as_ref() == Some(&key) {
            return;
        }

        let delay = if self.latest_seq == 0 {
            self.timing.first_debounce()
        } else {
            self.timing.debounce()
        };
        self.debounce.arm(now, delay);
        self.observed = Some(key);
        debug!(delay_ms = delay.as_millis() as u64, "Render scheduled");
    }

    fn issue(&mut self, store: &mut ViewportStore, transport: &dyn RenderTransport) -> Option<u64> {
        let key = RenderKey::capture(store)?;
        if self.last_issued.as_ref() == Some(&key) {
            debug!(seq = self.latest_seq, "Settled on the configuration already requested");
            return None;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        store.set_is_rendering(true);

        let request = RenderRequest::new(seq, key.clone());
        info!(
            seq,
            start = request.viewport.start_trace(),
            count = request.viewport.trace_count(),
            width = request.viewport.width(),
            height = request.viewport.height(),
            mode = ?request.render_mode,
            "Issuing render"
        );
        transport.dispatch(request);
        self.last_issued = Some(key);
        Some(seq)
    }

    /// Apply a response if it belongs to the newest request.
    pub fn handle_response(
        &mut self,
        response: RenderResponse,
        store: &mut ViewportStore,
    ) -> ResponseOutcome {
        let seq = response.seq;
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "Discarding stale render");
            return ResponseOutcome::Stale {
                seq,
                latest: self.latest_seq,
            };
        }

        let decoded = response
            .result
            .map_err(TraceLensError::from)
            .and_then(|rendered| decode_rendered(&rendered));

        match decoded {
            Ok(image) => {
                info!(seq, width = image.width, height = image.height, "Render accepted");
                store.set_current_image(Some(Arc::new(image)));
                store.set_is_rendering(false);
                ResponseOutcome::Accepted { seq }
            }
            Err(e) => {
                warn!(seq, error = %e, "Render failed");
                store.set_is_rendering(false);
                // Let the same configuration be requested again later.
                self.last_issued = None;
                ResponseOutcome::Failed {
                    seq,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Handle every response that has arrived so far.
    pub fn poll_responses(
        &mut self,
        rx: &mpsc::Receiver<RenderResponse>,
        store: &mut ViewportStore,
    ) -> Vec<ResponseOutcome> {
        rx.try_iter()
            .map(|response| self.handle_response(response, store))
            .collect()
    }
}
