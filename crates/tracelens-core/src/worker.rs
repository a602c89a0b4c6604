use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::render::{RenderRequest, RenderedImage, Renderer, RendererError};

/// Result of one render call, tagged with the sequence number it was issued under.
#[derive(Debug)]
pub struct RenderResponse {
    pub seq: u64,
    pub result: Result<RenderedImage, RendererError>,
}

/// Something that can carry a render request to the renderer. There is no
/// cancellation: once dispatched, a request always produces a response.
pub trait RenderTransport {
    fn dispatch(&self, request: RenderRequest);
}

/// Runs every request as its own task on the rayon pool, so calls overlap and
/// can complete in any order. Responses come back over an mpsc channel and
/// the waker is called after each send (e.g. to request a UI repaint).
pub struct RenderWorker {
    renderer: Arc<dyn Renderer>,
    result_tx: mpsc::Sender<RenderResponse>,
    waker: Arc<dyn Fn() + Send + Sync>,
}

impl RenderWorker {
    pub fn new<R, W>(renderer: R, waker: W) -> (Self, mpsc::Receiver<RenderResponse>)
    where
        R: Renderer,
        W: Fn() + Send + Sync + 'static,
    {
        let (result_tx, result_rx) = mpsc::channel();
        let worker = Self {
            renderer: Arc::new(renderer),
            result_tx,
            waker: Arc::new(waker),
        };
        (worker, result_rx)
    }
}

impl RenderTransport for RenderWorker {
    fn dispatch(&self, request: RenderRequest) {
        let renderer = Arc::clone(&self.renderer);
        let tx = self.result_tx.clone();
        let waker = Arc::clone(&self.waker);

        rayon::spawn(move || {
            let seq = request.seq;
            let started = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(&request)))
                .unwrap_or_else(|payload| {
                    Err(RendererError::new(format!(
                        "Renderer panicked: {}",
                        panic_message(payload.as_ref())
                    )))
                });
            debug!(
                seq,
                ok = result.is_ok(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Render call returned"
            );
            let _ = tx.send(RenderResponse { seq, result });
            waker();
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
