use std::sync::mpsc;
use std::time::Instant;

use tracelens_core::config::ViewerConfig;
use tracelens_core::notify::Notifications;
use tracelens_core::render::Renderer;
use tracelens_core::resize::ResizeCoordinator;
use tracelens_core::scheduler::{RenderScheduler, ResponseOutcome};
use tracelens_core::store::{DataSource, ViewportStore};
use tracelens_core::view::CanvasView;
use tracelens_core::worker::{RenderResponse, RenderWorker};

use crate::convert::decoded_to_color_image;
use crate::panels;

/// Status log lines kept; older lines are dropped.
const MAX_LOG_LINES: usize = 200;

pub struct TraceLensApp {
    pub store: ViewportStore,
    pub resize: ResizeCoordinator,
    pub scheduler: RenderScheduler,
    pub canvas: CanvasView,
    pub worker: RenderWorker,
    pub response_rx: mpsc::Receiver<RenderResponse>,
    pub notifications: Notifications,
    pub log_messages: Vec<String>,
    pub texture: Option<egui::TextureHandle>,
    /// Store image revision the texture was uploaded from.
    texture_revision: u64,
}

impl TraceLensApp {
    pub fn new<R: Renderer>(
        ctx: &egui::Context,
        renderer: R,
        source: DataSource,
        config: ViewerConfig,
    ) -> Self {
        let repaint_ctx = ctx.clone();
        let (worker, response_rx) =
            RenderWorker::new(renderer, move || repaint_ctx.request_repaint());

        let mut store = ViewportStore::default();
        let scheduler = RenderScheduler::new(config.render.clone(), &mut store);
        store.set_source(Some(source));

        Self {
            store,
            resize: ResizeCoordinator::new(config.resize.clone()),
            scheduler,
            canvas: CanvasView::new(config.zoom.clone()),
            worker,
            response_rx,
            notifications: Notifications::new(config.notifications.lifetime()),
            log_messages: Vec::new(),
            texture: None,
            texture_revision: 0,
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    /// Drain all render responses that arrived since the last frame.
    fn poll_results(&mut self, now: Instant) {
        let outcomes = self
            .scheduler
            .poll_responses(&self.response_rx, &mut self.store);
        for outcome in outcomes {
            match outcome {
                ResponseOutcome::Accepted { seq } => {
                    if let Some(image) = self.store.current_image() {
                        let msg = format!("Render #{seq}: {}x{}", image.width, image.height);
                        self.add_log(msg);
                    }
                }
                ResponseOutcome::Stale { .. } => {}
                ResponseOutcome::Failed { seq, message } => {
                    self.add_log(format!("ERROR: render #{seq}: {message}"));
                    self.notifications
                        .push(now, format!("Render failed: {message}"));
                }
            }
        }
    }

    /// Re-upload the texture when the store holds a different image.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let revision = self.store.image_revision();
        if revision == self.texture_revision {
            return;
        }
        self.texture = self.store.current_image().map(|image| {
            ctx.load_texture(
                "trace-image",
                decoded_to_color_image(image),
                egui::TextureOptions::LINEAR,
            )
        });
        self.texture_revision = revision;
    }

    /// Wake up for the earliest pending timer even if no input arrives.
    fn schedule_wakeup(&self, ctx: &egui::Context, now: Instant) {
        let next = [
            self.resize.next_deadline(),
            self.scheduler.next_deadline(),
            self.notifications.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(deadline) = next {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl eframe::App for TraceLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_results(now);
        self.sync_texture(ctx);
        self.notifications.prune(now);

        panels::settings::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self, now);

        self.schedule_wakeup(ctx, now);
    }
}
