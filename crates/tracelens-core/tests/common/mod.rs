#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;
use std::time::{Duration, Instant};

use tracelens_core::config::ViewerConfig;
use tracelens_core::render::{ImageFormat, RenderRequest, RenderedImage};
use tracelens_core::store::{DataSource, ViewportStore};
use tracelens_core::viewport::{Size, ViewportPatch};
use tracelens_core::worker::{RenderResponse, RenderTransport};

/// Transport that records requests instead of sending them anywhere.
#[derive(Default)]
pub struct RecordingTransport {
    pub requests: RefCell<Vec<RenderRequest>>,
}

impl RecordingTransport {
    pub fn count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last(&self) -> RenderRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("at least one request")
    }
}

impl RenderTransport for RecordingTransport {
    fn dispatch(&self, request: RenderRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Encode a solid-colour PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

pub fn rendered_png(width: u32, height: u32) -> RenderedImage {
    RenderedImage {
        width,
        height,
        data: png_bytes(width, height),
        format: ImageFormat::Png,
    }
}

pub fn ok_response(seq: u64, width: u32, height: u32) -> RenderResponse {
    RenderResponse {
        seq,
        result: Ok(rendered_png(width, height)),
    }
}

/// Store with a dataset open and an 800x600 canvas already committed.
pub fn measured_store() -> ViewportStore {
    let mut store = ViewportStore::default();
    store.set_source(Some(DataSource {
        file_path: "/data/line_042.sgy".into(),
        total_traces: Some(10_000),
    }));
    store.update_viewport(ViewportPatch::size(Size::new(800, 600)));
    store
}

pub fn config() -> ViewerConfig {
    ViewerConfig::default()
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn t0() -> Instant {
    Instant::now()
}
