//! Viewer over a synthetic dataset, rendered by a toy in-process renderer.
//!
//! Usage: `cargo run -p tracelens-gui --example synthetic [config.toml]`

use std::io::Cursor;
use std::path::PathBuf;

use tracelens_core::config::ViewerConfig;
use tracelens_core::render::{
    ColormapType, ImageFormat, RenderMode, RenderRequest, RenderedImage, RendererError,
};
use tracelens_core::store::DataSource;

const TOTAL_TRACES: usize = 20_000;

/// Fake amplitude in [-1, 1] for a trace and a normalized depth.
fn amplitude(trace: f32, depth: f32) -> f32 {
    let reflector = (depth * 40.0 + (trace * 0.01).sin() * 3.0).sin();
    let envelope = (-(depth - 0.5).powi(2) * 4.0).exp();
    reflector * envelope
}

fn colorize(colormap: ColormapType, a: f32) -> [u8; 3] {
    let t = ((a + 1.0) * 0.5).clamp(0.0, 1.0);
    let g = (t * 255.0) as u8;
    match colormap {
        ColormapType::Grayscale => [g, g, g],
        ColormapType::GrayscaleInverted => [255 - g, 255 - g, 255 - g],
        ColormapType::Seismic => {
            if a < 0.0 {
                let v = ((1.0 + a) * 255.0) as u8;
                [255, v, v]
            } else {
                let v = ((1.0 - a) * 255.0) as u8;
                [v, v, 255]
            }
        }
        ColormapType::Viridis => [
            (68.0 + t * 185.0) as u8,
            (1.0 + t * 230.0) as u8,
            (84.0 + (1.0 - t) * 80.0) as u8,
        ],
    }
}

fn render(request: &RenderRequest) -> Result<RenderedImage, RendererError> {
    let vp = request.viewport;
    let (width, height) = (vp.width(), vp.height());
    let traces = vp.trace_count() as f32;
    let wiggle_only = request.render_mode == RenderMode::Wiggle;

    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let trace = vp.start_trace() as f32 + x as f32 / width as f32 * traces;
        let a = amplitude(trace, y as f32 / height as f32);
        let color = if wiggle_only {
            let line = request
                .wiggle_config
                .as_ref()
                .map_or([0, 0, 0], |w| w.line_color);
            if a > 0.6 {
                line
            } else {
                [255, 255, 255]
            }
        } else {
            colorize(request.colormap_type, a)
        };
        image::Rgb(color)
    });

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| RendererError::new(format!("PNG encoding failed: {e}")))?;
    Ok(RenderedImage {
        width,
        height,
        data: buf.into_inner(),
        format: ImageFormat::Png,
    })
}

fn main() -> eframe::Result<()> {
    tracelens_gui::init_tracing();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => tracelens_gui::load_config(&path).unwrap_or_else(|e| {
            tracing::warn!("{e:#}, using defaults");
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    };
    let source = DataSource {
        file_path: "synthetic.sgy".into(),
        total_traces: Some(TOTAL_TRACES),
    };

    tracelens_gui::run(render, source, config)
}
