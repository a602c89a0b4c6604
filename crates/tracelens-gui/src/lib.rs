//! egui front end for the trace viewer.
//!
//! The crate does not draw seismic data itself: the embedding application
//! passes a [`Renderer`] that turns render requests into PNG bytes.

mod app;
mod convert;
mod panels;

use std::path::Path;

use anyhow::Context as _;
use tracelens_core::config::ViewerConfig;
use tracelens_core::render::Renderer;
use tracelens_core::store::DataSource;
use tracing_subscriber::EnvFilter;

pub use app::TraceLensApp;
pub use convert::decoded_to_color_image;

/// Install the global tracing subscriber (INFO unless `RUST_LOG` says
/// otherwise). Later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .try_init();
}

/// `RUST_LOG`-style directives, or INFO when absent or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Read a viewer config from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<ViewerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = ViewerConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Open the viewer window on `source` and block until it is closed.
pub fn run<R: Renderer>(
    renderer: R,
    source: DataSource,
    config: ViewerConfig,
) -> eframe::Result<()> {
    init_tracing();
    tracing::info!(file = %source.file_path, "Opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("TraceLens"),
        ..Default::default()
    };

    eframe::run_native(
        "TraceLens",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TraceLensApp::new(
                &cc.egui_ctx,
                renderer,
                source,
                config,
            )))
        }),
    )
}
