use tracelens_core::consts::{MAX_PERCENTILE, MIN_MAX_AMPLITUDE, MIN_PERCENTILE};
use tracelens_core::render::{
    AmplitudeScaling, ColormapType, RenderMode, ScalingKind, WiggleConfig, WigglePatch,
};
use tracelens_core::viewport::ViewportPatch;

use crate::app::TraceLensApp;
use crate::panels::{enum_combo, section_header};

const LEFT_PANEL_WIDTH: f32 = 260.0;
/// Window offered when per-trace AGC is switched to a sliding window.
const DEFAULT_AGC_WINDOW: i64 = 250;

pub fn show(ctx: &egui::Context, app: &mut TraceLensApp) {
    egui::SidePanel::left("settings")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                dataset_section(ui, app);
                ui.separator();
                display_section(ui, app);
                ui.separator();
                scaling_section(ui, app);
                if app.store.render_mode().uses_wiggle() {
                    ui.separator();
                    wiggle_section(ui, app);
                }
            });
        });
}

fn dataset_section(ui: &mut egui::Ui, app: &mut TraceLensApp) {
    let total = app.store.source().and_then(|s| s.total_traces);
    let status = total.map(|t| format!("{t} traces"));
    section_header(ui, "Dataset", status.as_deref());
    ui.add_space(4.0);

    if let Some(source) = app.store.source() {
        let name = std::path::Path::new(&source.file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| source.file_path.clone());
        ui.label(name).on_hover_text(&source.file_path);
    }

    let viewport = app.store.viewport();
    let mut start = viewport.start_trace() as i64;
    let mut count = viewport.trace_count() as i64;
    let mut changed = ui
        .add(egui::DragValue::new(&mut start).range(0..=i64::MAX).prefix("First trace: "))
        .changed();
    changed |= ui
        .add(egui::DragValue::new(&mut count).range(1..=i64::MAX).prefix("Traces: "))
        .changed();
    if changed {
        app.store
            .update_viewport(ViewportPatch::trace_window(start, count));
    }
}

fn display_section(ui: &mut egui::Ui, app: &mut TraceLensApp) {
    section_header(ui, "Display", None);
    ui.add_space(4.0);

    let mut mode = app.store.render_mode();
    if enum_combo(ui, "Mode", &mut mode, &RenderMode::ALL) {
        app.store.set_render_mode(mode);
        if mode.uses_wiggle() {
            app.store.reset_wiggle_config(WiggleConfig::for_mode(mode));
        }
    }

    let mut colormap = app.store.colormap();
    if enum_combo(ui, "Colormap", &mut colormap, &ColormapType::ALL) {
        app.store.set_colormap(colormap);
    }
}

fn scaling_section(ui: &mut egui::Ui, app: &mut TraceLensApp) {
    section_header(ui, "Amplitude Scaling", None);
    ui.add_space(4.0);

    let mut scaling = app.store.amplitude_scaling().clone();
    let mut kind = scaling.kind();
    if enum_combo(ui, "Method", &mut kind, &ScalingKind::ALL) {
        app.store.set_amplitude_scaling(scaling.with_kind(kind));
        return;
    }

    let edited = match scaling.clone() {
        AmplitudeScaling::Global { mut max_amplitude } => {
            ui.add(
                egui::DragValue::new(&mut max_amplitude)
                    .speed(0.01)
                    .range(MIN_MAX_AMPLITUDE..=f32::MAX)
                    .prefix("Max amplitude: "),
            )
            .changed()
                && scaling.set_max_amplitude(max_amplitude)
        }
        AmplitudeScaling::PerTrace { window_size } => {
            let mut windowed = window_size.is_some();
            let mut size = window_size.map_or(DEFAULT_AGC_WINDOW, |w| w as i64);
            let mut changed = ui.checkbox(&mut windowed, "Sliding window").changed();
            ui.add_enabled_ui(windowed, |ui| {
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut size)
                            .range(1..=100_000)
                            .suffix(" samples"),
                    )
                    .changed();
            });
            changed && scaling.set_window_size(windowed.then_some(size))
        }
        AmplitudeScaling::Percentile { mut percentile } => {
            ui.add(
                egui::Slider::new(&mut percentile, MIN_PERCENTILE..=MAX_PERCENTILE)
                    .text("Percentile")
                    .fixed_decimals(3),
            )
            .changed()
                && scaling.set_percentile(percentile)
        }
        AmplitudeScaling::Manual { mut scale } => {
            ui.add(
                egui::DragValue::new(&mut scale)
                    .speed(0.05)
                    .prefix("Scale: "),
            )
            .changed()
                && scaling.set_scale(scale)
        }
    };
    if edited {
        app.store.set_amplitude_scaling(scaling);
    }
}

fn wiggle_section(ui: &mut egui::Ui, app: &mut TraceLensApp) {
    section_header(ui, "Wiggle Style", None);
    ui.add_space(4.0);

    let mut style = app.store.wiggle_config().clone();
    let mut patch = WigglePatch::default();

    if ui
        .add(egui::Slider::new(&mut style.line_width, 0.0..=5.0).text("Line width"))
        .changed()
    {
        patch.line_width = Some(style.line_width);
    }
    ui.horizontal(|ui| {
        ui.label("Line color");
        if ui.color_edit_button_srgb(&mut style.line_color).changed() {
            patch.line_color = Some(style.line_color);
        }
    });

    ui.horizontal(|ui| {
        if ui.checkbox(&mut style.fill_positive, "Fill positive").changed() {
            patch.fill_positive = Some(style.fill_positive);
        }
        if ui
            .color_edit_button_srgb(&mut style.positive_fill_color)
            .changed()
        {
            patch.positive_fill_color = Some(style.positive_fill_color);
        }
    });
    ui.horizontal(|ui| {
        if ui.checkbox(&mut style.fill_negative, "Fill negative").changed() {
            patch.fill_negative = Some(style.fill_negative);
        }
        if ui
            .color_edit_button_srgb(&mut style.negative_fill_color)
            .changed()
        {
            patch.negative_fill_color = Some(style.negative_fill_color);
        }
    });

    if ui.small_button("Reset style").clicked() {
        app.store
            .reset_wiggle_config(WiggleConfig::for_mode(app.store.render_mode()));
    } else if patch != WigglePatch::default() {
        app.store.set_wiggle_config(&patch);
    }
}
