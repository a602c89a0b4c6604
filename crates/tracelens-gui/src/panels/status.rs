use crate::app::TraceLensApp;

pub fn show(ctx: &egui::Context, app: &mut TraceLensApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        for note in app.notifications.iter() {
            ui.colored_label(egui::Color32::from_rgb(230, 90, 80), &note.message);
        }

        // Log area, fixed at 4 lines and scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let vp = app.store.viewport();
            let end = vp.start_trace() + vp.trace_count();
            ui.label(format!("Traces {}..{}", vp.start_trace(), end));
            ui.separator();
            ui.label(format!("{}x{}", vp.width(), vp.height()));
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.canvas.view().zoom * 100.0));
            if app.store.is_rendering() {
                ui.separator();
                ui.spinner();
                ui.label(format!("Rendering #{}", app.scheduler.latest_seq()));
            }
        });

        ui.add_space(2.0);
    });
}
