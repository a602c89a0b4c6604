use std::time::Instant;

use tracelens_core::view::{CanvasView, PaintSurface, Point, Rect};
use tracelens_core::viewport::Size;

use crate::app::TraceLensApp;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);

pub fn show(ctx: &egui::Context, app: &mut TraceLensApp, now: Instant) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();

        // Measure every frame; the coordinator decides what gets committed.
        let measured = Size::from_f32(rect.width(), rect.height());
        app.resize.observe(now, measured, &mut app.store);
        app.resize.tick(now, &mut app.store);
        if let Some(display) = app.resize.display_size() {
            app.canvas.set_canvas_size(display);
        }
        app.scheduler.tick(now, &mut app.store, &app.worker);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        handle_zoom(ui, &response, &mut app.canvas);
        handle_pan(&response, &mut app.canvas, rect);
        if response.double_clicked() {
            app.canvas.reset_view();
        }

        let mut surface = EguiSurface {
            painter: ui.painter_at(rect),
            origin: rect.min,
            texture: app.texture.as_ref().map(|t| t.id()),
        };
        let has_image = surface.texture.is_some();
        app.canvas
            .paint(&mut surface, app.store.image_revision(), has_image);

        if !has_image {
            show_placeholder(ui, rect, app.store.is_rendering());
        }
    });
}

/// Paints into the central panel, offsetting canvas coordinates by the panel origin.
struct EguiSurface {
    painter: egui::Painter,
    origin: egui::Pos2,
    texture: Option<egui::TextureId>,
}

impl PaintSurface for EguiSurface {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, BACKGROUND);
    }

    fn draw_image(&mut self, rect: Rect) {
        let Some(texture_id) = self.texture else {
            return;
        };
        let img_rect = egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x, rect.y),
            egui::vec2(rect.width, rect.height),
        );
        self.painter.image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, canvas: &mut CanvasView) {
    if !response.hovered() {
        return;
    }
    // One zoom step per wheel event, regardless of how far it scrolled.
    let deltas: Vec<f32> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::MouseWheel { delta, .. } => Some(delta.y),
                _ => None,
            })
            .collect()
    });
    for delta in deltas {
        canvas.on_wheel(delta);
    }
}

fn handle_pan(response: &egui::Response, canvas: &mut CanvasView, rect: egui::Rect) {
    let to_canvas = |pos: egui::Pos2| Point::new(pos.x - rect.min.x, pos.y - rect.min.y);

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            canvas.on_mouse_down(to_canvas(pos));
        }
    }
    if canvas.is_dragging() && !response.contains_pointer() {
        canvas.on_mouse_leave();
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            canvas.on_mouse_move(to_canvas(pos));
        }
    }
    if response.drag_stopped() {
        canvas.on_mouse_up();
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, rendering: bool) {
    let text = if rendering {
        "Rendering..."
    } else {
        "Waiting for the first render"
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
