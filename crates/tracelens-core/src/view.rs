//! Client-side pan/zoom for the canvas.
//!
//! The transform lives entirely here. Nothing in this module touches the
//! store or the scheduler, so panning and zooming never cause a render.

use tracing::warn;

use crate::config::ZoomConfig;
use crate::viewport::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Zoom factor and pan offset. Identity is zoom 1, pan 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub zoom: f32,
    pub pan: Point,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ZERO,
        }
    }
}

impl ViewState {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Destination surface for [`CanvasView::paint`].
pub trait PaintSurface {
    fn clear(&mut self);
    /// Draw the current image stretched into `rect` (already transformed).
    fn draw_image(&mut self, rect: Rect);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PaintKey {
    image_revision: u64,
    canvas: Size,
    view: ViewState,
}

pub struct CanvasView {
    zoom_config: ZoomConfig,
    view: ViewState,
    /// Cursor minus pan, captured on mouse-down.
    drag_anchor: Option<Point>,
    canvas: Size,
    last_painted: Option<PaintKey>,
}

impl CanvasView {
    /// Falls back to the default zoom limits if `zoom_config` is unusable.
    pub fn new(zoom_config: ZoomConfig) -> Self {
        let zoom_config = match zoom_config.validate() {
            Ok(()) => zoom_config,
            Err(e) => {
                warn!(error = %e, "Ignoring zoom settings");
                ZoomConfig::default()
            }
        };
        Self {
            zoom_config,
            view: ViewState::default(),
            drag_anchor: None,
            canvas: Size::default(),
            last_painted: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Keep the canvas buffer in step with the measured container.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas = size;
    }

    /// Explicit user reset. Re-renders never call this.
    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
        self.drag_anchor = None;
    }

    /// One wheel event. Positive `delta_y` scrolls up and zooms in.
    /// Returns whether the event was consumed.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        let factor = if delta_y > 0.0 {
            self.zoom_config.zoom_in_factor
        } else if delta_y < 0.0 {
            self.zoom_config.zoom_out_factor
        } else {
            return false;
        };
        self.view.zoom = (self.view.zoom * factor)
            .clamp(self.zoom_config.min_zoom, self.zoom_config.max_zoom);
        true
    }

    pub fn on_mouse_down(&mut self, cursor: Point) {
        self.drag_anchor = Some(Point::new(
            cursor.x - self.view.pan.x,
            cursor.y - self.view.pan.y,
        ));
    }

    /// Returns whether the pan changed.
    pub fn on_mouse_move(&mut self, cursor: Point) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        let pan = Point::new(cursor.x - anchor.x, cursor.y - anchor.y);
        let changed = pan != self.view.pan;
        self.view.pan = pan;
        changed
    }

    pub fn on_mouse_up(&mut self) {
        self.drag_anchor = None;
    }

    pub fn on_mouse_leave(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Where the image lands: translate by pan, then scale the canvas-sized
    /// image by zoom.
    pub fn image_rect(&self) -> Rect {
        Rect {
            x: self.view.pan.x,
            y: self.view.pan.y,
            width: self.canvas.width as f32 * self.view.zoom,
            height: self.canvas.height as f32 * self.view.zoom,
        }
    }

    /// Whether image, size, pan or zoom changed since the last paint.
    pub fn needs_repaint(&self, image_revision: u64) -> bool {
        self.last_painted != Some(self.paint_key(image_revision))
    }

    /// Clear and draw the current image (if any) with the view transform.
    pub fn paint(&mut self, surface: &mut dyn PaintSurface, image_revision: u64, has_image: bool) {
        surface.clear();
        if has_image {
            surface.draw_image(self.image_rect());
        }
        self.last_painted = Some(self.paint_key(image_revision));
    }

    fn paint_key(&self, image_revision: u64) -> PaintKey {
        PaintKey {
            image_revision,
            canvas: self.canvas,
            view: self.view,
        }
    }
}
