use web_sys as web;

/// What a pointer drag does to the orbit camera.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Rotate,
    Pan,
}

impl DragMode {
    /// Primary button rotates, or pans with a modifier held; secondary button pans.
    pub fn from_button(button: i16, modifier: bool) -> Option<DragMode> {
        match (button, modifier) {
            (0, false) => Some(DragMode::Rotate),
            (0, true) | (2, _) => Some(DragMode::Pan),
            _ => None,
        }
    }
}

/// Pointer drag in progress on the canvas, in canvas backing-store pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct OrbitDrag {
    pub active: bool,
    pub mode: DragMode,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl OrbitDrag {
    pub fn begin(&mut self, pointer_id: i32, mode: DragMode, x: f32, y: f32) {
        self.active = true;
        self.mode = mode;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Record a new pointer position and return the movement since the last one.
    pub fn update(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let d = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(d)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    (sx, sy)
}
