use crate::audio::{self, CueVoice};
use crate::constants::MARKER_INITIAL_CAPACITY;
use crate::core::{dispatch, OrbitCamera, Spin, StepBatch, WalkerField};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation loop touches, passed explicitly instead of living in globals.
pub struct FrameContext<'a> {
    pub field: WalkerField,
    pub batch: StepBatch,
    pub spin: Spin,
    pub orbit: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub listener: web::AudioListener,
    pub cue_voice: Option<CueVoice>,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Update
        self.spin.advance();
        if self.field.tick(dt, &mut self.batch) > 0 {
            dispatch(self.batch.iter(), &mut self.gpu, &mut self.cue_voice);
            log::debug!(
                "[walker] batch of {} steps, markers={}",
                self.batch.len(),
                self.gpu.as_ref().map_or(0, |g| g.marker_count())
            );
            self.batch.clear();
        }

        // Camera + listener
        let w = self.canvas.width();
        let h = self.canvas.height();
        let (eye, target, view, view_proj) = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.set_aspect(w, h);
            (
                orbit.eye(),
                orbit.target,
                orbit.view_matrix(),
                orbit.view_projection(),
            )
        };
        audio::update_listener_to_camera(&self.listener, eye, target);

        // Render
        if let Some(g) = &mut self.gpu {
            g.set_camera(view, view_proj);
            g.set_centerpiece(self.spin.model_matrix());
            g.resize_if_needed(w, h);
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, MARKER_INITIAL_CAPACITY).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
