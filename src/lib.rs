#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR, CAMERA_Z, CANVAS_ID, CUE_SAMPLE_URL,
    ICOSA_SPIN_PER_FRAME, START_BUTTON_ID,
};
use crate::core::{OrbitCamera, Spin, StepBatch, WalkConfig, WalkerField};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("walker-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_or_create_canvas(&document, CANVAS_ID)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    // The AudioContext must be created inside the click so browsers let it play
    let doc_for_click = document.clone();
    let canvas_for_click = canvas.clone();
    let wired = dom::add_click_listener(&document, START_BUTTON_ID, move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            return;
        }
        overlay::remove(&doc_for_click);
        let canvas = canvas_for_click.clone();
        spawn_local(async move {
            if let Err(e) = launch(canvas).await {
                log::error!("launch error: {:?}", e);
            }
        });
    });
    if !wired {
        log::warn!("missing #{}; starting without a user gesture", START_BUTTON_ID);
        if !STARTED.swap(true, Ordering::SeqCst) {
            launch(canvas).await?;
        }
    }
    Ok(())
}

async fn launch(canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();
    let listener = audio_ctx.listener();

    let cue_voice = audio::build_cue_voice(&audio_ctx).ok();
    if let Some(voice) = &cue_voice {
        let slot = voice.buffer_slot();
        let ctx = audio_ctx.clone();
        spawn_local(async move {
            match audio::load_sample(&ctx, CUE_SAMPLE_URL).await {
                Ok(buf) => {
                    log::info!("[audio] cue sample loaded ({:.2}s)", buf.duration());
                    *slot.borrow_mut() = Some(buf);
                }
                Err(e) => log::warn!("[audio] cue sample unavailable: {:?}", e),
            }
        });
    }

    let field = WalkerField::new(WalkConfig::default());
    log::info!("[walker] field ready with {} walkers", field.population().len());

    let orbit = Rc::new(RefCell::new(OrbitCamera::looking_at(
        Vec3::new(0.0, 0.0, CAMERA_Z),
        Vec3::ZERO,
        CAMERA_FOVY_DEG.to_radians(),
        CAMERA_NEAR,
        CAMERA_FAR,
    )));
    events::wire_orbit_controls(events::OrbitWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        drag: Rc::new(RefCell::new(input::OrbitDrag::default())),
    });

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        batch: StepBatch::new(),
        spin: Spin::new(ICOSA_SPIN_PER_FRAME),
        orbit,
        canvas,
        listener,
        cue_voice,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
