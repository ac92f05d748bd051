use crate::constants::{
    CUE_CONE_INNER_DEG, CUE_CONE_OUTER_DEG, CUE_CONE_OUTER_GAIN, CUE_INITIAL_VOLUME,
    CUE_PLAYBACK_RATE, CUE_REF_DISTANCE, CUE_ROLLOFF_FACTOR,
};
use crate::core::{Cue, CueSink};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// The single positional voice shared by every walker.
///
/// Each cue stops whatever the voice is playing and restarts it, so within one
/// batch only the last walker's cue is heard. Until the sample has loaded,
/// cues are dropped.
pub struct CueVoice {
    audio_ctx: web::AudioContext,
    gain: web::GainNode,
    buffer: Rc<RefCell<Option<web::AudioBuffer>>>,
    current: Option<web::AudioBufferSourceNode>,
}

impl CueVoice {
    /// Handle that receives the decoded sample once loading finishes.
    pub fn buffer_slot(&self) -> Rc<RefCell<Option<web::AudioBuffer>>> {
        self.buffer.clone()
    }
}

// gain -> panner -> destination; the panner sits at the world origin
pub fn build_cue_voice(audio_ctx: &web::AudioContext) -> Result<CueVoice, ()> {
    let gain = create_gain(audio_ctx, CUE_INITIAL_VOLUME, "Cue")?;
    let panner = web::PannerNode::new(audio_ctx).map_err(|e| {
        log::error!("Cue PannerNode error: {:?}", e);
    })?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Inverse);
    panner.set_ref_distance(CUE_REF_DISTANCE);
    panner.set_rolloff_factor(CUE_ROLLOFF_FACTOR);
    panner.set_cone_inner_angle(CUE_CONE_INNER_DEG);
    panner.set_cone_outer_angle(CUE_CONE_OUTER_DEG);
    panner.set_cone_outer_gain(CUE_CONE_OUTER_GAIN);
    panner.position_x().set_value(0.0);
    panner.position_y().set_value(0.0);
    panner.position_z().set_value(0.0);

    _ = gain.connect_with_audio_node(&panner);
    _ = panner.connect_with_audio_node(&audio_ctx.destination());

    Ok(CueVoice {
        audio_ctx: audio_ctx.clone(),
        gain,
        buffer: Rc::new(RefCell::new(None)),
        current: None,
    })
}

impl CueSink for CueVoice {
    #[allow(deprecated)]
    fn play_cue(&mut self, cue: Cue) {
        let buffer = match self.buffer.borrow().as_ref() {
            Some(b) => b.clone(),
            None => return,
        };
        if let Some(prev) = self.current.take() {
            _ = prev.stop();
            prev.disconnect().ok();
        }
        let src = match web::AudioBufferSourceNode::new(&self.audio_ctx) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[audio] AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(&buffer));
        src.playback_rate().set_value(CUE_PLAYBACK_RATE);
        self.gain.gain().set_value(cue.volume);
        _ = src.connect_with_audio_node(&self.gain);
        if let Err(e) =
            src.start_with_when_and_grain_offset_and_grain_duration(0.0, cue.offset_sec, cue.duration_sec)
        {
            log::warn!("[audio] cue start error: {:?}", e);
            return;
        }
        self.current = Some(src);
    }
}

/// Fetch and decode an audio sample.
pub async fn load_sample(audio_ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let bytes = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(bytes)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let decoded = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buffer: web::AudioBuffer = JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(buffer)
}

pub fn update_listener_to_camera(listener: &web::AudioListener, cam_eye: Vec3, cam_target: Vec3) {
    let fwd = (cam_target - cam_eye).normalize_or_zero();
    listener.set_position(cam_eye.x as f64, cam_eye.y as f64, cam_eye.z as f64);
    _ = listener.set_orientation(fwd.x as f64, fwd.y as f64, fwd.z as f64, 0.0, 1.0, 0.0);
}
