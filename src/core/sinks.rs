use super::lattice::Position3;
use super::walker::{Cue, Rgb, StepEvent};

/// Receives "add a marker to the scene" requests.
pub trait MarkerSink {
    fn place_marker(&mut self, position: Position3, color: Rgb);
}

/// Receives "play the cue" requests.
pub trait CueSink {
    fn play_cue(&mut self, cue: Cue);
}

// An absent collaborator swallows requests.
impl<T: MarkerSink> MarkerSink for Option<T> {
    fn place_marker(&mut self, position: Position3, color: Rgb) {
        if let Some(sink) = self {
            sink.place_marker(position, color);
        }
    }
}

impl<T: CueSink> CueSink for Option<T> {
    fn play_cue(&mut self, cue: Cue) {
        if let Some(sink) = self {
            sink.play_cue(cue);
        }
    }
}

/// Perform the marker and cue request of every event, in order.
pub fn dispatch<'a>(
    events: impl IntoIterator<Item = &'a StepEvent>,
    markers: &mut dyn MarkerSink,
    cues: &mut dyn CueSink,
) {
    for ev in events {
        markers.place_marker(ev.position, ev.color);
        cues.play_cue(ev.cue);
    }
}
