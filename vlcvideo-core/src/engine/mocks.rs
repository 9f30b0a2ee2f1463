// vlcvideo-core/src/engine/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests, and for other crates when the
// "test-mocks" feature is enabled.

use super::{TrackDescription, VideoEngine};
use std::cell::RefCell;
use std::rc::Rc;

/// One call received by [`MockVideoEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    AcquireTrackDescriptions,
    ReleaseTrackDescriptions,
    TrackCount,
    Track,
    SetTrack(u32),
    Contrast,
    SetContrast(f32),
    Brightness,
    SetBrightness(f32),
    Hue,
    SetHue(i32),
    Saturation,
    SetSaturation(f32),
    Gamma,
    SetGamma(f32),
    SetDeinterlace(Option<String>),
}

#[derive(Debug, Default)]
struct MockState {
    nodes: Vec<(i32, Option<String>)>,
    has_list: bool,
    track_count: u32,
    track: i32,
    contrast: f32,
    brightness: f32,
    hue: i32,
    saturation: f32,
    gamma: f32,
    deinterlace: Option<String>,
    count_reads: usize,
    // (read number, count reported from the next read on)
    scheduled_count: Option<(usize, u32)>,
    acquisitions: usize,
    releases: usize,
    calls: Vec<EngineCall>,
}

/// Engine that stores written values verbatim and records every call.
///
/// Clones share state, so a test can keep a handle after moving the engine
/// into a player.
#[derive(Debug, Clone, Default)]
pub struct MockVideoEngine {
    state: Rc<RefCell<MockState>>,
}

impl MockVideoEngine {
    pub fn new() -> Self {
        Default::default()
    }

    /// Engine whose list holds `names` with ids `0..n` and whose count matches.
    pub fn with_names(names: &[&str]) -> Self {
        let nodes = names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as i32, Some(name.to_string())))
            .collect::<Vec<_>>();
        let count = nodes.len() as u32;
        Self::with_nodes(nodes, count)
    }

    /// Engine with an explicit node list and an independent reported count.
    pub fn with_nodes(nodes: Vec<(i32, Option<String>)>, track_count: u32) -> Self {
        let engine = Self::new();
        {
            let mut state = engine.state.borrow_mut();
            state.has_list = !nodes.is_empty();
            state.nodes = nodes;
            state.track_count = track_count;
            state.track = -1;
        }
        engine
    }

    /// Engine that reports `track_count` tracks but no description list.
    pub fn without_list(track_count: u32) -> Self {
        Self::with_nodes(Vec::new(), track_count)
    }

    /// Changes the count reported by `track_count`.
    pub fn set_reported_count(&self, track_count: u32) {
        self.state.borrow_mut().track_count = track_count;
    }

    /// Switches the reported count to `track_count` once `reads` calls to
    /// `track_count` have been answered with the current value.
    pub fn set_reported_count_after(&self, reads: usize, track_count: u32) {
        let mut state = self.state.borrow_mut();
        let after = state.count_reads + reads;
        state.scheduled_count = Some((after, track_count));
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn acquisitions(&self) -> usize {
        self.state.borrow().acquisitions
    }

    pub fn releases(&self) -> usize {
        self.state.borrow().releases
    }

    pub fn deinterlace_mode(&self) -> Option<String> {
        self.state.borrow().deinterlace.clone()
    }

    fn record(&self, call: EngineCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl VideoEngine for MockVideoEngine {
    type Node = TrackDescription;
    type TrackList = Box<TrackDescription>;

    fn acquire_track_descriptions(&self) -> Option<Self::TrackList> {
        self.record(EngineCall::AcquireTrackDescriptions);
        let mut state = self.state.borrow_mut();
        if !state.has_list {
            return None;
        }
        let list = TrackDescription::list_from(state.nodes.clone())?;
        state.acquisitions += 1;
        Some(list)
    }

    fn release_track_descriptions(&self, _list: Self::TrackList) {
        self.record(EngineCall::ReleaseTrackDescriptions);
        self.state.borrow_mut().releases += 1;
    }

    fn track_count(&self) -> u32 {
        self.record(EngineCall::TrackCount);
        let mut state = self.state.borrow_mut();
        let count = state.track_count;
        state.count_reads += 1;
        if let Some((after, next)) = state.scheduled_count {
            if state.count_reads >= after {
                state.track_count = next;
                state.scheduled_count = None;
            }
        }
        count
    }

    fn track(&self) -> i32 {
        self.record(EngineCall::Track);
        self.state.borrow().track
    }

    fn set_track(&self, track: u32) {
        self.record(EngineCall::SetTrack(track));
        self.state.borrow_mut().track = track as i32;
    }

    fn contrast(&self) -> f32 {
        self.record(EngineCall::Contrast);
        self.state.borrow().contrast
    }

    fn set_contrast(&self, contrast: f32) {
        self.record(EngineCall::SetContrast(contrast));
        self.state.borrow_mut().contrast = contrast;
    }

    fn brightness(&self) -> f32 {
        self.record(EngineCall::Brightness);
        self.state.borrow().brightness
    }

    fn set_brightness(&self, brightness: f32) {
        self.record(EngineCall::SetBrightness(brightness));
        self.state.borrow_mut().brightness = brightness;
    }

    fn hue(&self) -> i32 {
        self.record(EngineCall::Hue);
        self.state.borrow().hue
    }

    fn set_hue(&self, hue: i32) {
        self.record(EngineCall::SetHue(hue));
        self.state.borrow_mut().hue = hue;
    }

    fn saturation(&self) -> f32 {
        self.record(EngineCall::Saturation);
        self.state.borrow().saturation
    }

    fn set_saturation(&self, saturation: f32) {
        self.record(EngineCall::SetSaturation(saturation));
        self.state.borrow_mut().saturation = saturation;
    }

    fn gamma(&self) -> f32 {
        self.record(EngineCall::Gamma);
        self.state.borrow().gamma
    }

    fn set_gamma(&self, gamma: f32) {
        self.record(EngineCall::SetGamma(gamma));
        self.state.borrow_mut().gamma = gamma;
    }

    fn set_deinterlace(&self, mode: Option<&str>) {
        let mode = mode.map(str::to_string);
        self.record(EngineCall::SetDeinterlace(mode.clone()));
        self.state.borrow_mut().deinterlace = mode;
    }
}
