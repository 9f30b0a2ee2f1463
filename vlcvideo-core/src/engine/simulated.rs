// ============================================================================
// vlcvideo-core/src/engine/simulated.rs
// ============================================================================
//
// SIMULATED ENGINE: In-Memory Media Engine Driven by a Media Profile
//
// This module provides a `VideoEngine` implementation that keeps its state in
// memory instead of talking to a native library. Its behaviour follows the
// native engine where the bindings can observe it: adjustments are clamped to
// the adjust filter's ranges, unknown track ids are ignored, and an inactive
// video output reports zero values.
//
// KEY COMPONENTS:
// - MediaProfile: Serde model of the JSON profile the engine is built from
// - SimulatedEngine: The engine itself, with runtime mutation helpers
// - Range constants for the image adjustments
//
// AI-ASSISTANT-INFO: In-memory VideoEngine used by the CLI host and the tests

// ---- Internal crate imports ----
use super::{TrackDescription, VideoEngine};
use crate::error::{CoreError, CoreResult};

// ---- External crate imports ----
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// ADJUSTMENT RANGES
// ============================================================================

/// Valid contrast range of the adjust filter.
pub const CONTRAST_RANGE: (f32, f32) = (0.0, 2.0);

/// Valid brightness range of the adjust filter.
pub const BRIGHTNESS_RANGE: (f32, f32) = (0.0, 2.0);

/// Valid hue range of the adjust filter, in degrees.
pub const HUE_RANGE: (i32, i32) = (-180, 180);

/// Valid saturation range of the adjust filter.
pub const SATURATION_RANGE: (f32, f32) = (0.0, 3.0);

/// Valid gamma range of the adjust filter.
pub const GAMMA_RANGE: (f32, f32) = (0.01, 10.0);

// ============================================================================
// MEDIA PROFILE
// ============================================================================

/// One video track of a media profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackProfile {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

impl TrackProfile {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

/// Initial image adjustment values of a media profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdjustmentProfile {
    pub contrast: f32,
    pub brightness: f32,
    pub hue: i32,
    pub saturation: f32,
    pub gamma: f32,
}

impl Default for AdjustmentProfile {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 1.0,
            hue: 0,
            saturation: 1.0,
            gamma: 1.0,
        }
    }
}

/// Description of a simulated engine's state.
///
/// All fields are optional in JSON. An empty document describes an active
/// video output with no tracks and default adjustments.
///
/// # Examples
///
/// ```rust
/// use vlcvideo_core::engine::MediaProfile;
///
/// let profile = MediaProfile::from_json_str(r#"{
///     "tracks": [{"id": 0, "name": "Main"}, {"id": 1, "name": "Angle 2"}],
///     "selected_track": 1
/// }"#).unwrap();
/// assert_eq!(profile.tracks.len(), 2);
/// assert_eq!(profile.selected_track, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaProfile {
    /// Tracks in the order the engine lists them
    pub tracks: Vec<TrackProfile>,

    /// Count reported by `track_count`, when it should differ from the list
    pub reported_track_count: Option<u32>,

    /// Whether the engine reports a description list at all
    pub description_list: bool,

    /// Whether the player has an active video output
    pub video_active: bool,

    /// Initially selected track id (defaults to the first track)
    pub selected_track: Option<i32>,

    /// Initial image adjustments
    pub adjustments: AdjustmentProfile,
}

impl Default for MediaProfile {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            reported_track_count: None,
            description_list: true,
            video_active: true,
            selected_track: None,
            adjustments: AdjustmentProfile::default(),
        }
    }
}

impl MediaProfile {
    /// Parses and validates a profile from a JSON string.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let profile: MediaProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads, parses and validates a profile from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading media profile from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that track ids are unique and the selected track exists.
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for track in &self.tracks {
            if !seen.insert(track.id) {
                return Err(CoreError::Profile(format!(
                    "duplicate track id {}",
                    track.id
                )));
            }
        }
        if let Some(selected) = self.selected_track {
            if selected != -1 && !seen.contains(&selected) {
                return Err(CoreError::Profile(format!(
                    "selected track {} is not one of the profile's tracks",
                    selected
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// ENGINE
// ============================================================================

#[derive(Debug)]
struct EngineState {
    tracks: Vec<TrackProfile>,
    reported_track_count: Option<u32>,
    description_list: bool,
    video_active: bool,
    selected_track: i32,
    contrast: f32,
    brightness: f32,
    hue: i32,
    saturation: f32,
    gamma: f32,
    deinterlace: Option<String>,
}

/// In-memory [`VideoEngine`] built from a [`MediaProfile`].
#[derive(Debug)]
pub struct SimulatedEngine {
    state: RefCell<EngineState>,
    lists_acquired: Cell<usize>,
    lists_released: Cell<usize>,
}

impl Default for SimulatedEngine {
    fn default() -> Self {
        Self::new(MediaProfile::default())
    }
}

impl SimulatedEngine {
    /// Creates an engine in the state described by `profile`.
    ///
    /// Initial adjustments are clamped the same way later writes are.
    pub fn new(profile: MediaProfile) -> Self {
        let selected_track = profile
            .selected_track
            .or_else(|| profile.tracks.first().map(|t| t.id))
            .unwrap_or(-1);
        let adjust = profile.adjustments;
        let state = EngineState {
            tracks: profile.tracks,
            reported_track_count: profile.reported_track_count,
            description_list: profile.description_list,
            video_active: profile.video_active,
            selected_track,
            contrast: clamp_f32(adjust.contrast, CONTRAST_RANGE).unwrap_or(1.0),
            brightness: clamp_f32(adjust.brightness, BRIGHTNESS_RANGE).unwrap_or(1.0),
            hue: adjust.hue.clamp(HUE_RANGE.0, HUE_RANGE.1),
            saturation: clamp_f32(adjust.saturation, SATURATION_RANGE).unwrap_or(1.0),
            gamma: clamp_f32(adjust.gamma, GAMMA_RANGE).unwrap_or(1.0),
            deinterlace: None,
        };
        Self {
            state: RefCell::new(state),
            lists_acquired: Cell::new(0),
            lists_released: Cell::new(0),
        }
    }

    /// Engine whose tracks are `names`, with ids `0..n`.
    pub fn with_track_names(names: &[&str]) -> Self {
        let tracks = names
            .iter()
            .enumerate()
            .map(|(i, name)| TrackProfile::new(i as i32, *name))
            .collect();
        Self::new(MediaProfile {
            tracks,
            ..MediaProfile::default()
        })
    }

    // ---- Runtime mutation ----

    /// Appends a track, as when the media gains a video stream.
    pub fn push_track(&self, track: TrackProfile) {
        log::debug!("Simulated engine: adding track {}", track.id);
        self.state.borrow_mut().tracks.push(track);
    }

    /// Removes the track with `id`. Returns whether it existed.
    pub fn remove_track(&self, id: i32) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.tracks.len();
        state.tracks.retain(|t| t.id != id);
        if state.selected_track == id {
            state.selected_track = -1;
        }
        before != state.tracks.len()
    }

    /// Starts or stops the simulated video output.
    pub fn set_video_active(&self, active: bool) {
        self.state.borrow_mut().video_active = active;
    }

    /// Overrides the count reported by `track_count` (`None` follows the list).
    pub fn set_reported_track_count(&self, count: Option<u32>) {
        self.state.borrow_mut().reported_track_count = count;
    }

    // ---- Diagnostics ----

    /// Current deinterlace filter mode, `None` when disabled.
    pub fn deinterlace_mode(&self) -> Option<String> {
        self.state.borrow().deinterlace.clone()
    }

    /// Number of description lists handed out so far.
    pub fn lists_acquired(&self) -> usize {
        self.lists_acquired.get()
    }

    /// Number of description lists acquired but not yet released.
    pub fn outstanding_lists(&self) -> usize {
        self.lists_acquired.get() - self.lists_released.get()
    }

    fn write_adjustment(&self, name: &str, f: impl FnOnce(&mut EngineState)) {
        let mut state = self.state.borrow_mut();
        if !state.video_active {
            log::debug!("Simulated engine: ignoring {} without active video", name);
            return;
        }
        f(&mut state);
    }

    fn read_adjustment<T: Default>(&self, f: impl FnOnce(&EngineState) -> T) -> T {
        let state = self.state.borrow();
        if state.video_active {
            f(&state)
        } else {
            T::default()
        }
    }
}

/// Clamps `value` into `range`, rejecting NaN.
fn clamp_f32(value: f32, range: (f32, f32)) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(range.0, range.1))
    }
}

fn store_clamped(slot: &mut f32, value: f32, range: (f32, f32), name: &str) {
    match clamp_f32(value, range) {
        Some(clamped) => *slot = clamped,
        None => log::debug!("Simulated engine: rejecting NaN {}", name),
    }
}

impl VideoEngine for SimulatedEngine {
    type Node = TrackDescription;
    type TrackList = Box<TrackDescription>;

    fn acquire_track_descriptions(&self) -> Option<Self::TrackList> {
        let state = self.state.borrow();
        if !state.description_list || !state.video_active {
            return None;
        }
        let list = TrackDescription::list_from(
            state.tracks.iter().map(|t| (t.id, t.name.clone())),
        )?;
        self.lists_acquired.set(self.lists_acquired.get() + 1);
        Some(list)
    }

    fn release_track_descriptions(&self, list: Self::TrackList) {
        self.lists_released.set(self.lists_released.get() + 1);
        drop(list);
    }

    fn track_count(&self) -> u32 {
        let state = self.state.borrow();
        if !state.video_active {
            return 0;
        }
        state
            .reported_track_count
            .unwrap_or(state.tracks.len() as u32)
    }

    fn track(&self) -> i32 {
        let state = self.state.borrow();
        if state.video_active {
            state.selected_track
        } else {
            -1
        }
    }

    fn set_track(&self, track: u32) {
        let mut state = self.state.borrow_mut();
        if !state.video_active {
            log::debug!("Simulated engine: ignoring track selection without active video");
            return;
        }
        let known = i32::try_from(track)
            .ok()
            .filter(|id| state.tracks.iter().any(|t| t.id == *id));
        match known {
            Some(id) => state.selected_track = id,
            None => log::debug!("Simulated engine: ignoring unknown track id {}", track),
        }
    }

    fn contrast(&self) -> f32 {
        self.read_adjustment(|s| s.contrast)
    }

    fn set_contrast(&self, contrast: f32) {
        self.write_adjustment("contrast", |s| {
            store_clamped(&mut s.contrast, contrast, CONTRAST_RANGE, "contrast")
        });
    }

    fn brightness(&self) -> f32 {
        self.read_adjustment(|s| s.brightness)
    }

    fn set_brightness(&self, brightness: f32) {
        self.write_adjustment("brightness", |s| {
            store_clamped(&mut s.brightness, brightness, BRIGHTNESS_RANGE, "brightness")
        });
    }

    fn hue(&self) -> i32 {
        self.read_adjustment(|s| s.hue)
    }

    fn set_hue(&self, hue: i32) {
        self.write_adjustment("hue", |s| s.hue = hue.clamp(HUE_RANGE.0, HUE_RANGE.1));
    }

    fn saturation(&self) -> f32 {
        self.read_adjustment(|s| s.saturation)
    }

    fn set_saturation(&self, saturation: f32) {
        self.write_adjustment("saturation", |s| {
            store_clamped(&mut s.saturation, saturation, SATURATION_RANGE, "saturation")
        });
    }

    fn gamma(&self) -> f32 {
        self.read_adjustment(|s| s.gamma)
    }

    fn set_gamma(&self, gamma: f32) {
        self.write_adjustment("gamma", |s| {
            store_clamped(&mut s.gamma, gamma, GAMMA_RANGE, "gamma")
        });
    }

    fn set_deinterlace(&self, mode: Option<&str>) {
        self.state.borrow_mut().deinterlace = mode.map(str::to_string);
    }
}
