// ============================================================================
// vlcvideo-core/src/binding/video.rs
// ============================================================================
//
// VIDEO BINDING: The `VlcVideo` Host Class
//
// This module exposes a player's video tracks and image adjustments to the
// host. Track names come from the engine's description list; every other
// property forwards straight to the engine with a type conversion.
//
// KEY COMPONENTS:
// - VideoBinding: The bound object, one per player
// - description / tracks: Track name lookup and enumeration
// - VIDEO_PROPERTIES: The class's property table
//
// AI-ASSISTANT-INFO: VlcVideo binding, track description accessor

// ---- Internal crate imports ----
use super::{DeinterlaceBinding, HostObject, HostValue, PropertyDescriptor};
use super::{find_property, writable_property};
use crate::engine::{TrackDescriptionNode, TrackDescriptions, VideoEngine};
use crate::error::{CoreError, CoreResult};
use crate::player::Player;

// ---- Standard library imports ----
use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;

/// Class name of the video binding as seen by the host.
pub const VIDEO_CLASS_NAME: &str = "VlcVideo";

/// Property table of `VlcVideo`.
pub static VIDEO_PROPERTIES: [PropertyDescriptor; 9] = [
    PropertyDescriptor::read_only("tracks"),
    PropertyDescriptor::read_only("count"),
    PropertyDescriptor::read_only("deinterlace"),
    PropertyDescriptor::read_write("track"),
    PropertyDescriptor::read_write("contrast"),
    PropertyDescriptor::read_write("brightness"),
    PropertyDescriptor::read_write("hue"),
    PropertyDescriptor::read_write("saturation"),
    PropertyDescriptor::read_write("gamma"),
];

/// Video track and image adjustment controls of one player.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use vlcvideo_core::binding::VideoBinding;
/// use vlcvideo_core::engine::SimulatedEngine;
/// use vlcvideo_core::Player;
///
/// let engine = SimulatedEngine::with_track_names(&["Main", "Commentary"]);
/// let video = VideoBinding::create(&Rc::new(Player::new(engine)));
///
/// assert_eq!(video.count(), 2);
/// assert_eq!(video.tracks(), vec!["Main", "Commentary"]);
/// assert_eq!(video.description(5), "");
/// ```
pub struct VideoBinding<E: VideoEngine> {
    player: Rc<Player<E>>,
    deinterlace: Rc<DeinterlaceBinding<E>>,
}

impl<E: VideoEngine> VideoBinding<E> {
    /// Binds a new instance to `player`, together with its deinterlace
    /// collaborator.
    pub fn new(player: Rc<Player<E>>) -> Self {
        let deinterlace = Rc::new(DeinterlaceBinding::new(Rc::clone(&player)));
        Self {
            player,
            deinterlace,
        }
    }

    /// Native-side factory: always succeeds given a player.
    pub fn create(player: &Rc<Player<E>>) -> Rc<Self> {
        Rc::new(Self::new(Rc::clone(player)))
    }

    pub fn player(&self) -> &Rc<Player<E>> {
        &self.player
    }

    fn engine(&self) -> &E {
        self.player.engine()
    }

    // ---- Track descriptions ----

    /// Display name of the track at `index`, or an empty string.
    ///
    /// The description list is acquired before the count is read and is
    /// released on every return path. The count and the list are not assumed
    /// to agree: an index past either of them yields an empty name.
    pub fn description(&self, index: u32) -> String {
        let Some(list) = TrackDescriptions::acquire(self.engine()) else {
            return String::new();
        };

        let count = self.engine().track_count();
        if count == 0 || index >= count {
            return String::new();
        }

        let name = list
            .iter()
            .nth(index as usize)
            .and_then(|node| node.name())
            .filter(|name| !name.is_empty())
            .map(Cow::into_owned);

        if name.is_none() {
            log::trace!("No description for video track {} of {}", index, count);
        }
        name.unwrap_or_default()
    }

    /// Names of all tracks, one entry per index of the count read on entry.
    ///
    /// Each entry is a separate lookup; if the engine's tracks change during
    /// the enumeration, later entries may come back empty.
    pub fn tracks(&self) -> Vec<String> {
        let count = self.count();
        (0..count).map(|index| self.description(index)).collect()
    }

    pub fn count(&self) -> u32 {
        self.engine().track_count()
    }

    // ---- Passthrough properties ----

    pub fn track(&self) -> i32 {
        self.engine().track()
    }

    pub fn set_track(&self, track: u32) {
        self.engine().set_track(track);
    }

    pub fn contrast(&self) -> f64 {
        self.engine().contrast() as f64
    }

    pub fn set_contrast(&self, contrast: f64) {
        self.engine().set_contrast(contrast as f32);
    }

    pub fn brightness(&self) -> f64 {
        self.engine().brightness() as f64
    }

    pub fn set_brightness(&self, brightness: f64) {
        self.engine().set_brightness(brightness as f32);
    }

    pub fn hue(&self) -> i32 {
        self.engine().hue()
    }

    pub fn set_hue(&self, hue: i32) {
        self.engine().set_hue(hue);
    }

    pub fn saturation(&self) -> f64 {
        self.engine().saturation() as f64
    }

    pub fn set_saturation(&self, saturation: f64) {
        self.engine().set_saturation(saturation as f32);
    }

    pub fn gamma(&self) -> f64 {
        self.engine().gamma() as f64
    }

    pub fn set_gamma(&self, gamma: f64) {
        self.engine().set_gamma(gamma as f32);
    }

    pub fn deinterlace(&self) -> &Rc<DeinterlaceBinding<E>> {
        &self.deinterlace
    }
}

impl<E: VideoEngine + 'static> HostObject for VideoBinding<E> {
    fn class_name(&self) -> &'static str {
        VIDEO_CLASS_NAME
    }

    fn properties(&self) -> &'static [PropertyDescriptor] {
        &VIDEO_PROPERTIES
    }

    fn get_property(&self, name: &str) -> CoreResult<HostValue> {
        let property = find_property(self, name)?;
        let value = match property.name {
            "tracks" => HostValue::from(self.tracks()),
            "count" => HostValue::from(self.count()),
            "deinterlace" => {
                let deinterlace: Rc<dyn HostObject> = self.deinterlace.clone();
                HostValue::Object(deinterlace)
            }
            "track" => HostValue::from(self.track()),
            "contrast" => HostValue::from(self.contrast()),
            "brightness" => HostValue::from(self.brightness()),
            "hue" => HostValue::from(self.hue()),
            "saturation" => HostValue::from(self.saturation()),
            "gamma" => HostValue::from(self.gamma()),
            other => {
                return Err(CoreError::UnknownProperty {
                    class: VIDEO_CLASS_NAME,
                    name: other.to_string(),
                });
            }
        };
        Ok(value)
    }

    fn set_property(&self, name: &str, value: HostValue) -> CoreResult<()> {
        let property = writable_property(self, name)?;
        log::debug!("{}.{} = {}", VIDEO_CLASS_NAME, property.name, value);
        match property.name {
            "track" => self.set_track(value.to_u32()?),
            "contrast" => self.set_contrast(value.to_f64()?),
            "brightness" => self.set_brightness(value.to_f64()?),
            "hue" => self.set_hue(value.to_i32()?),
            "saturation" => self.set_saturation(value.to_f64()?),
            "gamma" => self.set_gamma(value.to_f64()?),
            other => {
                return Err(CoreError::UnknownProperty {
                    class: VIDEO_CLASS_NAME,
                    name: other.to_string(),
                });
            }
        }
        Ok(())
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mocks::{EngineCall, MockVideoEngine};

    fn bind(engine: &MockVideoEngine) -> Rc<VideoBinding<MockVideoEngine>> {
        VideoBinding::create(&Rc::new(Player::new(engine.clone())))
    }

    fn named(names: &[&str]) -> Vec<(i32, Option<String>)> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (i as i32, Some(n.to_string())))
            .collect()
    }

    #[test]
    fn test_description_returns_indexed_name() {
        let engine = MockVideoEngine::with_names(&["A", "B", "C"]);
        let video = bind(&engine);
        assert_eq!(video.description(0), "A");
        assert_eq!(video.description(2), "C");
        assert_eq!(engine.acquisitions(), 2);
        assert_eq!(engine.releases(), 2);
    }

    #[test]
    fn test_description_acquires_list_before_count() {
        let engine = MockVideoEngine::with_names(&["A"]);
        let video = bind(&engine);
        video.description(0);
        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::AcquireTrackDescriptions,
                EngineCall::TrackCount,
                EngineCall::ReleaseTrackDescriptions,
            ]
        );
    }

    #[test]
    fn test_description_out_of_range_releases_list() {
        let engine = MockVideoEngine::with_names(&["A", "B"]);
        let video = bind(&engine);
        assert_eq!(video.description(2), "");
        assert_eq!(video.description(u32::MAX), "");
        assert_eq!(engine.acquisitions(), 2);
        assert_eq!(engine.releases(), 2);
    }

    #[test]
    fn test_description_zero_count_releases_list() {
        let engine = MockVideoEngine::with_nodes(named(&["A"]), 0);
        let video = bind(&engine);
        assert_eq!(video.description(0), "");
        assert_eq!(engine.releases(), 1);
    }

    #[test]
    fn test_description_without_list_skips_count() {
        let engine = MockVideoEngine::without_list(3);
        let video = bind(&engine);
        assert_eq!(video.description(0), "");
        assert_eq!(engine.calls(), vec![EngineCall::AcquireTrackDescriptions]);
        assert_eq!(engine.releases(), 0);
    }

    #[test]
    fn test_description_short_list() {
        let engine = MockVideoEngine::with_nodes(named(&["A", "B"]), 3);
        let video = bind(&engine);
        assert_eq!(video.description(2), "");
        assert_eq!(engine.releases(), 1);
    }

    #[test]
    fn test_description_missing_or_empty_name() {
        let engine = MockVideoEngine::with_nodes(
            vec![(0, None), (1, Some(String::new())), (2, Some("C".to_string()))],
            3,
        );
        let video = bind(&engine);
        assert_eq!(video.tracks(), vec!["", "", "C"]);
        assert_eq!(engine.acquisitions(), engine.releases());
    }

    #[test]
    fn test_tracks_reads_count_once() {
        let engine = MockVideoEngine::with_names(&["A", "B", "C"]);
        let video = bind(&engine);
        assert_eq!(video.tracks(), vec!["A", "B", "C"]);
        let count_calls = engine
            .calls()
            .iter()
            .filter(|c| **c == EngineCall::TrackCount)
            .count();
        // One for the enumeration plus one per lookup.
        assert_eq!(count_calls, 4);
    }

    #[test]
    fn test_tracks_keeps_length_when_count_drops() {
        let engine = MockVideoEngine::with_names(&["A", "B", "C"]);
        let video = bind(&engine);
        engine.set_reported_count_after(1, 1);

        let tracks = video.tracks();
        assert_eq!(tracks, vec!["A", "", ""]);
        assert_eq!(engine.acquisitions(), 3);
        assert_eq!(engine.acquisitions(), engine.releases());
    }

    #[test]
    fn test_count_follows_engine() {
        let engine = MockVideoEngine::with_names(&["A", "B"]);
        let video = bind(&engine);
        assert_eq!(video.count(), 2);

        engine.set_reported_count(0);
        assert_eq!(video.count(), 0);
        assert!(video.tracks().is_empty());
        assert_eq!(video.description(0), "");
        assert_eq!(engine.acquisitions(), engine.releases());
    }

    #[test]
    fn test_tracks_short_list_pads_with_empty() {
        let engine = MockVideoEngine::with_nodes(named(&["A", "B"]), 3);
        assert_eq!(bind(&engine).tracks(), vec!["A", "B", ""]);
    }

    #[test]
    fn test_tracks_empty_when_count_zero() {
        let engine = MockVideoEngine::with_nodes(named(&["A"]), 0);
        assert!(bind(&engine).tracks().is_empty());
    }

    #[test]
    fn test_adjustments_narrow_to_f32() {
        let engine = MockVideoEngine::new();
        let video = bind(&engine);
        video.set_contrast(1.5);
        video.set_brightness(0.1);
        video.set_saturation(2.25);
        video.set_gamma(0.5);
        video.set_hue(-90);
        video.set_track(4);
        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::SetContrast(1.5),
                EngineCall::SetBrightness(0.1_f32),
                EngineCall::SetSaturation(2.25),
                EngineCall::SetGamma(0.5),
                EngineCall::SetHue(-90),
                EngineCall::SetTrack(4),
            ]
        );
        assert_eq!(video.contrast(), 1.5);
        assert_eq!(video.brightness(), 0.1_f32 as f64);
        assert_eq!(video.hue(), -90);
        assert_eq!(video.track(), 4);
    }

    #[test]
    fn test_host_reads_and_writes() {
        let engine = MockVideoEngine::with_names(&["A", "B"]);
        let video = bind(&engine);

        video.set_property("contrast", HostValue::Number(1.25)).unwrap();
        assert_eq!(video.get_property("contrast").unwrap(), HostValue::Number(1.25));

        video.set_property("hue", HostValue::from("30")).unwrap();
        assert_eq!(video.get_property("hue").unwrap(), HostValue::Integer(30));

        assert_eq!(video.get_property("count").unwrap(), HostValue::Integer(2));
        assert_eq!(
            video.get_property("tracks").unwrap(),
            HostValue::from(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_host_rejects_read_only_and_unknown() {
        let engine = MockVideoEngine::with_names(&["A"]);
        let video = bind(&engine);

        assert!(matches!(
            video.set_property("count", HostValue::Integer(4)),
            Err(CoreError::ReadOnlyProperty { .. })
        ));
        assert!(matches!(
            video.set_property("tracks", HostValue::Null),
            Err(CoreError::ReadOnlyProperty { .. })
        ));
        assert!(matches!(
            video.get_property("volume"),
            Err(CoreError::UnknownProperty { .. })
        ));
        assert!(matches!(
            video.set_property("gamma", HostValue::Null),
            Err(CoreError::TypeMismatch { .. })
        ));
        assert!(matches!(
            video.call_method("play", &[]),
            Err(CoreError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn test_deinterlace_property_is_stable_object() {
        let engine = MockVideoEngine::new();
        let video = bind(&engine);
        let first = video.get_property("deinterlace").unwrap();
        let second = video.get_property("deinterlace").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.as_object().map(|o| o.class_name()),
            Some("VlcDeinterlace")
        );
    }
}
