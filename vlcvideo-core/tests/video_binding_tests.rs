// vlcvideo-core/tests/video_binding_tests.rs

use std::rc::Rc;
use vlcvideo_core::engine::{MediaProfile, SimulatedEngine, TrackProfile};
use vlcvideo_core::{HostObject, HostValue, Player, VideoBinding, VideoEngine};

fn bind(engine: SimulatedEngine) -> Rc<VideoBinding<SimulatedEngine>> {
    VideoBinding::create(&Rc::new(Player::new(engine)))
}

fn engine_of(video: &VideoBinding<SimulatedEngine>) -> &SimulatedEngine {
    video.player().engine()
}

#[test]
fn test_tracks_match_list() {
    let video = bind(SimulatedEngine::with_track_names(&["A", "B", "C"]));
    assert_eq!(video.count(), 3);
    assert_eq!(video.tracks(), vec!["A", "B", "C"]);
    assert_eq!(engine_of(&video).outstanding_lists(), 0);
}

#[test]
fn test_tracks_pad_short_list() {
    let engine = SimulatedEngine::with_track_names(&["A", "B"]);
    engine.set_reported_track_count(Some(3));
    let video = bind(engine);
    assert_eq!(video.tracks(), vec!["A", "B", ""]);
    assert_eq!(engine_of(&video).outstanding_lists(), 0);
}

#[test]
fn test_tracks_empty_without_tracks() {
    let video = bind(SimulatedEngine::default());
    assert_eq!(video.count(), 0);
    assert!(video.tracks().is_empty());
    assert_eq!(video.description(0), "");
}

#[test]
fn test_no_list_gives_empty_names() {
    let engine = SimulatedEngine::new(MediaProfile {
        tracks: vec![TrackProfile::new(0, "A"), TrackProfile::new(1, "B")],
        description_list: false,
        ..MediaProfile::default()
    });
    let video = bind(engine);
    assert_eq!(video.count(), 2);
    assert_eq!(video.description(0), "");
    assert_eq!(video.tracks(), vec!["", ""]);
    assert_eq!(engine_of(&video).lists_acquired(), 0);
}

#[test]
fn test_index_past_count_is_empty() {
    let video = bind(SimulatedEngine::with_track_names(&["A", "B", "C"]));
    for index in [3, 4, 100, u32::MAX] {
        assert_eq!(video.description(index), "");
    }
    assert_eq!(engine_of(&video).outstanding_lists(), 0);
}

#[test]
fn test_tracks_follow_engine_changes_between_calls() {
    let video = bind(SimulatedEngine::with_track_names(&["A"]));
    assert_eq!(video.tracks(), vec!["A"]);

    engine_of(&video).push_track(TrackProfile::new(1, "B"));
    assert_eq!(video.tracks(), vec!["A", "B"]);

    engine_of(&video).remove_track(0);
    assert_eq!(video.tracks(), vec!["B"]);
}

#[test]
fn test_contrast_reads_back_engine_value() {
    let video = bind(SimulatedEngine::default());
    video.set_contrast(1.5);
    assert_eq!(video.contrast(), 1.5);
    video.set_contrast(5.0);
    assert_eq!(video.contrast(), 2.0);
}

#[test]
fn test_adjustments_without_video_are_zero() {
    let engine = SimulatedEngine::with_track_names(&["A"]);
    engine.set_video_active(false);
    let video = bind(engine);

    video.set_brightness(1.5);
    assert_eq!(video.brightness(), 0.0);
    assert_eq!(video.saturation(), 0.0);
    assert_eq!(video.hue(), 0);
    assert_eq!(video.count(), 0);
    assert_eq!(video.track(), -1);
    assert!(video.tracks().is_empty());
}

#[test]
fn test_track_selection_through_host() {
    let video = bind(SimulatedEngine::with_track_names(&["A", "B"]));
    video.set_property("track", HostValue::Integer(1)).unwrap();
    assert_eq!(video.get_property("track").unwrap(), HostValue::Integer(1));

    // -1 wraps to an id the engine does not know, so the selection stays.
    video.set_property("track", HostValue::Integer(-1)).unwrap();
    assert_eq!(video.track(), 1);
}

#[test]
fn test_video_object_serializes_readable_properties() {
    let engine = SimulatedEngine::with_track_names(&["Main"]);
    let video: Rc<dyn HostObject> = bind(engine);
    let json = serde_json::to_value(HostValue::Object(video)).unwrap();

    assert_eq!(json["tracks"], serde_json::json!(["Main"]));
    assert_eq!(json["count"], serde_json::json!(1));
    assert_eq!(json["track"], serde_json::json!(0));
    assert_eq!(json["contrast"], serde_json::json!(1.0));
    assert_eq!(json["hue"], serde_json::json!(0));
    assert_eq!(json["deinterlace"]["enabled"], serde_json::json!(false));
    assert_eq!(json["deinterlace"]["mode"], serde_json::json!(""));
}

#[test]
fn test_deinterlace_reaches_engine() {
    let video = bind(SimulatedEngine::default());
    video.deinterlace().enable(Some("yadif2x"));
    assert_eq!(engine_of(&video).deinterlace_mode().as_deref(), Some("yadif2x"));
    video.deinterlace().disable();
    assert_eq!(engine_of(&video).deinterlace_mode(), None);
}

#[test]
fn test_lists_balanced_after_mixed_use() {
    let video = bind(SimulatedEngine::with_track_names(&["A", "B"]));
    let _ = video.tracks();
    let _ = video.description(7);
    let _ = video.get_property("tracks").unwrap();
    let engine = engine_of(&video);
    assert!(engine.lists_acquired() >= 4);
    assert_eq!(engine.outstanding_lists(), 0);
    assert_eq!(engine.track_count(), 2);
}
