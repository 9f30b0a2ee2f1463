//! Core library exposing a media player's video controls to a scripting host.
//!
//! This crate binds the video-track and image-adjustment controls of a native
//! media engine (track names, track selection, contrast, brightness, hue,
//! saturation, gamma, deinterlacing) to a property/method surface a scripting
//! host can read and write.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::rc::Rc;
//! use vlcvideo_core::binding::{HostObject, HostValue, VideoBinding};
//! use vlcvideo_core::engine::{MediaProfile, SimulatedEngine};
//! use vlcvideo_core::Player;
//!
//! let profile = MediaProfile::from_json_str(r#"{
//!     "tracks": [{"id": 0, "name": "Main"}, {"id": 1, "name": "Angle 2"}]
//! }"#).unwrap();
//! let player = Rc::new(Player::new(SimulatedEngine::new(profile)));
//! let video = VideoBinding::create(&player);
//!
//! video.set_property("contrast", HostValue::Number(1.5)).unwrap();
//! assert_eq!(video.contrast(), 1.5);
//! assert_eq!(video.tracks(), vec!["Main", "Angle 2"]);
//! ```

pub mod binding;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;

// Re-exports for public API
pub use binding::{
    DeinterlaceBinding, EntryMode, HostObject, HostValue, PropertyAccess, PropertyDescriptor,
    VideoBinding, VideoClass, resolve_path,
};
pub use config::{BindingConfig, ConstructionPolicy};
pub use engine::{MediaProfile, SimulatedEngine, TrackDescriptions, VideoEngine};
pub use error::{CoreError, CoreResult};
pub use player::Player;
