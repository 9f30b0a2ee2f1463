// ============================================================================
// vlcvideo-core/src/player.rs
// ============================================================================
//
// PLAYER: The Player Object the Video Bindings Attach To
//
// A `Player` owns the media engine and the binding configuration. Bindings
// never create engines themselves; they are constructed from an existing,
// fully initialised player and share it through `Rc`.

// ---- Internal crate imports ----
use crate::binding::{HostObject, HostValue, PropertyDescriptor};
use crate::config::BindingConfig;
use crate::engine::VideoEngine;
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::any::Any;
use std::rc::Rc;

/// Class name of the player as seen by the host.
pub const PLAYER_CLASS_NAME: &str = "VlcPlayer";

/// An initialised player wrapping a media engine.
#[derive(Debug)]
pub struct Player<E: VideoEngine> {
    engine: E,
    config: BindingConfig,
}

impl<E: VideoEngine> Player<E> {
    /// Wraps `engine` with the default binding configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, BindingConfig::default())
    }

    pub fn with_config(engine: E, config: BindingConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }
}

// The player is passed to constructors as an argument; its own lifecycle
// surface belongs to a different binding, so nothing is exposed here.
impl<E: VideoEngine + 'static> HostObject for Player<E> {
    fn class_name(&self) -> &'static str {
        PLAYER_CLASS_NAME
    }

    fn properties(&self) -> &'static [PropertyDescriptor] {
        &[]
    }

    fn get_property(&self, name: &str) -> CoreResult<HostValue> {
        Err(CoreError::UnknownProperty {
            class: PLAYER_CLASS_NAME,
            name: name.to_string(),
        })
    }

    fn set_property(&self, name: &str, _value: HostValue) -> CoreResult<()> {
        Err(CoreError::UnknownProperty {
            class: PLAYER_CLASS_NAME,
            name: name.to_string(),
        })
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
