// ============================================================================
// vlcvideo-core/src/binding/construct.rs
// ============================================================================
//
// CONSTRUCTION: Host-Side Factory for `VlcVideo`
//
// A host can reach the `VlcVideo` constructor two ways: as a construct call
// (`new VlcVideo(player)`) or as a plain function call (`VlcVideo(player)`).
// Both go through one contract here. The plain call forwards its first
// argument to the construct branch, which binds a new instance to the player.
//
// A call without a usable player is handled according to the configured
// `ConstructionPolicy`: strict hosts get `InvalidArgument`, lenient hosts get
// no instance and no error.

// ---- Internal crate imports ----
use super::{HostValue, VideoBinding};
use crate::config::{BindingConfig, ConstructionPolicy};
use crate::engine::VideoEngine;
use crate::error::{CoreError, CoreResult};
use crate::player::Player;

// ---- Standard library imports ----
use std::rc::Rc;

/// How the host invoked the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// `new VlcVideo(player)`
    Construct,
    /// `VlcVideo(player)`
    Call,
}

/// The registered `VlcVideo` constructor.
#[derive(Debug, Clone, Default)]
pub struct VideoClass {
    config: BindingConfig,
}

impl VideoClass {
    pub fn new(config: BindingConfig) -> Self {
        Self { config }
    }

    /// Runs the constructor for a host call.
    ///
    /// Returns `Ok(None)` only under the lenient policy, when the call is
    /// dropped for lack of a player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use vlcvideo_core::binding::{EntryMode, HostObject, HostValue, VideoClass};
    /// use vlcvideo_core::config::BindingConfig;
    /// use vlcvideo_core::engine::SimulatedEngine;
    /// use vlcvideo_core::Player;
    ///
    /// let player: Rc<dyn HostObject> = Rc::new(Player::new(SimulatedEngine::default()));
    /// let class = VideoClass::new(BindingConfig::default());
    ///
    /// let video = class
    ///     .invoke::<SimulatedEngine>(EntryMode::Call, &[HostValue::Object(player)])
    ///     .unwrap();
    /// assert!(video.is_some());
    ///
    /// assert!(class.invoke::<SimulatedEngine>(EntryMode::Construct, &[]).is_err());
    /// ```
    pub fn invoke<E: VideoEngine + 'static>(
        &self,
        mode: EntryMode,
        args: &[HostValue],
    ) -> CoreResult<Option<Rc<VideoBinding<E>>>> {
        match mode {
            EntryMode::Construct => self.construct(args),
            EntryMode::Call => {
                log::trace!("Forwarding plain VlcVideo call to the constructor");
                self.construct(args.get(..1).unwrap_or(&[]))
            }
        }
    }

    fn construct<E: VideoEngine + 'static>(
        &self,
        args: &[HostValue],
    ) -> CoreResult<Option<Rc<VideoBinding<E>>>> {
        match player_argument::<E>(args) {
            Ok(player) => {
                log::debug!("Binding VlcVideo to player");
                Ok(Some(VideoBinding::create(&player)))
            }
            Err(reason) => match self.config.construction_policy {
                ConstructionPolicy::Strict => Err(CoreError::InvalidArgument(reason)),
                ConstructionPolicy::Lenient => {
                    log::debug!("Dropping VlcVideo construction: {}", reason);
                    Ok(None)
                }
            },
        }
    }
}

/// Extracts the player from the first constructor argument.
fn player_argument<E: VideoEngine + 'static>(args: &[HostValue]) -> Result<Rc<Player<E>>, String> {
    let value = args
        .first()
        .ok_or_else(|| "VlcVideo requires a player argument".to_string())?;
    let object = value.as_object().ok_or_else(|| {
        format!(
            "VlcVideo expects a player object, got {}",
            value.type_name()
        )
    })?;
    let class = object.class_name();
    Rc::clone(object)
        .into_any()
        .downcast::<Player<E>>()
        .map_err(|_| format!("VlcVideo expects a player object, got {}", class))
}
