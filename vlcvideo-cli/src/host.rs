// ============================================================================
// vlcvideo-cli/src/host.rs
// ============================================================================
//
// SCRIPTING HOST: Globals and Property Access for the CLI
//
// The host owns the player, the registered `VlcVideo` constructor and the
// global variables scripts see. At start-up it runs `new VlcVideo(player)`
// through the construction contract and binds the result to `video`.
//
// KEY COMPONENTS:
// - Host: Global scope plus property/method access by path
// - load_player: Builds a simulated player from the CLI options

// ---- Internal crate imports ----
use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

// ---- External crate imports ----
use vlcvideo_core::binding::video::VIDEO_CLASS_NAME;
use vlcvideo_core::engine::{MediaProfile, SimulatedEngine};
use vlcvideo_core::{
    BindingConfig, ConstructionPolicy, CoreError, EntryMode, HostObject, HostValue, Player,
    VideoClass, VideoEngine, resolve_path,
};

// ---- Standard library imports ----
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

/// Builds the binding configuration from the CLI options.
pub fn binding_config(cli: &Cli) -> BindingConfig {
    BindingConfig {
        construction_policy: if cli.lenient {
            ConstructionPolicy::Lenient
        } else {
            ConstructionPolicy::Strict
        },
        default_deinterlace_mode: cli.deinterlace_mode.clone(),
    }
}

/// Loads the media profile named on the command line, or the empty profile.
pub fn load_player(cli: &Cli) -> CliResult<Rc<Player<SimulatedEngine>>> {
    let profile = match &cli.profile {
        Some(path) => MediaProfile::from_path(path)
            .cli_with_context(|| format!("Failed to load profile '{}'", path.display()))?,
        None => {
            log::debug!("No profile given, using an empty media profile");
            MediaProfile::default()
        }
    };
    let engine = SimulatedEngine::new(profile);
    Ok(Rc::new(Player::with_config(engine, binding_config(cli))))
}

/// Global scope of a script run.
pub struct Host<E: VideoEngine + 'static> {
    class: VideoClass,
    globals: HashMap<String, HostValue>,
    _engine: PhantomData<E>,
}

impl<E: VideoEngine + 'static> Host<E> {
    /// Creates the host and binds `player` and `video`.
    pub fn new(player: Rc<Player<E>>) -> CliResult<Self> {
        let class = VideoClass::new(player.config().clone());
        let player: Rc<dyn HostObject> = player;
        let mut host = Self {
            class,
            globals: HashMap::new(),
            _engine: PhantomData,
        };
        host.globals
            .insert("player".to_string(), HostValue::Object(player));

        let video = host.construct(EntryMode::Construct, &[host.global("player")?])?;
        if video.is_nullish() {
            return Err(CoreError::OperationFailed(format!(
                "{} construction produced no instance",
                VIDEO_CLASS_NAME
            )));
        }
        host.globals.insert("video".to_string(), video);
        Ok(host)
    }

    /// Runs the `VlcVideo` constructor; a dropped call yields `undefined`.
    pub fn construct(&self, mode: EntryMode, args: &[HostValue]) -> CliResult<HostValue> {
        let video = self.class.invoke::<E>(mode, args)?;
        Ok(match video {
            Some(video) => {
                let video: Rc<dyn HostObject> = video;
                HostValue::Object(video)
            }
            None => HostValue::Undefined,
        })
    }

    pub fn global(&self, name: &str) -> CliResult<HostValue> {
        self.globals
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::InvalidArgument(format!("'{}' is not defined", name)))
    }

    pub fn set_global(&mut self, name: &str, value: HostValue) {
        self.globals.insert(name.to_string(), value);
    }

    /// The object bound to `video`.
    pub fn video(&self) -> CliResult<Rc<dyn HostObject>> {
        as_object(self.global("video")?)
    }

    /// Reads `segments[0].segments[1]...`; the first segment names a global.
    pub fn read(&self, segments: &[String]) -> CliResult<HostValue> {
        match self.target(segments)? {
            Target::Global(name) => self.global(name),
            Target::Member(owner, name) => owner.get_property(&name),
        }
    }

    /// Writes a global or a property.
    pub fn write(&mut self, segments: &[String], value: HostValue) -> CliResult<()> {
        match self.target(segments)? {
            Target::Global(name) => {
                self.set_global(name, value);
                Ok(())
            }
            Target::Member(owner, name) => owner.set_property(&name, value),
        }
    }

    /// Calls a method; `VlcVideo` on its own names the constructor.
    pub fn call(&self, segments: &[String], args: &[HostValue]) -> CliResult<HostValue> {
        match self.target(segments)? {
            Target::Global(VIDEO_CLASS_NAME) => self.construct(EntryMode::Call, args),
            Target::Global(name) => Err(CoreError::InvalidArgument(format!(
                "'{}' is not a function",
                name
            ))),
            Target::Member(owner, name) => owner.call_method(&name, args),
        }
    }

    /// Splits a path into a global, or an object and its member name. The
    /// object part is walked by `resolve_path` from the named global.
    fn target<'s>(&self, segments: &'s [String]) -> CliResult<Target<'s>> {
        match segments {
            [] => Err(CoreError::InvalidArgument("empty path".to_string())),
            [name] => Ok(Target::Global(name)),
            [root, rest @ ..] => {
                let path = rest.join(".");
                let (owner, name) = resolve_path(as_object(self.global(root)?)?, &path)?;
                Ok(Target::Member(owner, name.to_string()))
            }
        }
    }
}

enum Target<'s> {
    Global(&'s str),
    Member(Rc<dyn HostObject>, String),
}

fn as_object(value: HostValue) -> CliResult<Rc<dyn HostObject>> {
    match value {
        HostValue::Object(obj) => Ok(obj),
        other => Err(CoreError::TypeMismatch {
            expected: "object",
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlcvideo_core::engine::mocks::{EngineCall, MockVideoEngine};

    fn path(text: &str) -> Vec<String> {
        text.split('.').map(str::to_string).collect()
    }

    fn host(engine: &MockVideoEngine, config: BindingConfig) -> Host<MockVideoEngine> {
        Host::new(Rc::new(Player::with_config(engine.clone(), config))).unwrap()
    }

    #[test]
    fn test_host_binds_video() {
        let engine = MockVideoEngine::with_names(&["A", "B"]);
        let host = host(&engine, BindingConfig::default());
        assert_eq!(host.video().unwrap().class_name(), "VlcVideo");
        assert_eq!(
            host.read(&path("video.tracks")).unwrap(),
            HostValue::from(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_host_write_forwards_to_engine() {
        let engine = MockVideoEngine::new();
        let mut host = host(&engine, BindingConfig::default());
        engine.clear_calls();
        host.write(&path("video.gamma"), HostValue::Number(0.75)).unwrap();
        assert_eq!(engine.calls(), vec![EngineCall::SetGamma(0.75)]);
    }

    #[test]
    fn test_host_method_call_on_nested_object() {
        let engine = MockVideoEngine::new();
        let host = host(&engine, BindingConfig::default());
        host.call(&path("video.deinterlace.enable"), &[HostValue::from("x")])
            .unwrap();
        assert_eq!(engine.deinterlace_mode().as_deref(), Some("x"));
    }

    #[test]
    fn test_host_constructor_policies() {
        let engine = MockVideoEngine::new();
        let strict = host(&engine, BindingConfig::default());
        assert!(strict.call(&path("VlcVideo"), &[]).is_err());

        let lenient = host(&engine, BindingConfig::lenient());
        assert_eq!(
            lenient.call(&path("VlcVideo"), &[]).unwrap(),
            HostValue::Undefined
        );
        let player = lenient.global("player").unwrap();
        assert!(matches!(
            lenient.call(&path("VlcVideo"), &[player]).unwrap(),
            HostValue::Object(_)
        ));
    }

    #[test]
    fn test_host_nested_path_through_non_object() {
        let engine = MockVideoEngine::new();
        let mut host = host(&engine, BindingConfig::default());
        assert!(matches!(
            host.read(&path("video.contrast.value")),
            Err(CoreError::TypeMismatch { expected: "object", .. })
        ));
        assert!(matches!(
            host.write(&path("video.deinterlace.mode"), HostValue::from("x")),
            Err(CoreError::ReadOnlyProperty { .. })
        ));
    }

    #[test]
    fn test_host_unknown_global() {
        let engine = MockVideoEngine::new();
        let host = host(&engine, BindingConfig::default());
        assert!(matches!(
            host.read(&path("audio.volume")),
            Err(CoreError::InvalidArgument(_))
        ));
    }
}
