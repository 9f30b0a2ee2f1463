// ============================================================================
// vlcvideo-core/src/binding/deinterlace.rs
// ============================================================================
//
// DEINTERLACE BINDING: The `VlcDeinterlace` Host Class
//
// Reached through `VlcVideo.deinterlace`. The engine can switch its
// deinterlace filter but cannot report the current one, so this binding
// remembers the last mode it set.

// ---- Internal crate imports ----
use super::{HostObject, HostValue, PropertyDescriptor};
use super::{find_property, writable_property};
use crate::engine::VideoEngine;
use crate::error::{CoreError, CoreResult};
use crate::player::Player;

// ---- Standard library imports ----
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Class name of the deinterlace binding as seen by the host.
pub const DEINTERLACE_CLASS_NAME: &str = "VlcDeinterlace";

static DEINTERLACE_PROPERTIES: [PropertyDescriptor; 2] = [
    PropertyDescriptor::read_only("enabled"),
    PropertyDescriptor::read_only("mode"),
];

static DEINTERLACE_METHODS: [&str; 2] = ["enable", "disable"];

/// Deinterlace filter control of one player.
pub struct DeinterlaceBinding<E: VideoEngine> {
    player: Rc<Player<E>>,
    mode: RefCell<Option<String>>,
}

impl<E: VideoEngine> DeinterlaceBinding<E> {
    pub fn new(player: Rc<Player<E>>) -> Self {
        Self {
            player,
            mode: RefCell::new(None),
        }
    }

    pub fn enabled(&self) -> bool {
        self.mode.borrow().is_some()
    }

    /// Current filter mode, empty when disabled.
    pub fn mode(&self) -> String {
        self.mode.borrow().clone().unwrap_or_default()
    }

    /// Enables the filter with `mode`, or with the configured default.
    pub fn enable(&self, mode: Option<&str>) {
        let mode = mode
            .unwrap_or(&self.player.config().default_deinterlace_mode)
            .to_string();
        self.player.engine().set_deinterlace(Some(&mode));
        *self.mode.borrow_mut() = Some(mode);
    }

    pub fn disable(&self) {
        self.player.engine().set_deinterlace(None);
        *self.mode.borrow_mut() = None;
    }
}

impl<E: VideoEngine + 'static> HostObject for DeinterlaceBinding<E> {
    fn class_name(&self) -> &'static str {
        DEINTERLACE_CLASS_NAME
    }

    fn properties(&self) -> &'static [PropertyDescriptor] {
        &DEINTERLACE_PROPERTIES
    }

    fn methods(&self) -> &'static [&'static str] {
        &DEINTERLACE_METHODS
    }

    fn get_property(&self, name: &str) -> CoreResult<HostValue> {
        match find_property(self, name)?.name {
            "enabled" => Ok(HostValue::from(self.enabled())),
            _ => Ok(HostValue::from(self.mode())),
        }
    }

    fn set_property(&self, name: &str, _value: HostValue) -> CoreResult<()> {
        // Both properties are read-only; this reports which error applies.
        writable_property(self, name)?;
        Ok(())
    }

    fn call_method(&self, name: &str, args: &[HostValue]) -> CoreResult<HostValue> {
        match name {
            "enable" => {
                let mode = match args.first() {
                    None => None,
                    Some(value) if value.is_nullish() => None,
                    Some(value) => Some(value.to_string_value()?),
                };
                self.enable(mode.as_deref());
                Ok(HostValue::Undefined)
            }
            "disable" => {
                self.disable();
                Ok(HostValue::Undefined)
            }
            _ => Err(CoreError::UnknownMethod {
                class: DEINTERLACE_CLASS_NAME,
                name: name.to_string(),
            }),
        }
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
