// ============================================================================
// vlcvideo-core/src/binding/mod.rs
// ============================================================================
//
// HOST BINDINGS: Property and Method Surface Offered to a Scripting Host
//
// This module defines how native objects appear to a scripting host: a class
// name, a static table of properties with their access mode, and a method
// dispatcher. The video and deinterlace bindings implement this surface on
// top of the engine.
//
// KEY COMPONENTS:
// - HostObject: Trait implemented by every bound class
// - PropertyDescriptor / PropertyAccess: Static property tables
// - resolve_path: Dotted property path lookup used by hosts
// - VideoBinding, DeinterlaceBinding: The bound classes
// - VideoClass / EntryMode: The construction contract

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::any::Any;
use std::rc::Rc;

// ============================================================================
// SUBMODULES
// ============================================================================

/// The construction contract for `VlcVideo`
pub mod construct;

/// The `VlcDeinterlace` collaborator
pub mod deinterlace;

/// Host value model
pub mod value;

/// The `VlcVideo` binding
pub mod video;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use construct::{EntryMode, VideoClass};
pub use deinterlace::DeinterlaceBinding;
pub use value::HostValue;
pub use video::VideoBinding;

// ============================================================================
// PROPERTY TABLES
// ============================================================================

/// Whether a host may write a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccess {
    ReadOnly,
    ReadWrite,
}

/// One entry of a class's property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub access: PropertyAccess,
}

impl PropertyDescriptor {
    pub const fn read_only(name: &'static str) -> Self {
        Self {
            name,
            access: PropertyAccess::ReadOnly,
        }
    }

    pub const fn read_write(name: &'static str) -> Self {
        Self {
            name,
            access: PropertyAccess::ReadWrite,
        }
    }

    pub fn is_writable(&self) -> bool {
        self.access == PropertyAccess::ReadWrite
    }
}

// ============================================================================
// HOST OBJECT TRAIT
// ============================================================================

/// A native object exposed to the scripting host.
pub trait HostObject {
    /// Class name the host sees.
    fn class_name(&self) -> &'static str;

    /// Properties in declaration order.
    fn properties(&self) -> &'static [PropertyDescriptor];

    /// Methods the object answers to.
    fn methods(&self) -> &'static [&'static str] {
        &[]
    }

    fn get_property(&self, name: &str) -> CoreResult<HostValue>;

    fn set_property(&self, name: &str, value: HostValue) -> CoreResult<()>;

    fn call_method(&self, name: &str, _args: &[HostValue]) -> CoreResult<HostValue> {
        Err(CoreError::UnknownMethod {
            class: self.class_name(),
            name: name.to_string(),
        })
    }

    /// Upcast used by hosts to recover the concrete type of an argument.
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

/// Looks up `name` in `object`'s property table.
pub fn find_property<O: HostObject + ?Sized>(
    object: &O,
    name: &str,
) -> CoreResult<&'static PropertyDescriptor> {
    object
        .properties()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| CoreError::UnknownProperty {
            class: object.class_name(),
            name: name.to_string(),
        })
}

/// Looks up `name` and checks that the host may write it.
pub fn writable_property<O: HostObject + ?Sized>(
    object: &O,
    name: &str,
) -> CoreResult<&'static PropertyDescriptor> {
    let property = find_property(object, name)?;
    if !property.is_writable() {
        return Err(CoreError::ReadOnlyProperty {
            class: object.class_name(),
            name: name.to_string(),
        });
    }
    Ok(property)
}

/// Resolves a dotted path such as `deinterlace.mode` from `root`.
///
/// Every segment but the last must name an object-valued property. Returns
/// the object owning the last segment and that segment.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use vlcvideo_core::binding::{resolve_path, HostObject, VideoBinding};
/// use vlcvideo_core::engine::SimulatedEngine;
/// use vlcvideo_core::Player;
///
/// let player = Rc::new(Player::new(SimulatedEngine::default()));
/// let video: Rc<dyn HostObject> = VideoBinding::create(&player);
/// let (owner, name) = resolve_path(video, "deinterlace.enabled").unwrap();
/// assert_eq!(owner.class_name(), "VlcDeinterlace");
/// assert_eq!(name, "enabled");
/// ```
pub fn resolve_path<'p>(
    root: Rc<dyn HostObject>,
    path: &'p str,
) -> CoreResult<(Rc<dyn HostObject>, &'p str)> {
    let mut segments = path.split('.');
    let mut last = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::InvalidArgument(format!("empty property path '{}'", path)))?;
    let mut owner = root;

    for segment in segments {
        if segment.is_empty() {
            return Err(CoreError::InvalidArgument(format!(
                "empty segment in property path '{}'",
                path
            )));
        }
        let value = owner.get_property(last)?;
        owner = match value {
            HostValue::Object(obj) => obj,
            other => {
                return Err(CoreError::TypeMismatch {
                    expected: "object",
                    found: other.type_name(),
                });
            }
        };
        last = segment;
    }

    Ok((owner, last))
}
