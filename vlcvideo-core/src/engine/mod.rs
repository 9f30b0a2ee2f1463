// ============================================================================
// vlcvideo-core/src/engine/mod.rs
// ============================================================================
//
// MEDIA ENGINE: Call Surface of the Native Media Engine
//
// This module defines the subset of the native media engine that the video
// bindings talk to. Decoding, rendering and track negotiation all live behind
// this trait; the bindings only read and write state through it.
//
// KEY COMPONENTS:
// - VideoEngine: Trait for the video-track and image-adjustment accessors
// - TrackDescriptionNode: Read access to one node of the engine-owned list
// - TrackDescriptions: Scoped guard that releases the list on drop
// - TrackDescriptionIter: Borrowing iterator over the list nodes
// - TrackDescription: Owned node type used by the in-memory engines
//
// DESIGN PHILOSOPHY:
// The engine hands out its track description list as a borrowed resource
// that the caller must give back. `TrackDescriptions` ties that obligation to
// a Rust scope, so every exit path of a lookup releases the list exactly once
// and no reference to a node can outlive the guard.

// ---- Standard library imports ----
use std::borrow::Cow;
use std::ops::Deref;

// ============================================================================
// SUBMODULES
// ============================================================================

/// In-memory engine driven by a JSON media profile
pub mod simulated;

/// Call-recording engine for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

/// Native libvlc backend
#[cfg(feature = "libvlc")]
pub mod libvlc;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use simulated::{AdjustmentProfile, MediaProfile, SimulatedEngine, TrackProfile};

#[cfg(feature = "libvlc")]
pub use libvlc::LibVlcEngine;

// ============================================================================
// TRACK DESCRIPTION LIST
// ============================================================================

/// Read access to one node of an engine-owned track description list.
pub trait TrackDescriptionNode {
    /// Engine identifier of the track.
    fn id(&self) -> i32;

    /// Display name of the track, if the engine has one.
    ///
    /// Engines holding raw C strings may return an owned, lossily decoded
    /// name.
    fn name(&self) -> Option<Cow<'_, str>>;

    /// The following node, or `None` at the end of the list.
    fn next(&self) -> Option<&Self>;
}

/// Owned track description node.
///
/// This is the list representation used by [`SimulatedEngine`] and the mock
/// engine: a singly linked list terminated by `next == None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDescription {
    pub id: i32,
    pub name: Option<String>,
    pub next: Option<Box<TrackDescription>>,
}

impl TrackDescription {
    /// Builds a linked list from `(id, name)` pairs, preserving their order.
    ///
    /// Returns `None` for an empty input, which is how an engine reports
    /// "no list".
    pub fn list_from<I>(entries: I) -> Option<Box<TrackDescription>>
    where
        I: IntoIterator<Item = (i32, Option<String>)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        entries
            .into_iter()
            .rev()
            .fold(None, |next, (id, name)| {
                Some(Box::new(TrackDescription { id, name, next }))
            })
    }
}

impl TrackDescriptionNode for TrackDescription {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        self.name.as_deref().map(Cow::Borrowed)
    }

    fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}

// ============================================================================
// ENGINE TRAIT
// ============================================================================

/// The native media engine's video controls.
///
/// Every method takes `&self`: the engine owns its state and its own
/// mutability, the same way a native player handle does. Failures inside the
/// engine (no active video, unknown track id) are tolerated and surface as
/// default values, never as errors.
pub trait VideoEngine {
    /// Node type of the track description list.
    type Node: TrackDescriptionNode;

    /// Owning handle to the head of an acquired list.
    type TrackList: Deref<Target = Self::Node>;

    /// Acquires the current track description list.
    ///
    /// Returns `None` when the engine has no list to report. A returned list
    /// must be handed back through [`VideoEngine::release_track_descriptions`].
    fn acquire_track_descriptions(&self) -> Option<Self::TrackList>;

    /// Releases a list obtained from [`VideoEngine::acquire_track_descriptions`].
    fn release_track_descriptions(&self, list: Self::TrackList);

    /// Number of video tracks currently known to the engine.
    fn track_count(&self) -> u32;

    /// Identifier of the selected video track, `-1` when none.
    fn track(&self) -> i32;
    fn set_track(&self, track: u32);

    fn contrast(&self) -> f32;
    fn set_contrast(&self, contrast: f32);

    fn brightness(&self) -> f32;
    fn set_brightness(&self, brightness: f32);

    fn hue(&self) -> i32;
    fn set_hue(&self, hue: i32);

    fn saturation(&self) -> f32;
    fn set_saturation(&self, saturation: f32);

    fn gamma(&self) -> f32;
    fn set_gamma(&self, gamma: f32);

    /// Enables deinterlacing with the given filter mode, or disables it on `None`.
    fn set_deinterlace(&self, mode: Option<&str>);
}

// ============================================================================
// SCOPED ACQUISITION
// ============================================================================

/// A track description list borrowed from the engine for one call.
///
/// The list is released back to the engine when the guard is dropped. Nodes
/// reached through [`TrackDescriptions::iter`] borrow the guard, so none of
/// them can be kept past the release.
pub struct TrackDescriptions<'e, E: VideoEngine + ?Sized> {
    engine: &'e E,
    list: Option<E::TrackList>,
}

impl<'e, E: VideoEngine + ?Sized> TrackDescriptions<'e, E> {
    /// Acquires the list, or returns `None` when the engine reports none.
    pub fn acquire(engine: &'e E) -> Option<Self> {
        let list = engine.acquire_track_descriptions()?;
        log::trace!("Acquired track description list");
        Some(Self {
            engine,
            list: Some(list),
        })
    }

    /// First node of the list.
    pub fn head(&self) -> Option<&E::Node> {
        self.list.as_deref()
    }

    /// Iterates over the nodes in list order.
    pub fn iter(&self) -> TrackDescriptionIter<'_, E::Node> {
        TrackDescriptionIter { next: self.head() }
    }
}

impl<E: VideoEngine + ?Sized> Drop for TrackDescriptions<'_, E> {
    fn drop(&mut self) {
        if let Some(list) = self.list.take() {
            self.engine.release_track_descriptions(list);
            log::trace!("Released track description list");
        }
    }
}

/// Iterator over the nodes of a [`TrackDescriptions`] list.
pub struct TrackDescriptionIter<'a, N> {
    next: Option<&'a N>,
}

impl<'a, N: TrackDescriptionNode> Iterator for TrackDescriptionIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}
