// ============================================================================
// vlcvideo-core/src/engine/libvlc.rs
// ============================================================================
//
// LIBVLC ENGINE: Native Backend over the libvlc C API
//
// This module implements `VideoEngine` on top of a libvlc media player. The
// bindings are hand-written for the handful of libvlc 3 entry points the
// video controls need; nothing else of the library is declared.
//
// KEY COMPONENTS:
// - ffi: extern declarations and C structs
// - VlcTrackDescription: Node view over `libvlc_track_description_t`
// - VlcTrackList: Owning pointer to an acquired description list
// - LibVlcEngine: Retained media player handle implementing VideoEngine
//
// AI-ASSISTANT-INFO: libvlc FFI backend, compiled with the "libvlc" feature

// ---- Internal crate imports ----
use super::{TrackDescriptionNode, VideoEngine};
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::ops::Deref;
use std::ptr::{self, NonNull};

// ============================================================================
// FFI DECLARATIONS
// ============================================================================

#[allow(non_camel_case_types)]
pub mod ffi {
    use std::os::raw::{c_char, c_int, c_uint};

    #[repr(C)]
    pub struct libvlc_instance_t {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct libvlc_media_player_t {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct libvlc_track_description_t {
        pub i_id: c_int,
        pub psz_name: *mut c_char,
        pub p_next: *mut libvlc_track_description_t,
    }

    // libvlc_video_adjust_option_t
    pub const LIBVLC_ADJUST_ENABLE: c_uint = 0;
    pub const LIBVLC_ADJUST_CONTRAST: c_uint = 1;
    pub const LIBVLC_ADJUST_BRIGHTNESS: c_uint = 2;
    pub const LIBVLC_ADJUST_HUE: c_uint = 3;
    pub const LIBVLC_ADJUST_SATURATION: c_uint = 4;
    pub const LIBVLC_ADJUST_GAMMA: c_uint = 5;

    #[link(name = "vlc")]
    unsafe extern "C" {
        pub fn libvlc_new(argc: c_int, argv: *const *const c_char) -> *mut libvlc_instance_t;
        pub fn libvlc_release(instance: *mut libvlc_instance_t);

        pub fn libvlc_media_player_new(
            instance: *mut libvlc_instance_t,
        ) -> *mut libvlc_media_player_t;
        pub fn libvlc_media_player_retain(mp: *mut libvlc_media_player_t);
        pub fn libvlc_media_player_release(mp: *mut libvlc_media_player_t);

        pub fn libvlc_video_get_track_description(
            mp: *mut libvlc_media_player_t,
        ) -> *mut libvlc_track_description_t;
        pub fn libvlc_track_description_list_release(list: *mut libvlc_track_description_t);
        pub fn libvlc_video_get_track_count(mp: *mut libvlc_media_player_t) -> c_int;
        pub fn libvlc_video_get_track(mp: *mut libvlc_media_player_t) -> c_int;
        pub fn libvlc_video_set_track(mp: *mut libvlc_media_player_t, track: c_int) -> c_int;

        pub fn libvlc_video_get_adjust_int(mp: *mut libvlc_media_player_t, option: c_uint) -> c_int;
        pub fn libvlc_video_set_adjust_int(
            mp: *mut libvlc_media_player_t,
            option: c_uint,
            value: c_int,
        );
        pub fn libvlc_video_get_adjust_float(mp: *mut libvlc_media_player_t, option: c_uint) -> f32;
        pub fn libvlc_video_set_adjust_float(
            mp: *mut libvlc_media_player_t,
            option: c_uint,
            value: f32,
        );

        pub fn libvlc_video_set_deinterlace(mp: *mut libvlc_media_player_t, mode: *const c_char);
    }
}

// ============================================================================
// TRACK DESCRIPTION LIST
// ============================================================================

/// View of one `libvlc_track_description_t` node.
#[repr(transparent)]
pub struct VlcTrackDescription(ffi::libvlc_track_description_t);

impl TrackDescriptionNode for VlcTrackDescription {
    fn id(&self) -> i32 {
        self.0.i_id
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        if self.0.psz_name.is_null() {
            return None;
        }
        // SAFETY: libvlc stores a NUL-terminated string that lives as long as
        // the list, and the list outlives `&self`. Names that are not UTF-8
        // (Latin-1 container titles) are kept with replacement characters.
        Some(unsafe { CStr::from_ptr(self.0.psz_name) }.to_string_lossy())
    }

    fn next(&self) -> Option<&Self> {
        // SAFETY: `p_next` is either null or the next node of the same list;
        // `VlcTrackDescription` is a transparent wrapper of the C struct.
        unsafe { self.0.p_next.cast::<VlcTrackDescription>().as_ref() }
    }
}

/// Head of a list returned by `libvlc_video_get_track_description`.
///
/// Must go back through [`VideoEngine::release_track_descriptions`]; dropping
/// it without doing so leaks the list.
pub struct VlcTrackList(NonNull<ffi::libvlc_track_description_t>);

impl Deref for VlcTrackList {
    type Target = VlcTrackDescription;

    fn deref(&self) -> &VlcTrackDescription {
        // SAFETY: the pointer is non-null and valid until released.
        unsafe { &*self.0.as_ptr().cast::<VlcTrackDescription>() }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// libvlc media player implementing [`VideoEngine`].
///
/// Holds a reference on the player (and on the instance, when this engine
/// created it) and drops both on drop.
pub struct LibVlcEngine {
    instance: Option<NonNull<ffi::libvlc_instance_t>>,
    player: NonNull<ffi::libvlc_media_player_t>,
}

impl LibVlcEngine {
    /// Creates a libvlc instance with default arguments and a player on it.
    pub fn new() -> CoreResult<Self> {
        // SAFETY: argc = 0 with a null argv is the documented default call.
        let instance = NonNull::new(unsafe { ffi::libvlc_new(0, ptr::null()) })
            .ok_or_else(|| CoreError::OperationFailed("libvlc_new failed".to_string()))?;

        // SAFETY: `instance` is a live instance.
        let player = match NonNull::new(unsafe { ffi::libvlc_media_player_new(instance.as_ptr()) }) {
            Some(player) => player,
            None => {
                // SAFETY: releases the reference taken by libvlc_new above.
                unsafe { ffi::libvlc_release(instance.as_ptr()) };
                return Err(CoreError::OperationFailed(
                    "libvlc_media_player_new failed".to_string(),
                ));
            }
        };

        log::debug!("Created libvlc instance and media player");
        Ok(Self {
            instance: Some(instance),
            player,
        })
    }

    /// Wraps an existing media player, taking an additional reference on it.
    ///
    /// # Safety
    ///
    /// `player` must be null or a live `libvlc_media_player_t`.
    pub unsafe fn from_raw(player: *mut ffi::libvlc_media_player_t) -> CoreResult<Self> {
        let player = NonNull::new(player).ok_or_else(|| {
            CoreError::InvalidArgument("null libvlc media player".to_string())
        })?;
        // SAFETY: caller guarantees `player` is live.
        unsafe { ffi::libvlc_media_player_retain(player.as_ptr()) };
        Ok(Self {
            instance: None,
            player,
        })
    }

    /// The wrapped media player pointer.
    pub fn as_ptr(&self) -> *mut ffi::libvlc_media_player_t {
        self.player.as_ptr()
    }

    fn adjust_float(&self, option: std::os::raw::c_uint) -> f32 {
        // SAFETY: `self.player` is retained for the lifetime of `self`.
        unsafe { ffi::libvlc_video_get_adjust_float(self.as_ptr(), option) }
    }

    fn set_adjust_float(&self, option: std::os::raw::c_uint, value: f32) {
        // SAFETY: `self.player` is retained for the lifetime of `self`.
        unsafe {
            ffi::libvlc_video_set_adjust_int(self.as_ptr(), ffi::LIBVLC_ADJUST_ENABLE, 1);
            ffi::libvlc_video_set_adjust_float(self.as_ptr(), option, value);
        }
    }
}

impl Drop for LibVlcEngine {
    fn drop(&mut self) {
        // SAFETY: each pointer holds exactly one reference owned by `self`.
        unsafe {
            ffi::libvlc_media_player_release(self.player.as_ptr());
            if let Some(instance) = self.instance {
                ffi::libvlc_release(instance.as_ptr());
            }
        }
    }
}

impl VideoEngine for LibVlcEngine {
    type Node = VlcTrackDescription;
    type TrackList = VlcTrackList;

    fn acquire_track_descriptions(&self) -> Option<VlcTrackList> {
        // SAFETY: `self.player` is live.
        let head = unsafe { ffi::libvlc_video_get_track_description(self.as_ptr()) };
        NonNull::new(head).map(VlcTrackList)
    }

    fn release_track_descriptions(&self, list: VlcTrackList) {
        // SAFETY: `list` came from libvlc_video_get_track_description and is
        // released exactly once since it is consumed here.
        unsafe { ffi::libvlc_track_description_list_release(list.0.as_ptr()) };
    }

    fn track_count(&self) -> u32 {
        // SAFETY: `self.player` is live.
        let count = unsafe { ffi::libvlc_video_get_track_count(self.as_ptr()) };
        u32::try_from(count).unwrap_or(0)
    }

    fn track(&self) -> i32 {
        // SAFETY: `self.player` is live.
        unsafe { ffi::libvlc_video_get_track(self.as_ptr()) }
    }

    fn set_track(&self, track: u32) {
        let Ok(track) = i32::try_from(track) else {
            log::debug!("Track id {} out of libvlc range", track);
            return;
        };
        // SAFETY: `self.player` is live.
        if unsafe { ffi::libvlc_video_set_track(self.as_ptr(), track) } != 0 {
            log::debug!("libvlc rejected video track {}", track);
        }
    }

    fn contrast(&self) -> f32 {
        self.adjust_float(ffi::LIBVLC_ADJUST_CONTRAST)
    }

    fn set_contrast(&self, contrast: f32) {
        self.set_adjust_float(ffi::LIBVLC_ADJUST_CONTRAST, contrast);
    }

    fn brightness(&self) -> f32 {
        self.adjust_float(ffi::LIBVLC_ADJUST_BRIGHTNESS)
    }

    fn set_brightness(&self, brightness: f32) {
        self.set_adjust_float(ffi::LIBVLC_ADJUST_BRIGHTNESS, brightness);
    }

    // Hue is a float variable in libvlc 3; the integer view rounds it.
    fn hue(&self) -> i32 {
        self.adjust_float(ffi::LIBVLC_ADJUST_HUE).round() as i32
    }

    fn set_hue(&self, hue: i32) {
        self.set_adjust_float(ffi::LIBVLC_ADJUST_HUE, hue as f32);
    }

    fn saturation(&self) -> f32 {
        self.adjust_float(ffi::LIBVLC_ADJUST_SATURATION)
    }

    fn set_saturation(&self, saturation: f32) {
        self.set_adjust_float(ffi::LIBVLC_ADJUST_SATURATION, saturation);
    }

    fn gamma(&self) -> f32 {
        self.adjust_float(ffi::LIBVLC_ADJUST_GAMMA)
    }

    fn set_gamma(&self, gamma: f32) {
        self.set_adjust_float(ffi::LIBVLC_ADJUST_GAMMA, gamma);
    }

    fn set_deinterlace(&self, mode: Option<&str>) {
        let mode = match mode.map(CString::new).transpose() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("Ignoring deinterlace mode with interior NUL: {}", e);
                return;
            }
        };
        let mode_ptr = mode.as_ref().map_or(ptr::null(), |m| m.as_ptr());
        // SAFETY: `self.player` is live; `mode_ptr` is null or a C string
        // that outlives the call.
        unsafe { ffi::libvlc_video_set_deinterlace(self.as_ptr(), mode_ptr) };
    }
}
