//! Configuration structures and constants for the vlcvideo-core library.
//!
//! The binding layer itself has very little to configure: how the host-side
//! constructor treats a missing player argument, and which deinterlace filter
//! `enable()` picks when the host does not name one.

use serde::{Deserialize, Serialize};

/// Default deinterlace filter mode used by `enable()` without an argument.
pub const DEFAULT_DEINTERLACE_MODE: &str = "blend";

/// How the host-side constructor reacts to a missing or invalid player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionPolicy {
    /// Fail with `CoreError::InvalidArgument`.
    #[default]
    Strict,
    /// Drop the call and produce no instance.
    Lenient,
}

/// Configuration shared by the bindings of one player.
///
/// # Examples
///
/// ```rust
/// use vlcvideo_core::config::{BindingConfig, ConstructionPolicy};
///
/// let config = BindingConfig::lenient();
/// assert_eq!(config.construction_policy, ConstructionPolicy::Lenient);
/// assert_eq!(config.default_deinterlace_mode, "blend");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Treatment of constructor calls without a usable player
    pub construction_policy: ConstructionPolicy,

    /// Filter mode for `deinterlace.enable()` with no argument
    pub default_deinterlace_mode: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            construction_policy: ConstructionPolicy::Strict,
            default_deinterlace_mode: DEFAULT_DEINTERLACE_MODE.to_string(),
        }
    }
}

impl BindingConfig {
    /// Default configuration with the lenient construction policy.
    pub fn lenient() -> Self {
        Self {
            construction_policy: ConstructionPolicy::Lenient,
            ..Self::default()
        }
    }
}
