//! Side effects attached to recognized gestures.

use crate::device::DeviceProfile;
use crate::gesture::GestureKind;
use crate::settings::UserSettings;
use serde::{Deserialize, Serialize};

/// Named vibration patterns understood by the haptic actuator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticPattern {
    Impact,
    Explosion,
    Success,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations in milliseconds.
    pub fn pulses(self) -> &'static [u32] {
        match self {
            HapticPattern::Impact => &[15],
            HapticPattern::Explosion => &[40, 30, 60],
            HapticPattern::Success => &[20, 60, 20, 60, 40],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HapticPattern::Impact => "impact",
            HapticPattern::Explosion => "explosion",
            HapticPattern::Success => "success",
        }
    }
}

/// Special effects requested from the rendering engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Double,
    Amplified,
}

impl EffectKind {
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Double => "double",
            EffectKind::Amplified => "amplified",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub haptic: Option<HapticPattern>,
    pub effect: Option<EffectKind>,
}

/// Haptics only run on mobile profiles with vibration enabled; effects always run.
pub fn feedback_for(
    gesture: GestureKind,
    profile: &DeviceProfile,
    settings: &UserSettings,
) -> Feedback {
    let (pattern, effect) = match gesture {
        GestureKind::Tap => (HapticPattern::Impact, None),
        GestureKind::DoubleTap => (HapticPattern::Explosion, Some(EffectKind::Double)),
        GestureKind::LongPress => (HapticPattern::Success, Some(EffectKind::Amplified)),
    };
    let haptics_allowed = profile.is_mobile && settings.vibration_enabled;
    Feedback {
        haptic: haptics_allowed.then_some(pattern),
        effect,
    }
}
