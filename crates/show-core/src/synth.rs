//! Render configuration synthesis.
//!
//! `synthesize` is the only input the external rendering engine depends on.
//! It is a pure function of the device profile, the performance tier and the
//! user settings; callers re-run it whenever any of the three changes.

use crate::constants::*;
use crate::device::DeviceProfile;
use crate::performance::PerformanceTier;
use crate::settings::UserSettings;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRange {
    pub min: u32,
    pub max: u32,
}

impl VolumeRange {
    pub const MUTED: VolumeRange = VolumeRange { min: 0, max: 0 };
}

/// Immutable parameter set for the rendering engine. Replaced wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub particle_count: u32,
    pub trace_length: u32,
    pub explosion_radius: u32,
    pub intensity_level: u32,
    pub flicker_level: u32,
    pub sound_volume_range: VolumeRange,
    pub max_simultaneous_clicks: u32,
}

#[inline]
fn by_form_factor(values: [u32; 2], is_mobile: bool) -> u32 {
    if is_mobile {
        values[0]
    } else {
        values[1]
    }
}

pub fn synthesize(
    profile: &DeviceProfile,
    tier: PerformanceTier,
    settings: &UserSettings,
) -> RenderConfig {
    let reduced =
        tier == PerformanceTier::Low || profile.is_low_power || !settings.high_performance;
    let mobile = profile.is_mobile;

    let (particle_count, trace_length, explosion_radius, intensity_level, flicker_level) =
        if reduced {
            (
                by_form_factor(LOW_PARTICLES, mobile),
                by_form_factor(LOW_TRACE, mobile),
                LOW_EXPLOSION,
                LOW_INTENSITY,
                LOW_FLICKER,
            )
        } else {
            (
                by_form_factor(NORMAL_PARTICLES, mobile),
                by_form_factor(NORMAL_TRACE, mobile),
                NORMAL_EXPLOSION,
                if profile.is_landscape {
                    NORMAL_INTENSITY_LANDSCAPE
                } else {
                    NORMAL_INTENSITY_PORTRAIT
                },
                NORMAL_FLICKER,
            )
        };

    let sound_volume_range = if settings.sound_enabled {
        VolumeRange {
            min: SOUND_VOLUME_MIN,
            max: SOUND_VOLUME_MAX,
        }
    } else {
        VolumeRange::MUTED
    };

    RenderConfig {
        particle_count,
        trace_length,
        explosion_radius,
        intensity_level,
        flicker_level,
        sound_volume_range,
        max_simultaneous_clicks: if mobile {
            MAX_CLICKS_MOBILE
        } else {
            MAX_CLICKS_DESKTOP
        },
    }
}
