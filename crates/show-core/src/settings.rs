//! User preferences and the policy that may rewrite them.

use crate::performance::PerformanceTier;
use crate::timer::Millis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    pub high_performance: bool,
    /// Allow the show to switch `high_performance` off under sustained low fps.
    pub auto_downgrade: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            vibration_enabled: true,
            high_performance: true,
            auto_downgrade: true,
        }
    }
}

impl UserSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Switches high-performance mode off once the tier has stayed LOW for
/// `after_ms`. Fires at most once per LOW episode.
#[derive(Clone, Debug)]
pub struct AutoDowngrade {
    after_ms: Millis,
    low_since: Option<Millis>,
    fired: bool,
}

impl AutoDowngrade {
    pub fn new(after_ms: Millis) -> Self {
        Self {
            after_ms,
            low_since: None,
            fired: false,
        }
    }

    pub fn low_since(&self) -> Option<Millis> {
        self.low_since
    }

    /// Feed the current tier. Returns the adjusted settings when the policy fires.
    pub fn observe(
        &mut self,
        tier: PerformanceTier,
        now: Millis,
        settings: &UserSettings,
    ) -> Option<UserSettings> {
        if tier != PerformanceTier::Low {
            self.low_since = None;
            self.fired = false;
            return None;
        }
        let since = *self.low_since.get_or_insert(now);
        if self.fired || now - since < self.after_ms {
            return None;
        }
        if !(settings.high_performance && settings.auto_downgrade) {
            return None;
        }
        self.fired = true;
        log::info!(
            "[settings] low tier for {:.0}ms, disabling high-performance mode",
            now - since
        );
        Some(UserSettings {
            high_performance: false,
            ..*settings
        })
    }
}
