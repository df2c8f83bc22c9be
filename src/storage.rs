use crate::constants::{SETTINGS_STORAGE_KEY, TUNING_SCRIPT_ID};
use show_core::{Tuning, UserSettings};
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

/// Saved settings, or defaults when storage is unavailable or the entry is unreadable.
pub fn load_settings() -> UserSettings {
    let Some(raw) = local_storage().and_then(|s| s.get_item(SETTINGS_STORAGE_KEY).ok().flatten())
    else {
        return UserSettings::default();
    };
    match UserSettings::from_json(&raw) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[web] ignoring saved settings: {}", e);
            UserSettings::default()
        }
    }
}

pub fn save_settings(settings: &UserSettings) {
    let Some(storage) = local_storage() else {
        return;
    };
    match settings.to_json() {
        Ok(json) => {
            if storage.set_item(SETTINGS_STORAGE_KEY, &json).is_err() {
                log::warn!("[web] could not persist settings");
            }
        }
        Err(e) => log::warn!("[web] could not encode settings: {}", e),
    }
}

/// Tuning overrides from an optional inline JSON block.
pub fn load_tuning(document: &web::Document) -> Tuning {
    let Some(json) = document
        .get_element_by_id(TUNING_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return Tuning::default();
    };
    match Tuning::from_json(&json) {
        Ok(t) => {
            log::info!("[web] using tuning overrides from #{}", TUNING_SCRIPT_ID);
            t
        }
        Err(e) => {
            log::warn!("[web] ignoring tuning overrides: {}", e);
            Tuning::default()
        }
    }
}
