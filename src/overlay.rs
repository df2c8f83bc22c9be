//! The rotating text line. Visibility is driven by the `hidden` class alone;
//! the page stylesheet owns the fade.

use crate::constants::{HIDDEN_CLASS, TEXT_OVERLAY_ID};
use show_core::OverlayUpdate;
use web_sys as web;

pub fn show(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(TEXT_OVERLAY_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TEXT_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

pub fn apply(document: &web::Document, update: &OverlayUpdate) {
    match update {
        OverlayUpdate::Hide => hide(document),
        OverlayUpdate::Show { text, .. } => show(document, text),
    }
}
