#![cfg(target_arch = "wasm32")]
use show_core::{ShowSession, Tuning};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod engine;
mod events;
mod frame;
mod haptics;
mod overlay;
mod shell;
mod storage;
mod timers;

use shell::Shell;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("show-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn build_session(
    tuning: Tuning,
    window: &web::Window,
    seed: u64,
    now: f64,
) -> anyhow::Result<ShowSession> {
    let settings = storage::load_settings();
    let viewport = dom::read_viewport(window);
    match ShowSession::new(tuning, settings, viewport, seed, now) {
        Ok(s) => Ok(s),
        Err(e) => {
            log::warn!("[web] invalid tuning ({}); falling back to defaults", e);
            ShowSession::new(Tuning::default(), settings, viewport, seed, now)
                .map_err(|e| anyhow::anyhow!(e))
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let tuning = storage::load_tuning(&document);
    let seed = rand::random::<u64>();
    let mut session = build_session(tuning, &window, seed, instant::now())?;

    let doc = document.clone();
    session
        .device_mut()
        .on_change(move |profile| dom::reflect_profile(&doc, profile));
    let doc = document.clone();
    session
        .performance_mut()
        .on_tier_change(move |check| dom::reflect_tier(&doc, check.tier));
    dom::reflect_profile(&document, &session.profile());
    dom::reflect_tier(&document, session.tier());
    log::info!(
        "[web] profile {:?} settings {:?}",
        session.profile(),
        session.settings()
    );

    let shell = Shell::new(session, document);
    // flush the initial render config and overlay message
    shell.update(|_, _| {});

    events::wire_touch_handlers(&shell);
    events::wire_viewport_handlers(&shell);
    events::wire_teardown(&shell);
    spawn_local(events::wire_battery(shell.clone()));
    frame::start_loop(shell);
    Ok(())
}
