use crate::constants::BATTERY_EVENTS;
use crate::dom;
use crate::shell::Shell;
use show_core::PowerStatus;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn read_power(battery: &web::BatteryManager) -> PowerStatus {
    PowerStatus {
        level: battery.level(),
        charging: battery.charging(),
    }
}

/// Subscribe to the Battery Status API where it exists. Browsers without it
/// leave the device permanently "not low power".
pub async fn wire_battery(shell: Rc<Shell>) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    let get_battery = js_sys::Reflect::get(&navigator, &JsValue::from_str("getBattery"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(get_battery) = get_battery else {
        log::info!("[web] battery API unavailable");
        return;
    };
    let promise = match get_battery.call0(&navigator) {
        Ok(p) => js_sys::Promise::from(p),
        Err(e) => {
            log::info!("[web] getBattery threw: {:?}", e);
            return;
        }
    };
    let battery = match JsFuture::from(promise).await {
        Ok(b) => b.unchecked_into::<web::BatteryManager>(),
        Err(e) => {
            log::info!("[web] getBattery rejected: {:?}", e);
            return;
        }
    };

    let status = read_power(&battery);
    log::info!(
        "[web] battery level={:.2} charging={}",
        status.level,
        status.charging
    );
    shell.update(|session, now| session.on_power(status, now));

    for event in BATTERY_EVENTS {
        let s = shell.clone();
        let b = battery.clone();
        dom::add_listener(&battery, event, move |_ev: web::Event| {
            let status = read_power(&b);
            s.update(|session, now| session.on_power(status, now));
        });
    }
}
