//! Quiz Page UI
//!
//! Browser behaviors for server-rendered quiz pages: the drag-and-drop
//! matching question and the countdown timer. Each one activates only when
//! its anchor element is on the page.

pub mod config;
pub mod error;
pub mod matching;
pub mod timer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::PageConfig;
use crate::error::{UiError, UiResult};

/// Entry point: install panic hook and logger, then boot once the DOM is ready
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match web_sys::window()
        .ok_or(UiError::NoWindow)
        .and_then(|w| w.document().ok_or(UiError::NoDocument))
    {
        Ok(document) => document,
        Err(_) => return,
    };

    let (config, config_error) = match PageConfig::from_page(&document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    // a second init only fails because a logger is already installed
    let _ = rolling_logger::init(
        rolling_logger::parse_level(&config.log_level),
        rolling_logger::DEFAULT_CAPACITY,
    );
    if let Some(e) = config_error {
        log::warn!("[CONFIG] using defaults: {}", e);
    }

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::<dyn FnMut()>::new(move || boot(&doc, &config));
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::warn!("[APP] cannot wait for DOMContentLoaded: {:?}", e);
            return;
        }
        on_ready.forget();
    } else {
        boot(&document, &config);
    }
}

/// Mount both components on a loaded document
pub fn boot(document: &Document, config: &PageConfig) {
    report("matching", matching::mount(document, &config.matching));
    report("timer", timer::mount(document, &config.timer));
}

fn report(component: &str, result: UiResult<bool>) {
    match result {
        Ok(true) => log::info!("[APP] {} active", component),
        Ok(false) => log::debug!("[APP] {} not on this page", component),
        Err(e) => log::warn!("[APP] {} disabled: {}", component, e),
    }
}
