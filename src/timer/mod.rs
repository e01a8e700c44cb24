//! Quiz Timer
//!
//! Live `M:SS` countdown in the timer display. When it runs out the page
//! navigates to the end-of-quiz URL.

mod countdown;

pub use countdown::{format_clock, parse_seconds, Countdown, Step, Tick, Ticker};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::TimerConfig;
use crate::error::{UiError, UiResult};

/// Tick period in milliseconds
pub const TICK_MS: u32 = 1_000;

/// Outcome of starting the timer on a page
pub enum TimerState {
    /// No timer display on the page
    Absent,
    /// Static "no time limit" text
    NoLimit,
    Running(RunningTimer),
}

/// Handle on a ticking display. The interval stays alive without it.
pub struct RunningTimer {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl RunningTimer {
    /// `false` once the interval was cleared on expiry or error
    pub fn is_ticking(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

/// Start the timer on `document`.
/// Returns `Ok(false)` when the page has no timer display.
pub fn mount(document: &Document, config: &TimerConfig) -> UiResult<bool> {
    Ok(!matches!(start(document, config)?, TimerState::Absent))
}

/// Start the timer and hand back its state
pub fn start(document: &Document, config: &TimerConfig) -> UiResult<TimerState> {
    let Some(display) = document.get_element_by_id(&config.display_id) else {
        log::debug!("[TIMER] no #{} on page", config.display_id);
        return Ok(TimerState::Absent);
    };
    let display: HtmlElement = display
        .dyn_into()
        .map_err(|_| UiError::MissingElement(format!("#{} (not an HTML element)", config.display_id)))?;

    let raw = display.get_attribute(&config.seconds_attr);
    let Some(countdown) = Countdown::from_attr(raw.as_deref()) else {
        log::info!("[TIMER] no time limit ({:?})", raw);
        display.set_text_content(Some(&config.no_limit_message));
        return Ok(TimerState::NoLimit);
    };

    let end_url = display.get_attribute(&config.end_url_attr);
    if end_url.is_none() {
        log::warn!("[TIMER] missing {}; expiry will not navigate", config.end_url_attr);
    }
    log::info!("[TIMER] {}s left", countdown.time_left().unwrap_or_default());

    let mut ticker = Ticker::new(countdown, end_url, config);
    let label = RwSignal::new(String::new());

    // first render is immediate, before the view is built
    apply(ticker.step(), label);
    display.set_text_content(None);
    mount_to(display, move || view! { {move || label.get()} }).forget();

    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    if ticker.is_finished() {
        return Ok(TimerState::Running(RunningTimer { interval }));
    }

    let ticker = Rc::new(RefCell::new(ticker));
    let handle_for_tick = interval.clone();
    let tick = Interval::new(TICK_MS, move || {
        let mut ticker = ticker.borrow_mut();
        apply(ticker.step(), label);
        if ticker.is_finished() {
            // dropping the handle clears the interval
            handle_for_tick.borrow_mut().take();
        }
    });
    *interval.borrow_mut() = Some(tick);

    Ok(TimerState::Running(RunningTimer { interval }))
}

fn apply(step: Option<Step>, label: RwSignal<String>) {
    let Some(step) = step else {
        return;
    };
    label.set(step.label);

    if let Some(url) = step.redirect {
        log::info!("[TIMER] expired, leaving for {}", url);
        if let Err(e) = navigate(&url) {
            log::warn!("[TIMER] navigation failed: {}", e);
        }
    } else if step.finished {
        log::warn!("[TIMER] stopped without navigating");
    }
}

fn navigate(url: &str) -> UiResult<()> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    window.location().set_href(url)?;
    Ok(())
}
