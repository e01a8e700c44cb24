//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos pages.
//! The dragged id lives in a signal and is mirrored into the `DataTransfer`
//! payload, so a drop can still resolve it when the signal was never set.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DragEvent, EventTarget};

/// MIME type used for the native drag payload
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// Drag state for one drag-and-drop widget
#[derive(Clone, Copy)]
pub struct DragSession {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
}

pub fn create_drag_session() -> DragSession {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    DragSession {
        dragging_id_read,
        dragging_id_write,
    }
}

impl DragSession {
    /// Record `id` as the dragged item, both locally and in the event payload
    pub fn begin(&self, ev: &DragEvent, id: &str) {
        self.dragging_id_write.set(Some(id.to_string()));
        if let Some(dt) = ev.data_transfer() {
            if dt.set_data(PAYLOAD_FORMAT, id).is_err() {
                log::debug!("[DND] payload rejected for id={}", id);
            }
            dt.set_effect_allowed("move");
        }
    }

    /// Id of the item being dragged, preferring local state over the payload
    pub fn resolve(&self, ev: &DragEvent) -> Option<String> {
        resolve_dragged_id(self.current(), || read_payload(ev))
    }

    pub fn current(&self) -> Option<String> {
        self.dragging_id_read.get_untracked()
    }

    /// Forget the dragged item
    pub fn end(&self) {
        self.dragging_id_write.set(None);
    }
}

/// Pick the dragged id: local state first, then the lazily read payload.
/// Empty strings count as unset.
pub fn resolve_dragged_id<F>(local: Option<String>, payload: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    local
        .filter(|id| !id.is_empty())
        .or_else(|| payload().filter(|id| !id.is_empty()))
}

/// Read the drag payload, if the browser exposes one
pub fn read_payload(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()?.get_data(PAYLOAD_FORMAT).ok()
}

/// Create dragover handler that marks the element as a drop target
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}

/// Bind a drag event listener for the lifetime of the page
pub fn bind_drag_listener<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(DragEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(DragEvent)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Make `target` accept drops and run `on_drop` for each one.
/// Default browser handling is cancelled for both events.
pub fn bind_drop_target<F>(target: &EventTarget, mut on_drop: F) -> Result<(), JsValue>
where
    F: FnMut(DragEvent) + 'static,
{
    bind_drag_listener(target, "dragover", make_on_dragover())?;
    bind_drag_listener(target, "drop", move |ev: DragEvent| {
        ev.prevent_default();
        on_drop(ev);
    })
}
