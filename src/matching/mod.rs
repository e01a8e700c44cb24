//! Matching Question
//!
//! Drag right-side items from a shuffled pool onto left-side slots.
//! The current assignment is mirrored into hidden `mapping_<leftId>` inputs
//! that the quiz form submits.

mod board;
mod controller;
mod dom;
mod shuffle;
mod surface;

pub use board::{Assignment, AssignmentBoard};
pub use controller::{DropOutcome, MatchingController};
pub use dom::{DomSurface, DropTarget};
pub use shuffle::fisher_yates;
pub use surface::MatchingSurface;

use std::cell::RefCell;
use std::rc::Rc;

use leptos_dragdrop::{bind_drag_listener, bind_drop_target, create_drag_session, DragSession};
use web_sys::{Document, DragEvent, Element};

use crate::config::MatchingConfig;
use crate::error::UiResult;

type SharedController = Rc<RefCell<MatchingController<DomSurface>>>;

/// Wire the matching question on `document`.
/// Returns `Ok(false)` when the page has no matching question.
pub fn mount(document: &Document, config: &MatchingConfig) -> UiResult<bool> {
    let Some(surface) = DomSurface::scan(document, config)? else {
        log::debug!("[MATCH] no #{} on page", config.pool_id);
        return Ok(false);
    };

    let pool = surface.pool().clone();
    let items: Vec<(String, Element)> = surface
        .items()
        .map(|(id, el)| (id.to_string(), el.clone()))
        .collect();
    let targets: Vec<(String, Element)> = surface
        .targets()
        .map(|(id, t)| (id.to_string(), t.target.clone()))
        .collect();

    let mut controller = MatchingController::new(surface);
    controller.shuffle_pool(&mut rand::thread_rng());
    controller.hydrate();
    let controller: SharedController = Rc::new(RefCell::new(controller));

    // one session per widget
    let session = create_drag_session();

    for (right_id, item) in items {
        bind_drag_source(&item, right_id, session)?;
    }

    for (left_id, target) in targets {
        let controller = controller.clone();
        bind_drop_target(&target, move |ev: DragEvent| {
            let Some(right_id) = session.resolve(&ev) else {
                log::debug!("[DND] drop on {} without a dragged item", left_id);
                return;
            };
            session.end();
            let outcome = controller.borrow_mut().drop_on_slot(&left_id, &right_id);
            log::debug!("[DND] slot {} <- {}: {:?}", left_id, right_id, outcome);
        })?;
    }

    bind_drop_target(&pool, move |ev: DragEvent| {
        let Some(right_id) = session.resolve(&ev) else {
            log::debug!("[DND] drop on pool without a dragged item");
            return;
        };
        session.end();
        let outcome = controller.borrow_mut().drop_on_pool(&right_id);
        log::debug!("[DND] pool <- {}: {:?}", right_id, outcome);
    })?;

    Ok(true)
}

fn bind_drag_source(item: &Element, right_id: String, session: DragSession) -> UiResult<()> {
    item.set_attribute("draggable", "true")?;
    bind_drag_listener(item, "dragstart", move |ev: DragEvent| {
        session.begin(&ev, &right_id);
    })?;
    bind_drag_listener(item, "dragend", move |_ev: DragEvent| {
        session.end();
    })?;
    Ok(())
}
