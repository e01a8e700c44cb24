//! Matching Controller
//!
//! Drop semantics of the matching question. Every drop is applied to the
//! assignment board first, then projected onto the surface.

use rand::Rng;

use super::board::AssignmentBoard;
use super::shuffle::fisher_yates;
use super::surface::MatchingSurface;

/// What a drop did to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Unknown item or slot; nothing changed
    Ignored,
    /// Item was already in the target slot
    Unchanged,
    Assigned {
        left_id: String,
        right_id: String,
        /// Item sent back to the pool to make room
        evicted: Option<String>,
        /// Slot the item was dragged out of
        vacated: Option<String>,
    },
    /// Item went back to the pool, leaving `vacated` if it had a slot
    Returned {
        right_id: String,
        vacated: Option<String>,
    },
}

pub struct MatchingController<S: MatchingSurface> {
    surface: S,
    board: AssignmentBoard,
}

impl<S: MatchingSurface> MatchingController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            board: AssignmentBoard::new(),
        }
    }

    pub fn board(&self) -> &AssignmentBoard {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Shuffle the pool once. Pools of 0 or 1 items are left alone.
    pub fn shuffle_pool<R: Rng + ?Sized>(&self, rng: &mut R) {
        let mut order = self.surface.pool_items();
        if order.len() < 2 {
            return;
        }
        fisher_yates(&mut order, rng);
        self.surface.reorder_pool(&order);
    }

    /// Seed the board from what the page already shows: items sitting in
    /// slots first, then hidden inputs naming a free item. Inputs are
    /// rewritten from the board afterwards.
    pub fn hydrate(&mut self) {
        let slots = self.surface.slot_ids();

        for left_id in &slots {
            let Some(right_id) = self.surface.slot_occupant(left_id) else {
                continue;
            };
            if self.board.slot_of(&right_id).is_none() {
                self.board.assign(left_id, &right_id);
                self.surface.set_highlight(&right_id, true);
            }
        }

        for left_id in &slots {
            if self.board.item_in(left_id).is_some() {
                continue;
            }
            let Some(right_id) = self.surface.read_mapping(left_id) else {
                continue;
            };
            if right_id.is_empty()
                || !self.surface.has_item(&right_id)
                || self.board.slot_of(&right_id).is_some()
            {
                continue;
            }
            self.board.assign(left_id, &right_id);
            self.surface.move_to_slot(&right_id, left_id);
            self.surface.set_highlight(&right_id, true);
        }

        for left_id in &slots {
            self.surface.write_mapping(left_id, self.board.mapping_value(left_id));
        }

        log::debug!("[MATCH] hydrated {} assignment(s)", self.board.len());
    }

    /// Drop `right_id` onto the slot of `left_id`
    pub fn drop_on_slot(&mut self, left_id: &str, right_id: &str) -> DropOutcome {
        if !self.surface.has_slot(left_id) || !self.surface.has_item(right_id) {
            return DropOutcome::Ignored;
        }

        let Some(assignment) = self.board.assign(left_id, right_id) else {
            self.surface.set_highlight(right_id, true);
            return DropOutcome::Unchanged;
        };

        if let Some(evicted) = &assignment.evicted {
            self.surface.move_to_pool(evicted);
            self.surface.set_highlight(evicted, false);
        }

        if let Some(vacated) = &assignment.vacated {
            self.surface.write_mapping(vacated, "");
            if self.surface.slot_occupant(vacated).as_deref() == Some(right_id) {
                self.surface.move_to_pool(right_id);
                self.surface.set_highlight(right_id, false);
            }
        }

        self.surface.move_to_slot(right_id, left_id);
        self.surface.set_highlight(right_id, true);
        self.surface.write_mapping(left_id, right_id);

        DropOutcome::Assigned {
            left_id: left_id.to_string(),
            right_id: right_id.to_string(),
            evicted: assignment.evicted,
            vacated: assignment.vacated,
        }
    }

    /// Drop `right_id` back onto the pool
    pub fn drop_on_pool(&mut self, right_id: &str) -> DropOutcome {
        if !self.surface.has_item(right_id) {
            return DropOutcome::Ignored;
        }

        let vacated = self.board.release(right_id);
        if let Some(left_id) = &vacated {
            self.surface.write_mapping(left_id, "");
        }
        self.surface.move_to_pool(right_id);
        self.surface.set_highlight(right_id, false);

        DropOutcome::Returned {
            right_id: right_id.to_string(),
            vacated,
        }
    }
}
