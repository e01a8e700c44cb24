//! Assignment Board
//!
//! Authoritative slot ↔ item model of a matching question. Both directions
//! are updated together, so a slot holds at most one item and an item sits
//! in at most one slot. The DOM and the hidden inputs are projections of it.

use std::collections::HashMap;

/// Side effects of placing an item into a slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Item that previously occupied the target slot
    pub evicted: Option<String>,
    /// Slot the placed item was taken out of
    pub vacated: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentBoard {
    item_by_slot: HashMap<String, String>,
    slot_by_item: HashMap<String, String>,
}

impl AssignmentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `right_id` into `left_id`.
    /// Returns `None` when the item already sits in that slot.
    pub fn assign(&mut self, left_id: &str, right_id: &str) -> Option<Assignment> {
        if self.item_in(left_id) == Some(right_id) {
            return None;
        }

        let evicted = self.item_by_slot.remove(left_id).map(|prev| {
            self.slot_by_item.remove(&prev);
            prev
        });
        let vacated = self.slot_by_item.remove(right_id).map(|prev| {
            self.item_by_slot.remove(&prev);
            prev
        });

        self.item_by_slot.insert(left_id.to_string(), right_id.to_string());
        self.slot_by_item.insert(right_id.to_string(), left_id.to_string());

        Some(Assignment { evicted, vacated })
    }

    /// Take `right_id` out of its slot, returning the slot it left
    pub fn release(&mut self, right_id: &str) -> Option<String> {
        let slot = self.slot_by_item.remove(right_id)?;
        self.item_by_slot.remove(&slot);
        Some(slot)
    }

    pub fn item_in(&self, left_id: &str) -> Option<&str> {
        self.item_by_slot.get(left_id).map(String::as_str)
    }

    pub fn slot_of(&self, right_id: &str) -> Option<&str> {
        self.slot_by_item.get(right_id).map(String::as_str)
    }

    /// Value of the hidden input for `left_id` (empty = unmapped)
    pub fn mapping_value(&self, left_id: &str) -> &str {
        self.item_in(left_id).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.item_by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_by_slot.is_empty()
    }

    /// Both directions describe the same pairs
    pub fn is_consistent(&self) -> bool {
        self.item_by_slot.len() == self.slot_by_item.len()
            && self
                .item_by_slot
                .iter()
                .all(|(l, r)| self.slot_by_item.get(r) == Some(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_into_empty_slot() {
        let mut board = AssignmentBoard::new();
        let outcome = board.assign("L1", "A").unwrap();
        assert_eq!(outcome, Assignment::default());
        assert_eq!(board.item_in("L1"), Some("A"));
        assert_eq!(board.slot_of("A"), Some("L1"));
        assert_eq!(board.mapping_value("L2"), "");
    }

    #[test]
    fn test_overwrite_evicts_previous_item() {
        let mut board = AssignmentBoard::new();
        board.assign("L1", "A");
        let outcome = board.assign("L1", "B").unwrap();

        assert_eq!(outcome.evicted.as_deref(), Some("A"));
        assert_eq!(outcome.vacated, None);
        assert_eq!(board.slot_of("A"), None);
        assert_eq!(board.mapping_value("L1"), "B");
        assert!(board.is_consistent());
    }

    #[test]
    fn test_reassign_vacates_old_slot() {
        let mut board = AssignmentBoard::new();
        board.assign("L1", "X");
        let outcome = board.assign("L2", "X").unwrap();

        assert_eq!(outcome.vacated.as_deref(), Some("L1"));
        assert_eq!(outcome.evicted, None);
        assert_eq!(board.item_in("L1"), None);
        assert_eq!(board.item_in("L2"), Some("X"));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_reassign_onto_occupied_slot() {
        let mut board = AssignmentBoard::new();
        board.assign("L1", "X");
        board.assign("L2", "Y");
        let outcome = board.assign("L2", "X").unwrap();

        assert_eq!(outcome.evicted.as_deref(), Some("Y"));
        assert_eq!(outcome.vacated.as_deref(), Some("L1"));
        assert_eq!(board.len(), 1);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_same_slot_is_noop() {
        let mut board = AssignmentBoard::new();
        board.assign("L1", "A");
        assert_eq!(board.assign("L1", "A"), None);
        assert_eq!(board.item_in("L1"), Some("A"));
    }

    #[test]
    fn test_release() {
        let mut board = AssignmentBoard::new();
        board.assign("L1", "A");
        assert_eq!(board.release("A").as_deref(), Some("L1"));
        assert_eq!(board.release("A"), None);
        assert!(board.is_empty());
    }
}
