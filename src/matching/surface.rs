//! Matching Surface
//!
//! What the controller needs from the rendered page. The DOM implementation
//! lives in `dom.rs`; tests drive the controller through an in-memory one.

/// Visual side of a matching question: pool, slots, highlights and the
/// hidden mapping inputs. Unknown ids are ignored by every method.
pub trait MatchingSurface {
    /// Ids of the items currently in the pool, in display order
    fn pool_items(&self) -> Vec<String>;

    /// Re-insert the pool items in `order`
    fn reorder_pool(&self, order: &[String]);

    /// Ids of all drop targets, in page order
    fn slot_ids(&self) -> Vec<String>;

    fn has_item(&self, right_id: &str) -> bool;

    fn has_slot(&self, left_id: &str) -> bool;

    /// Item physically inside the slot of `left_id`
    fn slot_occupant(&self, left_id: &str) -> Option<String>;

    /// Append the item to the end of the pool
    fn move_to_pool(&self, right_id: &str);

    /// Re-parent the item into the slot of `left_id`
    fn move_to_slot(&self, right_id: &str, left_id: &str);

    fn set_highlight(&self, right_id: &str, on: bool);

    /// Current value of the hidden input for `left_id`
    fn read_mapping(&self, left_id: &str) -> Option<String>;

    fn write_mapping(&self, left_id: &str, value: &str);
}
