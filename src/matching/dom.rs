//! DOM Matching Surface
//!
//! `MatchingSurface` over the server-rendered page. Elements are indexed
//! once at startup; items and drop targets are never created or removed
//! afterwards, only re-parented.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, NodeList};

use super::surface::MatchingSurface;
use crate::config::MatchingConfig;
use crate::error::UiResult;

/// A left-side drop target and the inner slot that receives items
#[derive(Clone)]
pub struct DropTarget {
    pub target: Element,
    pub slot: Element,
}

pub struct DomSurface {
    config: MatchingConfig,
    pool: Element,
    items: HashMap<String, Element>,
    slot_order: Vec<String>,
    targets: HashMap<String, DropTarget>,
    inputs: HashMap<String, HtmlInputElement>,
}

impl DomSurface {
    /// Index the matching question on `document`.
    /// Returns `Ok(None)` when the page has no pool container.
    pub fn scan(document: &Document, config: &MatchingConfig) -> UiResult<Option<Self>> {
        let Some(pool) = document.get_element_by_id(&config.pool_id) else {
            return Ok(None);
        };

        let mut surface = Self {
            config: config.clone(),
            pool,
            items: HashMap::new(),
            slot_order: Vec::new(),
            targets: HashMap::new(),
            inputs: HashMap::new(),
        };

        for target in elements(document.query_selector_all(&config.drop_selector)?) {
            let Some(left_id) = target.get_attribute(&config.left_id_attr) else {
                log::debug!("[MATCH] drop target without {}", config.left_id_attr);
                continue;
            };
            let Some(slot) = target.query_selector(&config.slot_selector)? else {
                log::debug!("[MATCH] drop target {} has no slot", left_id);
                continue;
            };
            if surface.targets.contains_key(&left_id) {
                continue;
            }

            let input_id = config.mapping_input_id(&left_id);
            match document
                .get_element_by_id(&input_id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                Some(input) => {
                    surface.inputs.insert(left_id.clone(), input);
                }
                None => log::debug!("[MATCH] no hidden input #{}", input_id),
            }

            surface.index_items(&slot)?;
            surface.slot_order.push(left_id.clone());
            surface.targets.insert(left_id, DropTarget { target, slot });
        }

        let pool = surface.pool.clone();
        surface.index_items(&pool)?;

        log::info!(
            "[MATCH] found {} item(s), {} slot(s)",
            surface.items.len(),
            surface.slot_order.len()
        );
        Ok(Some(surface))
    }

    fn index_items(&mut self, container: &Element) -> UiResult<()> {
        for item in elements(container.query_selector_all(&self.config.item_selector)?) {
            if let Some(right_id) = item.get_attribute(&self.config.right_id_attr) {
                // ids are unique per page; keep the first on a clash
                self.items.entry(right_id).or_insert(item);
            }
        }
        Ok(())
    }

    pub fn pool(&self) -> &Element {
        &self.pool
    }

    /// All indexed items, in no particular order
    pub fn items(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.items.iter().map(|(id, el)| (id.as_str(), el))
    }

    /// Drop targets in page order
    pub fn targets(&self) -> impl Iterator<Item = (&str, &DropTarget)> {
        self.slot_order
            .iter()
            .filter_map(|id| self.targets.get(id).map(|t| (id.as_str(), t)))
    }

    fn right_id_of(&self, el: &Element) -> Option<String> {
        el.get_attribute(&self.config.right_id_attr)
    }

    fn append(parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            log::debug!("[MATCH] append failed: {:?}", e);
        }
    }
}

impl MatchingSurface for DomSurface {
    fn pool_items(&self) -> Vec<String> {
        match self.pool.query_selector_all(&self.config.item_selector) {
            Ok(list) => elements(list)
                .iter()
                .filter_map(|el| self.right_id_of(el))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn reorder_pool(&self, order: &[String]) {
        // re-appending moves each element to the end, in order
        for id in order {
            if let Some(item) = self.items.get(id) {
                Self::append(&self.pool, item);
            }
        }
    }

    fn slot_ids(&self) -> Vec<String> {
        self.slot_order.clone()
    }

    fn has_item(&self, right_id: &str) -> bool {
        self.items.contains_key(right_id)
    }

    fn has_slot(&self, left_id: &str) -> bool {
        self.targets.contains_key(left_id)
    }

    fn slot_occupant(&self, left_id: &str) -> Option<String> {
        let slot = &self.targets.get(left_id)?.slot;
        let item = slot.query_selector(&self.config.item_selector).ok()??;
        self.right_id_of(&item)
    }

    fn move_to_pool(&self, right_id: &str) {
        if let Some(item) = self.items.get(right_id) {
            Self::append(&self.pool, item);
        }
    }

    fn move_to_slot(&self, right_id: &str, left_id: &str) {
        if let (Some(item), Some(target)) = (self.items.get(right_id), self.targets.get(left_id)) {
            Self::append(&target.slot, item);
        }
    }

    fn set_highlight(&self, right_id: &str, on: bool) {
        let Some(item) = self.items.get(right_id) else {
            return;
        };
        let classes = item.class_list();
        let result = if on {
            classes.add_1(&self.config.highlight_class)
        } else {
            classes.remove_1(&self.config.highlight_class)
        };
        if let Err(e) = result {
            log::debug!("[MATCH] class toggle failed: {:?}", e);
        }
    }

    fn read_mapping(&self, left_id: &str) -> Option<String> {
        self.inputs.get(left_id).map(HtmlInputElement::value)
    }

    fn write_mapping(&self, left_id: &str, value: &str) {
        if let Some(input) = self.inputs.get(left_id) {
            input.set_value(value);
        }
    }
}

/// Element nodes of a `NodeList`
fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
