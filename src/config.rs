//! Page Configuration
//!
//! Names of the DOM anchors both components bind to, plus the timer texts.
//! Defaults match the server-rendered quiz page; a page may override any
//! field through a JSON `<script id="quiz-ui-config">` element.

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::UiResult;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "quiz-ui-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub matching: MatchingConfig,
    pub timer: TimerConfig,
    /// Log level name understood by the `log` crate
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            timer: TimerConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// DOM contract of the matching question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Id of the pool holding unassigned right-side items
    pub pool_id: String,
    pub item_selector: String,
    pub right_id_attr: String,
    /// Selector of left-side drop targets
    pub drop_selector: String,
    pub left_id_attr: String,
    /// Inner container of a drop target that receives the item
    pub slot_selector: String,
    /// Hidden inputs are named `<prefix><leftId>`
    pub mapping_prefix: String,
    pub highlight_class: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            pool_id: "matching-right-container".to_string(),
            item_selector: ".matching-right-item".to_string(),
            right_id_attr: "data-right-id".to_string(),
            drop_selector: ".matching-drop".to_string(),
            left_id_attr: "data-left-id".to_string(),
            slot_selector: ".matching-slot".to_string(),
            mapping_prefix: "mapping_".to_string(),
            highlight_class: "bg-success".to_string(),
        }
    }
}

impl MatchingConfig {
    /// Element id of the hidden input for `left_id`
    pub fn mapping_input_id(&self, left_id: &str) -> String {
        format!("{}{}", self.mapping_prefix, left_id)
    }
}

/// DOM contract and texts of the countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub display_id: String,
    /// Attribute holding the initial remaining seconds
    pub seconds_attr: String,
    /// Attribute holding the redirect target on expiry
    pub end_url_attr: String,
    pub no_limit_message: String,
    pub error_message: String,
    pub expired_message: String,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            display_id: "timer-display".to_string(),
            seconds_attr: "data-timeleft".to_string(),
            end_url_attr: "data-endurl".to_string(),
            no_limit_message: "Nincs időkorlát".to_string(),
            error_message: "Hiba az időmérésben".to_string(),
            expired_message: "Lejárt az idő!".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a config document; missing fields keep their defaults
    pub fn from_json(text: &str) -> UiResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Read overrides from the page. A page without a config element gets
    /// the defaults.
    pub fn from_page(document: &Document) -> UiResult<Self> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(text) => Self::from_json(&text),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.matching.pool_id, "matching-right-container");
        assert_eq!(config.matching.mapping_input_id("12"), "mapping_12");
        assert_eq!(config.timer.display_id, "timer-display");
        assert_eq!(config.timer.seconds_attr, "data-timeleft");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"timer": {"expired_message": "Time is up"}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.timer.expired_message, "Time is up");
        assert_eq!(config.timer.no_limit_message, "Nincs időkorlát");
        assert_eq!(config.matching, MatchingConfig::default());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_config_is_default() {
        assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(PageConfig::from_json("{not json").is_err());
    }
}
