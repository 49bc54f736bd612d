use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Te,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Te,
            Language::Te => Language::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Te => "te",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterProgress {
    pub current: f64,
    pub target: u64,
    pub increment: f64,
    pub done: bool,
}

/// Mutable state shared by the page behaviors. One per page, handed to every handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub nav_open: bool,
    pub outside_click_armed: bool,
    pub last_scroll: f64,
    pub shadow_elevated: Option<bool>,
    pub scroll_top_visible: Option<bool>,
    pub counters: BTreeMap<String, CounterProgress>,
    pub triggered_sections: BTreeSet<String>,
    pub faq_open: Option<String>,
    pub language: Language,
    pub notice_generation: u64,
    pub notice_created: bool,
    pub message_generation: u64,
    pub message_visible: bool,
    pub loaded_images: BTreeSet<String>,
    pub active_link: Option<String>,
}
