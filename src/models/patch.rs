use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::appointment::IntakePayload;

/// A single view mutation. Behaviors only ever describe changes; a `View` applies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    AddClass { key: String, class: String },
    RemoveClass { key: String, class: String },
    SetClassName { key: String, value: String },
    SetText { key: String, text: String },
    SetHtml { key: String, html: String },
    SetValue { key: String, value: String },
    SetAttr { key: String, name: String, value: String },
    RemoveAttr { key: String, name: String },
    SetStyle { key: String, property: String, value: String },
    InjectStyle { key: String, css: String },
    /// Field key → markup default, like `form.reset()`.
    ResetForm { fields: BTreeMap<String, String> },
    ScrollTo { top: f64, smooth: bool },
    ScrollIntoView { key: String },
}

impl Patch {
    pub fn add_class(key: &str, class: &str) -> Self {
        Patch::AddClass {
            key: key.to_string(),
            class: class.to_string(),
        }
    }

    pub fn remove_class(key: &str, class: &str) -> Self {
        Patch::RemoveClass {
            key: key.to_string(),
            class: class.to_string(),
        }
    }

    pub fn style(key: &str, property: &str, value: impl Into<String>) -> Self {
        Patch::SetStyle {
            key: key.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn text(key: &str, text: impl Into<String>) -> Self {
        Patch::SetText {
            key: key.to_string(),
            text: text.into(),
        }
    }

    pub fn value(key: &str, value: impl Into<String>) -> Self {
        Patch::SetValue {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Deferred work a behavior asks the runtime to run later.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "timer", rename_all = "snake_case")]
pub enum Timer {
    HideFormMessage { generation: u64 },
    CounterTick { counter: String },
    FadeNotice { generation: u64 },
    HideNotice { generation: u64 },
}

/// Everything a handler decided in response to one event.
#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    pub patches: Vec<Patch>,
    pub timers: Vec<(u64, Timer)>,
    pub submissions: Vec<IntakePayload>,
    pub prevent_default: bool,
}

impl Effects {
    pub fn patch(&mut self, patch: Patch) {
        self.patches.push(patch);
    }

    pub fn schedule(&mut self, delay_ms: u64, timer: Timer) {
        self.timers.push((delay_ms, timer));
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
            && self.timers.is_empty()
            && self.submissions.is_empty()
            && !self.prevent_default
    }
}
