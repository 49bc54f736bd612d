use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{FormSnapshot, PageLayout, Patch};

/// Renders patches. A browser binding maps these onto real DOM calls.
pub trait View {
    fn apply(&mut self, patch: &Patch);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub value: String,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// In-memory document. Elements are created the first time a patch touches them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub elements: BTreeMap<String, Element>,
    pub stylesheets: BTreeMap<String, String>,
    pub scroll_y: f64,
    pub smooth_scrolls: usize,
    pub last_scrolled_into_view: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the elements the layout describes with their markup state.
    pub fn from_layout(layout: &PageLayout) -> Self {
        let mut doc = Self::new();
        if let Some(form) = &layout.form {
            for field in &form.fields {
                doc.element_mut(&field.key).value = field.value.clone();
                doc.element_mut(&field.key)
                    .attrs
                    .insert("name".to_string(), field.name.name().to_string());
            }
        }
        for counter in layout.stat_sections.iter().flat_map(|s| s.counters.iter()) {
            let element = doc.element_mut(&counter.key);
            element.text = counter.text.clone();
            if let Some(target) = counter.target {
                element
                    .attrs
                    .insert("data-target".to_string(), target.to_string());
            }
        }
        for image in &layout.lazy_images {
            if let Some(src) = &image.data_src {
                doc.element_mut(&image.key)
                    .attrs
                    .insert("data-src".to_string(), src.clone());
            }
        }
        for link in &layout.nav_links {
            doc.element_mut(&link.key)
                .attrs
                .insert("href".to_string(), link.href.clone());
        }
        doc
    }

    pub fn element(&self, key: &str) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn element_mut(&mut self, key: &str) -> &mut Element {
        self.elements.entry(key.to_string()).or_default()
    }

    pub fn has_class(&self, key: &str, class: &str) -> bool {
        self.element(key).is_some_and(|e| e.has_class(class))
    }

    pub fn text(&self, key: &str) -> &str {
        self.element(key).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn value(&self, key: &str) -> &str {
        self.element(key).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn style(&self, key: &str, property: &str) -> Option<&str> {
        self.element(key).and_then(|e| e.style(property))
    }

    pub fn attr(&self, key: &str, name: &str) -> Option<&str> {
        self.element(key).and_then(|e| e.attr(name))
    }

    /// What the visitor typed. A browser binding gets this for free.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.element_mut(key).value = value.into();
    }

    /// Collects the form's current values, like `new FormData(form)`.
    pub fn form_snapshot(&self, layout: &PageLayout) -> FormSnapshot {
        let Some(form) = &layout.form else {
            return FormSnapshot::new();
        };
        FormSnapshot::from_pairs(
            form.fields
                .iter()
                .map(|f| (f.name.name(), self.value(&f.key).to_string())),
        )
    }
}

impl View for Document {
    fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::AddClass { key, class } => {
                self.element_mut(key).classes.insert(class.clone());
            }
            Patch::RemoveClass { key, class } => {
                self.element_mut(key).classes.remove(class);
            }
            Patch::SetClassName { key, value } => {
                self.element_mut(key).classes =
                    value.split_whitespace().map(str::to_string).collect();
            }
            Patch::SetText { key, text } => {
                let element = self.element_mut(key);
                element.text = text.clone();
                element.html = None;
            }
            Patch::SetHtml { key, html } => {
                self.element_mut(key).html = Some(html.clone());
            }
            Patch::SetValue { key, value } => {
                self.element_mut(key).value = value.clone();
            }
            Patch::SetAttr { key, name, value } => {
                self.element_mut(key).attrs.insert(name.clone(), value.clone());
            }
            Patch::RemoveAttr { key, name } => {
                self.element_mut(key).attrs.remove(name);
            }
            Patch::SetStyle {
                key,
                property,
                value,
            } => {
                self.element_mut(key)
                    .style
                    .insert(property.clone(), value.clone());
            }
            Patch::InjectStyle { key, css } => {
                self.stylesheets.entry(key.clone()).or_insert_with(|| css.clone());
            }
            Patch::ResetForm { fields } => {
                for (key, default) in fields {
                    self.element_mut(key).value = default.clone();
                }
            }
            Patch::ScrollTo { top, smooth } => {
                self.scroll_y = *top;
                if *smooth {
                    self.smooth_scrolls += 1;
                }
            }
            Patch::ScrollIntoView { key } => {
                self.last_scrolled_into_view = Some(key.clone());
            }
        }
    }
}
