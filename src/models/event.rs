use serde::{Deserialize, Serialize};

use super::appointment::{FormSnapshot, SubmissionOutcome};

/// What part of the page an element plays. Bindings are keyed on this, not on ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    Hamburger,
    NavMenu,
    NavLink,
    Document,
    Window,
    HashAnchor,
    StatSection,
    AppointmentForm,
    FaqQuestion,
    LangToggle,
    TelInput,
    FormInput,
    LazyImage,
    ScrollTopButton,
    IntakeEndpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    Scroll,
    Submit,
    Input,
    Focus,
    Blur,
    Intersect,
    Load,
    Settle,
    MouseEnter,
    MouseLeave,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { role: ElementRole, target: String },
    Scroll { y: f64 },
    Input { role: ElementRole, target: String, value: String },
    Focus { role: ElementRole, target: String, value: String },
    Blur { role: ElementRole, target: String, value: String },
    Intersect { role: ElementRole, target: String, ratio: f64 },
    Submit { form: FormSnapshot },
    /// `load_ms` is the navigation-to-load time when the browser reports one.
    Load { path: String, load_ms: Option<u64> },
    MouseEnter { role: ElementRole, target: String },
    MouseLeave { role: ElementRole, target: String },
    SubmissionSettled(SubmissionOutcome),
}

impl PageEvent {
    pub fn role(&self) -> ElementRole {
        match self {
            PageEvent::Click { role, .. }
            | PageEvent::Input { role, .. }
            | PageEvent::Focus { role, .. }
            | PageEvent::Blur { role, .. }
            | PageEvent::Intersect { role, .. }
            | PageEvent::MouseEnter { role, .. }
            | PageEvent::MouseLeave { role, .. } => *role,
            PageEvent::Scroll { .. } | PageEvent::Load { .. } => ElementRole::Window,
            PageEvent::Submit { .. } => ElementRole::AppointmentForm,
            PageEvent::SubmissionSettled(_) => ElementRole::IntakeEndpoint,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::Scroll { .. } => EventKind::Scroll,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::Focus { .. } => EventKind::Focus,
            PageEvent::Blur { .. } => EventKind::Blur,
            PageEvent::Intersect { .. } => EventKind::Intersect,
            PageEvent::Submit { .. } => EventKind::Submit,
            PageEvent::Load { .. } => EventKind::Load,
            PageEvent::SubmissionSettled(_) => EventKind::Settle,
            PageEvent::MouseEnter { .. } => EventKind::MouseEnter,
            PageEvent::MouseLeave { .. } => EventKind::MouseLeave,
        }
    }

    /// Key of the element the event fired on, if it has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            PageEvent::Click { target, .. }
            | PageEvent::Input { target, .. }
            | PageEvent::Focus { target, .. }
            | PageEvent::Blur { target, .. }
            | PageEvent::Intersect { target, .. }
            | PageEvent::MouseEnter { target, .. }
            | PageEvent::MouseLeave { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn load(path: impl Into<String>) -> Self {
        PageEvent::Load {
            path: path.into(),
            load_ms: None,
        }
    }

    pub fn click(role: ElementRole, target: impl Into<String>) -> Self {
        PageEvent::Click {
            role,
            target: target.into(),
        }
    }
}
