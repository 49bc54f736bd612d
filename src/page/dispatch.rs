use std::collections::BTreeMap;

use crate::config::BehaviorConfig;
use crate::models::{Effects, ElementRole, EventKind, PageEvent, PageLayout, UiState};
use crate::services::clock::Clock;
use crate::services::{appointment_form, counters, faq, inputs, language, lazy_images, navigation};

/// Everything a handler may read or change while reacting to one event.
pub struct HandlerContext<'a> {
    pub state: &'a mut UiState,
    pub layout: &'a PageLayout,
    pub config: &'a BehaviorConfig,
    pub clock: &'a dyn Clock,
    pub effects: &'a mut Effects,
}

pub type Handler = fn(&mut HandlerContext<'_>, &PageEvent);

/// Enumerable binding table: (element role, event kind) → handlers, run in order.
#[derive(Default)]
pub struct EventTable {
    handlers: BTreeMap<(ElementRole, EventKind), Vec<Handler>>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, role: ElementRole, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.entry((role, kind)).or_default().push(handler);
        self
    }

    pub fn handlers_for(&self, role: ElementRole, kind: EventKind) -> &[Handler] {
        self.handlers
            .get(&(role, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn bindings(&self) -> impl Iterator<Item = (ElementRole, EventKind)> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Every site behavior. The scroll-to-top button is only bound when enabled.
    pub fn standard(config: &BehaviorConfig) -> Self {
        use ElementRole as R;
        use EventKind as K;

        let mut table = Self::new();
        table
            .on(R::Hamburger, K::Click, navigation::on_hamburger_click)
            .on(R::NavLink, K::Click, navigation::on_nav_link_click)
            .on(R::Document, K::Click, navigation::on_document_click)
            .on(R::Window, K::Scroll, navigation::on_scroll)
            .on(R::HashAnchor, K::Click, navigation::on_anchor_click)
            .on(R::Window, K::Load, navigation::highlight_active_link)
            .on(R::Window, K::Load, navigation::report_load_time)
            .on(R::StatSection, K::Intersect, counters::on_section_visible)
            .on(R::AppointmentForm, K::Submit, appointment_form::on_submit)
            .on(R::IntakeEndpoint, K::Settle, appointment_form::on_settled)
            .on(R::Window, K::Load, appointment_form::set_date_minimum)
            .on(R::FaqQuestion, K::Click, faq::on_question_click)
            .on(R::LangToggle, K::Click, language::on_toggle_click)
            .on(R::Window, K::Load, language::inject_notice_styles)
            .on(R::TelInput, K::Input, inputs::mask_phone_input)
            .on(R::TelInput, K::Focus, inputs::strip_phone_on_focus)
            .on(R::FormInput, K::Focus, inputs::mark_focused)
            .on(R::FormInput, K::Blur, inputs::unmark_if_empty)
            .on(R::Window, K::Load, inputs::mark_prefilled)
            .on(R::LazyImage, K::Intersect, lazy_images::on_image_visible);

        if config.scroll_top_enabled {
            table
                .on(R::Window, K::Load, navigation::install_scroll_top_button)
                .on(R::ScrollTopButton, K::Click, navigation::on_scroll_top_click)
                .on(R::ScrollTopButton, K::MouseEnter, navigation::on_scroll_top_enter)
                .on(R::ScrollTopButton, K::MouseLeave, navigation::on_scroll_top_leave);
        }

        table
    }
}
