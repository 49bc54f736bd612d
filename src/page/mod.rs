pub mod dispatch;
pub mod view;

#[cfg(test)]
pub(crate) mod fixture;

use std::sync::Arc;

use crate::config::BehaviorConfig;
use crate::models::{
    Effects, ElementRole, EventKind, IntakePayload, PageEvent, PageLayout, SubmissionOutcome,
    Timer, UiState,
};
use crate::services::clock::Clock;
use crate::services::intake::{deliver, IntakeEndpoint};
use crate::services::timers::TimerQueue;
use crate::services::{counters, language, status};

pub use dispatch::{EventTable, Handler, HandlerContext};
pub use view::{Document, Element, View};

/// What the caller still has to do after an event was handled.
#[derive(Debug, Default, PartialEq)]
pub struct Dispatched {
    pub prevent_default: bool,
    pub submissions: Vec<IntakePayload>,
}

/// One live page: its markup contract, behavior state, bindings, pending timers and view.
pub struct Page<V: View> {
    layout: PageLayout,
    config: BehaviorConfig,
    state: UiState,
    table: EventTable,
    timers: TimerQueue,
    clock: Arc<dyn Clock>,
    view: V,
}

impl<V: View> Page<V> {
    pub fn new(layout: PageLayout, config: BehaviorConfig, clock: Arc<dyn Clock>, view: V) -> Self {
        let table = EventTable::standard(&config);
        Self {
            layout,
            config,
            state: UiState::default(),
            table,
            timers: TimerQueue::new(),
            clock,
            view,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn table(&self) -> &EventTable {
        &self.table
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Runs the handlers bound to every role the target plays for this kind of
    /// event, starting with the event's own role. Clicks then bubble to the
    /// document-level handlers.
    pub fn dispatch(&mut self, event: &PageEvent) -> Dispatched {
        let kind = event.kind();
        let mut roles = vec![event.role()];
        if let Some(target) = event.target() {
            for role in self.layout.roles_for(target) {
                if !roles.contains(&role) {
                    roles.push(role);
                }
            }
        }

        let mut effects = Effects::default();
        {
            let mut ctx = HandlerContext {
                state: &mut self.state,
                layout: &self.layout,
                config: &self.config,
                clock: self.clock.as_ref(),
                effects: &mut effects,
            };
            for role in &roles {
                for handler in self.table.handlers_for(*role, kind) {
                    handler(&mut ctx, event);
                }
            }
            if kind == EventKind::Click && !roles.contains(&ElementRole::Document) {
                for handler in self.table.handlers_for(ElementRole::Document, EventKind::Click) {
                    handler(&mut ctx, event);
                }
            }
        }
        self.apply(effects)
    }

    pub fn load(&mut self, path: &str) -> Dispatched {
        self.dispatch(&PageEvent::load(path))
    }

    pub fn settle(&mut self, outcome: SubmissionOutcome) -> Dispatched {
        self.dispatch(&PageEvent::SubmissionSettled(outcome))
    }

    /// Moves virtual time forward, firing every timer that falls due on the way.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers.now_ms().saturating_add(ms);
        while let Some(timer) = self.timers.pop_due(until) {
            self.fire(&timer);
        }
        self.timers.set_now(until);
    }

    fn fire(&mut self, timer: &Timer) {
        let mut effects = Effects::default();
        {
            let mut ctx = HandlerContext {
                state: &mut self.state,
                layout: &self.layout,
                config: &self.config,
                clock: self.clock.as_ref(),
                effects: &mut effects,
            };
            match timer {
                Timer::HideFormMessage { generation } => status::expire(&mut ctx, *generation),
                Timer::CounterTick { counter } => counters::tick(&mut ctx, counter),
                Timer::FadeNotice { generation } => language::fade_notice(&mut ctx, *generation),
                Timer::HideNotice { generation } => language::hide_notice(&mut ctx, *generation),
            }
        }
        self.apply(effects);
    }

    fn apply(&mut self, effects: Effects) -> Dispatched {
        for patch in &effects.patches {
            self.view.apply(patch);
        }
        for (delay_ms, timer) in effects.timers {
            self.timers.schedule(delay_ms, timer);
        }
        Dispatched {
            prevent_default: effects.prevent_default,
            submissions: effects.submissions,
        }
    }
}

/// Dispatches `event`, delivers any submission it produced and settles the page
/// with each outcome. Callers sharing a page across tasks run these steps
/// separately so the page stays free while the endpoint is pending.
pub async fn run_event<V: View>(
    page: &mut Page<V>,
    endpoint: &dyn IntakeEndpoint,
    event: &PageEvent,
) -> Dispatched {
    let dispatched = page.dispatch(event);
    for payload in &dispatched.submissions {
        let outcome = deliver(endpoint, payload).await;
        page.settle(outcome);
    }
    dispatched
}
