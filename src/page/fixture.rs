use chrono::NaiveDateTime;

use super::dispatch::{Handler, HandlerContext};
use crate::config::BehaviorConfig;
use crate::models::{Effects, PageEvent, PageLayout, UiState};
use crate::services::clock::FixedClock;

/// Runs single handlers against the practice layout at 2025-06-16 09:00.
pub(crate) struct Fixture {
    pub state: UiState,
    pub layout: PageLayout,
    pub config: BehaviorConfig,
    pub clock: FixedClock,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            state: UiState::default(),
            layout: PageLayout::practice_site(),
            config: BehaviorConfig::default(),
            clock: FixedClock(
                NaiveDateTime::parse_from_str("2025-06-16 09:00:00", "%Y-%m-%d %H:%M:%S")
                    .unwrap(),
            ),
        }
    }

    pub fn run(&mut self, handler: Handler, event: &PageEvent) -> Effects {
        self.with_ctx(|ctx| handler(ctx, event))
    }

    pub fn with_ctx(&mut self, f: impl FnOnce(&mut HandlerContext<'_>)) -> Effects {
        let mut effects = Effects::default();
        let mut ctx = HandlerContext {
            state: &mut self.state,
            layout: &self.layout,
            config: &self.config,
            clock: &self.clock,
            effects: &mut effects,
        };
        f(&mut ctx);
        effects
    }
}
