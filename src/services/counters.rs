use crate::models::{CounterProgress, PageEvent, Patch, Timer};
use crate::page::HandlerContext;

/// Starts every idle counter of a stat section the first time the section is
/// sufficiently visible. The section is not watched again afterwards.
pub fn on_section_visible(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Intersect { target, ratio, .. } = event else {
        return;
    };
    if *ratio < ctx.config.counter_visibility_threshold {
        return;
    }
    let Some(section) = ctx.layout.stat_section(target) else {
        return;
    };
    if !ctx.state.triggered_sections.insert(section.key.clone()) {
        return;
    }

    let ticks = ctx.config.counter_duration_ms as f64 / ctx.config.counter_tick_ms as f64;
    for counter in &section.counters {
        let Some(target) = counter.target.filter(|t| *t > 0) else {
            continue;
        };
        if counter.text != "0" || ctx.state.counters.contains_key(&counter.key) {
            continue;
        }
        ctx.state.counters.insert(
            counter.key.clone(),
            CounterProgress {
                current: 0.0,
                target,
                increment: target as f64 / ticks,
                done: false,
            },
        );
        ctx.effects.schedule(
            ctx.config.counter_tick_ms,
            Timer::CounterTick {
                counter: counter.key.clone(),
            },
        );
    }

    tracing::debug!(section = %section.key, "stat counters started");
}

/// One animation step: linear growth, floor for display, exact target at the end.
pub fn tick(ctx: &mut HandlerContext<'_>, key: &str) {
    let Some(progress) = ctx.state.counters.get_mut(key) else {
        return;
    };
    if progress.done {
        return;
    }

    progress.current += progress.increment;
    if progress.current >= progress.target as f64 {
        progress.done = true;
        ctx.effects.patch(Patch::text(key, progress.target.to_string()));
    } else {
        ctx.effects
            .patch(Patch::text(key, (progress.current.floor() as u64).to_string()));
        ctx.effects.schedule(
            ctx.config.counter_tick_ms,
            Timer::CounterTick {
                counter: key.to_string(),
            },
        );
    }
}
