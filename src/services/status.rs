use crate::models::{MessageKind, Patch, Timer};
use crate::page::HandlerContext;

/// Shows `text` in the form's status area. Success messages dismiss themselves;
/// errors stay until the next message replaces them.
pub fn show(ctx: &mut HandlerContext<'_>, text: &str, kind: MessageKind) {
    let Some(form) = ctx.layout.form.as_ref() else {
        return;
    };
    let key = form.message.as_str();

    ctx.state.message_generation += 1;
    ctx.state.message_visible = true;

    ctx.effects.patch(Patch::text(key, text));
    ctx.effects.patch(Patch::SetClassName {
        key: key.to_string(),
        value: format!("form-message {}", kind.as_str()),
    });
    ctx.effects.patch(Patch::style(key, "display", "block"));

    if kind == MessageKind::Success {
        ctx.effects.schedule(
            ctx.config.success_dismiss_ms,
            Timer::HideFormMessage {
                generation: ctx.state.message_generation,
            },
        );
    }
}

/// Hides the message if it is still the one the timer was armed for.
pub fn expire(ctx: &mut HandlerContext<'_>, generation: u64) {
    if generation != ctx.state.message_generation || !ctx.state.message_visible {
        return;
    }
    let Some(form) = ctx.layout.form.as_ref() else {
        return;
    };
    ctx.state.message_visible = false;
    ctx.effects.patch(Patch::style(&form.message, "display", "none"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fixture::Fixture;

    #[test]
    fn test_success_schedules_dismissal() {
        let mut fx = Fixture::new();
        let effects = fx.with_ctx(|ctx| show(ctx, "Saved", MessageKind::Success));

        assert!(effects.patches.contains(&Patch::text("formMessage", "Saved")));
        assert!(effects.patches.contains(&Patch::SetClassName {
            key: "formMessage".into(),
            value: "form-message success".into(),
        }));
        assert_eq!(
            effects.timers,
            vec![(10_000, Timer::HideFormMessage { generation: 1 })]
        );
    }

    #[test]
    fn test_error_persists() {
        let mut fx = Fixture::new();
        let effects = fx.with_ctx(|ctx| show(ctx, "Nope", MessageKind::Error));
        assert!(effects.timers.is_empty());
        assert!(effects.patches.contains(&Patch::style("formMessage", "display", "block")));
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_message() {
        let mut fx = Fixture::new();
        fx.with_ctx(|ctx| show(ctx, "Submitting", MessageKind::Success));
        fx.with_ctx(|ctx| show(ctx, "Failed", MessageKind::Error));

        let effects = fx.with_ctx(|ctx| expire(ctx, 1));
        assert!(effects.patches.is_empty());
        assert!(fx.state.message_visible);
    }

    #[test]
    fn test_current_timer_hides() {
        let mut fx = Fixture::new();
        fx.with_ctx(|ctx| show(ctx, "Saved", MessageKind::Success));
        let effects = fx.with_ctx(|ctx| expire(ctx, 1));
        assert_eq!(effects.patches, vec![Patch::style("formMessage", "display", "none")]);
        assert!(!fx.state.message_visible);
    }
}
