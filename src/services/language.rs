use crate::models::{Language, PageEvent, Patch, Timer};
use crate::page::HandlerContext;

pub const TELUGU_NOTICE: &str =
    "Telugu language support coming soon! తెలుగు మద్దతు త్వరలో వస్తుంది!";
pub const ENGLISH_NOTICE: &str = "Switched to English";

const LANGUAGE_ICON: &str = r#"<i class="fas fa-language"></i>"#;
const NOTICE_STYLES_KEY: &str = "langNotificationStyles";

pub const NOTICE_KEYFRAMES: &str = "@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";

const NOTICE_BASE_STYLE: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("background", "#2563eb"),
    ("color", "white"),
    ("padding", "1rem 1.5rem"),
    ("border-radius", "8px"),
    ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
    ("z-index", "10000"),
];

/// Swaps the toggle label and announces the switch. No content is translated.
pub fn on_toggle_click(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let Some(toggle) = ctx.layout.lang_toggle.as_deref() else {
        return;
    };

    ctx.state.language = ctx.state.language.toggled();
    let (label, notice) = match ctx.state.language {
        Language::Te => ("English", TELUGU_NOTICE),
        Language::En => ("తెలుగు", ENGLISH_NOTICE),
    };
    ctx.effects.patch(Patch::SetHtml {
        key: toggle.to_string(),
        html: format!("{LANGUAGE_ICON} {label}"),
    });

    tracing::info!(language = ctx.state.language.as_str(), "language toggled");
    show_notice(ctx, notice);
}

pub fn show_notice(ctx: &mut HandlerContext<'_>, message: &str) {
    let key = ctx.layout.lang_notification.as_str();

    if !ctx.state.notice_created {
        ctx.state.notice_created = true;
        for (property, value) in NOTICE_BASE_STYLE {
            ctx.effects.patch(Patch::style(key, property, value));
        }
    }

    ctx.effects.patch(Patch::text(key, message));
    ctx.effects.patch(Patch::style(key, "display", "block"));
    ctx.effects.patch(Patch::style(key, "animation", "slideIn 0.3s ease"));

    ctx.state.notice_generation += 1;
    ctx.effects.schedule(
        ctx.config.notice_dismiss_ms,
        Timer::FadeNotice {
            generation: ctx.state.notice_generation,
        },
    );
}

/// First dismissal step: slide out, then hide once the animation finished.
pub fn fade_notice(ctx: &mut HandlerContext<'_>, generation: u64) {
    if generation != ctx.state.notice_generation {
        return;
    }
    let key = ctx.layout.lang_notification.as_str();
    ctx.effects
        .patch(Patch::style(key, "animation", "slideOut 0.3s ease"));
    ctx.effects
        .schedule(ctx.config.notice_fade_ms, Timer::HideNotice { generation });
}

pub fn hide_notice(ctx: &mut HandlerContext<'_>, generation: u64) {
    if generation != ctx.state.notice_generation {
        return;
    }
    ctx.effects
        .patch(Patch::style(&ctx.layout.lang_notification, "display", "none"));
}

pub fn inject_notice_styles(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    ctx.effects.patch(Patch::InjectStyle {
        key: NOTICE_STYLES_KEY.to_string(),
        css: NOTICE_KEYFRAMES.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementRole;
    use crate::page::fixture::Fixture;

    fn toggle() -> PageEvent {
        PageEvent::click(ElementRole::LangToggle, "langToggle")
    }

    #[test]
    fn test_first_toggle_switches_to_telugu_placeholder() {
        let mut fx = Fixture::new();
        let effects = fx.run(on_toggle_click, &toggle());

        assert_eq!(fx.state.language, Language::Te);
        assert!(effects.patches.contains(&Patch::SetHtml {
            key: "langToggle".into(),
            html: r#"<i class="fas fa-language"></i> English"#.into(),
        }));
        assert!(effects
            .patches
            .contains(&Patch::text("langNotification", TELUGU_NOTICE)));
        assert!(effects
            .patches
            .contains(&Patch::style("langNotification", "position", "fixed")));
        assert_eq!(effects.timers, vec![(3000, Timer::FadeNotice { generation: 1 })]);
    }

    #[test]
    fn test_second_toggle_returns_to_english_without_restyling() {
        let mut fx = Fixture::new();
        fx.run(on_toggle_click, &toggle());
        let effects = fx.run(on_toggle_click, &toggle());

        assert_eq!(fx.state.language, Language::En);
        assert!(effects
            .patches
            .contains(&Patch::text("langNotification", ENGLISH_NOTICE)));
        assert!(!effects
            .patches
            .contains(&Patch::style("langNotification", "position", "fixed")));
    }

    #[test]
    fn test_fade_then_hide() {
        let mut fx = Fixture::new();
        fx.run(on_toggle_click, &toggle());

        let faded = fx.with_ctx(|ctx| fade_notice(ctx, 1));
        assert_eq!(
            faded.patches,
            vec![Patch::style("langNotification", "animation", "slideOut 0.3s ease")]
        );
        assert_eq!(faded.timers, vec![(300, Timer::HideNotice { generation: 1 })]);

        let hidden = fx.with_ctx(|ctx| hide_notice(ctx, 1));
        assert_eq!(
            hidden.patches,
            vec![Patch::style("langNotification", "display", "none")]
        );
    }

    #[test]
    fn test_older_notice_timers_are_ignored() {
        let mut fx = Fixture::new();
        fx.run(on_toggle_click, &toggle());
        fx.run(on_toggle_click, &toggle());
        assert!(fx.with_ctx(|ctx| fade_notice(ctx, 1)).is_empty());
        assert!(fx.with_ctx(|ctx| hide_notice(ctx, 1)).is_empty());
    }

    #[test]
    fn test_missing_toggle_does_nothing() {
        let mut fx = Fixture::new();
        fx.layout.lang_toggle = None;
        assert!(fx.run(on_toggle_click, &toggle()).is_empty());
        assert_eq!(fx.state.language, Language::En);
    }
}
