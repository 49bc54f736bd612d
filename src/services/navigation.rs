use crate::models::{PageEvent, Patch};
use crate::page::HandlerContext;

pub const SHADOW_RESTING: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";
pub const SHADOW_SCROLLED: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.15)";
const SHADOW_LIFTED: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.1)";

const SCROLL_TOP_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;
const SCROLL_TOP_BASE_STYLE: [(&str, &str); 17] = [
    ("position", "fixed"),
    ("bottom", "100px"),
    ("right", "30px"),
    ("width", "50px"),
    ("height", "50px"),
    ("background", "#2563eb"),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "50%"),
    ("cursor", "pointer"),
    ("display", "none"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("font-size", "1.2rem"),
    ("box-shadow", SHADOW_RESTING),
    ("z-index", "998"),
    ("transition", "all 0.3s ease"),
];

fn set_menu_open(ctx: &mut HandlerContext<'_>, open: bool) {
    ctx.state.nav_open = open;
    // The outside-click listener only lives while the menu is open.
    ctx.state.outside_click_armed = open;

    for key in [&ctx.layout.hamburger, &ctx.layout.nav_menu] {
        let patch = if open {
            Patch::add_class(key, "active")
        } else {
            Patch::remove_class(key, "active")
        };
        ctx.effects.patch(patch);
    }
}

pub fn on_hamburger_click(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let open = !ctx.state.nav_open;
    set_menu_open(ctx, open);
}

pub fn on_nav_link_click(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    set_menu_open(ctx, false);
}

/// Closes the open menu when the click landed outside of it.
pub fn on_document_click(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    if !ctx.state.outside_click_armed {
        return;
    }
    let Some(target) = event.target() else {
        return;
    };
    if ctx.layout.is_nav_element(target) {
        return;
    }
    set_menu_open(ctx, false);
}

pub fn on_scroll(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Scroll { y } = *event else {
        return;
    };
    ctx.state.last_scroll = y;

    let elevated = y > ctx.config.scroll_shadow_threshold_px;
    if ctx.state.shadow_elevated != Some(elevated) {
        ctx.state.shadow_elevated = Some(elevated);
        let shadow = if elevated { SHADOW_SCROLLED } else { SHADOW_RESTING };
        ctx.effects
            .patch(Patch::style(&ctx.layout.navbar, "box-shadow", shadow));
    }

    if ctx.config.scroll_top_enabled {
        let visible = y > ctx.config.scroll_top_threshold_px;
        if ctx.state.scroll_top_visible != Some(visible) {
            ctx.state.scroll_top_visible = Some(visible);
            let display = if visible { "flex" } else { "none" };
            ctx.effects
                .patch(Patch::style(&ctx.layout.scroll_top_button, "display", display));
        }
    }
}

/// Same-page anchors scroll smoothly, leaving room for the fixed header.
pub fn on_anchor_click(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let Some(href) = event.target().and_then(|key| ctx.layout.anchor_href(key)) else {
        return;
    };
    if href.len() <= 1 {
        return;
    }
    ctx.effects.prevent_default = true;

    let Some(section) = href.strip_prefix('#').and_then(|id| ctx.layout.section(id)) else {
        tracing::debug!(href, "anchor target not on page");
        return;
    };
    ctx.effects.patch(Patch::ScrollTo {
        top: (section.offset_top - ctx.config.header_offset_px).max(0.0),
        smooth: true,
    });
}

pub fn on_scroll_top_click(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    ctx.effects.patch(Patch::ScrollTo {
        top: 0.0,
        smooth: true,
    });
}

/// Renders the hidden scroll-to-top button; scrolling past the threshold reveals it.
pub fn install_scroll_top_button(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let key = ctx.layout.scroll_top_button.as_str();
    ctx.effects.patch(Patch::SetHtml {
        key: key.to_string(),
        html: SCROLL_TOP_ICON.to_string(),
    });
    ctx.effects.patch(Patch::SetClassName {
        key: key.to_string(),
        value: "scroll-to-top".to_string(),
    });
    for (property, value) in SCROLL_TOP_BASE_STYLE {
        ctx.effects.patch(Patch::style(key, property, value));
    }
}

pub fn on_scroll_top_enter(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let key = ctx.layout.scroll_top_button.as_str();
    ctx.effects
        .patch(Patch::style(key, "transform", "translateY(-5px)"));
    ctx.effects.patch(Patch::style(key, "box-shadow", SHADOW_LIFTED));
}

pub fn on_scroll_top_leave(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let key = ctx.layout.scroll_top_button.as_str();
    ctx.effects.patch(Patch::style(key, "transform", "translateY(0)"));
    ctx.effects.patch(Patch::style(key, "box-shadow", SHADOW_RESTING));
}

/// Whole seconds, rounded half up.
pub fn load_seconds(load_ms: u64) -> u64 {
    (load_ms as f64 / 1000.0).round() as u64
}

pub fn report_load_time(_ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    if let PageEvent::Load {
        load_ms: Some(ms), ..
    } = event
    {
        tracing::info!("page loaded in {}s", load_seconds(*ms));
    }
}

/// Marks the nav link pointing at the current page.
pub fn highlight_active_link(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Load { path, .. } = event else {
        return;
    };
    let current = path
        .rsplit('/')
        .next()
        .filter(|page| !page.is_empty())
        .unwrap_or(ctx.config.default_page.as_str());

    ctx.state.active_link = None;
    for link in &ctx.layout.nav_links {
        if link.href == current {
            ctx.state.active_link = Some(link.key.clone());
            ctx.effects.patch(Patch::add_class(&link.key, "active"));
        } else {
            ctx.effects.patch(Patch::remove_class(&link.key, "active"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementRole;
    use crate::page::fixture::Fixture;

    fn click(role: ElementRole, target: &str) -> PageEvent {
        PageEvent::click(role, target)
    }

    #[test]
    fn test_hamburger_toggles_menu() {
        let mut fx = Fixture::new();
        let effects = fx.run(on_hamburger_click, &click(ElementRole::Hamburger, "hamburger"));
        assert!(fx.state.nav_open);
        assert!(fx.state.outside_click_armed);
        assert_eq!(
            effects.patches,
            vec![
                Patch::add_class("hamburger", "active"),
                Patch::add_class("navMenu", "active"),
            ]
        );

        fx.run(on_hamburger_click, &click(ElementRole::Hamburger, "hamburger"));
        assert!(!fx.state.nav_open);
        assert!(!fx.state.outside_click_armed);
    }

    #[test]
    fn test_outside_click_closes_when_armed() {
        let mut fx = Fixture::new();
        fx.run(on_hamburger_click, &click(ElementRole::Hamburger, "hamburger"));

        let effects = fx.run(on_document_click, &click(ElementRole::FaqQuestion, "faq-1"));
        assert!(!fx.state.nav_open);
        assert!(effects.patches.contains(&Patch::remove_class("navMenu", "active")));
    }

    #[test]
    fn test_click_inside_menu_keeps_it_open() {
        let mut fx = Fixture::new();
        fx.run(on_hamburger_click, &click(ElementRole::Hamburger, "hamburger"));
        let effects = fx.run(on_document_click, &click(ElementRole::NavMenu, "navMenu"));
        assert!(fx.state.nav_open);
        assert!(effects.patches.is_empty());
    }

    #[test]
    fn test_outside_click_ignored_when_disarmed() {
        let mut fx = Fixture::new();
        let effects = fx.run(on_document_click, &click(ElementRole::FaqQuestion, "faq-1"));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_nav_link_closes_menu() {
        let mut fx = Fixture::new();
        fx.run(on_hamburger_click, &click(ElementRole::Hamburger, "hamburger"));
        fx.run(on_nav_link_click, &click(ElementRole::NavLink, "nav-about"));
        assert!(!fx.state.nav_open);
        assert!(!fx.state.outside_click_armed);
    }

    #[test]
    fn test_shadow_changes_only_when_crossing_threshold() {
        let mut fx = Fixture::new();
        let first = fx.run(on_scroll, &PageEvent::Scroll { y: 10.0 });
        assert_eq!(
            first.patches,
            vec![Patch::style("navbar", "box-shadow", SHADOW_RESTING)]
        );

        let unchanged = fx.run(on_scroll, &PageEvent::Scroll { y: 50.0 });
        assert!(unchanged.patches.is_empty());
        assert_eq!(fx.state.last_scroll, 50.0);

        let crossed = fx.run(on_scroll, &PageEvent::Scroll { y: 101.0 });
        assert_eq!(
            crossed.patches,
            vec![Patch::style("navbar", "box-shadow", SHADOW_SCROLLED)]
        );

        let at_threshold = fx.run(on_scroll, &PageEvent::Scroll { y: 100.0 });
        assert_eq!(
            at_threshold.patches,
            vec![Patch::style("navbar", "box-shadow", SHADOW_RESTING)]
        );
    }

    #[test]
    fn test_scroll_top_button_follows_threshold_when_enabled() {
        let mut fx = Fixture::new();
        fx.config.scroll_top_enabled = true;
        let effects = fx.run(on_scroll, &PageEvent::Scroll { y: 400.0 });
        assert!(effects
            .patches
            .contains(&Patch::style("scrollToTop", "display", "flex")));

        let effects = fx.run(on_scroll, &PageEvent::Scroll { y: 200.0 });
        assert!(effects
            .patches
            .contains(&Patch::style("scrollToTop", "display", "none")));
    }

    #[test]
    fn test_scroll_top_button_installs_hidden() {
        let mut fx = Fixture::new();
        let effects = fx.run(install_scroll_top_button, &PageEvent::load("/"));
        assert!(effects.patches.contains(&Patch::SetClassName {
            key: "scrollToTop".into(),
            value: "scroll-to-top".into(),
        }));
        assert!(effects
            .patches
            .contains(&Patch::style("scrollToTop", "display", "none")));
        assert!(effects
            .patches
            .contains(&Patch::style("scrollToTop", "z-index", "998")));
    }

    #[test]
    fn test_scroll_top_hover_lifts_and_settles() {
        let mut fx = Fixture::new();
        let hover = PageEvent::MouseEnter {
            role: ElementRole::ScrollTopButton,
            target: "scrollToTop".into(),
        };
        let effects = fx.run(on_scroll_top_enter, &hover);
        assert_eq!(
            effects.patches,
            vec![
                Patch::style("scrollToTop", "transform", "translateY(-5px)"),
                Patch::style("scrollToTop", "box-shadow", SHADOW_LIFTED),
            ]
        );

        let leave = PageEvent::MouseLeave {
            role: ElementRole::ScrollTopButton,
            target: "scrollToTop".into(),
        };
        let effects = fx.run(on_scroll_top_leave, &leave);
        assert_eq!(
            effects.patches,
            vec![
                Patch::style("scrollToTop", "transform", "translateY(0)"),
                Patch::style("scrollToTop", "box-shadow", SHADOW_RESTING),
            ]
        );
    }

    #[test]
    fn test_load_seconds_rounds() {
        assert_eq!(load_seconds(0), 0);
        assert_eq!(load_seconds(1499), 1);
        assert_eq!(load_seconds(1500), 2);
        assert_eq!(load_seconds(2300), 2);
    }

    #[test]
    fn test_anchor_scrolls_with_header_offset() {
        let mut fx = Fixture::new();
        let effects = fx.run(on_anchor_click, &click(ElementRole::HashAnchor, "hero-faq"));
        assert!(effects.prevent_default);
        assert_eq!(
            effects.patches,
            vec![Patch::ScrollTo {
                top: 2320.0,
                smooth: true
            }]
        );
    }

    #[test]
    fn test_bare_hash_is_left_alone() {
        let mut fx = Fixture::new();
        let effects = fx.run(on_anchor_click, &click(ElementRole::HashAnchor, "footer-top"));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_active_link_from_path() {
        let mut fx = Fixture::new();
        let effects = fx.run(
            highlight_active_link,
            &PageEvent::load("/site/about.html"),
        );
        assert_eq!(fx.state.active_link.as_deref(), Some("nav-about"));
        assert!(effects.patches.contains(&Patch::add_class("nav-about", "active")));
        assert!(effects.patches.contains(&Patch::remove_class("nav-home", "active")));
    }

    #[test]
    fn test_root_path_falls_back_to_index() {
        let mut fx = Fixture::new();
        fx.run(highlight_active_link, &PageEvent::load("/"));
        assert_eq!(fx.state.active_link.as_deref(), Some("nav-home"));
    }
}
