use crate::models::{PageEvent, Patch};
use crate::page::HandlerContext;
use crate::services::validation::{digits_only, PHONE_DIGITS};

pub fn mask_phone(value: &str) -> String {
    digits_only(value).chars().take(PHONE_DIGITS).collect()
}

pub fn mask_phone_input(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Input { target, value, .. } = event else {
        return;
    };
    let masked = mask_phone(value);
    if masked != *value {
        ctx.effects.patch(Patch::value(target, masked));
    }
}

/// Drops any formatting so the number is easy to edit. Length is left alone.
pub fn strip_phone_on_focus(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Focus { target, value, .. } = event else {
        return;
    };
    let digits = digits_only(value);
    if digits != *value {
        ctx.effects.patch(Patch::value(target, digits));
    }
}

pub fn mark_focused(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let Some(field) = event.target().and_then(|key| ctx.layout.field(key)) else {
        return;
    };
    ctx.effects
        .patch(Patch::add_class(&field.container, "focused"));
}

pub fn unmark_if_empty(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Blur { target, value, .. } = event else {
        return;
    };
    if !value.is_empty() {
        return;
    }
    if let Some(field) = ctx.layout.field(target) {
        ctx.effects
            .patch(Patch::remove_class(&field.container, "focused"));
    }
}

/// Fields rendered with a value start out highlighted.
pub fn mark_prefilled(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let Some(form) = ctx.layout.form.as_ref() else {
        return;
    };
    for field in form.fields.iter().filter(|f| !f.value.is_empty()) {
        ctx.effects
            .patch(Patch::add_class(&field.container, "focused"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementRole;
    use crate::page::fixture::Fixture;

    fn input(value: &str) -> PageEvent {
        PageEvent::Input {
            role: ElementRole::TelInput,
            target: "phoneNumber".into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_mask_strips_and_truncates() {
        assert_eq!(mask_phone("(555) 123-4567"), "5551234567");
        assert_eq!(mask_phone("555123456789"), "5551234567");
        assert_eq!(mask_phone("abc"), "");
    }

    #[test]
    fn test_clean_input_is_untouched() {
        let mut fx = Fixture::new();
        assert!(fx.run(mask_phone_input, &input("555123")).is_empty());
    }

    #[test]
    fn test_dirty_input_is_rewritten() {
        let mut fx = Fixture::new();
        let effects = fx.run(mask_phone_input, &input("555-123-45678"));
        assert_eq!(effects.patches, vec![Patch::value("phoneNumber", "5551234567")]);
    }

    #[test]
    fn test_focus_strips_without_truncating() {
        let mut fx = Fixture::new();
        let event = PageEvent::Focus {
            role: ElementRole::TelInput,
            target: "phoneNumber".into(),
            value: "555-123-4567-89".into(),
        };
        let effects = fx.run(strip_phone_on_focus, &event);
        assert_eq!(effects.patches, vec![Patch::value("phoneNumber", "555123456789")]);
    }

    #[test]
    fn test_focus_and_blur_highlight() {
        let mut fx = Fixture::new();
        let focus = PageEvent::Focus {
            role: ElementRole::FormInput,
            target: "fullName".into(),
            value: String::new(),
        };
        let effects = fx.run(mark_focused, &focus);
        assert_eq!(effects.patches, vec![Patch::add_class("fullNameGroup", "focused")]);

        let blur_filled = PageEvent::Blur {
            role: ElementRole::FormInput,
            target: "fullName".into(),
            value: "Jane".into(),
        };
        assert!(fx.run(unmark_if_empty, &blur_filled).is_empty());

        let blur_empty = PageEvent::Blur {
            role: ElementRole::FormInput,
            target: "fullName".into(),
            value: String::new(),
        };
        let effects = fx.run(unmark_if_empty, &blur_empty);
        assert_eq!(
            effects.patches,
            vec![Patch::remove_class("fullNameGroup", "focused")]
        );
    }

    #[test]
    fn test_prefilled_fields_highlighted_on_load() {
        let mut fx = Fixture::new();
        if let Some(form) = fx.layout.form.as_mut() {
            form.fields[0].value = "Jane".into();
        }
        let effects = fx.run(mark_prefilled, &PageEvent::load("/"));
        assert_eq!(effects.patches, vec![Patch::add_class("fullNameGroup", "focused")]);
    }
}
