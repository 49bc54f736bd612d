use crate::models::{PageEvent, Patch};
use crate::page::HandlerContext;

/// Accordion with at most one open item. The event target is the item owning the
/// clicked question.
pub fn on_question_click(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let Some(item) = event.target() else {
        return;
    };
    if !ctx.layout.faq_items.iter().any(|i| i == item) {
        return;
    }

    match ctx.state.faq_open.take() {
        Some(open) if open == item => {
            ctx.effects.patch(Patch::remove_class(item, "active"));
        }
        previous => {
            if let Some(previous) = previous {
                ctx.effects.patch(Patch::remove_class(&previous, "active"));
            }
            ctx.effects.patch(Patch::add_class(item, "active"));
            ctx.state.faq_open = Some(item.to_string());
        }
    }
}
