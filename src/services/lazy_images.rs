use crate::models::{PageEvent, Patch};
use crate::page::HandlerContext;

/// Promotes `data-src` to `src` the first time an image enters the viewport.
pub fn on_image_visible(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Intersect { target, ratio, .. } = event else {
        return;
    };
    if *ratio <= 0.0 {
        return;
    }
    let Some(image) = ctx.layout.lazy_image(target) else {
        return;
    };
    if !ctx.state.loaded_images.insert(image.key.clone()) {
        return;
    }

    if let Some(src) = &image.data_src {
        ctx.effects.patch(Patch::SetAttr {
            key: image.key.clone(),
            name: "src".to_string(),
            value: src.clone(),
        });
        ctx.effects.patch(Patch::RemoveAttr {
            key: image.key.clone(),
            name: "data-src".to_string(),
        });
    }
}
