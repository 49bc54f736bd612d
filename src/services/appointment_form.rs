use crate::models::{FormField, MessageKind, PageEvent, Patch, SubmissionOutcome};
use crate::page::HandlerContext;
use crate::services::clock::submission_stamp;
use crate::services::status;
use crate::services::validation::validate_form;

pub const SUBMITTING_MESSAGE: &str = "Submitting your appointment request...";
pub const BOOKED_MESSAGE: &str =
    "Thank you! Your appointment has been booked successfully. We will contact you soon.";
pub const FAILED_MESSAGE: &str = "Error submitting appointment. Please try again.";

/// Validates the form and, when every check passes, queues exactly one payload
/// for delivery. Page navigation is always suppressed.
pub fn on_submit(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::Submit { form } = event else {
        return;
    };
    ctx.effects.prevent_default = true;

    match validate_form(form, ctx.clock.today()) {
        Err(e) => {
            tracing::info!(reason = ?e, "appointment form rejected");
            status::show(ctx, &e.to_string(), MessageKind::Error);
        }
        Ok(request) => {
            status::show(ctx, SUBMITTING_MESSAGE, MessageKind::Success);
            let submitted_at = submission_stamp(ctx.clock.now());
            ctx.effects.submissions.push(request.into_payload(submitted_at));
        }
    }
}

pub fn on_settled(ctx: &mut HandlerContext<'_>, event: &PageEvent) {
    let PageEvent::SubmissionSettled(outcome) = event else {
        return;
    };

    match outcome {
        SubmissionOutcome::Accepted(_) => {
            status::show(ctx, BOOKED_MESSAGE, MessageKind::Success);
            if let Some(form) = ctx.layout.form.as_ref() {
                ctx.effects.patch(Patch::ResetForm {
                    fields: form
                        .fields
                        .iter()
                        .map(|f| (f.key.clone(), f.value.clone()))
                        .collect(),
                });
                ctx.effects.patch(Patch::ScrollIntoView {
                    key: form.message.clone(),
                });
            }
        }
        // Entered values stay in the form so the visitor can resubmit.
        SubmissionOutcome::Failed(_) => status::show(ctx, FAILED_MESSAGE, MessageKind::Error),
    }
}

/// Stops the date picker from offering days before today.
pub fn set_date_minimum(ctx: &mut HandlerContext<'_>, _event: &PageEvent) {
    let Some(field) = ctx.layout.field_for(FormField::PreferredDate) else {
        return;
    };
    ctx.effects.patch(Patch::SetAttr {
        key: field.key.clone(),
        name: "min".to_string(),
        value: ctx.clock.today().format("%Y-%m-%d").to_string(),
    });
}
