pub mod appointment;
pub mod event;
pub mod layout;
pub mod patch;
pub mod ui_state;

pub use appointment::{
    AppointmentRequest, FormField, FormSnapshot, IntakePayload, IntakeRecord, SubmissionOutcome,
};
pub use event::{ElementRole, EventKind, PageEvent};
pub use layout::{FieldLayout, FormLayout, InputType, PageLayout};
pub use patch::{Effects, MessageKind, Patch, Timer};
pub use ui_state::{CounterProgress, Language, UiState};
