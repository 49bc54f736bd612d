pub mod appointment_form;
pub mod clock;
pub mod counters;
pub mod faq;
pub mod inputs;
pub mod intake;
pub mod language;
pub mod lazy_images;
pub mod navigation;
pub mod status;
pub mod timers;
pub mod validation;
