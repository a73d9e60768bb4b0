//! Reusable UI widgets

mod spinner;
mod stepper;

pub use spinner::Spinner;
pub use stepper::Stepper;
