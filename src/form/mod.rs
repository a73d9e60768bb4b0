//! Signup form model
//!
//! - `fields.rs` - Field names, values and wizard steps
//! - `schema.rs` - Per-field validation rules
//! - `state.rs` - Owned wizard state with navigation and submission gates

pub mod fields;
pub mod schema;
pub mod state;

pub use fields::{Field, FormValues, WizardStep};
pub use state::{Advance, FormState, SubmitGate, SubmitStatus};
