//! Wizard page screens
//!
//! One module per step; each renders into the page area between the
//! stepper and the footer.

pub mod account_details;
pub mod helpers;
pub mod personal_info;
pub mod review;
