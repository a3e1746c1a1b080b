//! Four-page lead intake form.
//!
//! Each page is validated locally, sent to the server on its own, and the
//! next page is only shown once the server accepts the current one. Page 3
//! toggles one of two optional detail groups depending on the selected
//! preference type.

pub mod conditional;
pub mod controller;
pub mod message;
pub mod model;
pub mod state;
pub mod validation;

pub use conditional::{ConditionalTargets, toggle_conditional_fields};
pub use controller::{AdvanceOutcome, StepFormController};
pub use message::{hide_step_msg, show_step_msg};
pub use model::{BasicInfo, CareerInfo, ExtraInfo, PageData, PreferenceInfo, PreferenceType, StepSubmission};
pub use state::{FormPageState, FormStep};
