//! Admin page actions.

pub mod deletion;

pub use deletion::{AdminPrompt, DeleteOutcome, UserDeletionAction};
