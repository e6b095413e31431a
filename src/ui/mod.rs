//! User interface module - status output for the update workflow.

pub mod formatter;

pub use formatter::{
    display_error, display_outcome, display_skip, display_status, display_success,
    outcome_message,
};
