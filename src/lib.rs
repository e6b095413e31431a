pub mod cli;
pub mod domain;
pub mod error;
pub mod metadata;
pub mod ui;

pub use error::{MetadataUpdateError, Result};
