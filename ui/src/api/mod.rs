//! Typed client for the external migration-audit backend.

mod client;
mod error;
pub mod model;

pub use client::{ApiClient, ExportFormat, ExportSection, FilePayload, NewProjectForm};
pub use error::ApiError;
