//! Progress module - body measurement entries.

mod progress_model;
mod progress_service;
mod progress_traits;

pub use progress_model::{NewProgressEntry, ProgressEntry};
pub use progress_service::ProgressService;
pub use progress_traits::{ProgressRepositoryTrait, ProgressServiceTrait};
