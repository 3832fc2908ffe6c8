mod filter;
mod modal;
mod project;

pub use filter::{Category, CategoryFilter, categories};
pub use modal::ProjectModal;
pub use project::{Project, default_projects};
