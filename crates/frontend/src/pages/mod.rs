//! Page components.

mod project_detail;
mod projects;

pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
