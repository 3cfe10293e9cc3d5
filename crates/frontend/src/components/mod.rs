//! Reusable UI components.

mod loading;
mod project_card;

pub use loading::Loading;
pub use project_card::{ProjectCard, ProjectCardProps};
