pub mod ids;
pub mod project;

pub use ids::{generate_project_id, generate_task_id};
pub use project::{LogEntry, Project, ProjectStatus, Task};
pub use project::{staleness_for, STALE_AFTER_DAYS, WARNING_AFTER_DAYS};
