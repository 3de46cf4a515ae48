use crate::error::DriftError;
use crate::types::Project;

/// Display and input contract for the user-facing surface
pub trait Presenter {
    /// Display the project dashboard
    fn render_dashboard(&self, projects: &[Project]);

    /// Display a single project in detail
    fn render_project_details(&self, project: &Project);

    /// Prompt the user and read a line of input
    fn get_input(&self, prompt: &str) -> Result<String, DriftError>;
}
