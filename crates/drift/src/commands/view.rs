use libdrift_core::{DriftError, ViewOutcome};

use crate::context::DriftContext;

pub fn run(ctx: &DriftContext, project: String) -> Result<(), DriftError> {
    match ctx.manager.view_project(&project)? {
        ViewOutcome::Found { .. } => {}
        ViewOutcome::AmbiguousName { project_id, matches } => {
            println!(
                "Note: {} projects share the name '{}'; showed the most recently updated ({}).",
                matches, project, project_id
            );
        }
        ViewOutcome::NotFound => {
            println!("No project found matching '{}'.", project);
        }
    }
    Ok(())
}
