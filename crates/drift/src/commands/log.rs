use libdrift_core::DriftError;

use crate::context::DriftContext;

pub fn run(ctx: &DriftContext, project: String, text: String) -> Result<(), DriftError> {
    ctx.manager.ingest_log(&project, &text)?;
    println!("Log added to project '{}' and summary updated.", project);
    Ok(())
}
