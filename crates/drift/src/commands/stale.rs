use libdrift_core::DriftError;

use crate::context::DriftContext;

pub fn run(ctx: &DriftContext) -> Result<(), DriftError> {
    let stats = ctx.manager.sweep_staleness()?;
    println!(
        "Stale project check completed: {} examined, {} flagged.",
        stats.examined, stats.flagged
    );
    Ok(())
}
