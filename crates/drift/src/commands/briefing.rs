use libdrift_core::DriftError;

use crate::context::DriftContext;

pub fn run(ctx: &DriftContext) -> Result<(), DriftError> {
    ctx.manager.daily_briefing()
}
