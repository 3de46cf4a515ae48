use crate::error::DriftError;
use crate::types::Project;

/// Persistence contract for projects.
///
/// Projects are keyed by `id`; `upsert` is the sole write operation and is
/// idempotent. Concurrent writers are not coordinated here; racing upserts
/// resolve last-write-wins.
pub trait ProjectStore {
    /// Create or replace a project keyed by its id
    fn upsert(&self, project: &Project) -> Result<(), DriftError>;

    /// Fetch a project by id
    fn get_by_id(&self, id: &str) -> Result<Option<Project>, DriftError>;

    /// Projects whose `updated_at` is older than the threshold
    fn get_stale(&self, threshold_days: i64) -> Result<Vec<Project>, DriftError>;

    /// All projects currently in ACTIVE status.
    ///
    /// WARNING and STALE projects are excluded. The staleness sweep reads
    /// only this query, so a project leaves the sweep's input set the
    /// moment it is demoted.
    fn get_all_active(&self) -> Result<Vec<Project>, DriftError>;
}
