use std::path::Path;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::error::DriftError;
use crate::ports::ProjectStore;
use crate::types::project::{Project, ProjectStatus};

/// sled-backed project store.
///
/// Projects live in a single `projects` tree keyed by id, with the full
/// entity serialized as JSON. Queries deserialize and filter in process;
/// the data set is a personal project list, not a server workload. Each
/// write is flushed so a process-per-command invocation is durable before
/// it exits.
pub struct SledStore {
    db: sled::Db,
    projects: sled::Tree,
}

impl SledStore {
    /// Open or create a store at the given path.
    ///
    /// Open failures (locked or corrupt database, unwritable path) surface
    /// immediately; there is no retry.
    pub fn open(path: &Path) -> Result<Self, DriftError> {
        let db = sled::open(path)?;
        let projects = db.open_tree("projects")?;
        Ok(Self { db, projects })
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), DriftError> {
        self.db.flush()?;
        Ok(())
    }

    fn scan<F>(&self, keep: F) -> Result<Vec<Project>, DriftError>
    where
        F: Fn(&Project) -> bool,
    {
        let mut projects = Vec::new();
        for entry in self.projects.iter() {
            let (_, value) = entry?;
            let project: Project = serde_json::from_slice(&value)?;
            if keep(&project) {
                projects.push(project);
            }
        }

        // Most recently updated first, for deterministic output
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }
}

impl ProjectStore for SledStore {
    fn upsert(&self, project: &Project) -> Result<(), DriftError> {
        let value = serde_json::to_vec(project)?;
        self.projects.insert(project.id.as_bytes(), value)?;
        self.db.flush()?;
        debug!(project_id = %project.id, "project upserted");
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Project>, DriftError> {
        match self.projects.get(id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn get_stale(&self, threshold_days: i64) -> Result<Vec<Project>, DriftError> {
        let cutoff = Utc::now() - Duration::days(threshold_days);
        self.scan(|p| p.updated_at < cutoff)
    }

    fn get_all_active(&self) -> Result<Vec<Project>, DriftError> {
        self.scan(|p| p.status == ProjectStatus::Active)
    }
}
