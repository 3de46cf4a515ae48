use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::DriftError;
use crate::ports::{Presenter, ProjectStore, Summarizer};
use crate::types::ids::generate_project_id;
use crate::types::project::{staleness_for, LogEntry, Project, ProjectStatus};

/// Counters reported by a staleness sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Projects retrieved and examined
    pub examined: usize,
    /// Projects whose status changed and were written back
    pub flagged: usize,
}

/// Outcome of a project lookup by id or name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// Exactly one project matched and was rendered
    Found { project_id: String },
    /// Several active projects share the name; the most recently updated
    /// one was rendered
    AmbiguousName { project_id: String, matches: usize },
    /// Nothing matched by id or name
    NotFound,
}

/// Orchestrates the project lifecycle over the injected ports.
///
/// All business logic lives here: the staleness sweep, log ingestion with
/// the rolling-summary update, briefing composition, and name
/// disambiguation. The ports are interchangeable adapters supplied at
/// construction; the manager is the only component that mutates projects.
pub struct ProjectManager<S, L, P> {
    store: S,
    summarizer: L,
    presenter: P,
}

impl<S, L, P> ProjectManager<S, L, P>
where
    S: ProjectStore,
    L: Summarizer,
    P: Presenter,
{
    pub fn new(store: S, summarizer: L, presenter: P) -> Self {
        Self {
            store,
            summarizer,
            presenter,
        }
    }

    /// Recompute staleness for every ACTIVE project.
    ///
    /// A project more than 7 whole days old is flagged STALE, more than 3
    /// WARNING; anything younger is left untouched. Only genuine status
    /// changes are written back, so an immediate second sweep performs no
    /// writes. `updated_at` is never modified here, so a sweep cannot mask
    /// the staleness it measures. Projects are evaluated sequentially; a
    /// failure mid-sweep leaves earlier projects updated and later ones
    /// unexamined.
    pub fn sweep_staleness(&self) -> Result<SweepStats, DriftError> {
        let projects = self.store.get_all_active()?;
        let now = Utc::now();
        let mut stats = SweepStats {
            examined: projects.len(),
            flagged: 0,
        };

        for mut project in projects {
            let age_days = project.age_days(now);
            let new_status = match staleness_for(age_days) {
                Some(status) => status,
                None => continue,
            };
            if new_status == project.status {
                continue;
            }

            debug!(
                project_id = %project.id,
                age_days,
                status = new_status.as_str(),
                "flagging project"
            );
            project.status = new_status;
            self.store.upsert(&project)?;
            stats.flagged += 1;
        }

        info!(
            examined = stats.examined,
            flagged = stats.flagged,
            "staleness sweep complete"
        );
        Ok(stats)
    }

    /// Append a log to a project, creating it if needed, and regenerate the
    /// rolling summary.
    ///
    /// The identifier is tried as a project id; when nothing matches, a new
    /// project named after the identifier is created. The summarizer runs
    /// before any state is touched, so a summarization error propagates
    /// with nothing persisted: the caller never observes a project with a
    /// log appended but a stale summary, or the reverse. On success the new
    /// entry, the replacement summary, the refreshed `updated_at`, and any
    /// WARNING/STALE reset back to ACTIVE land in a single upsert.
    pub fn ingest_log(&self, identifier: &str, text: &str) -> Result<Project, DriftError> {
        let mut project = match self.store.get_by_id(identifier)? {
            Some(project) => project,
            None => {
                info!(name = identifier, "no project with that id, creating one");
                Project::new(generate_project_id(), identifier)
            }
        };

        // Rolling summary: the previous summary plus the new log is the
        // entire context; older raw detail lives only in the log entries.
        let context = format!(
            "Current Summary: {}\n\nNew Log: {}",
            project.description, text
        );
        let summary = self.summarizer.summarize(&context)?;

        project.append_log(LogEntry::new(text));
        project.description = summary;
        if matches!(project.status, ProjectStatus::Warning | ProjectStatus::Stale) {
            debug!(project_id = %project.id, "log activity resets status to ACTIVE");
            project.status = ProjectStatus::Active;
        }

        self.store.upsert(&project)?;
        Ok(project)
    }

    /// Run the staleness sweep, then render the dashboard of active
    /// projects. Pure composition.
    pub fn daily_briefing(&self) -> Result<(), DriftError> {
        self.sweep_staleness()?;
        let projects = self.store.get_all_active()?;
        self.presenter.render_dashboard(&projects);
        Ok(())
    }

    /// Show a project by id, falling back to an exact name match over the
    /// active projects.
    ///
    /// Name ties resolve to the most recently updated project and are
    /// reported as an informational outcome, as is a miss; neither is an
    /// error.
    pub fn view_project(&self, identifier: &str) -> Result<ViewOutcome, DriftError> {
        if let Some(project) = self.store.get_by_id(identifier)? {
            self.presenter.render_project_details(&project);
            return Ok(ViewOutcome::Found {
                project_id: project.id,
            });
        }

        let mut matches: Vec<Project> = self
            .store
            .get_all_active()?
            .into_iter()
            .filter(|p| p.name == identifier)
            .collect();

        if matches.is_empty() {
            return Ok(ViewOutcome::NotFound);
        }

        let count = matches.len();
        matches.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let chosen = matches.swap_remove(0);

        if count > 1 {
            warn!(
                name = identifier,
                matches = count,
                chosen = %chosen.id,
                "multiple projects share this name"
            );
        }

        self.presenter.render_project_details(&chosen);
        if count > 1 {
            Ok(ViewOutcome::AmbiguousName {
                project_id: chosen.id,
                matches: count,
            })
        } else {
            Ok(ViewOutcome::Found {
                project_id: chosen.id,
            })
        }
    }
}
