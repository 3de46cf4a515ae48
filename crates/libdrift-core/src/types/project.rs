use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::generate_task_id;

/// Age in whole days beyond which an active project is flagged WARNING
pub const WARNING_AFTER_DAYS: i64 = 3;

/// Age in whole days beyond which an active project is flagged STALE
pub const STALE_AFTER_DAYS: i64 = 7;

/// Author recorded on log entries when none is given
pub const DEFAULT_AUTHOR: &str = "System";

/// Summary placeholder carried by a project until its first log is distilled
pub const NEW_PROJECT_SUMMARY: &str = "New project";

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Active,
    Warning,
    Stale,
    /// Terminal, reserved for manual use; never entered or exited by the core
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Warning => "WARNING",
            ProjectStatus::Stale => "STALE",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }
}

/// Status a project of the given age should be demoted to, if any.
///
/// Thresholds are checked largest first. Ages at or under the warning
/// threshold demote nothing; a project only returns to ACTIVE through new
/// log activity, never by age.
pub fn staleness_for(age_days: i64) -> Option<ProjectStatus> {
    if age_days > STALE_AFTER_DAYS {
        Some(ProjectStatus::Stale)
    } else if age_days > WARNING_AFTER_DAYS {
        Some(ProjectStatus::Warning)
    } else {
        None
    }
}

/// A single entry in a project's append-only log stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub content: String,
    pub author: String,
}

impl LogEntry {
    /// Create an entry stamped now, attributed to the system author
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            content: content.into(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// An actionable item extracted from project context by the summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: generate_task_id(),
            title: title.into(),
            description,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// A tracked project: an append-only log stream plus its rolling summary.
///
/// `description` holds the current rolling summary and is overwritten on
/// every log addition; raw detail survives only in `logs`. `id` is the sole
/// lookup/upsert key and never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Append-only; insertion order is chronological order
    pub logs: Vec<LogEntry>,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a fresh ACTIVE project with a placeholder summary
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: NEW_PROJECT_SUMMARY.to_string(),
            status: ProjectStatus::Active,
            logs: Vec::new(),
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a log entry and refresh `updated_at`
    pub fn append_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
        self.updated_at = Utc::now();
    }

    /// Whole days elapsed since the last update
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.updated_at).num_days()
    }
}
