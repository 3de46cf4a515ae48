//! End-to-end ingestion flow over the real sled store and the mock
//! summarizer, without the process boundary.

use libdrift_core::ports::ProjectStore;
use libdrift_core::{DriftError, Presenter, Project, ProjectManager, ProjectStatus, SledStore};
use libdrift_llm::MockSummarizer;
use tempfile::tempdir;

struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn render_dashboard(&self, _projects: &[Project]) {}
    fn render_project_details(&self, _project: &Project) {}
    fn get_input(&self, _prompt: &str) -> Result<String, DriftError> {
        Ok(String::new())
    }
}

#[test]
fn test_ingest_persists_across_reopen() {
    let dir = tempdir().unwrap();

    let created = {
        let store = SledStore::open(dir.path()).unwrap();
        let manager = ProjectManager::new(store, MockSummarizer, SilentPresenter);
        manager.ingest_log("launch-prep", "wrote the press kit").unwrap()
    };

    assert_eq!(created.name, "launch-prep");
    assert_eq!(created.status, ProjectStatus::Active);
    assert_eq!(
        created.description,
        "This is a mock summary of the provided context."
    );

    // A fresh process sees exactly what was persisted
    let store = SledStore::open(dir.path()).unwrap();
    let fetched = store.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_second_ingest_grows_log_by_one() {
    let dir = tempdir().unwrap();
    let store = SledStore::open(dir.path()).unwrap();
    let manager = ProjectManager::new(store, MockSummarizer, SilentPresenter);

    let first = manager.ingest_log("launch-prep", "one").unwrap();
    let second = manager.ingest_log(&first.id, "two").unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.logs.len(), 2);
    assert_eq!(second.logs[0].content, "one");
    assert_eq!(second.logs[1].content, "two");
}
