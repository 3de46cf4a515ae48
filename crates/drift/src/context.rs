use libdrift_core::{Config, DriftError, ProjectManager, SledStore};
use libdrift_llm::GeminiSummarizer;

use crate::presenter::ConsolePresenter;

/// The fully wired manager type used by every command
pub type Manager = ProjectManager<SledStore, GeminiSummarizer, ConsolePresenter>;

/// Resolved runtime context for a drift command
pub struct DriftContext {
    pub manager: Manager,
}

impl DriftContext {
    /// Load configuration and wire the adapters.
    ///
    /// Missing configuration and an unopenable database both fail here,
    /// before any command logic runs.
    pub fn resolve() -> Result<Self, DriftError> {
        let config = Config::from_env()?;
        let store = SledStore::open(&config.data_dir)?;
        let summarizer = GeminiSummarizer::new(&config);
        let presenter = ConsolePresenter::new();

        Ok(Self {
            manager: ProjectManager::new(store, summarizer, presenter),
        })
    }
}
