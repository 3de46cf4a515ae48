use libdrift_core::error::DriftError;
use libdrift_core::ports::Summarizer;
use libdrift_core::types::Task;

/// Canned summarizer for tests and offline runs
pub struct MockSummarizer;

impl Summarizer for MockSummarizer {
    fn summarize(&self, _context: &str) -> Result<String, DriftError> {
        Ok("This is a mock summary of the provided context.".to_string())
    }

    fn extract_tasks(&self, _context: &str) -> Result<Vec<Task>, DriftError> {
        Ok(vec![
            Task::new("Mock Task 1", Some("Extracted from context".to_string())),
            Task::new("Mock Task 2", Some("Another extracted task".to_string())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_summary_is_deterministic() {
        let mock = MockSummarizer;
        assert_eq!(
            mock.summarize("anything").unwrap(),
            mock.summarize("else").unwrap()
        );
    }

    #[test]
    fn test_mock_tasks() {
        let tasks = MockSummarizer.extract_tasks("anything").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Mock Task 1");
        assert!(!tasks[1].completed);
    }
}
