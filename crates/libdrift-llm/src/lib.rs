pub mod gemini;
pub mod mock;

pub use gemini::GeminiSummarizer;
pub use mock::MockSummarizer;
