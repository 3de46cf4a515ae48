use serde::Deserialize;
use tracing::warn;

use libdrift_core::config::Config;
use libdrift_core::error::DriftError;
use libdrift_core::ports::Summarizer;
use libdrift_core::types::Task;

/// Default Gemini API base URL
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini-backed summarizer over the generateContent REST API.
///
/// Calls are blocking and attempted once per logical operation; there is
/// no retry layer. Upstream failures never propagate out of `summarize`:
/// the adapter substitutes a well-formed error payload the caller can
/// persist like any other summary. `extract_tasks` degrades to an empty
/// list instead.
pub struct GeminiSummarizer {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiSummarizer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Override the endpoint base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One generateContent round trip: send the prompt, pull the text out
    /// of the first candidate, strip any Markdown fence.
    fn generate(&self, prompt: &str) -> Result<String, DriftError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DriftError::Summarization(e.to_string()))?;

        let payload: GenerateContentResponse = response
            .json()
            .map_err(|e| DriftError::Summarization(e.to_string()))?;

        let text: String = payload
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(DriftError::Summarization(
                "empty response from model".to_string(),
            ));
        }

        Ok(strip_code_fences(&text).to_string())
    }
}

impl Summarizer for GeminiSummarizer {
    fn summarize(&self, context: &str) -> Result<String, DriftError> {
        match self.generate(&summary_prompt(context)) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(error = %err, "summarization failed, substituting fallback summary");
                Ok(fallback_summary(&err))
            }
        }
    }

    fn extract_tasks(&self, context: &str) -> Result<Vec<Task>, DriftError> {
        match self.generate(&tasks_prompt(context)) {
            Ok(text) => Ok(parse_task_titles(&text)),
            Err(err) => {
                warn!(error = %err, "task extraction failed, returning no tasks");
                Ok(Vec::new())
            }
        }
    }
}

fn summary_prompt(context: &str) -> String {
    format!(
        "You are an expert Project Manager. Your goal is to synthesize the \
         following project history into a concise, actionable summary.\n\n\
         Context:\n{}\n\n\
         Please provide a structured JSON response with the following keys:\n\
         - summary: A concise narrative summary of the project status.\n\
         - next_steps: A list of immediate next steps.\n\
         - estimated_completion: A brief string estimating when the current \
         phase might be done.\n\n\
         Output JSON only.",
        context
    )
}

fn tasks_prompt(context: &str) -> String {
    format!(
        "Analyze the following text and extract actionable tasks.\n\n\
         Context:\n{}\n\n\
         Return a JSON list of strings, where each string is a clear, \
         concise task description.\n\
         Example: [\"Fix bug in login\", \"Update documentation\"]\n\n\
         Output JSON only.",
        context
    )
}

/// Well-formed payload persisted in place of a summary when the upstream
/// call fails; shaped like the structured summary the prompt asks for.
fn fallback_summary(err: &DriftError) -> String {
    serde_json::json!({
        "summary": format!("Summary unavailable: {}", err),
        "next_steps": [],
        "estimated_completion": "unknown",
    })
    .to_string()
}

/// Strip a surrounding ```json / ``` fence, if present
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse the model's task list (a JSON array of strings) into Tasks.
/// Malformed output yields no tasks, never an error.
fn parse_task_titles(text: &str) -> Vec<Task> {
    let titles: Vec<String> = match serde_json::from_str(text) {
        Ok(titles) => titles,
        Err(err) => {
            warn!(error = %err, "model returned malformed task JSON");
            return Vec::new();
        }
    };

    titles
        .into_iter()
        .map(|title| Task::new(title, Some("Extracted from context".to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            data_dir: PathBuf::from(".drift"),
            api_key: "test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        }
    }

    fn candidate_body(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("plain text"), "plain text");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  padded  "), "padded");
    }

    #[test]
    fn test_parse_task_titles() {
        let tasks = parse_task_titles(r#"["Fix bug in login", "Update documentation"]"#);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Fix bug in login");
        assert_eq!(
            tasks[0].description.as_deref(),
            Some("Extracted from context")
        );
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_parse_task_titles_malformed_is_empty() {
        assert!(parse_task_titles("not json at all").is_empty());
        assert!(parse_task_titles(r#"{"tasks": []}"#).is_empty());
    }

    #[test]
    fn test_fallback_summary_is_well_formed_json() {
        let err = DriftError::Summarization("boom".to_string());
        let payload: serde_json::Value = serde_json::from_str(&fallback_summary(&err)).unwrap();
        assert!(payload["summary"]
            .as_str()
            .unwrap()
            .contains("Summary unavailable"));
        assert!(payload["next_steps"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_prompts_embed_context() {
        assert!(summary_prompt("the context").contains("Context:\nthe context"));
        assert!(tasks_prompt("the context").contains("Context:\nthe context"));
    }

    #[test]
    fn test_summarize_strips_fences_from_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".to_string(),
                "test-key".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body("```json\n{\"summary\":\"ok\"}\n```"))
            .create();

        let summarizer = GeminiSummarizer::new(&test_config()).with_base_url(server.url());
        let summary = summarizer.summarize("ctx").unwrap();

        assert_eq!(summary, "{\"summary\":\"ok\"}");
        mock.assert();
    }

    #[test]
    fn test_summarize_recovers_from_upstream_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create();

        let summarizer = GeminiSummarizer::new(&test_config()).with_base_url(server.url());
        let summary = summarizer.summarize("ctx").unwrap();

        let payload: serde_json::Value = serde_json::from_str(&summary).unwrap();
        assert!(payload["summary"]
            .as_str()
            .unwrap()
            .contains("Summary unavailable"));
    }

    #[test]
    fn test_extract_tasks_round_trip() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body("[\"Fix bug in login\"]"))
            .create();

        let summarizer = GeminiSummarizer::new(&test_config()).with_base_url(server.url());
        let tasks = summarizer.extract_tasks("ctx").unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Fix bug in login");
    }

    #[test]
    fn test_extract_tasks_recovers_to_empty() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create();

        let summarizer = GeminiSummarizer::new(&test_config()).with_base_url(server.url());
        assert!(summarizer.extract_tasks("ctx").unwrap().is_empty());
    }
}
