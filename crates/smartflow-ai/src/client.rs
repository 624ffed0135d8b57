//! OpenAI-backed analysis client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use smartflow_core::{AnalysisResult, ProcessInput};
use tracing::{debug, warn};

use crate::error::AiError;
use crate::parse::parse_analysis;
use crate::prompt::build_prompt;
use crate::ProcessAnalyzer;

/// Configuration for the analysis provider call.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl AnalysisConfig {
    /// Defaults matching the hosted OpenAI endpoint: `gpt-4` at temperature
    /// 0.7 with a 2000-token completion budget.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Client for the process-analysis provider.
///
/// Holds no state between calls beyond the connection pool inside
/// [`reqwest::Client`]; each [`analyze`](ProcessAnalyzer::analyze) is a
/// single blocking attempt with no retry.
pub struct AnalysisClient {
    client: reqwest::Client,
    config: AnalysisConfig,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// One chat-completions round trip, returning the raw completion text.
    async fn request_completion(&self, system: &str, user: &str) -> Result<String, AiError> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(url = %url, model = %self.config.model, "requesting process analysis");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyCompletion)
    }
}

#[async_trait]
impl ProcessAnalyzer for AnalysisClient {
    /// Analyze a validated process description.
    ///
    /// Callers must have checked [`ProcessInput::validate`] already; this
    /// method assumes the description is long enough to be worth sending.
    /// Any transport, provider, or parse failure is logged and absorbed into
    /// [`AnalysisResult::fallback`] — the caller always gets a result.
    async fn analyze(&self, input: &ProcessInput) -> AnalysisResult {
        debug_assert!(
            input.validate().is_ok(),
            "analyze called with an unvalidated input"
        );

        let (system, user) = build_prompt(input);
        match self.request_completion(&system, &user).await {
            Ok(text) => parse_analysis(&text),
            Err(err) => {
                warn!(error = %err, title = %input.title, "analysis failed, returning fallback");
                AnalysisResult::fallback()
            }
        }
    }
}
