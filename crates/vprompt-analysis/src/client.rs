//! Gemini client for video segment analysis.
//!
//! Submits one request and produces one `AnalysisReport`. The call suspends
//! the caller at the network boundary only; dropping the returned future
//! aborts the underlying request without running the success path. The client
//! performs exactly one attempt per invocation — retry policy belongs to the
//! caller, and two calls with identical input may legitimately return
//! different segmentations.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use vprompt_models::{AnalysisReport, VideoSegment};

use crate::error::{AnalysisError, AnalysisResult};
use crate::request::AnalysisRequest;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the provider.
    pub base_url: String,
    /// Model to run the analysis with.
    pub model: String,
    /// Bounded wait per request. Video understanding calls are not allowed
    /// to hang indefinitely.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeminiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("GEMINI_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// Gemini API response envelope.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Report body as the provider emits it. The client synthesizes the id,
/// creation instant and video label on top of this.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    overall_summary: String,
    segments: Vec<VideoSegment>,
}

/// Gemini API client.
pub struct GeminiClient {
    api_key: String,
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client.
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> AnalysisResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::provider_unavailable(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            http,
            config,
        })
    }

    /// Create from environment variables (`GEMINI_API_KEY` required).
    pub fn from_env() -> AnalysisResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AnalysisError::provider_unavailable("GEMINI_API_KEY not set"))?;
        Self::new(api_key, GeminiConfig::from_env())
    }

    /// Build a request from raw video content and submit it. The only call
    /// surface the presentation layer needs.
    pub async fn submit_video_for_analysis(
        &self,
        video: &[u8],
        media_type: &str,
    ) -> AnalysisResult<AnalysisReport> {
        let request = AnalysisRequest::new(video, media_type)?;
        self.analyze(&request).await
    }

    /// Submit one request and await the full report or a failure.
    ///
    /// Performs exactly one network call. A zero-segment response yields a
    /// valid degenerate report; rejecting it is the caller's policy decision.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.api_key
        );

        debug!(model = %self.config.model, "Submitting video analysis request");

        let response = self
            .http
            .post(&url)
            .json(request.payload())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API rejected analysis request");
            return Err(AnalysisError::provider_unavailable(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let envelope: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| AnalysisError::schema_violation(e.to_string(), body.clone()))?;

        let text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                AnalysisError::schema_violation("no content in Gemini response", body.clone())
            })?;

        let text = strip_code_fences(text);
        let raw: RawAnalysis = serde_json::from_str(text)
            .map_err(|e| AnalysisError::schema_violation(e.to_string(), text.to_string()))?;

        let report = AnalysisReport::assemble(request.video_label(), raw.overall_summary, raw.segments);
        info!(
            report_id = %report.id,
            segments = report.segment_count(),
            "Video analysis completed"
        );
        Ok(report)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout(self.config.timeout.as_secs())
        } else {
            AnalysisError::provider_unavailable(e.to_string())
        }
    }
}

/// Strip markdown code fences some models wrap JSON output in.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
