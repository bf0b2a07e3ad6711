//! Analysis request builder.
//!
//! Turns a raw video byte buffer plus a declared media type into a single
//! provider request: the video as inline binary content, a fixed segmentation
//! instruction, and a strict output schema constraining the response to the
//! report shape. Pure transformation, no side effects.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AnalysisError, AnalysisResult};

/// Inline data ceiling for one request. Larger videos are a precondition
/// violation, never a silent truncation.
pub const MAX_INLINE_VIDEO_BYTES: usize = 20 * 1024 * 1024;

/// Label used when the caller does not name the source video.
pub(crate) const DEFAULT_VIDEO_LABEL: &str = "Segmented Video Analysis";

/// Fixed natural-language instruction sent alongside the video.
const INSTRUCTION: &str = "Analyze this video and divide it into logical chronological segments (scenes or chapters).

For the overall video, provide a summary.

For EACH segment, provide:
1. Timestamp (e.g., \"00:00 - 00:04\")
2. Detailed Description of the action.
3. Visual Style (aesthetic, color palette).
4. Lighting properties.
5. Camera Work (angle, movement).
6. High-fidelity prompts for:
   - Midjourney v6
   - Stable Diffusion XL (with weights)
   - Google Veo

Ensure the response is a single valid JSON object following the requested schema.";

/// Gemini generateContent request body.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

/// Output schema the provider response is constrained to.
///
/// Every report field is marked required. Dropping a field here would let the
/// provider omit it and break the downstream report, so the lists below must
/// stay in lockstep with the segment model.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallSummary": { "type": "STRING" },
            "segments": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timestamp": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "visualStyle": { "type": "STRING" },
                        "lighting": { "type": "STRING" },
                        "cameraWork": { "type": "STRING" },
                        "generatedPrompts": {
                            "type": "OBJECT",
                            "properties": {
                                "midjourney": { "type": "STRING" },
                                "stableDiffusion": { "type": "STRING" },
                                "veo": { "type": "STRING" }
                            },
                            "required": ["midjourney", "stableDiffusion", "veo"]
                        }
                    },
                    "required": [
                        "timestamp",
                        "description",
                        "visualStyle",
                        "lighting",
                        "cameraWork",
                        "generatedPrompts"
                    ]
                }
            }
        },
        "required": ["overallSummary", "segments"]
    })
}

/// An opaque provider request, ready to submit to the analysis client.
#[derive(Debug)]
pub struct AnalysisRequest {
    payload: GenerateContentRequest,
    video_label: String,
}

impl AnalysisRequest {
    /// Build a request from raw video content and its declared media type
    /// (e.g. `"video/mp4"`).
    pub fn new(video: &[u8], media_type: &str) -> AnalysisResult<Self> {
        if video.is_empty() {
            return Err(AnalysisError::precondition("video payload is empty"));
        }
        if video.len() > MAX_INLINE_VIDEO_BYTES {
            return Err(AnalysisError::precondition(format!(
                "video payload is {} bytes, inline ceiling is {} bytes",
                video.len(),
                MAX_INLINE_VIDEO_BYTES
            )));
        }
        if media_type.is_empty() {
            return Err(AnalysisError::precondition("media type is empty"));
        }

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: media_type.to_string(),
                            data: BASE64.encode(video),
                        }),
                    },
                    Part {
                        text: Some(INSTRUCTION.to_string()),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        Ok(Self {
            payload,
            video_label: DEFAULT_VIDEO_LABEL.to_string(),
        })
    }

    /// Set the display label for the source video.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.video_label = label.into();
        self
    }

    /// Display label carried into the assembled report.
    pub fn video_label(&self) -> &str {
        &self.video_label
    }

    pub(crate) fn payload(&self) -> &GenerateContentRequest {
        &self.payload
    }
}
