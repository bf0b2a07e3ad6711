//! Video segment and prompt suite models.
//!
//! These types mirror the structured-output schema the analysis provider is
//! constrained to. Every field is required: a segment with a missing field is
//! a deserialization error, never a renderable partial value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three target-specific prompts generated for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptSuite {
    /// Prompt tailored to Midjourney v6 idiom.
    pub midjourney: String,
    /// Prompt tailored to Stable Diffusion XL (with weights).
    pub stable_diffusion: String,
    /// Prompt tailored to Google Veo.
    pub veo: String,
}

impl PromptSuite {
    /// Number of prompts in a suite. Fixed by the output schema.
    pub const LEN: usize = 3;

    /// Iterate the prompts paired with their generation target name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("midjourney", self.midjourney.as_str()),
            ("stableDiffusion", self.stable_diffusion.as_str()),
            ("veo", self.veo.as_str()),
        ]
        .into_iter()
    }
}

/// One chronological slice of the source video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSegment {
    /// Human-readable time range, e.g. `"00:00 - 00:04"`. The format is a
    /// convention carried from the provider, not a validated invariant.
    pub timestamp: String,

    /// Free-text action summary for the slice.
    pub description: String,

    /// Aesthetic and color-palette description.
    pub visual_style: String,

    /// Lighting properties.
    pub lighting: String,

    /// Camera angle and movement.
    pub camera_work: String,

    /// Generated prompts for each supported target.
    pub generated_prompts: PromptSuite,
}
