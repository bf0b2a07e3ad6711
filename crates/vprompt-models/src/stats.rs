//! Dashboard statistics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::AnalysisReport;

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total videos analyzed.
    pub total_analyzed: u32,
    /// Total prompts generated across all reports.
    pub prompts_generated: u32,
    /// Human-readable storage usage, e.g. `"4.2 GB"`.
    pub storage_used: String,
    /// API credits remaining this cycle.
    pub remaining_credits: u32,
}

impl DashboardStats {
    /// Aggregate stats from the session's reports.
    pub fn from_reports<'a>(
        reports: impl IntoIterator<Item = &'a AnalysisReport>,
        storage_used: impl Into<String>,
        remaining_credits: u32,
    ) -> Self {
        let mut total_analyzed = 0u32;
        let mut prompts_generated = 0u32;
        for report in reports {
            total_analyzed += 1;
            prompts_generated += report.prompt_count() as u32;
        }
        Self {
            total_analyzed,
            prompts_generated,
            storage_used: storage_used.into(),
            remaining_credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{PromptSuite, VideoSegment};

    fn report(segments: usize) -> AnalysisReport {
        let seg = VideoSegment {
            timestamp: "00:00 - 00:01".to_string(),
            description: "d".to_string(),
            visual_style: "v".to_string(),
            lighting: "l".to_string(),
            camera_work: "c".to_string(),
            generated_prompts: PromptSuite {
                midjourney: "m".to_string(),
                stable_diffusion: "s".to_string(),
                veo: "v".to_string(),
            },
        };
        AnalysisReport::assemble("Clip", "summary", vec![seg; segments])
    }

    #[test]
    fn test_aggregates_reports() {
        let reports = [report(2), report(3)];
        let stats = DashboardStats::from_reports(reports.iter(), "1.2 GB", 850);
        assert_eq!(stats.total_analyzed, 2);
        assert_eq!(stats.prompts_generated, 15);
        assert_eq!(stats.storage_used, "1.2 GB");
        assert_eq!(stats.remaining_credits, 850);
    }

    #[test]
    fn test_empty_session() {
        let stats = DashboardStats::from_reports([], "0 B", 0);
        assert_eq!(stats.total_analyzed, 0);
        assert_eq!(stats.prompts_generated, 0);
    }
}
