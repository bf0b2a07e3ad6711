//! Analysis report and segment browsing.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::segment::{PromptSuite, VideoSegment};

/// The full output for one submitted video.
///
/// A report is produced atomically by one successful analysis call and held in
/// memory for the active session. It is replaced wholesale on a new analysis
/// and never persisted to durable storage. There is no partial or streaming
/// mutation path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Opaque unique identifier, generated client-side per analysis run.
    pub id: String,

    /// Creation instant (client clock).
    pub created_at: DateTime<Utc>,

    /// Display name for the source video (not necessarily the filename).
    pub video_label: String,

    /// Free-text whole-video synopsis.
    pub overall_summary: String,

    /// Chronological segments, in provider response order.
    pub segments: Vec<VideoSegment>,
}

impl AnalysisReport {
    /// Assemble a report from provider output, synthesizing the id and
    /// creation instant on the client.
    pub fn assemble(
        video_label: impl Into<String>,
        overall_summary: impl Into<String>,
        segments: Vec<VideoSegment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            video_label: video_label.into(),
            overall_summary: overall_summary.into(),
            segments,
        }
    }

    /// Number of segments in the report.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total prompts across all segments (three per segment).
    pub fn prompt_count(&self) -> usize {
        self.segments.len() * PromptSuite::LEN
    }

    /// Whether the report carries at least one segment. A zero-segment report
    /// is valid but degenerate; rejecting it is a caller policy decision.
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Selects one "active" segment of a report by index for display.
///
/// A fresh cursor points at index 0; selection is clamped to the report's
/// segment range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentCursor {
    index: usize,
}

impl SegmentCursor {
    /// Cursor at the default position (index 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Select a segment by index, clamped to `[0, len - 1]` for the given
    /// report. On an empty report the cursor stays at 0.
    pub fn select(&mut self, report: &AnalysisReport, index: usize) {
        let last = report.segments.len().saturating_sub(1);
        self.index = index.min(last);
    }

    /// The active segment, or `None` for an empty report.
    pub fn active<'a>(&self, report: &'a AnalysisReport) -> Option<&'a VideoSegment> {
        report.segments.get(self.index)
    }
}
