//! Shared data models for the VideoPrompt Pro backend.
//!
//! This crate provides Serde-serializable types for:
//! - Analyzed video segments and their generated prompt suites
//! - Analysis reports and segment browsing
//! - User profiles and plan tiers
//! - Dashboard statistics

pub mod plan;
pub mod report;
pub mod segment;
pub mod stats;
pub mod user;

// Re-export common types
pub use plan::{PlanTier, PLAN_PRICE_PRO_USD, PLAN_PRICE_STANDARD_USD};
pub use report::{AnalysisReport, SegmentCursor};
pub use segment::{PromptSuite, VideoSegment};
pub use stats::DashboardStats;
pub use user::UserProfile;
