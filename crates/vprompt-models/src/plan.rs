//! Plan tiers and pricing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Monthly prices in USD for the paid self-serve tiers.
pub const PLAN_PRICE_STANDARD_USD: u32 = 19;
pub const PLAN_PRICE_PRO_USD: u32 = 49;

/// Plan tier enumeration.
///
/// Variants serialize with their display capitalization (`"Free"`, `"Pro"`, …)
/// to stay compatible with existing profile snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum PlanTier {
    #[default]
    Free,
    Standard,
    Pro,
    Enterprise,
}

impl PlanTier {
    /// Parse from string (case-insensitive), defaulting to Free.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "standard" => PlanTier::Standard,
            "pro" => PlanTier::Pro,
            "enterprise" => PlanTier::Enterprise,
            _ => PlanTier::Free,
        }
    }

    /// Get the plan name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Standard => "Standard",
            PlanTier::Pro => "Pro",
            PlanTier::Enterprise => "Enterprise",
        }
    }

    /// Monthly price in USD. `None` for Enterprise (custom pricing).
    pub fn monthly_price_usd(&self) -> Option<u32> {
        match self {
            PlanTier::Free => Some(0),
            PlanTier::Standard => Some(PLAN_PRICE_STANDARD_USD),
            PlanTier::Pro => Some(PLAN_PRICE_PRO_USD),
            PlanTier::Enterprise => None,
        }
    }

    /// Video analyses allowed per month. `None` means unlimited.
    pub fn monthly_analysis_quota(&self) -> Option<u32> {
        match self {
            PlanTier::Free => Some(3),
            PlanTier::Standard => Some(20),
            PlanTier::Pro | PlanTier::Enterprise => None,
        }
    }

    /// Whether upgrading to this tier goes through self-serve checkout.
    /// Free is applied directly and Enterprise is contact-sales only.
    pub fn is_self_serve_paid(&self) -> bool {
        matches!(self, PlanTier::Standard | PlanTier::Pro)
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
