//! User profile model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::plan::PlanTier;

/// The logged-in user's profile.
///
/// Owned by the session context; mutated only by login and plan-upgrade
/// events; persisted as a flat snapshot in the local profile store and
/// destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UserProfile {
    /// Display name.
    pub name: String,

    /// Contact email.
    #[validate(email)]
    pub email: String,

    /// Avatar image URL.
    pub avatar: String,

    /// Current plan tier.
    pub plan: PlanTier,
}

impl UserProfile {
    /// Create a profile.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
        plan: PlanTier,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
            plan,
        }
    }

    /// Return a copy with the plan changed.
    pub fn with_plan(mut self, plan: PlanTier) -> Self {
        self.plan = plan;
        self
    }
}
