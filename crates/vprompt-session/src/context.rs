//! Session context with an explicit lifecycle.

use tracing::info;
use validator::Validate;

use vprompt_models::{PlanTier, UserProfile};

use crate::error::{SessionError, SessionResult};
use crate::store::ProfileStore;

/// The single logged-in user, owned explicitly instead of living in ambient
/// global state. Lifecycle: `init` (load-or-empty), `authenticate`,
/// `update_plan`, `logout`.
#[derive(Debug)]
pub struct SessionContext {
    store: ProfileStore,
    user: Option<UserProfile>,
}

impl SessionContext {
    /// Initialize from the snapshot store, restoring a previous session if a
    /// valid snapshot exists.
    pub fn init(store: ProfileStore) -> SessionResult<Self> {
        let user = store.load()?;
        if let Some(profile) = &user {
            info!(email = %profile.email, "Restored session from snapshot");
        }
        Ok(Self { store, user })
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The current user, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Log a user in and persist the snapshot.
    pub fn authenticate(&mut self, profile: UserProfile) -> SessionResult<()> {
        profile
            .validate()
            .map_err(|e| SessionError::InvalidProfile(e.to_string()))?;
        self.store.save(&profile)?;
        info!(email = %profile.email, plan = %profile.plan, "User authenticated");
        self.user = Some(profile);
        Ok(())
    }

    /// Change the current user's plan and persist the updated snapshot.
    pub fn update_plan(&mut self, plan: PlanTier) -> SessionResult<&UserProfile> {
        let user = self.user.as_mut().ok_or(SessionError::NotAuthenticated)?;
        user.plan = plan;
        self.store.save(user)?;
        info!(email = %user.email, plan = %plan, "Plan updated");
        Ok(user)
    }

    /// Tear the session down: drop the user and destroy the snapshot.
    pub fn logout(&mut self) -> SessionResult<()> {
        self.store.clear()?;
        if let Some(profile) = self.user.take() {
            info!(email = %profile.email, "User logged out");
        }
        Ok(())
    }
}
