//! Session state for VideoPrompt Pro.
//!
//! Provides an explicit session-context object (no ambient singletons) with a
//! defined lifecycle: init (load-or-empty), authenticate, mutate (plan
//! change), teardown (logout). The only durable state is a flat JSON snapshot
//! of the current user profile under a fixed key.
//!
//! The sign-in and checkout flows in this crate are UI-state machines with no
//! security value: codes and payment verification never leave the process.
//! They exist so the demonstration surface has explicit states instead of ad
//! hoc flags.

pub mod auth;
pub mod context;
pub mod error;
pub mod payment;
pub mod store;

pub use auth::{AuthFlow, AuthState, OtpChannel};
pub use context::SessionContext;
pub use error::{SessionError, SessionResult};
pub use payment::{CheckoutFlow, CheckoutState, PaymentMethod};
pub use store::{ProfileStore, SNAPSHOT_KEY};
