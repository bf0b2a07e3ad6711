//! Simulated sign-in flow.
//!
//! This is a non-authenticating mock: the verification code is generated
//! locally, shown to the user through a fake notification, and compared
//! against state held in the same process. It carries no security value and
//! exists only to give the demonstration UI an explicit state machine.

use rand::Rng;
use tracing::debug;

use vprompt_models::{PlanTier, UserProfile};

use crate::error::{SessionError, SessionResult};

/// Channel the mock verification code is "sent" over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpChannel {
    Email,
    WhatsApp,
}

/// States of the sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Choosing an authentication gateway.
    MethodSelection,
    /// Entering the contact detail for the chosen channel.
    DetailEntry { channel: OtpChannel },
    /// A code has been issued and is awaiting entry.
    AwaitingCode {
        channel: OtpChannel,
        contact: String,
        code: String,
    },
    /// Verification succeeded; the derived profile is ready for the session.
    Authenticated(UserProfile),
    /// The entered code did not match.
    Failed {
        channel: OtpChannel,
        contact: String,
    },
}

impl AuthState {
    fn name(&self) -> &'static str {
        match self {
            Self::MethodSelection => "method-selection",
            Self::DetailEntry { .. } => "detail-entry",
            Self::AwaitingCode { .. } => "awaiting-code",
            Self::Authenticated(_) => "authenticated",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Six-digit mock verification code.
fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Derive a display profile from the contact detail, the way the original
/// product fabricates one at sign-in.
fn derive_profile(channel: OtpChannel, contact: &str) -> UserProfile {
    match channel {
        OtpChannel::Email => {
            let local = contact.split('@').next().unwrap_or(contact);
            let mut name = local.to_string();
            if let Some(first) = name.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            UserProfile::new(
                name,
                contact,
                format!("https://i.pravatar.cc/150?u={contact}"),
                PlanTier::Pro,
            )
        }
        OtpChannel::WhatsApp => {
            let tail = contact
                .get(contact.len().saturating_sub(4)..)
                .unwrap_or(contact);
            UserProfile::new(
                format!("User +62{tail}"),
                format!("{contact}@whatsapp.com"),
                format!("https://picsum.photos/seed/{contact}/40"),
                PlanTier::Pro,
            )
        }
    }
}

/// Sign-in state machine.
#[derive(Debug)]
pub struct AuthFlow {
    state: AuthState,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            state: AuthState::MethodSelection,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Pick an authentication gateway.
    pub fn choose_channel(&mut self, channel: OtpChannel) -> SessionResult<()> {
        match self.state {
            AuthState::MethodSelection => {
                self.state = AuthState::DetailEntry { channel };
                Ok(())
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "choose channel",
            )),
        }
    }

    /// Submit the contact detail and issue a code. Returns the code so the
    /// caller can render the fake notification.
    pub fn request_code(&mut self, contact: impl Into<String>) -> SessionResult<&str> {
        match &self.state {
            AuthState::DetailEntry { channel } => {
                let channel = *channel;
                let code = generate_code();
                debug!(?channel, "Issued mock verification code");
                self.state = AuthState::AwaitingCode {
                    channel,
                    contact: contact.into(),
                    code,
                };
                match &self.state {
                    AuthState::AwaitingCode { code, .. } => Ok(code),
                    _ => unreachable!(),
                }
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "request code",
            )),
        }
    }

    /// Re-issue the code without leaving the awaiting state.
    pub fn resend_code(&mut self) -> SessionResult<&str> {
        match &mut self.state {
            AuthState::AwaitingCode { code, .. } => {
                *code = generate_code();
                Ok(code)
            }
            state => Err(SessionError::invalid_transition(
                state.name(),
                "resend code",
            )),
        }
    }

    /// Compare the entered code against the issued one. On a match the flow
    /// lands in `Authenticated` with a derived profile; otherwise in `Failed`.
    pub fn verify(&mut self, input: &str) -> SessionResult<UserProfile> {
        match &self.state {
            AuthState::AwaitingCode {
                channel,
                contact,
                code,
            } => {
                if input == code {
                    let profile = derive_profile(*channel, contact);
                    self.state = AuthState::Authenticated(profile.clone());
                    Ok(profile)
                } else {
                    self.state = AuthState::Failed {
                        channel: *channel,
                        contact: contact.clone(),
                    };
                    Err(SessionError::VerificationFailed)
                }
            }
            _ => Err(SessionError::invalid_transition(self.state.name(), "verify")),
        }
    }

    /// From a failed verification, issue a fresh code and try again.
    pub fn retry(&mut self) -> SessionResult<&str> {
        match &self.state {
            AuthState::Failed { channel, contact } => {
                self.state = AuthState::AwaitingCode {
                    channel: *channel,
                    contact: contact.clone(),
                    code: generate_code(),
                };
                match &self.state {
                    AuthState::AwaitingCode { code, .. } => Ok(code),
                    _ => unreachable!(),
                }
            }
            _ => Err(SessionError::invalid_transition(self.state.name(), "retry")),
        }
    }
}
