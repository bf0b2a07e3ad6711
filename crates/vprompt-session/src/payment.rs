//! Simulated checkout flow.
//!
//! Like the sign-in flow, this is a non-authenticating mock: "verification"
//! is a local state transition, no payment rail is involved. The state
//! machine mirrors the checkout modal: method selection, detail entry with a
//! proof upload, verifying, success.

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use vprompt_models::PlanTier;

use crate::error::{SessionError, SessionResult};

/// Accepted mock payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Qris,
    Dana,
    Bca,
}

/// States of the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// Choosing a payment method.
    MethodSelection,
    /// Viewing payment details; a proof screenshot may be attached.
    DetailEntry {
        method: PaymentMethod,
        proof_attached: bool,
    },
    /// The fake verification is running.
    Verifying,
    /// Checkout finished; the plan is ready to apply.
    Success,
}

impl CheckoutState {
    fn name(&self) -> &'static str {
        match self {
            Self::MethodSelection => "method-selection",
            Self::DetailEntry { .. } => "detail-entry",
            Self::Verifying => "verifying",
            Self::Success => "success",
        }
    }
}

/// `VP-`-prefixed transaction reference shown on the checkout modal.
fn generate_reference() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();
    format!("VP-{suffix}")
}

/// Checkout state machine for one plan upgrade.
#[derive(Debug)]
pub struct CheckoutFlow {
    plan: PlanTier,
    reference: String,
    state: CheckoutState,
}

impl CheckoutFlow {
    /// Start checkout for a self-serve paid tier. Free is applied directly
    /// and Enterprise goes through contact-sales, so neither enters checkout.
    pub fn begin(plan: PlanTier) -> SessionResult<Self> {
        if !plan.is_self_serve_paid() {
            return Err(SessionError::InvalidProfile(format!(
                "plan {plan} is not purchasable through checkout"
            )));
        }
        Ok(Self {
            plan,
            reference: generate_reference(),
            state: CheckoutState::MethodSelection,
        })
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The plan being purchased.
    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    /// Transaction reference, e.g. `"VP-8F3K2A"`.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Amount billed monthly, in USD.
    pub fn amount_usd(&self) -> u32 {
        // begin() only admits self-serve paid tiers, which all have a price.
        self.plan.monthly_price_usd().unwrap_or(0)
    }

    /// Pick a payment method.
    pub fn choose_method(&mut self, method: PaymentMethod) -> SessionResult<()> {
        match self.state {
            CheckoutState::MethodSelection => {
                self.state = CheckoutState::DetailEntry {
                    method,
                    proof_attached: false,
                };
                Ok(())
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "choose method",
            )),
        }
    }

    /// Attach the payment-proof screenshot.
    pub fn attach_proof(&mut self) -> SessionResult<()> {
        match &mut self.state {
            CheckoutState::DetailEntry { proof_attached, .. } => {
                *proof_attached = true;
                Ok(())
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "attach proof",
            )),
        }
    }

    /// Send the payment for verification. Requires an attached proof.
    pub fn confirm(&mut self) -> SessionResult<()> {
        match self.state {
            CheckoutState::DetailEntry {
                proof_attached: true,
                ..
            } => {
                self.state = CheckoutState::Verifying;
                Ok(())
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "confirm",
            )),
        }
    }

    /// Finish the fake verification. Returns the plan to apply through the
    /// session context.
    pub fn complete_verification(&mut self) -> SessionResult<PlanTier> {
        match self.state {
            CheckoutState::Verifying => {
                self.state = CheckoutState::Success;
                info!(reference = %self.reference, plan = %self.plan, "Mock checkout completed");
                Ok(self.plan)
            }
            _ => Err(SessionError::invalid_transition(
                self.state.name(),
                "complete verification",
            )),
        }
    }
}
