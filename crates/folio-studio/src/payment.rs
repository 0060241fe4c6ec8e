//! Plan catalog and checkout.
//!
//! Card capture belongs to the external payment widget. The studio hands it
//! a [`Plan`] and reacts to the outcome; no card data passes through here.

use std::time::Duration;

use async_trait::async_trait;
use folio_types::Plan;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    #[error("payment declined: {0}")]
    Declined(String),

    #[error("a payment is already being processed")]
    InProgress,
}

// ============================================================================
// Plans
// ============================================================================

#[derive(Clone, Debug)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Basic, Professional and Business tiers.
    pub fn builtin() -> Self {
        Self {
            plans: vec![
                Plan::new(
                    "basic",
                    "Basic",
                    9,
                    &[
                        "5 PDF exports per month",
                        "Basic templates",
                        "Market trends (weekly updates)",
                    ],
                ),
                Plan::new(
                    "professional",
                    "Professional",
                    29,
                    &[
                        "Unlimited PDF exports",
                        "All premium templates",
                        "Market trends (daily updates)",
                        "Advanced keyword research",
                    ],
                )
                .popular(),
                Plan::new(
                    "business",
                    "Business",
                    79,
                    &[
                        "Everything in Professional",
                        "Team collaboration",
                        "Real-time market analytics",
                        "Priority support",
                    ],
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Plan] {
        &self.plans
    }

    pub fn get(&self, id: &str) -> Result<&Plan, PaymentError> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PaymentError::UnknownPlan(id.to_string()))
    }

    /// Preselected plan: the first popular one, else the first listed.
    pub fn default_plan(&self) -> Option<&Plan> {
        self.plans
            .iter()
            .find(|p| p.popular)
            .or_else(|| self.plans.first())
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Processor boundary
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub plan_id: String,
    pub confirmation: String,
}

/// External payment collection.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn submit(&self, plan: &Plan) -> Result<PaymentReceipt, PaymentError>;
}

/// Waits, then approves (or declines with a fixed message).
#[derive(Clone, Debug, Default)]
pub struct SimulatedProcessor {
    latency: Duration,
    decline: Option<String>,
}

impl SimulatedProcessor {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            decline: None,
        }
    }

    /// Decline every payment with `message`.
    pub fn declining(mut self, message: impl Into<String>) -> Self {
        self.decline = Some(message.into());
        self
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn submit(&self, plan: &Plan) -> Result<PaymentReceipt, PaymentError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(message) = &self.decline {
            return Err(PaymentError::Declined(message.clone()));
        }
        Ok(PaymentReceipt {
            plan_id: plan.id.clone(),
            confirmation: format!("sim-{}-{}", plan.id, plan.price),
        })
    }
}

// ============================================================================
// Checkout
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Processing,
    Succeeded(PaymentReceipt),
    /// Inline message for the form.
    Failed(String),
}

/// One checkout form: a selected plan and the submission state.
#[derive(Clone, Debug)]
pub struct Checkout {
    plan: Plan,
    state: CheckoutState,
}

impl Checkout {
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            state: CheckoutState::Idle,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Switch plans. Not allowed mid-payment.
    pub fn select_plan(&mut self, plan: Plan) -> Result<(), PaymentError> {
        if self.state == CheckoutState::Processing {
            return Err(PaymentError::InProgress);
        }
        self.plan = plan;
        self.state = CheckoutState::Idle;
        Ok(())
    }

    pub fn begin(&mut self) -> Result<(), PaymentError> {
        if self.state == CheckoutState::Processing {
            return Err(PaymentError::InProgress);
        }
        self.state = CheckoutState::Processing;
        Ok(())
    }

    pub fn finish(&mut self, result: Result<PaymentReceipt, PaymentError>) {
        self.state = match result {
            Ok(receipt) => {
                info!(plan = %self.plan.id, confirmation = %receipt.confirmation, "subscription confirmed");
                CheckoutState::Succeeded(receipt)
            }
            Err(e) => {
                warn!(plan = %self.plan.id, error = %e, "payment failed");
                CheckoutState::Failed(e.to_string())
            }
        };
    }

    pub async fn submit(&mut self, processor: &dyn PaymentProcessor) -> Result<&CheckoutState, PaymentError> {
        self.begin()?;
        let result = processor.submit(&self.plan).await;
        self.finish(result);
        Ok(&self.state)
    }

    /// Success banner text, once the payment went through.
    pub fn confirmation_message(&self) -> Option<String> {
        match self.state {
            CheckoutState::Succeeded(_) => Some(format!(
                "Thank you for subscribing to the {} plan. Your account has been upgraded.",
                self.plan.name
            )),
            _ => None,
        }
    }
}
