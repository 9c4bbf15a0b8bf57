use std::fmt;
use std::future::Future;

use crate::{Customer, NewCustomer, NewPaymentIntent, PaymentIntent, Result};

/// Immutable settings for a payment provider client
///
/// Built once at startup and handed to the driver. Nothing reads the key from
/// process-wide state after that.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    /// Overrides the provider's default API base URL
    pub api_base: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Whether the key belongs to a test-mode (sandbox) account
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with("sk_test_") || self.api_key.starts_with("rk_test_")
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the key prefix is ever printed
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("ClientConfig")
            .field("api_key", &format!("{}…", prefix))
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Remote operations the seeding pipeline needs from a payment provider
///
/// Every call is awaited to completion before the next one is issued.
pub trait PaymentGateway {
    fn create_customer(&self, params: &NewCustomer) -> impl Future<Output = Result<Customer>>;

    fn create_payment_intent(
        &self,
        params: &NewPaymentIntent,
    ) -> impl Future<Output = Result<PaymentIntent>>;

    /// Attach `payment_method` to the intent and confirm it
    fn confirm_payment_intent(
        &self,
        intent_id: &str,
        payment_method: &str,
    ) -> impl Future<Output = Result<PaymentIntent>>;

    /// Capture the full authorized amount
    fn capture_payment_intent(&self, intent_id: &str) -> impl Future<Output = Result<PaymentIntent>>;
}
