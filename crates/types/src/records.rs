use std::fmt;

use crate::defaults;

/// Customer as returned by the payment provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

/// Parameters for creating a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub description: String,
}

/// When funds are moved after a payment intent is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMethod {
    Automatic,
    AutomaticAsync,
    /// Funds stay authorized until an explicit capture call
    Manual,
}

impl CaptureMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMethod::Automatic => "automatic",
            CaptureMethod::AutomaticAsync => "automatic_async",
            CaptureMethod::Manual => "manual",
        }
    }
}

impl fmt::Display for CaptureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status reported by the provider for a payment intent
///
/// Statuses the pipeline does not know about are kept verbatim in
/// [`IntentStatus::Other`] so they can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    Other(String),
}

impl IntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IntentStatus::RequiresPaymentMethod => "requires_payment_method",
            IntentStatus::RequiresConfirmation => "requires_confirmation",
            IntentStatus::RequiresAction => "requires_action",
            IntentStatus::Processing => "processing",
            IntentStatus::RequiresCapture => "requires_capture",
            IntentStatus::Canceled => "canceled",
            IntentStatus::Succeeded => "succeeded",
            IntentStatus::Other(status) => status.as_str(),
        }
    }
}

impl From<&str> for IntentStatus {
    fn from(status: &str) -> Self {
        match status {
            "requires_payment_method" => IntentStatus::RequiresPaymentMethod,
            "requires_confirmation" => IntentStatus::RequiresConfirmation,
            "requires_action" => IntentStatus::RequiresAction,
            "processing" => IntentStatus::Processing,
            "requires_capture" => IntentStatus::RequiresCapture,
            "canceled" => IntentStatus::Canceled,
            "succeeded" => IntentStatus::Succeeded,
            other => IntentStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment intent (authorization) as returned by the payment provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    /// Amount in minor units (cents)
    pub amount: i64,
    pub currency: String,
    pub customer_id: Option<String>,
    pub capture_method: CaptureMethod,
    pub status: IntentStatus,
}

/// Parameters for creating a payment intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentIntent {
    pub amount: i64,
    pub currency: String,
    pub customer_id: String,
    pub payment_method_types: Vec<String>,
    pub capture_method: CaptureMethod,
    pub description: String,
}

impl NewPaymentIntent {
    /// Card-only, manually captured intent in the seeding currency
    pub fn manual_card(amount: i64, customer_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: defaults::CURRENCY.to_string(),
            customer_id: customer_id.into(),
            payment_method_types: vec![defaults::PAYMENT_METHOD_TYPE.to_string()],
            capture_method: CaptureMethod::Manual,
            description: defaults::PAYMENT_DESCRIPTION.to_string(),
        }
    }
}

/// One completed pipeline iteration: the customer and its captured intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationResult {
    pub customer: Customer,
    pub payment_intent: PaymentIntent,
}
