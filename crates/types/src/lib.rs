//! Shared types for stripe-seed
//!
//! The records in this crate describe what the seeding pipeline sends to and
//! receives from the payment provider. Drivers implement [`PaymentGateway`]
//! and convert their wire types into these records, so the pipeline never
//! touches a provider SDK directly.

pub mod error;
pub mod gateway;
pub mod money;
pub mod records;

pub use error::{Result, SeedError};
pub use gateway::{ClientConfig, PaymentGateway};
pub use money::format_minor_units;
pub use records::{
    CaptureMethod, Customer, IntentStatus, IterationResult, NewCustomer, NewPaymentIntent,
    PaymentIntent,
};

/// Defaults used when seeding a sandbox
pub mod defaults {
    /// Environment variable holding the provider secret key
    pub const API_KEY_VAR: &str = "STRIPE_API_KEY";
    /// File the secret key is usually kept in
    pub const API_KEY_FILE: &str = ".env";
    /// Iterations executed when none are requested
    pub const ITERATIONS: u32 = 3;
    /// Currency of every seeded payment
    pub const CURRENCY: &str = "usd";
    /// Smallest generated amount, in minor units ($10.00)
    pub const MIN_AMOUNT: i64 = 1_000;
    /// Largest generated amount, in minor units ($500.00)
    pub const MAX_AMOUNT: i64 = 50_000;
    /// Sandbox card that always confirms successfully
    pub const TEST_PAYMENT_METHOD: &str = "pm_card_visa";
    /// Only payment method type allowed on seeded intents
    pub const PAYMENT_METHOD_TYPE: &str = "card";
    pub const PAYMENT_DESCRIPTION: &str = "Test payment created via pipeline";
}
