use std::collections::HashMap;

use stripe::{
    CapturePaymentIntent, Client, CreateCustomer, CreatePaymentIntent, Currency,
    Customer as StripeCustomer, CustomerId, PaymentIntent as StripePaymentIntent,
    PaymentIntentCaptureMethod, StripeError,
};
use stripe_seed_types::{
    CaptureMethod, ClientConfig, Customer, IntentStatus, NewCustomer, NewPaymentIntent,
    PaymentGateway, PaymentIntent, Result, SeedError,
};
use tracing::debug;

/// Code reported when Stripe could not be reached at all
pub const CONNECTION_ERROR_CODE: &str = "api_connection_error";

/// [`PaymentGateway`] backed by the Stripe API
///
/// # Example
/// ```no_run
/// use stripe_seed_driver_stripe::StripeGateway;
/// use stripe_seed_types::{ClientConfig, NewCustomer, PaymentGateway};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api_key = std::env::var("STRIPE_API_KEY")?;
///     let gateway = StripeGateway::new(&ClientConfig::new(api_key));
///     let customer = gateway
///         .create_customer(&NewCustomer {
///             name: "Ada Lovelace".to_string(),
///             email: "ada@example.com".to_string(),
///             description: "Seeded by hand".to_string(),
///         })
///         .await?;
///     println!("Created {}", customer.id);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    pub fn new(config: &ClientConfig) -> Self {
        let client = match &config.api_base {
            Some(api_base) => Client::from_url(api_base.as_str(), config.api_key.as_str()),
            None => Client::new(config.api_key.as_str()),
        };
        Self { client }
    }
}

impl PaymentGateway for StripeGateway {
    async fn create_customer(&self, params: &NewCustomer) -> Result<Customer> {
        let mut create = CreateCustomer::new();
        create.name = Some(params.name.as_str());
        create.email = Some(params.email.as_str());
        create.description = Some(params.description.as_str());

        debug!("POST /v1/customers");
        let customer = StripeCustomer::create(&self.client, create)
            .await
            .map_err(convert_error)?;

        Ok(convert_customer(customer))
    }

    async fn create_payment_intent(&self, params: &NewPaymentIntent) -> Result<PaymentIntent> {
        let currency: Currency = params.currency.parse().map_err(|_| {
            SeedError::InvalidArgument(format!("Unsupported currency: {}", params.currency))
        })?;
        let customer: CustomerId = params.customer_id.parse().map_err(|e| {
            SeedError::InvalidArgument(format!("Invalid customer ID {}: {}", params.customer_id, e))
        })?;

        let mut create = CreatePaymentIntent::new(params.amount, currency);
        create.customer = Some(customer);
        create.payment_method_types = Some(params.payment_method_types.clone());
        create.capture_method = Some(to_stripe_capture_method(params.capture_method));
        create.description = Some(params.description.as_str());

        debug!(
            "POST /v1/payment_intents amount={} capture_method={}",
            params.amount, params.capture_method
        );
        let intent = StripePaymentIntent::create(&self.client, create)
            .await
            .map_err(convert_error)?;

        Ok(convert_payment_intent(intent))
    }

    async fn confirm_payment_intent(
        &self,
        intent_id: &str,
        payment_method: &str,
    ) -> Result<PaymentIntent> {
        // async-stripe's typed confirm params carry no payment_method field
        let form = HashMap::from([("payment_method", payment_method)]);

        debug!("POST /v1/payment_intents/{}/confirm", intent_id);
        let intent: StripePaymentIntent = self
            .client
            .post_form(&format!("/payment_intents/{}/confirm", intent_id), form)
            .await
            .map_err(convert_error)?;

        Ok(convert_payment_intent(intent))
    }

    async fn capture_payment_intent(&self, intent_id: &str) -> Result<PaymentIntent> {
        debug!("POST /v1/payment_intents/{}/capture", intent_id);
        let intent =
            StripePaymentIntent::capture(&self.client, intent_id, CapturePaymentIntent::default())
                .await
                .map_err(convert_error)?;

        Ok(convert_payment_intent(intent))
    }
}

/// Convert Stripe Customer to a seed Customer
fn convert_customer(customer: StripeCustomer) -> Customer {
    Customer {
        id: customer.id.to_string(),
        name: customer.name,
        email: customer.email,
        description: customer.description,
    }
}

/// Convert Stripe PaymentIntent to a seed PaymentIntent
fn convert_payment_intent(intent: StripePaymentIntent) -> PaymentIntent {
    PaymentIntent {
        id: intent.id.to_string(),
        amount: intent.amount,
        currency: intent.currency.to_string(),
        customer_id: intent.customer.as_ref().map(|c| c.id().to_string()),
        capture_method: from_stripe_capture_method(intent.capture_method),
        status: IntentStatus::from(intent.status.as_str()),
    }
}

fn to_stripe_capture_method(method: CaptureMethod) -> PaymentIntentCaptureMethod {
    match method {
        CaptureMethod::Automatic => PaymentIntentCaptureMethod::Automatic,
        CaptureMethod::AutomaticAsync => PaymentIntentCaptureMethod::AutomaticAsync,
        CaptureMethod::Manual => PaymentIntentCaptureMethod::Manual,
    }
}

fn from_stripe_capture_method(method: PaymentIntentCaptureMethod) -> CaptureMethod {
    match method {
        PaymentIntentCaptureMethod::Automatic => CaptureMethod::Automatic,
        PaymentIntentCaptureMethod::AutomaticAsync => CaptureMethod::AutomaticAsync,
        PaymentIntentCaptureMethod::Manual => CaptureMethod::Manual,
    }
}

/// Map a Stripe client error onto the seed error taxonomy
///
/// API rejections keep Stripe's snake_case error code (or error type when the
/// code is absent). Transport failures become [`CONNECTION_ERROR_CODE`].
fn convert_error(error: StripeError) -> SeedError {
    match error {
        StripeError::Stripe(request_error) => {
            let code = request_error
                .code
                .map(|code| code.to_string())
                .unwrap_or_else(|| request_error.error_type.to_string());
            let message = request_error.message.unwrap_or_else(|| {
                format!("Stripe returned HTTP {}", request_error.http_status)
            });
            SeedError::remote(code, message)
        }
        StripeError::ClientError(message) => SeedError::remote(CONNECTION_ERROR_CODE, message),
        StripeError::Timeout => {
            SeedError::remote(CONNECTION_ERROR_CODE, "Timed out waiting for Stripe")
        }
        other => SeedError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use stripe::{ErrorCode, ErrorType, RequestError};

    use super::*;

    #[test]
    fn test_api_error_keeps_snake_case_code() {
        let err = convert_error(StripeError::Stripe(RequestError {
            http_status: 402,
            error_type: ErrorType::Card,
            message: Some("Your card was declined.".to_string()),
            code: Some(ErrorCode::CardDeclined),
            ..Default::default()
        }));
        assert_eq!(
            err,
            SeedError::remote("card_declined", "Your card was declined.")
        );

        // No code: fall back to the error type, and to the status for the message
        let err = convert_error(StripeError::Stripe(RequestError {
            http_status: 400,
            error_type: ErrorType::InvalidRequest,
            ..Default::default()
        }));
        assert_eq!(
            err,
            SeedError::remote("invalid_request_error", "Stripe returned HTTP 400")
        );
    }

    #[test]
    fn test_transport_errors_map_to_connection_code() {
        let err = convert_error(StripeError::ClientError("connection refused".to_string()));
        assert_eq!(err.code(), Some(CONNECTION_ERROR_CODE));
        assert_eq!(err.to_string(), "Payment provider error: connection refused");

        let err = convert_error(StripeError::Timeout);
        assert_eq!(err.code(), Some(CONNECTION_ERROR_CODE));
    }

    #[test]
    fn test_capture_method_mapping() {
        assert_eq!(
            to_stripe_capture_method(CaptureMethod::Manual),
            PaymentIntentCaptureMethod::Manual
        );
        assert_eq!(
            from_stripe_capture_method(PaymentIntentCaptureMethod::AutomaticAsync),
            CaptureMethod::AutomaticAsync
        );
    }
}
