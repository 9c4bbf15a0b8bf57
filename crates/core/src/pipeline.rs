use chrono::Utc;
use stripe_seed_types::{
    CaptureMethod, Customer, IntentStatus, IterationResult, NewCustomer, NewPaymentIntent,
    PaymentGateway, PaymentIntent, Result, SeedError, defaults, format_minor_units,
};
use tracing::{debug, info, warn};

use crate::{faker::FakeData, progress::ProgressSink, summary::render_summary};

/// Seeds the payment provider with customers and captured payments
///
/// Every iteration issues exactly four calls, each one waiting on the
/// previous: create customer, create a manually captured payment intent for
/// that customer, confirm it with the sandbox test card, then capture it.
pub struct Pipeline<G, F, S> {
    gateway: G,
    faker: F,
    sink: S,
}

impl<G, F, S> Pipeline<G, F, S>
where
    G: PaymentGateway,
    F: FakeData,
    S: ProgressSink,
{
    pub fn new(gateway: G, faker: F, sink: S) -> Self {
        Self {
            gateway,
            faker,
            sink,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `iterations` iterations and report the summary
    ///
    /// The first failing call aborts the run and its error is returned.
    pub async fn execute(&mut self, iterations: i64) -> Result<Vec<IterationResult>> {
        let mut results = Vec::new();
        self.execute_into(iterations, &mut results).await?;
        self.report_summary(&results);
        Ok(results)
    }

    /// Run `iterations` iterations, appending each completed one to `results`
    ///
    /// On failure `results` holds the iterations that finished before the
    /// failing call. Nothing is undone on the provider side.
    pub async fn execute_into(
        &mut self,
        iterations: i64,
        results: &mut Vec<IterationResult>,
    ) -> Result<()> {
        if iterations <= 0 {
            return Err(SeedError::InvalidArgument(format!(
                "Number of iterations must be greater than 0, got {}",
                iterations
            )));
        }

        for index in 1..=iterations {
            self.sink.emit("");
            self.sink
                .emit(&format!("=== Iteration {} of {} ===", index, iterations));

            let result = self.execute_iteration().await?;
            info!(
                "Iteration {}/{} seeded customer {} with payment intent {}",
                index, iterations, result.customer.id, result.payment_intent.id
            );
            results.push(result);

            self.sink.emit(&format!("=== Completed iteration {} ===", index));
        }

        Ok(())
    }

    /// Emit the summary table for `results`
    pub fn report_summary(&mut self, results: &[IterationResult]) {
        for line in render_summary(results) {
            self.sink.emit(&line);
        }
    }

    async fn execute_iteration(&mut self) -> Result<IterationResult> {
        let customer = self.create_customer().await?;
        self.sink.emit(&format!(
            "✓ Created customer: {} ({})",
            customer.id,
            customer.name.as_deref().unwrap_or("unnamed")
        ));

        let intent = self.create_payment_intent(&customer.id).await?;
        self.sink.emit(&format!(
            "✓ Created payment intent: {} for {}",
            intent.id,
            format_minor_units(intent.amount, &intent.currency)
        ));

        let confirmed = self.confirm_payment_intent(&intent.id).await?;
        self.sink.emit(&format!(
            "✓ Confirmed payment intent: {} (status: {})",
            confirmed.id, confirmed.status
        ));

        let captured = self.capture_payment_intent(&confirmed.id).await?;
        self.sink.emit(&format!(
            "✓ Captured payment intent: {} (status: {})",
            captured.id, captured.status
        ));

        Ok(IterationResult {
            customer,
            payment_intent: captured,
        })
    }

    async fn create_customer(&mut self) -> Result<Customer> {
        let params = NewCustomer {
            name: self.faker.full_name(),
            email: self.faker.email(),
            description: format!(
                "Test customer created via pipeline at {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S")
            ),
        };
        debug!("Creating customer {} <{}>", params.name, params.email);
        self.gateway.create_customer(&params).await
    }

    async fn create_payment_intent(&mut self, customer_id: &str) -> Result<PaymentIntent> {
        let amount = self
            .faker
            .integer_between(defaults::MIN_AMOUNT, defaults::MAX_AMOUNT);
        let params = NewPaymentIntent::manual_card(amount, customer_id);
        debug!("Creating payment intent of {} for {}", amount, customer_id);

        let intent = self.gateway.create_payment_intent(&params).await?;
        if intent.capture_method != CaptureMethod::Manual {
            warn!(
                "Payment intent {} reports capture method {}, expected manual",
                intent.id, intent.capture_method
            );
        }
        Ok(intent)
    }

    async fn confirm_payment_intent(&mut self, intent_id: &str) -> Result<PaymentIntent> {
        let intent = self
            .gateway
            .confirm_payment_intent(intent_id, defaults::TEST_PAYMENT_METHOD)
            .await?;
        // Capture still proceeds; the provider rejects it if the intent is not capturable
        if intent.status != IntentStatus::RequiresCapture {
            warn!(
                "Payment intent {} confirmed with status {}, expected requires_capture",
                intent.id, intent.status
            );
        }
        Ok(intent)
    }

    async fn capture_payment_intent(&mut self, intent_id: &str) -> Result<PaymentIntent> {
        self.gateway.capture_payment_intent(intent_id).await
    }
}
