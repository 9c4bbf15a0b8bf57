//! Seeding pipeline for stripe-seed
//!
//! [`Pipeline`] drives a [`PaymentGateway`](stripe_seed_types::PaymentGateway)
//! through create customer, create payment intent, confirm and capture, once
//! per iteration. Field values come from a [`FakeData`] source and progress is
//! written to a [`ProgressSink`], so both can be swapped out in tests.

pub mod faker;
pub mod pipeline;
pub mod progress;
pub mod summary;

pub use faker::{FakeData, RandomFaker};
pub use pipeline::Pipeline;
pub use progress::{ConsoleSink, ProgressSink};
pub use summary::render_summary;
