use std::{path::Path, process};

use clap::{Parser, error::ErrorKind};
use console::style;
use stripe_seed_core::{ConsoleSink, Pipeline, RandomFaker};
use stripe_seed_driver_stripe::StripeGateway;
use stripe_seed_types::{Result, SeedError, defaults};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;

use config::SeedConfig;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Seed a Stripe sandbox with customers and captured payments", long_about = None)]
struct Opts {
    /// Number of customer + payment iterations to run (default: 3)
    #[arg(value_name = "ITERATIONS", allow_negative_numbers = true)]
    iterations: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts: Opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    load_env_file(Path::new("."));
    init_tracing();

    let iterations = config::resolve_iterations(opts.iterations.as_deref());

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    if let Err(e) = run(config, iterations).await {
        report_error(&e);
        process::exit(1);
    }
}

/// Load environment variables from a .env file in `dir`
fn load_env_file(dir: &Path) {
    let env_file_path = dir.join(defaults::API_KEY_FILE);

    match dotenvy::from_path(&env_file_path) {
        Ok(_) => {
            eprintln!("✓ Loaded environment from {}", env_file_path.display());
        }
        Err(e) if e.not_found() => {}
        Err(e) => {
            eprintln!(
                "Warning: Failed to load .env file at {}: {}",
                env_file_path.display(),
                e
            );
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: SeedConfig, iterations: u32) -> Result<()> {
    if !config.client.is_test_mode() {
        warn!("STRIPE_API_KEY is not a test-mode key, seeded data will be created on a live account");
    }

    let gateway = StripeGateway::new(&config.client);
    let faker = match config.rng_seed {
        Some(seed) => RandomFaker::seeded(seed),
        None => RandomFaker::from_os_rng(),
    };
    let mut pipeline = Pipeline::new(gateway, faker, ConsoleSink);

    println!(
        "{} {}",
        style("Seeding").dim(),
        style(format!(
            "{} iteration{}",
            iterations,
            if iterations == 1 { "" } else { "s" }
        ))
        .green()
    );
    if let Some(api_base) = &config.client.api_base {
        println!("{} {}", style("API base").dim(), api_base);
    }

    let mut results = Vec::new();
    match pipeline
        .execute_into(i64::from(iterations), &mut results)
        .await
    {
        Ok(()) => {
            pipeline.report_summary(&results);
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{} Aborted after {} completed iteration{}",
                style("✗").red(),
                results.len(),
                if results.len() == 1 { "" } else { "s" }
            );
            Err(e)
        }
    }
}

fn report_error(error: &SeedError) {
    eprintln!("{} {}", style("Error:").red().bold(), error);
    if let Some(code) = error.code() {
        eprintln!("{} {}", style("Code:").dim(), code);
    }
}
