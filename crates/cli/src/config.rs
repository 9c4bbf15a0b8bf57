use std::env;

use stripe_seed_types::{ClientConfig, Result, SeedError, defaults};
use tracing::warn;
use url::Url;

/// Optional override for the Stripe API base URL
pub const API_BASE_VAR: &str = "STRIPE_API_BASE";
/// Optional seed making generated names, emails and amounts reproducible
pub const RNG_SEED_VAR: &str = "STRIPE_SEED_RNG_SEED";

/// Settings resolved from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub client: ClientConfig,
    pub rng_seed: Option<u64>,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup` instead of the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(defaults::API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SeedError::configuration(defaults::API_KEY_VAR, defaults::API_KEY_FILE))?;

        let mut client = ClientConfig::new(api_key);
        if let Some(api_base) = non_blank(lookup(API_BASE_VAR)) {
            let url = Url::parse(&api_base).map_err(|e| {
                SeedError::InvalidArgument(format!(
                    "{} is not a valid URL ({}): {}",
                    API_BASE_VAR, api_base, e
                ))
            })?;
            client = client.with_api_base(url.as_str());
        }

        let rng_seed = non_blank(lookup(RNG_SEED_VAR))
            .map(|seed| {
                seed.parse::<u64>().map_err(|_| {
                    SeedError::InvalidArgument(format!(
                        "{} must be an unsigned integer, got {}",
                        RNG_SEED_VAR, seed
                    ))
                })
            })
            .transpose()?;

        Ok(Self { client, rng_seed })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Number of iterations requested on the command line
///
/// Anything other than a positive integer falls back to the default.
pub fn resolve_iterations(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return defaults::ITERATIONS;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            warn!(
                "Ignoring iteration count {:?}, using default of {}",
                raw,
                defaults::ITERATIONS
            );
            defaults::ITERATIONS
        }
    }
}
