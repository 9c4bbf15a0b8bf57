use thiserror::Error;

/// Errors that can abort a seeding run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A required setting is missing or blank
    #[error("{variable} is not set. Add it to {file} or export it in your shell")]
    Configuration { variable: String, file: String },

    /// A caller passed a value the pipeline cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The payment provider rejected a request or could not be reached
    #[error("Payment provider error: {message}")]
    RemoteService { code: String, message: String },

    /// Anything else
    #[error("{0}")]
    Other(String),
}

impl SeedError {
    pub fn configuration(variable: impl Into<String>, file: impl Into<String>) -> Self {
        SeedError::Configuration {
            variable: variable.into(),
            file: file.into(),
        }
    }

    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        SeedError::RemoteService {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Machine-readable provider code, only set for remote failures
    pub fn code(&self) -> Option<&str> {
        match self {
            SeedError::RemoteService { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for seeding operations
pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_variable_and_file() {
        let err = SeedError::configuration("STRIPE_API_KEY", ".env");
        assert_eq!(
            err.to_string(),
            "STRIPE_API_KEY is not set. Add it to .env or export it in your shell"
        );
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_remote_error_exposes_code() {
        let err = SeedError::remote("card_declined", "Your card was declined.");
        assert_eq!(err.code(), Some("card_declined"));
        assert_eq!(
            err.to_string(),
            "Payment provider error: Your card was declined."
        );
    }
}
