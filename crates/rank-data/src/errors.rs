//! Error types for the rank data crate.
//!
//! Every variant here describes an expected provider failure mode. By
//! contract they are all recoverable by falling through to the next
//! provider in the chain; [`RankDataError::is_unavailable`] makes that
//! classification explicit at the call site.

use thiserror::Error;

/// Errors that can occur while fetching or normalizing rank data.
#[derive(Error, Debug)]
pub enum RankDataError {
    /// The provider did not answer within its deadline.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP error from {provider}: {status}")]
    Http {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Parse error from {provider}: {message}")]
    Parse {
        /// The provider whose response failed to parse
        provider: String,
        /// What went wrong
        message: String,
    },

    /// A playlist segment carried a name missing from the translation
    /// table. The whole response is discarded.
    #[error("Unknown playlist name: {name}")]
    UnknownPlaylist {
        /// The untranslatable upstream name
        name: String,
    },

    /// A required field was absent from an otherwise well-formed response.
    #[error("Missing field in provider response: {field}")]
    MissingField {
        /// Dotted path of the missing field
        field: String,
    },

    /// A provider-specific failure with no more precise classification.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that failed
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while talking to a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RankDataError {
    /// True when the failure should make the resolver advance to the next
    /// provider. Every expected failure mode is classified this way; the
    /// method exists so the resolver's fall-through reads as a decision
    /// rather than a catch-all.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Timeout { .. }
            | Self::RateLimited { .. }
            | Self::Http { .. }
            | Self::Parse { .. }
            | Self::UnknownPlaylist { .. }
            | Self::MissingField { .. }
            | Self::Provider { .. }
            | Self::Network(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_unavailable() {
        let errors = [
            RankDataError::Timeout {
                provider: "TRACKER".to_string(),
            },
            RankDataError::RateLimited {
                provider: "TRACKER".to_string(),
            },
            RankDataError::Http {
                provider: "TRACKER".to_string(),
                status: 503,
            },
            RankDataError::Parse {
                provider: "TRACKER".to_string(),
                message: "unexpected token".to_string(),
            },
            RankDataError::UnknownPlaylist {
                name: "Ranked Cubes 4v4".to_string(),
            },
            RankDataError::MissingField {
                field: "data.segments".to_string(),
            },
            RankDataError::Provider {
                provider: "STORE".to_string(),
                message: "no cached ranks".to_string(),
            },
        ];
        for error in errors {
            assert!(error.is_unavailable(), "{error} should be unavailable");
        }
    }

    #[test]
    fn test_error_display() {
        let error = RankDataError::Http {
            provider: "TRACKER".to_string(),
            status: 500,
        };
        assert_eq!(format!("{}", error), "HTTP error from TRACKER: 500");

        let error = RankDataError::UnknownPlaylist {
            name: "Ranked Cubes 4v4".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Unknown playlist name: Ranked Cubes 4v4"
        );
    }
}
