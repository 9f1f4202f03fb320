use thiserror::Error;

use crate::provider::Endpoint;

/// Errors produced while fetching or formatting weather data.
///
/// Nothing in the crate recovers from these; they travel unchanged to the caller.
#[derive(Debug, Error)]
pub enum ClimaError {
    /// The request never produced a response (DNS, TLS, connection, timeout).
    #[error("Failed to send request to OpenWeather ({endpoint}): {source}")]
    Fetch {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("OpenWeather {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        body: String,
    },

    /// The body could not be read or is not valid JSON.
    #[error("Failed to parse OpenWeather {endpoint} JSON: {message}")]
    Parse { endpoint: Endpoint, message: String },

    /// The JSON parsed but does not have the expected shape.
    #[error("Malformed weather response: {0}")]
    MalformedResponse(String),

    /// A format pattern or locale tag was rejected.
    #[error("Format error: {0}")]
    Format(String),

    /// The timestamp (after applying the offset) is not a representable instant.
    #[error("Invalid timestamp {secs} with offset {offset}s")]
    InvalidTimestamp { secs: i64, offset: i64 },

    #[error("Weather request was cancelled")]
    Cancelled,
}

pub type Result<T, E = ClimaError> = std::result::Result<T, E>;
