use thiserror::Error;

/// Everything that can terminate a single lookup.
///
/// Every variant degrades to a rendered message; there is no fatal path and
/// nothing here is retried.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Empty or whitespace-only input, rejected before any network call.
    #[error("Please enter a city name.")]
    EmptyLocation,

    /// The configured credential is absent or still the shipped placeholder.
    #[error(
        "No real OpenWeatherMap API key is configured. \
         Run `weather-lookup configure` and enter your actual API key."
    )]
    MissingCredential,

    /// Non-success HTTP status. `message` is the provider's `message` field,
    /// or a generic `HTTP error, status <code>` when the body had none.
    #[error("Failed to fetch weather data: {message}")]
    Provider { status: u16, message: String },

    /// Network-level failure below the HTTP layer.
    #[error("Failed to fetch weather data: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_shows_provider_message() {
        let err = LookupError::Provider { status: 404, message: "city not found".to_string() };
        assert!(err.to_string().contains("city not found"));
    }

    #[test]
    fn transport_error_shows_underlying_message() {
        let err = LookupError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
