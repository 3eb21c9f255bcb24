#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("Failed to fetch {resource}: upstream responded with status {status}")]
    Upstream { resource: String, status: u16 },
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to read csv data: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Errors caused by the caller's input rather than by configuration or an upstream provider
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Message suitable for showing to an end user in the UI
    ///
    /// Validation and configuration problems are shown verbatim, upstream
    /// and unexpected failures collapse into generic text.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) | Error::Configuration(msg) => msg.clone(),
            Error::Upstream { .. } => {
                "Failed to fetch weather data. Please check your input and try again.".to_owned()
            }
            Error::Request(_) | Error::Decode(_) | Error::Csv(_) => {
                "An unexpected error occurred. Please try again later.".to_owned()
            }
        }
    }
}
