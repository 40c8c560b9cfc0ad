use thiserror::Error;

/// Failures raised while turning an invocation event into a greeting.
///
/// Neither variant is turned into an HTTP error response; both are handed
/// back to the Lambda runtime, which reports a failed invocation.
#[derive(Debug, Error)]
pub enum GreetingError {
    #[error("Malformed request body: {reason}")]
    MalformedInput { reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}

impl From<serde_json::Error> for GreetingError {
    fn from(err: serde_json::Error) -> Self {
        GreetingError::MalformedInput {
            reason: err.to_string(),
        }
    }
}
