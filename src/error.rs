use thiserror::Error;

/// Loading a read endpoint failed. Logged and otherwise swallowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error while loading {endpoint}: {message}")]
    Network { endpoint: String, message: String },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

/// A POST or DELETE against the API failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("network error while sending to {endpoint}: {message}")]
    Network { endpoint: String, message: String },
    #[error("{endpoint} rejected the request with status {status}{}", detail_suffix(.detail))]
    Status {
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },
    #[error("could not encode request for {endpoint}: {message}")]
    Encode { endpoint: String, message: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {}", detail),
        None => String::new(),
    }
}

/// Client-side validation of a form draft. No request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter an amount.")]
    MissingAmount,
    #[error("\"{0}\" is not a valid amount.")]
    InvalidAmount(String),
    #[error("Amount must be a positive number.")]
    NonPositiveAmount,
    #[error("\"{0}\" is not a valid date.")]
    InvalidDate(String),
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please write something in the entry.")]
    MissingContent,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("goal amount must be positive, got {0}")]
    NonPositiveGoal(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_server_detail_when_present() {
        let with_detail = SubmissionError::Status {
            endpoint: "/api/income".to_string(),
            status: 422,
            detail: Some("amount: field required".to_string()),
        };
        assert_eq!(
            with_detail.to_string(),
            "/api/income rejected the request with status 422: amount: field required"
        );

        let bare = SubmissionError::Status {
            endpoint: "/api/journal".to_string(),
            status: 500,
            detail: None,
        };
        assert_eq!(
            bare.to_string(),
            "/api/journal rejected the request with status 500"
        );
    }
}
