use thiserror::Error;

/// A record that cannot be normalized. Distance and velocity drive the risk
/// score, so missing or non-numeric values fail the record instead of being
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("object {name:?} on {date} has no close approach data")]
    MissingApproach { name: String, date: String },

    #[error("object {name:?} on {date} is missing required field {field}")]
    MissingField {
        name: String,
        date: String,
        field: &'static str,
    },

    #[error("object {name:?} on {date}: field {field} is not numeric: {value:?}")]
    NonNumeric {
        name: String,
        date: String,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("feed API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
