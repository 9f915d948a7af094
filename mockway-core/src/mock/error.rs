use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MockResponseError {
    #[error("status code {status} is outside 100-599")]
    StatusOutOfRange { status: u16 },

    /// 1xx are interim responses; the transport never treats them as the final reply.
    #[error("status code {status} is informational and cannot be the final response")]
    InformationalStatus { status: u16 },

    #[error("invalid header name '{name}'")]
    InvalidHeaderName { name: String },

    #[error("invalid value for header '{name}'")]
    InvalidHeaderValue { name: String },

    #[error("body declared as '{content_type}' is not valid JSON: {reason}")]
    InvalidJsonBody {
        content_type: String,
        reason: String,
    },
}

impl MockResponseError {
    /// Short stable label, independent of the offending value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StatusOutOfRange { .. } => "status_out_of_range",
            Self::InformationalStatus { .. } => "informational_status",
            Self::InvalidHeaderName { .. } => "invalid_header_name",
            Self::InvalidHeaderValue { .. } => "invalid_header_value",
            Self::InvalidJsonBody { .. } => "invalid_json_body",
        }
    }
}
