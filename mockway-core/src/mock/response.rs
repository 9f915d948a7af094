use crate::mock::MockResponseError;
use bytes::Bytes;
use http::{HeaderName, HeaderValue, StatusCode, header};

/// A locally fabricated reply.
///
/// Headers keep insertion order so they are written to the client exactly as
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl MockResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// A JSON reply. `Content-Type: application/json` is added up front.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status)
            .with_header(header::CONTENT_TYPE.as_str(), "application/json")
            .with_body(value.to_string())
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of a header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(header::CONTENT_TYPE.as_str())
    }

    /// True for `application/json` and any `+json` structured syntax suffix.
    pub fn declares_json(&self) -> bool {
        self.content_type().is_some_and(is_json_media_type)
    }

    /// Check the response is deliverable.
    ///
    /// Validation order:
    /// 1. Status range (final statuses only, 200-599)
    /// 2. Header names and values
    /// 3. Declared JSON bodies parse
    pub fn validate(&self) -> Result<ValidatedResponse, MockResponseError> {
        //---------------------------------------------------------------------
        // 1. Status range
        //---------------------------------------------------------------------
        if !(100..=599).contains(&self.status) {
            return Err(MockResponseError::StatusOutOfRange {
                status: self.status,
            });
        }
        if self.status < 200 {
            return Err(MockResponseError::InformationalStatus {
                status: self.status,
            });
        }
        let status = StatusCode::from_u16(self.status).map_err(|_| {
            MockResponseError::StatusOutOfRange {
                status: self.status,
            }
        })?;

        //---------------------------------------------------------------------
        // 2. Headers
        //---------------------------------------------------------------------
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                    MockResponseError::InvalidHeaderName { name: name.clone() }
                })?;
                let header_value = HeaderValue::from_str(value).map_err(|_| {
                    MockResponseError::InvalidHeaderValue { name: name.clone() }
                })?;
                Ok((header_name, header_value))
            })
            .collect::<Result<Vec<_>, MockResponseError>>()?;

        //---------------------------------------------------------------------
        // 3. Declared JSON
        //---------------------------------------------------------------------
        if let Some(content_type) = self.content_type().filter(|ct| is_json_media_type(ct)) {
            serde_json::from_slice::<serde_json::Value>(&self.body).map_err(|e| {
                MockResponseError::InvalidJsonBody {
                    content_type: content_type.to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(ValidatedResponse {
            status,
            headers,
            body: self.body.clone(),
        })
    }
}

/// A mock response that passed validation and can be written to a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Bytes,
}

impl ValidatedResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.contains('/') && essence.ends_with("+json"))
}
