use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body the service attaches to rejected requests.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status; carries the server's
    /// diagnostic text.
    #[error("remote rejection (status {status}): {message}")]
    Remote {
        status: u16,
        error_code: Option<u32>,
        message: String,
    },
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// A success response that could not be deserialized.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn rejection(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ClientError::Remote {
                status,
                error_code: parsed.error_code,
                message: parsed.message,
            },
            // not every rejection carries a JSON body
            Err(_) => ClientError::Remote {
                status,
                error_code: None,
                message: body.trim().to_string(),
            },
        }
    }

    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, ClientError::Remote { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
