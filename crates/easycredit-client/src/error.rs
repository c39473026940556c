//! Client error types

use crate::envelope::EnvelopeShape;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	#[error("Reqwest error: {0}")]
	Reqwest(#[from] reqwest::Error),

	#[error("Request to {endpoint} failed with {status}: {body}")]
	Status {
		endpoint: String,
		status: StatusCode,
		body: String,
	},

	#[error("Unexpected envelope from {endpoint}: expected {expected}, found {found}")]
	Envelope {
		endpoint: String,
		expected: EnvelopeShape,
		found: String,
	},

	#[error("Row {index} from {endpoint} does not match the expected schema: {source}")]
	Schema {
		endpoint: String,
		index: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl ClientError {
	/// Returns true if the error is a timeout error
	pub fn is_timeout(&self) -> bool {
		match self {
			ClientError::Reqwest(e) => e.is_timeout(),
			_ => false,
		}
	}

	/// Returns true if the error is a connection error
	pub fn is_connect(&self) -> bool {
		match self {
			ClientError::Reqwest(e) => e.is_connect(),
			_ => false,
		}
	}

	/// Returns true if the backend rejected the credential
	pub fn is_unauthorized(&self) -> bool {
		matches!(
			self,
			ClientError::Status { status, .. }
				if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
		)
	}

	/// HTTP status of a rejected request
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			ClientError::Status { status, .. } => Some(*status),
			ClientError::Reqwest(e) => e.status(),
			_ => None,
		}
	}
}

pub type ClientResult<T> = Result<T, ClientError>;
