use easycredit_client::ClientError;
use easycredit_tables::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
	#[error(transparent)]
	Client(#[from] ClientError),

	#[error(transparent)]
	Table(#[from] TableError),

	#[error("Path template '{0}' has no {{id}} placeholder")]
	MissingIdPlaceholder(String),

	#[error("No rows selected")]
	EmptySelection,
}

pub type AdminResult<T> = Result<T, AdminError>;
