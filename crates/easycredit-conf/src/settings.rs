//! Settings types, loading and validation

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Error type for settings loading and validation
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}

impl SettingsError {
	pub(crate) fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
		SettingsError::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Backend API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
	/// Base URL every endpoint path is joined to
	pub base_url: String,
	/// Request timeout in seconds, 0 disables the timeout
	pub timeout_secs: u64,
	/// User-Agent header sent with every request
	pub user_agent: String,
}

impl ApiSettings {
	/// Request timeout, if enabled
	pub fn timeout(&self) -> Option<Duration> {
		(self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
	}
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8080/api".to_string(),
			timeout_secs: 30,
			user_agent: concat!("easycredit-admin/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

/// List screen defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Initial rows per page
	pub rows_per_page: usize,
	/// Page sizes offered to the user
	pub rows_per_page_options: Vec<usize>,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			rows_per_page: 10,
			rows_per_page_options: vec![5, 10, 25],
		}
	}
}

/// Back-office settings
///
/// # Examples
///
/// ```
/// use easycredit_conf::AdminSettings;
///
/// let settings = AdminSettings::from_toml_str(r#"
///     [api]
///     base_url = "https://api.easycredit.example"
/// "#).unwrap();
///
/// assert_eq!(settings.api.base_url, "https://api.easycredit.example");
/// assert_eq!(settings.table.rows_per_page, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
	/// Backend API
	pub api: ApiSettings,
	/// List screens
	pub table: TableSettings,
}

impl AdminSettings {
	/// Parses settings from TOML text; missing keys keep their defaults
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading settings file");
		Self::from_toml_str(&source)
	}

	/// Loads settings from an optional file, then the process environment
	///
	/// A missing file is not an error when `path` is `None`; an explicitly
	/// named file must exist. The result is validated.
	pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
		let mut settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		crate::env::apply_env(&mut settings, std::env::vars())?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks cross-field constraints
	///
	/// # Errors
	///
	/// - the base URL must be an absolute `http` or `https` URL
	/// - `rows_per_page` must be non-zero and one of `rows_per_page_options`
	pub fn validate(&self) -> SettingsResult<()> {
		let url = Url::parse(&self.api.base_url)
			.map_err(|e| SettingsError::invalid("api.base_url", e.to_string()))?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(SettingsError::invalid(
				"api.base_url",
				format!("unsupported scheme '{}'", url.scheme()),
			));
		}

		if self.table.rows_per_page == 0 {
			return Err(SettingsError::invalid(
				"table.rows_per_page",
				"must be greater than zero",
			));
		}
		if self.table.rows_per_page_options.contains(&0) {
			return Err(SettingsError::invalid(
				"table.rows_per_page_options",
				"page sizes must be greater than zero",
			));
		}
		if !self
			.table
			.rows_per_page_options
			.contains(&self.table.rows_per_page)
		{
			return Err(SettingsError::invalid(
				"table.rows_per_page",
				format!(
					"{} is not one of {:?}",
					self.table.rows_per_page, self.table.rows_per_page_options
				),
			));
		}
		Ok(())
	}
}
