//! Environment variable overrides

use crate::settings::{AdminSettings, SettingsError, SettingsResult};

/// Prefix of every recognized environment variable
pub const ENV_PREFIX: &str = "EASYCREDIT_";

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> SettingsResult<T>
where
	T::Err: std::fmt::Display,
{
	value
		.trim()
		.parse()
		.map_err(|e: T::Err| SettingsError::invalid(key, e.to_string()))
}

/// Applies `EASYCREDIT_*` overrides from `vars` onto `settings`
///
/// Unknown `EASYCREDIT_` variables are ignored with a warning; variables
/// without the prefix are skipped silently. Values are trimmed before parsing.
///
/// | Variable | Setting |
/// |----------|---------|
/// | `EASYCREDIT_API_BASE_URL` | `api.base_url` |
/// | `EASYCREDIT_API_TIMEOUT_SECS` | `api.timeout_secs` |
/// | `EASYCREDIT_API_USER_AGENT` | `api.user_agent` |
/// | `EASYCREDIT_TABLE_ROWS_PER_PAGE` | `table.rows_per_page` |
/// | `EASYCREDIT_TABLE_ROWS_PER_PAGE_OPTIONS` | `table.rows_per_page_options` (comma-separated) |
///
/// # Examples
///
/// ```
/// use easycredit_conf::{AdminSettings, apply_env};
///
/// let mut settings = AdminSettings::default();
/// apply_env(&mut settings, [
///     ("EASYCREDIT_API_TIMEOUT_SECS".to_string(), "5".to_string()),
///     ("PATH".to_string(), "/usr/bin".to_string()),
/// ]).unwrap();
/// assert_eq!(settings.api.timeout_secs, 5);
/// ```
pub fn apply_env<I>(settings: &mut AdminSettings, vars: I) -> SettingsResult<()>
where
	I: IntoIterator<Item = (String, String)>,
{
	for (key, value) in vars {
		let Some(name) = key.strip_prefix(ENV_PREFIX) else {
			continue;
		};

		match name {
			"API_BASE_URL" => settings.api.base_url = value.trim().to_string(),
			"API_TIMEOUT_SECS" => settings.api.timeout_secs = parse(&key, &value)?,
			"API_USER_AGENT" => settings.api.user_agent = value.trim().to_string(),
			"TABLE_ROWS_PER_PAGE" => settings.table.rows_per_page = parse(&key, &value)?,
			"TABLE_ROWS_PER_PAGE_OPTIONS" => {
				settings.table.rows_per_page_options = value
					.split(',')
					.filter(|part| !part.trim().is_empty())
					.map(|part| parse(&key, part))
					.collect::<SettingsResult<Vec<usize>>>()?;
			}
			_ => {
				tracing::warn!(variable = %key, "ignoring unknown settings variable");
				continue;
			}
		}
		tracing::debug!(variable = %key, "settings overridden from environment");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_overrides() {
		let mut settings = AdminSettings::default();
		apply_env(
			&mut settings,
			vars(&[
				("EASYCREDIT_API_BASE_URL", " https://api.example "),
				("EASYCREDIT_TABLE_ROWS_PER_PAGE", "25"),
				("EASYCREDIT_TABLE_ROWS_PER_PAGE_OPTIONS", "10, 25,50"),
			]),
		)
		.unwrap();

		assert_eq!(settings.api.base_url, "https://api.example");
		assert_eq!(settings.table.rows_per_page, 25);
		assert_eq!(settings.table.rows_per_page_options, vec![10, 25, 50]);
	}

	#[test]
	fn test_invalid_number_names_variable() {
		let mut settings = AdminSettings::default();
		let err = apply_env(
			&mut settings,
			vars(&[("EASYCREDIT_API_TIMEOUT_SECS", "soon")]),
		)
		.unwrap_err();
		assert!(err.to_string().contains("EASYCREDIT_API_TIMEOUT_SECS"));
	}

	#[test]
	fn test_unknown_variables_are_ignored() {
		let mut settings = AdminSettings::default();
		apply_env(&mut settings, vars(&[("EASYCREDIT_THEME", "dark")])).unwrap();
		assert_eq!(settings, AdminSettings::default());
	}
}
