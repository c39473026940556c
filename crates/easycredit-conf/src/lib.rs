//! Settings for the Easy Credit back office
//!
//! Settings are layered in priority order: environment variables > settings
//! file > defaults.
//!
//! ```toml
//! [api]
//! base_url = "https://api.easycredit.example"
//! timeout_secs = 30
//!
//! [table]
//! rows_per_page = 10
//! rows_per_page_options = [5, 10, 25]
//! ```
//!
//! Every key can be overridden with an `EASYCREDIT_` variable named after its
//! section and key, e.g. `EASYCREDIT_API_BASE_URL`.

pub mod env;
pub mod settings;

pub use env::{ENV_PREFIX, apply_env};
pub use settings::{AdminSettings, ApiSettings, SettingsError, SettingsResult, TableSettings};
