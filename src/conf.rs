//! Settings loading
//!
//! # Examples
//!
//! ```rust,no_run
//! use easycredit::conf::AdminSettings;
//!
//! let settings = AdminSettings::load(None).unwrap();
//! println!("{}", settings.api.base_url);
//! ```

pub use easycredit_conf::*;
