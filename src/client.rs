//! REST client for the back office API

pub use easycredit_client::*;
