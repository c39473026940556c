//! Back office list screens
//!
//! ```rust,no_run
//! use easycredit::admin::{ListPage, screens::Customers};
//!
//! let mut customers = ListPage::<Customers>::new();
//! customers.state_mut().set_query("ada");
//! ```

pub use easycredit_admin::*;
