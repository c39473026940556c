//! # Easy Credit admin list screens
//!
//! Every back office list (customers, loans, bills, KYC submissions,
//! complaints, roles, staff, chat sessions, transfers) is a [`Screen`]: an
//! endpoint, a typed record, a column set and a filter configuration. A
//! [`ListPage`] ties a screen to its table state and drives fetch, view,
//! export and row actions.
//!
//! ```rust,no_run
//! use easycredit_admin::{ListPage, screens::Loans};
//! use easycredit_client::{ApiClient, Credential, RequestContext};
//! use easycredit_tables::ExportFormat;
//!
//! # async fn run() -> easycredit_admin::AdminResult<()> {
//! let client = ApiClient::builder().base_url("https://api.easycredit.example").build()?;
//! let ctx = RequestContext::new(Credential::bearer("token"));
//!
//! let mut loans = ListPage::<Loans>::new();
//! loans.refresh(&client, &ctx).await?;
//! loans.state_mut().set_query("ada");
//! let view = loans.view()?;
//! println!("{} matching loans", view.filtered_count);
//! let file = loans.export(ExportFormat::Csv)?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod error;
pub mod page;
pub mod screen;
pub mod screens;

pub use actions::bulk_mutation;
pub use error::{AdminError, AdminResult};
pub use page::ListPage;
pub use screen::Screen;
