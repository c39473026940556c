//! REST client for the Easy Credit back office
//!
//! The list screens get their rows from this client. Two rules shape it:
//!
//! - The credential is never read from ambient storage. Callers build a
//!   [`RequestContext`] once (after login) and pass it to every call.
//! - Each endpoint declares the [`EnvelopeShape`] its payload arrives in. The
//!   client unwraps exactly that shape and reports a mismatch instead of
//!   guessing, because the backend is not consistent across endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use easycredit_client::{ApiClient, Credential, EnvelopeShape, RequestContext};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Loan {
//!     _id: String,
//!     amount: f64,
//! }
//!
//! # async fn run() -> easycredit_client::ClientResult<()> {
//! let client = ApiClient::builder()
//!     .base_url("https://api.easycredit.example")
//!     .build()?;
//! let ctx = RequestContext::new(Credential::bearer("token"));
//! let loans: Vec<Loan> = client.list(&ctx, "/loans", EnvelopeShape::NestedData).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Requests are plain request/response: no retry, no cancellation and no
//! deduplication of concurrent fetches.

pub mod client;
pub mod context;
pub mod envelope;
pub mod error;

pub use client::{ApiClient, ApiClientBuilder, Method, Mutation};
pub use context::{Credential, RequestContext};
pub use envelope::{EnvelopeShape, unwrap_envelope};
pub use error::{ClientError, ClientResult};
