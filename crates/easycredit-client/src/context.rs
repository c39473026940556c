//! Request context carrying the caller's credential

use std::fmt;

/// Credential attached to outgoing requests
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
	/// `Authorization: Bearer <token>`
	Bearer(String),
	/// A custom header carrying the raw token, e.g. `x-access-token`
	Header {
		/// Header name
		name: String,
		/// Header value
		value: String,
	},
}

impl Credential {
	/// Creates a bearer credential
	pub fn bearer(token: impl Into<String>) -> Self {
		Credential::Bearer(token.into())
	}

	/// Creates a custom header credential
	pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
		Credential::Header {
			name: name.into(),
			value: value.into(),
		}
	}
}

// Tokens must not end up in logs
impl fmt::Debug for Credential {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Credential::Bearer(_) => f.write_str("Bearer(***)"),
			Credential::Header { name, .. } => f
				.debug_struct("Header")
				.field("name", name)
				.field("value", &"***")
				.finish(),
		}
	}
}

/// Capability passed explicitly to every client call
///
/// # Examples
///
/// ```
/// use easycredit_client::{Credential, RequestContext};
///
/// let ctx = RequestContext::new(Credential::bearer("secret"));
/// assert!(ctx.is_authenticated());
/// assert!(!format!("{:?}", ctx).contains("secret"));
/// assert!(!RequestContext::anonymous().is_authenticated());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
	credential: Option<Credential>,
}

impl RequestContext {
	/// Creates a context carrying `credential`
	pub fn new(credential: Credential) -> Self {
		Self {
			credential: Some(credential),
		}
	}

	/// Creates a context without a credential (login, public endpoints)
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// The carried credential
	pub fn credential(&self) -> Option<&Credential> {
		self.credential.as_ref()
	}

	/// Returns true if a credential is carried
	pub fn is_authenticated(&self) -> bool {
		self.credential.is_some()
	}

	pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match &self.credential {
			Some(Credential::Bearer(token)) => request.bearer_auth(token),
			Some(Credential::Header { name, value }) => request.header(name.as_str(), value.as_str()),
			None => request,
		}
	}
}
