//! HTTP client for the back office REST API

use crate::context::RequestContext;
use crate::envelope::{self, EnvelopeShape};
use crate::error::{ClientError, ClientResult};
use easycredit_conf::ApiSettings;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

/// HTTP method of a [`Mutation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
	Post,
	Patch,
	Put,
	Delete,
}

impl Method {
	fn as_reqwest(self) -> reqwest::Method {
		match self {
			Method::Post => reqwest::Method::POST,
			Method::Patch => reqwest::Method::PATCH,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.as_reqwest(), f)
	}
}

/// A write request against the API (approve, block, delete, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
	pub method: Method,
	pub path: String,
	pub body: Option<Value>,
}

impl Mutation {
	/// Creates a mutation without a body
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			body: None,
		}
	}

	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::Post, path)
	}

	pub fn patch(path: impl Into<String>) -> Self {
		Self::new(Method::Patch, path)
	}

	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::Put, path)
	}

	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::Delete, path)
	}

	/// Attaches a JSON body
	pub fn with_body(mut self, body: Value) -> Self {
		self.body = Some(body);
		self
	}

	/// Serializes `body` and attaches it
	pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> ClientResult<Self> {
		Ok(self.with_body(serde_json::to_value(body)?))
	}
}

/// Builder for creating [`ApiClient`] with custom configuration
///
/// # Example
///
/// ```rust
/// use easycredit_client::ApiClientBuilder;
/// use std::time::Duration;
///
/// let client = ApiClientBuilder::new()
///     .base_url("http://localhost:8080/api")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
	base_url: String,
	timeout: Option<Duration>,
	user_agent: Option<String>,
}

impl ApiClientBuilder {
	/// Create a new builder with default configuration
	pub fn new() -> Self {
		Self {
			base_url: "http://localhost:8080/api".to_string(),
			timeout: None,
			user_agent: None,
		}
	}

	/// Set the base URL for requests
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();
		self
	}

	/// Set the request timeout
	pub fn timeout(mut self, duration: Duration) -> Self {
		self.timeout = Some(duration);
		self
	}

	/// Set the `User-Agent` header
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	/// Build the ApiClient
	pub fn build(self) -> ClientResult<ApiClient> {
		// Trailing slash so relative joins keep the base path
		let mut base = self.base_url.trim_end_matches('/').to_string();
		base.push('/');
		let base_url = Url::parse(&base)?;

		let mut client_builder = reqwest::Client::builder();
		if let Some(timeout) = self.timeout {
			client_builder = client_builder.timeout(timeout);
		}
		if let Some(user_agent) = self.user_agent {
			client_builder = client_builder.user_agent(user_agent);
		}

		Ok(ApiClient {
			base_url,
			http_client: client_builder.build()?,
		})
	}
}

impl Default for ApiClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Client for the back office REST API
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
	base_url: Url,
	http_client: reqwest::Client,
}

impl ApiClient {
	/// Create a new builder
	pub fn builder() -> ApiClientBuilder {
		ApiClientBuilder::new()
	}

	/// Build a client from loaded settings
	pub fn from_settings(settings: &ApiSettings) -> ClientResult<Self> {
		let mut builder = ApiClientBuilder::new()
			.base_url(settings.base_url.as_str())
			.user_agent(settings.user_agent.as_str());
		if let Some(timeout) = settings.timeout() {
			builder = builder.timeout(timeout);
		}
		builder.build()
	}

	/// Base URL every path is resolved against
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn url(&self, path: &str) -> ClientResult<Url> {
		Ok(self.base_url.join(path.trim_start_matches('/'))?)
	}

	/// Fetch a row list from `path`, unwrapping the declared envelope
	///
	/// Every row is deserialized into `R`; the first row that does not fit
	/// fails the whole fetch with [`ClientError::Schema`].
	pub async fn list<R: DeserializeOwned>(
		&self,
		ctx: &RequestContext,
		path: &str,
		shape: EnvelopeShape,
	) -> ClientResult<Vec<R>> {
		let body = self.get_json(ctx, path).await?;
		let found = envelope::describe(&body);
		let rows = envelope::unwrap_envelope(body, shape).map_err(|_| {
			tracing::warn!(
				endpoint = path,
				expected = %shape,
				found = %found,
				"response envelope does not match the declared shape"
			);
			ClientError::Envelope {
				endpoint: path.to_string(),
				expected: shape,
				found,
			}
		})?;

		let rows = rows
			.into_iter()
			.enumerate()
			.map(|(index, row)| {
				serde_json::from_value(row).map_err(|source| ClientError::Schema {
					endpoint: path.to_string(),
					index,
					source,
				})
			})
			.collect::<ClientResult<Vec<R>>>()?;

		tracing::debug!(endpoint = path, rows = rows.len(), "fetched rows");
		Ok(rows)
	}

	/// Fetch `path` and return the decoded JSON body
	pub async fn get_json(&self, ctx: &RequestContext, path: &str) -> ClientResult<Value> {
		self.execute(ctx, reqwest::Method::GET, path, None).await
	}

	/// Send a mutation and return the decoded JSON body
	///
	/// An empty response body decodes to [`Value::Null`].
	pub async fn send(&self, ctx: &RequestContext, mutation: &Mutation) -> ClientResult<Value> {
		self.execute(
			ctx,
			mutation.method.as_reqwest(),
			&mutation.path,
			mutation.body.as_ref(),
		)
		.await
	}

	async fn execute(
		&self,
		ctx: &RequestContext,
		method: reqwest::Method,
		path: &str,
		body: Option<&Value>,
	) -> ClientResult<Value> {
		let url = self.url(path)?;
		tracing::debug!(%method, %url, "sending request");

		let mut request = ctx.apply(self.http_client.request(method, url));
		if let Some(body) = body {
			request = request.json(body);
		}

		let response = request.send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			tracing::warn!(endpoint = path, %status, "request rejected");
			return Err(ClientError::Status {
				endpoint: path.to_string(),
				status,
				body,
			});
		}

		let bytes = response.bytes().await?;
		if bytes.iter().all(u8::is_ascii_whitespace) {
			return Ok(Value::Null);
		}
		Ok(serde_json::from_slice(&bytes)?)
	}
}
