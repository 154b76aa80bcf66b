//! Per-invocation arguments and the raw response handed back to callers.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::TransportError,
	http::{HeaderMap, HeaderName, HeaderValue, HttpResponse, StatusCode},
};

/// Header Mashery uses to classify gateway-level failures.
pub const MASHERY_ERROR_CODE: &str = "x-mashery-error-code";

/// Arguments for one intercepted call.
///
/// `Authorization` and `Content-Type` entries in [`CallArgs::headers`] are always replaced by
/// the client before dispatch.
#[derive(Clone, Debug, Default)]
pub struct CallArgs {
	/// Values substituted into the operation's `${name}` placeholders.
	pub path: BTreeMap<String, String>,
	/// Query string pairs, appended in order.
	pub query: Vec<(String, String)>,
	/// Encoded JSON body, if any.
	pub body: Option<Vec<u8>>,
	/// Extra request headers.
	pub headers: HeaderMap,
}
impl CallArgs {
	/// Creates empty arguments.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a path placeholder value.
	pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.path.insert(name.into(), value.into());

		self
	}

	/// Appends a query string pair.
	pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((name.into(), value.into()));

		self
	}

	/// Serializes `body` as the JSON request body.
	pub fn json<T>(mut self, body: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		let encoded =
			serde_json::to_vec(body).map_err(|e| Error::InvalidBody { source: Arc::new(e) })?;

		self.body = Some(encoded);

		Ok(self)
	}

	/// Uses pre-encoded bytes as the request body.
	pub fn raw_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Adds a request header, replacing any previous value under the same name.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}
}

/// Response returned by the resource API, whatever its status.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Decodes the body as JSON.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		serde_json::from_slice(&self.body).map_err(|e| {
			TransportError::MalformedBody { source: Arc::new(e), status: self.status.as_u16() }
				.into()
		})
	}

	/// Body as UTF-8 text, replacing invalid sequences.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Value of the `X-Mashery-Error-Code` header, if present.
	pub fn mashery_error_code(&self) -> Option<&str> {
		self.headers.get(MASHERY_ERROR_CODE).and_then(|value| value.to_str().ok())
	}
}
impl From<HttpResponse> for ApiResponse {
	fn from(response: HttpResponse) -> Self {
		let (parts, body) = response.into_parts();

		Self { status: parts.status, headers: parts.headers, body }
	}
}
