//! Call interception: render, authorize, and dispatch one registered operation.

// crates.io
use oauth2::AsyncHttpClient;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	call::{ApiResponse, CallArgs},
	error::ConfigError,
	flows::ApiClient,
	http::{ApiHttpClient, HeaderMap, HeaderValue, HttpRequest, ResponseMetadataSlot, header},
	oauth::TransportErrorMapper,
	obs::{self, CallKind, CallOutcome, CallPhase, CallSpan},
	registry::{HttpMethod, OperationDescriptor},
};

impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Looks up `name` in the registry and [`invoke`](ApiClient::invoke)s it.
	pub async fn call(&self, name: &str, args: CallArgs) -> Result<ApiResponse> {
		let operation = self
			.registry
			.get(name)
			.ok_or_else(|| Error::UnknownOperation { name: name.to_owned() })?;

		self.invoke(operation, args).await
	}

	/// Performs `operation`, authenticating first when no valid token is cached.
	///
	/// The path template is rendered before anything else, so a missing parameter fails without
	/// network traffic. When authentication fails the request is never sent. Any response the
	/// resource API returns, including 4xx and 5xx statuses, is handed back as an
	/// [`ApiResponse`].
	pub async fn invoke(
		&self,
		operation: &OperationDescriptor,
		args: CallArgs,
	) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Resource;

		let name = operation.name.as_ref();
		let span = CallSpan::new(KIND, name);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let CallArgs { path, query, body, mut headers } = args;
				let rendered = operation.template.render(&path)?;
				let url = self.config.resource_url(&rendered, &query)?;

				obs::record_phase(name, CallPhase::PendingAuthCheck);

				let token = match self.cached_token() {
					Some(token) => {
						obs::record_phase(name, CallPhase::TokenValid);

						token
					},
					None => {
						obs::record_phase(name, CallPhase::Authenticating);

						self.refresh_expired().await.inspect_err(|_| {
							obs::record_phase(name, CallPhase::AuthFailed);
						})?
					},
				};

				merge_auth_headers(&mut headers, &token)?;

				let request = build_request(operation.method, &url, headers, body)?;

				obs::record_phase(name, CallPhase::Dispatched);

				self.dispatch(request).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn dispatch(&self, request: HttpRequest) -> Result<ApiResponse> {
		let meta = ResponseMetadataSlot::default();
		let handle = self.http_client.with_metadata(meta.clone());

		match handle.call(request).await {
			Ok(response) => Ok(ApiResponse::from(response)),
			Err(err) => Err(self.transport_mapper.map_transport_error(
				CallKind::Resource,
				meta.take().as_ref(),
				err,
			)),
		}
	}
}

/// Sets `Authorization` and `Content-Type`, dropping any values the caller supplied.
fn merge_auth_headers(headers: &mut HeaderMap, token: &AccessToken) -> Result<()> {
	headers.insert(header::AUTHORIZATION, token.bearer_header()?);
	headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

	Ok(())
}

fn build_request(
	method: HttpMethod,
	url: &Url,
	headers: HeaderMap,
	body: Option<Vec<u8>>,
) -> Result<HttpRequest> {
	let mut request = oauth2::http::Request::builder()
		.method(method.to_http())
		.uri(url.as_str())
		.body(body.unwrap_or_default())
		.map_err(ConfigError::from)?;

	*request.headers_mut() = headers;

	Ok(request)
}
