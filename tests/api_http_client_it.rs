mod common;

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
// self
use common::*;
use mashery_client::{
	call::CallArgs,
	error::{Error, TransportError},
	flows::ApiClient,
	http::{
		ApiHttpClient, HttpRequest, HttpResponse, ResponseMetadata, ResponseMetadataSlot,
		StatusCode, header,
	},
	oauth::{
		TransportErrorMapper,
		oauth2::{AsyncHttpClient, HttpClientError},
	},
	obs::CallKind,
	registry::TemplateError,
};

#[derive(Debug)]
enum FakeTransportError {
	Refused,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Refused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for FakeTransportError {}

/// Answers token requests with a fixed token and resource requests with an empty object.
#[derive(Clone, Default)]
struct FakeHttpClient {
	requests: Arc<Mutex<Vec<HttpRequest>>>,
	refuse_resources: bool,
}
impl FakeHttpClient {
	fn recorded(&self) -> Vec<(String, String, Option<String>)> {
		self.requests
			.lock()
			.iter()
			.map(|request| {
				(
					request.method().to_string(),
					request.uri().to_string(),
					request
						.headers()
						.get(header::AUTHORIZATION)
						.and_then(|value| value.to_str().ok())
						.map(str::to_owned),
				)
			})
			.collect()
	}
}
impl ApiHttpClient for FakeHttpClient {
	type Handle = FakeHttpHandle;
	type TransportError = FakeTransportError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		FakeHttpHandle { slot, client: self.clone() }
	}
}

struct FakeHttpHandle {
	slot: ResponseMetadataSlot,
	client: FakeHttpClient,
}
impl<'a> AsyncHttpClient<'a> for FakeHttpHandle {
	type Error = HttpClientError<FakeTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, request: HttpRequest) -> Self::Future {
		let slot = self.slot.clone();
		let client = self.client.clone();

		Box::pin(async move {
			assert!(slot.take().is_none(), "Metadata must be clear before dispatching a request.");

			let is_token = request.uri().path() == TOKEN_PATH;

			client.requests.lock().push(request);

			if !is_token && client.refuse_resources {
				slot.store(ResponseMetadata { status: Some(503) });

				return Err(HttpClientError::Reqwest(Box::new(FakeTransportError::Refused)));
			}

			let body = if is_token { token_json("fake-token", 600) } else { "{}".to_owned() };
			let mut response = HttpResponse::new(body.into_bytes());

			*response.status_mut() = StatusCode::OK;
			response.headers_mut().insert(
				header::CONTENT_TYPE,
				header::HeaderValue::from_static("application/json"),
			);
			slot.store(ResponseMetadata { status: Some(200) });

			Ok(response)
		})
	}
}

#[derive(Clone, Default)]
struct RecordingTransportErrorMapper {
	seen: Arc<Mutex<Vec<(CallKind, Option<u16>)>>>,
}
impl TransportErrorMapper<FakeTransportError> for RecordingTransportErrorMapper {
	fn map_transport_error(
		&self,
		kind: CallKind,
		metadata: Option<&ResponseMetadata>,
		error: HttpClientError<FakeTransportError>,
	) -> Error {
		self.seen.lock().push((kind, metadata.and_then(|meta| meta.status)));

		match error {
			HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
			other => TransportError::UnexpectedResponse { message: other.to_string(), status: None }
				.into(),
		}
	}
}

fn fake_client(
	http: FakeHttpClient,
	mapper: RecordingTransportErrorMapper,
) -> ApiClient<FakeHttpClient, RecordingTransportErrorMapper> {
	let config = options("https://api.example.com").validate().expect("Options should validate.");

	ApiClient::with_http_client(config, http, mapper).expect("Client should build.")
}

#[tokio::test]
async fn custom_transport_serves_token_and_resource_calls() {
	let http = FakeHttpClient::default();
	let client = fake_client(http.clone(), RecordingTransportErrorMapper::default());

	client
		.call("fetch_service", CallArgs::new().path_param("id", "svc"))
		.await
		.expect("Call should succeed.");

	assert_eq!(http.recorded(), [
		("POST".to_owned(), "https://api.example.com/v3/token".to_owned(), Some(BASIC_AUTH.to_owned())),
		(
			"GET".to_owned(),
			"https://api.example.com/v3/rest/services/svc".to_owned(),
			Some("Bearer fake-token".to_owned())
		),
	]);

	let token_request = http.requests.lock().first().map(|request| request.body().clone());

	assert_eq!(token_request.as_deref(), Some(TOKEN_FORM.as_bytes()));
}

#[tokio::test]
async fn resource_transport_failures_reach_the_mapper() {
	let http = FakeHttpClient { refuse_resources: true, ..Default::default() };
	let mapper = RecordingTransportErrorMapper::default();
	let client = fake_client(http, mapper.clone());
	let err = client
		.call("fetch_service", CallArgs::new().path_param("id", "svc"))
		.await
		.expect_err("Resource transport refuses connections.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(mapper.seen.lock().as_slice(), [(CallKind::Resource, Some(503))]);
	assert_eq!(client.access_token().as_deref(), Some("fake-token"));
}

#[tokio::test]
async fn path_values_stay_inside_their_segment() {
	let http = FakeHttpClient::default();
	let client = fake_client(http.clone(), RecordingTransportErrorMapper::default());

	for id in ["a#b", "a/b"] {
		client
			.call("fetch_service", CallArgs::new().path_param("id", id))
			.await
			.expect("Call should succeed.");
	}

	let err = client
		.call("fetch_service", CallArgs::new().path_param("id", ".."))
		.await
		.expect_err("Dot segments would leave the collection.");

	assert!(matches!(
		err,
		Error::Template(TemplateError::InvalidParameter { ref name, .. }) if name == "id"
	));
	assert_eq!(
		http.recorded().into_iter().skip(1).map(|(_, uri, _)| uri).collect::<Vec<_>>(),
		[
			"https://api.example.com/v3/rest/services/a%23b",
			"https://api.example.com/v3/rest/services/a%2Fb",
		]
	);
}
