mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
use time::Duration;
// self
use common::*;
use mashery_client::{
	call::CallArgs,
	error::Error,
	http::{HeaderName, HeaderValue, StatusCode, header},
	registry::{EndpointRegistry, HttpMethod, TemplateError},
};

fn service_args() -> CallArgs {
	CallArgs::new().path_param("id", "svc")
}

#[tokio::test]
async fn first_call_authenticates_once() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "lazy-token").await;
	let service = mock_service(&server, "lazy-token").await;
	let client = client(&server);

	assert!(client.access_token().is_none());

	let response =
		client.call("fetch_service", service_args()).await.expect("Call should succeed.");
	let body: serde_json::Value = response.json().expect("Body is JSON.");

	assert!(response.is_success());
	assert_eq!(body["name"], "Echo");

	client.call("fetch_service", service_args()).await.expect("Second call should succeed.");

	token.assert_calls_async(1).await;
	service.assert_calls_async(2).await;

	assert_eq!(client.access_token().as_deref(), Some("lazy-token"));
}

#[tokio::test]
async fn valid_cached_token_skips_authentication() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "unused").await;
	let service = mock_service(&server, "cached").await;
	let client =
		client_with_token(&server, token_issued("cached", Duration::ZERO, Duration::hours(1)));

	client.call("fetch_service", service_args()).await.expect("Call should succeed.");

	token.assert_calls_async(0).await;
	service.assert_calls_async(1).await;
}

#[tokio::test]
async fn expired_token_is_replaced_before_dispatch() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "renewed").await;
	let service = mock_service(&server, "renewed").await;
	let client = client_with_token(
		&server,
		token_issued("expired", Duration::hours(2), Duration::hours(1)),
	);

	client.call("fetch_service", service_args()).await.expect("Call should succeed.");

	token.assert_calls_async(1).await;
	service.assert_calls_async(1).await;

	assert_eq!(client.access_token().as_deref(), Some("renewed"));
}

#[tokio::test]
async fn simultaneous_calls_share_one_authentication() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "shared").await;
	let service = mock_service(&server, "shared").await;
	let client = client(&server);
	let results = tokio::join!(
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
	);

	for result in [results.0, results.1, results.2, results.3, results.4] {
		assert_eq!(result.expect("Every call should succeed.").status, StatusCode::OK);
	}

	token.assert_calls_async(1).await;
	service.assert_calls_async(5).await;
}

#[tokio::test]
async fn failed_authentication_is_broadcast_without_dispatch() {
	let server = MockServer::start_async().await;
	let token = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\"}");
		})
		.await;
	let service = mock_service(&server, "never").await;
	let client = client(&server);
	let (a, b, c) = tokio::join!(
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
		client.call("fetch_service", service_args()),
	);

	for result in [a, b, c] {
		let err = result.expect_err("Authentication failures must surface.");

		assert_eq!(err.remote_error_code(), Some("invalid_grant"));
	}

	token.assert_calls_async(1).await;
	service.assert_calls_async(0).await;

	assert_eq!(client.auth_metrics.attempts(), 1);
	assert_eq!(client.auth_metrics.coalesced(), 2);
	assert!(client.access_token().is_none());
}

#[tokio::test]
async fn caller_auth_headers_are_overridden() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, "interceptor").await;
	let service = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v3/rest/services/svc")
				.header("authorization", "Bearer interceptor")
				.header("content-type", "application/json")
				.header("x-request-id", "abc");
			then.status(200).body("{}");
		})
		.await;
	let client = client(&server);
	let args = service_args()
		.header(header::AUTHORIZATION, HeaderValue::from_static("Bearer caller"))
		.header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))
		.header(HeaderName::from_static("x-request-id"), HeaderValue::from_static("abc"));

	client.call("fetch_service", args).await.expect("Call should succeed.");

	service.assert_async().await;
}

#[tokio::test]
async fn missing_path_parameter_fails_before_network() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "unused").await;
	let client = client(&server);
	let err = client
		.call("fetch_service_endpoint", CallArgs::new().path_param("id", "ep"))
		.await
		.expect_err("serviceId is missing.");

	assert!(matches!(
		err,
		Error::Template(TemplateError::MissingParameter { ref name, .. }) if name == "serviceId"
	));

	token.assert_calls_async(0).await;
}

#[tokio::test]
async fn unknown_operations_are_rejected() {
	let server = MockServer::start_async().await;
	let err = client(&server)
		.call("fetch_everything", CallArgs::new())
		.await
		.expect_err("Operation does not exist.");

	assert!(matches!(err, Error::UnknownOperation { ref name } if name == "fetch_everything"));
}

#[tokio::test]
async fn query_parameters_and_json_bodies_are_forwarded() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, "writer").await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v3/rest/services")
				.query_param("fields", "id,name")
				.json_body(json!({ "name": "Echo" }));
			then.status(201).body("{\"id\":\"new-svc\"}");
		})
		.await;
	let client = client(&server);
	let args = CallArgs::new()
		.query_param("fields", "id,name")
		.json(&json!({ "name": "Echo" }))
		.expect("JSON values always encode.");
	let response = client.call("create_service", args).await.expect("Call should succeed.");

	assert_eq!(response.status, StatusCode::CREATED);

	create.assert_async().await;
}

#[tokio::test]
async fn error_statuses_are_returned_without_reauthentication() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server, "rejected").await;
	let service = server
		.mock_async(|when, then| {
			when.method(GET).path("/v3/rest/services/svc");
			then.status(401)
				.header("x-mashery-error-code", "ERR_401_INVALID_TOKEN")
				.body("{\"errorCode\":401}");
		})
		.await;
	let client = client(&server);
	let response = client.call("fetch_service", service_args()).await.expect("401 is a response.");

	assert_eq!(response.status, StatusCode::UNAUTHORIZED);
	assert_eq!(response.mashery_error_code(), Some("ERR_401_INVALID_TOKEN"));

	token.assert_calls_async(1).await;
	service.assert_calls_async(1).await;
}

#[tokio::test]
async fn custom_registries_drive_dispatch() {
	let server = MockServer::start_async().await;
	let _token = mock_token(&server, "custom").await;
	let purge = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v3/rest/members/alice");
			then.status(204);
		})
		.await;
	let mut registry = EndpointRegistry::new();

	registry
		.register("delete_member", "/members/${username}", HttpMethod::Delete)
		.expect("Template should parse.");

	let client = client(&server).with_registry(registry);
	let operation =
		client.registry().get("delete_member").cloned().expect("Operation was registered.");
	let response = client
		.invoke(&operation, CallArgs::new().path_param("username", "alice"))
		.await
		.expect("Call should succeed.");

	assert_eq!(response.status, StatusCode::NO_CONTENT);
	assert!(client.registry().get("fetch_service").is_none());

	purge.assert_async().await;
}
