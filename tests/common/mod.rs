#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime};
// self
use mashery_client::{
	auth::AccessToken,
	config::ClientOptions,
	flows::ReqwestApiClient,
	store::{MemoryStore, TokenStore},
};

pub const USERNAME: &str = "portal-user";
pub const PASSWORD: &str = "portal-pass";
pub const CLIENT_KEY: &str = "mashery-key";
pub const CLIENT_SECRET: &str = "mashery-secret";
pub const AREA_UUID: &str = "area-1234";
pub const TOKEN_PATH: &str = "/v3/token";
pub const TOKEN_FORM: &str =
	"grant_type=password&username=portal-user&password=portal-pass&scope=area-1234";
pub const BASIC_AUTH: &str = "Basic bWFzaGVyeS1rZXk6bWFzaGVyeS1zZWNyZXQ=";

pub fn options(host: impl Into<String>) -> ClientOptions {
	ClientOptions::new()
		.host(host)
		.username(USERNAME)
		.password(PASSWORD)
		.client_key(CLIENT_KEY)
		.client_secret(CLIENT_SECRET)
		.area_uuid(AREA_UUID)
}

pub fn client(server: &MockServer) -> ReqwestApiClient {
	ReqwestApiClient::from_options(options(server.base_url()))
		.expect("Complete options should build a client.")
}

pub fn client_with_token(server: &MockServer, token: AccessToken) -> ReqwestApiClient {
	let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::with_token(token));

	client(server).with_store(store)
}

pub fn token_issued(value: &str, age: Duration, ttl: Duration) -> AccessToken {
	AccessToken::new(value, OffsetDateTime::now_utc() - age, ttl)
}

pub fn token_json(value: &str, expires_in: i64) -> String {
	format!("{{\"access_token\":\"{value}\",\"token_type\":\"bearer\",\"expires_in\":{expires_in}}}")
}

pub async fn mock_token<'a>(server: &'a MockServer, value: &str) -> httpmock::Mock<'a> {
	let body = token_json(value, 3600);

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await
}

pub async fn mock_service<'a>(server: &'a MockServer, bearer: &str) -> httpmock::Mock<'a> {
	let authorization = format!("Bearer {bearer}");

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v3/rest/services/svc").header("authorization", authorization);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"svc\",\"name\":\"Echo\"}");
		})
		.await
}
