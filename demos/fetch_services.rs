//! Lists services through a mocked Mashery API: the first call authenticates with the password
//! grant, the second one reuses the cached token.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use mashery_client::{call::CallArgs, config::ClientOptions, flows::ReqwestApiClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let services_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v3/rest/services").header("authorization", "Bearer demo-access");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":\"svc-1\",\"name\":\"Echo\"},{\"id\":\"svc-2\",\"name\":\"Weather\"}]");
		})
		.await;
	let client = ReqwestApiClient::from_options(
		ClientOptions::new()
			.host(server.base_url())
			.username("demo-user")
			.password("demo-pass")
			.client_key("demo-key")
			.client_secret("demo-secret")
			.area_uuid("demo-area"),
	)?;

	for _ in 0..2 {
		let response = client
			.call("fetch_all_services", CallArgs::new().query_param("fields", "id,name"))
			.await?;
		let services: Vec<serde_json::Value> = response.json()?;

		println!("Fetched {} services with status {}.", services.len(), response.status);
	}

	token_mock.assert_calls_async(1).await;
	services_mock.assert_calls_async(2).await;

	Ok(())
}
