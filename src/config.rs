//! Client options, validation, and the derived endpoint URLs.
//!
//! [`ClientOptions`] is the loose, deserializable input (every field optional, the original
//! camel-case option names accepted as aliases). [`ClientOptions::validate`] turns it into an
//! immutable [`ClientConfig`], failing with [`ConfigError::MissingOptions`] that names every
//! absent or blank credential field at once.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	error::ConfigError,
};

/// Default Mashery API host.
pub const DEFAULT_HOST: &str = "https://api.mashery.com";
/// Default token endpoint path, relative to the host.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "/v3/token";
/// Default resource base path, relative to the host.
pub const DEFAULT_RESOURCE_ENDPOINT: &str = "/v3/rest";

/// Unvalidated initialization options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
	/// API host; defaults to [`DEFAULT_HOST`].
	pub host: Option<String>,
	/// Token endpoint path; defaults to [`DEFAULT_TOKEN_ENDPOINT`].
	#[serde(alias = "tokenEndpoint")]
	pub token_endpoint: Option<String>,
	/// Resource base path; defaults to [`DEFAULT_RESOURCE_ENDPOINT`].
	#[serde(alias = "resourceEndpoint")]
	pub resource_endpoint: Option<String>,
	/// Portal user name (required).
	#[serde(alias = "user")]
	pub username: Option<String>,
	/// Portal password (required).
	#[serde(alias = "pass")]
	pub password: Option<Secret>,
	/// API key (required).
	#[serde(alias = "key")]
	pub client_key: Option<String>,
	/// API key secret (required).
	#[serde(alias = "secret")]
	pub client_secret: Option<Secret>,
	/// Area UUID used as the OAuth scope (required).
	#[serde(alias = "areaUuid")]
	pub area_uuid: Option<String>,
}
impl ClientOptions {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the API host.
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());

		self
	}

	/// Overrides the token endpoint path.
	pub fn token_endpoint(mut self, path: impl Into<String>) -> Self {
		self.token_endpoint = Some(path.into());

		self
	}

	/// Overrides the resource base path.
	pub fn resource_endpoint(mut self, path: impl Into<String>) -> Self {
		self.resource_endpoint = Some(path.into());

		self
	}

	/// Sets the portal user name.
	pub fn username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());

		self
	}

	/// Sets the portal password.
	pub fn password(mut self, password: impl Into<Secret>) -> Self {
		self.password = Some(password.into());

		self
	}

	/// Sets the API key.
	pub fn client_key(mut self, key: impl Into<String>) -> Self {
		self.client_key = Some(key.into());

		self
	}

	/// Sets the API key secret.
	pub fn client_secret(mut self, secret: impl Into<Secret>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Sets the area UUID.
	pub fn area_uuid(mut self, area_uuid: impl Into<String>) -> Self {
		self.area_uuid = Some(area_uuid.into());

		self
	}

	/// Validates the options and derives the endpoint URLs.
	pub fn validate(self) -> Result<ClientConfig, ConfigError> {
		let mut missing = Vec::new();
		let username = required(self.username, "username", &mut missing, |v| v.trim().is_empty());
		let password = required(self.password, "password", &mut missing, Secret::is_blank);
		let client_key =
			required(self.client_key, "client_key", &mut missing, |v| v.trim().is_empty());
		let client_secret =
			required(self.client_secret, "client_secret", &mut missing, Secret::is_blank);
		let area_uuid = required(self.area_uuid, "area_uuid", &mut missing, |v| v.trim().is_empty());
		let credentials = match (username, password, client_key, client_secret, area_uuid) {
			(
				Some(username),
				Some(password),
				Some(client_key),
				Some(client_secret),
				Some(area_uuid),
			) => Credentials { username, password, client_key, client_secret, area_uuid },
			_ => return Err(ConfigError::MissingOptions { fields: missing }),
		};
		let host = self.host.unwrap_or_else(|| DEFAULT_HOST.into());
		let host = Url::parse(&host)
			.map_err(|source| ConfigError::InvalidUrl { option: "host", source })?;
		let token_endpoint = self.token_endpoint.unwrap_or_else(|| DEFAULT_TOKEN_ENDPOINT.into());
		let resource_endpoint =
			self.resource_endpoint.unwrap_or_else(|| DEFAULT_RESOURCE_ENDPOINT.into());
		let token_url = Url::parse(&join(&host, &token_endpoint))
			.map_err(|source| ConfigError::InvalidUrl { option: "token_endpoint", source })?;
		let resource_base = join(&host, &resource_endpoint);

		Url::parse(&resource_base)
			.map_err(|source| ConfigError::InvalidUrl { option: "resource_endpoint", source })?;

		Ok(ClientConfig { host, credentials, token_url, resource_base })
	}
}

/// Validated, immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	host: Url,
	credentials: Credentials,
	token_url: Url,
	resource_base: String,
}
impl ClientConfig {
	/// API host every URL is derived from.
	pub fn host(&self) -> &Url {
		&self.host
	}

	/// Credentials presented to the token endpoint.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Absolute token endpoint URL.
	pub fn token_url(&self) -> &Url {
		&self.token_url
	}

	/// Host plus resource base path, without a trailing slash.
	pub fn resource_base(&self) -> &str {
		&self.resource_base
	}

	/// Builds the absolute URL for a rendered resource path plus query parameters.
	pub fn resource_url(&self, path: &str, query: &[(String, String)]) -> Result<Url, ConfigError> {
		let mut url = Url::parse(&format!("{}{}", self.resource_base, leading_slash(path)))
			.map_err(|source| ConfigError::InvalidUrl { option: "resource_endpoint", source })?;

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
		}

		Ok(url)
	}
}

fn required<T>(
	value: Option<T>,
	name: &'static str,
	missing: &mut Vec<&'static str>,
	is_blank: impl FnOnce(&T) -> bool,
) -> Option<T> {
	match value {
		Some(value) if !is_blank(&value) => Some(value),
		_ => {
			missing.push(name);

			None
		},
	}
}

fn join(host: &Url, path: &str) -> String {
	format!("{}{}", host.as_str().trim_end_matches('/'), leading_slash(path))
}

fn leading_slash(path: &str) -> String {
	if path.is_empty() || path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}
