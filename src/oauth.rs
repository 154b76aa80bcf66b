//! Password-grant exchange built on the `oauth2` crate, plus transport error mapping.

pub use oauth2;

// crates.io
use oauth2::{
	ClientId, ClientSecret, EndpointNotSet, EndpointSet, HttpClientError, RequestTokenError,
	ResourceOwnerPassword, ResourceOwnerUsername, Scope, TokenResponse, TokenUrl,
	basic::{BasicClient, BasicErrorResponse, BasicRequestTokenError, BasicTokenResponse},
};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials},
	config::ClientConfig,
	error::{ConfigError, TransportError},
	http::{ApiHttpClient, ResponseMetadata, ResponseMetadataSlot},
	obs::CallKind,
};

type PasswordClient =
	BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Maps HTTP transport failures into client [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a client error.
	fn map_transport_error(
		&self,
		kind: CallKind,
		metadata: Option<&ResponseMetadata>,
		error: HttpClientError<E>,
	) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(
		&self,
		kind: CallKind,
		meta: Option<&ResponseMetadata>,
		err: HttpClientError<ReqwestError>,
	) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(meta, *inner),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::from(inner).into(),
			HttpClientError::Other(message) => TransportError::UnexpectedResponse {
				message: format!("HTTP client error while calling the {}: {message}", kind.target()),
				status: meta_status(meta),
			}
			.into(),
			_ => TransportError::UnexpectedResponse {
				message: format!("unclassified HTTP client error while calling the {}", kind.target()),
				status: meta_status(meta),
			}
			.into(),
		}
	}
}

/// Access token and lifetime extracted from a successful exchange.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct TokenGrant {
	pub(crate) access_token: String,
	pub(crate) expires_in: Duration,
	status: Option<u16>,
}
impl TokenGrant {
	fn new(access_token: String, expires_in: i64, status: Option<u16>) -> Result<Self> {
		if expires_in <= 0 {
			return Err(unexpected("expires_in must be positive", status));
		}

		Ok(Self { access_token, expires_in: Duration::seconds(expires_in), status })
	}

	/// Builds the token as received at `received_at`, rejecting lifetimes that overflow.
	pub(crate) fn into_token(self, received_at: OffsetDateTime) -> Result<AccessToken> {
		let status = self.status;
		let token = AccessToken::checked_new(self.access_token, received_at, self.expires_in)
			.ok_or_else(|| unexpected("expires_in exceeds the supported range", status))?;

		token.bearer_header()?;

		Ok(token)
	}

	fn from_response(response: &BasicTokenResponse, status: Option<u16>) -> Result<Self> {
		let expires_in = response
			.expires_in()
			.ok_or_else(|| unexpected("token response is missing expires_in", status))?
			.as_secs();
		let expires_in = i64::try_from(expires_in)
			.map_err(|_| unexpected("expires_in exceeds the supported range", status))?;

		Self::new(response.access_token().secret().to_owned(), expires_in, status)
	}
}
impl Debug for TokenGrant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenGrant")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// Lenient view of a token endpoint body.
///
/// Mashery can answer `200 OK` with an OAuth error object, and a success body without
/// `token_type` is still usable; the strict `oauth2` response type rejects both.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenPayload {
	access_token: Option<String>,
	expires_in: Option<i64>,
	error: Option<String>,
	error_description: Option<String>,
}
impl TokenPayload {
	fn into_grant(self, status: Option<u16>) -> Option<Result<TokenGrant>> {
		if let Some(error) = self.error {
			return Some(Err(Error::AuthRemote { error, description: self.error_description }));
		}

		match (self.access_token, self.expires_in) {
			(Some(access_token), Some(expires_in)) =>
				Some(TokenGrant::new(access_token, expires_in, status)),
			(Some(_), None) => Some(Err(unexpected("token response is missing expires_in", status))),
			_ => None,
		}
	}
}

/// Performs resource-owner password grants against the configured token endpoint.
pub(crate) struct PasswordGrant<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	oauth_client: PasswordClient,
	http_client: Arc<C>,
	error_mapper: Arc<M>,
}
impl<C, M> PasswordGrant<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	pub(crate) fn from_config(
		config: &ClientConfig,
		http_client: Arc<C>,
		error_mapper: Arc<M>,
	) -> Self {
		let credentials = config.credentials();
		let oauth_client = BasicClient::new(ClientId::new(credentials.client_key.clone()))
			.set_client_secret(ClientSecret::new(credentials.client_secret.expose().to_owned()))
			.set_token_uri(TokenUrl::from_url(config.token_url().clone()));

		Self { oauth_client, http_client, error_mapper }
	}

	/// Sends exactly one token request and interprets its response.
	///
	/// The key/secret pair travels as HTTP Basic client credentials; the form body carries
	/// `grant_type=password`, the user name, the password, and the area UUID as `scope`.
	pub(crate) async fn exchange(&self, credentials: &Credentials) -> Result<TokenGrant> {
		let meta = ResponseMetadataSlot::default();
		let instrumented = self.http_client.with_metadata(meta.clone());
		let username = ResourceOwnerUsername::new(credentials.username.clone());
		let password = ResourceOwnerPassword::new(credentials.password.expose().to_owned());
		let request = self
			.oauth_client
			.exchange_password(&username, &password)
			.add_scope(Scope::new(credentials.area_uuid.clone()));
		let result = request.request_async(&instrumented).await;
		let status = meta.take().and_then(|value| value.status);

		match result {
			Ok(response) => TokenGrant::from_response(&response, status),
			Err(err) => self.recover(status, err),
		}
	}

	fn recover(
		&self,
		status: Option<u16>,
		err: BasicRequestTokenError<HttpClientError<C::TransportError>>,
	) -> Result<TokenGrant> {
		match err {
			RequestTokenError::ServerResponse(response) => Err(map_server_response(response)),
			RequestTokenError::Request(error) => Err(self.error_mapper.map_transport_error(
				CallKind::Authenticate,
				Some(&ResponseMetadata { status }),
				error,
			)),
			RequestTokenError::Parse(source, body) => recover_from_body(&body, status)
				.unwrap_or_else(|| {
					Err(TransportError::MalformedResponse { source: Arc::new(source), status }.into())
				}),
			RequestTokenError::Other(message) => Err(unexpected(&message, status)),
		}
	}
}

/// Interprets a body the strict parser rejected; `None` when it is neither a token nor an error.
fn recover_from_body(body: &[u8], status: Option<u16>) -> Option<Result<TokenGrant>> {
	serde_json::from_slice::<TokenPayload>(body).ok()?.into_grant(status)
}

fn map_server_response(response: BasicErrorResponse) -> Error {
	Error::AuthRemote {
		error: response.error().as_ref().to_owned(),
		description: response.error_description().cloned(),
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(meta: Option<&ResponseMetadata>, err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransportError::Timeout {
			status: meta_status(meta).or_else(|| err.status().map(|code| code.as_u16())),
		}
		.into();
	}

	TransportError::from(err).into()
}

fn unexpected(message: &str, status: Option<u16>) -> Error {
	TransportError::UnexpectedResponse { message: message.to_owned(), status }.into()
}

#[cfg(feature = "reqwest")]
fn meta_status(meta: Option<&ResponseMetadata>) -> Option<u16> {
	meta.and_then(|value| value.status)
}
