//! The Mashery API client: token lifecycle plus intercepted resource calls.

pub mod authenticate;

mod intercept;
mod singleflight;

pub use authenticate::*;

// self
use crate::{
	_prelude::*,
	config::{ClientConfig, ClientOptions},
	flows::singleflight::AuthGate,
	http::ApiHttpClient,
	oauth::{PasswordGrant, TransportErrorMapper},
	registry::EndpointRegistry,
	store::{MemoryStore, TokenStore},
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestApiClient = ApiClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Calls Mashery V3 operations, authenticating lazily with the password grant.
///
/// The client owns the HTTP transport, token store, validated configuration, and operation
/// registry. Clones share all of them, including the gate that coalesces concurrent
/// authentications, so a cloned client never triggers a second exchange for the same expired
/// token.
///
/// Coalescing is scoped to one client and its clones. Independently built clients that share a
/// store through [`with_store`](ApiClient::with_store) reuse each other's stored tokens, but each
/// may run its own exchange when they miss the store at the same moment; clone one client
/// instead when concurrent callers must share a single exchange.
pub struct ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Shared counters for password-grant exchanges.
	pub auth_metrics: Arc<AuthMetrics>,
	store: Arc<dyn TokenStore>,
	config: Arc<ClientConfig>,
	registry: Arc<EndpointRegistry>,
	password_grant: Arc<PasswordGrant<C, M>>,
	gate: Arc<AuthGate>,
}
impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	///
	/// The client starts with an empty [`MemoryStore`] and the built-in operation catalog.
	pub fn with_http_client(
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let http_client = http_client.into();
		let transport_mapper = mapper.into();
		let password_grant = PasswordGrant::from_config(
			&config,
			http_client.clone(),
			transport_mapper.clone(),
		);

		Ok(Self {
			http_client,
			transport_mapper,
			auth_metrics: Default::default(),
			store: Arc::new(MemoryStore::default()),
			config: Arc::new(config),
			registry: Arc::new(EndpointRegistry::catalog()?),
			password_grant: Arc::new(password_grant),
			gate: Default::default(),
		})
	}

	/// Replaces the token store, e.g. to share one token between several clients.
	///
	/// The client gets a fresh authentication gate bound to the new store. Clones made after
	/// this call share that gate; other clients using the same store do not.
	pub fn with_store(mut self, store: Arc<dyn TokenStore>) -> Self {
		self.store = store;
		self.gate = Default::default();

		self
	}

	/// Replaces the operation registry.
	pub fn with_registry(mut self, registry: EndpointRegistry) -> Self {
		self.registry = Arc::new(registry);

		self
	}

	/// Token store backing this client.
	pub fn store(&self) -> &Arc<dyn TokenStore> {
		&self.store
	}

	/// Validated configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Operations this client can [`call`](ApiClient::call) by name.
	pub fn registry(&self) -> &EndpointRegistry {
		&self.registry
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client with its own reqwest-backed transport.
	pub fn new(config: ClientConfig) -> Result<Self> {
		Self::with_http_client(config, ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}

	/// Validates `options` and creates a reqwest-backed client.
	pub fn from_options(options: ClientOptions) -> Result<Self> {
		Self::new(options.validate()?)
	}
}
impl<C, M> Clone for ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			auth_metrics: self.auth_metrics.clone(),
			store: self.store.clone(),
			config: self.config.clone(),
			registry: self.registry.clone(),
			password_grant: self.password_grant.clone(),
			gate: self.gate.clone(),
		}
	}
}
impl<C, M> Debug for ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("config", &self.config)
			.field("operations", &self.registry.len())
			.field("token_cached", &self.store.get_token().is_some())
			.finish()
	}
}
