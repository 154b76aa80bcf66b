//! Password-grant authentication with coalesced exchanges.
//!
//! [`ApiClient::ensure_token`] returns the cached token while it is valid and otherwise joins
//! (or starts) the single in-flight exchange. [`ApiClient::authenticate`] skips the cache check
//! but is still coalesced, so concurrent callers never send more than one request to the token
//! endpoint. Failures are never retried here; every waiter receives a clone of the same error.

mod metrics;

pub use metrics::AuthMetrics;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	flows::{ApiClient, singleflight::Flight},
	http::ApiHttpClient,
	oauth::TransportErrorMapper,
	obs::{self, CallKind, CallOutcome, CallSpan},
	store::TokenStore,
};

impl<C, M> ApiClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges the configured credentials for a new token and stores it.
	///
	/// A caller that queued behind an exchange already in flight receives that exchange's
	/// outcome instead of sending its own.
	pub async fn authenticate(&self) -> Result<AccessToken> {
		let seen = self.gate.generation();

		self.coalesced(seen, true).await
	}

	/// Returns the cached token when valid, authenticating first otherwise.
	pub async fn ensure_token(&self) -> Result<AccessToken> {
		match self.cached_token() {
			Some(token) => Ok(token),
			None => self.refresh_expired().await,
		}
	}

	/// Current token value, valid or not; `None` until the first successful authentication.
	pub fn access_token(&self) -> Option<String> {
		self.store.get_token().map(|token| token.value.expose().to_owned())
	}

	pub(crate) fn cached_token(&self) -> Option<AccessToken> {
		<dyn TokenStore>::valid_token_at(self.store.as_ref(), OffsetDateTime::now_utc())
	}

	/// Authenticates after the caller observed no valid token.
	pub(crate) async fn refresh_expired(&self) -> Result<AccessToken> {
		let seen = self.gate.generation();

		self.coalesced(seen, false).await
	}

	async fn coalesced(&self, seen: u64, force: bool) -> Result<AccessToken> {
		let flight = self
			.gate
			.run(seen, || async move {
				let cached = if force { None } else { self.cached_token() };

				if let Some(token) = cached {
					return Ok(token);
				}

				self.exchange().await
			})
			.await;

		match flight {
			Flight::Led(outcome) => outcome,
			Flight::Joined { generation, outcome } => {
				self.auth_metrics.record_coalesced();
				obs::record_coalesced(generation);

				outcome
			},
		}
	}

	async fn exchange(&self) -> Result<AccessToken> {
		const KIND: CallKind = CallKind::Authenticate;

		let span = CallSpan::new(KIND, "authenticate");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		self.auth_metrics.record_attempt();

		let result = span
			.instrument(async move {
				let grant = self.password_grant.exchange(self.config.credentials()).await?;
				let token = grant.into_token(OffsetDateTime::now_utc())?;

				self.store.replace(token.clone());

				Ok(token)
			})
			.await;

		match &result {
			Ok(_) => {
				self.auth_metrics.record_success();
				obs::record_call_outcome(KIND, CallOutcome::Success);
			},
			Err(_) => {
				self.auth_metrics.record_failure();
				obs::record_call_outcome(KIND, CallOutcome::Failure);
			},
		}

		result
	}
}
