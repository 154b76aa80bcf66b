//! Token storage contract and the built-in in-memory store.
//!
//! A store holds at most one current [`AccessToken`]. Writers always replace the whole record,
//! so readers observe either the previous token or the new one, never a mix of the two.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::AccessToken};

/// Storage backend contract for the client's single active token.
pub trait TokenStore
where
	Self: Send + Sync,
{
	/// Returns the current token, valid or not, if one was ever stored.
	fn get_token(&self) -> Option<AccessToken>;

	/// Replaces the current token.
	fn replace(&self, token: AccessToken);

	/// Forgets the current token.
	fn clear(&self);
}
impl dyn TokenStore {
	/// Stores `value` as received now, expiring after `ttl`.
	pub fn set_token(&self, value: impl Into<String>, ttl: Duration) -> AccessToken {
		self.set_token_at(value, ttl, OffsetDateTime::now_utc())
	}

	/// Stores `value` as received at `received_at`, expiring after `ttl`.
	pub fn set_token_at(
		&self,
		value: impl Into<String>,
		ttl: Duration,
		received_at: OffsetDateTime,
	) -> AccessToken {
		let token = AccessToken::new(value.into(), received_at, ttl);

		self.replace(token.clone());

		token
	}

	/// Returns `true` if a token exists and has not expired.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if a token exists and is still valid at `instant`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		self.valid_token_at(instant).is_some()
	}

	/// Returns the current token only if it is still valid at `instant`.
	pub fn valid_token_at(&self, instant: OffsetDateTime) -> Option<AccessToken> {
		self.get_token().filter(|token| token.is_valid_at(instant))
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn empty_store_is_never_valid() {
		let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());

		assert!(store.get_token().is_none());
		assert!(!store.is_valid());
		assert!(!store.is_valid_at(macros::datetime!(1970-01-01 00:00 UTC)));
	}

	#[test]
	fn expiry_is_measured_from_receipt() {
		let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());
		let received = macros::datetime!(2025-06-01 08:00 UTC);
		let token = store.set_token_at("first", Duration::seconds(3600), received);

		assert_eq!(token.expires_at, macros::datetime!(2025-06-01 09:00 UTC));
		assert!(store.is_valid_at(received + Duration::seconds(3599)));
		assert!(!store.is_valid_at(received + Duration::seconds(3600)));
		assert!(store.valid_token_at(received + Duration::hours(2)).is_none());
		assert_eq!(
			store.get_token().map(|token| token.value.expose().to_owned()),
			Some("first".into())
		);
	}

	#[test]
	fn set_token_replaces_the_previous_record() {
		let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());

		store.set_token("old", Duration::minutes(5));
		store.set_token("new", Duration::minutes(30));

		let current = store.get_token().expect("A token should be stored.");

		assert_eq!(current.value.expose(), "new");
		assert!(store.is_valid());

		store.clear();

		assert!(store.get_token().is_none());
	}
}
