//! Thread-safe in-memory [`TokenStore`] implementation.

// self
use crate::{_prelude::*, auth::AccessToken, store::TokenStore};

/// Single-slot token store kept in-process.
///
/// Cloning the store shares the slot, so several clients built from the same store reuse one
/// token.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<RwLock<Option<AccessToken>>>);
impl MemoryStore {
	/// Creates a store pre-seeded with `token`.
	pub fn with_token(token: AccessToken) -> Self {
		Self(Arc::new(RwLock::new(Some(token))))
	}
}
impl TokenStore for MemoryStore {
	fn get_token(&self) -> Option<AccessToken> {
		self.0.read().clone()
	}

	fn replace(&self, token: AccessToken) {
		*self.0.write() = Some(token);
	}

	fn clear(&self) {
		self.0.write().take();
	}
}
