//! Resource-owner credentials presented to the token endpoint.

// self
use crate::{_prelude::*, auth::Secret};

/// Immutable credential set for the password grant.
///
/// Built once by [`ClientOptions::validate`](crate::config::ClientOptions::validate); nothing in
/// the crate mutates it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	/// Mashery portal user name.
	pub username: String,
	/// Portal password.
	pub password: Secret,
	/// API key used as the OAuth client identifier.
	pub client_key: String,
	/// API key secret used as the OAuth client secret.
	pub client_secret: Secret,
	/// Area UUID sent as the `scope` parameter.
	pub area_uuid: String,
}
