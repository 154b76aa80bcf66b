//! Optional observability helpers for authentication and resource calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mashery_client.call` with the `kind`
//!   (authenticate or resource) and `operation` fields, plus `debug` events for call phases.
//! - Enable `metrics` to increment the `mashery_client_call_total` counter for every
//!   attempt/success/failure, labeled by `kind` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outbound call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Password-grant exchange against the token endpoint.
	Authenticate,
	/// Authorized call against the resource API.
	Resource,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Authenticate => "authenticate",
			CallKind::Resource => "resource",
		}
	}

	/// Human-readable name of the endpoint this kind of call targets.
	pub const fn target(self) -> &'static str {
		match self {
			CallKind::Authenticate => "token endpoint",
			CallKind::Resource => "resource endpoint",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Lifecycle of a single intercepted resource call.
///
/// Every call starts in [`CallPhase::PendingAuthCheck`], moves to either
/// [`CallPhase::TokenValid`] or [`CallPhase::Authenticating`], and ends in
/// [`CallPhase::Dispatched`] or [`CallPhase::AuthFailed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallPhase {
	/// Token validity has not been checked yet.
	PendingAuthCheck,
	/// A valid token was found in the store.
	TokenValid,
	/// The call is waiting on (or running) an authentication.
	Authenticating,
	/// The request was handed to the transport.
	Dispatched,
	/// Authentication failed; the request was never sent.
	AuthFailed,
}
impl CallPhase {
	/// Returns a stable label suitable for event fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallPhase::PendingAuthCheck => "pending_auth_check",
			CallPhase::TokenValid => "token_valid",
			CallPhase::Authenticating => "authenticating",
			CallPhase::Dispatched => "dispatched",
			CallPhase::AuthFailed => "auth_failed",
		}
	}
}
impl Display for CallPhase {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
