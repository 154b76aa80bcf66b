//! Access token record and its validity window.

// crates.io
use oauth2::http::HeaderValue;
use time::Date;
// self
use crate::{_prelude::*, auth::token::secret::Secret, error::TransportError};

/// Bearer token issued by the token endpoint.
///
/// The value and expiry always travel together; stores replace the whole record rather than
/// patching individual fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Bearer credential; callers must avoid logging it.
	pub value: Secret,
	/// Instant the token response was received.
	pub issued_at: OffsetDateTime,
	/// First instant at which the token is no longer valid.
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// Builds a token received at `received_at` that lives for `ttl`.
	///
	/// An expiry beyond the representable range is clamped to the last (or first) representable
	/// date; use [`AccessToken::checked_new`] to detect that case instead.
	pub fn new(value: impl Into<Secret>, received_at: OffsetDateTime, ttl: Duration) -> Self {
		let expires_at = received_at.checked_add(ttl).unwrap_or_else(|| {
			let bound = if ttl.is_negative() { Date::MIN } else { Date::MAX };

			bound.midnight().assume_utc()
		});

		Self { value: value.into(), issued_at: received_at, expires_at }
	}

	/// Like [`AccessToken::new`], but returns `None` when `received_at + ttl` is out of range.
	pub fn checked_new(
		value: impl Into<Secret>,
		received_at: OffsetDateTime,
		ttl: Duration,
	) -> Option<Self> {
		let expires_at = received_at.checked_add(ttl)?;

		Some(Self { value: value.into(), issued_at: received_at, expires_at })
	}

	/// Returns `true` if the token can still be used at `instant`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		instant < self.expires_at
	}

	/// Renders the `Authorization` header value for this token.
	pub fn bearer_header(&self) -> Result<HeaderValue, TransportError> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", self.value.expose())).map_err(
			|_| TransportError::UnexpectedResponse {
				message: "access token contains characters that are not valid in a header".into(),
				status: None,
			},
		)?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("value", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn expiry_boundary_is_exclusive() {
		let received = macros::datetime!(2025-03-01 12:00 UTC);
		let token = AccessToken::new("abc", received, Duration::seconds(3600));

		assert!(token.is_valid_at(received));
		assert!(token.is_valid_at(received + Duration::seconds(3599)));
		assert!(!token.is_valid_at(received + Duration::seconds(3600)));
	}

	#[test]
	fn out_of_range_lifetimes_are_detected_or_clamped() {
		let received = macros::datetime!(2025-03-01 12:00 UTC);
		let huge = Duration::seconds(9_000_000_000_000);

		assert!(AccessToken::checked_new("abc", received, huge).is_none());
		assert!(AccessToken::checked_new("abc", received, Duration::hours(1)).is_some());

		let clamped = AccessToken::new("abc", received, huge);

		assert_eq!(clamped.expires_at, Date::MAX.midnight().assume_utc());
		assert!(clamped.is_valid_at(received));
	}

	#[test]
	fn bearer_header_is_sensitive_and_redacted_in_debug() {
		let token = AccessToken::new("tok-123", OffsetDateTime::now_utc(), Duration::minutes(1));
		let header = token.bearer_header().expect("Plain ASCII tokens should form a header.");

		assert_eq!(header.to_str().expect("Header should be ASCII."), "Bearer tok-123");
		assert!(header.is_sensitive());
		assert!(!format!("{token:?}").contains("tok-123"));
	}

	#[test]
	fn bearer_header_rejects_control_characters() {
		let token = AccessToken::new("bad\ntoken", OffsetDateTime::now_utc(), Duration::minutes(1));

		assert!(matches!(
			token.bearer_header(),
			Err(TransportError::UnexpectedResponse { .. })
		));
	}
}
