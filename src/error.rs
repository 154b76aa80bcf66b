//! Client-level error types shared across configuration, authentication, and dispatch.

// self
use crate::{_prelude::*, registry::TemplateError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reference-counted error source.
///
/// Sources are shared rather than boxed so every [`Error`] is `Clone`, which lets a single failed
/// authentication be handed to each caller waiting on it.
pub type SharedError = Arc<dyn StdError + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Clone, Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, malformed payloads).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Path template could not be parsed or rendered.
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// Token endpoint answered with an explicit OAuth error payload.
	#[error("Token endpoint returned an OAuth error: {}.", remote_message(.error, .description))]
	AuthRemote {
		/// OAuth error code, e.g. `invalid_grant`.
		error: String,
		/// Optional human-readable description supplied by the endpoint.
		description: Option<String>,
	},
	/// No operation with the requested name exists in the registry.
	#[error("Operation `{name}` is not registered.")]
	UnknownOperation {
		/// Requested operation name.
		name: String,
	},
	/// Caller-supplied request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	InvalidBody {
		/// Underlying serializer failure.
		#[source]
		source: SharedError,
	},
}
impl Error {
	/// Returns the OAuth error code when the token endpoint rejected the grant.
	pub fn remote_error_code(&self) -> Option<&str> {
		match self {
			Self::AuthRemote { error, .. } => Some(error),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Clone, Debug, ThisError)]
pub enum ConfigError {
	/// Required initialization options were absent or blank.
	#[error("The following options are required: {}.", .fields.join(", "))]
	MissingOptions {
		/// Names of the missing options, in declaration order.
		fields: Vec<&'static str>,
	},
	/// A configured host or endpoint path does not form a valid URL.
	#[error("Option `{option}` does not form a valid URL.")]
	InvalidUrl {
		/// Option that produced the URL.
		option: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: SharedError,
	},
	/// HTTP request construction failed.
	#[error("HTTP request could not be constructed.")]
	HttpRequest {
		/// Underlying `http` builder failure.
		#[source]
		source: SharedError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Arc::new(src) }
	}
}
impl From<oauth2::http::Error> for ConfigError {
	fn from(e: oauth2::http::Error) -> Self {
		Self::HttpRequest { source: Arc::new(e) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, unusable responses).
#[derive(Clone, Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Mashery API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: SharedError,
	},
	/// Request did not complete before the transport deadline.
	#[error("Request to the Mashery API timed out.")]
	Timeout {
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Mashery API.")]
	Io {
		/// Original IO error.
		#[source]
		source: Arc<std::io::Error>,
	},
	/// Token endpoint responded with a payload that is neither a token nor an OAuth error.
	#[error("Token endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: Arc<serde_path_to_error::Error<serde_json::Error>>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Response was readable but unusable.
	#[error("Mashery API returned an unexpected response: {message}.")]
	UnexpectedResponse {
		/// Summary of what was wrong with the response.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Resource response body could not be decoded into the requested type.
	#[error("Response body with status {status} could not be decoded.")]
	MalformedBody {
		/// Decoder failure.
		#[source]
		source: Arc<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Arc::new(src) }
	}

	/// HTTP status associated with the failure, if one was observed.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Timeout { status }
			| Self::MalformedResponse { status, .. }
			| Self::UnexpectedResponse { status, .. } => *status,
			Self::MalformedBody { status, .. } => Some(*status),
			Self::Network { .. } | Self::Io { .. } => None,
		}
	}
}
impl From<std::io::Error> for TransportError {
	fn from(e: std::io::Error) -> Self {
		Self::Io { source: Arc::new(e) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

fn remote_message(error: &str, description: &Option<String>) -> String {
	match description {
		Some(description) => format!("{error}: {description}"),
		None => error.to_owned(),
	}
}
