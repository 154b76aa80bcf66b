//! Declarative endpoint registry: operation name → (path template, verb).
//!
//! The registry is plain data. [`EndpointRegistry::catalog`] loads the built-in Mashery V3
//! operations from [`catalog::CATALOG`]; callers may add or replace operations before handing the
//! registry to a client. Templates are parsed on registration so malformed ones fail early.

pub mod catalog;
pub mod template;

pub use template::*;

// std
use std::borrow::Cow;
// crates.io
use oauth2::http::Method;
// self
use crate::_prelude::*;

/// HTTP verbs used by registered operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl HttpMethod {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
		}
	}

	/// Converts into the `http` crate's method type.
	pub fn to_http(self) -> Method {
		match self {
			HttpMethod::Get => Method::GET,
			HttpMethod::Post => Method::POST,
			HttpMethod::Put => Method::PUT,
			HttpMethod::Delete => Method::DELETE,
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable description of one remote call shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
	/// Operation name used for lookups and telemetry.
	pub name: Cow<'static, str>,
	/// Path template relative to the resource base path.
	pub template: PathTemplate,
	/// HTTP verb.
	pub method: HttpMethod,
}
impl OperationDescriptor {
	/// Parses `template` and builds a descriptor.
	pub fn new(
		name: impl Into<Cow<'static, str>>,
		template: impl Into<String>,
		method: HttpMethod,
	) -> Result<Self, TemplateError> {
		Ok(Self { name: name.into(), template: PathTemplate::parse(template)?, method })
	}
}

/// Name-indexed set of [`OperationDescriptor`]s.
#[derive(Clone, Debug, Default)]
pub struct EndpointRegistry {
	operations: BTreeMap<String, OperationDescriptor>,
}
impl EndpointRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a registry holding every built-in Mashery V3 operation.
	pub fn catalog() -> Result<Self, TemplateError> {
		let mut registry = Self::new();

		for (name, template, method) in catalog::CATALOG {
			registry.insert(OperationDescriptor::new(*name, *template, *method)?);
		}

		Ok(registry)
	}

	/// Parses and registers an operation, replacing any existing one with the same name.
	pub fn register(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		template: impl Into<String>,
		method: HttpMethod,
	) -> Result<&OperationDescriptor, TemplateError> {
		let descriptor = OperationDescriptor::new(name, template, method)?;
		let key = descriptor.name.to_string();

		self.operations.insert(key.clone(), descriptor);

		Ok(&self.operations[&key])
	}

	/// Registers an already-built descriptor, returning the one it replaced.
	pub fn insert(&mut self, descriptor: OperationDescriptor) -> Option<OperationDescriptor> {
		self.operations.insert(descriptor.name.to_string(), descriptor)
	}

	/// Looks up an operation by name.
	pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
		self.operations.get(name)
	}

	/// Iterates over operations in name order.
	pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
		self.operations.values()
	}

	/// Number of registered operations.
	pub fn len(&self) -> usize {
		self.operations.len()
	}

	/// Returns `true` when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.operations.is_empty()
	}
}
