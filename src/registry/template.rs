//! `${name}` path templates with exact-key substitution.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Errors produced while parsing or rendering a [`PathTemplate`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum TemplateError {
	/// A `${` opener has no closing brace.
	#[error("Template `{template}` has an unterminated placeholder.")]
	Unterminated {
		/// Offending template.
		template: String,
	},
	/// A placeholder has no name (`${}`).
	#[error("Template `{template}` contains an empty placeholder.")]
	EmptyPlaceholder {
		/// Offending template.
		template: String,
	},
	/// Rendering required a parameter the caller did not supply.
	#[error("Path parameter `{name}` is required by `{template}`.")]
	MissingParameter {
		/// Name of the missing placeholder.
		name: String,
		/// Template being rendered.
		template: String,
	},
	/// A parameter value cannot stand as a single path segment (empty, `.`, or `..`).
	#[error("Path parameter `{name}` of `{template}` is not a usable path segment.")]
	InvalidParameter {
		/// Name of the offending placeholder.
		name: String,
		/// Template being rendered.
		template: String,
	},
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Placeholder(String),
}

/// Parsed URL path template such as `/services/${serviceId}/endpoints/${id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
	raw: String,
	segments: Vec<Segment>,
}
impl PathTemplate {
	/// Parses `raw`, rejecting empty and unterminated placeholders.
	pub fn parse(raw: impl Into<String>) -> Result<Self, TemplateError> {
		let raw = raw.into();
		let mut segments = Vec::new();
		let mut rest = raw.as_str();

		while let Some(start) = rest.find("${") {
			if start > 0 {
				segments.push(Segment::Literal(rest[..start].to_owned()));
			}

			let after = &rest[start + 2..];
			let end =
				after.find('}').ok_or_else(|| TemplateError::Unterminated { template: raw.clone() })?;
			let name = after[..end].trim();

			if name.is_empty() {
				return Err(TemplateError::EmptyPlaceholder { template: raw.clone() });
			}

			segments.push(Segment::Placeholder(name.to_owned()));

			rest = &after[end + 1..];
		}

		if !rest.is_empty() {
			segments.push(Segment::Literal(rest.to_owned()));
		}

		Ok(Self { raw, segments })
	}

	/// Returns the template exactly as registered.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Iterates over placeholder names in order of appearance.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Placeholder(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// Substitutes every placeholder with the parameter of the same name.
	///
	/// Each value is percent-encoded as one path segment, so `/`, `?`, and `#` never change the
	/// shape of the path. Extra parameters are ignored; a missing one fails with
	/// [`TemplateError::MissingParameter`], and an empty or dot-segment value with
	/// [`TemplateError::InvalidParameter`].
	pub fn render(&self, params: &BTreeMap<String, String>) -> Result<String, TemplateError> {
		let mut rendered = String::with_capacity(self.raw.len());

		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => rendered.push_str(text),
				Segment::Placeholder(name) => {
					let value = params.get(name).ok_or_else(|| TemplateError::MissingParameter {
						name: name.clone(),
						template: self.raw.clone(),
					})?;

					if matches!(value.as_str(), "" | "." | "..") {
						return Err(TemplateError::InvalidParameter {
							name: name.clone(),
							template: self.raw.clone(),
						});
					}

					push_segment(&mut rendered, value);
				},
			}
		}

		Ok(rendered)
	}
}
// `form_urlencoded` leaves only `*-._` and alphanumerics bare; `+` stands for a space there.
fn push_segment(rendered: &mut String, value: &str) {
	for chunk in form_urlencoded::byte_serialize(value.as_bytes()) {
		if chunk == "+" {
			rendered.push_str("%20");
		} else {
			rendered.push_str(chunk);
		}
	}
}

impl Display for PathTemplate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}
