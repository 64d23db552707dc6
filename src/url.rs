//! URL templates: strings carrying one placeholder token that is substituted with a concrete page number.


use crate::PageNum;

/// Reasons why a link format cannot be turned into a [`UrlTemplate`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
	/// The format never mentions the placeholder, so no page number could be substituted.
	#[error("URL template {template:?} does not contain the placeholder {placeholder:?}")]
	MissingPlaceholder {
		/// The offending format string.
		template: String,
		/// The configured placeholder token.
		placeholder: String,
	},
	/// The format mentions the placeholder more than once, so substitution would be ambiguous.
	#[error("URL template {template:?} contains the placeholder {placeholder:?} more than once")]
	RepeatedPlaceholder {
		/// The offending format string.
		template: String,
		/// The configured placeholder token.
		placeholder: String,
	},
	/// The configured placeholder token is the empty string.
	#[error("the placeholder token is empty")]
	EmptyPlaceholder,
}

/// A URL pattern containing the placeholder token exactly once.
///
/// Resolution for a page number replaces the placeholder with its decimal representation and leaves every other character, including already-encoded ones, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
	template: String,
	placeholder: String,
}

impl UrlTemplate {
	fn new(template: String, placeholder: &str) -> Result<Self, TemplateError> {
		split_at_placeholder(&template, placeholder)?;
		Ok(Self {
			template,
			placeholder: placeholder.to_owned(),
		})
	}

	/// Derive a template from the URL of the current request by appending a `/page/<placeholder>` segment.
	///
	/// Trailing slashes and any existing trailing `/page/<digits>` segment are stripped first, so re-paginating from any page yields the same stable base instead of accumulating page segments.
	///
	/// # Errors
	///
	/// Fails when the placeholder token is empty or already occurs in `current_url`.
	pub fn from_current_url(current_url: &str, placeholder: &str) -> Result<Self, TemplateError> {
		let base = strip_page_segment(current_url.trim_end_matches('/'));
		Self::new(format!("{base}/page/{placeholder}"), placeholder)
	}

	/// Build a template from a caller-supplied format, anchored to the current request URL.
	///
	/// When `current_url` contains the text preceding the placeholder in `format`, everything from that occurrence on is dropped from `current_url` and the format is appended to the remainder. The navigation then stays on the live host even when the format carries its own absolute prefix.
	///
	/// # Errors
	///
	/// Fails unless `format` contains the placeholder token exactly once.
	pub fn explicit(
		format: &str,
		current_url: &str,
		placeholder: &str,
	) -> Result<Self, TemplateError> {
		let (before, after) = split_at_placeholder(format, placeholder)?;
		let base = current_url
			.find(before)
			.map_or("", |index| &current_url[..index]);
		let mut template = format!("{base}{before}{placeholder}");
		if !after.is_empty() {
			template.push('/');
			template.push_str(after);
		}
		Self::new(template, placeholder)
	}

	/// The template with the placeholder still in place.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.template
	}

	/// Substitute the placeholder with the decimal representation of `page`.
	#[must_use]
	pub fn resolve(&self, page: PageNum) -> String {
		self
			.template
			.replacen(&self.placeholder, &page.to_string(), 1)
	}
}

fn split_at_placeholder<'a>(
	template: &'a str,
	placeholder: &str,
) -> Result<(&'a str, &'a str), TemplateError> {
	if placeholder.is_empty() {
		return Err(TemplateError::EmptyPlaceholder);
	}
	let Some((before, after)) = template.split_once(placeholder) else {
		return Err(TemplateError::MissingPlaceholder {
			template: template.to_owned(),
			placeholder: placeholder.to_owned(),
		});
	};
	if after.contains(placeholder) {
		return Err(TemplateError::RepeatedPlaceholder {
			template: template.to_owned(),
			placeholder: placeholder.to_owned(),
		});
	}
	Ok((before, after))
}

fn strip_page_segment(url: &str) -> &str {
	if let Some((rest, last)) = url.rsplit_once('/') {
		if !last.is_empty() && last.bytes().all(|ch| ch.is_ascii_digit()) {
			if let Some(base) = rest.strip_suffix("/page") {
				return base;
			}
		}
	}
	url
}
