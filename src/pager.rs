//! Clamping the requested page and fetching exactly one page of items.

#[cfg(test)]
mod test;

use crate::config::Config;
use crate::source::Queryable;
use crate::PageNum;

/// The sanitized inputs of one pagination run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
	/// The requested page number, before clamping against the total page count.
	pub page: PageNum,
	/// Number of items per page. At least 1.
	pub page_size: PageNum,
	/// Maximum number of page links displayed. At least 1.
	pub max_window: PageNum,
}

impl PageRequest {
	/// A request for `page`, taking page size and window size from `config`.
	#[must_use]
	pub fn new(page: PageNum, config: &Config) -> Self {
		Self {
			page,
			page_size: config.page_size.max(1),
			max_window: config.max_window.max(1),
		}
	}

	/// A request for a page number that arrived as raw text, as from a query string or path segment.
	///
	/// Integer text is taken as-is, float-like text is truncated toward zero, and anything else falls back to page 1.
	#[must_use]
	pub fn from_raw(raw: Option<&str>, config: &Config) -> Self {
		Self::new(raw.map_or(1, coerce_page), config)
	}
}

/// Query-string parameters, each optional so the URL can omit them.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PageQuery {
	/// Raw page number; non-numeric values are coerced to page 1.
	pub page: Option<String>,
	/// Overrides [`Config::page_size`] when present.
	pub page_size: Option<PageNum>,
}

impl PageQuery {
	/// Sanitize into a [`PageRequest`], falling back to `config` for absent parameters.
	#[must_use]
	pub fn request(&self, config: &Config) -> PageRequest {
		let mut request = PageRequest::from_raw(self.page.as_deref(), config);
		if let Some(page_size) = self.page_size {
			request.page_size = page_size.max(1);
		}
		request
	}
}

#[allow(clippy::cast_possible_truncation)] // f64 to i64 saturates, which is the clamping we want anyway
fn coerce_page(raw: &str) -> PageNum {
	let raw = raw.trim();
	if let Ok(page) = raw.parse::<PageNum>() {
		return page;
	}
	match raw.parse::<f64>() {
		Ok(float) if float.is_finite() => float.trunc() as PageNum,
		_ => {
			tracing::debug!(raw, "page input is not numeric, defaulting to page 1");
			1
		}
	}
}

/// One fetched page together with the clamped page state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageResult<T> {
	/// At most `page_size` items, in source order.
	pub items: Vec<T>,
	/// Always within `1..=total_pages` when there is at least one page; defined as 1 when there are none.
	pub current_page: PageNum,
	/// `ceil(count / page_size)`; 0 for an empty source.
	pub total_pages: PageNum,
}

impl<T> PageResult<T> {
	/// Whether the source had no items at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.total_pages == 0
	}
}

/// Fetch the page described by `request` from `source`.
///
/// Performs exactly one count call and one slice call, in that order.
/// A requested page past the end lands on the last page; a page below 1 lands on the first.
///
/// # Errors
///
/// Passes through the source's error from either call, unchanged and without retrying.
pub fn paginate<S: Queryable>(
	source: &S,
	request: PageRequest,
) -> Result<PageResult<S::Item>, S::Error> {
	let page_size = request.page_size.max(1);
	let count = source.count()?;
	let total_pages = if count <= 0 {
		0
	} else {
		(count + page_size - 1) / page_size
	};

	let current_page = if total_pages < 1 {
		1
	} else {
		request.page.clamp(1, total_pages)
	};
	if current_page != request.page {
		tracing::debug!(
			requested = request.page,
			current = current_page,
			total = total_pages,
			"clamped requested page"
		);
	}

	let items = source.slice((current_page - 1) * page_size, page_size)?;
	Ok(PageResult {
		items,
		current_page,
		total_pages,
	})
}
