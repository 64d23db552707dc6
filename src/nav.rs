//! Deriving the navigation view from the clamped page state, and rendering it to HTML.


use crate::config::Config;
use crate::url::UrlTemplate;
use crate::{window, PageNum};

/// One entry of the page-number window.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageLink {
	/// The page this entry navigates to.
	pub page: PageNum,
	/// The resolved URL for this page.
	pub url: String,
	/// Whether this entry is the page being viewed. The current entry is rendered as emphasized text rather than an anchor.
	pub is_current: bool,
}

/// The navigation controls for one page: the window of page links and the previous/next targets.
///
/// Derived fresh from a page result and a template on every pagination run, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NavigationView {
	/// The window entries, ascending by page number.
	pub page_links: Vec<PageLink>,
	/// Absent on the first page and when there are no pages at all.
	pub previous_url: Option<String>,
	/// Absent on the last page and when there are no pages at all.
	pub next_url: Option<String>,
}

/// Derive the navigation view for the given page state.
///
/// `current_page` is expected to already be clamped by the pager.
#[must_use]
pub fn build(
	current_page: PageNum,
	total_pages: PageNum,
	max_window: PageNum,
	template: &UrlTemplate,
) -> NavigationView {
	let page_links = window::build(current_page, total_pages, max_window)
		.map(|page| PageLink {
			page,
			url: template.resolve(page),
			is_current: page == current_page,
		})
		.collect();
	let previous_url =
		(total_pages >= 1 && current_page > 1).then(|| template.resolve(current_page - 1));
	let next_url =
		(total_pages >= 1 && current_page < total_pages).then(|| template.resolve(current_page + 1));
	NavigationView {
		page_links,
		previous_url,
		next_url,
	}
}

/// Renders a [`NavigationView`] as a `<nav class="capsulePagination">` element.
#[derive(askama::Template, Debug, Clone, Copy)]
#[template(path = "pagination.html")]
pub struct Template<'a> {
	/// The view to render.
	pub nav: &'a NavigationView,
	/// Label of the previous-page link.
	pub previous_label: &'a str,
	/// Label of the next-page link.
	pub next_label: &'a str,
}

impl<'a> Template<'a> {
	/// Wrap `nav` for rendering, taking the link labels from `config`.
	#[must_use]
	pub fn new(nav: &'a NavigationView, config: &'a Config) -> Self {
		Self {
			nav,
			previous_label: &config.previous_label,
			next_label: &config.next_label,
		}
	}
}
