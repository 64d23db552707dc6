//! # Pagenav
//!
//! Offset-based pagination with HTML navigation controls.
//!
//! The crate is a pipeline of three pure steps: [`pager::paginate`] clamps the requested page and fetches exactly one slice from a [`Queryable`] source, [`url::UrlTemplate`] resolves a link template for arbitrary page numbers, and [`nav::build`] derives the bounded, centered window of page links plus previous/next targets.
//! [`paginate_with_navigation`] composes all three.
//!
//! Nothing here touches the request environment: the current URL is a plain string injected by the caller, and the produced [`PageResult`]/[`NavigationView`] are inert values ready for JSON serialization or HTML rendering via [`nav::Template`].

#![warn(clippy::pedantic)]
#![warn(
	missing_copy_implementations,
	elided_lifetimes_in_paths,
	explicit_outlives_requirements,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	noop_method_call,
	single_use_lifetimes,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
	unused_lifetimes,
	unused_macro_rules,
	unused_qualifications,
	variant_size_differences
)]
#![allow(clippy::tabs_in_doc_comments)] // rustfmt formats our doc comments and we use tabs
#![deny(unsafe_code)]

pub mod config;
pub mod nav;
pub mod pager;
pub mod source;
pub mod url;
pub mod window;

pub use config::Config;
pub use nav::NavigationView;
pub use pager::{PageRequest, PageResult};
pub use source::Queryable;
pub use url::{TemplateError, UrlTemplate};

/// Page numbers, counts, offsets, and limits are all signed to match common database interfaces.
pub type PageNum = i64;

/// One page of items together with its navigation view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Paginated<T> {
	/// The fetched page of items and the clamped page state.
	pub page: PageResult<T>,
	/// Page links and previous/next targets for the page.
	pub navigation: NavigationView,
}

/// Failures of the composed pipeline.
///
/// `E` is the error type of the [`Queryable`] source, passed through untouched.
#[derive(Debug, thiserror::Error)]
#[allow(variant_size_differences)] // no better way
pub enum Error<E: std::error::Error> {
	/// The data source failed to count or slice.
	#[error("querying the data source: {0}")]
	Source(#[source] E),
	/// The supplied link format could not be turned into a usable template.
	#[error("resolving the URL template: {0}")]
	Template(#[from] TemplateError),
}

/// Run the whole pipeline: resolve the URL template, paginate the source, and build the navigation view.
///
/// `raw_page` is the page number as it arrived from the outside world; anything that does not look like a number is treated as page 1.
/// `link_format` is an optional template containing the configured placeholder exactly once; when absent, the template is derived from `current_url` by appending a `/page/<placeholder>` segment.
///
/// # Errors
///
/// Returns [`Error::Template`] for a bad `link_format` (checked before the source is touched) and [`Error::Source`] when the source's count or slice fails.
pub fn paginate_with_navigation<S: Queryable>(
	source: &S,
	raw_page: Option<&str>,
	current_url: &str,
	link_format: Option<&str>,
	config: &Config,
) -> Result<Paginated<S::Item>, Error<S::Error>> {
	let template = match link_format {
		Some(format) => UrlTemplate::explicit(format, current_url, &config.placeholder_token)?,
		None => UrlTemplate::from_current_url(current_url, &config.placeholder_token)?,
	};
	let request = PageRequest::from_raw(raw_page, config);
	let page = pager::paginate(source, request).map_err(Error::Source)?;
	let navigation = nav::build(page.current_page, page.total_pages, request.max_window, &template);
	Ok(Paginated { page, navigation })
}
