use crate::config::Config;
use crate::pager::{paginate, PageQuery, PageRequest};
use crate::source::{Queryable, SliceSource};
use crate::PageNum;

fn items(count: PageNum) -> Vec<PageNum> {
	(1..=count).collect()
}

fn request(page: PageNum, page_size: PageNum) -> PageRequest {
	PageRequest {
		page,
		page_size,
		max_window: 25,
	}
}

#[test]
fn first_page_of_45_items() {
	let items = items(45);
	let result = paginate(&SliceSource(&items), request(1, 20)).unwrap();
	assert_eq!(result.total_pages, 3);
	assert_eq!(result.current_page, 1);
	assert_eq!(result.items, (1..=20).collect::<Vec<_>>());
}

#[test]
fn last_page_is_partial() {
	let items = items(45);
	let result = paginate(&SliceSource(&items), request(3, 20)).unwrap();
	assert_eq!(result.current_page, 3);
	assert_eq!(result.items, (41..=45).collect::<Vec<_>>());
}

#[test]
fn overflowing_page_clamps_to_last() {
	let items = items(45);
	let result = paginate(&SliceSource(&items), request(5, 20)).unwrap();
	assert_eq!(result.total_pages, 3);
	assert_eq!(result.current_page, 3);
	assert_eq!(result.items, (41..=45).collect::<Vec<_>>());
}

#[test]
fn underflowing_page_clamps_to_first() {
	let items = items(45);
	for page in [0, -1, -100] {
		let result = paginate(&SliceSource(&items), request(page, 20)).unwrap();
		assert_eq!(result.current_page, 1);
		assert_eq!(result.items[0], 1);
	}
}

#[test]
fn exact_multiple_has_no_partial_page() {
	let items = items(40);
	let result = paginate(&SliceSource(&items), request(1, 20)).unwrap();
	assert_eq!(result.total_pages, 2);
}

#[test]
fn empty_source_is_a_valid_terminal_state() {
	let items: Vec<PageNum> = Vec::new();
	let result = paginate(&SliceSource(&items), request(7, 20)).unwrap();
	assert_eq!(result.total_pages, 0);
	assert_eq!(result.current_page, 1);
	assert!(result.items.is_empty());
	assert!(result.is_empty());
}

#[test]
fn zero_page_size_is_treated_as_one() {
	let items = items(3);
	let result = paginate(&SliceSource(&items), request(2, 0)).unwrap();
	assert_eq!(result.total_pages, 3);
	assert_eq!(result.items, vec![2]);
}

#[test]
fn raw_page_coercion() {
	let config = Config::default();
	assert_eq!(PageRequest::from_raw(Some("7"), &config).page, 7);
	assert_eq!(PageRequest::from_raw(Some(" 3 "), &config).page, 3);
	assert_eq!(PageRequest::from_raw(Some("3.9"), &config).page, 3);
	assert_eq!(PageRequest::from_raw(Some("-2.5"), &config).page, -2);
	assert_eq!(PageRequest::from_raw(Some("abc"), &config).page, 1);
	assert_eq!(PageRequest::from_raw(Some(""), &config).page, 1);
	assert_eq!(PageRequest::from_raw(None, &config).page, 1);
}

#[test]
fn query_falls_back_to_config() {
	let config = Config::default();
	let query: PageQuery = serde_json::from_str(r#"{ "page": "4" }"#).unwrap();
	let request = query.request(&config);
	assert_eq!(request.page, 4);
	assert_eq!(request.page_size, 20);

	let query: PageQuery = serde_json::from_str(r#"{ "page": "oops", "page_size": 5 }"#).unwrap();
	let request = query.request(&config);
	assert_eq!(request.page, 1);
	assert_eq!(request.page_size, 5);
}

#[test]
fn fetches_one_count_and_one_slice() {
	use std::cell::Cell;

	struct Counting {
		counts: Cell<u32>,
		slices: Cell<u32>,
	}

	impl Queryable for Counting {
		type Item = ();
		type Error = std::convert::Infallible;

		fn count(&self) -> Result<PageNum, Self::Error> {
			self.counts.set(self.counts.get() + 1);
			Ok(100)
		}

		fn slice(&self, offset: PageNum, limit: PageNum) -> Result<Vec<()>, Self::Error> {
			self.slices.set(self.slices.get() + 1);
			assert_eq!(offset, 40);
			assert_eq!(limit, 20);
			Ok(vec![(); 20])
		}
	}

	let source = Counting {
		counts: Cell::new(0),
		slices: Cell::new(0),
	};
	paginate(&source, request(3, 20)).unwrap();
	assert_eq!(source.counts.get(), 1);
	assert_eq!(source.slices.get(), 1);
}

#[test]
fn source_errors_propagate_unchanged() {
	#[derive(Debug, thiserror::Error)]
	#[error("backend unavailable")]
	struct Unavailable;

	struct Failing;

	impl Queryable for Failing {
		type Item = ();
		type Error = Unavailable;

		fn count(&self) -> Result<PageNum, Unavailable> {
			Err(Unavailable)
		}

		fn slice(&self, _offset: PageNum, _limit: PageNum) -> Result<Vec<()>, Unavailable> {
			unreachable!("count already failed")
		}
	}

	let error = paginate(&Failing, request(1, 20)).unwrap_err();
	assert_eq!(error.to_string(), "backend unavailable");
}
