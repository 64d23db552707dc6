//! The bounded, centered window of page numbers to render.


use std::ops::RangeInclusive;

use crate::PageNum;

/// The page numbers to render as navigation, ascending.
///
/// The window is centered on `current_page` when there is room on both sides, and pins to the start or end of the page range otherwise.
/// Its length is always `min(max_window, total_pages)`, and it always contains `current_page`.
/// An empty range is returned when `total_pages` is less than 1.
#[must_use]
pub fn build(
	current_page: PageNum,
	total_pages: PageNum,
	max_window: PageNum,
) -> RangeInclusive<PageNum> {
	if total_pages < 1 {
		#[allow(clippy::reversed_empty_ranges)]
		return 1..=0;
	}
	let max_window = max_window.max(1);
	let current = current_page.clamp(1, total_pages);

	// Midpoint of the window, counting the current page itself.
	let half = (max_window + 1) / 2;
	let start = if current < half {
		1
	} else if current > total_pages - half {
		(total_pages - max_window + 1).max(1)
	} else {
		current - half + 1
	};
	start..=total_pages.min(start + max_window - 1)
}
