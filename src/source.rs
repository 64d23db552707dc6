//! The capability consumed by the pager: anything that can report a total item count and return a contiguous slice of items for a given offset and limit.

use std::convert::Infallible;

use crate::PageNum;

/// An ordered, countable data source.
///
/// Failures of either operation propagate out of [`crate::pager::paginate`] unchanged; retries, if desired, belong to the implementation.
/// Offset-based pagination reads the count and the slice separately, so a source that is not snapshot-consistent may yield a count and a slice that disagree.
pub trait Queryable {
	/// The item type of the source.
	type Item;
	/// The source's own failure type.
	type Error: std::error::Error;

	/// Total number of items.
	fn count(&self) -> Result<PageNum, Self::Error>;

	/// At most `limit` items starting at `offset`. Both arguments are non-negative when called by the pager.
	fn slice(&self, offset: PageNum, limit: PageNum) -> Result<Vec<Self::Item>, Self::Error>;
}

/// A [`Queryable`] over an in-memory slice. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a, T>(pub &'a [T]);

impl<T: Clone> Queryable for SliceSource<'_, T> {
	type Item = T;
	type Error = Infallible;

	#[allow(clippy::cast_possible_wrap)] // slice lengths fit in i64 on supported targets
	fn count(&self) -> Result<PageNum, Infallible> {
		Ok(self.0.len() as PageNum)
	}

	fn slice(&self, offset: PageNum, limit: PageNum) -> Result<Vec<T>, Infallible> {
		let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
		let start = start.min(self.0.len());
		let length = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
		let end = start.saturating_add(length).min(self.0.len());
		Ok(self.0[start..end].to_vec())
	}
}
