use std::fmt;

use crate::contract::Iter;
use crate::mode::{self, Mode};
use crate::{Order, Result, Sortinator, SortinatorError, Strategy};


/// Sortinator that defers all ordering work to extraction.
///
/// [`add`](Sortinator::add) appends in `O(1)`;
/// [`remove_smallest`](Sortinator::remove_smallest) scans every element in
/// `O(n)` and removes the first minimum it meets in storage order. The
/// remaining elements keep their relative order.
pub struct LazySortinator<T> {
	contents: Vec<T>,
	order: Order<T>,
	mode: Mode,
}

impl<T> LazySortinator<T> {
	/// Creates an empty, accepting sortinator ordered by `cmp`.
	pub fn new(cmp: impl Fn(&T, &T) -> std::cmp::Ordering + 'static) -> Self {
		Self::with_order(Order::new(cmp))
	}

	/// Creates an empty, accepting sortinator sharing an existing [`Order`].
	pub fn with_order(order: Order<T>) -> Self {
		Self::with_capacity(order, 0)
	}

	/// Like [`with_order`](Self::with_order), preallocating room for `capacity` elements.
	pub fn with_capacity(order: Order<T>, capacity: usize) -> Self {
		Self {
			contents: Vec::with_capacity(capacity),
			order,
			mode: Mode::Accepting,
		}
	}

	/// Position of the first element nothing else ranks below.
	fn position_of_smallest(&self) -> Option<usize> {
		let (first, rest) = self.contents.split_first()?;
		let mut smallest = (0, first);
		for (i, candidate) in rest.iter().enumerate() {
			if self.order.compare(candidate, smallest.1).is_lt() {
				smallest = (i + 1, candidate);
			}
		}
		Some(smallest.0)
	}
}

impl<T> Sortinator<T> for LazySortinator<T> {
	fn strategy(&self) -> Strategy {
		Strategy::Lazy
	}

	fn add(&mut self, element: T) -> Result<()> {
		self.mode.admit_add(Strategy::Lazy)?;
		self.contents.push(element);
		Ok(())
	}

	fn switch_state(&mut self) {
		self.mode = self.mode.toggled();
		mode::trace_switch(Strategy::Lazy, self.mode, self.contents.len());
	}

	fn remove_smallest(&mut self) -> Result<T> {
		self.mode.admit_remove(Strategy::Lazy, self.contents.len())?;
		let at = self.position_of_smallest().ok_or(SortinatorError::Empty)?;
		Ok(self.contents.remove(at))
	}

	fn element_count(&self) -> usize {
		self.contents.len()
	}

	fn accepting_elements(&self) -> bool {
		self.mode.is_accepting()
	}

	fn order_cmp(&self) -> Order<T> {
		self.order.clone()
	}

	fn clear(&mut self) {
		mode::trace_clear(Strategy::Lazy, self.contents.len());
		self.contents.clear();
		self.mode = Mode::Accepting;
	}

	fn iter(&self) -> Iter<'_, T> {
		Iter::slice(&self.contents)
	}
}

impl<T: Ord + 'static> Default for LazySortinator<T> {
	fn default() -> Self {
		Self::with_order(Order::natural())
	}
}

impl<'a, T> IntoIterator for &'a LazySortinator<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		Iter::slice(&self.contents)
	}
}

impl<T: fmt::Debug> fmt::Debug for LazySortinator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.contents).finish()
	}
}
