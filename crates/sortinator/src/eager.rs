use std::collections::VecDeque;
use std::fmt;

use crate::contract::Iter;
use crate::mode::{self, Mode};
use crate::{Order, Result, Sortinator, SortinatorError, Strategy};


/// Sortinator that keeps its contents sorted at all times.
///
/// Each [`add`](Sortinator::add) scans the whole sequence to find the
/// insertion point, so building a sortinator of `n` elements costs `O(n²)`
/// comparisons. Extraction pops the front in `O(1)`. A new element is placed
/// after every element it ties with, so equal elements leave in insertion
/// order.
pub struct EagerSortinator<T> {
	contents: VecDeque<T>,
	order: Order<T>,
	mode: Mode,
}

impl<T> EagerSortinator<T> {
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
			contents: VecDeque::with_capacity(capacity),
			order,
			mode: Mode::Accepting,
		}
	}

	/// Index after the last element that `element` does not rank below.
	fn insertion_point(&self, element: &T) -> usize {
		self.contents
			.iter()
			.filter(|existing| self.order.compare(element, existing).is_ge())
			.count()
	}
}

impl<T> Sortinator<T> for EagerSortinator<T> {
	fn strategy(&self) -> Strategy {
		Strategy::Eager
	}

	fn add(&mut self, element: T) -> Result<()> {
		self.mode.admit_add(Strategy::Eager)?;
		let at = self.insertion_point(&element);
		self.contents.insert(at, element);
		Ok(())
	}

	fn switch_state(&mut self) {
		self.mode = self.mode.toggled();
		mode::trace_switch(Strategy::Eager, self.mode, self.contents.len());
	}

	fn remove_smallest(&mut self) -> Result<T> {
		self.mode.admit_remove(Strategy::Eager, self.contents.len())?;
		self.contents.pop_front().ok_or(SortinatorError::Empty)
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
		mode::trace_clear(Strategy::Eager, self.contents.len());
		self.contents.clear();
		self.mode = Mode::Accepting;
	}

	fn iter(&self) -> Iter<'_, T> {
		Iter::deque(&self.contents)
	}
}

impl<T: Ord + 'static> Default for EagerSortinator<T> {
	fn default() -> Self {
		Self::with_order(Order::natural())
	}
}

impl<'a, T> IntoIterator for &'a EagerSortinator<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		Iter::deque(&self.contents)
	}
}

impl<T: fmt::Debug> fmt::Debug for EagerSortinator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.contents).finish()
	}
}
