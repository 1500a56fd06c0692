use std::fmt;

use crate::contract::Iter;
use crate::mode::{self, Mode};
use crate::{Order, Result, Sortinator, SortinatorError, Strategy};


/// Sortinator backed by a binary min-heap.
///
/// Elements live in a dense array where every node ranks no higher than
/// either of its children (`2i + 1` and `2i + 2`). Both
/// [`add`](Sortinator::add) and [`remove_smallest`](Sortinator::remove_smallest)
/// restore that property in `O(log n)` swaps.
pub struct HeapSortinator<T> {
	heap: Vec<T>,
	order: Order<T>,
	mode: Mode,
}

#[inline]
const fn parent(i: usize) -> usize {
	(i - 1) / 2
}

#[inline]
const fn left(i: usize) -> usize {
	2 * i + 1
}

#[inline]
const fn right(i: usize) -> usize {
	2 * i + 2
}

impl<T> HeapSortinator<T> {
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
			heap: Vec::with_capacity(capacity),
			order,
			mode: Mode::Accepting,
		}
	}

	#[inline]
	fn less(&self, a: usize, b: usize) -> bool {
		self.order.compare(&self.heap[a], &self.heap[b]).is_lt()
	}

	/// Moves the element at `pos` toward the root until its parent no longer
	/// ranks above it.
	fn sift_up(&mut self, mut pos: usize) {
		while pos > 0 && self.less(pos, parent(pos)) {
			self.heap.swap(pos, parent(pos));
			pos = parent(pos);
		}
	}

	/// Moves the element at `pos` toward the leaves.
	///
	/// Requires both subtrees of `pos` to already be valid heaps. The left
	/// child wins ties between children; a child only swaps when it ranks
	/// strictly below the node.
	fn sift_down(&mut self, mut pos: usize) {
		let len = self.heap.len();
		loop {
			let mut smallest = pos;
			if left(pos) < len && self.less(left(pos), smallest) {
				smallest = left(pos);
			}
			if right(pos) < len && self.less(right(pos), smallest) {
				smallest = right(pos);
			}
			if smallest == pos {
				break;
			}
			self.heap.swap(pos, smallest);
			pos = smallest;
		}
	}
}

impl<T> Sortinator<T> for HeapSortinator<T> {
	fn strategy(&self) -> Strategy {
		Strategy::Heap
	}

	fn add(&mut self, element: T) -> Result<()> {
		self.mode.admit_add(Strategy::Heap)?;
		self.heap.push(element);
		self.sift_up(self.heap.len() - 1);
		Ok(())
	}

	fn switch_state(&mut self) {
		self.mode = self.mode.toggled();
		mode::trace_switch(Strategy::Heap, self.mode, self.heap.len());
	}

	fn remove_smallest(&mut self) -> Result<T> {
		self.mode.admit_remove(Strategy::Heap, self.heap.len())?;
		// Root and last trade places before the pop; with one element they coincide.
		let last = self.heap.len() - 1;
		self.heap.swap(0, last);
		let smallest = self.heap.pop().ok_or(SortinatorError::Empty)?;
		self.sift_down(0);
		Ok(smallest)
	}

	fn element_count(&self) -> usize {
		self.heap.len()
	}

	fn accepting_elements(&self) -> bool {
		self.mode.is_accepting()
	}

	fn order_cmp(&self) -> Order<T> {
		self.order.clone()
	}

	fn clear(&mut self) {
		mode::trace_clear(Strategy::Heap, self.heap.len());
		self.heap.clear();
		self.mode = Mode::Accepting;
	}

	fn iter(&self) -> Iter<'_, T> {
		Iter::slice(&self.heap)
	}
}

impl<T: Ord + 'static> Default for HeapSortinator<T> {
	fn default() -> Self {
		Self::with_order(Order::natural())
	}
}

impl<'a, T> IntoIterator for &'a HeapSortinator<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		Iter::slice(&self.heap)
	}
}

impl<T: fmt::Debug> fmt::Debug for HeapSortinator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.heap).finish()
	}
}
