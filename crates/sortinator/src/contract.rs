use std::collections::{VecDeque, vec_deque};
use std::iter::FusedIterator;
use std::slice;

use crate::{Order, Result, Strategy};

/// A two-phase priority queue.
///
/// A sortinator starts out empty and accepting. Elements are added in any
/// order with [`add`](Self::add); a call to [`switch_state`](Self::switch_state)
/// moves it into the extracting phase, where
/// [`remove_smallest`](Self::remove_smallest) yields elements in ascending
/// order under the [`Order`] it was built with. Elements that compare equal
/// come out in an order fixed by the implementation.
///
/// Calls that are not allowed in the current phase fail without changing any
/// state.
pub trait Sortinator<T> {
	/// The strategy backing this sortinator.
	fn strategy(&self) -> Strategy;

	/// Adds an element to the multiset.
	///
	/// # Errors
	///
	/// [`SortinatorError::NotAccepting`](crate::SortinatorError::NotAccepting)
	/// during the extracting phase. The element is dropped.
	fn add(&mut self, element: T) -> Result<()>;

	/// Toggles between the accepting and extracting phases.
	fn switch_state(&mut self);

	/// Removes and returns a smallest element.
	///
	/// # Errors
	///
	/// [`SortinatorError::Empty`](crate::SortinatorError::Empty) when there is
	/// nothing to remove, otherwise
	/// [`SortinatorError::StillAccepting`](crate::SortinatorError::StillAccepting)
	/// during the accepting phase.
	fn remove_smallest(&mut self) -> Result<T>;

	/// Number of elements currently held.
	fn element_count(&self) -> usize;

	/// Returns `true` during the accepting phase.
	fn accepting_elements(&self) -> bool;

	/// The ordering supplied at construction.
	fn order_cmp(&self) -> Order<T>;

	/// Drops every element and returns to the accepting phase.
	fn clear(&mut self);

	/// Iterates over the current contents in storage order, which is not
	/// necessarily sorted.
	fn iter(&self) -> Iter<'_, T>;

	/// Returns `true` if no elements are held.
	fn is_empty(&self) -> bool {
		self.element_count() == 0
	}

	/// Extracts every element in ascending order.
	///
	/// Switches to the extracting phase first if needed. The sortinator is left
	/// empty and extracting.
	fn drain_sorted(&mut self) -> Vec<T> {
		if self.accepting_elements() {
			self.switch_state();
		}
		let mut sorted = Vec::with_capacity(self.element_count());
		while !self.is_empty() {
			let Ok(element) = self.remove_smallest() else {
				break;
			};
			sorted.push(element);
		}
		sorted
	}
}

/// Storage-order iterator over a sortinator's contents.
///
/// Created by [`Sortinator::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
	inner: IterInner<'a, T>,
}

#[derive(Debug)]
enum IterInner<'a, T> {
	Slice(slice::Iter<'a, T>),
	Deque(vec_deque::Iter<'a, T>),
}

impl<'a, T> Iter<'a, T> {
	pub(crate) fn slice(items: &'a [T]) -> Self {
		Self {
			inner: IterInner::Slice(items.iter()),
		}
	}

	pub(crate) fn deque(items: &'a VecDeque<T>) -> Self {
		Self {
			inner: IterInner::Deque(items.iter()),
		}
	}
}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		let inner = match &self.inner {
			IterInner::Slice(it) => IterInner::Slice(it.clone()),
			IterInner::Deque(it) => IterInner::Deque(it.clone()),
		};
		Self { inner }
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.inner {
			IterInner::Slice(it) => it.next(),
			IterInner::Deque(it) => it.next(),
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.inner {
			IterInner::Slice(it) => it.size_hint(),
			IterInner::Deque(it) => it.size_hint(),
		}
	}
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		match &mut self.inner {
			IterInner::Slice(it) => it.next_back(),
			IterInner::Deque(it) => it.next_back(),
		}
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
