use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{EagerSortinator, HeapSortinator, LazySortinator, Order, Result, Sortinator};


/// Selects the algorithm behind a [`Sortinator`].
///
/// Names parse case-insensitively (`"heap"`, `"Eager"`, ...) so a strategy
/// can be chosen from configuration text.
#[derive(Debug, Default, Display, EnumString, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum Strategy {
	/// Sorted on insert: `O(n)` add, `O(1)` removal.
	Eager,
	/// Sorted on extract: `O(1)` add, `O(n)` removal.
	Lazy,
	/// Binary min-heap: `O(log n)` add and removal.
	#[default]
	Heap,
}

impl Strategy {
	/// Builds an empty, accepting sortinator ordered by `cmp`.
	pub fn build<T: 'static>(self, cmp: impl Fn(&T, &T) -> std::cmp::Ordering + 'static) -> Box<dyn Sortinator<T>> {
		self.build_with(Order::new(cmp))
	}

	/// Builds an empty, accepting sortinator sharing an existing [`Order`].
	pub fn build_with<T: 'static>(self, order: Order<T>) -> Box<dyn Sortinator<T>> {
		tracing::trace!(strategy = %self, "sortinator.build");
		match self {
			Self::Eager => Box::new(EagerSortinator::with_order(order)),
			Self::Lazy => Box::new(LazySortinator::with_order(order)),
			Self::Heap => Box::new(HeapSortinator::with_order(order)),
		}
	}
}

/// Sorts `items` by passing them through a fresh sortinator of the given strategy.
///
/// Elements that tie under `order` come out in the strategy's tie order.
pub fn sort_with<T: 'static>(strategy: Strategy, items: impl IntoIterator<Item = T>, order: Order<T>) -> Result<Vec<T>> {
	let mut sortinator = strategy.build_with(order);
	for item in items {
		sortinator.add(item)?;
	}
	Ok(sortinator.drain_sorted())
}
