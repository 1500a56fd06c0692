use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Shared handle to the ordering function a sortinator was built with.
///
/// The function must impose a total preorder on `T`: distinct elements may
/// compare [`Ordering::Equal`]. Clones share the same function, so
/// [`Order::ptr_eq`] can tell whether two handles came from one construction.
pub struct Order<T> {
	cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> Order<T> {
	/// Wraps a comparison function.
	pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
		Self { cmp: Rc::new(cmp) }
	}

	/// Orders by a key extracted from each element.
	pub fn by_key<K: Ord>(key: impl Fn(&T) -> K + 'static) -> Self
	where
		T: 'static,
	{
		Self::new(move |a, b| key(a).cmp(&key(b)))
	}

	/// Compares two elements.
	#[inline]
	pub fn compare(&self, a: &T, b: &T) -> Ordering {
		(self.cmp)(a, b)
	}

	/// Returns a new ordering that ranks elements in the opposite direction.
	pub fn reversed(&self) -> Self
	where
		T: 'static,
	{
		let inner = Rc::clone(&self.cmp);
		Self::new(move |a, b| inner(b, a))
	}

	/// Returns `true` if both handles share the same underlying function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.cmp, &other.cmp)
	}
}

impl<T: Ord + 'static> Order<T> {
	/// The natural [`Ord`] ordering of `T`.
	pub fn natural() -> Self {
		Self::new(T::cmp)
	}
}

impl<T: Ord + 'static> Default for Order<T> {
	fn default() -> Self {
		Self::natural()
	}
}

impl<T> Clone for Order<T> {
	fn clone(&self) -> Self {
		Self { cmp: Rc::clone(&self.cmp) }
	}
}

impl<T> fmt::Debug for Order<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Order(..)")
	}
}
