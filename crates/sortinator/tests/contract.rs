//! Behavioral suite every strategy must pass.
//!
//! Each test runs once per [`Strategy`], with instances produced by the same
//! factory a caller selecting a strategy from configuration would use.

use std::cmp::Ordering;

use rstest::rstest;
use sortinator::{Order, Sortinator, SortinatorError, Strategy};

fn create_instance<T: 'static>(strategy: Strategy, order: Order<T>) -> Box<dyn Sortinator<T>> {
	strategy.build_with(order)
}

fn natural(strategy: Strategy) -> Box<dyn Sortinator<i32>> {
	create_instance(strategy, Order::natural())
}

fn extract_all<T>(s: &mut dyn Sortinator<T>) -> Vec<T> {
	let mut out = Vec::new();
	while s.element_count() > 0 {
		out.push(s.remove_smallest().unwrap());
	}
	out
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Horse {
	color: &'static str,
	age: u32,
	weight: u32,
}

impl Horse {
	fn new(color: &'static str, age: u32, weight: u32) -> Self {
		Self { color, age, weight }
	}
}

/// Ranks a horse below another only when it is both younger and lighter.
fn horse_order(a: &Horse, b: &Horse) -> Ordering {
	if a.age < b.age && a.weight < b.weight {
		Ordering::Less
	} else if a.age > b.age && a.weight > b.weight {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

#[rstest]
fn extracts_in_ascending_order(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	for n in [33, 9, 43, 0, -4] {
		s.add(n).unwrap();
	}
	s.switch_state();

	assert_eq!(extract_all(s.as_mut()), [-4, 0, 9, 33, 43]);
}

#[rstest]
fn first_removal_is_smallest(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	for n in [25, 50, 75] {
		s.add(n).unwrap();
	}
	s.switch_state();

	assert_eq!(s.remove_smallest(), Ok(25));
	assert_eq!(s.element_count(), 2);
	assert!(!s.accepting_elements());
}

#[rstest]
fn add_fails_while_extracting(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	s.switch_state();

	assert_eq!(s.add(8), Err(SortinatorError::NotAccepting));
	assert_eq!(s.element_count(), 0);
	assert!(!s.accepting_elements());
}

#[rstest]
fn remove_fails_on_fresh_instance(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	assert_eq!(s.remove_smallest(), Err(SortinatorError::Empty));
	assert!(s.accepting_elements());
}

#[rstest]
fn remove_fails_when_drained(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	s.add(1).unwrap();
	s.switch_state();
	s.remove_smallest().unwrap();

	assert_eq!(s.remove_smallest(), Err(SortinatorError::Empty));
}

#[rstest]
fn remove_fails_while_accepting(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	s.add(4).unwrap();
	s.add(7).unwrap();
	s.add(0).unwrap();
	let before: Vec<_> = s.iter().copied().collect();

	assert_eq!(s.remove_smallest(), Err(SortinatorError::StillAccepting));
	assert_eq!(s.iter().copied().collect::<Vec<_>>(), before);
	assert_eq!(s.element_count(), 3);
}

#[rstest]
fn switch_state_toggles(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	s.add(1).unwrap();
	s.add(2).unwrap();
	s.add(45).unwrap();

	assert!(s.accepting_elements());
	s.switch_state();
	assert!(!s.accepting_elements());
	s.switch_state();
	assert!(s.accepting_elements());
	assert_eq!(s.element_count(), 3);
}

#[rstest]
fn element_count_tracks_adds_and_removals(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	s.add(1).unwrap();
	s.add(2).unwrap();
	s.add(3).unwrap();
	assert_eq!(s.element_count(), 3);

	s.switch_state();
	s.remove_smallest().unwrap();
	assert_eq!(s.element_count(), 2);
}

#[rstest]
fn clear_resets_from_any_phase(
	#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy,
	#[values(false, true)] extracting: bool,
) {
	let mut s = natural(strategy);
	s.add(1).unwrap();
	s.add(5).unwrap();
	s.add(8).unwrap();
	if extracting {
		s.switch_state();
	}
	s.clear();

	assert_eq!(s.iter().count(), 0);
	assert_eq!(s.element_count(), 0);
	assert!(s.accepting_elements());
	assert_eq!(s.add(2), Ok(()));
}

#[rstest]
fn custom_preorder(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = create_instance(strategy, Order::new(horse_order));
	s.add(Horse::new("Black", 8, 590)).unwrap();
	s.add(Horse::new("Brown", 9, 700)).unwrap();
	s.add(Horse::new("White", 7, 600)).unwrap();
	s.switch_state();

	assert_eq!(s.remove_smallest(), Ok(Horse::new("Black", 8, 590)));
}

#[rstest]
fn duplicates_all_come_back(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = create_instance(strategy, Order::by_key(|p: &(u8, u8)| p.0));
	let input = [(2, 0), (1, 1), (2, 2), (1, 3), (2, 4), (0, 5)];
	for p in input {
		s.add(p).unwrap();
	}
	s.switch_state();

	let out = extract_all(s.as_mut());
	assert!(out.is_sorted_by_key(|p| p.0));

	let mut tags: Vec<_> = out.iter().map(|p| p.1).collect();
	tags.sort_unstable();
	assert_eq!(tags, [0, 1, 2, 3, 4, 5]);
}

#[rstest]
fn order_cmp_is_the_construction_order(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let order = Order::<i32>::natural().reversed();
	let s = create_instance(strategy, order.clone());

	let returned = s.order_cmp();
	assert!(returned.ptr_eq(&order));
	assert_eq!(returned.compare(&1, &2), Ordering::Greater);
}

#[rstest]
fn iteration_is_restartable(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	for n in [5, -2, 9, 5] {
		s.add(n).unwrap();
	}

	let first: Vec<_> = s.iter().copied().collect();
	let second: Vec<_> = s.iter().copied().collect();
	assert_eq!(first, second);
	assert_eq!(s.iter().len(), s.element_count());

	let mut sorted = first.clone();
	sorted.sort_unstable();
	assert_eq!(sorted, [-2, 5, 5, 9]);
}

#[rstest]
fn phases_can_alternate(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	for n in [6, 2, 8] {
		s.add(n).unwrap();
	}
	s.switch_state();
	assert_eq!(s.remove_smallest(), Ok(2));

	s.switch_state();
	s.add(1).unwrap();
	s.add(7).unwrap();
	s.switch_state();

	assert_eq!(extract_all(s.as_mut()), [1, 6, 7, 8]);
}

#[rstest]
fn drain_sorted_switches_and_empties(#[values(Strategy::Eager, Strategy::Lazy, Strategy::Heap)] strategy: Strategy) {
	let mut s = natural(strategy);
	for n in [3, 1, 2] {
		s.add(n).unwrap();
	}

	assert_eq!(s.drain_sorted(), [1, 2, 3]);
	assert!(s.is_empty());
	assert!(!s.accepting_elements());
}
