use crate::capability::{IndexableRemoval, NativePredicateRemove, OrderedBulkAppend, SetUnion};
use crate::{Collection, CollectionExt};
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::slice;

/// Which capabilities a [`Probe`] should expose.
#[derive(Debug, Default, Copy, Clone)]
struct Caps {
    ordered_append: bool,
    set_union: bool,
    indexable: bool,
    predicate_remove: bool,
}

impl Caps {
    /// Every combination of capabilities, indexed by a 4 bit mask.
    fn from_bits(bits: u8) -> Self {
        Caps {
            ordered_append: bits & 1 != 0,
            set_union: bits & 2 != 0,
            indexable: bits & 4 != 0,
            predicate_remove: bits & 8 != 0,
        }
    }
}

/// A vec backed collection which can switch each capability on or off and records every
/// operation performed on it.
#[derive(Debug, Default)]
struct Probe {
    items: Vec<i32>,
    caps: Caps,
    calls: Vec<&'static str>,
}

impl Probe {
    fn new(caps: Caps, items: &[i32]) -> Self {
        Probe {
            items: items.to_vec(),
            caps,
            calls: Vec::new(),
        }
    }
}

impl Collection<i32> for Probe {
    type Iter<'a> = slice::Iter<'a, i32>;

    fn add(&mut self, value: i32) {
        self.calls.push("add");
        if !(self.caps.set_union && self.items.contains(&value)) {
            self.items.push(value);
        }
    }

    fn remove_value(&mut self, value: &i32) -> bool {
        self.calls.push("remove_value");
        match self.items.iter().position(|x| x == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    fn as_ordered_append(&mut self) -> Option<&mut dyn OrderedBulkAppend<i32>> {
        if self.caps.ordered_append {
            Some(self)
        } else {
            None
        }
    }

    fn as_set_union(&mut self) -> Option<&mut dyn SetUnion<i32>> {
        if self.caps.set_union {
            Some(self)
        } else {
            None
        }
    }

    fn as_indexable(&mut self) -> Option<&mut dyn IndexableRemoval<i32>> {
        if self.caps.indexable {
            Some(self)
        } else {
            None
        }
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<i32>> {
        if self.caps.predicate_remove {
            Some(self)
        } else {
            None
        }
    }
}

impl OrderedBulkAppend<i32> for Probe {
    fn append_ordered(&mut self, values: &mut dyn Iterator<Item = i32>) {
        self.calls.push("append_ordered");
        self.items.extend(values);
    }
}

impl SetUnion<i32> for Probe {
    fn union_with(&mut self, values: &mut dyn Iterator<Item = i32>) {
        self.calls.push("union_with");
        for value in values {
            if !self.items.contains(&value) {
                self.items.push(value);
            }
        }
    }
}

impl IndexableRemoval<i32> for Probe {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&i32> {
        self.items.get(index)
    }

    fn remove_at(&mut self, index: usize) -> i32 {
        self.calls.push("remove_at");
        self.items.remove(index)
    }
}

impl NativePredicateRemove<i32> for Probe {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&i32) -> bool) -> usize {
        self.calls.push("remove_matching");
        let before = self.items.len();
        self.items.retain(|value| !predicate(value));
        before - self.items.len()
    }
}

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

#[test]
fn add_many_grows_by_input_len() {
    let input = [4, 4, 1, 9];

    let mut vec = vec![7];
    vec.add_many(input);
    assert_eq!(vec.len(), 5);

    let mut deque = VecDeque::from([7]);
    deque.add_many(input);
    assert_eq!(deque.len(), 5);

    let mut list = LinkedList::from([7]);
    list.add_many(input);
    assert_eq!(list.len(), 5);

    let mut small: SmallVec<[i32; 4]> = SmallVec::from_slice(&[7]);
    small.add_many(input);
    assert_eq!(small.len(), 5);

    for value in input {
        assert!(vec.contains(&value));
        assert!(deque.contains(&value));
        assert!(list.contains(&value));
        assert!(small.contains(&value));
    }
}

#[test]
fn add_many_preserves_order() {
    let mut vec: Vec<i32> = Vec::new();
    let mut list: LinkedList<i32> = LinkedList::new();
    vec.add_many([1, 2, 3]);
    list.add_many([1, 2, 3]);

    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn add_many_into_sets_drops_duplicates() {
    let mut hashed: HashSet<i32> = HashSet::new();
    hashed.add_many([1, 2, 2, 3]);
    assert_eq!(hashed.len(), 3);
    assert_eq!(hashed, HashSet::from([1, 2, 3]));

    let mut ordered: BTreeSet<i32> = BTreeSet::new();
    ordered.add_many([3, 2, 2, 1]);
    assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn add_many_accepts_lazy_sequences() {
    let mut vec: Vec<u64> = Vec::new();
    vec.add_many((1..=4).map(|x| x * x));
    assert_eq!(vec, [1, 4, 9, 16]);
}

#[test]
fn remove_many_ignores_absent_values() {
    let mut vec = vec![1, 2, 3];
    vec.remove_many([4, 5]);
    assert_eq!(vec, [1, 2, 3]);

    let mut list = LinkedList::from([1, 2, 3]);
    list.remove_many(&[9]);
    assert_eq!(list, LinkedList::from([1, 2, 3]));
}

#[test]
fn remove_many_removes_one_occurrence_per_request() {
    let mut vec = vec![1, 2, 3];
    vec.remove_many([2, 2]);
    assert_eq!(vec, [1, 3]);

    let mut dupes = vec![1, 2, 1, 2];
    dupes.remove_many([1]);
    assert_eq!(dupes, [2, 1, 2]);

    dupes.remove_many([2, 2]);
    assert_eq!(dupes, [1]);
}

#[test]
fn remove_many_accepts_borrowed_values() {
    let mut names: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
    let unwanted = vec![String::from("b")];
    names.remove_many(&unwanted);
    assert_eq!(names, ["a", "c"]);
    assert_eq!(unwanted.len(), 1);
}

#[test]
fn remove_where_even() {
    let mut vec = vec![1, 2, 3, 4, 5];
    assert_eq!(vec.remove_where(is_even), 2);
    assert_eq!(vec, [1, 3, 5]);

    let mut deque = VecDeque::from([1, 2, 3, 4, 5]);
    assert_eq!(deque.remove_where(is_even), 2);
    assert_eq!(deque, [1, 3, 5]);

    let mut list = LinkedList::from([1, 2, 3, 4, 5]);
    assert_eq!(list.remove_where(is_even), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);

    let mut set: BTreeSet<i32> = (1..=5).collect();
    assert_eq!(set.remove_where(is_even), 2);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
}

#[test]
fn remove_where_indexed_odd_positions() {
    let mut vec = vec![10, 20, 30, 40];
    assert_eq!(vec.remove_where_indexed(|_, index| index % 2 == 1), 2);
    assert_eq!(vec, [10, 30]);

    let mut list = LinkedList::from([10, 20, 30, 40]);
    assert_eq!(list.remove_where_indexed(|_, index| index % 2 == 1), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 30]);
}

#[test]
fn remove_where_indexed_sees_original_positions() {
    let mut vec = vec![0, 1, 2, 3, 4, 5];
    let mut seen = Vec::new();
    let removed = vec.remove_where_indexed(|value, index| {
        seen.push((*value, index));
        index < 3
    });

    assert_eq!(removed, 3);
    assert_eq!(vec, [3, 4, 5]);
    for (value, index) in seen {
        assert_eq!(value, index as i32);
    }
}

#[test]
fn remove_where_is_idempotent() {
    let mut vec = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(vec.remove_where(is_even), 3);
    assert_eq!(vec.remove_where(is_even), 0);
    assert_eq!(vec, [1, 3, 5]);

    let mut list = LinkedList::from([2, 4, 5]);
    assert_eq!(list.remove_where_indexed(|x, _| is_even(x)), 2);
    assert_eq!(list.remove_where_indexed(|x, _| is_even(x)), 0);
    assert_eq!(list, LinkedList::from([5]));
}

#[test]
fn remove_where_on_empty_collection() {
    let mut vec: Vec<i32> = Vec::new();
    assert_eq!(vec.remove_where(|_| true), 0);
    assert_eq!(vec.remove_where_indexed(|_, _| true), 0);

    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.remove_where(|_| true), 0);
}

#[test]
fn remove_where_with_duplicates_uses_collection_equality() {
    let mut list = LinkedList::from([1, 1, 2, 1]);
    assert_eq!(list.remove_where_indexed(|_, index| index == 1 || index == 3), 2);
    // Without positional removal the first equal elements go, not the matched ones.
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 1]);

    let mut vec = vec![1, 1, 2, 1];
    assert_eq!(vec.remove_where_indexed(|_, index| index == 1 || index == 3), 2);
    assert_eq!(vec, [1, 2]);
}

#[test]
fn dispatch_add_many() {
    let mut probe = Probe::new(Caps::default(), &[]);
    probe.add_many([1, 2, 3]);
    assert_eq!(probe.calls, ["add", "add", "add"]);
    assert_eq!(probe.items, [1, 2, 3]);

    let mut probe = Probe::new(Caps::from_bits(0b0011), &[]);
    probe.add_many([1, 2, 3]);
    assert_eq!(probe.calls, ["append_ordered"]);
    assert_eq!(probe.items, [1, 2, 3]);

    let mut probe = Probe::new(Caps::from_bits(0b0010), &[2]);
    probe.add_many([1, 2, 2, 3]);
    assert_eq!(probe.calls, ["union_with"]);
    assert_eq!(probe.items, [2, 1, 3]);
}

#[test]
fn dispatch_remove_where() {
    let items = [1, 2, 3, 4, 5];

    let mut probe = Probe::new(Caps::from_bits(0b1100), &items);
    assert_eq!(probe.remove_where(is_even), 2);
    assert_eq!(probe.calls, ["remove_matching"]);

    let mut probe = Probe::new(Caps::from_bits(0b0100), &items);
    assert_eq!(probe.remove_where(is_even), 2);
    assert_eq!(probe.calls, ["remove_at", "remove_at"]);

    let mut probe = Probe::new(Caps::default(), &items);
    assert_eq!(probe.remove_where(is_even), 2);
    assert_eq!(probe.calls, ["remove_value", "remove_value"]);
    assert_eq!(probe.items, [1, 3, 5]);
}

#[test]
fn dispatch_remove_where_indexed() {
    let items = [10, 20, 30, 40];

    let mut probe = Probe::new(Caps::from_bits(0b1000), &items);
    assert_eq!(probe.remove_where_indexed(|_, index| index % 2 == 1), 2);
    assert_eq!(probe.calls, ["remove_value", "remove_value"]);
    assert_eq!(probe.items, [10, 30]);

    let mut probe = Probe::new(Caps::from_bits(0b1100), &items);
    assert_eq!(probe.remove_where_indexed(|_, index| index % 2 == 1), 2);
    assert_eq!(probe.calls, ["remove_at", "remove_at"]);
    assert_eq!(probe.items, [10, 30]);
}

#[test]
fn every_path_agrees() {
    let items = [5, 8, 13, 21, 34, 55, 89];
    let is_large = |x: &i32| *x > 20;

    for bits in 0..16 {
        let caps = Caps::from_bits(bits);

        let mut by_value = Probe::new(caps, &items);
        let mut calls = 0;
        let removed = by_value.remove_where(|x| {
            calls += 1;
            is_large(x)
        });
        assert_eq!(calls, items.len(), "{:?}", caps);

        let mut by_index = Probe::new(caps, &items);
        let mut calls = 0;
        let removed_indexed = by_index.remove_where_indexed(|x, _| {
            calls += 1;
            is_large(x)
        });
        assert_eq!(calls, items.len(), "{:?}", caps);

        assert_eq!(removed, 4, "{:?}", caps);
        assert_eq!(removed, removed_indexed, "{:?}", caps);
        assert_eq!(by_value.items, [5, 8, 13], "{:?}", caps);
        assert_eq!(by_value.items, by_index.items, "{:?}", caps);

        let mut added = Probe::new(caps, &[]);
        added.add_many([1, 2, 3]);
        assert_eq!(added.items, [1, 2, 3], "{:?}", caps);
    }
}

#[test]
fn predicate_panics_propagate() {
    let mut vec = vec![1, 2, 3];
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        vec.remove_where(|x| {
            if *x == 2 {
                panic!("predicate failure");
            }
            false
        })
    }));
    assert!(result.is_err());
}
