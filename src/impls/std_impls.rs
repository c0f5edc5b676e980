use std::collections::{btree_set, hash_set, linked_list, vec_deque};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::slice;

use crate::capability::{IndexableRemoval, NativePredicateRemove, OrderedBulkAppend, SetUnion};
use crate::impls::removal_out_of_bounds;
use crate::Collection;

impl<T: PartialEq> Collection<T> for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.push(value)
    }

    fn remove_value(&mut self, value: &T) -> bool {
        match self.iter().position(|x| x == value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn as_ordered_append(&mut self) -> Option<&mut dyn OrderedBulkAppend<T>> {
        Some(self)
    }

    fn as_indexable(&mut self) -> Option<&mut dyn IndexableRemoval<T>> {
        Some(self)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        Some(self)
    }
}

impl<T> OrderedBulkAppend<T> for Vec<T> {
    fn append_ordered(&mut self, values: &mut dyn Iterator<Item = T>) {
        self.extend(values)
    }
}

impl<T> IndexableRemoval<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
}

impl<T> NativePredicateRemove<T> for Vec<T> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|value| !predicate(value));
        before - self.len()
    }
}

impl<T: PartialEq> Collection<T> for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.push_back(value)
    }

    fn remove_value(&mut self, value: &T) -> bool {
        match self.iter().position(|x| x == value) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn as_ordered_append(&mut self) -> Option<&mut dyn OrderedBulkAppend<T>> {
        Some(self)
    }

    fn as_indexable(&mut self) -> Option<&mut dyn IndexableRemoval<T>> {
        Some(self)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        Some(self)
    }
}

impl<T> OrderedBulkAppend<T> for VecDeque<T> {
    fn append_ordered(&mut self, values: &mut dyn Iterator<Item = T>) {
        self.extend(values)
    }
}

impl<T> IndexableRemoval<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn remove_at(&mut self, index: usize) -> T {
        let len = VecDeque::len(self);
        self.remove(index)
            .unwrap_or_else(|| removal_out_of_bounds(index, len))
    }
}

impl<T> NativePredicateRemove<T> for VecDeque<T> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|value| !predicate(value));
        before - self.len()
    }
}

/// Linked lists expose no capabilities, every bulk operation goes through the single element
/// fallbacks.
impl<T: PartialEq> Collection<T> for LinkedList<T> {
    type Iter<'a> = linked_list::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.push_back(value)
    }

    fn remove_value(&mut self, value: &T) -> bool {
        let index = match self.iter().position(|x| x == value) {
            Some(index) => index,
            None => return false,
        };

        let mut tail = self.split_off(index);
        tail.pop_front();
        self.append(&mut tail);
        true
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection<T> for HashSet<T, S> {
    type Iter<'a> = hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    #[inline]
    fn remove_value(&mut self, value: &T) -> bool {
        self.remove(value)
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn as_set_union(&mut self) -> Option<&mut dyn SetUnion<T>> {
        Some(self)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        Some(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> SetUnion<T> for HashSet<T, S> {
    fn union_with(&mut self, values: &mut dyn Iterator<Item = T>) {
        self.extend(values)
    }
}

impl<T: Eq + Hash, S: BuildHasher> NativePredicateRemove<T> for HashSet<T, S> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|value| !predicate(value));
        before - self.len()
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    type Iter<'a> = btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    #[inline]
    fn remove_value(&mut self, value: &T) -> bool {
        self.remove(value)
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn as_set_union(&mut self) -> Option<&mut dyn SetUnion<T>> {
        Some(self)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        Some(self)
    }
}

impl<T: Ord> SetUnion<T> for BTreeSet<T> {
    fn union_with(&mut self, values: &mut dyn Iterator<Item = T>) {
        self.extend(values)
    }
}

impl<T: Ord> NativePredicateRemove<T> for BTreeSet<T> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|value| !predicate(value));
        before - self.len()
    }
}
