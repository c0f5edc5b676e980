use smallvec::{Array, SmallVec};
use std::slice;

use crate::capability::{IndexableRemoval, NativePredicateRemove, OrderedBulkAppend};
use crate::Collection;

impl<A: Array> Collection<A::Item> for SmallVec<A>
where
    A::Item: PartialEq,
{
    type Iter<'a> = slice::Iter<'a, A::Item>
    where
        Self: 'a,
        A::Item: 'a;

    #[inline]
    fn add(&mut self, value: A::Item) {
        self.push(value)
    }

    fn remove_value(&mut self, value: &A::Item) -> bool {
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
        self.as_slice().iter()
    }

    fn as_ordered_append(&mut self) -> Option<&mut dyn OrderedBulkAppend<A::Item>> {
        Some(self)
    }

    fn as_indexable(&mut self) -> Option<&mut dyn IndexableRemoval<A::Item>> {
        Some(self)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<A::Item>> {
        Some(self)
    }
}

impl<A: Array> OrderedBulkAppend<A::Item> for SmallVec<A> {
    fn append_ordered(&mut self, values: &mut dyn Iterator<Item = A::Item>) {
        self.extend(values)
    }
}

impl<A: Array> IndexableRemoval<A::Item> for SmallVec<A> {
    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> A::Item {
        self.remove(index)
    }
}

impl<A: Array> NativePredicateRemove<A::Item> for SmallVec<A> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&A::Item) -> bool) -> usize {
        let before = self.len();
        self.retain(|value| !predicate(&*value));
        before - self.len()
    }
}
