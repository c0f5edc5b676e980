use std::iter::Map;

use slab::Slab;

use crate::capability::NativePredicateRemove;
use crate::Collection;

fn entry_value<T>((_, value): (usize, &T)) -> &T {
    value
}

/// Elements are visited in key order. Keys of removed entries are reused by later insertions, so
/// this order is only stable between mutations.
impl<T: PartialEq> Collection<T> for Slab<T> {
    type Iter<'a> = Map<slab::Iter<'a, T>, fn((usize, &T)) -> &T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn remove_value(&mut self, value: &T) -> bool {
        let key = self
            .iter()
            .find(|(_, entry)| *entry == value)
            .map(|(key, _)| key);

        match key {
            Some(key) => {
                self.remove(key);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> Self::Iter<'_> {
        self.iter().map(entry_value::<T> as fn((usize, &T)) -> &T)
    }

    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        Some(self)
    }
}

impl<T> NativePredicateRemove<T> for Slab<T> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize {
        let before = self.len();
        self.retain(|_, value| !predicate(&*value));
        before - self.len()
    }
}
