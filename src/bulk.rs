use std::borrow::Borrow;

use log::trace;
use smallvec::SmallVec;

use crate::capability::IndexableRemoval;
use crate::Collection;

/// Buffer for elements selected before being removed by value. Most removals only match a handful
/// of elements, so keep the first few inline.
type Matches<T> = SmallVec<[T; 8]>;

/// Bulk operations available on every [`Collection`].
///
/// Each operation probes the collection for the richest capability it exposes and falls back to
/// single element operations otherwise. The result is the same whichever path is taken.
///
/// Predicates only ever see shared references to elements while the collection itself is
/// mutably borrowed, so a predicate cannot modify the collection it is filtering:
///
/// ```compile_fail
/// use bulk_ops::CollectionExt;
///
/// let mut values = vec![1, 2, 3];
/// values.remove_where(|x| {
///     values.push(*x);
///     false
/// });
/// ```
pub trait CollectionExt<T>: Collection<T> {
    /// Add every element of `values` in iteration order. Duplicates are kept unless the collection
    /// enforces uniqueness itself.
    ///
    /// ```rust
    /// use bulk_ops::CollectionExt;
    /// use std::collections::HashSet;
    ///
    /// let mut set: HashSet<i32> = HashSet::new();
    /// set.add_many([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    fn add_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();

        if let Some(target) = self.as_ordered_append() {
            trace!("Appending values with native ordered append");
            target.append_ordered(&mut values);
            return;
        }

        if let Some(target) = self.as_set_union() {
            trace!("Merging values with native set union");
            target.union_with(&mut values);
            return;
        }

        let mut added = 0usize;
        for value in values {
            self.add(value);
            added += 1;
        }
        trace!("Added {} values one at a time", added);
    }

    /// Remove one occurrence of each element of `values`, in order. Values which are not present
    /// are ignored, and a value requested twice removes up to two occurrences.
    fn remove_many<I, Q>(&mut self, values: I)
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
    {
        let mut requested = 0usize;
        let mut removed = 0usize;
        for value in values {
            requested += 1;
            if self.remove_value(value.borrow()) {
                removed += 1;
            }
        }
        trace!("Removed {} of {} requested values", removed, requested);
    }

    /// Remove every element matching `predicate` and return how many were removed.
    ///
    /// The predicate is evaluated exactly once for each element present when the call starts.
    /// Collections without a native predicate removal or positional access have their matches
    /// cloned into a temporary buffer and removed by value afterwards, hence the `T: Clone` bound.
    ///
    /// ```rust
    /// use bulk_ops::CollectionExt;
    ///
    /// let mut values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.remove_where(|x| x % 2 == 0), 2);
    /// assert_eq!(values, [1, 3, 5]);
    /// ```
    fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        if let Some(target) = self.as_predicate_remove() {
            let removed = target.remove_matching(&mut predicate);
            trace!("Removed {} values with native predicate removal", removed);
            return removed;
        }

        if let Some(target) = self.as_indexable() {
            return remove_positions_rev(target, |value, _| predicate(value));
        }

        let matches: Matches<T> = self
            .elements()
            .filter(|&value| predicate(value))
            .cloned()
            .collect();
        remove_snapshot(self, matches)
    }

    /// Same as [`CollectionExt::remove_where`], but the predicate also receives the zero based
    /// position of each element in iteration order as it was when the call started.
    ///
    /// ```rust
    /// use bulk_ops::CollectionExt;
    ///
    /// let mut values = vec![10, 20, 30, 40];
    /// assert_eq!(values.remove_where_indexed(|_, index| index % 2 == 1), 2);
    /// assert_eq!(values, [10, 30]);
    /// ```
    fn remove_where_indexed<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T, usize) -> bool,
        T: Clone,
    {
        if let Some(target) = self.as_indexable() {
            return remove_positions_rev(target, predicate);
        }

        let matches: Matches<T> = self
            .elements()
            .enumerate()
            .filter(|&(index, value)| predicate(value, index))
            .map(|(_, value)| value.clone())
            .collect();
        remove_snapshot(self, matches)
    }
}

impl<T, C: Collection<T> + ?Sized> CollectionExt<T> for C {}

/// Walks the collection from the last position to the first, removing matches as they are found.
/// Removing at `index` only shifts positions after `index`, none of which are visited again, so
/// every element is tested against its original position.
fn remove_positions_rev<T, F>(target: &mut dyn IndexableRemoval<T>, mut predicate: F) -> usize
where
    F: FnMut(&T, usize) -> bool,
{
    let mut removed = 0usize;
    for index in (0..target.len()).rev() {
        let matched = match target.get(index) {
            Some(value) => predicate(value, index),
            None => false,
        };

        if matched {
            target.remove_at(index);
            removed += 1;
        }
    }

    trace!("Removed {} values by position", removed);
    removed
}

/// Removes a previously selected set of elements by value and reports how many actually left the
/// collection.
fn remove_snapshot<T, C>(collection: &mut C, matches: Matches<T>) -> usize
where
    C: Collection<T> + ?Sized,
{
    let before = collection.count();
    collection.remove_many(matches);
    let removed = before - collection.count();
    trace!("Removed {} values from a snapshot", removed);
    removed
}
