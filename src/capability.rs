//! Optional capabilities a [`Collection`](crate::Collection) may expose to unlock a faster path
//! for a bulk operation.
//!
//! A collection opts in by overriding the matching `as_*` accessor on
//! [`Collection`](crate::Collection). Every capability must behave exactly like the element by
//! element fallback it replaces; they only exist to avoid repeated work.
//!
//! The methods take `dyn` arguments so the capabilities stay object safe and the accessors can
//! hand out `&mut dyn Capability<T>`.

/// Appends a sequence to the end of the collection, preserving the order of the sequence.
pub trait OrderedBulkAppend<T> {
    fn append_ordered(&mut self, values: &mut dyn Iterator<Item = T>);
}

/// Merges a sequence into a collection with set semantics. Values already present are dropped.
pub trait SetUnion<T> {
    fn union_with(&mut self, values: &mut dyn Iterator<Item = T>);
}

/// Random access by position in iteration order.
///
/// Removing the element at `index` must shift every following element down by one position and
/// leave every preceding element where it was.
pub trait IndexableRemoval<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&T>;

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// May panic if `index >= self.len()`.
    fn remove_at(&mut self, index: usize) -> T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A native bulk removal driven by a predicate, such as `Vec::retain`.
///
/// Implementations must call `predicate` exactly once for every element present at the start of
/// the call and return how many elements were removed.
pub trait NativePredicateRemove<T> {
    fn remove_matching(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> usize;
}
