//! Bulk operations (add many, remove many, remove where) for any mutable collection.
//!
//! The crate is split between a minimal [`Collection`] trait describing what every collection must
//! support, a set of optional [`capability`] traits a collection can expose to get a faster code
//! path, and the [`CollectionExt`] extension trait which provides the bulk operations themselves.
//!
//! ```rust
//! use bulk_ops::CollectionExt;
//!
//! let mut values = vec![1, 2, 3];
//! values.add_many([4, 5]);
//! values.remove_many([&2]);
//!
//! let removed = values.remove_where(|x| x % 2 == 1);
//! assert_eq!(removed, 3);
//! assert_eq!(values, [4]);
//! ```
//!
//! Implementations are provided for the standard library collections, `SmallVec`, and (behind the
//! `slab` feature) `Slab`. Enabling `lock_api` adds [`sync::LockedCollectionExt`] for collections
//! held behind a `lock_api::Mutex`.
use crate::capability::{IndexableRemoval, NativePredicateRemove, OrderedBulkAppend, SetUnion};

pub mod bulk;
pub mod capability;
pub mod checked;
pub mod error;
mod impls;
#[cfg(feature = "lock_api")]
pub mod sync;

pub use bulk::CollectionExt;
pub use error::{Error, ErrorKind};

#[cfg(test)]
mod tests;

/// A mutable collection of `T`. Only the operations every collection can support are required;
/// richer behavior is advertised through the `as_*` accessors, which default to `None`.
///
/// Removal equality is whatever the collection itself uses (`PartialEq` for sequences, `Hash + Eq`
/// for hash sets, `Ord` for B-tree sets). This trait does not redefine it.
pub trait Collection<T> {
    /// Iterator over the elements in a stable order. The order may only change when the
    /// collection is mutated.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Add a single element. Collections with set semantics may discard it if already present.
    fn add(&mut self, value: T);

    /// Remove a single occurrence of `value`. Returns `true` if an element was found and removed.
    fn remove_value(&mut self, value: &T) -> bool;

    fn count(&self) -> usize;

    fn elements(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[inline(always)]
    fn as_ordered_append(&mut self) -> Option<&mut dyn OrderedBulkAppend<T>> {
        None
    }

    #[inline(always)]
    fn as_set_union(&mut self) -> Option<&mut dyn SetUnion<T>> {
        None
    }

    #[inline(always)]
    fn as_indexable(&mut self) -> Option<&mut dyn IndexableRemoval<T>> {
        None
    }

    #[inline(always)]
    fn as_predicate_remove(&mut self) -> Option<&mut dyn NativePredicateRemove<T>> {
        None
    }
}
