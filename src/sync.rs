//! Bulk operations for collections shared behind a [`lock_api::Mutex`].
//!
//! The bulk operations themselves do no locking. When a collection must be shared between threads,
//! wrap it in a mutex built on any [`RawMutex`] and use [`LockedCollectionExt`], which holds the
//! lock for the full duration of each operation. Other threads never observe a half applied bulk
//! operation.
use std::borrow::Borrow;

use lock_api::{Mutex, RawMutex};
use log::trace;

use crate::{Collection, CollectionExt};

/// Lock-guarded counterparts of [`CollectionExt`]. Each call acquires the lock once.
pub trait LockedCollectionExt<T> {
    fn add_many<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>;

    fn remove_many<I, Q>(&self, values: I)
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>;

    fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
        T: Clone;

    fn remove_where_indexed<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T, usize) -> bool,
        T: Clone;
}

impl<T, R, C> LockedCollectionExt<T> for Mutex<R, C>
where
    R: RawMutex,
    C: Collection<T> + ?Sized,
{
    fn add_many<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut guard = self.lock();
        trace!("Acquired collection lock for add_many");
        CollectionExt::add_many(&mut *guard, values)
    }

    fn remove_many<I, Q>(&self, values: I)
    where
        I: IntoIterator<Item = Q>,
        Q: Borrow<T>,
    {
        let mut guard = self.lock();
        trace!("Acquired collection lock for remove_many");
        CollectionExt::remove_many(&mut *guard, values)
    }

    fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut guard = self.lock();
        trace!("Acquired collection lock for remove_where");
        CollectionExt::remove_where(&mut *guard, predicate)
    }

    fn remove_where_indexed<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T, usize) -> bool,
        T: Clone,
    {
        let mut guard = self.lock();
        trace!("Acquired collection lock for remove_where_indexed");
        CollectionExt::remove_where_indexed(&mut *guard, predicate)
    }
}
