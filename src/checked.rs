//! Argument-checking entry points for the bulk operations.
//!
//! Borrowed collections and closures can never be null in Rust, so [`CollectionExt`] is
//! infallible. These functions are for callers that only hold optional handles, for example when
//! forwarding arguments from a dynamic or foreign caller. Every argument is validated before the
//! collection is touched, so a rejected call never leaves a partial mutation behind.
//!
//! ```rust
//! use bulk_ops::{checked, ErrorKind};
//!
//! let mut values = vec![1, 2, 3];
//! let err = checked::add_many(Some(&mut values), None::<Vec<i32>>).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(err.argument(), "values");
//! assert_eq!(values, [1, 2, 3]);
//! ```
use std::borrow::Borrow;

use log::debug;

use crate::error::Error;
use crate::{Collection, CollectionExt};

fn require<A>(argument: Option<A>, name: &'static str) -> Result<A, Error> {
    argument.ok_or_else(|| {
        let err = Error::missing(name);
        debug!("Rejecting bulk operation: {}", err);
        err
    })
}

/// Checked form of [`CollectionExt::add_many`].
pub fn add_many<C, T, I>(collection: Option<&mut C>, values: Option<I>) -> Result<(), Error>
where
    C: Collection<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let collection = require(collection, "collection")?;
    let values = require(values, "values")?;
    collection.add_many(values);
    Ok(())
}

/// Checked form of [`CollectionExt::remove_many`].
pub fn remove_many<C, T, I, Q>(collection: Option<&mut C>, values: Option<I>) -> Result<(), Error>
where
    C: Collection<T> + ?Sized,
    I: IntoIterator<Item = Q>,
    Q: Borrow<T>,
{
    let collection = require(collection, "collection")?;
    let values = require(values, "values")?;
    collection.remove_many(values);
    Ok(())
}

/// Checked form of [`CollectionExt::remove_where`].
pub fn remove_where<C, T, F>(collection: Option<&mut C>, predicate: Option<F>) -> Result<usize, Error>
where
    C: Collection<T> + ?Sized,
    F: FnMut(&T) -> bool,
    T: Clone,
{
    let collection = require(collection, "collection")?;
    let predicate = require(predicate, "predicate")?;
    Ok(collection.remove_where(predicate))
}

/// Checked form of [`CollectionExt::remove_where_indexed`].
pub fn remove_where_indexed<C, T, F>(
    collection: Option<&mut C>,
    predicate: Option<F>,
) -> Result<usize, Error>
where
    C: Collection<T> + ?Sized,
    F: FnMut(&T, usize) -> bool,
    T: Clone,
{
    let collection = require(collection, "collection")?;
    let predicate = require(predicate, "predicate")?;
    Ok(collection.remove_where_indexed(predicate))
}
