//! [`Collection`](crate::Collection) implementations for common collection types. Each one
//! advertises the capabilities the underlying type supports natively.

mod smallvec_impls;
mod std_impls;
#[cfg(feature = "slab")]
mod slab_impls;

#[cold]
#[inline(never)]
fn removal_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("removal index (is {}) should be < len (is {})", index, len)
}
