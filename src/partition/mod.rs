//! # Partition and ordering of input collections.
//!
//! Pure, total functions over any well-formed input collection, including the
//! empty one:
//! - [`natural_cmp`] - case-insensitive natural title order
//! - [`split_inputs`] - scope split plus per-group natural sort

mod natural;
mod split;

pub use natural::natural_cmp;
pub use split::split_inputs;
