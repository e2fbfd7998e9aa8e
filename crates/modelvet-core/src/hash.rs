//! 64-bit hashing used by the equality-contract checks.
//!
//! All descriptor and checker hashing goes through the same function so that
//! "equal instances share a hash" is comparable across call sites.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hash a value with the default hasher.
pub fn hash64_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The value produced by hashing no input at all.
///
/// A `Hash` implementation that never writes to the hasher collapses every
/// instance to this value; the hash-sanity check compares against it.
pub fn empty_input_hash() -> u64 {
    DefaultHasher::new().finish()
}
