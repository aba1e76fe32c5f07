//! # Sparse Sets
//!
//! An insertion-ordered set of instruction pointers with O(1) `insert`,
//! `contains` and `clear`.

use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::compile::InstPtr;

/// A set of [`InstPtr`] values below a fixed capacity.
///
/// Iteration yields members in insertion order, which is thread priority
/// order in the [`PikeVm`](crate::exec::PikeVm).
#[derive(Debug, Clone, Default)]
pub struct SparseSet {
    dense: Vec<InstPtr>,
    sparse: Vec<usize>,
    len: usize,
}

impl SparseSet {
    /// Create an empty set holding values in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            dense: vec![0; capacity],
            sparse: vec![0; capacity],
            len: 0,
        }
    }

    /// Empty the set and change its capacity.
    pub fn resize(
        &mut self,
        capacity: usize,
    ) {
        self.clear();
        self.dense.resize(capacity, 0);
        self.sparse.resize(capacity, 0);
    }

    /// The exclusive upper bound on members.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Is `value` a member?
    #[inline]
    pub fn contains(
        &self,
        value: InstPtr,
    ) -> bool {
        let index = self.sparse[value];
        index < self.len && self.dense[index] == value
    }

    /// Insert `value`; returns `false` if it was already present.
    #[inline]
    pub fn insert(
        &mut self,
        value: InstPtr,
    ) -> bool {
        if self.contains(value) {
            return false;
        }
        debug_assert!(self.len < self.capacity());
        self.dense[self.len] = value;
        self.sparse[value] = self.len;
        self.len += 1;
        true
    }

    /// Remove every member.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Members in insertion order.
    pub fn as_slice(&self) -> &[InstPtr] {
        &self.dense[..self.len]
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = InstPtr> + '_ {
        self.as_slice().iter().copied()
    }
}
