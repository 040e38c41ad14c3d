//! Index arithmetic for an array-backed binary tree.
//!
//! The root lives at index `0`, and every other node's
//! relatives can be computed from its own index.

/// Returns the index of the parent of the node at `idx`.
///
/// The root has no parent, so `idx` must be greater than zero.
pub const fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

/// Returns the index of the left child of the node at `idx`.
pub const fn left(idx: usize) -> usize {
    2 * idx + 1
}

/// Returns the index of the right child of the node at `idx`.
pub const fn right(idx: usize) -> usize {
    2 * idx + 2
}
