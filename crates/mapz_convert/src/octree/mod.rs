//! Sparse octree construction, bottom-up merging, and binary encoding.

pub mod encode;
pub mod tree;

pub use encode::encode_octree;
pub use tree::{Node, Octree};
