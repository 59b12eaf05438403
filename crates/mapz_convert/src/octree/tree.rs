//! Caller-owned sparse octree with bottom-up leaf coalescing.
//!
//! The tree is an explicit context object: insertion, merging, and
//! encoding all operate on an [`Octree`] the caller owns, so several
//! independent conversions can run in one process.

use crate::extract::Leaf;

/// Octree node: empty space, a terminal leaf, or eight children.
///
/// A node is never a leaf and internal at the same time.
#[derive(Clone, Debug, Default)]
pub enum Node {
  #[default]
  Empty,
  Leaf(Leaf),
  Internal(Box<[Node; 8]>),
}

impl Node {
  /// Replace this node with eight empty children (discarding any previous
  /// occupant) and return them. No-op when already internal.
  fn make_internal(&mut self) -> &mut [Node; 8] {
    if !matches!(self, Node::Internal(_)) {
      *self = Node::Internal(Box::new(std::array::from_fn(|_| Node::Empty)));
    }
    match self {
      Node::Internal(children) => children,
      _ => unreachable!("node was just subdivided"),
    }
  }
}

/// Sparse 8-ary tree over the world cube.
pub struct Octree {
  root: Node,
  max_depth: u32,
}

impl Octree {
  pub fn new(max_depth: u32) -> Self {
    Self {
      root: Node::Empty,
      max_depth,
    }
  }

  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  pub fn root(&self) -> &Node {
    &self.root
  }

  /// Insert a leaf, creating internal nodes lazily along the path.
  ///
  /// The child index at level `L` interleaves one coordinate bit per
  /// axis: `x` into bit 0, `y` into bit 1, `z` into bit 2. Whatever
  /// occupied the target slot before is overwritten silently.
  pub fn insert(&mut self, leaf: Leaf) {
    let mut node = &mut self.root;
    for level in 0..leaf.depth {
      let shift = self.max_depth - 1 - level;
      let index = ((leaf.ix >> shift) & 1)
        | (((leaf.iy >> shift) & 1) << 1)
        | (((leaf.iz >> shift) & 1) << 2);
      node = &mut node.make_internal()[index as usize];
    }
    *node = Node::Leaf(leaf);
  }

  /// Coalesce identical full octets bottom-up, in place.
  ///
  /// A node whose eight children are all leaves with identical texture
  /// maps collapses into one leaf a level shallower, with halved
  /// coordinates and full-cube deformation. Running merge again on an
  /// already merged tree changes nothing.
  pub fn merge(&mut self) {
    merge_node(&mut self.root);
  }
}

fn merge_node(node: &mut Node) {
  let Node::Internal(children) = node else {
    return;
  };
  for child in children.iter_mut() {
    merge_node(child);
  }
  if let Some(merged) = try_collapse(children) {
    *node = Node::Leaf(merged);
  }
}

fn try_collapse(children: &[Node; 8]) -> Option<Leaf> {
  let Node::Leaf(first) = &children[0] else {
    return None;
  };
  for child in &children[1..] {
    match child {
      Node::Leaf(leaf) if leaf.textures == first.textures => {}
      _ => return None,
    }
  }
  if first.depth == 0 {
    return None;
  }
  Some(Leaf::full_cube(
    first.depth - 1,
    first.ix.div_euclid(2),
    first.iy.div_euclid(2),
    first.iz.div_euclid(2),
    first.textures.clone(),
  ))
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
