//! Depth-first binary node encoder.
//!
//! The wire format is a structurally full 8-ary tree written preorder,
//! root first, regardless of in-memory sparsity:
//!
//! - internal node: one `0x00` byte, then the eight child blocks in index
//!   order; logically absent children are written as explicit empty leaves
//! - full-cube leaf: type byte `1` (air) or `2` (solid), then six
//!   little-endian `u16` texture slot indices in orientation order
//! - deformed leaf: type byte `3`, a 12-byte edge array (four repeated
//!   `start | end << 4` bytes per axis), then the six slot indices
//!
//! Texture names absent from the registry resolve to the sky slot.

use crate::geometry::Orientation;
use crate::registry::{TextureRegistry, SKY_SLOT};

use super::{Node, Octree};

const TYPE_INTERNAL: u8 = 0;
const TYPE_EMPTY: u8 = 1;
const TYPE_SOLID: u8 = 2;
const TYPE_DEFORMED: u8 = 3;

/// Serialize the whole tree into the engine's node byte stream.
pub fn encode_octree(tree: &Octree, registry: &TextureRegistry) -> Vec<u8> {
  let mut out = Vec::new();
  encode_node(tree.root(), registry, &mut out);
  out
}

fn encode_node(node: &Node, registry: &TextureRegistry, out: &mut Vec<u8>) {
  match node {
    Node::Empty => encode_empty(out),
    Node::Leaf(leaf) => encode_leaf(leaf, registry, out),
    Node::Internal(children) => {
      out.push(TYPE_INTERNAL);
      for child in children.iter() {
        encode_node(child, registry, out);
      }
    }
  }
}

fn encode_empty(out: &mut Vec<u8>) {
  out.push(TYPE_EMPTY);
  for _ in 0..6 {
    out.extend_from_slice(&SKY_SLOT.to_le_bytes());
  }
}

fn encode_leaf(leaf: &crate::extract::Leaf, registry: &TextureRegistry, out: &mut Vec<u8>) {
  if leaf.is_full_cube() {
    out.push(if leaf.textures.is_empty() {
      TYPE_EMPTY
    } else {
      TYPE_SOLID
    });
  } else {
    out.push(TYPE_DEFORMED);
    for axis in 0..3 {
      let packed = leaf.start[axis] | (leaf.end[axis] << 4);
      out.extend_from_slice(&[packed; 4]);
    }
  }
  for orientation in Orientation::ALL {
    let slot = match leaf.textures.get(orientation) {
      Some(name) => registry.slot_or_sky(name),
      None => SKY_SLOT,
    };
    out.extend_from_slice(&slot.to_le_bytes());
  }
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;
