//! Depth-selection extraction: one leaf per brush at the coarsest depth
//! whose lattice can express the brush exactly.
//!
//! A depth qualifies when every offset bound is divisible by one eighth of
//! the cell size and the brush fits inside a single cell. The leaf's edge
//! deformation then records where the brush starts and ends inside that
//! cell. Brushes aligned to no depth fall back to a clamped maximum-depth
//! leaf.

use crate::config::ConvertConfig;
use crate::geometry::Brush;

use super::Leaf;

pub fn depth_select_leaves(
  brushes: &[Brush],
  offset: [i32; 3],
  config: &ConvertConfig,
) -> Vec<Leaf> {
  let mut leaves = Vec::new();
  for brush in brushes {
    let Some(bounds) = brush.bounds() else {
      continue;
    };
    let lo: [i32; 3] = std::array::from_fn(|axis| bounds.min[axis] + offset[axis]);
    let hi: [i32; 3] = std::array::from_fn(|axis| bounds.max[axis] + offset[axis]);

    let depth = choose_depth(lo, hi, config);
    let size = config.cell_size(depth);
    let eighth = size / 8;
    let cell: [i32; 3] = std::array::from_fn(|axis| lo[axis].div_euclid(size));
    let start: [u8; 3] = std::array::from_fn(|axis| {
      edge_offset(lo[axis] - cell[axis] * size, eighth)
    });
    let end: [u8; 3] = std::array::from_fn(|axis| {
      edge_offset(hi[axis] - cell[axis] * size, eighth)
    });

    leaves.push(Leaf {
      depth,
      ix: cell[0],
      iy: cell[1],
      iz: cell[2],
      start,
      end,
      textures: brush.textures().clone(),
    });
  }
  leaves
}

/// Coarsest depth at which all six bounds sit on the eighth-of-a-cell
/// lattice and the brush spans a single cell. Falls back to the maximum
/// depth when nothing aligns.
fn choose_depth(lo: [i32; 3], hi: [i32; 3], config: &ConvertConfig) -> u32 {
  for depth in 0..=config.max_depth {
    let size = config.cell_size(depth);
    let eighth = size / 8;
    let divisible = (0..3).all(|axis| lo[axis] % eighth == 0 && hi[axis] % eighth == 0);
    let single_cell =
      (0..3).all(|axis| lo[axis].div_euclid(size) == (hi[axis] - 1).div_euclid(size));
    if divisible && single_cell {
      return depth;
    }
  }
  config.max_depth
}

/// Offset within the cell in eighths, rounded and clamped to [0, 8].
/// Clamping only engages on the maximum-depth fallback path.
fn edge_offset(units: i32, eighth: i32) -> u8 {
  (units as f64 / eighth as f64).round().clamp(0.0, 8.0) as u8
}

#[cfg(test)]
#[path = "depth_select_test.rs"]
mod depth_select_test;
