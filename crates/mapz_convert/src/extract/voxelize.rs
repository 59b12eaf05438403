//! Fine voxelization: half-space sampling at maximum tree depth.
//!
//! Every brush is sampled on the finest leaf lattice; a cell is solid iff
//! its center point lies on the non-positive side of every brush plane.
//! The resulting maximum-depth leaves are meant to be coalesced back into
//! larger cubes by the octree merger.

use glam::DVec3;

use crate::config::ConvertConfig;
use crate::geometry::Brush;

use super::Leaf;

pub fn voxelize_leaves(brushes: &[Brush], offset: [i32; 3], config: &ConvertConfig) -> Vec<Leaf> {
  let step = config.cell_size(config.max_depth);
  let mut leaves = Vec::new();

  for brush in brushes {
    let Some(bounds) = brush.bounds() else {
      continue;
    };
    // Snap the offset bounds outward onto the sampling lattice.
    let lo: [i32; 3] =
      std::array::from_fn(|axis| (bounds.min[axis] + offset[axis]).div_euclid(step) * step);
    let hi: [i32; 3] = std::array::from_fn(|axis| {
      (bounds.max[axis] + offset[axis] + step - 1).div_euclid(step) * step
    });

    let mut x = lo[0];
    while x < hi[0] {
      let mut y = lo[1];
      while y < hi[1] {
        let mut z = lo[2];
        while z < hi[2] {
          if in_world(x, y, z, config) {
            // Test the cell center back in brush coordinates.
            let center = DVec3::new(
              (x - offset[0]) as f64 + step as f64 / 2.0,
              (y - offset[1]) as f64 + step as f64 / 2.0,
              (z - offset[2]) as f64 + step as f64 / 2.0,
            );
            if brush.contains_point(center) {
              leaves.push(Leaf::full_cube(
                config.max_depth,
                x / step,
                y / step,
                z / step,
                brush.textures().clone(),
              ));
            }
          }
          z += step;
        }
        y += step;
      }
      x += step;
    }
  }
  leaves
}

/// Cells outside the world cube are skipped rather than wrapped.
fn in_world(x: i32, y: i32, z: i32, config: &ConvertConfig) -> bool {
  let world = config.world_size;
  (0..world).contains(&x) && (0..world).contains(&y) && (0..world).contains(&z)
}

#[cfg(test)]
#[path = "voxelize_test.rs"]
mod voxelize_test;
