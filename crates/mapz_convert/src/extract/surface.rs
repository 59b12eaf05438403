//! Single-layer surface extraction over a dense voxel grid.
//!
//! For every populated orientation of a brush, only the one layer of grid
//! cells coincident with that face is marked solid; interiors stay empty
//! so rooms do not fill in. A solid base of fixed thickness is always
//! stamped across the lowest layers to keep the engine from culling the
//! interior faces of cells that touch it.

use crate::config::ConvertConfig;
use crate::geometry::{Brush, FaceTextures};

use super::Leaf;

#[derive(Clone, Default)]
struct Cell {
  solid: bool,
  faces: FaceTextures,
}

pub fn surface_leaves(brushes: &[Brush], offset: [i32; 3], config: &ConvertConfig) -> Vec<Leaf> {
  let n = config.grid_size();
  let size = n as usize;
  let mut grid = vec![Cell::default(); size * size * size];
  let cell_index = |x: i32, y: i32, z: i32| (z as usize * size + y as usize) * size + x as usize;

  for brush in brushes {
    let Some(bounds) = brush.bounds() else {
      continue;
    };
    // Inclusive cell range covered by the brush, clamped into the grid.
    let lo: [i32; 3] = std::array::from_fn(|axis| {
      (bounds.min[axis] + offset[axis])
        .div_euclid(config.voxel_size)
        .clamp(0, n - 1)
    });
    let hi: [i32; 3] = std::array::from_fn(|axis| {
      (bounds.max[axis] + offset[axis] - 1)
        .div_euclid(config.voxel_size)
        .clamp(0, n - 1)
    });

    for (orientation, texture) in brush.textures().iter() {
      let axis = orientation.axis();
      let layer = if orientation.is_positive() {
        hi[axis]
      } else {
        lo[axis]
      };
      let u_axis = (axis + 1) % 3;
      let v_axis = (axis + 2) % 3;
      for u in lo[u_axis]..=hi[u_axis] {
        for v in lo[v_axis]..=hi[v_axis] {
          let mut at = [0i32; 3];
          at[axis] = layer;
          at[u_axis] = u;
          at[v_axis] = v;
          let cell = &mut grid[cell_index(at[0], at[1], at[2])];
          cell.solid = true;
          cell.faces.set(orientation, texture);
        }
      }
    }
  }

  // Unconditional solid base across the lowest Z layers.
  let base_layers = (config.base_thickness / config.voxel_size).min(n);
  for z in 0..base_layers {
    for y in 0..n {
      for x in 0..n {
        let cell = &mut grid[cell_index(x, y, z)];
        cell.solid = true;
        cell.faces = FaceTextures::fill(&config.base_texture);
      }
    }
  }

  // Solid cells become full-cube leaves on the finest lattice.
  let mut leaves = Vec::new();
  for z in 0..n {
    for y in 0..n {
      for x in 0..n {
        let cell = &grid[cell_index(x, y, z)];
        if cell.solid {
          leaves.push(Leaf::full_cube(
            config.max_depth,
            x,
            y,
            z,
            cell.faces.clone(),
          ));
        }
      }
    }
  }
  leaves
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;
