//! Leaf extraction strategies.
//!
//! Each strategy turns the brush list into uniform [`Leaf`] records; the
//! octree builder, merger, and encoder never care which strategy produced
//! them.

mod depth_select;
mod surface;
mod voxelize;

pub use depth_select::depth_select_leaves;
pub use surface::surface_leaves;
pub use voxelize::voxelize_leaves;

use tracing::debug;

use crate::config::ConvertConfig;
use crate::geometry::{Brush, FaceTextures};

/// Uniform leaf record produced by every extraction strategy.
///
/// Octant coordinates are valid only in `[0, 2^depth)`. The per-axis
/// deformation extents describe, in eighths of the cell, where the solid
/// region begins and ends; `(0, 8)` on every axis is a full cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
  pub depth: u32,
  pub ix: i32,
  pub iy: i32,
  pub iz: i32,
  pub start: [u8; 3],
  pub end: [u8; 3],
  pub textures: FaceTextures,
}

impl Leaf {
  /// A non-deformed leaf filling its whole cell.
  pub fn full_cube(depth: u32, ix: i32, iy: i32, iz: i32, textures: FaceTextures) -> Self {
    Self {
      depth,
      ix,
      iy,
      iz,
      start: [0; 3],
      end: [8; 3],
      textures,
    }
  }

  /// True when the deformation extents cover the whole cell.
  pub fn is_full_cube(&self) -> bool {
    self.start == [0; 3] && self.end == [8; 3]
  }
}

/// Strategy selecting how brushes become leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExtractStrategy {
  /// Dense grid, one voxel layer per oriented brush face, plus a solid
  /// base floor. Brush interiors are never filled.
  SurfaceLayer,

  /// Half-space sampling at maximum tree depth; the octree merger
  /// coalesces identical octets afterwards.
  FineVoxelize,

  /// One leaf per brush at the coarsest grid-aligned depth, using edge
  /// deformation for sub-cell extents.
  DepthSelect,
}

/// Run the chosen strategy over the brush list.
///
/// `offset` translates brush coordinates into world-cube coordinates and
/// is usually [`crate::parse::centering_offset`].
pub fn extract(
  strategy: ExtractStrategy,
  brushes: &[Brush],
  offset: [i32; 3],
  config: &ConvertConfig,
) -> Vec<Leaf> {
  let leaves = match strategy {
    ExtractStrategy::SurfaceLayer => surface_leaves(brushes, offset, config),
    ExtractStrategy::FineVoxelize => voxelize_leaves(brushes, offset, config),
    ExtractStrategy::DepthSelect => depth_select_leaves(brushes, offset, config),
  };
  debug!(
    ?strategy,
    brushes = brushes.len(),
    leaves = leaves.len(),
    "extracted leaves"
  );
  leaves
}
