//! Face classification: assigning plane textures to the six cube sides.
//!
//! Two interchangeable policies. Normal-dominant matches the loose way
//! hand-edited maps texture angled faces; bounds-aligned only accepts
//! planes sitting exactly on a brush bound and drops everything else.

use crate::geometry::{Aabb, FaceTextures, Orientation, Plane};

/// Policy for mapping brush planes onto the six cube sides.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FacePolicy {
  /// Pick the axis with the greatest absolute normal component; the sign
  /// of that component selects the positive or negative side.
  NormalDominant,

  /// A plane qualifies for a side only when all three of its points share
  /// one coordinate on that axis and the coordinate equals the brush
  /// bound. Planes aligned to no bound are dropped.
  BoundsAligned,
}

/// Build the orientation texture map for a finalized brush.
pub fn classify(policy: FacePolicy, planes: &[Plane], bounds: Option<Aabb>) -> FaceTextures {
  match policy {
    FacePolicy::NormalDominant => normal_dominant(planes),
    FacePolicy::BoundsAligned => bounds_aligned(planes, bounds),
  }
}

fn normal_dominant(planes: &[Plane]) -> FaceTextures {
  let mut textures = FaceTextures::new();
  for plane in planes {
    let n = plane.normal();
    let (ax, ay, az) = (n[0].abs(), n[1].abs(), n[2].abs());
    let orientation = if ax >= ay && ax >= az {
      Orientation::from_axis(0, n[0] > 0)
    } else if ay >= ax && ay >= az {
      Orientation::from_axis(1, n[1] > 0)
    } else {
      Orientation::from_axis(2, n[2] > 0)
    };
    // When two planes resolve to the same side the later plane wins and
    // the earlier texture is lost. Kept as-is; see DESIGN.md.
    textures.set(orientation, plane.texture.clone());
  }
  textures
}

fn bounds_aligned(planes: &[Plane], bounds: Option<Aabb>) -> FaceTextures {
  let mut textures = FaceTextures::new();
  let Some(bounds) = bounds else {
    return textures;
  };
  for plane in planes {
    for axis in 0..3 {
      let coord = plane.points[0][axis];
      if plane.points[1][axis] != coord || plane.points[2][axis] != coord {
        continue;
      }
      if coord == bounds.min[axis] {
        textures.set(Orientation::from_axis(axis, false), plane.texture.clone());
      } else if coord == bounds.max[axis] {
        textures.set(Orientation::from_axis(axis, true), plane.texture.clone());
      }
    }
  }
  textures
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
