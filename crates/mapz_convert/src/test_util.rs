//! Shared helpers for unit tests.

use crate::classify::FacePolicy;
use crate::geometry::{Brush, Orientation, Plane};

/// Build the bounding plane for one face of an axis-aligned box, with the
/// points wound so the derived normal points outward.
pub fn face_plane(min: [i32; 3], max: [i32; 3], orientation: Orientation, texture: &str) -> Plane {
  let axis = orientation.axis();
  let coord = if orientation.is_positive() {
    max[axis]
  } else {
    min[axis]
  };
  let u_axis = (axis + 1) % 3;
  let v_axis = (axis + 2) % 3;

  let mut p0 = min;
  p0[axis] = coord;
  let mut p1 = p0;
  p1[u_axis] = max[u_axis];
  let mut p2 = p0;
  p2[v_axis] = max[v_axis];

  // e_u x e_v points along +axis; swap to flip for negative faces.
  let points = if orientation.is_positive() {
    [p0, p1, p2]
  } else {
    [p0, p2, p1]
  };
  Plane::new(points, texture)
}

/// Axis-aligned box brush with the same texture on all six faces,
/// finalized with the normal-dominant policy.
pub fn cube_brush(min: [i32; 3], max: [i32; 3], texture: &str) -> Brush {
  let mut brush = Brush::new();
  for orientation in Orientation::ALL {
    brush.add_plane(face_plane(min, max, orientation, texture));
  }
  brush.finalize(FacePolicy::NormalDominant);
  brush
}
