//! Brush geometry primitives: planes, bounds, oriented face textures.
//!
//! A brush is a convex polyhedron described by bounding half-spaces. Plane
//! normals are kept unnormalized (integer cross products); only their signs
//! and relative magnitudes are ever compared, never distances.

use glam::DVec3;
use smallvec::SmallVec;

use crate::classify::{classify, FacePolicy};

/// One of the six axis-aligned cube sides, in encoding order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
  XNeg = 0,
  XPos = 1,
  YNeg = 2,
  YPos = 3,
  ZNeg = 4,
  ZPos = 5,
}

impl Orientation {
  /// All six orientations in the fixed binary encoding order.
  pub const ALL: [Orientation; 6] = [
    Orientation::XNeg,
    Orientation::XPos,
    Orientation::YNeg,
    Orientation::YPos,
    Orientation::ZNeg,
    Orientation::ZPos,
  ];

  /// Stable slot index 0..6.
  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// Axis this side faces along: 0 = X, 1 = Y, 2 = Z.
  #[inline]
  pub fn axis(self) -> usize {
    self.index() / 2
  }

  /// Whether this is the positive-facing side of its axis.
  #[inline]
  pub fn is_positive(self) -> bool {
    self.index() % 2 == 1
  }

  /// Build an orientation from axis and sign.
  #[inline]
  pub fn from_axis(axis: usize, positive: bool) -> Self {
    Orientation::ALL[axis * 2 + usize::from(positive)]
  }
}

/// A brush bounding plane: three integer points plus a face texture.
///
/// The points wind so that the derived normal points out of the brush.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
  pub points: [[i32; 3]; 3],
  pub texture: String,
}

impl Plane {
  pub fn new(points: [[i32; 3]; 3], texture: impl Into<String>) -> Self {
    Self {
      points,
      texture: texture.into(),
    }
  }

  /// Unnormalized plane normal: cross product of the two edge vectors
  /// leaving the first point.
  pub fn normal(&self) -> [i64; 3] {
    let [p0, p1, p2] = self.points;
    let v1 = [
      (p1[0] - p0[0]) as i64,
      (p1[1] - p0[1]) as i64,
      (p1[2] - p0[2]) as i64,
    ];
    let v2 = [
      (p2[0] - p0[0]) as i64,
      (p2[1] - p0[1]) as i64,
      (p2[2] - p0[2]) as i64,
    ];
    [
      v1[1] * v2[2] - v1[2] * v2[1],
      v1[2] * v2[0] - v1[0] * v2[2],
      v1[0] * v2[1] - v1[1] * v2[0],
    ]
  }

  /// Signed side value for a sample point: non-positive means the point is
  /// on the solid side of this half-space.
  pub fn side(&self, point: DVec3) -> f64 {
    let n = self.normal();
    let p0 = self.points[0];
    (point.x - p0[0] as f64) * n[0] as f64
      + (point.y - p0[1] as f64) * n[1] as f64
      + (point.z - p0[2] as f64) * n[2] as f64
  }
}

/// Integer axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
  pub min: [i32; 3],
  pub max: [i32; 3],
}

impl Aabb {
  pub fn from_point(point: [i32; 3]) -> Self {
    Self {
      min: point,
      max: point,
    }
  }

  /// Widen to include a point. Bounds never shrink.
  pub fn expand(&mut self, point: [i32; 3]) {
    for axis in 0..3 {
      self.min[axis] = self.min[axis].min(point[axis]);
      self.max[axis] = self.max[axis].max(point[axis]);
    }
  }

  /// Widen to include another box.
  pub fn union(&mut self, other: &Aabb) {
    self.expand(other.min);
    self.expand(other.max);
  }

  /// Edge length along one axis.
  #[inline]
  pub fn extent(&self, axis: usize) -> i32 {
    self.max[axis] - self.min[axis]
  }
}

/// Orientation -> texture map, stored as a fixed six-slot array so that
/// equality checks and iteration order stay deterministic for merging and
/// encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTextures {
  slots: [Option<String>; 6],
}

impl FaceTextures {
  pub fn new() -> Self {
    Self::default()
  }

  /// Map with the same texture on all six sides.
  pub fn fill(texture: &str) -> Self {
    Self {
      slots: std::array::from_fn(|_| Some(texture.to_string())),
    }
  }

  pub fn set(&mut self, orientation: Orientation, texture: impl Into<String>) {
    self.slots[orientation.index()] = Some(texture.into());
  }

  pub fn get(&self, orientation: Orientation) -> Option<&str> {
    self.slots[orientation.index()].as_deref()
  }

  /// True when no side carries a texture (encoded as air).
  pub fn is_empty(&self) -> bool {
    self.slots.iter().all(|slot| slot.is_none())
  }

  /// Number of populated sides.
  pub fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  /// Populated entries in encoding order.
  pub fn iter(&self) -> impl Iterator<Item = (Orientation, &str)> {
    Orientation::ALL
      .into_iter()
      .filter_map(|orientation| self.get(orientation).map(|texture| (orientation, texture)))
  }
}

/// A convex brush: ordered bounding planes, accumulated bounds, and the
/// orientation texture map computed at finalization.
#[derive(Clone, Debug, Default)]
pub struct Brush {
  planes: SmallVec<[Plane; 6]>,
  bounds: Option<Aabb>,
  textures: FaceTextures,
}

impl Brush {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a plane, widening the bounds by its three points.
  pub fn add_plane(&mut self, plane: Plane) {
    for point in plane.points {
      match &mut self.bounds {
        Some(bounds) => bounds.expand(point),
        None => self.bounds = Some(Aabb::from_point(point)),
      }
    }
    self.planes.push(plane);
  }

  /// Compute the orientation texture map from the accumulated planes and
  /// bounds. Called once when the closing brace of the brush is reached.
  pub fn finalize(&mut self, policy: FacePolicy) {
    self.textures = classify(policy, &self.planes, self.bounds);
  }

  pub fn planes(&self) -> &[Plane] {
    &self.planes
  }

  pub fn bounds(&self) -> Option<Aabb> {
    self.bounds
  }

  pub fn textures(&self) -> &FaceTextures {
    &self.textures
  }

  /// Convex half-space intersection test: the point is solid iff it lies
  /// on the non-positive side of every plane.
  pub fn contains_point(&self, point: DVec3) -> bool {
    self.planes.iter().all(|plane| plane.side(point) <= 0.0)
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
