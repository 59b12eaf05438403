//! Valve-220 map text parser.
//!
//! Single pass over the map text with three states: outside the world
//! entity, inside it, and inside a brush block. Parsing stops at the
//! comment line that marks the start of discrete entities. The parse is
//! deliberately lenient: malformed plane lines are dropped silently and
//! there is no partial-brush rollback.

use tracing::debug;

use crate::classify::FacePolicy;
use crate::config::ConvertConfig;
use crate::geometry::{Aabb, Brush, Plane};

/// Key/value line identifying the world-geometry entity.
const WORLD_CLASSNAME: &str = "\"classname\" \"worldspawn\"";

/// Comment marking the end of world geometry and the start of discrete
/// entities.
const ENTITY_SENTINEL: &str = "// entity 1";

/// Parse the world-geometry brushes out of map text.
///
/// Each brush is finalized with the given face policy as its closing
/// brace is reached.
pub fn parse_world(text: &str, policy: FacePolicy) -> Vec<Brush> {
  let mut brushes = Vec::new();
  let mut current: Option<Brush> = None;
  let mut in_world = false;

  for line in text.lines() {
    let line = line.trim();
    if line.starts_with(WORLD_CLASSNAME) {
      in_world = true;
      continue;
    }
    if !in_world {
      continue;
    }
    if line.starts_with(ENTITY_SENTINEL) {
      break;
    }

    if line == "{" {
      current = Some(Brush::new());
    } else if line == "}" {
      if let Some(mut brush) = current.take() {
        brush.finalize(policy);
        brushes.push(brush);
      }
    } else if let Some(brush) = current.as_mut() {
      if line.starts_with('(') {
        if let Some(plane) = parse_plane_line(line) {
          brush.add_plane(plane);
        }
      }
    }
  }

  debug!(brushes = brushes.len(), "parsed world geometry");
  brushes
}

/// Parse one plane line:
/// `(x1 y1 z1) (x2 y2 z2) (x3 y3 z3) texture [flags...]`.
///
/// Coordinates must be integers. Returns `None` for anything that fails
/// the grammar.
fn parse_plane_line(line: &str) -> Option<Plane> {
  let mut rest = line;
  let mut points = [[0i32; 3]; 3];

  for point in &mut points {
    let open = rest.find('(')?;
    let close = open + rest[open..].find(')')?;
    let mut coords = rest[open + 1..close].split_whitespace();
    for coord in point.iter_mut() {
      *coord = coords.next()?.parse().ok()?;
    }
    if coords.next().is_some() {
      return None;
    }
    rest = &rest[close + 1..];
  }

  let texture = rest.split_whitespace().next()?;
  Some(Plane::new(points, texture))
}

/// Union of all brush bounds, or `None` when nothing parsed.
pub fn world_bounds(brushes: &[Brush]) -> Option<Aabb> {
  let mut world: Option<Aabb> = None;
  for brush in brushes {
    if let Some(bounds) = brush.bounds() {
      match &mut world {
        Some(acc) => acc.union(&bounds),
        None => world = Some(bounds),
      }
    }
  }
  world
}

/// Offset that centers the level inside the world cube, snapped to the
/// voxel grid so brush faces stay lattice-aligned.
pub fn centering_offset(bounds: Aabb, config: &ConvertConfig) -> [i32; 3] {
  let half = config.world_size as f64 / 2.0;
  let voxel = config.voxel_size as f64;
  std::array::from_fn(|axis| {
    let center = (bounds.min[axis] + bounds.max[axis]) as f64 / 2.0;
    (((half - center) / voxel).round() * voxel) as i32
  })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
