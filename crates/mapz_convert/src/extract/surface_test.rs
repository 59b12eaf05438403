use super::*;
use crate::config::ConvertConfig;
use crate::geometry::Orientation;
use crate::test_util::cube_brush;

fn leaf_at<'a>(leaves: &'a [Leaf], ix: i32, iy: i32, iz: i32) -> Option<&'a Leaf> {
  leaves
    .iter()
    .find(|leaf| leaf.ix == ix && leaf.iy == iy && leaf.iz == iz)
}

/// 128-unit cube voxelized at 16 units in a 512 world: solid cells appear
/// only on the six outward face layers plus the unconditional floor.
#[test]
fn cube_brush_yields_hollow_shell_plus_floor() {
  let config = ConvertConfig::default();
  let brush = cube_brush([0, 0, 0], [128, 128, 128], "wall");
  let leaves = surface_leaves(&[brush], [0; 3], &config);

  let floor_layers = config.base_thickness / config.voxel_size; // 2
  for leaf in &leaves {
    assert_eq!(leaf.depth, config.max_depth);
    assert!(leaf.is_full_cube(), "surface cells are never deformed");
    let on_shell = [leaf.ix, leaf.iy, leaf.iz]
      .iter()
      .any(|&coord| coord == 0 || coord == 7);
    let in_brush_box =
      leaf.ix <= 7 && leaf.iy <= 7 && leaf.iz <= 7;
    let on_floor = leaf.iz < floor_layers;
    assert!(
      (in_brush_box && on_shell) || on_floor,
      "unexpected solid cell at ({}, {}, {})",
      leaf.ix,
      leaf.iy,
      leaf.iz
    );
  }

  // Interior cells are never filled.
  assert!(
    leaf_at(&leaves, 3, 3, 3).is_none(),
    "brush interior must stay empty"
  );
  assert!(leaf_at(&leaves, 4, 5, 6).is_none());

  // Face layers carry the face texture on the right side.
  let west = leaf_at(&leaves, 0, 3, 3).expect("x- layer cell");
  assert_eq!(west.textures.get(Orientation::XNeg), Some("wall"));
  let top = leaf_at(&leaves, 3, 3, 7).expect("z+ layer cell");
  assert_eq!(top.textures.get(Orientation::ZPos), Some("wall"));
}

#[test]
fn base_floor_is_stamped_regardless_of_brush_placement() {
  let config = ConvertConfig::default();
  // Brush floating far above the floor.
  let brush = cube_brush([64, 64, 256], [128, 128, 320], "crate");
  let leaves = surface_leaves(&[brush], [0; 3], &config);

  let floor_layers = config.base_thickness / config.voxel_size;
  let n = config.grid_size();
  for z in 0..floor_layers {
    for &(x, y) in &[(0, 0), (n - 1, n - 1), (11, 29)] {
      let cell = leaf_at(&leaves, x, y, z)
        .unwrap_or_else(|| panic!("floor cell ({x}, {y}, {z}) missing"));
      for orientation in Orientation::ALL {
        assert_eq!(
          cell.textures.get(orientation),
          Some(config.base_texture.as_str()),
          "floor carries the base texture on every side"
        );
      }
    }
  }
  // First layer above the floor is empty away from the brush.
  assert!(leaf_at(&leaves, 0, 0, floor_layers).is_none());
}

#[test]
fn empty_brush_list_still_produces_the_floor() {
  let config = ConvertConfig::default();
  let leaves = surface_leaves(&[], [0; 3], &config);
  let n = config.grid_size() as usize;
  let floor_layers = (config.base_thickness / config.voxel_size) as usize;
  assert_eq!(leaves.len(), n * n * floor_layers);
}

#[test]
fn brush_offset_moves_the_stamped_cells() {
  let config = ConvertConfig::default();
  let brush = cube_brush([0, 0, 0], [32, 32, 32], "wall");
  let leaves = surface_leaves(&[brush], [128, 160, 192], &config);

  // Offset by (8, 10, 12) cells; the 2-cell brush occupies that corner.
  let west = leaf_at(&leaves, 8, 10, 12).expect("offset x- cell");
  assert_eq!(west.textures.get(Orientation::XNeg), Some("wall"));
  assert!(leaf_at(&leaves, 0, 0, 12).is_none(), "old position is empty");
}
