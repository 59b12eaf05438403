use super::*;

use std::io::Read;
use std::path::PathBuf;

use flate2::read::GzDecoder;

use crate::error::ConvertError;
use crate::geometry::Orientation;
use crate::test_util::face_plane;

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("mapz_convert_{}_{name}", std::process::id()))
}

/// Worldspawn text with a single axis-aligned box brush.
fn cube_map(min: [i32; 3], max: [i32; 3], texture: &str) -> String {
  let mut text = String::from("// entity 0\n{\n\"classname\" \"worldspawn\"\n{\n");
  for orientation in Orientation::ALL {
    let plane = face_plane(min, max, orientation, texture);
    let [p0, p1, p2] = plane.points;
    text.push_str(&format!(
      "( {} {} {} ) ( {} {} {} ) ( {} {} {} ) {} [ 1 0 0 0 ] [ 0 1 0 0 ] 0 1 1\n",
      p0[0], p0[1], p0[2], p1[0], p1[1], p1[2], p2[0], p2[1], p2[2], texture
    ));
  }
  text.push_str("}\n}\n// entity 1\n{\n\"classname\" \"info_player_start\"\n}\n");
  text
}

fn decompress(path: &std::path::Path) -> Vec<u8> {
  let file = std::fs::File::open(path).expect("output file exists");
  let mut decoded = Vec::new();
  GzDecoder::new(file)
    .read_to_end(&mut decoded)
    .expect("valid gzip stream");
  decoded
}

fn i32_at(bytes: &[u8], offset: usize) -> i32 {
  i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn voxelize_converts_a_cube_map_end_to_end() {
  let input = temp_path("voxelize.map");
  let output = temp_path("voxelize.mpz");
  std::fs::write(&input, cube_map([0, 0, 0], [64, 64, 64], "wall/brick")).expect("write map");

  let config = ConvertConfig::default();
  let summary = convert_map(
    &input,
    &output,
    &config,
    ExtractStrategy::FineVoxelize,
    FacePolicy::NormalDominant,
  )
  .expect("conversion succeeds");

  assert_eq!(summary.brushes, 1);
  // 64 units at 16-unit steps, centered into the world cube.
  assert_eq!(summary.leaves, 64);
  assert_eq!(summary.texture_slots, 2, "sky plus the brush texture");

  let data = decompress(&output);
  assert_eq!(data.len(), summary.container_bytes);
  assert_eq!(&data[..4], b"MAPZ");
  assert_eq!(i32_at(&data, 12), config.world_size);
  assert_eq!(i32_at(&data, 28), 2);

  // Header 44 + empty var table 4 + MRU 6 + entity record 52 + vslots 16.
  assert_eq!(summary.container_bytes, summary.payload_bytes + 122);

  let _ = std::fs::remove_file(&input);
  let _ = std::fs::remove_file(&output);
}

#[test]
fn surface_strategy_stamps_the_floor_even_without_brushes() {
  let input = temp_path("floor.map");
  let output = temp_path("floor.mpz");
  std::fs::write(
    &input,
    "// entity 0\n{\n\"classname\" \"worldspawn\"\n}\n// entity 1\n",
  )
  .expect("write map");

  let config = ConvertConfig::default();
  let summary = convert_map(
    &input,
    &output,
    &config,
    ExtractStrategy::SurfaceLayer,
    FacePolicy::BoundsAligned,
  )
  .expect("conversion succeeds");

  assert_eq!(summary.brushes, 0);
  // Two full 32x32 floor layers.
  assert_eq!(summary.leaves, 32 * 32 * 2);
  assert_eq!(summary.texture_slots, 2, "sky plus the base texture");

  let _ = std::fs::remove_file(&input);
  let _ = std::fs::remove_file(&output);
}

#[test]
fn depth_select_writes_one_deformed_root_leaf() {
  let input = temp_path("select.map");
  let output = temp_path("select.mpz");
  std::fs::write(&input, cube_map([0, 0, 0], [128, 128, 128], "wall/brick")).expect("write map");

  let config = ConvertConfig::default();
  let summary = convert_map(
    &input,
    &output,
    &config,
    ExtractStrategy::DepthSelect,
    FacePolicy::NormalDominant,
  )
  .expect("conversion succeeds");

  // Centered to [192, 320]: aligned at depth 0, so one deformed leaf
  // spanning eighths 3..5 of the root cube.
  assert_eq!(summary.leaves, 1);
  assert_eq!(summary.payload_bytes, 25);

  let data = decompress(&output);
  let payload = &data[data.len() - 25..];
  assert_eq!(payload[0], 3, "deformed node type");
  assert_eq!(&payload[1..13], &[0x53; 12]);
  // All six sides resolve to texture slot 1.
  for side in 0..6 {
    assert_eq!(payload[13 + side * 2], 1);
    assert_eq!(payload[14 + side * 2], 0);
  }

  let _ = std::fs::remove_file(&input);
  let _ = std::fs::remove_file(&output);
}

#[test]
fn missing_input_is_an_io_error() {
  let config = ConvertConfig::default();
  let result = convert_map(
    Path::new("/nonexistent/level.map"),
    &temp_path("unused.mpz"),
    &config,
    ExtractStrategy::FineVoxelize,
    FacePolicy::NormalDominant,
  );
  assert!(matches!(result, Err(ConvertError::Io(_))));
}

#[test]
fn invalid_settings_abort_before_any_io() {
  let config = ConvertConfig {
    world_size: 500,
    ..ConvertConfig::default()
  };
  let output = temp_path("never_written.mpz");
  let result = convert_map(
    Path::new("/nonexistent/level.map"),
    &output,
    &config,
    ExtractStrategy::FineVoxelize,
    FacePolicy::NormalDominant,
  );
  assert!(matches!(result, Err(ConvertError::Config(_))));
  assert!(!output.exists(), "no output file on config failure");
}
