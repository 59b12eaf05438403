//! End-to-end conversion pipeline.
//!
//! Every stage is a pure in-memory transformation; the only I/O happens
//! when reading the source text and when writing the compressed
//! container, and only those failures abort a conversion.

use std::path::Path;

use tracing::info;

use crate::classify::FacePolicy;
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::extract::{extract, ExtractStrategy};
use crate::octree::{encode_octree, Octree};
use crate::parse::{centering_offset, parse_world, world_bounds};
use crate::registry::TextureRegistry;
use crate::writer::{write_world, PlayerStart};

/// Counters describing one finished conversion.
#[derive(Clone, Copy, Debug)]
pub struct ConvertSummary {
  pub brushes: usize,
  pub leaves: usize,
  pub texture_slots: usize,
  /// Size of the encoded octree payload.
  pub payload_bytes: usize,
  /// Size of the assembled container before compression.
  pub container_bytes: usize,
}

/// Convert one Valve-220 map file into a compressed MPZ world file.
pub fn convert_map(
  input: &Path,
  output: &Path,
  config: &ConvertConfig,
  strategy: ExtractStrategy,
  policy: FacePolicy,
) -> Result<ConvertSummary> {
  config.validate()?;

  let text = std::fs::read_to_string(input)?;
  let brushes = parse_world(&text, policy);
  let offset = match world_bounds(&brushes) {
    Some(bounds) => centering_offset(bounds, config),
    None => [0; 3],
  };

  let leaves = extract(strategy, &brushes, offset, config);
  let registry = TextureRegistry::from_leaves(&leaves);

  let mut tree = Octree::new(config.max_depth);
  let leaf_count = leaves.len();
  for leaf in leaves {
    tree.insert(leaf);
  }
  tree.merge();

  let payload = encode_octree(&tree, &registry);
  let spawn = PlayerStart::centered(config);
  let container_bytes = write_world(output, config, &registry, &[], &spawn, &payload)?;

  let summary = ConvertSummary {
    brushes: brushes.len(),
    leaves: leaf_count,
    texture_slots: registry.len(),
    payload_bytes: payload.len(),
    container_bytes,
  };
  info!(
    brushes = summary.brushes,
    leaves = summary.leaves,
    slots = summary.texture_slots,
    payload = summary.payload_bytes,
    "converted {} -> {}",
    input.display(),
    output.display()
  );
  Ok(summary)
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;
