//! MPZ world container assembly and compressed output.
//!
//! The container layout, in order: fixed header, world-variable table,
//! texture MRU list, one player-start entity, one default virtual slot
//! per texture slot, then the encoded octree payload. Everything is
//! little-endian. The whole byte sequence is assembled in memory and only
//! then gzip-compressed to disk, so no partial file is ever observable.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use glam::Vec3;
use tracing::debug;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::registry::TextureRegistry;

/// Container magic.
pub const MAGIC: &[u8; 4] = b"MAPZ";

/// Entity type tag carried in the spawn record's attribute byte.
const ENT_PLAYERSTART: u8 = 3;

/// Fixed attribute slot count per entity record.
const ENT_ATTRS: i32 = 7;

/// The single spawn entity stored in every world file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerStart {
  pub position: Vec3,
}

impl PlayerStart {
  /// Spawn at the center of the world cube.
  pub fn centered(config: &ConvertConfig) -> Self {
    let half = config.world_size as f32 / 2.0;
    Self {
      position: Vec3::splat(half),
    }
  }
}

/// One entry of the world-variable table.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldVar {
  Int { name: String, value: i32 },
  Float { name: String, value: f32 },
  Text { name: String, value: String },
}

/// Compress the assembled container to disk.
///
/// Returns the uncompressed container size in bytes. This is the only
/// stage, besides reading the source text, that can fail a conversion.
pub fn write_world(
  path: &Path,
  config: &ConvertConfig,
  registry: &TextureRegistry,
  vars: &[WorldVar],
  spawn: &PlayerStart,
  octree_payload: &[u8],
) -> Result<usize> {
  let data = assemble(config, registry, vars, spawn, octree_payload);
  let file = File::create(path)?;
  let mut encoder = GzEncoder::new(file, Compression::default());
  encoder.write_all(&data)?;
  encoder.finish()?;
  debug!(bytes = data.len(), path = %path.display(), "wrote world container");
  Ok(data.len())
}

/// Build the full uncompressed container byte sequence.
pub fn assemble(
  config: &ConvertConfig,
  registry: &TextureRegistry,
  vars: &[WorldVar],
  spawn: &PlayerStart,
  octree_payload: &[u8],
) -> Vec<u8> {
  let slots = registry.len() as i32;
  let mut out = Vec::with_capacity(64 + octree_payload.len());

  // Header.
  out.extend_from_slice(MAGIC);
  push_i32(&mut out, config.map_version);
  push_i32(&mut out, config.header_size);
  push_i32(&mut out, config.world_size);
  push_i32(&mut out, 1); // entity count: the player start
  push_i32(&mut out, 0); // pvs count
  push_i32(&mut out, 0); // blendmap
  push_i32(&mut out, slots);
  push_i32(&mut out, config.game_version);
  push_i32(&mut out, config.map_revision);
  out.extend_from_slice(&config.game_id_bytes());

  // World-variable table.
  push_i32(&mut out, vars.len() as i32);
  for var in vars {
    push_var(&mut out, var);
  }

  // Texture MRU list, identity order.
  push_u16(&mut out, slots as u16);
  for slot in 0..slots as u16 {
    push_u16(&mut out, slot);
  }

  // Player-start entity record.
  for component in spawn.position.to_array() {
    out.extend_from_slice(&component.to_le_bytes());
  }
  out.extend_from_slice(&[ENT_PLAYERSTART, 0, 0, 0]);
  push_i32(&mut out, ENT_ATTRS);
  for _ in 0..ENT_ATTRS {
    push_i32(&mut out, 0);
  }
  push_i32(&mut out, 0); // entity links

  // One default virtual slot per texture slot.
  for _ in 0..slots {
    push_i32(&mut out, 0); // change flag
    push_i32(&mut out, -1); // previous slot
  }

  out.extend_from_slice(octree_payload);
  out
}

fn push_var(out: &mut Vec<u8>, var: &WorldVar) {
  match var {
    WorldVar::Int { name, value } => {
      out.push(0);
      push_name(out, name);
      push_i32(out, *value);
    }
    WorldVar::Float { name, value } => {
      out.push(1);
      push_name(out, name);
      out.extend_from_slice(&value.to_le_bytes());
    }
    WorldVar::Text { name, value } => {
      out.push(2);
      push_name(out, name);
      push_u16(out, value.len() as u16);
      out.extend_from_slice(value.as_bytes());
    }
  }
}

fn push_name(out: &mut Vec<u8>, name: &str) {
  push_u16(out, name.len() as u16);
  out.extend_from_slice(name.as_bytes());
}

fn push_i32(out: &mut Vec<u8>, value: i32) {
  out.extend_from_slice(&value.to_le_bytes());
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
  out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
