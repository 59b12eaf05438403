//! Conversion settings, loadable from TOML.
//!
//! All geometry stages share one [`ConvertConfig`]. The defaults target a
//! 512-unit world sampled on a 16-unit voxel grid (octree depth 5), the
//! layout the engine ships with.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Settings for a single map conversion.
#[derive(Clone, Debug, Deserialize)]
pub struct ConvertConfig {
  /// Edge length of the root octree cube, in map units. Power of two.
  #[serde(default = "default_world_size")]
  pub world_size: i32,

  /// Edge length of one finest-depth voxel, in map units. Power of two;
  /// must equal `world_size >> max_depth` so the surface grid and the
  /// octree leaf lattice coincide.
  #[serde(default = "default_voxel_size")]
  pub voxel_size: i32,

  /// Maximum octree depth. Leaves live at depths `0..=max_depth`.
  #[serde(default = "default_max_depth")]
  pub max_depth: u32,

  /// Texture stamped on the unconditional base floor by the surface-layer
  /// strategy.
  #[serde(default = "default_base_texture")]
  pub base_texture: String,

  /// Thickness of the base floor in map units. Multiple of `voxel_size`.
  #[serde(default = "default_base_thickness")]
  pub base_thickness: i32,

  /// Map format version written into the container header.
  #[serde(default = "default_map_version")]
  pub map_version: i32,

  /// Byte size of the fixed container header.
  #[serde(default = "default_header_size")]
  pub header_size: i32,

  /// Game version written into the container header.
  #[serde(default = "default_game_version")]
  pub game_version: i32,

  /// Map revision counter.
  #[serde(default = "default_map_revision")]
  pub map_revision: i32,

  /// Game identifier, at most 4 bytes, NUL-padded on encode.
  #[serde(default = "default_game_id")]
  pub game_id: String,
}

fn default_world_size() -> i32 {
  512
}

fn default_voxel_size() -> i32 {
  16
}

fn default_max_depth() -> u32 {
  5
}

fn default_base_texture() -> String {
  "exx/base-crete01".to_string()
}

fn default_base_thickness() -> i32 {
  32
}

fn default_map_version() -> i32 {
  45
}

fn default_header_size() -> i32 {
  44
}

fn default_game_version() -> i32 {
  281
}

fn default_map_revision() -> i32 {
  1
}

fn default_game_id() -> String {
  "fps".to_string()
}

impl Default for ConvertConfig {
  fn default() -> Self {
    Self {
      world_size: default_world_size(),
      voxel_size: default_voxel_size(),
      max_depth: default_max_depth(),
      base_texture: default_base_texture(),
      base_thickness: default_base_thickness(),
      map_version: default_map_version(),
      header_size: default_header_size(),
      game_version: default_game_version(),
      map_revision: default_map_revision(),
      game_id: default_game_id(),
    }
  }
}

impl ConvertConfig {
  /// Load settings from a TOML file and validate them.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: ConvertConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Check the cross-field invariants the pipeline relies on.
  pub fn validate(&self) -> Result<()> {
    if self.world_size <= 0 || !(self.world_size as u32).is_power_of_two() {
      return Err(ConvertError::config(format!(
        "world_size must be a power of two, got {}",
        self.world_size
      )));
    }
    if self.voxel_size <= 0 || !(self.voxel_size as u32).is_power_of_two() {
      return Err(ConvertError::config(format!(
        "voxel_size must be a power of two, got {}",
        self.voxel_size
      )));
    }
    if self.max_depth == 0 || self.world_size >> self.max_depth != self.voxel_size {
      return Err(ConvertError::config(format!(
        "voxel_size {} must equal world_size >> max_depth ({} >> {})",
        self.voxel_size, self.world_size, self.max_depth
      )));
    }
    // Leaf edge deformation is expressed in eighths of a cell, so the
    // finest cell must still split into 8 whole units.
    if self.world_size >> self.max_depth < 8 {
      return Err(ConvertError::config(format!(
        "max_depth {} leaves cells smaller than 8 units",
        self.max_depth
      )));
    }
    if self.base_thickness < 0 || self.base_thickness % self.voxel_size != 0 {
      return Err(ConvertError::config(format!(
        "base_thickness {} must be a non-negative multiple of voxel_size {}",
        self.base_thickness, self.voxel_size
      )));
    }
    if self.game_id.len() > 4 {
      return Err(ConvertError::config(format!(
        "game_id must fit 4 bytes, got {:?}",
        self.game_id
      )));
    }
    Ok(())
  }

  /// Cells per axis of the dense voxel grid.
  #[inline]
  pub fn grid_size(&self) -> i32 {
    self.world_size / self.voxel_size
  }

  /// Cell edge length at the given octree depth.
  #[inline]
  pub fn cell_size(&self, depth: u32) -> i32 {
    self.world_size >> depth
  }

  /// Game id as the fixed 4-byte header field, NUL-padded.
  pub fn game_id_bytes(&self) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    for (dst, src) in bytes.iter_mut().zip(self.game_id.bytes()) {
      *dst = src;
    }
    bytes
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
