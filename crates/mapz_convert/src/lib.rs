//! mapz_convert - Valve-220 brush geometry to compressed MPZ octree worlds.
//!
//! Converts convex-brush level geometry (the Valve-220 text map dialect)
//! into the sparse voxel octree consumed by the engine's gzip-compressed
//! binary world container.
//!
//! # Pipeline
//!
//! ```text
//! map text -> Brush list -> Leaf list -> Octree -> encoded nodes -> .mpz
//!             (parse)      (extract)    (insert   (registry-      (writer)
//!                                        + merge)  resolved)
//! ```
//!
//! Three interchangeable leaf extraction strategies share the same
//! downstream path:
//!
//! - [`ExtractStrategy::SurfaceLayer`]: dense grid, one voxel layer per
//!   oriented brush face, plus an unconditional solid base floor
//! - [`ExtractStrategy::FineVoxelize`]: half-space sampling at maximum
//!   tree depth, coalesced upward by the octree merger
//! - [`ExtractStrategy::DepthSelect`]: one leaf per brush at the coarsest
//!   grid-aligned depth, with per-axis edge deformation
//!
//! # Example
//!
//! ```ignore
//! use mapz_convert::{convert_map, ConvertConfig, ExtractStrategy, FacePolicy};
//!
//! let config = ConvertConfig::default();
//! let summary = convert_map(
//!   "room.map".as_ref(),
//!   "room.mpz".as_ref(),
//!   &config,
//!   ExtractStrategy::FineVoxelize,
//!   FacePolicy::NormalDominant,
//! )?;
//! println!("{} brushes -> {} leaves", summary.brushes, summary.leaves);
//! ```

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod octree;
pub mod parse;
pub mod registry;
pub mod writer;

pub use classify::FacePolicy;
pub use config::ConvertConfig;
pub use convert::{convert_map, ConvertSummary};
pub use error::{ConvertError, Result};
pub use extract::{extract, ExtractStrategy, Leaf};
pub use geometry::{Aabb, Brush, FaceTextures, Orientation, Plane};
pub use octree::{encode_octree, Node, Octree};
pub use registry::TextureRegistry;
pub use writer::{write_world, PlayerStart, WorldVar};

#[cfg(test)]
pub(crate) mod test_util;
