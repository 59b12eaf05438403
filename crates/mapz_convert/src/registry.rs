//! Texture registry: stable name -> slot mapping.
//!
//! Slots are assigned in first-seen order. Slot 0 is permanently the
//! `sky` sentinel; names nobody registered resolve to it.

use std::collections::HashMap;

use crate::extract::Leaf;

/// Slot every unknown or absent texture resolves to.
pub const SKY_SLOT: u16 = 0;

/// Sentinel name occupying slot 0.
pub const SKY_TEXTURE: &str = "sky";

/// Insertion-ordered texture name -> slot index map.
pub struct TextureRegistry {
  names: Vec<String>,
  slots: HashMap<String, u16>,
}

impl TextureRegistry {
  pub fn new() -> Self {
    let mut registry = Self {
      names: Vec::new(),
      slots: HashMap::new(),
    };
    registry.register(SKY_TEXTURE);
    registry
  }

  /// Build the registry with a single scan over the final leaves, in
  /// leaf order.
  pub fn from_leaves(leaves: &[Leaf]) -> Self {
    let mut registry = Self::new();
    for leaf in leaves {
      for (_, texture) in leaf.textures.iter() {
        registry.register(texture);
      }
    }
    registry
  }

  /// Assign the next slot to a name, or return its existing slot.
  pub fn register(&mut self, name: &str) -> u16 {
    if let Some(&slot) = self.slots.get(name) {
      return slot;
    }
    let slot = self.names.len() as u16;
    self.names.push(name.to_string());
    self.slots.insert(name.to_string(), slot);
    slot
  }

  pub fn lookup(&self, name: &str) -> Option<u16> {
    self.slots.get(name).copied()
  }

  /// Slot for a name, falling back to the sky slot for unknown names.
  pub fn slot_or_sky(&self, name: &str) -> u16 {
    self.lookup(name).unwrap_or(SKY_SLOT)
  }

  /// Number of assigned slots, the sky sentinel included.
  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// Slots in assignment order.
  pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
    self
      .names
      .iter()
      .enumerate()
      .map(|(slot, name)| (slot as u16, name.as_str()))
  }
}

impl Default for TextureRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
