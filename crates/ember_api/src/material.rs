//! Materials and the block refinement.
//!
//! A [`Material`] is an opaque handle into the server's material registry:
//! the registry owns the instances, the facade only hands out shared
//! references. [`BlockType`] is the same handle narrowed to materials that
//! can be placed as world blocks; the narrowing is a runtime-checked
//! projection, never a second lookup.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// Material
// ============================================================================

/// A registered game material.
///
/// Identified by a unique name and a unique numeric id, both assigned by the
/// registry at registration time. Whether the material is placeable as a
/// block is part of the registered record, not something callers decide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    name: String,
    id: u32,
    block: Option<BlockTraits>,
}

/// Block-capability record carried by placeable materials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockTraits {
    /// Whether the block occludes movement and neighboring faces.
    pub solid: bool,
    /// Mining hardness.
    pub hardness: f32,
    /// Emitted light level, 0 for none.
    pub light_emission: u8,
}

impl Default for BlockTraits {
    fn default() -> Self {
        Self {
            solid: true,
            hardness: 1.0,
            light_emission: 0,
        }
    }
}

impl Material {
    /// Creates a non-block material record.
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            block: None,
        }
    }

    /// Creates a material record that carries the block capability.
    pub fn block(name: impl Into<String>, id: u32, traits: BlockTraits) -> Self {
        Self {
            name: name.into(),
            id,
            block: Some(traits),
        }
    }

    /// Registered name of this material.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered numeric id of this material.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether this material satisfies the block capability.
    pub fn is_block(&self) -> bool {
        self.block.is_some()
    }

    /// Block capability record, if this material is placeable.
    pub fn block_traits(&self) -> Option<&BlockTraits> {
        self.block.as_ref()
    }
}

// ============================================================================
// BlockType
// ============================================================================

/// A [`Material`] narrowed to those placeable as world blocks.
///
/// Wraps the identical `Arc<Material>` the registry resolved; two narrowings
/// of the same material alias the same record. Derefs to [`Material`], so
/// every material accessor is available on the narrowed handle.
#[derive(Debug, Clone)]
pub struct BlockType {
    material: Arc<Material>,
}

impl BlockType {
    /// Narrows a resolved material to a block type.
    ///
    /// Returns `None` when the material does not carry the block capability.
    /// This is the only way to obtain a `BlockType`, so the capability
    /// invariant holds for every instance.
    pub fn narrow(material: Arc<Material>) -> Option<Self> {
        material.is_block().then(|| Self { material })
    }

    /// The underlying material record this block type was narrowed from.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Block capability record.
    pub fn traits(&self) -> &BlockTraits {
        match self.material.block_traits() {
            Some(traits) => traits,
            // narrow() rejects non-block materials
            None => unreachable!("BlockType wraps a non-block material"),
        }
    }
}

impl Deref for BlockType {
    type Target = Material;

    fn deref(&self) -> &Material {
        &self.material
    }
}
