//! Error types for registry lookups.

use thiserror::Error;

/// Errors produced by the typed registry lookups on [`Server`](crate::Server).
///
/// All variants are synchronous argument-validation failures; nothing here is
/// retried or recovered at this layer. The `Unknown*` variants are the
/// contract a registry provider uses to signal a failed resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier resolved to a material without the block capability.
    #[error("Material {0} is not a block")]
    NotABlock(String),

    /// The entity kind's registered representation type does not match the
    /// type requested at the call site.
    #[error("Entity type {kind} is not a {expected}")]
    EntityTypeMismatch {
        /// Name of the entity kind that was resolved.
        kind: String,
        /// Type name the caller asked for.
        expected: &'static str,
    },

    /// No material is registered under the given name.
    #[error("No material registered under name {0}")]
    UnknownMaterial(String),

    /// No material is registered with the given numeric id.
    #[error("No material registered with id {0}")]
    UnknownMaterialId(u32),

    /// No entity kind is registered under the given name.
    #[error("No entity type registered under name {0}")]
    UnknownEntityType(String),
}
