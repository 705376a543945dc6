//! The server capability surface.
//!
//! [`Server`] is object-safe: hosts hand plugins an `Arc<dyn Server>` and
//! everything on it keeps working. The generic typed-entity lookup lives on
//! the [`ServerExt`] extension trait with a blanket impl, the same split the
//! platform uses elsewhere for its object-safe core interfaces.
//!
//! The derived lookups (`block_type_by_*`, `entity_type_of`) are expressed
//! purely through the required primitives plus a capability check, so every
//! call performs exactly one registry resolution.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::entity::{Entity, EntityKind, EntityType};
use crate::error::RegistryError;
use crate::material::{BlockType, Material};

// ============================================================================
// Collaborator surfaces
// ============================================================================

/// Identity of the running server.
pub trait ServerInfo: Send + Sync {
    /// Server implementation name.
    fn name(&self) -> &str;

    /// Server implementation version.
    fn version(&self) -> &str;

    /// Message of the day shown in server lists.
    fn motd(&self) -> &str;

    /// Maximum number of simultaneous players.
    fn max_players(&self) -> usize;
}

/// Query surface of the host's plugin manager.
///
/// Loading, unloading, and lifecycle are the host's concern; this facade only
/// exposes what plugins may observe.
pub trait PluginManager: Send + Sync {
    /// Number of currently loaded plugins.
    fn plugin_count(&self) -> usize;

    /// Names of currently loaded plugins.
    fn plugin_names(&self) -> Vec<String>;

    /// Whether a plugin with the given name is loaded.
    fn is_loaded(&self, name: &str) -> bool;
}

/// Query surface of the host's command manager.
pub trait CommandManager: Send + Sync {
    /// Number of registered commands.
    fn command_count(&self) -> usize;

    /// Names of registered commands.
    fn command_names(&self) -> Vec<String>;

    /// Whether a command with the given name is registered.
    fn is_registered(&self, name: &str) -> bool;
}

// ============================================================================
// Server
// ============================================================================

/// Capability surface a host server exposes to API consumers.
///
/// Implementors provide the three registry primitives; the block-type lookups
/// are derived here and must not be overridden with a second resolution path.
pub trait Server: ServerInfo {
    /// The host's plugin manager.
    fn plugin_manager(&self) -> Arc<dyn PluginManager>;

    /// The host's command manager.
    fn command_manager(&self) -> Arc<dyn CommandManager>;

    /// Arguments the server process was launched with.
    fn launch_arguments(&self) -> &[String];

    /// Resolves a material by its registered name.
    fn material_by_name(&self, name: &str) -> Result<Arc<Material>, RegistryError>;

    /// Resolves a material by its registered numeric id.
    fn material_by_id(&self, id: u32) -> Result<Arc<Material>, RegistryError>;

    /// Resolves an entity kind by its registered name.
    ///
    /// The result is type-erased; use
    /// [`ServerExt::entity_type_of`] when the representation type is known at
    /// the call site.
    fn entity_kind(&self, name: &str) -> Result<Arc<EntityKind>, RegistryError>;

    /// Resolves a material by name and narrows it to a block type.
    ///
    /// Fails with [`RegistryError::NotABlock`] (message contains the name)
    /// when the material exists but is not placeable.
    fn block_type_by_name(&self, name: &str) -> Result<BlockType, RegistryError> {
        let material = self.material_by_name(name)?;
        BlockType::narrow(material).ok_or_else(|| {
            warn!(name, "material lookup succeeded but is not a block");
            RegistryError::NotABlock(name.to_string())
        })
    }

    /// Resolves a material by id and narrows it to a block type.
    ///
    /// Fails with [`RegistryError::NotABlock`] (message contains the id)
    /// when the material exists but is not placeable.
    fn block_type_by_id(&self, id: u32) -> Result<BlockType, RegistryError> {
        let material = self.material_by_id(id)?;
        BlockType::narrow(material).ok_or_else(|| {
            warn!(id, "material lookup succeeded but is not a block");
            RegistryError::NotABlock(id.to_string())
        })
    }
}

/// Generic lookups that would make [`Server`] non-object-safe.
pub trait ServerExt {
    /// Resolves an entity kind by name and re-types it to `T`.
    ///
    /// Performs one name resolution, then checks the registered type tag;
    /// fails with [`RegistryError::EntityTypeMismatch`] naming both sides
    /// when `T` is not the kind's representation type.
    fn entity_type_of<T: Entity>(&self, name: &str) -> Result<EntityType<T>, RegistryError>;
}

impl<S: Server + ?Sized> ServerExt for S {
    fn entity_type_of<T: Entity>(&self, name: &str) -> Result<EntityType<T>, RegistryError> {
        let kind = self.entity_kind(name)?;
        debug!(name, expected = std::any::type_name::<T>(), "narrowing entity kind");
        EntityType::narrow(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::BlockTraits;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Creeper;
    impl Entity for Creeper {}

    #[derive(Debug)]
    struct Pig;
    impl Entity for Pig {}

    struct FixtureManagers;

    impl PluginManager for FixtureManagers {
        fn plugin_count(&self) -> usize {
            0
        }
        fn plugin_names(&self) -> Vec<String> {
            Vec::new()
        }
        fn is_loaded(&self, _name: &str) -> bool {
            false
        }
    }

    impl CommandManager for FixtureManagers {
        fn command_count(&self) -> usize {
            0
        }
        fn command_names(&self) -> Vec<String> {
            Vec::new()
        }
        fn is_registered(&self, _name: &str) -> bool {
            false
        }
    }

    struct FixtureServer {
        launch_arguments: Vec<String>,
        materials: HashMap<String, Arc<Material>>,
        entity_kinds: HashMap<String, Arc<EntityKind>>,
    }

    impl FixtureServer {
        fn new() -> Self {
            let mut materials = HashMap::new();
            for material in [
                Material::block("stone", 1, BlockTraits::default()),
                // a "dirt" that is deliberately not a block
                Material::new("dirt", 3),
                Material::new("stick", 280),
            ] {
                materials.insert(material.name().to_string(), Arc::new(material));
            }
            let mut entity_kinds = HashMap::new();
            entity_kinds.insert(
                "creeper".to_string(),
                Arc::new(EntityKind::register::<Creeper>("creeper")),
            );
            entity_kinds.insert(
                "pig".to_string(),
                Arc::new(EntityKind::register::<Pig>("pig")),
            );
            Self {
                launch_arguments: vec!["--port".to_string(), "25565".to_string()],
                materials,
                entity_kinds,
            }
        }
    }

    impl ServerInfo for FixtureServer {
        fn name(&self) -> &str {
            "ember-fixture"
        }
        fn version(&self) -> &str {
            "0.1.0"
        }
        fn motd(&self) -> &str {
            "fixture server"
        }
        fn max_players(&self) -> usize {
            20
        }
    }

    impl Server for FixtureServer {
        fn plugin_manager(&self) -> Arc<dyn PluginManager> {
            Arc::new(FixtureManagers)
        }

        fn command_manager(&self) -> Arc<dyn CommandManager> {
            Arc::new(FixtureManagers)
        }

        fn launch_arguments(&self) -> &[String] {
            &self.launch_arguments
        }

        fn material_by_name(&self, name: &str) -> Result<Arc<Material>, RegistryError> {
            self.materials
                .get(name)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownMaterial(name.to_string()))
        }

        fn material_by_id(&self, id: u32) -> Result<Arc<Material>, RegistryError> {
            self.materials
                .values()
                .find(|m| m.id() == id)
                .cloned()
                .ok_or(RegistryError::UnknownMaterialId(id))
        }

        fn entity_kind(&self, name: &str) -> Result<Arc<EntityKind>, RegistryError> {
            self.entity_kinds
                .get(name)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownEntityType(name.to_string()))
        }
    }

    #[test]
    fn block_lookup_returns_the_resolved_material() {
        let server = FixtureServer::new();
        let material = server.material_by_name("stone").expect("stone registered");
        let block = server.block_type_by_name("stone").expect("stone is a block");
        assert!(Arc::ptr_eq(block.material(), &material));
    }

    #[test]
    fn block_lookup_succeeds_iff_material_is_a_block() {
        let server = FixtureServer::new();
        for name in ["stone", "dirt", "stick"] {
            let material = server.material_by_name(name).expect("registered");
            assert_eq!(server.block_type_by_name(name).is_ok(), material.is_block());
            assert_eq!(
                server.block_type_by_id(material.id()).is_ok(),
                material.is_block()
            );
        }
    }

    #[test]
    fn non_block_lookup_by_name_reports_the_name() {
        let server = FixtureServer::new();
        let err = server.block_type_by_name("dirt").expect_err("dirt is not a block");
        assert_eq!(err, RegistryError::NotABlock("dirt".to_string()));
        assert!(err.to_string().contains("dirt"));
    }

    #[test]
    fn non_block_lookup_by_id_reports_the_id() {
        let server = FixtureServer::new();
        let err = server.block_type_by_id(280).expect_err("stick is not a block");
        assert!(err.to_string().contains("280"));
    }

    #[test]
    fn unknown_material_surfaces_the_provider_error() {
        let server = FixtureServer::new();
        let err = server
            .block_type_by_name("bedrock")
            .expect_err("bedrock is not registered");
        assert_eq!(err, RegistryError::UnknownMaterial("bedrock".to_string()));
        assert_eq!(
            server.material_by_id(9999),
            Err(RegistryError::UnknownMaterialId(9999))
        );
    }

    #[test]
    fn typed_entity_lookup_aliases_the_untyped_result() {
        let server = FixtureServer::new();
        let untyped = server.entity_kind("creeper").expect("creeper registered");
        let typed = server
            .entity_type_of::<Creeper>("creeper")
            .expect("representation type matches");
        assert!(Arc::ptr_eq(typed.kind(), &untyped));
    }

    #[test]
    fn typed_entity_lookup_succeeds_iff_tag_matches() {
        let server = FixtureServer::new();
        for name in ["creeper", "pig"] {
            let kind = server.entity_kind(name).expect("registered");
            assert_eq!(
                server.entity_type_of::<Creeper>(name).is_ok(),
                kind.produces::<Creeper>()
            );
            assert_eq!(
                server.entity_type_of::<Pig>(name).is_ok(),
                kind.produces::<Pig>()
            );
        }
    }

    #[test]
    fn typed_entity_mismatch_names_both_sides() {
        let server = FixtureServer::new();
        let err = server
            .entity_type_of::<Pig>("creeper")
            .expect_err("creeper does not produce Pig");
        let message = err.to_string();
        assert!(message.contains("creeper"));
        assert!(message.contains("Pig"));
    }

    #[test]
    fn typed_entity_lookup_on_dyn_server() {
        let server: Arc<dyn Server> = Arc::new(FixtureServer::new());
        assert!(server.entity_type_of::<Creeper>("creeper").is_ok());
        assert_eq!(server.launch_arguments().len(), 2);
        assert_eq!(server.plugin_manager().plugin_count(), 0);
        assert_eq!(server.command_manager().command_count(), 0);
    }
}
