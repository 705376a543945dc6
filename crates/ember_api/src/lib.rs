//! # Ember Server API
//!
//! The capability surface the Ember game-server platform exposes to plugins
//! and embedding hosts. This crate defines contracts only; networking,
//! persistence, scheduling, and plugin loading live in the host server.
//!
//! ## Core Pieces
//!
//! - **Typed registry lookups**: [`Server`] resolves opaque names and ids
//!   into [`Material`] handles, with derived narrowing to [`BlockType`] and
//!   the checked re-typing of entity kinds to [`EntityType<T>`] via
//!   [`ServerExt::entity_type_of`]. The backing registry is type-erased;
//!   narrowing failures surface as descriptive [`RegistryError`]s at the call
//!   boundary instead of deferred downcast failures in caller code.
//! - **Chat interaction values**: [`ClickEvent`] is an immutable, validated
//!   value pairing a closed [`ClickAction`] with its payload, constructible
//!   only through named factories.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ember_api::{ClickEvent, Server, ServerExt};
//!
//! fn greet(server: &dyn Server) -> Result<(), ember_api::RegistryError> {
//!     let stone = server.block_type_by_name("stone")?;
//!     let creeper = server.entity_type_of::<Creeper>("creeper")?;
//!     let help = ClickEvent::run_command("/help");
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod entity;
pub mod error;
pub mod material;
pub mod server;

pub use chat::{ClickAction, ClickEvent};
pub use entity::{Entity, EntityKind, EntityType};
pub use error::RegistryError;
pub use material::{BlockTraits, BlockType, Material};
pub use server::{CommandManager, PluginManager, Server, ServerExt, ServerInfo};
