//! Entity kinds and typed narrowing.
//!
//! The entity registry is inherently type-erased: one name maps to one
//! [`EntityKind`] record. Callers usually know at the call site which
//! concrete representation type they expect, so [`EntityType<T>`] re-types a
//! resolved record after an explicit runtime type-tag check, turning what
//! would be a deferred downcast failure deep in caller code into a
//! descriptive error at the boundary.

use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::RegistryError;

/// Marker trait for concrete entity representation types.
///
/// Implemented by the host server's entity structs; the facade only uses it
/// to anchor the type tag carried by [`EntityKind`].
pub trait Entity: Any + Send + Sync + std::fmt::Debug {}

// ============================================================================
// EntityKind — the type-erased registered record
// ============================================================================

/// A registered entity kind.
///
/// The representation type is fixed when the kind is registered and never
/// changes afterwards; `tag` and `type_name` are captured from the same `T`
/// in [`EntityKind::register`], so they cannot disagree.
#[derive(Debug, Clone)]
pub struct EntityKind {
    name: String,
    tag: TypeId,
    type_name: &'static str,
}

impl EntityKind {
    /// Registers an entity kind producing representation type `T`.
    pub fn register<T: Entity>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Registered name of this kind.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type name of the representation type, for diagnostics.
    pub fn representation_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this kind produces entities of representation type `T`.
    pub fn produces<T: Entity>(&self) -> bool {
        self.tag == TypeId::of::<T>()
    }
}

// ============================================================================
// EntityType<T> — the typed view
// ============================================================================

/// An [`EntityKind`] re-typed to the representation type the caller expects.
///
/// Obtained only through [`EntityType::narrow`], so the type parameter is
/// always backed by a successful tag check. The view aliases the resolved
/// record; narrowing performs no additional registry lookup.
#[derive(Debug)]
pub struct EntityType<T: Entity> {
    kind: Arc<EntityKind>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityType<T> {
    /// Checks the registered type tag against `T` and re-types the record.
    ///
    /// Fails with [`RegistryError::EntityTypeMismatch`] naming both the
    /// resolved kind and the expected type when the tags differ.
    pub fn narrow(kind: Arc<EntityKind>) -> Result<Self, RegistryError> {
        if kind.produces::<T>() {
            Ok(Self {
                kind,
                _marker: PhantomData,
            })
        } else {
            Err(RegistryError::EntityTypeMismatch {
                kind: kind.name().to_string(),
                expected: std::any::type_name::<T>(),
            })
        }
    }

    /// The underlying registered record.
    pub fn kind(&self) -> &Arc<EntityKind> {
        &self.kind
    }

    /// Registered name of this kind.
    pub fn name(&self) -> &str {
        self.kind.name()
    }
}

// Manual impl: T itself need not be Clone, only the view is cloned.
impl<T: Entity> Clone for EntityType<T> {
    fn clone(&self) -> Self {
        Self {
            kind: Arc::clone(&self.kind),
            _marker: PhantomData,
        }
    }
}
