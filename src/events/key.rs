//! # Stable identity token for an event type.
//!
//! [`EventKey`] is a lookup/grouping token: equality, hashing and ordering go
//! by the underlying [`TypeId`] only. The type name rides along purely for
//! diagnostics output and never participates in comparisons.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::events::Event;

/// Opaque identity of an event type.
///
/// Cheap to copy, usable as a map key, never mutated. Two keys are equal iff
/// they were built from the same concrete type.
#[derive(Clone, Copy)]
pub struct EventKey {
    type_id: TypeId,
    name: &'static str,
}

impl EventKey {
    /// Returns the key for event type `E`.
    pub fn of<E: Event>() -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            name: type_name::<E>(),
        }
    }

    /// Returns the underlying type id.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name with its module path stripped, for log lines
    /// and diagnostics dumps.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EventKey {}

impl Hash for EventKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventKey").field(&self.name).finish()
    }
}
