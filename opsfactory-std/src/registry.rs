//! Registry module for constructor management.
//!
//! This module provides a builder for registering constructors and a
//! frozen registry for immutable, thread-safe lookup.

use crate::variants::{BaseOps, SpecialOps};
use opsfactory_core::{Constructor, TypeKey};

/// A constructor registered under a key.
///
/// Entries can be built in `const` context, which lets external crates
/// submit them at compile time (see [`RegistryBuilder::collect_submitted`]).
#[derive(Debug, Clone)]
pub struct OpsEntry {
    /// Key the constructor is registered under.
    pub key: TypeKey,
    /// Human-readable description.
    pub description: &'static str,
    /// Function building the instance.
    pub constructor: Constructor,
}

impl OpsEntry {
    /// Create a new entry.
    pub const fn new(key: TypeKey, description: &'static str, constructor: Constructor) -> Self {
        Self {
            key,
            description,
            constructor,
        }
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(OpsEntry);

/// Entries contributed through `linkme` distributed slices.
#[cfg(feature = "linkme")]
#[linkme::distributed_slice]
pub static OPS_CONSTRUCTORS: [OpsEntry] = [..];

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a Registry.
///
/// Registration is insert-if-absent: the first constructor registered
/// under a key stays in effect and later ones are ignored with a warning.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .with_builtins()
///     .register(TypeKey::from_static("Custom"), new_custom_ops)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<OpsEntry>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register the built-in base and special variants.
    pub fn with_builtins(mut self) -> Self {
        self.register_entry_mut(BaseOps::ENTRY);
        self.register_entry_mut(SpecialOps::ENTRY);
        self
    }

    /// Register a constructor under `key`.
    pub fn register(mut self, key: TypeKey, constructor: Constructor) -> Self {
        self.register_mut(key, constructor);
        self
    }

    /// Register a constructor under `key` (mutable version).
    ///
    /// Returns `false` if the key was already taken.
    pub fn register_mut(&mut self, key: TypeKey, constructor: Constructor) -> bool {
        self.register_entry_mut(OpsEntry {
            key,
            description: "",
            constructor,
        })
    }

    /// Register a prepared entry.
    pub fn register_entry(mut self, entry: OpsEntry) -> Self {
        self.register_entry_mut(entry);
        self
    }

    /// Register a prepared entry (mutable version).
    ///
    /// Returns `false` if the key was already taken.
    pub fn register_entry_mut(&mut self, entry: OpsEntry) -> bool {
        if self.entries.iter().any(|e| e.key == entry.key) {
            tracing::warn!(key = %entry.key, "Ops factory has been registered already");
            return false;
        }
        tracing::info!(key = %entry.key, "Register ops factory");
        self.entries.push(entry);
        true
    }

    /// Register every entry submitted with `inventory::submit!`.
    #[cfg(feature = "inventory")]
    pub fn collect_submitted(mut self) -> Self {
        for entry in inventory::iter::<OpsEntry>() {
            self.register_entry_mut(entry.clone());
        }
        self
    }

    /// Register every entry in the [`OPS_CONSTRUCTORS`] slice.
    #[cfg(feature = "linkme")]
    pub fn collect_linked(mut self) -> Self {
        for entry in OPS_CONSTRUCTORS {
            self.register_entry_mut(entry.clone());
        }
        self
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }

    /// Get the number of registered constructors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no constructors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Registry - immutable, thread-safe constructor storage
// ============================================================================

/// An immutable, thread-safe registry of constructors.
///
/// Created by calling `RegistryBuilder::build()`. Entries keep their
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<OpsEntry>,
}

impl Registry {
    /// Look up the constructor registered under `key`.
    pub fn lookup(&self, key: &TypeKey) -> Option<Constructor> {
        self.get(key).map(|e| e.constructor)
    }

    /// Get the full entry registered under `key`.
    pub fn get(&self, key: &TypeKey) -> Option<&OpsEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Check whether `key` is registered.
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.get(key).is_some()
    }

    /// All registered keys in registration order.
    pub fn keys(&self) -> Vec<TypeKey> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Get all entries.
    pub fn entries(&self) -> &[OpsEntry] {
        &self.entries
    }

    /// Get the number of registered constructors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
