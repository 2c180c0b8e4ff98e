//! Type keys identifying constructible variants.

use std::{borrow::Cow, fmt};

/// Symbolic identifier selecting which variant a factory constructs.
///
/// Keys are open: besides the built-in [`TypeKey::BASE`] and
/// [`TypeKey::SPECIAL`], any crate may define its own, either at compile
/// time with [`TypeKey::from_static`] or at runtime with [`TypeKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeKey(Cow<'static, str>);

impl TypeKey {
    /// Key of the base variant. Used when a config bundle names no type.
    pub const BASE: TypeKey = TypeKey::from_static("BaseType");

    /// Key of the special variant.
    pub const SPECIAL: TypeKey = TypeKey::from_static("SpecialType");

    /// Create a key from a static string, usable in `const` and `static` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a key at runtime.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for TypeKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for TypeKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
