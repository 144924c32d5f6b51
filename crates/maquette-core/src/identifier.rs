//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based
//! approach, plus [`Id::fresh`] for allocating new entity identifiers that are
//! unique for the lifetime of the process.

use std::{
    fmt,
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Counter backing [`Id::fresh`]. Monotonic for the lifetime of the process.
static NEXT_FRESH: AtomicU64 = AtomicU64::new(1);

fn with_interner<T>(f: impl FnOnce(&mut DefaultStringInterner) -> T) -> T {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Efficient identifier type using string interning
///
/// Entity identifiers are interned strings: cheap to copy, cheap to compare,
/// and resolvable back to their textual form for display and serialization.
///
/// # Examples
///
/// ```
/// use maquette_core::identifier::Id;
///
/// // Create identifiers from names
/// let animal = Id::new("Animal");
/// assert_eq!(animal, Id::new("Animal"));
///
/// // Allocate fresh, process-unique identifiers
/// let a = Id::fresh("c");
/// let b = Id::fresh("c");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// Two ids created from the same string are equal.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Allocates a fresh identifier of the form `{prefix}{n}`.
    ///
    /// `n` is drawn from a process-wide monotonic counter shared by all
    /// entity kinds, so fresh identifiers never collide within a process
    /// regardless of prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::identifier::Id;
    ///
    /// let class_id = Id::fresh("c");
    /// let relation_id = Id::fresh("r");
    /// assert_ne!(class_id, relation_id);
    /// ```
    pub fn fresh(prefix: &str) -> Self {
        let n = NEXT_FRESH.fetch_add(1, Ordering::Relaxed);
        Self::new(&format!("{prefix}{n}"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        });
        write!(f, "{resolved}")
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(*other))
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
