//! Node keys backed by a process-wide string interner.
//!
//! Every node in a [`Diagram`](crate::diagram::Diagram) is addressed by an
//! [`Id`]. Keys are cheap to copy and compare, which keeps edge declarations
//! free of lifetimes.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        // A poisoned interner still holds valid symbols; nothing panics while holding the lock.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned node key.
///
/// # Examples
///
/// ```
/// use blueprint_core::identifier::Id;
///
/// let login = Id::new("login");
/// assert_eq!(login, Id::new("login"));
/// assert_eq!(login, "login");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its key.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the interned string as an owned value.
    pub fn name(self) -> String {
        interner()
            .resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
