//! Vertex identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Unique, stable identifier assigned to a vertex when it is created.
///
/// Keys are handed out by a process-wide counter, so two distinct vertices
/// never share a key, even across different graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(u64);

impl VertexKey {
    /// Allocate the next unused key.
    pub(crate) fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this key.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<VertexKey> = (0..1000).map(|_| VertexKey::next()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn keys_increase() {
        let a = VertexKey::next();
        let b = VertexKey::next();
        assert!(a < b);
    }

    #[test]
    fn display_prefix() {
        let key = VertexKey(42);
        assert_eq!(key.to_string(), "v42");
    }
}
