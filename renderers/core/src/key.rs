use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity key of a rendered node.
///
/// Keys come from a process-wide counter, so they are unique across render
/// passes and threads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

impl NodeKey {
    /// Generate a key that has never been handed out before.
    #[must_use]
    pub fn generate() -> Self {
        let id = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
        Self(format!("dr-{id}"))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
