use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic source of call identifiers
///
/// Starts at zero so the first id handed out is 1. Ids are never reused for
/// the lifetime of the generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_id: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued id, 0 if none has been issued yet
    pub fn last_id(&self) -> u64 {
        self.last_id.load(Ordering::SeqCst)
    }
}
