use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// The single output area for status, error and result content.
///
/// Methods take `&self` so one region can be shared by overlapping
/// searches; implementations provide their own interior mutability.
///
/// A region also hands out write claims. Each search claims the region
/// when it starts and only writes its result if its claim is still the
/// latest, so a slow older search never overwrites a newer one.
pub trait DisplayRegion {
    /// Registers a new writer and returns its claim.
    fn claim(&self) -> u64;

    /// Whether `claim` is the most recent one handed out.
    fn is_latest(&self, claim: u64) -> bool;

    /// Replaces the whole content.
    fn replace(&self, content: String);

    /// Removes all content.
    fn clear(&self) {
        self.replace(String::new());
    }

    /// Appends after the current content.
    fn append(&self, content: &str);
}

/// An in-memory region holding its content as a string.
#[derive(Debug, Default)]
pub struct BufferRegion {
    content: Mutex<String>,
    claims: AtomicU64,
}

impl BufferRegion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current content.
    #[must_use]
    pub fn content(&self) -> String {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl DisplayRegion for BufferRegion {
    fn claim(&self) -> u64 {
        self.claims.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, claim: u64) -> bool {
        self.claims.load(Ordering::SeqCst) == claim
    }

    fn replace(&self, content: String) {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = content;
    }

    fn append(&self, content: &str) {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_overwrites_and_append_extends() {
        let region = BufferRegion::new();
        region.replace("<p>one</p>".to_string());
        region.append("<p>two</p>");
        assert_eq!(region.content(), "<p>one</p><p>two</p>");

        region.replace("<p>three</p>".to_string());
        assert_eq!(region.content(), "<p>three</p>");
    }

    #[test]
    fn only_the_newest_claim_is_latest() {
        let region = BufferRegion::new();
        let first = region.claim();
        assert!(region.is_latest(first));

        let second = region.claim();
        assert!(!region.is_latest(first));
        assert!(region.is_latest(second));
    }

    #[test]
    fn claims_are_independent_per_region() {
        let left = BufferRegion::new();
        let right = BufferRegion::new();
        let claim = left.claim();
        right.claim();
        right.claim();
        assert!(left.is_latest(claim));
    }

    #[test]
    fn clear_empties_region() {
        let region = BufferRegion::new();
        region.append("stale");
        region.clear();
        assert!(region.is_empty());
    }
}
