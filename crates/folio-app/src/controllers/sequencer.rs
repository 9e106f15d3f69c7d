use std::sync::atomic::{AtomicU64, Ordering};

use folio_core::RequestSeq;

/// Hands out monotonically increasing request tags.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new tag. It becomes the latest one.
    pub fn issue(&self) -> RequestSeq {
        RequestSeq::new(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> RequestSeq {
        RequestSeq::new(self.latest.load(Ordering::SeqCst))
    }

    pub fn is_latest(&self, request: RequestSeq) -> bool {
        self.latest() == request
    }
}
