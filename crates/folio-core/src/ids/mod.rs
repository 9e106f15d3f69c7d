//! Identifier types shared across the domain.

mod id_macro;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Opaque content-store identifier of a project document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

/// Identifier of a page section (`hero`, `about`, ...), doubling as its anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

/// Raw language tag as requested by the caller.
///
/// Unlike [`crate::Locale`] this is not restricted to the supported set, so an
/// unknown code reaches the content store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl_id!(ProjectId, SectionId, LocaleCode);

/// Monotonic tag attached to every content request.
///
/// Only the result carrying the most recently issued tag may be applied.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub const ZERO: RequestSeq = RequestSeq(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
