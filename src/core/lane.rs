use serde::{Deserialize, Serialize};

/// Row offset of a bar inside a shared window.
///
/// Projection never computes lanes; callers pass them in from their grouping
/// context and everything defaults to lane `0`. Overlap-free lanes are
/// available separately in `extensions::lanes`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Lane(pub u32);

impl Lane {
    pub const FIRST: Self = Self(0);

    /// Highest lane accepted from upstream records; larger values clamp here.
    pub const MAX_CALLER: Self = Self(255);

    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for Lane {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
