use super::Margins;
use serde::{Deserialize, Serialize};

/// Position of a tile in its workspace's sort order.
///
/// `Last` sorts after every assigned rank and is what a freshly registered tile carries
/// until a refresh hands it a concrete slot.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Assigned(usize),
    #[default]
    Last,
}

/// Tiling metadata for one registered window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tile {
    pub rank: Rank,
    /// Cached padding, regenerated whenever the rank changes.
    pub gaps: Option<Margins>,
    /// Insertion order, breaks rank ties.
    pub(crate) seq: u64,
}

impl Tile {
    pub(crate) const fn new(seq: u64) -> Self {
        Self {
            rank: Rank::Last,
            gaps: None,
            seq,
        }
    }

    /// Gaps to apply around this tile. Zero until the first concrete rank is assigned.
    #[must_use]
    pub fn gaps_or_default(&self) -> Margins {
        self.gaps.unwrap_or_default()
    }
}

/// Per-side lower and upper bound for randomized tile gaps.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct GapBounds {
    pub min: Margins,
    pub max: Margins,
}

impl GapBounds {
    #[must_use]
    pub const fn new(min: Margins, max: Margins) -> Self {
        Self { min, max }
    }
}
