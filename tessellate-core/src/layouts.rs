mod horizontal;
mod layout_manager;
mod spiral;
mod vertical;

use crate::models::Xyhw;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use layout_manager::LayoutManager;

pub const HORIZONTAL: &str = "horizontal";
pub const VERTICAL: &str = "vertical";
pub const SPIRAL: &str = "spiral";

pub const MIN_SPLIT_RATIO: f64 = 0.05;
pub const MAX_SPLIT_RATIO: f64 = 0.95;

/// The interchangeable layout algorithms.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Master column on the left, stack column on the right.
    Horizontal,
    /// Master row on top, stack row at the bottom.
    Vertical,
    /// Each tile takes a slice of what is left, turning clockwise.
    Spiral,
}

pub const LAYOUTS: &[Layout] = &[Layout::Horizontal, Layout::Vertical, Layout::Spiral];

/// Per refresh snapshot of the layout settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub split_ratio: f64,
    pub master_count: usize,
}

impl LayoutParams {
    /// Builds the parameters, clamping the split ratio into its usable range.
    #[must_use]
    pub fn new(split_ratio: f64, master_count: usize) -> Self {
        Self {
            split_ratio: clamp_split_ratio(split_ratio),
            master_count,
        }
    }

    /// Number of master tiles for `count` tiles. At least one tile always stays in the stack.
    #[must_use]
    pub fn effective_master_count(&self, count: usize) -> usize {
        if count < 2 {
            return 0;
        }
        self.master_count.min(count - 1)
    }
}

/// Keeps a split ratio strictly inside (0, 1). Non finite values fall back to an even split.
#[must_use]
pub fn clamp_split_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
    } else {
        0.5
    }
}

impl Layout {
    /// Maps `tiles` onto `area`. The result is aligned with the input: the n-th rectangle
    /// belongs to the n-th tile.
    #[must_use]
    pub fn arrange<T>(self, tiles: &[T], area: &Xyhw, params: &LayoutParams) -> Vec<Xyhw> {
        match tiles.len() {
            0 => vec![],
            1 => vec![*area],
            count => match self {
                Self::Horizontal => horizontal::update(count, area, params),
                Self::Vertical => vertical::update(count, area, params),
                Self::Spiral => spiral::update(count, area, params),
            },
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => HORIZONTAL,
            Self::Vertical => VERTICAL,
            Self::Spiral => SPIRAL,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            HORIZONTAL => Ok(Self::Horizontal),
            VERTICAL => Ok(Self::Vertical),
            SPIRAL => Ok(Self::Spiral),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// Resolves configured layout names, failing on the first one that is not a known layout.
///
/// # Errors
///
/// Returns the parse error of the first unknown name.
pub fn parse_layouts(names: &[String]) -> crate::errors::Result<Vec<Layout>> {
    names
        .iter()
        .map(|name| Ok(name.parse::<Layout>()?))
        .collect()
}

/// Splits the span `[start, end)` into `count` equal bands, returning the band edges.
pub(crate) fn band_edges(start: f64, end: f64, count: usize) -> Vec<f64> {
    let len = end - start;
    (0..=count)
        .map(|i| {
            if i == count {
                end
            } else {
                start + len * i as f64 / count as f64
            }
        })
        .collect()
}
