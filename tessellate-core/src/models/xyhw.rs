//! Integer rectangles used for work areas and tile geometry.
#![allow(clippy::module_name_repetitions)]
use crate::models::Margins;
use serde::{Deserialize, Serialize};

/// A pixel addressed rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy, Hash)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    /// Builds a rectangle from floating point edges. Each edge is floored on its own so two
    /// rectangles built from a shared edge meet exactly.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let x = snap(left);
        let y = snap(top);
        let r = snap(right);
        let b = snap(bottom);
        Self {
            x,
            y,
            w: (r - x).max(0),
            h: (b - y).max(0),
        }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Half open hit test, the right and bottom edges belong to the neighbour.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        (self.x <= x && x < self.right()) && (self.y <= y && y < self.bottom())
    }

    #[must_use]
    pub const fn area(&self) -> u64 {
        self.h.unsigned_abs() as u64 * self.w.unsigned_abs() as u64
    }

    /// Shrinks the rectangle by the given insets.
    #[must_use]
    pub fn inset(&self, margins: &Margins) -> Self {
        let left = f64::from(self.x) + f64::from(margins.left);
        let top = f64::from(self.y) + f64::from(margins.top);
        let right = f64::from(self.right()) - f64::from(margins.right);
        let bottom = f64::from(self.bottom()) - f64::from(margins.bottom);
        Self::from_edges(left, top, right, bottom)
    }
}

// Absorbs representation error such as `0.7 * 1000.0 == 699.9999…`.
const EDGE_TOLERANCE: f64 = 1e-6;

fn snap(edge: f64) -> i32 {
    (edge + EDGE_TOLERANCE).floor() as i32
}
