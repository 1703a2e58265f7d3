use super::LayoutParams;
use crate::models::Xyhw;

/// Side of the remaining region the next tile is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    const fn next(self) -> Self {
        match self {
            Self::Left => Self::Top,
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Region {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Region {
    /// Cuts `ratio` of the region off `side`, returning the cut and what remains.
    fn cut(self, side: Side, ratio: f64) -> (Self, Self) {
        let width = self.right - self.left;
        let height = self.bottom - self.top;
        match side {
            Side::Left => {
                let edge = self.left + width * ratio;
                (Self { right: edge, ..self }, Self { left: edge, ..self })
            }
            Side::Top => {
                let edge = self.top + height * ratio;
                (Self { bottom: edge, ..self }, Self { top: edge, ..self })
            }
            Side::Right => {
                let edge = self.right - width * ratio;
                (Self { left: edge, ..self }, Self { right: edge, ..self })
            }
            Side::Bottom => {
                let edge = self.bottom - height * ratio;
                (Self { top: edge, ..self }, Self { bottom: edge, ..self })
            }
        }
    }

    fn to_xyhw(self) -> Xyhw {
        Xyhw::from_edges(self.left, self.top, self.right, self.bottom)
    }
}

/// Spiral layout. Every tile takes `split_ratio` of the remaining region, cut from the left,
/// top, right and bottom in turn. The last tile takes whatever is left.
/// ```text
/// +-----------+-----------+
/// |           |     2     |
/// |           +-----+-----+
/// |     1     |  5  |     |
/// |           +-----+  3  |
/// |           |  4  |     |
/// +-----------+-----+-----+
/// ```
pub fn update(count: usize, area: &Xyhw, params: &LayoutParams) -> Vec<Xyhw> {
    let mut rects = Vec::with_capacity(count);
    let mut region = Region {
        left: f64::from(area.x),
        top: f64::from(area.y),
        right: f64::from(area.right()),
        bottom: f64::from(area.bottom()),
    };
    let mut side = Side::Left;
    for _ in 1..count {
        let (tile, rest) = region.cut(side, params.split_ratio);
        rects.push(tile.to_xyhw());
        region = rest;
        side = side.next();
    }
    if count > 0 {
        rects.push(region.to_xyhw());
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_tiles_turn_clockwise() {
        let area = Xyhw::new(0, 0, 800, 600);
        let rects = update(4, &area, &LayoutParams::new(0.5, 0));
        assert_eq!(
            rects,
            vec![
                Xyhw::new(0, 0, 400, 600),
                Xyhw::new(400, 0, 400, 300),
                Xyhw::new(600, 300, 200, 300),
                Xyhw::new(400, 300, 200, 300),
            ]
        );
    }

    #[test]
    fn six_tiles_cut_from_the_bottom_then_the_left_again() {
        let area = Xyhw::new(0, 0, 800, 600);
        let rects = update(6, &area, &LayoutParams::new(0.5, 0));
        assert_eq!(rects[3], Xyhw::new(400, 450, 200, 150));
        assert_eq!(rects[4], Xyhw::new(400, 300, 100, 150));
        assert_eq!(rects[5], Xyhw::new(500, 300, 100, 150));
    }

    #[test]
    fn uneven_ratio_gives_each_tile_the_ratio_of_what_remains() {
        let area = Xyhw::new(0, 0, 1000, 1000);
        let rects = update(3, &area, &LayoutParams::new(0.6, 0));
        assert_eq!(
            rects,
            vec![
                Xyhw::new(0, 0, 600, 1000),
                Xyhw::new(600, 0, 400, 600),
                Xyhw::new(600, 600, 400, 400),
            ]
        );
    }

    #[test]
    fn spiral_covers_the_area_without_overlap() {
        let area = Xyhw::new(5, 9, 1283, 711);
        for count in 1..20 {
            let rects = update(count, &area, &LayoutParams::new(0.55, 0));
            let total: u64 = rects.iter().map(Xyhw::area).sum();
            assert_eq!(total, area.area(), "count {count}");
        }
    }

    #[test]
    fn large_tile_counts_do_not_recurse() {
        let area = Xyhw::new(0, 0, 1920, 1080);
        let rects = update(10_000, &area, &LayoutParams::new(0.5, 0));
        assert_eq!(rects.len(), 10_000);
    }
}
