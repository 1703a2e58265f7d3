use super::{band_edges, LayoutParams};
use crate::models::Xyhw;

/// Layout which splits the area into two rows. The first `master_count` tiles share the top
/// row side by side, every other tile shares the bottom row.
/// ```text
/// +-----------------------+
/// |           1           |
/// +-----------+-----------+
/// |     2     |     3     |
/// +-----------+-----------+
/// ```
pub fn update(count: usize, area: &Xyhw, params: &LayoutParams) -> Vec<Xyhw> {
    let masters = params.effective_master_count(count);
    let top = f64::from(area.y);
    let bottom = f64::from(area.bottom());
    let split = match masters {
        0 => top,
        _ => top + f64::from(area.h) * params.split_ratio,
    };

    let mut rects = row(masters, top, split, area);
    rects.extend(row(count - masters, split, bottom, area));
    rects
}

fn row(count: usize, top: f64, bottom: f64, area: &Xyhw) -> Vec<Xyhw> {
    band_edges(f64::from(area.x), f64::from(area.right()), count)
        .windows(2)
        .map(|band| Xyhw::from_edges(band[0], top, band[1], bottom))
        .collect()
}
