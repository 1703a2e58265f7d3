use super::{band_edges, LayoutParams};
use crate::models::Xyhw;

/// Layout which splits the area into two columns. The first `master_count` tiles share the
/// left column, stacked top to bottom, every other tile shares the right column.
/// ```text
/// +-----------+-----------+
/// |           |     2     |
/// |     1     +-----------+
/// |           |     3     |
/// +-----------+-----------+
/// ```
pub fn update(count: usize, area: &Xyhw, params: &LayoutParams) -> Vec<Xyhw> {
    let masters = params.effective_master_count(count);
    let left = f64::from(area.x);
    let right = f64::from(area.right());
    let split = match masters {
        0 => left,
        _ => left + f64::from(area.w) * params.split_ratio,
    };

    let mut rects = column(masters, left, split, area);
    rects.extend(column(count - masters, split, right, area));
    rects
}

fn column(count: usize, left: f64, right: f64, area: &Xyhw) -> Vec<Xyhw> {
    band_edges(f64::from(area.y), f64::from(area.bottom()), count)
        .windows(2)
        .map(|band| Xyhw::from_edges(left, band[0], right, band[1]))
        .collect()
}
