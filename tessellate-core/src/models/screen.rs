use super::{MonitorId, Xyhw};
use serde::{Deserialize, Serialize};

/// A monitor as reported by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: MonitorId,
    /// Full monitor bounds, used for pointer hit tests.
    pub bbox: Xyhw,
    /// Usable region of the active workspace on this monitor, excluding panels and docks.
    pub work_area: Xyhw,
}

impl Screen {
    #[must_use]
    pub const fn new(id: MonitorId, bbox: Xyhw) -> Self {
        Self {
            id,
            bbox,
            work_area: bbox,
        }
    }

    #[must_use]
    pub const fn with_work_area(mut self, work_area: Xyhw) -> Self {
        self.work_area = work_area;
        self
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.bbox.contains_point(x, y)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(0, Xyhw::new(0, 0, 1920, 1080))
    }
}
