mod minimize_policy;

use crate::layouts::LayoutParams;
pub use crate::models::Margins;
use crate::models::{GapBounds, WindowType};
pub use minimize_policy::MinimizePolicy;

/// The configuration store, as seen by the engine.
///
/// Values are read fresh on every refresh. Adjustment commands write back through the setters
/// and then request a refresh, the same path a change from outside would take.
pub trait Config {
    /// Fraction of the area given to the master partition.
    fn split_ratio(&self) -> f64;
    fn split_ratio_step(&self) -> f64;
    fn master_count(&self) -> usize;
    /// Inset applied to every monitor's work area before layout.
    fn margins(&self) -> Margins;
    fn minimum_gaps(&self) -> Margins;
    fn maximum_gaps(&self) -> Margins;
    /// Ordered layout names the layout commands cycle through.
    fn layouts(&self) -> Vec<String>;
    fn auto_tile_window_types(&self) -> Vec<WindowType>;
    /// Maximize a lone tile instead of laying it out.
    fn maximize_single(&self) -> bool;
    fn minimize_policy(&self) -> MinimizePolicy;

    fn set_split_ratio(&mut self, value: f64);
    fn set_master_count(&mut self, value: usize);

    fn gap_bounds(&self) -> GapBounds {
        GapBounds::new(self.minimum_gaps(), self.maximum_gaps())
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(self.split_ratio(), self.master_count())
    }
}
