use super::Config;
use tessellate_core::config::MinimizePolicy;
use tessellate_core::layouts::LAYOUTS;
use tessellate_core::models::{Margins, WindowType};

impl Default for Config {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            split_ratio_step: 0.05,
            master_count: 1,
            layouts: LAYOUTS.iter().map(ToString::to_string).collect(),
            auto_tile_window_types: vec![WindowType::Normal],
            maximize_single: false,
            minimize_policy: MinimizePolicy::Retain,
            log_level: "info".to_owned(),
            margins: Margins::new(0.0),
            minimum_gaps: Margins::new(0.0),
            maximum_gaps: Margins::new(0.0),
        }
    }
}
