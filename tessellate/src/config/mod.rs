//! Tessellate general configuration

mod checks;
mod default;

use serde::{Deserialize, Serialize};
use tessellate_core::config::MinimizePolicy;
use tessellate_core::models::{Margins, WindowType};

/// Settings read from `config.toml`. Anything left out of the file takes its default.
///
/// # Example
///
/// ```toml
/// split_ratio = 0.6
/// layouts = ["spiral", "horizontal"]
/// minimize_policy = "Unregister"
///
/// [maximum_gaps]
/// top = 12.0
/// right = 12.0
/// bottom = 12.0
/// left = 12.0
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub split_ratio: f64,
    pub split_ratio_step: f64,
    pub master_count: usize,
    pub layouts: Vec<String>,
    pub auto_tile_window_types: Vec<WindowType>,
    pub maximize_single: bool,
    pub minimize_policy: MinimizePolicy,
    pub log_level: String,
    // Tables go last, toml cannot write plain values after them.
    pub margins: Margins,
    pub minimum_gaps: Margins,
    pub maximum_gaps: Margins,
}

impl tessellate_core::Config for Config {
    fn split_ratio(&self) -> f64 {
        self.split_ratio
    }

    fn split_ratio_step(&self) -> f64 {
        self.split_ratio_step
    }

    fn master_count(&self) -> usize {
        self.master_count
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn minimum_gaps(&self) -> Margins {
        self.minimum_gaps
    }

    fn maximum_gaps(&self) -> Margins {
        self.maximum_gaps
    }

    fn layouts(&self) -> Vec<String> {
        self.layouts.clone()
    }

    fn auto_tile_window_types(&self) -> Vec<WindowType> {
        self.auto_tile_window_types.clone()
    }

    fn maximize_single(&self) -> bool {
        self.maximize_single
    }

    fn minimize_policy(&self) -> MinimizePolicy {
        self.minimize_policy
    }

    fn set_split_ratio(&mut self, value: f64) {
        self.split_ratio = value;
    }

    fn set_master_count(&mut self, value: usize) {
        self.master_count = value;
    }
}
