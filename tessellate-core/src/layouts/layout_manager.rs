use super::Layout;
use crate::{config::Config, utils::helpers::relative_find};
use serde::{Deserialize, Serialize};

/// The [`LayoutManager`] tracks which of the configured layouts is active.
///
/// The configured list itself stays in the configuration, so edits to it take effect on the
/// next refresh without having to rebuild the manager.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutManager {
    /// Name of the active layout, as written in the configuration.
    current: Option<String>,
}

impl LayoutManager {
    /// Create a new [`LayoutManager`] from the config, starting on the first configured layout.
    pub fn new(config: &impl Config) -> Self {
        let layouts = config.layouts();
        tracing::debug!("Configured layouts: {:?}", layouts);
        warn_unknown(&layouts);
        Self {
            current: layouts.first().cloned(),
        }
    }

    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The active layout, or `None` when it is not (or no longer) a configured, known layout.
    pub fn layout(&self, config: &impl Config) -> Option<Layout> {
        let name = self.current.as_ref()?;
        if !config.layouts().contains(name) {
            return None;
        }
        name.parse().ok()
    }

    pub fn cycle_next_layout(&mut self, config: &impl Config) -> bool {
        self.cycle(config, 1)
    }

    pub fn cycle_previous_layout(&mut self, config: &impl Config) -> bool {
        self.cycle(config, -1)
    }

    /// Keeps the selection valid after a configuration change.
    pub fn load_config(&mut self, config: &impl Config) {
        let layouts = config.layouts();
        warn_unknown(&layouts);
        let still_configured = self
            .current
            .as_ref()
            .map_or(false, |name| layouts.contains(name));
        if !still_configured {
            self.current = layouts.first().cloned();
        }
    }

    fn cycle(&mut self, config: &impl Config, shift: i32) -> bool {
        let layouts = config.layouts();
        let next = match &self.current {
            Some(current) if layouts.contains(current) => {
                relative_find(&layouts, |name| name == current, shift, true)
            }
            // An unknown selection re-enters the list from the matching end.
            _ if shift >= 0 => layouts.first(),
            _ => layouts.last(),
        };
        let Some(next) = next.cloned() else {
            return false;
        };
        tracing::debug!("Switching layout to {}", next);
        self.current = Some(next);
        true
    }
}

fn warn_unknown(layouts: &[String]) {
    for name in layouts {
        if name.parse::<Layout>().is_err() {
            tracing::warn!("There is no Layout with the name {:?}", name);
        }
    }
    if layouts.is_empty() {
        tracing::warn!("No layouts configured, tiles will not be arranged");
    }
}
