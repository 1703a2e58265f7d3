use super::TileTarget;
use super::{Command, Config, Manager};
use crate::display_servers::DisplayServer;
use crate::layouts::clamp_split_ratio;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Processes a command and invokes the associated function.
    /// Returns true if changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {}", command);
        process_internal(self, *command).unwrap_or(false)
    }
}

fn process_internal<C: Config, SERVER: DisplayServer>(
    manager: &mut Manager<C, SERVER>,
    command: Command,
) -> Option<bool> {
    match command {
        Command::ToggleTile => Some(manager.toggle_tile()),

        Command::SwitchNextLayout => Some(
            manager
                .state
                .layout_manager
                .cycle_next_layout(&manager.config),
        ),
        Command::SwitchPreviousLayout => Some(
            manager
                .state
                .layout_manager
                .cycle_previous_layout(&manager.config),
        ),

        Command::FocusNextTile => Some(manager.focus_tile(TileTarget::Next)),
        Command::FocusPreviousTile => Some(manager.focus_tile(TileTarget::Previous)),
        Command::FocusFirstTile => Some(manager.focus_tile(TileTarget::First)),
        Command::SwapNextTile => Some(manager.swap_tile(TileTarget::Next)),
        Command::SwapPreviousTile => Some(manager.swap_tile(TileTarget::Previous)),
        Command::SwapFirstTile => Some(manager.swap_tile(TileTarget::First)),

        Command::IncreaseSplit => change_split_ratio(&mut manager.config, 1.0),
        Command::DecreaseSplit => change_split_ratio(&mut manager.config, -1.0),
        Command::IncreaseMasterCount => change_master_count(&mut manager.config, true),
        Command::DecreaseMasterCount => change_master_count(&mut manager.config, false),
    }
}

fn change_split_ratio<C: Config>(config: &mut C, direction: f64) -> Option<bool> {
    let current = config.split_ratio();
    let next = clamp_split_ratio(clamp_split_ratio(current) + direction * config.split_ratio_step());
    if (next - current).abs() < f64::EPSILON {
        return None;
    }
    tracing::debug!("Split ratio {} -> {}", current, next);
    config.set_split_ratio(next);
    Some(true)
}

fn change_master_count<C: Config>(config: &mut C, increase: bool) -> Option<bool> {
    let current = config.master_count();
    let next = if increase {
        current.saturating_add(1)
    } else {
        current.checked_sub(1)?
    };
    config.set_master_count(next);
    Some(true)
}
