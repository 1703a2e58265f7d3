use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Commands exposed to the host's key bindings.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    ToggleTile,
    SwitchNextLayout,
    SwitchPreviousLayout,
    FocusNextTile,
    FocusPreviousTile,
    FocusFirstTile,
    SwapNextTile,
    SwapPreviousTile,
    SwapFirstTile,
    IncreaseSplit,
    DecreaseSplit,
    IncreaseMasterCount,
    DecreaseMasterCount,
}

impl Command {
    pub const ALL: &'static [Command] = &[
        Command::ToggleTile,
        Command::SwitchNextLayout,
        Command::SwitchPreviousLayout,
        Command::FocusNextTile,
        Command::FocusPreviousTile,
        Command::FocusFirstTile,
        Command::SwapNextTile,
        Command::SwapPreviousTile,
        Command::SwapFirstTile,
        Command::IncreaseSplit,
        Command::DecreaseSplit,
        Command::IncreaseMasterCount,
        Command::DecreaseMasterCount,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToggleTile => "toggle-tile",
            Self::SwitchNextLayout => "switch-next-layout",
            Self::SwitchPreviousLayout => "switch-previous-layout",
            Self::FocusNextTile => "focus-next-tile",
            Self::FocusPreviousTile => "focus-previous-tile",
            Self::FocusFirstTile => "focus-first-tile",
            Self::SwapNextTile => "swap-next-tile",
            Self::SwapPreviousTile => "swap-previous-tile",
            Self::SwapFirstTile => "swap-first-tile",
            Self::IncreaseSplit => "increase-split",
            Self::DecreaseSplit => "decrease-split",
            Self::IncreaseMasterCount => "increase-master-count",
            Self::DecreaseMasterCount => "decrease-master-count",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_their_names() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(*command));
        }
        assert_eq!(" Swap-First-Tile ".parse(), Ok(Command::SwapFirstTile));
        assert!("close-window".parse::<Command>().is_err());
    }

    #[test]
    fn serde_uses_the_same_names() {
        for command in Command::ALL {
            let json = serde_json::to_string(command).unwrap();
            assert_eq!(json, format!("\"{}\"", command.name()));
        }
    }
}
