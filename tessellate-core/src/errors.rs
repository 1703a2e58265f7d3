use crate::command::ParseCommandError;
use crate::layouts::ParseLayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TessellateError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TessellateError {
    #[error(transparent)]
    ParseLayout(#[from] ParseLayoutError),
    #[error(transparent)]
    ParseCommand(#[from] ParseCommandError),
}
