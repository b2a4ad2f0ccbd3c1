use balance_blocks::BlockId;
use balance_session::InvalidLevel;
use std::{io, num::ParseIntError};

/// Utility enum to package any error that can occur while reading a command.
#[derive(Debug)]
pub enum Error {
    /// The command name is not known.
    UnknownCommand(String),

    /// Wrong number of arguments; holds the expected form of the command.
    Usage(&'static str),

    /// The level argument is not a number.
    LevelNumber(ParseIntError),

    /// The level number is out of range.
    Level(InvalidLevel),

    /// The block argument is not a handle.
    Block(ParseIntError),

    /// The side argument is neither `left` nor `right`.
    Side(String),

    /// No block of the current equation has this handle.
    NoSuchBlock(BlockId),

    /// Output could not be written.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => write!(f, "unknown command `{}`, type `help` for a list", name),
            Self::Usage(usage) => write!(f, "Format: {}", usage),
            Self::LevelNumber(err) => write!(f, "invalid level: {}", err),
            Self::Level(err) => write!(f, "{}", err),
            Self::Block(err) => write!(f, "invalid block handle: {}", err),
            Self::Side(err) => write!(f, "{}", err),
            Self::NoSuchBlock(id) => write!(f, "there is no block {}", id),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl From<InvalidLevel> for Error {
    fn from(error: InvalidLevel) -> Self {
        Self::Level(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
