#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("No row for property '{0}'")]
    UnknownProperty(String),
    #[error("'{text}' is not a valid {expected}")]
    InvalidValue { text: String, expected: &'static str },
    #[error("'{0}' is not one of the listed options")]
    UnknownOption(String),
}

pub type CommandResult<T> = Result<T, CommandError>;
