use crate::pint::{AnWriteError, ExportError};
use std::fmt::{Display, Formatter};
use std::io;

impl From<io::Error> for AnWriteError {
    fn from(value: io::Error) -> Self {
        AnWriteError::Io(value)
    }
}

impl From<String> for AnWriteError {
    fn from(value: String) -> Self {
        AnWriteError::Expression(value)
    }
}

impl Display for AnWriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnWriteError::Expression(message) => write!(f, "{}", message),
            AnWriteError::Io(error) => write!(f, "Cannot write automata network: {}", error),
        }
    }
}

impl std::error::Error for AnWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnWriteError::Expression(_) => None,
            AnWriteError::Io(error) => Some(error),
        }
    }
}

impl<E> From<AnWriteError> for ExportError<E> {
    fn from(value: AnWriteError) -> Self {
        ExportError::Write(value)
    }
}

impl<E> From<io::Error> for ExportError<E> {
    fn from(value: io::Error) -> Self {
        ExportError::Write(AnWriteError::Io(value))
    }
}

impl<E: Display> Display for ExportError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Write(error) => write!(f, "{}", error),
            ExportError::Load(error) => write!(f, "Cannot load automata network: {}", error),
        }
    }
}

impl<E> std::error::Error for ExportError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Write(error) => Some(error),
            ExportError::Load(error) => Some(error),
        }
    }
}
