use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidArgument,
    CapacityExceeded { value: usize, limit: usize },
    OutOfMemory { requested_bytes: usize },
    InvalidState,
    UnsupportedMode(u32),
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidArgument, context.into())
    }

    /// `value` is the offending quantity, `limit` the largest valid one
    pub fn capacity_exceeded(what: &str, value: usize, limit: usize) -> Self {
        Error::new(
            ErrorKind::CapacityExceeded { value, limit },
            format!("{} is too large ! Value {}; max. valid: {}", what, value, limit),
        )
    }

    pub fn out_of_memory(what: &str, requested_bytes: usize) -> Self {
        Error::new(
            ErrorKind::OutOfMemory { requested_bytes },
            format!("Cannot allocate {} bytes for {}", requested_bytes, what),
        )
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            context: format!("Invalid configuration: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
