use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A map needs at least one bucket to hash into.
    #[error("bucket count must be positive")]
    ZeroBuckets,

    #[error("No such option: {0}")]
    UnknownOption(String),

    #[error("Invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// The `n`th term does not fit in a u64.
    #[error("fibonacci term {n} overflows u64")]
    FibonacciOverflow { n: usize },

    #[error("{0}")]
    Command(String),

    /// Writing a response failed. Carries the `io::ErrorKind` and message
    /// rather than the `io::Error` itself so the enum stays comparable.
    #[error("Failed to write output: {message}")]
    Output {
        kind: std::io::ErrorKind,
        message: String,
    },

    /// Raised by the shell's `quit` command to end the read loop.
    #[error("Quitting!")]
    Quit,
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Output {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}
