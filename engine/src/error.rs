use std::fmt;

/// Errors produced by the storage engine.
///
/// Every error bubbles to the caller of `write`/`query` unchanged; the
/// engine never logs-and-continues on a storage error.
#[derive(Debug)]
pub enum Error {
    /// The underlying key-value store failed (get, put, batch, or iterator
    /// creation). Carries the store's own error message; never retried.
    StoreIO(String),

    /// A query referenced a column with no prior write.
    UnknownColumn { series: String, column: String },

    /// A stored value or schema record failed to deserialize.
    Decode(String),

    /// An input value violates an engine invariant (e.g. a name containing
    /// the `~` key-schema separator).
    Value(String),

    /// An unexpected internal state was reached; indicates a bug rather
    /// than bad input or a storage failure.
    Internal(String),
}

pub type CResult<T> = Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StoreIO(msg) => write!(f, "storage engine error: {}", msg),
            Error::UnknownColumn { series, column } => {
                write!(f, "field {:?} does not exist in series {:?}", column, series)
            }
            Error::Decode(msg) => write!(f, "decode error: {}", msg),
            Error::Value(msg) => write!(f, "invalid value: {}", msg),
            Error::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StoreIO(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Error::Internal(format!("lock poisoned: {}", err))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_column_message() {
        let err = Error::UnknownColumn { series: "cpu".into(), column: "value".into() };
        assert_eq!(err.to_string(), "field \"value\" does not exist in series \"cpu\"");
    }
}
